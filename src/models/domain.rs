use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use validator::{Validate, ValidationError};

/// A normalized label attached to properties and buyers
///
/// Normalization trims the label, collapses internal whitespace runs to a
/// single space and lowercases it, so `"  Sea   View"` and `"sea view"` are
/// the same tag.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    /// Normalize a raw label, returning `None` if nothing is left of it
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Tag {
    type Error = &'static str;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw).ok_or("tag must not be blank")
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unordered, deduplicated set of tags
///
/// Backed by a `BTreeSet` so iteration and serialized output are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TagSet(BTreeSet<Tag>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, tag: &Tag) -> bool {
        self.0.contains(tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.0.iter()
    }

    /// Tags present in both sets, in sorted order
    pub fn shared_with<'a>(&'a self, other: &'a TagSet) -> impl Iterator<Item = &'a Tag> {
        self.0.intersection(&other.0)
    }

    /// Size of the intersection with `other`
    pub fn overlap(&self, other: &TagSet) -> usize {
        self.shared_with(other).count()
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().filter_map(|raw| Tag::parse(raw.as_ref())).collect())
    }
}

impl From<Vec<String>> for TagSet {
    fn from(raw: Vec<String>) -> Self {
        raw.into_iter().collect()
    }
}

impl From<TagSet> for Vec<String> {
    fn from(tags: TagSet) -> Self {
        tags.0.into_iter().map(String::from).collect()
    }
}

/// Identity key for a record name: trimmed and case-folded
fn identity_key(name: &str) -> String {
    name.trim().to_lowercase()
}

fn validate_record_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("blank_name"));
    }
    Ok(())
}

/// A real-estate listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Property {
    #[validate(custom(function = "validate_record_name"))]
    pub name: String,
    #[validate(range(min = 1))]
    pub price: u64,
    #[serde(default)]
    pub tags: TagSet,
}

impl Property {
    pub fn new(name: impl Into<String>, price: u64, tags: TagSet) -> Self {
        Self {
            name: name.into(),
            price,
            tags,
        }
    }

    /// Case-insensitive, trimmed name used to tell properties apart
    pub fn identity(&self) -> String {
        identity_key(&self.name)
    }
}

/// A prospective purchaser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Buyer {
    #[validate(custom(function = "validate_record_name"))]
    pub name: String,
    /// Maximum acceptable price
    #[validate(range(min = 1))]
    pub budget: u64,
    #[serde(default)]
    pub tags: TagSet,
}

impl Buyer {
    pub fn new(name: impl Into<String>, budget: u64, tags: TagSet) -> Self {
        Self {
            name: name.into(),
            budget,
            tags,
        }
    }

    /// Case-insensitive, trimmed name used to tell buyers apart
    pub fn identity(&self) -> String {
        identity_key(&self.name)
    }
}

/// Confirmed pairing produced by auto-match
///
/// `property.price <= buyer.budget` always holds; a `Match` can only be built
/// from a compatible candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub property: Property,
    pub buyer: Buyer,
    /// Number of shared tags
    pub score: usize,
    /// Budget minus price
    pub gap: u64,
    #[serde(rename = "sharedTags")]
    pub shared_tags: Vec<Tag>,
}

/// Caller-side bounds on a single matching run
#[derive(Debug, Clone, Copy)]
pub struct MatchingLimits {
    /// Largest number of property/buyer pairs a run may consider
    pub max_candidate_pairs: usize,
}

impl Default for MatchingLimits {
    fn default() -> Self {
        Self {
            max_candidate_pairs: 250_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_normalization() {
        let tag = Tag::parse("  Sea   View ").unwrap();
        assert_eq!(tag.as_str(), "sea view");
        assert_eq!(Tag::parse("SEA VIEW"), Some(tag));
        assert_eq!(Tag::parse("   "), None);
    }

    #[test]
    fn test_tag_set_dedupes_and_drops_blanks() {
        let tags: TagSet = ["Garden", "garden ", "", "Pool"].into_iter().collect();
        assert_eq!(tags.len(), 2);
        assert!(tags.contains(&Tag::parse("pool").unwrap()));
    }

    #[test]
    fn test_tag_set_overlap() {
        let a: TagSet = ["a", "b", "c"].into_iter().collect();
        let b: TagSet = ["C", "d", "a"].into_iter().collect();
        assert_eq!(a.overlap(&b), 2);
        let shared: Vec<&str> = a.shared_with(&b).map(Tag::as_str).collect();
        assert_eq!(shared, vec!["a", "c"]);
    }

    #[test]
    fn test_identity_is_case_insensitive() {
        let a = Property::new(" Maple Court ", 100, TagSet::new());
        let b = Property::new("maple court", 200, TagSet::new());
        assert_eq!(a.identity(), b.identity());
    }

    #[test]
    fn test_record_validation() {
        assert!(Property::new("Villa", 100, TagSet::new()).validate().is_ok());
        assert!(Property::new("  ", 100, TagSet::new()).validate().is_err());
        assert!(Buyer::new("Alice", 0, TagSet::new()).validate().is_err());
    }

    #[test]
    fn test_tag_set_json_shape() {
        let property: Property =
            serde_json::from_str(r#"{"name":"Loft","price":10,"tags":["Pool","pool","City "]}"#)
                .unwrap();
        assert_eq!(property.tags.len(), 2);

        let json = serde_json::to_value(&property).unwrap();
        assert_eq!(json["tags"], serde_json::json!(["city", "pool"]));
    }
}
