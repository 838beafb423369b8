use crate::models::{Buyer, Property, Tag};

/// Desirability of a pair: the number of tags shared by property and buyer
///
/// Always within `0..=min(|property.tags|, |buyer.tags|)`.
#[inline]
pub fn score(property: &Property, buyer: &Buyer) -> usize {
    property.tags.overlap(&buyer.tags)
}

/// Affordability cushion of a pair: budget minus price
///
/// Only meaningful for compatible pairs. An incompatible pair saturates at
/// zero rather than underflowing.
#[inline]
pub fn gap(property: &Property, buyer: &Buyer) -> u64 {
    buyer.budget.saturating_sub(property.price)
}

/// The tags behind `score`, in sorted order
pub fn shared_tags(property: &Property, buyer: &Buyer) -> Vec<Tag> {
    property.tags.shared_with(&buyer.tags).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TagSet;

    fn tags(raw: &[&str]) -> TagSet {
        raw.iter().collect()
    }

    #[test]
    fn test_score_counts_shared_tags() {
        let property = Property::new("Loft", 100, tags(&["a", "b", "c"]));
        let buyer = Buyer::new("Ann", 150, tags(&["B", "c", "d"]));

        assert_eq!(score(&property, &buyer), 2);
        let shared: Vec<String> = shared_tags(&property, &buyer)
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(shared, vec!["b", "c"]);
    }

    #[test]
    fn test_score_is_symmetric_in_tags() {
        let property = Property::new("Loft", 100, tags(&["x", "y"]));
        let buyer = Buyer::new("Ann", 150, tags(&["y", "z"]));
        let mirrored_property = Property::new("Loft", 100, tags(&["y", "z"]));
        let mirrored_buyer = Buyer::new("Ann", 150, tags(&["x", "y"]));

        assert_eq!(score(&property, &buyer), score(&mirrored_property, &mirrored_buyer));
    }

    #[test]
    fn test_score_zero_without_tags() {
        let property = Property::new("Loft", 100, TagSet::new());
        let buyer = Buyer::new("Ann", 150, tags(&["x"]));
        assert_eq!(score(&property, &buyer), 0);
    }

    #[test]
    fn test_gap_is_budget_minus_price() {
        let property = Property::new("Loft", 100, TagSet::new());
        let buyer = Buyer::new("Ann", 150, TagSet::new());
        assert_eq!(gap(&property, &buyer), 50);

        let exact = Buyer::new("Bob", 100, TagSet::new());
        assert_eq!(gap(&property, &exact), 0);
    }

    #[test]
    fn test_gap_saturates_for_incompatible_pair() {
        let property = Property::new("Loft", 200, TagSet::new());
        let buyer = Buyer::new("Ann", 100, TagSet::new());
        assert_eq!(gap(&property, &buyer), 0);
    }
}
