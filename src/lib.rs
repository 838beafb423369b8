//! Estate Match - buyer/property matching engine
//!
//! This library pairs real-estate listings with prospective buyers. It
//! provides a greedy one-to-one auto-match over all visible records and
//! one-to-many ranking of counterparts for a single selected record.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{
    auto_match, is_compatible, rank_buyers_for_property, rank_properties_for_buyer,
    AutoMatchOutcome, EmptyInputError, MatchError, Matcher,
};
pub use crate::models::{Buyer, Match, MatchingLimits, Property, Tag, TagSet};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let property = Property::new("Loft", 100, TagSet::new());
        let buyer = Buyer::new("Ann", 100, TagSet::new());
        assert!(is_compatible(&property, &buyer));
    }
}
