// Core algorithm exports
pub mod errors;
pub mod filters;
pub mod matcher;
pub mod ranking;
pub mod results;
pub mod scoring;

pub use errors::{EmptyInputError, MatchError};
pub use filters::{affordable_buyers, affordable_properties, is_compatible};
pub use matcher::{allocate, auto_match, Matcher};
pub use ranking::{
    compatible_candidates, global_ranking, rank_buyers_for_property, rank_properties_for_buyer,
    MatchCandidate,
};
pub use results::{assemble, outcome_message, presentation_order, AutoMatchOutcome};
pub use scoring::{gap, score, shared_tags};
