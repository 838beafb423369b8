use thiserror::Error;

/// Auto-match was asked to pair an empty side
///
/// This is a user-correctable condition: the whole request is rejected and no
/// partial result is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EmptyInputError {
    #[error("No properties available to match")]
    NoProperties,

    #[error("No buyers available to match")]
    NoBuyers,
}

/// Errors returned by the `Matcher` entry points
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error(transparent)]
    EmptyInput(#[from] EmptyInputError),

    #[error("Matching would consider {pairs} candidate pairs, above the limit of {limit}")]
    TooManyCandidates { pairs: usize, limit: usize },
}
