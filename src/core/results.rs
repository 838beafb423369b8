use serde::Serialize;

use crate::models::Match;

/// Matches confirmed by one auto-match run, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutoMatchOutcome {
    pub matches: Vec<Match>,
    pub message: String,
}

/// Order confirmed matches for display: score descending, then gap descending
///
/// Note the gap direction is the reverse of candidate selection: once pairs
/// are confirmed, the larger affordability cushion is shown first.
pub fn presentation_order(mut matches: Vec<Match>) -> Vec<Match> {
    matches.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| b.gap.cmp(&a.gap)));
    matches
}

/// Human-facing count message for an auto-match run
pub fn outcome_message(count: usize) -> String {
    if count == 1 {
        "1 match found".to_string()
    } else {
        format!("{} matches found", count)
    }
}

/// Sort confirmed matches for display and attach the count message
pub fn assemble(matches: Vec<Match>) -> AutoMatchOutcome {
    let matches = presentation_order(matches);
    let message = outcome_message(matches.len());

    AutoMatchOutcome { matches, message }
}
