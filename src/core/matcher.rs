use std::collections::HashSet;

use crate::core::{
    errors::{EmptyInputError, MatchError},
    ranking::{global_ranking, rank_buyers_for_property, rank_properties_for_buyer, MatchCandidate},
    results::{assemble, AutoMatchOutcome},
    scoring::shared_tags,
};
use crate::models::{Buyer, Match, MatchingLimits, Property};

/// Confirm a disjoint set of pairs from an already ranked candidate list
///
/// Single left-to-right pass: a candidate is confirmed when neither its
/// property nor its buyer has been used yet, and skipped for good otherwise.
/// No backtracking, so the result is a valid matching but not necessarily a
/// maximum one.
pub fn allocate(ranked: &[MatchCandidate<'_>]) -> Vec<Match> {
    let mut used_properties: HashSet<String> = HashSet::new();
    let mut used_buyers: HashSet<String> = HashSet::new();
    let mut matches = Vec::new();

    for candidate in ranked {
        let property = candidate.property();
        let buyer = candidate.buyer();

        let property_key = property.identity();
        let buyer_key = buyer.identity();

        if used_properties.contains(&property_key) || used_buyers.contains(&buyer_key) {
            continue;
        }

        used_properties.insert(property_key);
        used_buyers.insert(buyer_key);

        matches.push(Match {
            property: property.clone(),
            buyer: buyer.clone(),
            score: candidate.score(),
            gap: candidate.gap(),
            shared_tags: shared_tags(property, buyer),
        });
    }

    matches
}

/// Greedily pair properties with buyers
///
/// Both sides are snapshots owned by this call. Fails if either side is
/// empty; otherwise returns the confirmed matches in presentation order
/// together with the count message.
pub fn auto_match(
    properties: Vec<Property>,
    buyers: Vec<Buyer>,
) -> Result<AutoMatchOutcome, EmptyInputError> {
    if properties.is_empty() {
        return Err(EmptyInputError::NoProperties);
    }
    if buyers.is_empty() {
        return Err(EmptyInputError::NoBuyers);
    }

    let ranked = global_ranking(&properties, &buyers);
    let matches = allocate(&ranked);

    tracing::debug!(
        "Confirmed {} matches from {} ranked candidates",
        matches.len(),
        ranked.len()
    );

    Ok(assemble(matches))
}

/// Matching entry point used by the HTTP layer
///
/// Wraps the pure engine functions and refuses runs larger than the
/// configured limits before any work is done.
#[derive(Debug, Clone)]
pub struct Matcher {
    limits: MatchingLimits,
}

impl Matcher {
    pub fn new(limits: MatchingLimits) -> Self {
        Self { limits }
    }

    pub fn with_default_limits() -> Self {
        Self {
            limits: MatchingLimits::default(),
        }
    }

    pub fn limits(&self) -> MatchingLimits {
        self.limits
    }

    fn check_pairs(&self, pairs: usize) -> Result<(), MatchError> {
        let limit = self.limits.max_candidate_pairs;
        if pairs > limit {
            return Err(MatchError::TooManyCandidates { pairs, limit });
        }
        Ok(())
    }

    /// Pair every property with at most one buyer and vice versa
    pub fn auto_match(
        &self,
        properties: Vec<Property>,
        buyers: Vec<Buyer>,
    ) -> Result<AutoMatchOutcome, MatchError> {
        if properties.is_empty() {
            return Err(EmptyInputError::NoProperties.into());
        }
        if buyers.is_empty() {
            return Err(EmptyInputError::NoBuyers.into());
        }

        self.check_pairs(properties.len().saturating_mul(buyers.len()))?;

        Ok(auto_match(properties, buyers)?)
    }

    /// Rank the buyers able to afford `property`
    pub fn rank_buyers_for_property(
        &self,
        property: &Property,
        buyers: Vec<Buyer>,
    ) -> Result<impl Iterator<Item = Buyer>, MatchError> {
        self.check_pairs(buyers.len())?;
        Ok(rank_buyers_for_property(property, buyers))
    }

    /// Rank the properties within `buyer`'s budget
    pub fn rank_properties_for_buyer(
        &self,
        buyer: &Buyer,
        properties: Vec<Property>,
    ) -> Result<impl Iterator<Item = Property>, MatchError> {
        self.check_pairs(properties.len())?;
        Ok(rank_properties_for_buyer(buyer, properties))
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_limits()
    }
}
