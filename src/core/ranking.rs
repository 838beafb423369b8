use std::cmp::{Ordering, Reverse};

use crate::core::{
    filters::{affordable_buyers, affordable_properties, is_compatible},
    scoring::{gap, score},
};
use crate::models::{Buyer, Property};

/// A compatible property/buyer pair under consideration by the allocator
///
/// Only built through [`MatchCandidate::new`], which rejects pairs whose
/// price exceeds the budget, so every candidate (and every match confirmed
/// from one) satisfies the budget constraint.
#[derive(Debug, Clone, Copy)]
pub struct MatchCandidate<'a> {
    property: &'a Property,
    buyer: &'a Buyer,
    score: usize,
    gap: u64,
}

impl<'a> MatchCandidate<'a> {
    pub fn new(property: &'a Property, buyer: &'a Buyer) -> Option<Self> {
        if !is_compatible(property, buyer) {
            return None;
        }

        Some(Self {
            property,
            buyer,
            score: score(property, buyer),
            gap: gap(property, buyer),
        })
    }

    pub fn property(&self) -> &'a Property {
        self.property
    }

    pub fn buyer(&self) -> &'a Buyer {
        self.buyer
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn gap(&self) -> u64 {
        self.gap
    }
}

/// Selection order: score descending, then gap ascending
#[inline]
fn selection_order(a: &MatchCandidate<'_>, b: &MatchCandidate<'_>) -> Ordering {
    b.score.cmp(&a.score).then_with(|| a.gap.cmp(&b.gap))
}

/// Every compatible pair from the cross product, properties outer and buyers inner
pub fn compatible_candidates<'a>(
    properties: &'a [Property],
    buyers: &'a [Buyer],
) -> Vec<MatchCandidate<'a>> {
    properties
        .iter()
        .flat_map(|property| {
            buyers
                .iter()
                .filter_map(move |buyer| MatchCandidate::new(property, buyer))
        })
        .collect()
}

/// Rank all compatible pairs for auto-match
///
/// Candidates with equal score and gap keep their enumeration order (the sort
/// is stable), so identical inputs always produce the same ranking.
pub fn global_ranking<'a>(
    properties: &'a [Property],
    buyers: &'a [Buyer],
) -> Vec<MatchCandidate<'a>> {
    let mut candidates = compatible_candidates(properties, buyers);
    candidates.sort_by(selection_order);

    tracing::debug!(
        "Ranked {} compatible pairs out of {} properties x {} buyers",
        candidates.len(),
        properties.len(),
        buyers.len()
    );

    candidates
}

/// Rank the buyers who can afford `property`
///
/// Order: shared tags descending, then budget descending. Ties keep input
/// order. The returned iterator is single-pass; call again for a fresh one.
pub fn rank_buyers_for_property(
    property: &Property,
    buyers: Vec<Buyer>,
) -> impl Iterator<Item = Buyer> {
    let mut ranked: Vec<(usize, Buyer)> = affordable_buyers(property, buyers)
        .map(|buyer| (score(property, &buyer), buyer))
        .collect();

    ranked.sort_by_key(|(score, buyer)| (Reverse(*score), Reverse(buyer.budget)));

    tracing::debug!(
        "Ranked {} buyers for property {}",
        ranked.len(),
        property.name
    );

    ranked.into_iter().map(|(_, buyer)| buyer)
}

/// Rank the properties within `buyer`'s budget
///
/// Order: shared tags descending, then price ascending. Ties keep input
/// order. The returned iterator is single-pass; call again for a fresh one.
pub fn rank_properties_for_buyer(
    buyer: &Buyer,
    properties: Vec<Property>,
) -> impl Iterator<Item = Property> {
    let mut ranked: Vec<(usize, Property)> = affordable_properties(buyer, properties)
        .map(|property| (score(&property, buyer), property))
        .collect();

    ranked.sort_by_key(|(score, property)| (Reverse(*score), property.price));

    tracing::debug!(
        "Ranked {} properties for buyer {}",
        ranked.len(),
        buyer.name
    );

    ranked.into_iter().map(|(_, property)| property)
}
