// Unit tests for Estate Match

use estate_match::core::{
    allocate, compatible_candidates, gap, global_ranking, outcome_message, presentation_order,
    score, MatchCandidate, MatchError, Matcher,
};
use estate_match::{Buyer, EmptyInputError, MatchingLimits, Property, TagSet};

#[test]
fn test_candidate_enumeration_skips_incompatible_pairs() {
    let properties = vec![
        Property::new("Cheap", 100, TagSet::new()),
        Property::new("Pricey", 900, TagSet::new()),
    ];
    let buyers = vec![
        Buyer::new("Small", 150, TagSet::new()),
        Buyer::new("Large", 1_000, TagSet::new()),
    ];

    let pairs: Vec<(String, String)> = compatible_candidates(&properties, &buyers)
        .iter()
        .map(|c| (c.property().name.clone(), c.buyer().name.clone()))
        .collect();

    assert_eq!(
        pairs,
        vec![
            ("Cheap".to_string(), "Small".to_string()),
            ("Cheap".to_string(), "Large".to_string()),
            ("Pricey".to_string(), "Large".to_string()),
        ]
    );
}

#[test]
fn test_candidate_matches_scorer() {
    let property = Property::new("Loft", 250, ["city", "garage"].into_iter().collect());
    let buyer = Buyer::new("Ann", 300, ["City", "pool"].into_iter().collect());

    let candidate = MatchCandidate::new(&property, &buyer).unwrap();

    assert_eq!(candidate.score(), score(&property, &buyer));
    assert_eq!(candidate.gap(), gap(&property, &buyer));
    assert_eq!(candidate.gap(), 50);
}

#[test]
fn test_allocate_skips_used_buyer() {
    let properties = vec![
        Property::new("A", 100, ["pool"].into_iter().collect()),
        Property::new("B", 100, ["pool"].into_iter().collect()),
    ];
    let buyers = vec![Buyer::new("Only", 100, ["pool"].into_iter().collect())];

    let ranked = global_ranking(&properties, &buyers);
    assert_eq!(ranked.len(), 2);

    let matches = allocate(&ranked);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].property.name, "A");
}

#[test]
fn test_presentation_order_is_stable() {
    let properties = vec![
        Property::new("First", 100, TagSet::new()),
        Property::new("Second", 100, TagSet::new()),
    ];
    let buyers = vec![
        Buyer::new("X", 100, TagSet::new()),
        Buyer::new("Y", 100, TagSet::new()),
    ];

    let matches = allocate(&global_ranking(&properties, &buyers));
    let ordered = presentation_order(matches);

    assert_eq!(ordered[0].property.name, "First");
    assert_eq!(ordered[1].property.name, "Second");
}

#[test]
fn test_outcome_messages() {
    assert_eq!(outcome_message(1), "1 match found");
    assert_eq!(outcome_message(0), "0 matches found");
    assert_eq!(outcome_message(12), "12 matches found");
}

#[test]
fn test_error_messages() {
    assert_eq!(
        EmptyInputError::NoProperties.to_string(),
        "No properties available to match"
    );
    assert_eq!(
        MatchError::from(EmptyInputError::NoBuyers).to_string(),
        "No buyers available to match"
    );
    assert_eq!(
        MatchError::TooManyCandidates { pairs: 10, limit: 5 }.to_string(),
        "Matching would consider 10 candidate pairs, above the limit of 5"
    );
}

#[test]
fn test_matcher_within_limit() {
    let matcher = Matcher::new(MatchingLimits {
        max_candidate_pairs: 4,
    });

    let outcome = matcher
        .auto_match(
            vec![
                Property::new("P1", 100, TagSet::new()),
                Property::new("P2", 100, TagSet::new()),
            ],
            vec![
                Buyer::new("B1", 100, TagSet::new()),
                Buyer::new("B2", 100, TagSet::new()),
            ],
        )
        .unwrap();

    assert_eq!(outcome.matches.len(), 2);
}

#[test]
fn test_matcher_ranking_passthrough() {
    let matcher = Matcher::default();
    let buyer = Buyer::new("Ann", 300, ["garden"].into_iter().collect());

    let ranked: Vec<String> = matcher
        .rank_properties_for_buyer(
            &buyer,
            vec![
                Property::new("Plain", 100, TagSet::new()),
                Property::new("Green", 250, ["Garden"].into_iter().collect()),
            ],
        )
        .unwrap()
        .map(|p| p.name)
        .collect();

    assert_eq!(ranked, vec!["Green", "Plain"]);
}
