// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for score calculation invariants.
//!
//! Scores must be finite, non-negative and deterministic, and scale linearly
//! with the weight.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use seekr::{calculate_relevance_score, parse_search_query, score_breakdown};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    query: &'a str,
    text: &'a str,
    weight: u16,
}

fuzz_target!(|input: Input<'_>| {
    let query = parse_search_query(input.query);
    let weight = f64::from(input.weight) / 100.0;

    let score = calculate_relevance_score(input.text, &query, weight);
    assert!(score.is_finite() && score >= 0.0);
    assert_eq!(score, calculate_relevance_score(input.text, &query, weight));

    let base = score_breakdown(input.text, &query).base() as f64;
    assert_eq!(calculate_relevance_score(input.text, &query, 1.0), base);
    if base == 0.0 {
        assert_eq!(score, 0.0);
    }
});
