// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! RelevanceScorer: the math behind a single text's score.
//!
//! Presence, not frequency. A term that appears once and a term that appears
//! fifty times contribute the same, its length in chars. Longer matches are
//! worth more because they are more specific, and a quoted phrase is worth
//! double its length so one phrase beats the same words matched loosely.
//!
//! ```text
//! base  = Σ len(term)            distinct terms present
//!       + Σ len(phrase) × 2      distinct phrases present
//!       + Σ len(value)           distinct field values present
//!       + Σ len(best alt)        OR-groups, only if every group is satisfied
//!       - Σ len(excluded)        distinct excluded terms present
//! score = max(base, 0) × weight
//! ```
//!
//! # Invariants
//!
//! - No match of any kind gives exactly `0.0`, whatever the weight.
//! - Linear in weight: `score(t, q, a × b) = score(t, q, a) × b`.
//! - Never negative: exclusions floor at zero and negative weights count as zero.

use std::collections::HashSet;

use serde::Serialize;

use crate::contracts::check_score_valid;
use crate::types::ParsedQuery;
use crate::utils::{char_len, FoldedText};

/// Multiplier applied to the length of a matched exact phrase.
pub const PHRASE_BONUS_MULTIPLIER: usize = 2;

/// Neutral weight for callers without a per-record boost.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Where a base score came from. Every component is in chars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub terms: usize,
    /// Already multiplied by [`PHRASE_BONUS_MULTIPLIER`].
    pub phrases: usize,
    pub fields: usize,
    /// Zero unless every OR-group is satisfied.
    pub or_groups: usize,
    pub penalty: usize,
}

impl ScoreBreakdown {
    /// Sum of contributions minus the exclusion penalty, floored at zero.
    pub fn base(&self) -> usize {
        (self.terms + self.phrases + self.fields + self.or_groups).saturating_sub(self.penalty)
    }

    /// What free-text matchers (terms, phrases, OR-groups) contributed.
    pub fn text_matches(&self) -> usize {
        self.terms + self.phrases + self.or_groups
    }

    /// The final score for this breakdown under `weight`.
    pub fn weighted(&self, weight: f64) -> f64 {
        let base = self.base();
        // INVARIANT: ZERO_MATCH_IS_ZERO
        // No weight (not even infinity) may lift a zero base.
        let score = if base == 0 {
            0.0
        } else {
            base as f64 * weight.max(0.0)
        };
        check_score_valid(score, weight);
        score
    }
}

/// Score `text` against `query`, scaled by `weight`.
///
/// Field queries degrade to substring matches against `text`. To scope them to
/// one field, pass that field's text and a query from
/// [`ParsedQuery::scoped_to`].
///
/// ```
/// use seekr::{calculate_relevance_score, parse_search_query};
///
/// let query = parse_search_query("париж отдых");
/// assert_eq!(calculate_relevance_score("Отдых в Париже", &query, 1.0), 10.0);
/// ```
pub fn calculate_relevance_score(text: &str, query: &ParsedQuery, weight: f64) -> f64 {
    score_breakdown(text, query).weighted(weight)
}

/// The per-category contributions behind a score.
pub fn score_breakdown(text: &str, query: &ParsedQuery) -> ScoreBreakdown {
    let text = FoldedText::new(text);

    ScoreBreakdown {
        terms: distinct_present_len(&text, query.terms().iter().map(String::as_str)),
        phrases: distinct_present_len(&text, query.exact_phrases().iter().map(String::as_str))
            * PHRASE_BONUS_MULTIPLIER,
        fields: distinct_present_len(
            &text,
            query.field_queries().iter().map(|fq| fq.value.as_str()),
        ),
        or_groups: or_group_len(&text, query.or_queries()),
        penalty: distinct_present_len(&text, query.excluded_terms().iter().map(String::as_str)),
    }
}

/// Total char length of the distinct needles found in `text`.
fn distinct_present_len<'q>(
    text: &FoldedText,
    needles: impl Iterator<Item = &'q str>,
) -> usize {
    let mut seen = HashSet::new();
    needles
        .filter(|needle| seen.insert(*needle))
        .filter(|needle| text.contains(needle))
        .map(char_len)
        .sum()
}

/// Sum of each group's longest matching alternative, or zero if any group has no match.
fn or_group_len(text: &FoldedText, groups: &[Vec<String>]) -> usize {
    let mut total = 0;
    for group in groups {
        let best = group
            .iter()
            .filter(|alternative| text.contains(alternative))
            .map(|alternative| char_len(alternative))
            .max();
        match best {
            Some(len) => total += len,
            None => return 0,
        }
    }
    total
}
