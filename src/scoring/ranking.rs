// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Record ranking: per-field scores combined into one ordered page.
//!
//! The scorer knows nothing about fields. This layer does the combining:
//!
//! 1. **Filter** - each `field:value` on an allowed field must hold for the
//!    record's own field text. Unknown fields are ignored; rejecting them is the
//!    validator's job.
//! 2. **Score** - the sum over weighted fields of
//!    `calculate_relevance_score(field_text, query.scoped_to(field), weight)`.
//!    When the query has terms, phrases or OR-groups, at least one weighted
//!    field must match them; a field-value hit alone doesn't make a result.
//! 3. **Order** - score descending, then record id ascending.
//! 4. **Page** - only the returned page gets highlights and snippets. Those are
//!    the expensive part and nobody reads them for result #4000.
//!
//! With the `parallel` feature, step 2 runs on rayon. Output is identical.

use std::cmp::Ordering;
use std::collections::BTreeMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::core::score_breakdown;
use crate::highlight::{highlight_search_terms_with_tag, DEFAULT_HIGHLIGHT_TAG};
use crate::records::SearchRecord;
use crate::snippet::{create_search_snippet, DEFAULT_SNIPPET_LENGTH};
use crate::types::{FieldQuery, ParsedQuery, SearchField};
use crate::utils::FoldedText;

/// Results per page when the caller doesn't say.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Default boosts: a name match matters most, status barely.
pub const DEFAULT_FIELD_WEIGHTS: [(SearchField, f64); 6] = [
    (SearchField::Name, 3.0),
    (SearchField::Tags, 2.0),
    (SearchField::Category, 1.5),
    (SearchField::Description, 1.0),
    (SearchField::Author, 1.0),
    (SearchField::Status, 0.5),
];

/// Weight per record field. Fields without a weight are not scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldWeights(BTreeMap<String, f64>);

impl Default for FieldWeights {
    fn default() -> Self {
        FieldWeights(
            DEFAULT_FIELD_WEIGHTS
                .iter()
                .map(|(field, weight)| (field.as_str().to_string(), *weight))
                .collect(),
        )
    }
}

impl FieldWeights {
    /// An empty table; add fields with [`FieldWeights::with`].
    pub fn empty() -> Self {
        FieldWeights(BTreeMap::new())
    }

    /// Set one field's weight. Negative weights are stored as zero.
    pub fn with(mut self, field: impl Into<String>, weight: f64) -> Self {
        self.0.insert(field.into(), weight.max(0.0));
        self
    }

    pub fn get(&self, field: &str) -> Option<f64> {
        self.0.get(field).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(field, weight)| (field.as_str(), *weight))
    }

    /// Field names, heaviest first, ties alphabetical.
    fn by_weight(&self) -> Vec<&str> {
        let mut fields: Vec<(&str, f64)> = self.iter().collect();
        fields.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal).then(a.0.cmp(b.0)));
        fields.into_iter().map(|(field, _)| field).collect()
    }
}

/// Paging and presentation knobs for [`rank_records`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankOptions {
    pub limit: usize,
    pub offset: usize,
    pub snippet_length: usize,
    pub tag: String,
    /// Preferred snippet source; falls back to the heaviest non-empty field.
    pub snippet_field: String,
}

impl Default for RankOptions {
    fn default() -> Self {
        RankOptions {
            limit: DEFAULT_PAGE_SIZE,
            offset: 0,
            snippet_length: DEFAULT_SNIPPET_LENGTH,
            tag: DEFAULT_HIGHLIGHT_TAG.to_string(),
            snippet_field: SearchField::Description.as_str().to_string(),
        }
    }
}

/// One ranked record, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRecord {
    pub id: String,
    pub score: f64,
    /// Highlighted text of every weighted field that contains a match.
    pub highlights: BTreeMap<String, String>,
    pub snippet: Option<String>,
}

/// A page of ranked records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPage {
    /// Matching records across all pages.
    pub total: usize,
    pub results: Vec<RankedRecord>,
}

/// Per-call state shared by every record.
struct RankContext<'a> {
    /// (field, weight, query scoped to that field)
    scoped: Vec<(&'a str, f64, ParsedQuery)>,
    filters: Vec<&'a FieldQuery>,
    /// Terms, phrases or OR-groups present: some field must match them.
    needs_text_match: bool,
    /// Only field filters: matching the filters is enough.
    pure_filter: bool,
}

/// Filter, score, sort and page `records` for `query`.
pub fn rank_records(
    records: &[SearchRecord],
    query: &ParsedQuery,
    weights: &FieldWeights,
    options: &RankOptions,
) -> RankedPage {
    let filters: Vec<&FieldQuery> = query
        .field_queries()
        .iter()
        .filter(|fq| fq.known_field().is_some())
        .collect();
    let ctx = RankContext {
        scoped: weights
            .iter()
            .map(|(field, weight)| (field, weight, query.scoped_to(field)))
            .collect(),
        needs_text_match: query.has_text_matchers(),
        pure_filter: !query.has_text_matchers() && !filters.is_empty(),
        filters,
    };

    #[cfg(feature = "parallel")]
    let mut scored: Vec<(usize, f64)> = records
        .par_iter()
        .enumerate()
        .filter_map(|(idx, record)| score_record(record, &ctx).map(|score| (idx, score)))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let mut scored: Vec<(usize, f64)> = records
        .iter()
        .enumerate()
        .filter_map(|(idx, record)| score_record(record, &ctx).map(|score| (idx, score)))
        .collect();

    scored.sort_by(|a, b| compare_scored(a, b, records));

    let total = scored.len();
    let results: Vec<RankedRecord> = scored
        .iter()
        .skip(options.offset)
        .take(options.limit)
        .map(|&(idx, score)| present(&records[idx], score, query, weights, options))
        .collect();

    debug!(
        candidates = records.len(),
        matched = total,
        returned = results.len(),
        query = query.original_query(),
        "ranked records"
    );

    RankedPage { total, results }
}

/// `None` when the record is filtered out or doesn't match.
fn score_record(record: &SearchRecord, ctx: &RankContext<'_>) -> Option<f64> {
    let passes_filters = ctx.filters.iter().all(|fq| {
        record
            .field(&fq.field)
            .is_some_and(|text| FoldedText::new(text).contains(&fq.value))
    });
    if !passes_filters {
        return None;
    }

    let mut score = 0.0;
    let mut text_matched = false;
    for (field, weight, scoped) in &ctx.scoped {
        if let Some(text) = record.field(field) {
            let breakdown = score_breakdown(text, scoped);
            text_matched |= *weight > 0.0 && breakdown.text_matches() > 0;
            score += breakdown.weighted(*weight);
        }
    }

    if ctx.pure_filter {
        return Some(score);
    }
    (score > 0.0 && (text_matched || !ctx.needs_text_match)).then_some(score)
}

/// Score descending, then id ascending for a total, deterministic order.
fn compare_scored(a: &(usize, f64), b: &(usize, f64), records: &[SearchRecord]) -> Ordering {
    match b.1.partial_cmp(&a.1) {
        Some(ord) if ord != Ordering::Equal => ord,
        _ => records[a.0].id.cmp(&records[b.0].id),
    }
}

fn present(
    record: &SearchRecord,
    score: f64,
    query: &ParsedQuery,
    weights: &FieldWeights,
    options: &RankOptions,
) -> RankedRecord {
    let mut highlights = BTreeMap::new();
    for (field, _) in weights.iter() {
        if let Some(text) = record.field(field) {
            let highlighted = highlight_search_terms_with_tag(text, query, &options.tag);
            if highlighted != text {
                highlights.insert(field.to_string(), highlighted);
            }
        }
    }

    let snippet_source = record
        .field(&options.snippet_field)
        .filter(|text| !text.trim().is_empty())
        .or_else(|| {
            weights
                .by_weight()
                .into_iter()
                .filter_map(|field| record.field(field))
                .find(|text| !text.trim().is_empty())
        });

    RankedRecord {
        id: record.id.clone(),
        score,
        highlights,
        snippet: snippet_source.map(|text| create_search_snippet(text, query, options.snippet_length)),
    }
}
