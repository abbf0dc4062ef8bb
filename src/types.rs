// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The values that flow between the parser and everything downstream.
//!
//! A raw query string becomes a [`ParsedQuery`] exactly once. The scorer, the
//! highlighter and the snippet extractor all read it, none of them write it, so
//! one parsed query can be shared across threads while a caller fans out over
//! thousands of candidate texts.
//!
//! # Invariants
//!
//! - **Totality**: every input string parses. Blank input yields an empty
//!   `original_query` and empty categories.
//! - **Disjoint categories**: one syntactic unit lands in exactly one of terms,
//!   phrases, exclusions, field queries or OR alternatives.
//! - **Folded**: everything except `original_query` is case-folded at parse time,
//!   so matching downstream never has to think about case.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QueryError;

// =============================================================================
// FIELD ALLOW-LIST
// =============================================================================

/// Fields that may appear on the left of a `field:value` query.
///
/// Checked at validation time only. The parser keeps any well-formed
/// `identifier:value` token so downstream code can still see what was typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Name,
    Description,
    Status,
    Category,
    Tags,
    Author,
}

impl SearchField {
    /// Every allowed field, in display order.
    pub const ALL: [SearchField; 6] = [
        SearchField::Name,
        SearchField::Description,
        SearchField::Status,
        SearchField::Category,
        SearchField::Tags,
        SearchField::Author,
    ];

    /// The lower-case name used in queries and record JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            SearchField::Name => "name",
            SearchField::Description => "description",
            SearchField::Status => "status",
            SearchField::Category => "category",
            SearchField::Tags => "tags",
            SearchField::Author => "author",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchField {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchField::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| QueryError::InvalidField(s.to_string()))
    }
}

// =============================================================================
// PARSED QUERY
// =============================================================================

/// A `field:value` pair, both sides case-folded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldQuery {
    pub field: String,
    pub value: String,
}

impl FieldQuery {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        FieldQuery {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Resolve the field against the allow-list.
    pub fn known_field(&self) -> Option<SearchField> {
        self.field.parse().ok()
    }
}

/// The structured form of a free-text query.
///
/// Built by [`parse_search_query`](crate::parse_search_query). Fields are private
/// so nothing downstream can mutate a query after the parser has produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedQuery {
    pub(crate) terms: Vec<String>,
    pub(crate) exact_phrases: Vec<String>,
    pub(crate) excluded_terms: Vec<String>,
    pub(crate) field_queries: Vec<FieldQuery>,
    pub(crate) or_queries: Vec<Vec<String>>,
    pub(crate) original_query: String,
}

impl ParsedQuery {
    /// Plain search tokens.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Quoted phrases that must match contiguously.
    pub fn exact_phrases(&self) -> &[String] {
        &self.exact_phrases
    }

    /// Tokens whose presence penalizes a text.
    pub fn excluded_terms(&self) -> &[String] {
        &self.excluded_terms
    }

    /// `field:value` pairs in query order.
    pub fn field_queries(&self) -> &[FieldQuery] {
        &self.field_queries
    }

    /// OR-groups. A text satisfies a group when it contains any one alternative.
    pub fn or_queries(&self) -> &[Vec<String>] {
        &self.or_queries
    }

    /// The trimmed input, kept for display and logging.
    pub fn original_query(&self) -> &str {
        &self.original_query
    }

    /// True when no category holds anything.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
            && self.exact_phrases.is_empty()
            && self.excluded_terms.is_empty()
            && self.field_queries.is_empty()
            && self.or_queries.is_empty()
    }

    /// True when the query can match free text: terms, phrases or OR alternatives.
    ///
    /// Field queries and exclusions alone only filter or penalize.
    pub fn has_text_matchers(&self) -> bool {
        !self.terms.is_empty()
            || !self.exact_phrases.is_empty()
            || self.or_queries.iter().any(|group| !group.is_empty())
    }

    /// Every needle the highlighter and snippet extractor look for:
    /// terms, phrases and OR alternatives, deduplicated, never exclusions.
    pub fn match_needles(&self) -> Vec<&str> {
        let mut needles: Vec<&str> = Vec::new();
        let candidates = self
            .terms
            .iter()
            .chain(self.exact_phrases.iter())
            .chain(self.or_queries.iter().flatten());
        for needle in candidates {
            if !needle.is_empty() && !needles.contains(&needle.as_str()) {
                needles.push(needle);
            }
        }
        needles
    }

    /// A copy whose field queries are limited to those targeting `field`.
    ///
    /// Used when a caller scores one record field at a time: `name:paris` should
    /// count against the name text and nothing else.
    pub fn scoped_to(&self, field: &str) -> ParsedQuery {
        ParsedQuery {
            field_queries: self
                .field_queries
                .iter()
                .filter(|fq| fq.field.eq_ignore_ascii_case(field))
                .cloned()
                .collect(),
            ..self.clone()
        }
    }
}

// =============================================================================
// VALIDATION RESULT
// =============================================================================

/// Outcome of [`validate_search_query`](crate::validate_search_query).
///
/// Never an error itself: every problem is reported as data and the caller
/// decides whether to block or warn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub(crate) fn from_issues(issues: &[QueryError]) -> Self {
        ValidationResult {
            valid: issues.is_empty(),
            errors: issues.iter().map(ToString::to_string).collect(),
        }
    }
}
