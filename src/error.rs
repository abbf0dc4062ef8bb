// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Parsing, scoring, highlighting and snippets never fail. Validation reports
//! problems as [`QueryError`] values; their `Display` text is the user-facing
//! message, word for word.

use thiserror::Error;

use crate::query::MAX_QUERY_LENGTH;

/// One problem found by the query validator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Search query cannot be empty")]
    Empty,

    #[error("Search query too long (maximum {} characters)", MAX_QUERY_LENGTH)]
    TooLong { length: usize },

    #[error("Unmatched quotes in search query")]
    UnmatchedQuotes,

    /// The field as the user typed it.
    #[error("Invalid field \"{0}\" in field:value query")]
    InvalidField(String),
}

/// A query rejected by [`parse_validated`](crate::parse_validated).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_messages(.errors))]
pub struct InvalidQuery {
    pub errors: Vec<QueryError>,
}

fn join_messages(errors: &[QueryError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Failure to load search records.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("failed to read records: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed records JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate record id {0:?}")]
    DuplicateId(String),
}
