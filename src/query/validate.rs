// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! QueryValidator: every rule runs, every problem is reported.

use super::lexer::{classify, lex, Token};
use super::{parse_search_query, MAX_QUERY_LENGTH};
use crate::error::{InvalidQuery, QueryError};
use crate::types::{ParsedQuery, SearchField, ValidationResult};
use crate::utils::char_len;

/// Check a raw query against the syntactic and length rules.
///
/// Errors accumulate rather than short-circuit, so a long query with a stray
/// quote reports both problems at once.
///
/// Length is counted in chars after trimming, the same text the parser keeps
/// as `original_query`. Surrounding whitespace never makes a query too long.
///
/// ```
/// use seekr::validate_search_query;
///
/// let result = validate_search_query("");
/// assert!(!result.valid);
/// assert_eq!(result.errors, ["Search query cannot be empty"]);
/// ```
pub fn validate_search_query(raw: &str) -> ValidationResult {
    ValidationResult::from_issues(&collect_issues(raw))
}

/// Validate, then parse. The fallible front door for callers that reject bad
/// queries outright.
pub fn parse_validated(raw: &str) -> Result<ParsedQuery, InvalidQuery> {
    let errors = collect_issues(raw);
    if errors.is_empty() {
        Ok(parse_search_query(raw))
    } else {
        Err(InvalidQuery { errors })
    }
}

fn collect_issues(raw: &str) -> Vec<QueryError> {
    let trimmed = raw.trim();
    let mut issues = Vec::new();

    if trimmed.is_empty() {
        issues.push(QueryError::Empty);
    }

    let length = char_len(trimmed);
    if length > MAX_QUERY_LENGTH {
        issues.push(QueryError::TooLong { length });
    }

    if trimmed.matches('"').count() % 2 != 0 {
        issues.push(QueryError::UnmatchedQuotes);
    }

    // Same lexical pass as the parser: field-looking text inside a phrase or
    // behind an exclusion dash is not a field query.
    let lexed = lex(trimmed);
    let mut reported: Vec<&str> = Vec::new();
    for token in &lexed.tokens {
        if let Token::Field { field, .. } = classify(token) {
            if field.parse::<SearchField>().is_err() && !reported.contains(&field) {
                reported.push(field);
                issues.push(QueryError::InvalidField(field.to_string()));
            }
        }
    }

    issues
}
