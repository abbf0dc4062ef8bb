// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! From a raw query string to a [`ParsedQuery`](crate::ParsedQuery).
//!
//! Two entry points with two attitudes. [`parse_search_query`] is fail-soft:
//! it accepts anything and does its best, so a typeahead box can score on every
//! keystroke. [`validate_search_query`] is strict but never throws: it lists
//! every problem and lets the caller decide. Both share the same lexical pass in
//! `lexer`, so they can't disagree about what a phrase or a field token is.
//!
//! # Precedence
//!
//! ```text
//! "quoted phrase"   highest  (unambiguous delimiters)
//! -exclusion
//! field:value
//! a OR b            all-or-nothing over the remaining tokens
//! plain term        lowest
//! ```

mod lexer;
mod parser;
mod validate;

pub use parser::parse_search_query;
pub use validate::{parse_validated, validate_search_query};

/// Longest accepted query, in chars.
pub const MAX_QUERY_LENGTH: usize = 500;
