// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Structured search queries: parse, validate, score, highlight, excerpt.
//!
//! A free-text query like `rust "search engine" -java status:published` is
//! parsed once into a [`ParsedQuery`]. Everything else reads that value:
//!
//! ```text
//!                       ┌──────────────────────────┐
//!  raw ──▶ validate ──▶ │  ValidationResult        │   (optional gate)
//!   │                   └──────────────────────────┘
//!   ▼
//! ┌──────────────┐      ┌──────────────────────────┐
//! │ parse        │────▶ │  ParsedQuery             │
//! └──────────────┘      └────────────┬─────────────┘
//!                  ┌─────────────────┼──────────────────┐
//!                  ▼                 ▼                  ▼
//!          ┌──────────────┐  ┌──────────────┐  ┌──────────────┐
//!          │ score        │  │ highlight    │  │ snippet      │
//!          └──────────────┘  └──────────────┘  └──────────────┘
//! ```
//!
//! Every function is pure and synchronous. A `ParsedQuery` is immutable, so one
//! query can be scored against many texts from many threads at once.
//! [`rank_records`] is the layer above: weighted fields per record, field
//! filters, ordering and pagination.
//!
//! # Usage
//!
//! ```
//! use seekr::{
//!     calculate_relevance_score, create_search_snippet, highlight_search_terms,
//!     parse_search_query, validate_search_query,
//! };
//!
//! let raw = r#"париж "эйфелева башня""#;
//! assert!(validate_search_query(raw).valid);
//!
//! let query = parse_search_query(raw);
//! let text = "Париж: Эйфелева башня и набережные Сены";
//!
//! assert!(calculate_relevance_score(text, &query, 1.0) > 0.0);
//! assert_eq!(
//!     highlight_search_terms(text, &query),
//!     "<mark>Париж</mark>: <mark>Эйфелева башня</mark> и набережные Сены"
//! );
//! assert_eq!(create_search_snippet(text, &query, 100), text);
//! ```

mod contracts;
mod error;
mod highlight;
mod query;
mod records;
mod scoring;
mod snippet;
#[doc(hidden)]
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use error::{InvalidQuery, QueryError, RecordError};
pub use highlight::{highlight_search_terms, highlight_search_terms_with_tag, DEFAULT_HIGHLIGHT_TAG};
pub use query::{parse_search_query, parse_validated, validate_search_query, MAX_QUERY_LENGTH};
pub use records::{load_records, parse_records, SearchRecord};
pub use scoring::ranking::{
    rank_records, FieldWeights, RankOptions, RankedPage, RankedRecord, DEFAULT_FIELD_WEIGHTS,
    DEFAULT_PAGE_SIZE,
};
pub use scoring::{
    calculate_relevance_score, score_breakdown, ScoreBreakdown, DEFAULT_WEIGHT,
    PHRASE_BONUS_MULTIPLIER,
};
pub use snippet::{create_search_snippet, DEFAULT_SNIPPET_LENGTH, ELLIPSIS};
pub use types::{FieldQuery, ParsedQuery, SearchField, ValidationResult};
pub use utils::{fold_case, normalize_whitespace};
