// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! QueryParser: raw string in, [`ParsedQuery`] out, never an error.

use tracing::trace;

use super::lexer::{classify, lex, Token};
use crate::types::{FieldQuery, ParsedQuery};
use crate::utils::fold_token;

/// Parse a free-text query into its categories.
///
/// Total over all inputs. Malformed constructs degrade to plain terms: a
/// dangling quote stays attached to its token, `name:` with no value is a term.
///
/// # OR grouping
///
/// All-or-nothing. If any standalone `OR` appears, every run of remaining tokens
/// between connectors becomes one group, the first run included, and no plain
/// terms are produced. `a b OR c` means "(a or b) and c". Without an `OR` the
/// same tokens are plain terms.
///
/// # Example
///
/// ```
/// use seekr::parse_search_query;
///
/// let query = parse_search_query(r#"rust "search engine" -java status:published"#);
/// assert_eq!(query.terms(), ["rust"]);
/// assert_eq!(query.exact_phrases(), ["search engine"]);
/// assert_eq!(query.excluded_terms(), ["java"]);
/// assert_eq!(query.field_queries()[0].field, "status");
/// ```
pub fn parse_search_query(raw: &str) -> ParsedQuery {
    let original_query = raw.trim();
    if original_query.is_empty() {
        return ParsedQuery::default();
    }

    let lexed = lex(original_query);
    let mut query = ParsedQuery {
        exact_phrases: lexed.phrases.iter().map(|p| fold_token(p)).collect(),
        original_query: original_query.to_string(),
        ..ParsedQuery::default()
    };

    // None marks an OR connector.
    let mut words: Vec<Option<String>> = Vec::new();
    let mut saw_connector = false;

    for token in &lexed.tokens {
        match classify(token) {
            Token::Exclusion(term) => query.excluded_terms.push(fold_token(term)),
            Token::Field { field, value } => query
                .field_queries
                .push(FieldQuery::new(fold_token(field), fold_token(value))),
            Token::Connector => {
                saw_connector = true;
                words.push(None);
            }
            Token::Word(word) => words.push(Some(fold_token(word))),
        }
    }

    if saw_connector {
        query.or_queries = group_alternatives(words);
    } else {
        query.terms = words.into_iter().flatten().collect();
    }

    trace!(
        terms = query.terms.len(),
        phrases = query.exact_phrases.len(),
        excluded = query.excluded_terms.len(),
        fields = query.field_queries.len(),
        or_groups = query.or_queries.len(),
        "parsed search query"
    );

    query
}

/// Partition words into groups at each connector. Empty runs are dropped.
fn group_alternatives(words: Vec<Option<String>>) -> Vec<Vec<String>> {
    let mut groups = Vec::new();
    let mut current = Vec::new();

    for word in words {
        match word {
            Some(word) => current.push(word),
            None if !current.is_empty() => groups.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        groups.push(current);
    }

    groups
}
