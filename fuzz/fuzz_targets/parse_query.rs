// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the query parser.
//!
//! Parsing is total. Any string, however hostile, must come back as a
//! ParsedQuery whose original query is the trimmed input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use seekr::{fold_case, parse_search_query};

fuzz_target!(|raw: &str| {
    let query = parse_search_query(raw);

    assert_eq!(query.original_query(), raw.trim());
    if raw.trim().is_empty() {
        assert!(query.is_empty());
    }

    // OR grouping is all-or-nothing.
    assert!(query.terms().is_empty() || query.or_queries().is_empty());
    assert!(query.or_queries().iter().all(|group| !group.is_empty()));

    // Nothing empty ever lands in a category.
    for token in query
        .terms()
        .iter()
        .chain(query.exact_phrases())
        .chain(query.excluded_terms())
        .chain(query.or_queries().iter().flatten())
    {
        assert!(!token.is_empty());
    }
    for fq in query.field_queries() {
        assert!(!fq.field.is_empty() && !fq.value.is_empty());
        assert_eq!(fold_case(&fq.field), fq.field);
    }
});
