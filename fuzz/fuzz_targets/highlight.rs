// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the highlighter.
//!
//! Arbitrary text may already contain tags, half-tags and stray angle
//! brackets. Output must be valid UTF-8 by construction, and a second pass
//! over the output must change nothing.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use seekr::{highlight_search_terms, parse_search_query};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    query: &'a str,
    text: &'a str,
}

fuzz_target!(|input: Input<'_>| {
    let query = parse_search_query(input.query);
    let once = highlight_search_terms(input.text, &query);
    assert!(once.len() >= input.text.len());

    let twice = highlight_search_terms(&once, &query);
    assert_eq!(once, twice);
});
