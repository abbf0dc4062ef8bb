// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the snippet extractor: bounded length, no split chars.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use seekr::{create_search_snippet, parse_search_query, ELLIPSIS};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    query: &'a str,
    text: &'a str,
    max_length: u8,
}

fuzz_target!(|input: Input<'_>| {
    let query = parse_search_query(input.query);
    let max_length = usize::from(input.max_length);
    let snippet = create_search_snippet(input.text, &query, max_length);

    if input.text.chars().count() <= max_length {
        assert_eq!(snippet, input.text);
    } else {
        assert!(snippet.chars().count() <= max_length + ELLIPSIS.chars().count());
    }
});
