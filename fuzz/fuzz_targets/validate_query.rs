// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the validator: never panics, `valid` mirrors `errors`, and
//! `parse_validated` agrees with it.

#![no_main]

use libfuzzer_sys::fuzz_target;
use seekr::{parse_validated, validate_search_query};

fuzz_target!(|raw: &str| {
    let result = validate_search_query(raw);
    assert_eq!(result.valid, result.errors.is_empty());

    match parse_validated(raw) {
        Ok(_) => assert!(result.valid),
        Err(err) => {
            let messages: Vec<String> = err.errors.iter().map(ToString::to_string).collect();
            assert_eq!(messages, result.errors);
        }
    }
});
