// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures so every suite searches the same corpus.

#![doc(hidden)]

use crate::records::SearchRecord;

/// Create a record with the three fields most tests care about.
pub fn make_record(id: &str, name: &str, description: &str, status: &str) -> SearchRecord {
    SearchRecord::new(id)
        .with_field("name", name)
        .with_field("description", description)
        .with_field("status", status)
}

/// A small mixed-script template catalogue.
pub fn sample_records() -> Vec<SearchRecord> {
    vec![
        make_record(
            "paris-weekend",
            "Париж на выходные",
            "Отдых в Париже: парк Монсо, Лувр и прогулка по Сене",
            "published",
        ),
        make_record(
            "moscow-parks",
            "Москва: парки",
            "Парк Горького, Сокольники и Нескучный сад. Купибилет собрал лучшие маршруты",
            "published",
        ),
        make_record(
            "budget-trip",
            "Бюджетный отдых",
            "Отдых недорого: хостелы, поезда и бесплатные музеи",
            "draft",
        ),
        make_record(
            "rust-newsletter",
            "Rust Weekly",
            "A newsletter template about the Rust programming language and its search engines",
            "published",
        )
        .with_field("tags", "rust, newsletter, email")
        .with_field("category", "tech"),
        make_record(
            "cafe-menu",
            "Café menu",
            "Crème brûlée, croissants and naïve art on the walls",
            "archived",
        )
        .with_field("category", "food"),
    ]
}

const WORDS: &[&str] = &[
    "template", "newsletter", "париж", "отдых", "search", "engine", "rust", "москва", "парк",
    "campaign", "email", "layout", "header", "footer", "купибилет", "бюджет", "travel", "weekend",
    "город", "любви",
];

/// Deterministic pseudo-random text of `words` words (xorshift, no RNG crate).
pub fn generate_text(seed: u64, words: usize) -> String {
    let mut state = seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) | 1;
    let mut out = Vec::with_capacity(words);
    for _ in 0..words {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        out.push(WORDS[(state % WORDS.len() as u64) as usize]);
    }
    out.join(" ")
}

/// `count` generated records with name and description fields.
pub fn generate_records(count: usize, words_per_description: usize) -> Vec<SearchRecord> {
    (0..count)
        .map(|i| {
            let seed = i as u64 + 1;
            make_record(
                &format!("rec-{i:05}"),
                &generate_text(seed * 31, 4),
                &generate_text(seed, words_per_description),
                if i % 3 == 0 { "draft" } else { "published" },
            )
        })
        .collect()
}
