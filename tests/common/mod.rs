//! Shared test utilities and fixtures.

#![allow(dead_code)]

use seekr::{parse_search_query, ParsedQuery, RankedPage};

// Re-export canonical fixtures from seekr::testing
pub use seekr::testing::{generate_records, generate_text, make_record, sample_records};

/// Relative tolerance for comparing weighted scores.
pub const SCORE_EPSILON: f64 = 1e-9;

/// Shorthand used by almost every test.
pub fn q(raw: &str) -> ParsedQuery {
    parse_search_query(raw)
}

/// OR-groups as borrowed strings, for readable assertions.
pub fn or_groups(query: &ParsedQuery) -> Vec<Vec<&str>> {
    query
        .or_queries()
        .iter()
        .map(|group| group.iter().map(String::as_str).collect())
        .collect()
}

/// Assert two scores are equal up to floating point noise.
pub fn assert_score_eq(actual: f64, expected: f64) {
    let tolerance = SCORE_EPSILON * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "score {} differs from expected {}",
        actual,
        expected
    );
}

/// Record ids of a ranked page, in order.
pub fn ids(page: &RankedPage) -> Vec<&str> {
    page.results.iter().map(|r| r.id.as_str()).collect()
}

/// Create a temporary directory that is removed on drop.
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::TempDir::new().expect("Failed to create temp directory")
}

/// Write `records` as a JSON array to `records.json` inside `dir`.
pub fn write_records_file(dir: &tempfile::TempDir, records: &[seekr::SearchRecord]) -> std::path::PathBuf {
    let path = dir.path().join("records.json");
    let json = serde_json::to_string_pretty(records).expect("Failed to serialize records");
    std::fs::write(&path, json).expect("Failed to write records file");
    path
}
