//! QueryValidator rules and the fallible parse entry point.

use seekr::{parse_validated, validate_search_query, QueryError, MAX_QUERY_LENGTH};

#[test]
fn test_empty_query() {
    for raw in ["", "   ", "\t\n"] {
        let result = validate_search_query(raw);
        assert!(!result.valid);
        assert_eq!(result.errors, ["Search query cannot be empty"]);
    }
}

#[test]
fn test_length_limit_boundary() {
    let at_limit = "a".repeat(MAX_QUERY_LENGTH);
    assert!(validate_search_query(&at_limit).valid);

    let over = "a".repeat(MAX_QUERY_LENGTH + 1);
    let result = validate_search_query(&over);
    assert!(!result.valid);
    assert_eq!(
        result.errors,
        ["Search query too long (maximum 500 characters)"]
    );
}

#[test]
fn test_length_counts_characters_not_bytes() {
    // 500 Cyrillic chars are 1000 bytes.
    let cyrillic = "ж".repeat(MAX_QUERY_LENGTH);
    assert!(validate_search_query(&cyrillic).valid);
}

#[test]
fn test_surrounding_whitespace_does_not_count() {
    let padded = format!("   {}   ", "a".repeat(MAX_QUERY_LENGTH));
    assert!(validate_search_query(&padded).valid);
}

#[test]
fn test_unmatched_quotes() {
    let result = validate_search_query(r#"term "unterminated"#);
    assert!(!result.valid);
    assert_eq!(result.errors, ["Unmatched quotes in search query"]);

    assert!(validate_search_query(r#""a" "b""#).valid);
}

#[test]
fn test_invalid_field_is_named() {
    let result = validate_search_query("owner:alice");
    assert!(!result.valid);
    assert_eq!(result.errors, ["Invalid field \"owner\" in field:value query"]);
}

#[test]
fn test_each_invalid_field_reported_once() {
    let result = validate_search_query("owner:a owner:b color:red name:ok");
    assert_eq!(
        result.errors,
        [
            "Invalid field \"owner\" in field:value query",
            "Invalid field \"color\" in field:value query",
        ]
    );
}

#[test]
fn test_allowed_fields_any_case() {
    let result =
        validate_search_query("name:a description:b status:c category:d tags:e author:f NAME:g");
    assert!(result.valid, "{:?}", result.errors);
}

#[test]
fn test_field_syntax_inside_phrase_or_exclusion_is_not_checked() {
    assert!(validate_search_query(r#""owner:me" -owner:you"#).valid);
}

#[test]
fn test_parse_validated_returns_query_or_all_errors() {
    let query = parse_validated("rust name:seekr").unwrap();
    assert_eq!(query.terms(), ["rust"]);

    let err = parse_validated("owner:x \"open").unwrap_err();
    assert_eq!(
        err.errors,
        vec![
            QueryError::UnmatchedQuotes,
            QueryError::InvalidField("owner".to_string())
        ]
    );
    assert_eq!(
        err.to_string(),
        "Unmatched quotes in search query; Invalid field \"owner\" in field:value query"
    );
}
