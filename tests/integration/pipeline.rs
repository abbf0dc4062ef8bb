//! The whole flow a caller runs: validate, parse once, score many, decorate the top.

use super::common::{q, sample_records};
use seekr::{
    calculate_relevance_score, create_search_snippet, highlight_search_terms, parse_validated,
    validate_search_query, ParsedQuery, DEFAULT_SNIPPET_LENGTH,
};

#[test]
fn test_validated_query_drives_every_component() {
    let query = parse_validated(r#"парк "нескучный сад" -дорого"#).unwrap();
    let records = sample_records();

    let mut scored: Vec<(&str, f64)> = records
        .iter()
        .filter_map(|r| {
            let text = r.field("description")?;
            let score = calculate_relevance_score(text, &query, 1.0);
            (score > 0.0).then_some((r.id.as_str(), score))
        })
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    // "парк" 4 + "нескучный сад" 13 × 2
    assert_eq!(scored[0], ("moscow-parks", 30.0));
    assert_eq!(scored[1], ("paris-weekend", 4.0));

    let top = records.iter().find(|r| r.id == scored[0].0).unwrap();
    let description = top.field("description").unwrap();
    assert_eq!(
        highlight_search_terms(description, &query),
        "<mark>Парк</mark> Горького, Сокольники и <mark>Нескучный сад</mark>. \
         Купибилет собрал лучшие маршруты"
    );
    assert_eq!(
        create_search_snippet(description, &query, DEFAULT_SNIPPET_LENGTH),
        description
    );
}

#[test]
fn test_rejected_query_is_reported_before_scoring() {
    let result = validate_search_query(r#"owner:me "open"#);
    assert!(!result.valid);
    assert_eq!(result.errors.len(), 2);
    assert!(parse_validated(r#"owner:me "open"#).is_err());
}

#[test]
fn test_parsed_query_serializes_with_camel_case_keys() {
    let json = serde_json::to_value(q(r#"a "b c" -d name:e f OR g"#)).unwrap();
    assert_eq!(json["terms"], serde_json::json!([]));
    assert_eq!(json["exactPhrases"], serde_json::json!(["b c"]));
    assert_eq!(json["excludedTerms"], serde_json::json!(["d"]));
    assert_eq!(
        json["fieldQueries"],
        serde_json::json!([{"field": "name", "value": "e"}])
    );
    assert_eq!(json["orQueries"], serde_json::json!([["a", "f"], ["g"]]));
    assert_eq!(json["originalQuery"], "a \"b c\" -d name:e f OR g");
}

#[test]
fn test_parsed_query_round_trips_through_json() {
    let query = q(r#"rust "search engine" -java status:published"#);
    let json = serde_json::to_string(&query).unwrap();
    let back: ParsedQuery = serde_json::from_str(&json).unwrap();
    assert_eq!(back, query);
}

#[test]
fn test_shared_query_across_threads() {
    let query = q("париж отдых");
    let texts = ["Отдых в Париже", "Париж", "Москва"];
    let scores: Vec<f64> = std::thread::scope(|s| {
        let handles: Vec<_> = texts
            .iter()
            .map(|text| {
                let query = &query;
                s.spawn(move || calculate_relevance_score(text, query, 1.0))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(scores, [10.0, 5.0, 0.0]);
}
