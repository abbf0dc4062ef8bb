//! SnippetExtractor windows and bounds.

use super::common::q;
use seekr::{create_search_snippet, ELLIPSIS};

fn len(s: &str) -> usize {
    s.chars().count()
}

#[test]
fn test_window_opens_near_the_match() {
    let text = "Первый абзац. Ещё немного текста перед нужным местом. \
                Второй абзац содержит нужное слово. Третий абзац.";
    let snippet = create_search_snippet(text, &q("второй"), 50);
    assert!(snippet.contains("Второй"), "{snippet}");
    assert!(!snippet.contains("Первый"), "{snippet}");
    assert!(len(&snippet) <= 53);
}

#[test]
fn test_match_has_context_on_both_sides() {
    let text = format!("{}target{}", "a ".repeat(40), " b".repeat(40));
    let snippet = create_search_snippet(&text, &q("target"), 26);
    let body = snippet.strip_suffix(ELLIPSIS).unwrap_or(&snippet);
    let before = body.find("target").unwrap();
    let after = body.len() - before - "target".len();
    assert!(before >= 6 && after >= 6, "{snippet}");
}

#[test]
fn test_short_text_is_untouched() {
    let text = "Короткий текст";
    assert_eq!(create_search_snippet(text, &q("текст"), 100), text);
    assert_eq!(create_search_snippet(text, &q("нет"), len(text)), text);
}

#[test]
fn test_no_match_returns_the_head() {
    let snippet = create_search_snippet("one two three four five", &q("zzz"), 7);
    assert_eq!(snippet, "one two...");
}

#[test]
fn test_head_is_cut_by_characters() {
    let snippet = create_search_snippet("абвгдеёжзий", &q("zzz"), 3);
    assert_eq!(snippet, "абв...");
}

#[test]
fn test_window_at_the_end_has_no_marker() {
    let text = "filler words go here and then the keyword";
    let snippet = create_search_snippet(text, &q("keyword"), 15);
    assert!(snippet.ends_with("keyword"), "{snippet}");
    assert!(!snippet.ends_with(ELLIPSIS));
}

#[test]
fn test_or_alternative_anchors_the_window() {
    let text = format!("{} berlin {}", "x ".repeat(40), "y ".repeat(40));
    let snippet = create_search_snippet(&text, &q("paris OR berlin"), 20);
    assert!(snippet.contains("berlin"), "{snippet}");
}

#[test]
fn test_excluded_term_does_not_anchor() {
    let text = format!("cheap {} paris", "x ".repeat(30));
    let snippet = create_search_snippet(&text, &q("paris -cheap"), 10);
    assert!(snippet.contains("paris"), "{snippet}");
    assert!(!snippet.contains("cheap"), "{snippet}");
}
