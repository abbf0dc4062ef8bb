//! Highlighter and snippet properties.

use super::oracles::strip_highlight;
use super::{query_strategy, text_strategy};
use proptest::prelude::*;
use seekr::{
    create_search_snippet, highlight_search_terms, highlight_search_terms_with_tag,
    parse_search_query, ELLIPSIS,
};

proptest! {
    /// Property: highlighting its own output changes nothing.
    #[test]
    fn prop_highlight_is_idempotent(text in text_strategy(), raw in query_strategy()) {
        let query = parse_search_query(&raw);
        let once = highlight_search_terms(&text, &query);
        let twice = highlight_search_terms(&once, &query);
        prop_assert_eq!(twice, once);
    }

    /// Property: removing the inserted tags gives back the input.
    #[test]
    fn prop_highlight_only_adds_tags(text in text_strategy(), raw in query_strategy()) {
        let query = parse_search_query(&raw);
        let highlighted = highlight_search_terms_with_tag(&text, &query, "em");
        prop_assert_eq!(strip_highlight(&highlighted, "em"), text);
    }

    /// Property: wrapped regions never nest.
    #[test]
    fn prop_highlight_never_nests(text in text_strategy(), raw in query_strategy()) {
        let highlighted = highlight_search_terms(&text, &parse_search_query(&raw));
        let mut depth = 0i32;
        let mut rest = highlighted.as_str();
        while let Some(pos) = rest.find('<') {
            rest = &rest[pos..];
            if rest.starts_with("<mark>") {
                depth += 1;
                rest = &rest[6..];
            } else if rest.starts_with("</mark>") {
                depth -= 1;
                rest = &rest[7..];
            } else {
                rest = &rest[1..];
            }
            prop_assert!((0..=1).contains(&depth));
        }
        prop_assert_eq!(depth, 0);
    }

    /// Property: a snippet is bounded, and untouched when the text already fits.
    #[test]
    fn prop_snippet_is_bounded(text in text_strategy(), raw in query_strategy(), n in 0usize..120) {
        let snippet = create_search_snippet(&text, &parse_search_query(&raw), n);
        let len = snippet.chars().count();
        if text.chars().count() <= n {
            prop_assert_eq!(snippet, text);
        } else {
            prop_assert!(len <= n + ELLIPSIS.chars().count(), "{} chars for n={}", len, n);
        }
    }

    /// Property: the snippet is a piece of the text, plus at most a trailing marker.
    #[test]
    fn prop_snippet_is_excerpt(text in text_strategy(), raw in query_strategy(), n in 1usize..120) {
        let snippet = create_search_snippet(&text, &parse_search_query(&raw), n);
        let body = snippet.strip_suffix(ELLIPSIS).unwrap_or(&snippet);
        prop_assert!(text.contains(body), "{:?} not in {:?}", body, text);
    }
}
