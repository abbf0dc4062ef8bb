// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! SnippetExtractor: a bounded excerpt that shows why a text matched.
//!
//! The window is centered on the earliest match so it reads with context on
//! both sides, snaps to word boundaries where it can do so without hiding the
//! match, and ends with [`ELLIPSIS`] when text was cut off at the end. No
//! leading marker, so the output never exceeds `max_length + 3` chars.

use std::ops::Range;

use crate::contracts::check_snippet_bounded;
use crate::types::ParsedQuery;
use crate::utils::{char_len, FoldedText};

/// Appended when a snippet stops short of the end of the text.
pub const ELLIPSIS: &str = "...";

/// A reasonable window for result listings.
pub const DEFAULT_SNIPPET_LENGTH: usize = 150;

/// Extract up to `max_length` chars around the first match.
///
/// - Text no longer than `max_length`: returned unchanged.
/// - A match: a window containing it, plus `...` if the window ends early.
/// - No match: the first `max_length` chars plus `...`.
///
/// ```
/// use seekr::{create_search_snippet, parse_search_query};
///
/// let query = parse_search_query("rust");
/// assert_eq!(create_search_snippet("short", &query, 10), "short");
/// assert_eq!(create_search_snippet("no match in here", &query, 8), "no match...");
/// ```
pub fn create_search_snippet(text: &str, query: &ParsedQuery, max_length: usize) -> String {
    let total = char_len(text);
    if total <= max_length {
        return text.to_string();
    }

    let snippet = match first_match(text, query) {
        Some(range) => window_around(text, total, range, max_length),
        None => {
            let mut head: String = text.chars().take(max_length).collect();
            head.push_str(ELLIPSIS);
            head
        }
    };

    check_snippet_bounded(&snippet, max_length);
    snippet
}

/// Earliest match of any needle; at equal starts the longer one.
fn first_match(text: &str, query: &ParsedQuery) -> Option<Range<usize>> {
    let folded = FoldedText::new(text);
    query
        .match_needles()
        .into_iter()
        .filter_map(|needle| folded.find_first(needle))
        .min_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)))
}

/// Build the window in char space. Requires `total > max_length`.
fn window_around(text: &str, total: usize, byte_range: Range<usize>, max_length: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    let match_start = char_len(&text[..byte_range.start]);
    let match_end = match_start + char_len(&text[byte_range]);

    // Half the spare room goes before the match.
    let slack = max_length.saturating_sub(match_end - match_start);
    let mut start = match_start
        .saturating_sub(slack / 2)
        .min(total - max_length);

    // Don't open mid-word if a word boundary sits before the match.
    if start > 0 && !chars[start - 1].is_whitespace() {
        if let Some(offset) = chars[start..match_start].iter().position(|c| c.is_whitespace()) {
            start += offset + 1;
        }
    }
    while start < match_start && chars[start].is_whitespace() {
        start += 1;
    }

    let mut end = (start + max_length).min(total);
    if end == total {
        return chars[start..end].iter().collect();
    }

    // Cut at the last word boundary after the match, if the cut lands mid-word.
    if !chars[end].is_whitespace() {
        let keep = match_end.min(end);
        if let Some(offset) = chars[keep..end].iter().rposition(|c| c.is_whitespace()) {
            end = keep + offset;
        }
    }
    while end > match_end.max(start) && chars[end - 1].is_whitespace() {
        end -= 1;
    }

    let mut snippet: String = chars[start..end].iter().collect();
    snippet.push_str(ELLIPSIS);
    snippet
}
