// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Highlighter: wrap matched spans in markup, keep everything else byte-for-byte.
//!
//! Matching is case-insensitive, the wrapped text keeps its original casing.
//! Every occurrence of every term, phrase and OR alternative is a candidate
//! span. Exclusions are never highlighted.
//!
//! # Overlaps
//!
//! Candidates are ordered longest first (ties: earlier start) and accepted
//! greedily when they don't touch an accepted span. A phrase therefore swallows
//! the terms inside it instead of producing nested or duplicate markup:
//!
//! ```text
//! query:  город "париж город"
//! text:   Париж город любви
//! spans:  [Париж город]  11 chars  accepted
//!               [город]   5 chars  overlaps, dropped
//! result: <mark>Париж город</mark> любви
//! ```
//!
//! # Existing markup
//!
//! Tag syntax already in the text (`<b>`, `</p>`, `<!-- -->`) is never matched
//! into, and neither is anything between an opening and closing highlight tag.
//! That second rule makes highlighting idempotent: running it over its own
//! output changes nothing.

use std::ops::Range;

use crate::contracts::check_spans_disjoint;
use crate::types::ParsedQuery;
use crate::utils::{char_len, FoldedText};

/// Tag used by [`highlight_search_terms`].
pub const DEFAULT_HIGHLIGHT_TAG: &str = "mark";

/// A matched region of the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MatchSpan {
    /// Byte offset, inclusive.
    pub start: usize,
    /// Byte offset, exclusive.
    pub end: usize,
    /// Length in chars, used to pick between overlapping spans.
    pub len: usize,
}

impl MatchSpan {
    fn overlaps(&self, range: &Range<usize>) -> bool {
        self.start < range.end && range.start < self.end
    }
}

/// Wrap every match in `<mark>…</mark>`.
///
/// ```
/// use seekr::{highlight_search_terms, parse_search_query};
///
/// let query = parse_search_query(r#"город "париж город""#);
/// assert_eq!(
///     highlight_search_terms("Париж город любви", &query),
///     "<mark>Париж город</mark> любви"
/// );
/// ```
pub fn highlight_search_terms(text: &str, query: &ParsedQuery) -> String {
    highlight_search_terms_with_tag(text, query, DEFAULT_HIGHLIGHT_TAG)
}

/// Wrap every match in `<tag>…</tag>`.
///
/// `tag` may carry attributes (`span class="hit"`); the closing tag uses the
/// name only. A blank tag falls back to [`DEFAULT_HIGHLIGHT_TAG`].
pub fn highlight_search_terms_with_tag(text: &str, query: &ParsedQuery, tag: &str) -> String {
    let tag = if tag.trim().is_empty() {
        DEFAULT_HIGHLIGHT_TAG
    } else {
        tag.trim()
    };
    let name = tag_name(tag);

    let spans = find_match_spans(text, query, name);
    if spans.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + spans.len() * (tag.len() + name.len() + 5));
    let mut cursor = 0;
    for span in &spans {
        out.push_str(&text[cursor..span.start]);
        out.push('<');
        out.push_str(tag);
        out.push('>');
        out.push_str(&text[span.start..span.end]);
        out.push_str("</");
        out.push_str(name);
        out.push('>');
        cursor = span.end;
    }
    out.push_str(&text[cursor..]);
    out
}

/// Accepted spans in left-to-right order, outside any protected markup.
pub(crate) fn find_match_spans(text: &str, query: &ParsedQuery, tag_name: &str) -> Vec<MatchSpan> {
    let needles = query.match_needles();
    if needles.is_empty() {
        return Vec::new();
    }

    let folded = FoldedText::new(text);
    let protected = protected_regions(text, tag_name);

    let mut candidates = Vec::new();
    for needle in needles {
        for range in folded.find_all(needle) {
            let span = MatchSpan {
                start: range.start,
                end: range.end,
                len: char_len(&text[range]),
            };
            if !protected.iter().any(|region| span.overlaps(region)) {
                candidates.push(span);
            }
        }
    }

    select_longest(candidates)
}

/// Greedy interval selection: longest first, ties to the earlier start.
fn select_longest(mut candidates: Vec<MatchSpan>) -> Vec<MatchSpan> {
    candidates.sort_by(|a, b| b.len.cmp(&a.len).then(a.start.cmp(&b.start)));

    // Kept sorted by start so each check only looks at the two neighbours.
    let mut accepted: Vec<MatchSpan> = Vec::with_capacity(candidates.len());
    for span in candidates {
        let idx = accepted.partition_point(|s| s.start < span.start);
        let clashes_prev = idx > 0 && accepted[idx - 1].end > span.start;
        let clashes_next = accepted.get(idx).is_some_and(|next| next.start < span.end);
        if !clashes_prev && !clashes_next {
            accepted.insert(idx, span);
        }
    }

    check_spans_disjoint(&accepted);
    accepted
}

/// `span class="hit"` → `span`.
fn tag_name(tag: &str) -> &str {
    tag.split_whitespace().next().unwrap_or(tag)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MarkupKind {
    Open,
    Close,
    SelfClosing,
}

#[derive(Debug)]
struct Markup<'a> {
    name: &'a str,
    kind: MarkupKind,
    /// Byte length including `<` and `>`.
    len: usize,
}

/// Byte ranges that must not be matched into: every tag, plus everything from
/// an opening highlight tag through the closing tag that pairs with it.
///
/// Pairing is innermost-first. An opening tag that is never closed protects
/// only itself, a stray closing tag likewise.
fn protected_regions(text: &str, tag_name: &str) -> Vec<Range<usize>> {
    let mut regions = Vec::new();
    let mut open: Vec<usize> = Vec::new();
    let mut cursor = 0;

    while let Some(offset) = text[cursor..].find('<') {
        let start = cursor + offset;
        let Some(markup) = parse_markup(&text[start..]) else {
            cursor = start + 1;
            continue;
        };
        let end = start + markup.len;
        regions.push(start..end);

        if markup.name.eq_ignore_ascii_case(tag_name) {
            match markup.kind {
                MarkupKind::Open => open.push(start),
                MarkupKind::Close => {
                    if let Some(open_at) = open.pop() {
                        regions.push(open_at..end);
                    }
                }
                MarkupKind::SelfClosing => {}
            }
        }
        cursor = end;
    }

    regions
}

/// Recognize `<name ...>`, `</name>`, `<name/>` or `<!...>` at the start of `s`.
///
/// Anything else starting with `<` (`a < b`, `<3`) is plain text.
fn parse_markup(s: &str) -> Option<Markup<'_>> {
    let rest = s.strip_prefix('<')?;
    let (closing, body) = match rest.strip_prefix('/') {
        Some(body) => (true, body),
        None => (false, rest),
    };

    let first = body.chars().next()?;
    if !(first.is_ascii_alphabetic() || (!closing && first == '!')) {
        return None;
    }

    let close = s.find('>')?;
    if s[1..close].contains('<') {
        return None;
    }

    let name_len = body
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '!'))
        .unwrap_or(body.len());
    let kind = if closing {
        MarkupKind::Close
    } else if s[..close].ends_with('/') {
        MarkupKind::SelfClosing
    } else {
        MarkupKind::Open
    };

    Some(Markup {
        name: &body[..name_len],
        kind,
        len: close + 1,
    })
}
