// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Case folding and offset-preserving matching.
//!
//! Matching is case-insensitive but highlighting must preserve the original
//! casing, so we can't just lowercase the text and forget where things came
//! from. [`FoldedText`] keeps the folded copy next to a byte map back into the
//! source. Lowercasing can change byte lengths (and even char counts: `İ`
//! folds to two chars), so the map is per folded byte.
//!
//! Folding is per char with `char::to_lowercase`, plus final sigma mapped to
//! `σ`. Query tokens go through the same function, so both sides always agree.
//! No locale-specific rules; Cyrillic, Greek and Latin with diacritics fold the
//! way Unicode says they do and accents are preserved.
//!
//! With `unicode-normalization`, both sides are NFC-composed before folding:
//! query tokens as a whole, text one composition cluster at a time (a char plus
//! whatever combines into it). `e` + U+0301 in a pasted text is then the same
//! `é` the user typed, and a match still maps back to whole source chars.

use std::ops::Range;

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::char::{canonical_combining_class, compose};
#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

#[inline]
fn push_folded(c: char, out: &mut String) {
    for lower in c.to_lowercase() {
        // Word-final sigma only differs by position; treat it as the regular form.
        out.push(if lower == 'ς' { 'σ' } else { lower });
    }
}

/// Case-fold a string char by char.
///
/// - "Париж" → "париж"
/// - "ΟΔΟΣ" → "οδοσ"
/// - "Café" → "café" (accents stay)
pub fn fold_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        push_folded(c, &mut out);
    }
    out
}

/// Fold a query token: NFC-compose, then case-fold.
///
/// Composition means a user typing `e` + combining acute gets the same token as
/// one typing `é`.
#[cfg(feature = "unicode-normalization")]
pub fn fold_token(token: &str) -> String {
    let composed: String = token.nfc().collect();
    fold_case(&composed)
}

/// Fold a query token (no composition without `unicode-normalization`).
#[cfg(not(feature = "unicode-normalization"))]
pub fn fold_token(token: &str) -> String {
    fold_case(token)
}

/// Collapse runs of whitespace into single spaces and trim the ends.
pub fn normalize_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Length in chars (Unicode scalar values), the unit every score and limit uses.
#[inline]
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// A case-folded view of a text that can map matches back to source offsets.
pub struct FoldedText {
    folded: String,
    /// Source byte range of the cluster that produced each folded byte.
    origin: Vec<(usize, usize)>,
}

impl FoldedText {
    pub fn new(source: &str) -> Self {
        let mut folded = String::with_capacity(source.len());
        let mut origin = Vec::with_capacity(source.len());

        let mut start = 0;
        while start < source.len() {
            let end = cluster_end(source, start);
            fold_cluster(&source[start..end], &mut folded);
            origin.resize(folded.len(), (start, end));
            start = end;
        }

        FoldedText {
            folded,
            origin,
        }
    }

    /// Does the text contain `needle`? The needle must already be folded.
    pub fn contains(&self, needle: &str) -> bool {
        !needle.is_empty() && self.folded.contains(needle)
    }

    /// Source byte range of the first occurrence of a folded needle.
    pub fn find_first(&self, needle: &str) -> Option<Range<usize>> {
        if needle.is_empty() {
            return None;
        }
        self.folded
            .find(needle)
            .map(|start| self.to_source(start, start + needle.len()))
    }

    /// Source byte ranges of every non-overlapping occurrence, left to right.
    pub fn find_all<'s>(&'s self, needle: &'s str) -> impl Iterator<Item = Range<usize>> + 's {
        let needle_len = needle.len();
        self.folded
            .match_indices(needle)
            .filter(move |_| needle_len > 0)
            .map(move |(start, _)| self.to_source(start, start + needle_len))
    }

    /// Widen a folded byte range to whole source chars.
    fn to_source(&self, start: usize, end: usize) -> Range<usize> {
        self.origin[start].0..self.origin[end - 1].1
    }
}

/// End of the composition cluster starting at `start`: one char plus every
/// following char that NFC would merge into it.
#[cfg(feature = "unicode-normalization")]
fn cluster_end(source: &str, start: usize) -> usize {
    let mut chars = source[start..].chars();
    let Some(first) = chars.next() else {
        return start;
    };

    let mut end = start + first.len_utf8();
    let mut last = first;
    for c in chars {
        let composed = compose(last, c);
        // Starters only join when they compose, e.g. Hangul jamo.
        if composed.is_none() && canonical_combining_class(c) == 0 {
            break;
        }
        end += c.len_utf8();
        last = composed.unwrap_or(c);
    }
    end
}

#[cfg(not(feature = "unicode-normalization"))]
fn cluster_end(source: &str, start: usize) -> usize {
    source[start..]
        .chars()
        .next()
        .map_or(start, |c| start + c.len_utf8())
}

#[cfg(feature = "unicode-normalization")]
fn fold_cluster(cluster: &str, out: &mut String) {
    if cluster.is_ascii() {
        cluster.chars().for_each(|c| push_folded(c, out));
    } else {
        cluster.nfc().for_each(|c| push_folded(c, out));
    }
}

#[cfg(not(feature = "unicode-normalization"))]
fn fold_cluster(cluster: &str, out: &mut String) {
    cluster.chars().for_each(|c| push_folded(c, out));
}
