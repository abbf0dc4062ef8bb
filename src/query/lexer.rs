// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The lexical pass shared by the parser and the validator.

use crate::utils::normalize_whitespace;

/// The OR connector. Case-sensitive and only as a standalone token.
pub(crate) const OR_CONNECTOR: &str = "OR";

const QUOTE: char = '"';

/// Output of [`lex`]: quoted phrases pulled out, everything else split on whitespace.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Lexed {
    /// Contents of matched quote pairs, trimmed and not yet folded.
    pub phrases: Vec<String>,
    /// Whitespace-delimited tokens outside matched quote pairs.
    pub tokens: Vec<String>,
}

/// Split a query into phrases and tokens.
///
/// Quotes pair up left to right. A dangling last quote is ordinary text and
/// stays glued to whatever token it touches. A phrase splits the token stream,
/// so `a"b c"d` yields the phrase `b c` and the tokens `a`, `d`.
///
/// A dash-prefixed phrase is not an exclusion: `-"cheap hotel"` is the phrase
/// `cheap hotel`, and the bare dash it leaves behind is dropped.
pub(crate) fn lex(input: &str) -> Lexed {
    let normalized = normalize_whitespace(input);
    let quotes: Vec<usize> = normalized.match_indices(QUOTE).map(|(i, _)| i).collect();
    let paired = quotes.len() - quotes.len() % 2;

    let mut phrases = Vec::new();
    let mut remainder = String::with_capacity(normalized.len());
    let mut cursor = 0;

    for pair in quotes[..paired].chunks_exact(2) {
        let (open, close) = (pair[0], pair[1]);
        let before = &normalized[cursor..open];
        let before = match before.strip_suffix('-') {
            Some(rest) if rest.is_empty() || rest.ends_with(' ') => rest,
            _ => before,
        };
        remainder.push_str(before);
        remainder.push(' ');

        let phrase = normalized[open + 1..close].trim();
        if !phrase.is_empty() {
            phrases.push(phrase.to_string());
        }
        cursor = close + 1;
    }
    remainder.push_str(&normalized[cursor..]);

    Lexed {
        phrases,
        tokens: remainder.split_whitespace().map(str::to_string).collect(),
    }
}

/// What a single token means, by precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    /// `-word`, with the dash stripped.
    Exclusion(&'a str),
    /// `field:value`, unfolded.
    Field { field: &'a str, value: &'a str },
    /// A standalone `OR`.
    Connector,
    Word(&'a str),
}

pub(crate) fn classify(token: &str) -> Token<'_> {
    if let Some(rest) = token.strip_prefix('-') {
        if !rest.is_empty() {
            return Token::Exclusion(rest);
        }
    }
    if let Some((field, value)) = split_field(token) {
        return Token::Field { field, value };
    }
    if token == OR_CONNECTOR {
        return Token::Connector;
    }
    Token::Word(token)
}

/// `identifier:value` with a non-empty value. Splits on the first colon.
fn split_field(token: &str) -> Option<(&str, &str)> {
    let (field, value) = token.split_once(':')?;
    if value.is_empty() || !is_identifier(field) {
        return None;
    }
    Some((field, value))
}

fn is_identifier(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
