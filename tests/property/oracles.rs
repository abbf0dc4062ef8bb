//! Reference implementations, written for clarity rather than speed.
//!
//! The oracle scorer folds the whole text once and uses `str::contains`, so it
//! shares nothing with the engine's offset-mapping matcher except `fold_case`.

use std::collections::HashSet;

use seekr::{fold_case, ParsedQuery, PHRASE_BONUS_MULTIPLIER};

fn present_len<'a>(folded: &str, needles: impl Iterator<Item = &'a String>) -> usize {
    let mut seen = HashSet::new();
    needles
        .filter(|n| seen.insert(n.as_str()))
        .filter(|n| folded.contains(n.as_str()))
        .map(|n| n.chars().count())
        .sum()
}

/// Base score before weighting.
pub fn oracle_base_score(text: &str, query: &ParsedQuery) -> usize {
    let folded = fold_case(text);

    let terms = present_len(&folded, query.terms().iter());
    let phrases = present_len(&folded, query.exact_phrases().iter()) * PHRASE_BONUS_MULTIPLIER;
    let field_values: Vec<String> = query.field_queries().iter().map(|fq| fq.value.clone()).collect();
    let fields = present_len(&folded, field_values.iter());
    let penalty = present_len(&folded, query.excluded_terms().iter());

    let mut or_total = 0;
    for group in query.or_queries() {
        match group
            .iter()
            .filter(|alt| folded.contains(alt.as_str()))
            .map(|alt| alt.chars().count())
            .max()
        {
            Some(len) => or_total += len,
            None => {
                or_total = 0;
                break;
            }
        }
    }

    (terms + phrases + fields + or_total).saturating_sub(penalty)
}

/// Strip `<tag>` and `</tag>` pairs the highlighter inserted.
pub fn strip_highlight(highlighted: &str, tag: &str) -> String {
    highlighted
        .replace(&format!("<{}>", tag), "")
        .replace(&format!("</{}>", tag), "")
}
