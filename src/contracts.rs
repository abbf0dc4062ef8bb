// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the engine's output invariants.
//!
//! All checks are `debug_assert!`, so they cost nothing in release builds and
//! fail loudly in tests, fuzzing and debug runs.
//!
//! | Contract                | Invariant                                          |
//! |-------------------------|----------------------------------------------------|
//! | `check_score_valid`     | score is never NaN and never negative              |
//! | `check_spans_disjoint`  | highlight spans are sorted, non-empty, disjoint    |
//! | `check_snippet_bounded` | snippet length ≤ `max_length + len(ELLIPSIS)`      |

use crate::highlight::MatchSpan;
use crate::snippet::ELLIPSIS;
use crate::utils::char_len;

/// A relevance score must be a usable sort key.
#[inline]
pub(crate) fn check_score_valid(score: f64, weight: f64) {
    // INVARIANT: SCORE_NON_NEGATIVE
    debug_assert!(
        !score.is_nan() && score >= 0.0,
        "Contract violation: score {} for weight {} must be a non-negative number",
        score,
        weight
    );
}

/// Accepted highlight spans must render without nesting or reordering.
#[inline]
pub(crate) fn check_spans_disjoint(spans: &[MatchSpan]) {
    for span in spans {
        // INVARIANT: SPAN_NON_EMPTY
        debug_assert!(
            span.start < span.end,
            "Contract violation: empty span {}..{}",
            span.start,
            span.end
        );
    }
    for pair in spans.windows(2) {
        // INVARIANT: SPANS_DISJOINT
        debug_assert!(
            pair[0].end <= pair[1].start,
            "Contract violation: spans {}..{} and {}..{} overlap or are out of order",
            pair[0].start,
            pair[0].end,
            pair[1].start,
            pair[1].end
        );
    }
}

/// A snippet is at most `max_length` chars plus the trailing marker.
#[inline]
pub(crate) fn check_snippet_bounded(snippet: &str, max_length: usize) {
    // INVARIANT: SNIPPET_BOUNDED
    debug_assert!(
        char_len(snippet) <= max_length + char_len(ELLIPSIS),
        "Contract violation: snippet of {} chars exceeds {} + ellipsis",
        char_len(snippet),
        max_length
    );
}
