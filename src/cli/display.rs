// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the seekr CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `SEEKR_THEME` first, then `COLORFGBG`, then macOS system appearance, then
//! falls back to dark. `NO_COLOR` and non-TTY stdout switch colors off.
//!
//! # Theme detection order
//!
//! 1. `SEEKR_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. macOS appearance (via defaults read)
//! 4. Default to dark theme

use std::sync::OnceLock;

use seekr::{
    FieldQuery, ParsedQuery, RankedPage, ScoreBreakdown, ValidationResult, DEFAULT_HIGHLIGHT_TAG,
};

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("SEEKR_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg", where bg 7 and up (except 8) is a light background
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(output) = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            let stdout = String::from_utf8_lossy(&output.stdout);
            if !stdout.contains("Dark") && output.status.success() {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════
//
// OneDark: https://github.com/joshdick/onedark.vim
// One Light: https://github.com/sonph/onehalf

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117);     // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);   // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);  // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);     // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);     // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);      // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (102, 217, 239);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73);       // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);     // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);    // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);     // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164);  // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);      // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);    // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (1, 112, 158);
}

// ═══════════════════════════════════════════════════════════════════════════
// THEME-AWARE COLOR ACCESSORS
// ═══════════════════════════════════════════════════════════════════════════

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);
theme_color!(BRIGHT_CYAN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Cut to `max` visible chars, ending in `…` when something was dropped.
pub fn truncate_visible(s: &str, max: usize) -> String {
    if visible_len(s) <= max {
        return s.to_string();
    }
    let mut out = String::new();
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        }
        if in_escape {
            out.push(c);
            if c == 'm' {
                in_escape = false;
            }
            continue;
        }
        if len + 1 >= max {
            break;
        }
        out.push(c);
        len += 1;
    }
    out.push('…');
    if use_colors() {
        out.push_str(RESET);
    }
    out
}

/// Turn `<mark>…</mark>` into terminal styling, or leave the tags when colors are off.
pub fn marks_to_ansi(highlighted: &str) -> String {
    if !use_colors() {
        return highlighted.to_string();
    }
    let open = format!("<{}>", DEFAULT_HIGHLIGHT_TAG);
    let close = format!("</{}>", DEFAULT_HIGHLIGHT_TAG);
    highlighted
        .replace(&open, &format!("{}{}", BOLD, YELLOW()))
        .replace(&close, RESET)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = GRAY();
    let content = truncate_visible(content, BOX_WIDTH);
    let pad = BOX_WIDTH.saturating_sub(visible_len(&content));
    println!(
        "{}│{}{}{}{}│{}",
        border,
        RESET,
        content,
        " ".repeat(pad),
        border,
        RESET
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = GRAY();
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        RESET,
        label_part,
        border,
        "─".repeat(remaining),
        RESET
    );
}

/// Print section divider: ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let border = GRAY();
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}├{}{}{}{}┤{}",
        border,
        RESET,
        label_part,
        border,
        "─".repeat(remaining),
        RESET
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    let border = GRAY();
    println!("{}└{}┘{}", border, "─".repeat(BOX_WIDTH), RESET);
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

fn quoted_list(items: &[String]) -> String {
    if items.is_empty() {
        return themed(GRAY, &[DIM], "-");
    }
    items
        .iter()
        .map(|item| format!("\"{}\"", item))
        .collect::<Vec<_>>()
        .join(", ")
}

fn field_list(fields: &[FieldQuery]) -> String {
    if fields.is_empty() {
        return themed(GRAY, &[DIM], "-");
    }
    fields
        .iter()
        .map(|fq| {
            let name = if fq.known_field().is_some() {
                themed(BLUE, &[], &fq.field)
            } else {
                themed(RED, &[], &fq.field)
            };
            format!("{}:{}", name, fq.value)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Color-coded score value
pub fn score_value(score: f64) -> String {
    let text = format!("{:>8.2}", score);
    if score >= 20.0 {
        themed(BRIGHT_GREEN, &[BOLD], &text)
    } else if score >= 5.0 {
        themed(GREEN, &[], &text)
    } else if score > 0.0 {
        themed(YELLOW, &[], &text)
    } else {
        themed(GRAY, &[], &text)
    }
}

fn label(name: &str) -> String {
    themed(MAGENTA, &[], &format!("{:<12}", name))
}

// ═══════════════════════════════════════════════════════════════════════════
// RENDERERS
// ═══════════════════════════════════════════════════════════════════════════

pub fn print_parsed(query: &ParsedQuery) {
    section_top("QUERY");
    row(&format!(" {}\"{}\"", label("original"), query.original_query()));
    section_mid("CATEGORIES");
    row(&format!(" {}{}", label("terms"), quoted_list(query.terms())));
    row(&format!(" {}{}", label("phrases"), quoted_list(query.exact_phrases())));
    row(&format!(" {}{}", label("excluded"), quoted_list(query.excluded_terms())));
    row(&format!(" {}{}", label("fields"), field_list(query.field_queries())));
    if query.or_queries().is_empty() {
        row(&format!(" {}{}", label("or-groups"), quoted_list(&[])));
    } else {
        for (i, group) in query.or_queries().iter().enumerate() {
            let name = if i == 0 { "or-groups" } else { "" };
            row(&format!(" {}({})", label(name), quoted_list(group)));
        }
    }
    section_bot();
}

pub fn print_validation(result: &ValidationResult) {
    if result.valid {
        println!("{} query is valid", themed(GREEN, &[BOLD], "✓"));
        return;
    }
    println!("{} query is invalid", themed(RED, &[BOLD], "✗"));
    for error in &result.errors {
        println!("  {} {}", themed(RED, &[], "•"), error);
    }
}

pub fn print_breakdown(breakdown: &ScoreBreakdown, weight: f64) {
    let line = |name: &str, value: usize, sign: &str| {
        let text = format!("{}{}", sign, value);
        let value = if value == 0 {
            themed(GRAY, &[DIM], &text)
        } else {
            text
        };
        row(&format!(" {}{:>8}", label(name), value));
    };

    section_top("SCORE");
    line("terms", breakdown.terms, "+");
    line("phrases", breakdown.phrases, "+");
    line("fields", breakdown.fields, "+");
    line("or-groups", breakdown.or_groups, "+");
    line("excluded", breakdown.penalty, "-");
    section_mid("TOTAL");
    row(&format!(" {}{:>8}", label("base"), breakdown.base()));
    row(&format!(" {}{:>8}", label("weight"), format!("×{}", weight)));
    row(&format!(" {}{}", label("score"), score_value(breakdown.weighted(weight))));
    section_bot();
}

pub fn print_page(page: &RankedPage, offset: usize) {
    if page.results.is_empty() {
        println!(
            "{}",
            themed(GRAY, &[], &format!("No results ({} matched)", page.total))
        );
        return;
    }

    let heading = format!(
        "RESULTS {}-{} OF {}",
        offset + 1,
        offset + page.results.len(),
        page.total
    );
    section_top(&heading);
    for (i, result) in page.results.iter().enumerate() {
        if i > 0 {
            section_mid(&format!("#{}", offset + i + 1));
        }
        row(&format!(
            " {} {}",
            score_value(result.score),
            themed(BRIGHT_CYAN, &[BOLD], &result.id)
        ));
        for (field, text) in &result.highlights {
            row(&format!("   {}{}", label(field), marks_to_ansi(text)));
        }
        if let Some(snippet) = &result.snippet {
            row(&format!("   {}{}", label("snippet"), snippet));
        }
    }
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
