// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the seekr command-line interface.
//!
//! One subcommand per engine operation, plus `search` to rank a JSON file of
//! records. Every text argument is optional: when it's missing the text is read
//! from stdin, so `cat page.html | seekr highlight "rust"` works.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use seekr::{DEFAULT_HIGHLIGHT_TAG, DEFAULT_PAGE_SIZE, DEFAULT_SNIPPET_LENGTH, DEFAULT_WEIGHT};

#[derive(Parser)]
#[command(
    name = "seekr",
    about = "Parse, validate, score and highlight structured search queries",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show how a query is split into terms, phrases, exclusions, fields and OR-groups
    Parse {
        /// Search query
        query: String,

        /// Print the parsed query as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check a query against the validation rules (exit code 1 when invalid)
    Validate {
        /// Search query
        query: String,

        /// Print the validation result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score a text against a query and show the breakdown
    Score {
        /// Search query
        query: String,

        /// Text to score (stdin when omitted)
        text: Option<String>,

        /// Multiplier applied to the base score
        #[arg(short, long, default_value_t = DEFAULT_WEIGHT)]
        weight: f64,

        /// Print the breakdown as JSON
        #[arg(long)]
        json: bool,
    },

    /// Wrap matches in a text with markup
    Highlight {
        /// Search query
        query: String,

        /// Text to highlight (stdin when omitted)
        text: Option<String>,

        /// Tag name, optionally with attributes: `span class="hit"`
        #[arg(short, long, default_value = DEFAULT_HIGHLIGHT_TAG)]
        tag: String,
    },

    /// Extract a bounded excerpt around the first match
    Snippet {
        /// Search query
        query: String,

        /// Text to excerpt (stdin when omitted)
        text: Option<String>,

        /// Maximum excerpt length in characters, excluding the trailing "..."
        #[arg(short = 'n', long, default_value_t = DEFAULT_SNIPPET_LENGTH)]
        max_length: usize,
    },

    /// Rank a JSON array of records against a query
    ///
    /// Records are objects with a string `id` and string fields:
    /// `[{"id": "a", "name": "...", "description": "..."}]`.
    Search {
        /// Search query
        query: String,

        /// Path to the records file
        #[arg(short, long)]
        records: PathBuf,

        /// Path to a JSON object of field weights, e.g. `{"name": 3, "tags": 2}`
        #[arg(short, long)]
        weights: Option<PathBuf>,

        /// Maximum number of results to return
        #[arg(short, long, default_value_t = DEFAULT_PAGE_SIZE)]
        limit: usize,

        /// Number of results to skip
        #[arg(long, default_value_t = 0)]
        offset: usize,

        /// Snippet length in characters
        #[arg(long, default_value_t = DEFAULT_SNIPPET_LENGTH)]
        snippet_length: usize,

        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },
}
