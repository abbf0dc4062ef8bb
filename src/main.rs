// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use seekr::{
    create_search_snippet, highlight_search_terms_with_tag, load_records, parse_search_query,
    rank_records, score_breakdown, validate_search_query, FieldWeights, RankOptions,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display;
use cli::{Cli, Commands};

/// Environment variable holding the log filter (`warn` when unset).
const LOG_ENV: &str = "SEEKR_LOG";

fn main() {
    init_logging();

    let cli = Cli::parse();
    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Logs go to stderr so stdout stays clean for `--json` output.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Run one subcommand. `Ok(false)` means "ran fine, answer is no".
fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Commands::Parse { query, json } => {
            let parsed = parse_search_query(&query);
            if json {
                println!("{}", serde_json::to_string_pretty(&parsed)?);
            } else {
                display::print_parsed(&parsed);
            }
        }

        Commands::Validate { query, json } => {
            let result = validate_search_query(&query);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                display::print_validation(&result);
            }
            return Ok(result.valid);
        }

        Commands::Score {
            query,
            text,
            weight,
            json,
        } => {
            let text = text_or_stdin(text)?;
            let breakdown = score_breakdown(&text, &parse_search_query(&query));
            if json {
                let value = serde_json::json!({
                    "breakdown": breakdown,
                    "base": breakdown.base(),
                    "weight": weight,
                    "score": breakdown.weighted(weight),
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                display::print_breakdown(&breakdown, weight);
            }
        }

        Commands::Highlight { query, text, tag } => {
            let text = text_or_stdin(text)?;
            let query = parse_search_query(&query);
            println!("{}", highlight_search_terms_with_tag(&text, &query, &tag));
        }

        Commands::Snippet {
            query,
            text,
            max_length,
        } => {
            let text = text_or_stdin(text)?;
            let query = parse_search_query(&query);
            println!("{}", create_search_snippet(&text, &query, max_length));
        }

        Commands::Search {
            query,
            records,
            weights,
            limit,
            offset,
            snippet_length,
            json,
        } => {
            let validation = validate_search_query(&query);
            if !validation.valid {
                display::print_validation(&validation);
                return Ok(false);
            }

            let records = load_records(&records)
                .with_context(|| format!("Failed to load records from {}", records.display()))?;
            let weights = match weights {
                Some(path) => load_weights(&path)?,
                None => FieldWeights::default(),
            };
            info!(records = records.len(), "loaded records");

            let options = RankOptions {
                limit,
                offset,
                snippet_length,
                ..RankOptions::default()
            };
            let page = rank_records(&records, &parse_search_query(&query), &weights, &options);
            if json {
                println!("{}", serde_json::to_string_pretty(&page)?);
            } else {
                display::print_page(&page, offset);
            }
        }
    }

    Ok(true)
}

/// The positional text, or everything on stdin when it was left out.
fn text_or_stdin(text: Option<String>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    debug!("reading text from stdin");
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read text from stdin")?;
    // A trailing newline from `echo` or a file is not part of the text.
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(buf)
}

fn load_weights(path: &Path) -> Result<FieldWeights> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read weights from {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Invalid weights JSON in {}", path.display()))
}
