//! Custom cargo commands for seekr.
//!
//! Usage:
//!   cargo xtask verify         - Run full verification suite
//!   cargo xtask test           - Run all tests
//!   cargo xtask check          - Quick check
//!   cargo xtask bench          - Run benchmarks
//!   cargo xtask fuzz [SECS]    - Run every fuzz target for SECS seconds (default 60)

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Every target declared in fuzz/Cargo.toml.
const FUZZ_TARGETS: &[&str] = &[
    "parse_query",
    "validate_query",
    "score_calculation",
    "highlight",
    "snippet",
];

/// Invariant markers that must stay in src/.
const REQUIRED_INVARIANTS: &[&str] = &[
    "SCORE_NON_NEGATIVE",
    "ZERO_MATCH_IS_ZERO",
    "SPAN_NON_EMPTY",
    "SPANS_DISJOINT",
    "SNIPPET_BOUNDED",
];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => {
            let secs = match env::args().nth(2) {
                Some(arg) => arg
                    .parse::<u64>()
                    .with_context(|| format!("Invalid fuzz duration {:?}", arg))?,
                None => 60,
            };
            fuzz(secs)?
        }
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify       Run full verification suite (markers + tests in both feature sets + clippy)
  test         Run all Rust tests
  check        Quick check (cargo check + test + clippy)
  bench        Run benchmarks
  fuzz [SECS]  Run every fuzz target for SECS seconds (needs cargo-fuzz and nightly)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("seekr Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    println!("[2/4] Running Rust tests (default features)...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running Rust tests (no default features)...");
    run_cargo(&["test", "--quiet", "--no-default-features"])?;
    println!("✓ Sequential, non-normalizing build passed\n");

    println!("[4/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run each fuzz target in turn
fn fuzz(secs: u64) -> Result<()> {
    let max_time = format!("-max_total_time={}", secs);
    for (i, target) in FUZZ_TARGETS.iter().enumerate() {
        println!("[{}/{}] fuzzing {} for {}s...", i + 1, FUZZ_TARGETS.len(), target, secs);
        run_cargo(&["+nightly", "fuzz", "run", target, "--", &max_time])?;
    }
    println!("\n✓ No crashes");
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;
    let src_dir = root.join("src");

    let output = Command::new("grep")
        .args(["-rh", "INVARIANT:", "--include=*.rs", "."])
        .current_dir(&src_dir)
        .output()
        .context("Failed to run grep")?;
    let found = String::from_utf8_lossy(&output.stdout);

    let missing: Vec<&str> = REQUIRED_INVARIANTS
        .iter()
        .copied()
        .filter(|name| !found.contains(&format!("INVARIANT: {}", name)))
        .collect();

    if !missing.is_empty() {
        bail!(
            "Missing INVARIANT markers: {}. Someone may have removed a contract check!",
            missing.join(", ")
        );
    }

    Ok(())
}
