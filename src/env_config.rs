//! Environment configuration for the `exceedance-curve` binary.
//!
//! Reads `EXCEEDANCE_SEED`, `EXCEEDANCE_OUTPUT_DIR`, and `RUST_LOG`. The
//! scenario parameters themselves are fixed (see [`crate::constants`]).

use std::io::IsTerminal;
use std::path::PathBuf;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub const SEED_VAR: &str = "EXCEEDANCE_SEED";
pub const OUTPUT_DIR_VAR: &str = "EXCEEDANCE_OUTPUT_DIR";
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Install the fmt subscriber on stderr, filtered by `RUST_LOG` (default
/// `info`). Colour codes are only emitted when stderr is a terminal.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

/// Parse a seed value; `None` when absent or malformed.
pub fn parse_seed(value: Option<&str>) -> Option<u64> {
    value.and_then(|s| s.trim().parse().ok())
}

/// Read `EXCEEDANCE_SEED`, falling back to a fresh random seed. The chosen
/// seed is logged so a run can be repeated.
pub fn seed() -> u64 {
    let raw = std::env::var(SEED_VAR).ok();
    let seed = match parse_seed(raw.as_deref()) {
        Some(s) => s,
        None => {
            if let Some(bad) = &raw {
                warn!("ignoring invalid {}={:?}", SEED_VAR, bad);
            }
            rand::random()
        }
    };
    info!(seed, "scenario seed");
    seed
}

/// Read `EXCEEDANCE_OUTPUT_DIR` (default `"output"`).
pub fn output_dir() -> PathBuf {
    let dir = std::env::var(OUTPUT_DIR_VAR)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string());
    PathBuf::from(dir)
}
