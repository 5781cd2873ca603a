//! Tracing subscriber setup.

use std::str::FromStr;

use anyhow::{anyhow, Result};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` takes precedence over `level`.
///
/// Logs go to stderr so stdout can carry `--json` output.
pub fn init_logging(level: &str) -> Result<()> {
    let level = parse_log_level(level)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("pharmacy_dwh={level},pharmacy_dwh_core={level}"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}

fn parse_log_level(level: &str) -> Result<Level> {
    Level::from_str(level).map_err(|_| {
        anyhow!("Invalid log level: {level}. Expected one of: trace, debug, info, warn, error")
    })
}
