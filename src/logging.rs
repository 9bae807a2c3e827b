//! # Logging
//!
//! Tracing output goes to a file because the terminal belongs to the TUI.
//! Without `--log-file` no subscriber is installed and events are dropped.
//!
//! The filter comes from the `LANDING_LOG` environment variable using the
//! usual `tracing_subscriber::EnvFilter` syntax, defaulting to `info`.

use anyhow::{anyhow, Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "LANDING_LOG";

/// Build the filter from [`LOG_ENV`], falling back to `info`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install a global subscriber that appends plain-text events to `path`.
pub fn init_file_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow!("Failed to install logger: {e}"))?;

    tracing::info!(path = %path.display(), "logging initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_rejects_unwritable_path() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("missing").join("landing.log");

        let err = init_file_logging(&path).expect_err("parent dir does not exist");
        assert!(err.to_string().contains("Failed to open log file"));
    }
}
