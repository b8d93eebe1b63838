//! Diagnostic logging to disk.
//!
//! The terminal is owned by the UI, so when enabled the `tracing` output is
//! written as plain text to a log file (default:
//! `~/.local/share/crabcalc/crabcalc.log`). When disabled no subscriber is
//! installed and the `tracing` macros are no-ops.

use crate::config::{expand_home, LoggingConfig};
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;

fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("crabcalc")
        .join("crabcalc.log")
}

/// Parse a level name such as `"debug"`; unknown names fall back to `info`.
pub fn parse_level(name: &str) -> Level {
    name.trim().parse::<Level>().unwrap_or(Level::INFO)
}

/// Resolve the file the subscriber writes to.
pub fn log_path(config: &LoggingConfig) -> PathBuf {
    config
        .file
        .as_deref()
        .map(expand_home)
        .unwrap_or_else(default_log_path)
}

/// Install the global subscriber. Returns the log file path when logging is
/// enabled.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let path = log_path(config);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(parse_level(&config.level))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    tracing::info!(path = %path.display(), "logging started");
    Ok(Some(path))
}
