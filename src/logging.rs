//! Log file setup.
//!
//! The terminal belongs to the viewer, so log events go to
//! `<cache dir>/gantt/gantt.log` instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "GANTT_LOG";

/// Filter used when `GANTT_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "warn";

/// Returns the path of the log file.
///
/// # Errors
///
/// Returns an error if the platform has no cache directory.
pub fn log_file_path() -> Result<PathBuf> {
    let cache = dirs::cache_dir().context("no cache directory on this platform")?;
    Ok(cache.join("gantt").join("gantt.log"))
}

/// Installs the global tracing subscriber, appending to the log file.
///
/// Returns the log file path.
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
        .context("failed to install tracing subscriber")?;

    Ok(path)
}
