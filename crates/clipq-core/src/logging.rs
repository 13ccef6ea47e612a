//! Tracing setup for the `clipq` binary.
//!
//! Events are appended to `$XDG_STATE_HOME/clipq/clipq.log` so the status
//! line on stdout stays clean. If that file cannot be opened, events go to
//! stderr instead. `RUST_LOG` overrides the default filter.

use anyhow::{anyhow, Context, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "clipq.log";

const DEFAULT_FILTER: &str = "info,clipq=debug,clipq_core=debug";

/// `$XDG_STATE_HOME/clipq`.
pub fn log_dir() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("clipq")?;
    Ok(xdg_dirs.get_state_home().join("clipq"))
}

/// Creates `dir` if needed and opens the log file in it for appending.
fn open_log_file(dir: &Path) -> Result<(File, PathBuf)> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let path = dir.join(LOG_FILE_NAME);
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open {}", path.display()))?;
    Ok((file, path))
}

/// Installs the global subscriber for this process.
///
/// Returns the log file path, or `None` when events go to stderr because the
/// file was unavailable. Errors only if a subscriber is already installed.
pub fn init_logging() -> Result<Option<PathBuf>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false);

    match log_dir().and_then(|dir| open_log_file(&dir)) {
        Ok((file, path)) => {
            builder
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| anyhow!("install tracing subscriber: {}", e))?;
            tracing::info!("clipq logging to {}", path.display());
            Ok(Some(path))
        }
        Err(err) => {
            builder
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow!("install tracing subscriber: {}", e))?;
            tracing::warn!("log file unavailable, logging to stderr: {:#}", err);
            Ok(None)
        }
    }
}
