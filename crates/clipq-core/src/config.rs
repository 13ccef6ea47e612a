use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::payload::LinksField;

/// Default backend base URL (the FastAPI service listens on port 8000).
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

/// Global configuration loaded from `~/.config/clipq/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipqConfig {
    /// Base URL of the backend; endpoint paths are joined onto it.
    pub backend_url: String,
    /// JSON key carrying the link array in the submit body.
    #[serde(default)]
    pub links_field: LinksField,
    /// Optional connect timeout in seconds (None = libcurl default).
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Optional whole-request timeout in seconds (None = wait indefinitely).
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ClipqConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            links_field: LinksField::default(),
            connect_timeout_secs: None,
            timeout_secs: None,
        }
    }
}

impl ClipqConfig {
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("clipq")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ClipqConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

/// Like [`load_or_init`] but with an explicit path (used by tests).
pub fn load_or_init_at(path: &Path) -> Result<ClipqConfig> {
    if !path.exists() {
        let default_cfg = ClipqConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ClipqConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
