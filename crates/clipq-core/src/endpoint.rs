//! Backend endpoint URLs derived from the configured base URL.

use anyhow::{bail, Context, Result};
use url::Url;

pub const PROCESS_VIDEOS_PATH: &str = "process_videos/";
pub const LOGIN_PATH: &str = "login/";
pub const HEALTH_PATH: &str = "health";

/// Resolved endpoint URLs for one backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub process_videos: String,
    pub login: String,
    pub health: String,
}

impl Endpoints {
    /// Joins endpoint paths onto `base`. A base path without a trailing slash
    /// is treated as a directory, so `http://h/api` yields `http://h/api/login/`.
    pub fn from_base(base: &str) -> Result<Self> {
        let mut url = Url::parse(base.trim()).with_context(|| format!("invalid backend URL: {base}"))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("backend URL must be http or https: {base}");
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        let join = |p: &str| -> Result<String> {
            Ok(url
                .join(p)
                .with_context(|| format!("join {p} onto {url}"))?
                .to_string())
        };
        Ok(Self {
            process_videos: join(PROCESS_VIDEOS_PATH)?,
            login: join(LOGIN_PATH)?,
            health: join(HEALTH_PATH)?,
        })
    }
}
