//! CLI command handlers. Each command is in its own file.

mod health;
mod login;
mod submit;

pub use health::run_health;
pub use login::run_login;
pub use submit::run_submit;

use anyhow::{Context, Result};
use clipq_core::config::ClipqConfig;
use clipq_core::endpoint::Endpoints;
use clipq_core::form::{FormHandler, Outcome, StdoutStatus};
use clipq_core::transport::CurlTransport;

pub type StdoutHandler = FormHandler<CurlTransport, StdoutStatus>;

/// Everything a command needs to build its form handler.
#[derive(Debug, Clone)]
pub struct Session {
    cfg: ClipqConfig,
    endpoints: Endpoints,
}

impl Session {
    pub fn new(cfg: &ClipqConfig, backend_override: Option<&str>) -> Result<Self> {
        let base = backend_override.unwrap_or(&cfg.backend_url);
        let endpoints = Endpoints::from_base(base)?;
        tracing::debug!("using backend {}", base);
        Ok(Self {
            cfg: cfg.clone(),
            endpoints,
        })
    }

    fn handler(self) -> StdoutHandler {
        let transport = CurlTransport::new(self.cfg.connect_timeout(), self.cfg.timeout());
        FormHandler::new(transport, StdoutStatus, self.endpoints, self.cfg.links_field)
    }

    /// Runs one form action on a blocking task (curl is synchronous).
    async fn run<F>(self, action: F) -> Result<Outcome>
    where
        F: FnOnce(&mut StdoutHandler) -> Outcome + Send + 'static,
    {
        let mut handler = self.handler();
        tokio::task::spawn_blocking(move || action(&mut handler))
            .await
            .context("request task join")
    }
}
