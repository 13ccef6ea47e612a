//! CLI for clipq.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clipq_core::config;
use std::path::PathBuf;

use commands::{run_health, run_login, run_submit, Session};

/// Top-level CLI for clipq.
#[derive(Debug, Parser)]
#[command(name = "clipq")]
#[command(about = "clipq: submit video links to a repost backend", long_about = None)]
pub struct Cli {
    /// Backend base URL (overrides `backend_url` in config.toml).
    #[arg(long, global = true, value_name = "URL")]
    pub backend: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Queue video links for download and re-upload.
    Submit {
        /// Video links, in order. Blank and repeated links are dropped.
        links: Vec<String>,

        /// Read more links from a file, one per line (`-` for stdin).
        #[arg(long, value_name = "PATH")]
        from_file: Option<PathBuf>,
    },

    /// Log the backend into its upload account.
    Login {
        /// Account username.
        #[arg(long, short)]
        username: String,

        /// Account password (prompted without echo if omitted).
        #[arg(long, short)]
        password: Option<String>,

        /// Two-factor verification code.
        #[arg(long, value_name = "CODE")]
        code: Option<String>,
    },

    /// Check that the backend is up.
    Health,
}

impl CliCommand {
    /// Returns Ok(true) when the backend accepted the action.
    pub async fn run_from_args() -> Result<bool> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let session = Session::new(&cfg, cli.backend.as_deref())?;

        let outcome = match cli.command {
            CliCommand::Submit { links, from_file } => {
                run_submit(session, links, from_file.as_deref()).await?
            }
            CliCommand::Login {
                username,
                password,
                code,
            } => run_login(session, username, password, code).await?,
            CliCommand::Health => run_health(session).await?,
        };

        Ok(outcome.is_done())
    }
}

#[cfg(test)]
mod tests;
