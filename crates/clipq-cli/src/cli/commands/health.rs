//! `clipq health` – ping the backend.

use anyhow::Result;
use clipq_core::form::Outcome;

use super::Session;

pub async fn run_health(session: Session) -> Result<Outcome> {
    session.run(|h| h.health()).await
}
