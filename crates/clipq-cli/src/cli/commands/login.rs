//! `clipq login` – log the backend into its upload account.

use anyhow::{Context, Result};
use clipq_core::form::Outcome;
use clipq_core::payload::Credentials;
use std::io::{stdout, Write};

use super::Session;

fn prompt_password() -> Result<String> {
    print!("Password: ");
    stdout().flush()?;
    rpassword::read_password().context("read password")
}

/// Uses the given password, or prompts for one. A blank username skips the
/// prompt; the form handler then rejects the empty credentials.
pub fn resolve_password<F>(username: &str, password: Option<String>, prompt: F) -> Result<String>
where
    F: FnOnce() -> Result<String>,
{
    match password {
        Some(p) => Ok(p),
        None if username.trim().is_empty() => Ok(String::new()),
        None => prompt(),
    }
}

pub async fn run_login(
    session: Session,
    username: String,
    password: Option<String>,
    code: Option<String>,
) -> Result<Outcome> {
    let password = resolve_password(&username, password, prompt_password)?;
    let credentials = Credentials::new(username, password, code);
    session.run(move |h| h.login(&credentials)).await
}
