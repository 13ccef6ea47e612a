//! Status line: where the form handler reports progress and results.

use std::io::Write;

/// Validation message when no link survives normalization.
pub const EMPTY_LINKS: &str = "Please enter at least one link.";
pub const PROCESSING: &str = "Processing...";
pub const PROCESS_FAILED: &str = "Error processing videos";

pub const EMPTY_CREDENTIALS: &str = "Please enter username and password.";
pub const LOGGING_IN: &str = "Logging in...";
pub const LOGIN_FAILED: &str = "Error logging in";

pub const HEALTH_FAILED: &str = "Backend unreachable";
pub const HEALTH_UNHEALTHY: &str = "Backend unhealthy";

/// Sink for user-facing status text. The last value set is what the user sees.
pub trait StatusLine {
    fn set(&mut self, text: &str);
}

/// Prints each status update on its own stdout line.
#[derive(Debug, Default)]
pub struct StdoutStatus;

impl StatusLine for StdoutStatus {
    fn set(&mut self, text: &str) {
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{text}");
        let _ = out.flush();
    }
}

/// Keeps every status update in memory.
#[derive(Debug, Default, Clone)]
pub struct RecordedStatus {
    pub history: Vec<String>,
}

impl RecordedStatus {
    pub fn current(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }
}

impl StatusLine for RecordedStatus {
    fn set(&mut self, text: &str) {
        self.history.push(text.to_string());
    }
}

/// `"<prefix>: HTTP <code>"` for a non-2xx response.
pub fn http_failure(prefix: &str, status: u32) -> String {
    format!("{prefix}: HTTP {status}")
}

/// `"<prefix>."` for network failures and unusable responses.
pub fn generic_failure(prefix: &str) -> String {
    format!("{prefix}.")
}

/// `"Backend unhealthy: <state>"` when the health endpoint answers with anything but `healthy`.
pub fn unhealthy(state: &str) -> String {
    format!("{HEALTH_UNHEALTHY}: {state}")
}
