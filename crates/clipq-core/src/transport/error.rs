//! Transport error type.

use thiserror::Error;

/// Failure before an HTTP status was obtained.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Curl reported an error (connect, DNS, timeout, etc.).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// The request completed without a response code.
    #[error("no HTTP response code from {0}")]
    NoStatus(String),
}
