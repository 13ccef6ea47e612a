//! HTTP transport seam.
//!
//! The form handler only depends on [`Transport`]; the real implementation
//! is [`CurlTransport`] (libcurl easy interface).

mod easy;
mod error;

pub use easy::CurlTransport;
pub use error::TransportError;

/// Status code and raw body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Blocking request/response transport. Call from `spawn_blocking` if used from async code.
pub trait Transport {
    /// POSTs `body` with `Content-Type: application/json`.
    fn post_json(&mut self, url: &str, body: &[u8]) -> Result<HttpResponse, TransportError>;

    fn get(&mut self, url: &str) -> Result<HttpResponse, TransportError>;
}
