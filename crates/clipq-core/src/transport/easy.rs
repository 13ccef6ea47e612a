//! libcurl-backed transport.

use super::{HttpResponse, Transport, TransportError};
use std::time::Duration;

/// Performs one blocking request per call. No retries.
#[derive(Debug, Clone, Default)]
pub struct CurlTransport {
    connect_timeout: Option<Duration>,
    timeout: Option<Duration>,
}

impl CurlTransport {
    pub fn new(connect_timeout: Option<Duration>, timeout: Option<Duration>) -> Self {
        Self {
            connect_timeout,
            timeout,
        }
    }

    fn perform(
        &self,
        url: &str,
        json_body: Option<&[u8]>,
    ) -> Result<HttpResponse, TransportError> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        if let Some(d) = self.connect_timeout {
            easy.connect_timeout(d)?;
        }
        if let Some(d) = self.timeout {
            easy.timeout(d)?;
        }

        let mut list = curl::easy::List::new();
        list.append("Accept: application/json")?;
        match json_body {
            Some(data) => {
                list.append("Content-Type: application/json")?;
                easy.post(true)?;
                easy.post_fields_copy(data)?;
            }
            None => easy.get(true)?,
        }
        easy.http_headers(list)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        if status == 0 {
            return Err(TransportError::NoStatus(url.to_string()));
        }
        tracing::debug!(url, status, bytes = body.len(), "response received");
        Ok(HttpResponse { status, body })
    }
}

impl Transport for CurlTransport {
    fn post_json(&mut self, url: &str, body: &[u8]) -> Result<HttpResponse, TransportError> {
        tracing::debug!(url, bytes = body.len(), "POST");
        self.perform(url, Some(body))
    }

    fn get(&mut self, url: &str) -> Result<HttpResponse, TransportError> {
        tracing::debug!(url, "GET");
        self.perform(url, None)
    }
}
