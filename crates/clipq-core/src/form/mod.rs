//! Form handler: validate input, send one request, report the outcome.
//!
//! Each operation sets the status line at most three times: a validation
//! message (and stop), or a progress message followed by either the
//! backend's `message` verbatim or a failure string.

mod status;

pub use status::{
    generic_failure, http_failure, unhealthy, RecordedStatus, StatusLine, StdoutStatus,
    EMPTY_CREDENTIALS, EMPTY_LINKS, HEALTH_FAILED, HEALTH_UNHEALTHY, LOGGING_IN, LOGIN_FAILED,
    PROCESSING, PROCESS_FAILED,
};

use crate::endpoint::Endpoints;
use crate::links::LinkList;
use crate::payload::{self, Credentials, LinksField};
use crate::transport::{HttpResponse, Transport, TransportError};

/// Result of one form action, mirroring the final status text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Input failed validation; no request was sent.
    Rejected,
    /// Backend accepted the request; carries the text shown to the user.
    Done(String),
    /// Network failure (`http_status` is None) or a non-2xx / unusable response.
    Failed { http_status: Option<u32> },
}

impl Outcome {
    pub fn is_done(&self) -> bool {
        matches!(self, Outcome::Done(_))
    }
}

pub struct FormHandler<T, S> {
    transport: T,
    status: S,
    endpoints: Endpoints,
    links_field: LinksField,
}

impl<T: Transport, S: StatusLine> FormHandler<T, S> {
    pub fn new(transport: T, status: S, endpoints: Endpoints, links_field: LinksField) -> Self {
        Self {
            transport,
            status,
            endpoints,
            links_field,
        }
    }

    pub fn status(&self) -> &S {
        &self.status
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Submits links for processing. Blank and duplicate entries are dropped first.
    pub fn submit_links<I, L>(&mut self, inputs: I) -> Outcome
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        let links: LinkList = inputs.into_iter().collect();
        if links.is_empty() {
            self.status.set(EMPTY_LINKS);
            return Outcome::Rejected;
        }

        self.status.set(PROCESSING);
        tracing::info!(count = links.len(), field = self.links_field.as_str(), "submitting links");
        let body = payload::links_body(self.links_field, &links);
        let url = self.endpoints.process_videos.clone();
        self.post(&url, &body, PROCESS_FAILED)
    }

    /// Logs the backend into its upload account.
    pub fn login(&mut self, credentials: &Credentials) -> Outcome {
        if !credentials.is_complete() {
            self.status.set(EMPTY_CREDENTIALS);
            return Outcome::Rejected;
        }

        self.status.set(LOGGING_IN);
        tracing::info!(username = %credentials.username, "logging in");
        let url = self.endpoints.login.clone();
        self.post(&url, credentials, LOGIN_FAILED)
    }

    /// Pings the backend's health endpoint. Only a `healthy` status counts as up.
    pub fn health(&mut self) -> Outcome {
        let url = self.endpoints.health.clone();
        let result = self.transport.get(&url);
        let resp = match self.check(&url, result, HEALTH_FAILED) {
            Ok(resp) => resp,
            Err(outcome) => return outcome,
        };

        match payload::parse_health(&resp.body) {
            Some(state) if state == payload::HEALTHY => {
                tracing::info!("{} -> {}", url, state);
                self.status.set(&state);
                Outcome::Done(state)
            }
            Some(state) => {
                tracing::warn!("{} reports status {}", url, state);
                self.status.set(&unhealthy(&state));
                Outcome::Failed {
                    http_status: Some(resp.status),
                }
            }
            None => self.unusable(&url, resp.status, HEALTH_FAILED),
        }
    }

    fn post<B: serde::Serialize>(&mut self, url: &str, body: &B, failure: &str) -> Outcome {
        let bytes = match serde_json::to_vec(body) {
            Ok(b) => b,
            Err(e) => {
                tracing::error!("encode request body for {}: {}", url, e);
                self.status.set(&generic_failure(failure));
                return Outcome::Failed { http_status: None };
            }
        };
        let result = self.transport.post_json(url, &bytes);
        let resp = match self.check(url, result, failure) {
            Ok(resp) => resp,
            Err(outcome) => return outcome,
        };

        match payload::parse_message(&resp.body) {
            Some(text) => {
                tracing::info!("{} -> {}", url, text);
                self.status.set(&text);
                Outcome::Done(text)
            }
            None => self.unusable(url, resp.status, failure),
        }
    }

    /// Passes through 2xx responses. Transport errors and non-2xx statuses
    /// set the failure status and come back as the final outcome; a non-2xx
    /// body is never shown, even when it carries a `message`.
    fn check(
        &mut self,
        url: &str,
        result: Result<HttpResponse, TransportError>,
        failure: &str,
    ) -> Result<HttpResponse, Outcome> {
        let resp = match result {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("request to {} failed: {}", url, e);
                self.status.set(&generic_failure(failure));
                return Err(Outcome::Failed { http_status: None });
            }
        };

        if !resp.is_success() {
            match payload::parse_detail(&resp.body) {
                Some(detail) => {
                    tracing::warn!("{} returned HTTP {}: {}", url, resp.status, detail)
                }
                None => tracing::warn!("{} returned HTTP {}", url, resp.status),
            }
            self.status.set(&http_failure(failure, resp.status));
            return Err(Outcome::Failed {
                http_status: Some(resp.status),
            });
        }

        Ok(resp)
    }

    fn unusable(&mut self, url: &str, status: u32, failure: &str) -> Outcome {
        tracing::warn!("{} returned HTTP {} without a usable body", url, status);
        self.status.set(&generic_failure(failure));
        Outcome::Failed {
            http_status: Some(status),
        }
    }
}
