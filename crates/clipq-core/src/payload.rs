//! JSON request bodies and response parsing for the backend API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::links::LinkList;

/// Key under which the link array is sent.
///
/// The web form posts `instagram_links`; the backend's request model names
/// the same array `video_links`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinksField {
    #[default]
    InstagramLinks,
    VideoLinks,
}

impl LinksField {
    pub fn as_str(self) -> &'static str {
        match self {
            LinksField::InstagramLinks => "instagram_links",
            LinksField::VideoLinks => "video_links",
        }
    }
}

/// Builds `{"<field>": [links...]}` preserving link order.
pub fn links_body(field: LinksField, links: &LinkList) -> Value {
    let array = links
        .as_slice()
        .iter()
        .cloned()
        .map(Value::String)
        .collect();
    let mut obj = Map::new();
    obj.insert(field.as_str().to_string(), Value::Array(array));
    Value::Object(obj)
}

/// Login form contents. `verification_code` is the optional 2FA code.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub verification_code: Option<String>,
}

impl Credentials {
    /// Builds credentials, treating a blank verification code as absent.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        verification_code: Option<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            verification_code: verification_code
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
        }
    }

    /// Username and password must both be non-empty.
    pub fn is_complete(&self) -> bool {
        !self.username.trim().is_empty() && !self.password.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("verification_code", &self.verification_code.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct MessageBody {
    message: String,
}

#[derive(Debug, Deserialize)]
struct DetailBody {
    detail: Value,
}

#[derive(Debug, Deserialize)]
struct HealthBody {
    status: String,
}

/// Extracts the string `message` field from a JSON response body.
pub fn parse_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<MessageBody>(body)
        .ok()
        .map(|b| b.message)
}

/// Extracts the error `detail` (FastAPI style) for logging.
pub fn parse_detail(body: &[u8]) -> Option<String> {
    let parsed: DetailBody = serde_json::from_slice(body).ok()?;
    match parsed.detail {
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// Health `status` value of a backend that is up.
pub const HEALTHY: &str = "healthy";

/// Extracts the `status` field of the health endpoint.
pub fn parse_health(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<HealthBody>(body)
        .ok()
        .map(|b| b.status)
}
