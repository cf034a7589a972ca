/*
[INPUT]:  Raw HTTP status and body bytes
[OUTPUT]: Typed ApiResponse with a tagged JSON-or-raw body
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde_json::Value;

/// Response body representation.
///
/// Bodies that parse as JSON are `Json`; anything else is returned as
/// `Raw` text. The fallback is not an error condition, callers handle
/// both variants explicitly.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Raw(String),
}

impl ResponseBody {
    /// Parse body text, falling back to raw on invalid JSON.
    pub fn from_text(text: String) -> Self {
        match serde_json::from_str(&text) {
            Ok(value) => ResponseBody::Json(value),
            Err(_) => ResponseBody::Raw(text),
        }
    }

    /// JSON value if the body parsed as JSON.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseBody::Json(value) => Some(value),
            ResponseBody::Raw(_) => None,
        }
    }
}

/// Outcome of one API call: HTTP status plus the parsed-or-raw body.
///
/// Non-2xx statuses are carried here rather than raised as errors, so
/// the caller can inspect the server's error payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: ResponseBody,
}

impl ApiResponse {
    /// True when the HTTP status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The server's `error` field, when present in a JSON body.
    pub fn error_message(&self) -> Option<&str> {
        self.body
            .as_json()
            .and_then(|value| value.get("error"))
            .and_then(Value::as_str)
    }
}
