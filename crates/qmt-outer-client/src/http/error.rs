/*
[INPUT]:  Error sources (HTTP transport, serialization, configuration)
[OUTPUT]: Structured error types for the whole crate
[POS]:    Error handling layer - unified error types
[UPDATE]: When adding new error sources or improving error messages
*/

use std::time::Duration;

use thiserror::Error;

/// Main error type for the QMT outer trade client
#[derive(Error, Debug)]
pub enum QmtError {
    /// Request exceeded the configured deadline; the in-flight call was aborted
    #[error("request timed out after {duration:?}")]
    Timeout { duration: Duration },

    /// Transport failure (DNS, connection refused, broken connection)
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Serialization/deserialization failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl QmtError {
    /// Classify a reqwest failure, keeping timeouts distinct from other
    /// transport errors. `deadline` is the timeout the client was built with.
    pub(crate) fn from_reqwest(err: reqwest::Error, deadline: Duration) -> Self {
        if err.is_timeout() {
            QmtError::Timeout { duration: deadline }
        } else {
            QmtError::Network(err)
        }
    }

    /// Check if the error is a timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, QmtError::Timeout { .. })
    }

    /// Check if the error is a transport failure
    pub fn is_network(&self) -> bool {
        matches!(self, QmtError::Network(_))
    }
}

/// Result type alias for QMT client operations
pub type Result<T> = std::result::Result<T, QmtError>;
