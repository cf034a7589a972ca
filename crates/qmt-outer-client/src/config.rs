/*
[INPUT]:  Environment variables or explicit values (base URL, credentials, timeouts)
[OUTPUT]: ApiConfig consumed by QmtClient
[POS]:    Configuration layer - process-wide, read-only after construction
[UPDATE]: When configuration surface changes
*/

use std::env;
use std::time::Duration;

use crate::http::{QmtError, Result};

/// Environment variable names for `ApiConfig::from_env`
const ENV_BASE_URL: &str = "QMT_BASE_URL";
const ENV_CLIENT_ID: &str = "QMT_CLIENT_ID";
const ENV_SECRET_KEY: &str = "QMT_SECRET_KEY";

/// Configuration for the QMT outer trade API client.
///
/// Loaded once and read-only thereafter; credentials are never mutated
/// after the client is constructed.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the trading server, e.g. `http://localhost:9091`
    pub base_url: String,
    /// Client identifier sent in the `X-Client-ID` header
    pub client_id: String,
    /// Shared secret for HMAC-SHA256 request signing
    pub secret_key: String,
    /// Total request timeout
    pub timeout: Duration,
    /// Connection establishment timeout
    pub connect_timeout: Duration,
}

impl ApiConfig {
    /// Create a config with default timeouts (30s total, 10s connect).
    pub fn new(
        base_url: impl Into<String>,
        client_id: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            client_id: client_id.into(),
            secret_key: secret_key.into(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }

    /// Load config from `QMT_BASE_URL`, `QMT_CLIENT_ID` and `QMT_SECRET_KEY`.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(
            require_env(ENV_BASE_URL)?,
            require_env(ENV_CLIENT_ID)?,
            require_env(ENV_SECRET_KEY)?,
        ))
    }

    /// Override the total request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the connect timeout.
    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }
}

fn require_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| QmtError::Config(format!("missing environment variable {name}")))
}
