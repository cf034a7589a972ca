/*
[INPUT]:  ApiConfig (base URL, credentials, timeouts)
[OUTPUT]: Configured reqwest client issuing signed POST requests
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use chrono::Utc;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use serde::Serialize;
use tracing::debug;

use crate::canonical::to_canonical_string;
use crate::config::ApiConfig;
use crate::http::{QmtError, RequestSigner, Result};
use crate::types::{ApiResponse, ResponseBody};

/// Signature headers expected by the server
pub(crate) const HEADER_CLIENT_ID: &str = "X-Client-ID";
pub(crate) const HEADER_TIMESTAMP: &str = "X-Timestamp";
pub(crate) const HEADER_SIGNATURE: &str = "X-Signature";

/// HTTP client for the QMT outer trade API.
///
/// Stateless across calls: each request is signed independently and no
/// connection or response state is shared between invocations.
#[derive(Debug)]
pub struct QmtClient {
    http_client: Client,
    base_url: Url,
    signer: RequestSigner,
    timeout: Duration,
}

impl QmtClient {
    /// Create a client from the given configuration.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(QmtError::Network)?;

        Ok(Self {
            http_client,
            base_url: Url::parse(&config.base_url)?,
            signer: RequestSigner::new(config.client_id, config.secret_key),
            timeout: config.timeout,
        })
    }

    /// Create a client from `QMT_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ApiConfig::from_env()?)
    }

    /// The signer holding this client's credential pair.
    pub fn signer(&self) -> &RequestSigner {
        &self.signer
    }

    /// Send one signed POST request and return the response for
    /// inspection. Non-2xx statuses are not errors; only transport
    /// failures and timeouts reject.
    ///
    /// The body is serialized canonically (sorted keys, compact) and
    /// those exact bytes are both signed and transmitted.
    pub async fn send_signed<T: Serialize>(&self, path: &str, body: &T) -> Result<ApiResponse> {
        let body = to_canonical_string(body)?;
        let timestamp = Utc::now().timestamp().to_string();
        let signature = self.signer.sign("POST", path, "", &body, &timestamp);
        let url = self.base_url.join(path)?;

        debug!(path, %timestamp, "sending signed request");

        let response = self
            .http_client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(HEADER_CLIENT_ID, self.signer.client_id())
            .header(HEADER_TIMESTAMP, &timestamp)
            .header(HEADER_SIGNATURE, &signature)
            .body(body)
            .send()
            .await
            .map_err(|err| QmtError::from_reqwest(err, self.timeout))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|err| QmtError::from_reqwest(err, self.timeout))?;

        debug!(status, "received response");

        Ok(ApiResponse {
            status,
            body: ResponseBody::from_text(text),
        })
    }
}
