/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for qmt-outer-client tests

use qmt_outer_client::{
    to_canonical_string, BatchOrderRequest, OrderRequest, RequestSigner,
};
use wiremock::{Match, MockServer, Request};

pub const TEST_CLIENT_ID: &str = "outer_client_002";
pub const TEST_SECRET_KEY: &str = "qmt_secret_key_zzzz";

/// Setup a mock HTTP server for testing
#[allow(dead_code)]
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

#[allow(dead_code)]
pub fn sample_order() -> OrderRequest {
    OrderRequest {
        trader_index: 0,
        symbol: "000001".to_string(),
        trade_price: 10.5,
        position_pct: 0.1,
        strategy_name: "外部策略测试".to_string(),
        price_type: None,
    }
}

#[allow(dead_code)]
pub fn sample_batch_order() -> BatchOrderRequest {
    BatchOrderRequest {
        symbol: "000001".to_string(),
        trade_price: 10.5,
        position_pct: 0.1,
        strategy_name: "外部批量策略测试".to_string(),
        price_type: None,
    }
}

/// Conformant server-side signature check as a wiremock matcher.
///
/// Recomputes the HMAC over the request exactly as received: the raw
/// body bytes go into the sign-string, so a body whose bytes are not
/// the sorted-key canonical form fails even if it was signed over the
/// canonical serialization. The client id is taken from the request's
/// own `X-Client-ID` header and looked up against the shared secret.
#[allow(dead_code)]
pub struct ValidSignature {
    secret_key: String,
}

#[allow(dead_code)]
impl ValidSignature {
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
        }
    }
}

impl Match for ValidSignature {
    fn matches(&self, request: &Request) -> bool {
        let header = |name: &str| {
            request
                .headers
                .get(name)
                .and_then(|value| value.to_str().ok())
        };
        let (Some(client_id), Some(timestamp), Some(signature)) = (
            header("X-Client-ID"),
            header("X-Timestamp"),
            header("X-Signature"),
        ) else {
            return false;
        };

        let Ok(raw_body) = std::str::from_utf8(&request.body) else {
            return false;
        };

        // The transmitted bytes must themselves be canonical.
        let canonical = serde_json::from_str::<serde_json::Value>(raw_body)
            .ok()
            .and_then(|value| to_canonical_string(&value).ok());
        if canonical.as_deref() != Some(raw_body) {
            return false;
        }

        let expected = RequestSigner::new(client_id, &self.secret_key).sign(
            request.method.as_str(),
            request.url.path(),
            request.url.query().unwrap_or(""),
            raw_body,
            timestamp,
        );
        expected == signature
    }
}
