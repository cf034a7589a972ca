/*
[INPUT]:  Canonical request fields and the shared secret
[OUTPUT]: Lowercase hex HMAC-SHA256 signature (X-Signature header)
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or sign-string format
*/

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Build the canonical sign-string both client and server reconstruct.
///
/// Format: `METHOD\nPATH\nQUERY_STRING\nBODY\nTIMESTAMP\nCLIENT_ID`.
/// All fields must already be in their final wire form; `body` is the
/// exact byte sequence transmitted.
pub fn sign_string(
    method: &str,
    path: &str,
    query_string: &str,
    body: &str,
    timestamp: &str,
    client_id: &str,
) -> String {
    format!("{method}\n{path}\n{query_string}\n{body}\n{timestamp}\n{client_id}")
}

/// Signs HTTP requests with a shared-secret credential pair.
///
/// Pure and deterministic: no clock reads, no randomness. Any input
/// strings (including empty) produce a syntactically valid signature.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    client_id: String,
    secret_key: String,
}

impl RequestSigner {
    /// Create a signer for the given credential pair.
    pub fn new(client_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Client identifier sent in the `X-Client-ID` header.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Sign a request, returning the lowercase hex HMAC-SHA256 digest
    /// of the canonical sign-string under the shared secret.
    pub fn sign(
        &self,
        method: &str,
        path: &str,
        query_string: &str,
        body: &str,
        timestamp: &str,
    ) -> String {
        let message = sign_string(method, path, query_string, body, timestamp, &self.client_id);
        hmac_sha256_hex(self.secret_key.as_bytes(), message.as_bytes())
    }
}

fn hmac_sha256_hex(key: &[u8], message: &[u8]) -> String {
    // HMAC accepts keys of any length
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC key");
    mac.update(message);
    hex::encode(mac.finalize().into_bytes())
}
