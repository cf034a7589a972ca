/*
[INPUT]:  Canonical request fields and credentials
[OUTPUT]: Test results for client/server signature compatibility
[POS]:    Integration tests - signing round trip
[UPDATE]: When the sign-string format or canonical body form changes
*/

mod common;

use common::{sample_order, TEST_CLIENT_ID, TEST_SECRET_KEY};
use hmac::{Hmac, Mac};
use qmt_outer_client::{to_canonical_string, RequestSigner};
use sha2::Sha256;

/// Independent recomputation of what a conformant server does: build
/// the newline-joined canonical string and HMAC it under the shared
/// secret. Deliberately does not go through [`RequestSigner`].
fn server_side_signature(
    method: &str,
    path: &str,
    query_string: &str,
    body: &str,
    timestamp: &str,
    client_id: &str,
    secret_key: &str,
) -> String {
    let sign_string = [method, path, query_string, body, timestamp, client_id].join("\n");
    let mut mac = Hmac::<Sha256>::new_from_slice(secret_key.as_bytes()).expect("HMAC key");
    mac.update(sign_string.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

#[test]
fn test_client_and_server_signatures_match() {
    let body = to_canonical_string(&sample_order()).expect("canonical");
    let timestamp = "1700000000";
    let path = "/qmt/trade/api/outer/trade/buy";

    let client_signature = RequestSigner::new(TEST_CLIENT_ID, TEST_SECRET_KEY)
        .sign("POST", path, "", &body, timestamp);
    let server_signature = server_side_signature(
        "POST",
        path,
        "",
        &body,
        timestamp,
        TEST_CLIENT_ID,
        TEST_SECRET_KEY,
    );

    assert_eq!(client_signature, server_signature);
}

#[test]
fn test_signature_is_lowercase_hex_digest() {
    let signature = RequestSigner::new(TEST_CLIENT_ID, TEST_SECRET_KEY)
        .sign("POST", "/qmt/trade/api/outer/trade/buy", "", "{}", "1700000000");

    assert_eq!(signature.len(), 64);
    assert!(signature
        .chars()
        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
}
