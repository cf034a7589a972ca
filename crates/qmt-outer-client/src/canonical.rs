/*
[INPUT]:  Any serde-serializable request body
[OUTPUT]: Compact JSON with recursively sorted object keys
[POS]:    Serialization layer - the exact bytes that are both signed and sent
[UPDATE]: When the server's canonical body format changes
*/

use serde::Serialize;
use serde_json::{Map, Value};

use crate::http::Result;

/// Serialize a value to the canonical JSON form expected by the server:
/// compact separators, object keys sorted lexicographically by Unicode
/// code point, applied recursively to nested objects (including objects
/// inside arrays). Array element order is preserved.
///
/// The returned string must be transmitted byte-for-byte as the request
/// body; the signature is computed over this same string.
pub fn to_canonical_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let value = serde_json::to_value(value)?;
    Ok(serde_json::to_string(&sort_keys(value))?)
}

/// Rebuild a JSON value with all object keys sorted.
///
/// String comparison in Rust orders by byte, which for UTF-8 equals
/// code point order. The sort is explicit rather than relying on the
/// map's internal ordering, so the output stays canonical even if
/// serde_json's `preserve_order` feature is enabled transitively.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> =
                map.into_iter().map(|(key, child)| (key, sort_keys(child))).collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(entries.into_iter().collect::<Map<String, Value>>())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}
