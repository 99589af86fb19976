//! Mapping of serialized JSON documents to generic key-value maps.
//!
//! [`to_mapping`] turns the raw bytes of a JSON object into a
//! [`KeyValueMapping`] whose values are dynamically typed [`Value`]s. Any
//! other input (invalid UTF-8, invalid JSON, a top-level array or scalar)
//! fails with a [`ParseError`].

use std::collections::BTreeMap;

use tracing::debug;

pub mod value;

pub use value::Value;

/// String-keyed map produced from a top-level JSON object.
pub type KeyValueMapping = BTreeMap<String, Value>;

#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("input is not valid utf-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("invalid json: {0}")]
    Syntax(#[from] serde_json::Error),
    #[error("expected a json object at the top level, found {found}")]
    NotAnObject { found: &'static str },
}

/// Parse `bytes` as a UTF-8 JSON document whose root is an object.
///
/// ```
/// use bytekit_core::structured::{self, Value};
///
/// let map = structured::to_mapping(br#"{"int": 1, "string": "test"}"#).unwrap();
/// assert_eq!(map["int"], Value::Int(1));
/// assert!(structured::to_mapping(b"").is_err());
/// ```
pub fn to_mapping(bytes: &[u8]) -> Result<KeyValueMapping, ParseError> {
    let text = std::str::from_utf8(bytes)?;
    let json: serde_json::Value = serde_json::from_str(text).inspect_err(|err| {
        debug!(%err, len = bytes.len(), "structured data is not valid json");
    })?;

    match Value::from(json) {
        Value::Map(map) => Ok(map),
        other => Err(ParseError::NotAnObject {
            found: other.kind(),
        }),
    }
}

/// Serialize a mapping back into compact JSON bytes.
pub fn to_json_bytes(mapping: &KeyValueMapping) -> Vec<u8> {
    let object: serde_json::Map<String, serde_json::Value> = mapping
        .iter()
        .map(|(k, v)| (k.clone(), serde_json::Value::from(v)))
        .collect();
    serde_json::Value::Object(object).to_string().into_bytes()
}
