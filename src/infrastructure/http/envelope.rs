//! Decoding of list and single-record response bodies.
//!
//! The catalog API answers either with the payload itself or with the payload
//! under `data` (optionally next to `success`/`message`). Both are accepted.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::entities::decode_records;

/// Extracts a collection from a bare array or a `{"data": [...]}` envelope.
///
/// Records that fail to decode are skipped and logged; the rest keep their
/// server order.
pub(crate) fn decode_list<T: DeserializeOwned>(
    collection: &str,
    body: Value,
) -> Result<Vec<T>, String> {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => items,
            Some(other) => return Err(format!("'data' is {}, expected an array", kind(&other))),
            None => return Err("object without 'data' array".to_string()),
        },
        other => return Err(format!("body is {}, expected a list", kind(&other))),
    };

    Ok(decode_records(collection, items))
}

/// Extracts one record from a bare object or a `{"data": {...}}` envelope.
///
/// The record does not exist when the envelope says `"success": false`,
/// carries `"data": null`, or has `success` without any `data`.
pub(crate) fn decode_single<T: DeserializeOwned>(body: Value) -> Result<Option<T>, String> {
    let success = body.get("success").and_then(Value::as_bool);
    if success == Some(false) {
        return Ok(None);
    }

    let enveloped = match body.get("data") {
        Some(Value::Null) => return Ok(None),
        Some(data @ Value::Object(_)) => Some(data.clone()),
        None if success.is_some() => return Ok(None),
        _ => None,
    };

    serde_json::from_value(enveloped.unwrap_or(body))
        .map(Some)
        .map_err(|e| e.to_string())
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
