// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON entry points for model objects.
//!
//! The per-type field mapping lives in each model's serde attributes:
//! camelCase wire names, absent optional fields omitted, unknown fields
//! skipped, and field values of the wrong kind decoded as absent (see
//! [`compute_types::lenient`]). These functions add the outer contract:
//! text is parsed into a [`Value`] first, so a repeated key keeps its last
//! value, and anything other than a JSON object decodes to `None`.
//! Only text that is not JSON at all fails.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::Error;

/// Decodes a model object from JSON text. `null` yields `Ok(None)`.
pub fn decode<T: DeserializeOwned>(json: &str) -> Result<Option<T>, Error> {
    decode_value(serde_json::from_str(json)?)
}

pub fn decode_slice<T: DeserializeOwned>(
    json: &[u8],
) -> Result<Option<T>, Error> {
    decode_value(serde_json::from_slice(json)?)
}

/// Decodes a model object from an already-parsed JSON value.
///
/// Only an object produces a model; `null`, scalars and arrays yield
/// `Ok(None)`.
pub fn decode_value<T: DeserializeOwned>(
    value: Value,
) -> Result<Option<T>, Error> {
    match value {
        Value::Object(_) => Ok(Some(serde_json::from_value(value)?)),
        _ => Ok(None),
    }
}

/// Encodes a model object as compact JSON, fields in declaration order.
pub fn encode<T: Serialize>(value: &T) -> Result<String, Error> {
    Ok(serde_json::to_string(value)?)
}

pub fn encode_pretty<T: Serialize>(value: &T) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn encode_value<T: Serialize>(value: &T) -> Result<Value, Error> {
    Ok(serde_json::to_value(value)?)
}
