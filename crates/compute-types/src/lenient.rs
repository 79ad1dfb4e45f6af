// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Field decoders that never reject well-formed JSON.
//!
//! A model field whose value has the wrong JSON kind decodes as absent, the
//! same way [`crate::timestamp::deserialize`] treats a bad timestamp. List
//! elements that don't fit the element type are dropped. Use these with
//! `#[serde(default, deserialize_with = "...")]` on `Option` fields.
//!
//! Nested models go through [`object`] and [`object_list`], which only
//! accept JSON objects; a derived struct would otherwise also accept an
//! array and fill its fields positionally.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn convert<T: DeserializeOwned>(value: Value) -> Option<T> {
    T::deserialize(value).ok()
}

fn convert_object<T: DeserializeOwned>(value: Value) -> Option<T> {
    match value {
        Value::Object(_) => convert(value),
        _ => None,
    }
}

fn convert_list<T, F>(value: Value, element: F) -> Option<Vec<T>>
where
    F: FnMut(Value) -> Option<T>,
{
    match value {
        Value::Array(items) => {
            Some(items.into_iter().filter_map(element).collect())
        }
        _ => None,
    }
}

/// A scalar or enumeration field.
pub fn option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(convert(Value::deserialize(deserializer)?))
}

/// A nested model field.
pub fn object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(convert_object(Value::deserialize(deserializer)?))
}

/// A list of scalars or enumeration values.
pub fn list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(convert_list(Value::deserialize(deserializer)?, convert))
}

/// A list of nested models.
pub fn object_list<'de, D, T>(
    deserializer: D,
) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(convert_list(Value::deserialize(deserializer)?, convert_object))
}
