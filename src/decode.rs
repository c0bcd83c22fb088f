//! JSON decoding of API payloads
//!
//! Jikan's schema is loose: fields documented as strings or numbers show up
//! as `null`, or go missing entirely. Records tolerate this leaf by leaf
//! through [`null_default`], while a payload whose top-level structure does
//! not match still fails as a whole.

use crate::error::JikanError;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decodes a response body into the requested record
///
/// # Errors
///
/// Returns [`JikanError::Decode`] if the bytes are not JSON or do not have the
/// shape of `T`.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, JikanError> {
    Ok(serde_json::from_slice(body)?)
}

/// Deserializes `null` as `T::default()`
///
/// Combine with `#[serde(default)]` to cover missing keys as well.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserializes a JSON object as `T`, and anything else as `T::default()`
///
/// Jikan serializes empty groupings as `[]` instead of `{}`.
pub(crate) fn object_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => serde_json::from_value(value).map_err(D::Error::custom),
        _ => Ok(T::default()),
    }
}
