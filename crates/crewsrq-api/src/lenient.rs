//! Field deserializers that map an unexpected JSON type to `None`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes a string field; any non-string value becomes `None`.
pub fn deserialize_string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// Deserializes a boolean field; any non-boolean value becomes `None`.
pub fn deserialize_bool_or_none<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Bool(b) => Ok(Some(b)),
        _ => Ok(None),
    }
}
