//! Listings API response types.

use serde::Deserialize;
use serde_json::Value;

use crate::EventId;
use crate::lenient::{deserialize_bool_or_none, deserialize_string_or_none};

/// A single event from the listings endpoint.
///
/// Unknown fields are ignored. Every field is optional because the
/// endpoint has no published schema, and a value of the wrong JSON type
/// reads as `None` so one odd record cannot fail the whole response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    /// Event identifier (string or number).
    #[serde(default)]
    pub netforum_id: Option<Value>,
    /// Event title.
    #[serde(deserialize_with = "deserialize_string_or_none", default)]
    pub title: Option<String>,
    /// Start time, ISO-8601.
    #[serde(deserialize_with = "deserialize_string_or_none", default)]
    pub start_date_time: Option<String>,
    /// End time, ISO-8601.
    #[serde(deserialize_with = "deserialize_string_or_none", default)]
    pub end_date_time: Option<String>,
    /// Virtual flag. Absent is treated as virtual.
    #[serde(deserialize_with = "deserialize_bool_or_none", default)]
    pub is_virtual: Option<bool>,
    /// Chapter display name.
    #[serde(deserialize_with = "deserialize_string_or_none", default)]
    pub chapter: Option<String>,
}

impl RawEvent {
    /// Normalised identifier, `None` when missing or falsy.
    #[must_use]
    pub fn id(&self) -> Option<EventId> {
        self.netforum_id.as_ref().and_then(EventId::from_json)
    }
}
