//! Storyblok slug entry type.

use serde::Deserialize;
use serde_json::Value;

use crate::EventId;
use crate::lenient::deserialize_string_or_none;

/// One entry of the `storyblok_events` list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SlugEntry {
    /// Event identifier (string or number).
    #[serde(default)]
    pub netforum_event_id: Option<Value>,
    /// Full Storyblok path, e.g. `chapters/<chapter>/events/<event>`.
    /// A non-string value reads as `None`.
    #[serde(deserialize_with = "deserialize_string_or_none", default)]
    pub full_slug: Option<String>,
}

impl SlugEntry {
    /// Creates an entry from an identifier and a full slug.
    #[must_use]
    pub fn new(id: impl Into<Value>, full_slug: impl Into<String>) -> Self {
        Self {
            netforum_event_id: Some(id.into()),
            full_slug: Some(full_slug.into()),
        }
    }

    /// Normalised identifier.
    #[must_use]
    pub fn id(&self) -> Option<EventId> {
        self.netforum_event_id.as_ref().and_then(EventId::from_json)
    }
}
