//! Chapter / in-person event filter.

use super::types::RawEvent;

/// Chapter kept by default.
pub const DEFAULT_CHAPTER: &str = "CREW Sarasota/Manatee";

/// Inclusion criteria for listing events.
///
/// An event qualifies when it has a truthy identifier, its virtual flag is
/// exactly `false`, and its chapter equals `chapter`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFilter {
    /// Chapter name compared verbatim.
    pub chapter: String,
}

impl EventFilter {
    /// Creates a filter for the given chapter.
    #[must_use]
    pub fn new(chapter: impl Into<String>) -> Self {
        Self {
            chapter: chapter.into(),
        }
    }

    /// Returns `true` if `event` passes every predicate.
    #[must_use]
    pub fn matches(&self, event: &RawEvent) -> bool {
        event.id().is_some()
            && event.is_virtual == Some(false)
            && event.chapter.as_deref() == Some(self.chapter.as_str())
    }

    /// Keeps matching events, preserving order.
    #[must_use]
    pub fn apply(&self, events: Vec<RawEvent>) -> Vec<RawEvent> {
        events.into_iter().filter(|e| self.matches(e)).collect()
    }
}

impl Default for EventFilter {
    fn default() -> Self {
        Self::new(DEFAULT_CHAPTER)
    }
}
