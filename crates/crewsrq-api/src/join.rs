//! Joins filtered listing events with their slug entries.

use anyhow::Result;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::EventId;
use crate::content::SlugEntry;
use crate::error::ScrapeError;
use crate::listings::RawEvent;
use crate::timestamp::parse_timestamp;

/// Output record, one per joined event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinalEvent {
    /// Event title.
    #[serde(rename = "Event Title")]
    pub title: String,
    /// `base_url` + cleaned slug.
    #[serde(rename = "Event Link")]
    pub link: String,
    /// Start time.
    #[serde(rename = "start_dt")]
    pub start: NaiveDateTime,
    /// End time.
    #[serde(rename = "end_dt")]
    pub end: NaiveDateTime,
    /// Organizer tag.
    #[serde(rename = "Organizer")]
    pub organizer: String,
    /// Industry tag.
    #[serde(rename = "Industry")]
    pub industry: String,
    /// Market tag.
    #[serde(rename = "Market")]
    pub market: String,
}

/// Static tags copied onto every output record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventTags {
    /// Organizer name.
    pub organizer: String,
    /// Industry name.
    pub industry: String,
    /// Market name.
    pub market: String,
}

/// What to do with an event whose id has no slug entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnresolvedSlug {
    /// Log a warning and drop the event.
    #[default]
    Skip,
    /// Abort the run with `ScrapeError::MissingSlug`.
    Fail,
}

/// Join parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinSettings {
    /// Public site base prepended to every cleaned slug.
    pub base_url: String,
    /// Tags copied onto every record.
    pub tags: EventTags,
    /// Unresolved slug policy.
    pub unresolved_slug: UnresolvedSlug,
}

/// Drops the first two path segments of a Storyblok slug.
///
/// `"/a/b/c/d"` becomes `"/c/d"`. Leading and trailing `/` are ignored;
/// with two segments or fewer the result is `"/"`.
#[must_use]
pub fn clean_slug(full_slug: &str) -> String {
    let rest: Vec<&str> = full_slug.trim_matches('/').split('/').skip(2).collect();
    format!("/{}", rest.join("/"))
}

/// Finds the first slug for `id`, scanning `slugs` in order.
#[must_use]
pub fn find_slug<'a>(slugs: &'a [SlugEntry], id: &EventId) -> Option<&'a str> {
    slugs
        .iter()
        .find(|entry| entry.id().as_ref() == Some(id))
        .and_then(|entry| entry.full_slug.as_deref())
}

/// Joins `events` with `slugs` into output records.
///
/// Events whose timestamps fail to parse are logged and skipped. Events
/// with no slug follow `settings.unresolved_slug`. Order is preserved.
///
/// # Errors
///
/// Returns `ScrapeError::MissingSlug` when a slug is missing and the policy
/// is [`UnresolvedSlug::Fail`].
pub fn join_events(
    events: &[RawEvent],
    slugs: &[SlugEntry],
    settings: &JoinSettings,
) -> Result<Vec<FinalEvent>> {
    let mut joined = Vec::with_capacity(events.len());

    for event in events {
        let Some(id) = event.id() else {
            continue;
        };

        let Some(full_slug) = find_slug(slugs, &id) else {
            match settings.unresolved_slug {
                UnresolvedSlug::Skip => {
                    tracing::warn!(event_id = %id, "No slug found for event, skipping");
                    continue;
                }
                UnresolvedSlug::Fail => {
                    return Err(ScrapeError::MissingSlug { id: id.to_string() }.into());
                }
            }
        };

        let start_raw = event.start_date_time.as_deref().unwrap_or_default();
        let end_raw = event.end_date_time.as_deref().unwrap_or_default();
        let (start, end) = match (parse_timestamp(start_raw), parse_timestamp(end_raw)) {
            (Ok(start), Ok(end)) => (start, end),
            (Err(e), _) | (_, Err(e)) => {
                tracing::warn!(event_id = %id, error = %e, "Failed to parse datetime, skipping");
                continue;
            }
        };

        joined.push(FinalEvent {
            title: event.title.clone().unwrap_or_default(),
            link: format!("{}{}", settings.base_url, clean_slug(full_slug)),
            start,
            end,
            organizer: settings.tags.organizer.clone(),
            industry: settings.tags.industry.clone(),
            market: settings.tags.market.clone(),
        });
    }

    Ok(joined)
}
