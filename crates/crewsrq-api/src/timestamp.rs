//! ISO-8601 timestamp parsing for listing start/end times.

use anyhow::{Context, Result, bail};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

/// Naive formats, tried in order. `%.f` also matches a missing fraction.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Offset-bearing formats not covered by RFC 3339 (e.g. `+0500`).
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// Parses an ISO-8601 timestamp into a wall-clock datetime.
///
/// Timestamps with a `Z` or numeric offset keep their local wall-clock
/// time; the offset is dropped and logged at debug level. A bare date maps
/// to midnight.
///
/// # Errors
///
/// Returns an error if `raw` matches none of the accepted forms.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime> {
    let s = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(wall_clock(&dt));
    }
    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(s, fmt).ok())
    {
        return Ok(wall_clock(&dt));
    }
    if let Some(dt) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    {
        return Ok(dt);
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .with_context(|| format!("invalid midnight for {date}"));
    }

    bail!("invalid ISO-8601 timestamp: {raw:?}")
}

/// Local time of `dt` with its offset discarded.
fn wall_clock(dt: &DateTime<FixedOffset>) -> NaiveDateTime {
    tracing::debug!(offset = %dt.offset(), "Dropping UTC offset, keeping wall-clock time");
    dt.naive_local()
}
