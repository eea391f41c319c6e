//! `__NEXT_DATA__` extraction and Storyblok path traversal.

use std::fmt;
use std::sync::LazyLock;

use anyhow::Result;
use scraper::{Html, Selector};
use serde::Deserialize;
use serde_json::Value;

use super::types::SlugEntry;
use crate::error::ScrapeError;

/// Selector for the Next.js hydration script.
#[allow(clippy::expect_used)]
static NEXT_DATA_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"script#__NEXT_DATA__[type="application/json"]"#)
        .expect("failed to compile __NEXT_DATA__ selector")
});

/// One step of a JSON path.
#[derive(Debug, Clone, Copy)]
enum Segment {
    Key(&'static str),
    Index(usize),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(i) => write!(f, "[{i}]"),
        }
    }
}

/// `props.pageProps.pageProps.story.content.page_template[0].storyblok_events`
const STORYBLOK_EVENTS_PATH: &[Segment] = &[
    Segment::Key("props"),
    Segment::Key("pageProps"),
    Segment::Key("pageProps"),
    Segment::Key("story"),
    Segment::Key("content"),
    Segment::Key("page_template"),
    Segment::Index(0),
    Segment::Key("storyblok_events"),
];

/// Extracts and decodes the `__NEXT_DATA__` JSON from an HTML page.
///
/// # Errors
///
/// Returns `ScrapeError::Structure` if the script element is absent or its
/// text is not valid JSON.
pub fn extract_next_data(html: &str) -> Result<Value> {
    let document = Html::parse_document(html);
    let script = document
        .select(&NEXT_DATA_SELECTOR)
        .next()
        .ok_or_else(|| ScrapeError::Structure(String::from("`__NEXT_DATA__` script tag not found")))?;

    let text: String = script.text().collect();
    let data = serde_json::from_str(&text).map_err(|e| {
        ScrapeError::Structure(format!("could not decode JSON in `__NEXT_DATA__`: {e}"))
    })?;
    Ok(data)
}

/// Walks the fixed Storyblok path and decodes the slug list.
///
/// # Errors
///
/// Returns `ScrapeError::Structure` naming the first missing segment, or
/// if the list is not an array of objects.
pub fn storyblok_events(next_data: &Value) -> Result<Vec<SlugEntry>> {
    let mut node = next_data;
    let mut walked = String::new();

    for segment in STORYBLOK_EVENTS_PATH {
        let next = match segment {
            Segment::Key(key) => node.get(*key),
            Segment::Index(i) => node.get(*i),
        };
        if !walked.is_empty() && matches!(segment, Segment::Key(_)) {
            walked.push('.');
        }
        walked.push_str(&segment.to_string());
        node = next.ok_or_else(|| {
            ScrapeError::Structure(format!("could not locate `{walked}` in `__NEXT_DATA__`"))
        })?;
    }

    let entries = Vec::<SlugEntry>::deserialize(node).map_err(|e| {
        ScrapeError::Structure(format!("`storyblok_events` is not a list of entries: {e}"))
    })?;
    Ok(entries)
}

/// Parses a content page into its slug entries.
///
/// # Errors
///
/// See [`extract_next_data`] and [`storyblok_events`].
pub fn parse_slug_page(html: &str) -> Result<Vec<SlugEntry>> {
    let next_data = extract_next_data(html)?;
    storyblok_events(&next_data)
}
