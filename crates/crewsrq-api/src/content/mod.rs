//! Content site client module.
//!
//! Requests the public events page and mines its Next.js hydration data
//! (`__NEXT_DATA__`) for the Storyblok event-id to slug map.

mod api;
mod client;
mod next_data;
mod types;

pub use api::{LocalSlugSource, SlugSource};
#[allow(clippy::module_name_repetitions)]
pub use client::{ContentClient, ContentClientBuilder, DEFAULT_CHAPTER_CODES, DEFAULT_PAGE};
pub use next_data::{extract_next_data, parse_slug_page, storyblok_events};
pub use types::SlugEntry;
