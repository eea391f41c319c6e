//! `SlugSource` trait definition.
#![allow(clippy::future_not_send)]

use anyhow::Result;

use super::types::SlugEntry;
use crate::window::DateWindow;

/// Source of event-id to slug mappings.
///
/// Isolates the content site's page shape so the pipeline can be tested
/// against an in-memory map.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[trait_variant::make(SlugSource: Send)]
pub trait LocalSlugSource {
    /// Fetches slug entries for events inside `window`, in source order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not
    /// contain the slug list.
    async fn fetch_slugs(&self, window: &DateWindow) -> Result<Vec<SlugEntry>>;
}
