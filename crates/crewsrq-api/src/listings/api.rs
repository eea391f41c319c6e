//! `ListingsApi` trait definition.
#![allow(clippy::future_not_send)]

use anyhow::Result;

use super::types::RawEvent;
use crate::window::DateWindow;

/// Listings API trait.
///
/// Abstracts the listings request for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(ListingsApi: Send)]
pub trait LocalListingsApi {
    /// Fetches every event whose end date falls inside `window`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the server answers with
    /// an error status, or the body is not a JSON array of events.
    async fn fetch_events(&self, window: &DateWindow) -> Result<Vec<RawEvent>>;
}
