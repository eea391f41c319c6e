//! Listings API client module.
//!
//! Fetches the chapter event list for a date window and filters it down
//! to in-person events of one chapter.

mod api;
mod client;
mod filter;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{ListingsApi, LocalListingsApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{DEFAULT_USER_AGENT, ListingsClient, ListingsClientBuilder};
pub use filter::{DEFAULT_CHAPTER, EventFilter};
pub use types::RawEvent;
