//! Event scraping library for crewsrq.
//!
//! Fetches chapter events from the listings API, resolves their public
//! page slugs from the content site's hydration data, and joins both into
//! flat event records.

/// Content site client and `__NEXT_DATA__` slug extraction.
pub mod content;
/// Error taxonomy shared by the clients and the joiner.
pub mod error;
/// Event/slug join and slug cleaning.
pub mod join;
/// Listings API client and event filter.
pub mod listings;
/// Delay strategy between network calls.
pub mod pacer;
/// End-to-end fetch, filter and join.
pub mod pipeline;
/// Text table rendering.
pub mod present;
/// ISO-8601 timestamp parsing.
pub mod timestamp;
/// Date window and listings URL construction.
pub mod window;

mod event_id;
mod lenient;

pub use event_id::EventId;
pub use error::ScrapeError;
