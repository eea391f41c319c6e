//! Error types for the scraping pipeline.
//!
//! Client and join functions return `anyhow::Result`; the failures that
//! callers may want to tell apart are raised as `ScrapeError` and can be
//! recovered with `anyhow::Error::downcast_ref`.

use thiserror::Error;

/// Fatal pipeline errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub enum ScrapeError {
    /// The content endpoint answered with a status other than 200.
    #[error("Request failed: {status}")]
    Request {
        /// HTTP status code.
        status: u16,
    },

    /// The content page does not have the expected shape.
    #[error("Unexpected page structure: {0}")]
    Structure(String),

    /// The listings endpoint answered with an error status.
    #[error("Listings request failed (HTTP {status}): {url}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// No slug entry matched an event while unresolved slugs are fatal.
    #[error("No slug found for event id {id}")]
    MissingSlug {
        /// Event identifier that could not be resolved.
        id: String,
    },
}
