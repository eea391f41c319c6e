//! Lookahead date window and listings URL construction.

use anyhow::{Context, Result};
use chrono::{Days, Local, NaiveDate};
use url::Url;

/// Default lookahead in days.
pub const DEFAULT_LOOKAHEAD_DAYS: u32 = 365;

/// Calendar-date range `[from, to]` used to bound both requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    /// First day of the window.
    pub from: NaiveDate,
    /// Last day of the window (`from + lookahead`).
    pub to: NaiveDate,
}

impl DateWindow {
    /// Creates a window starting at `from` and spanning `lookahead_days`.
    ///
    /// # Errors
    ///
    /// Returns an error if `from + lookahead_days` is out of the supported
    /// date range.
    pub fn new(from: NaiveDate, lookahead_days: u32) -> Result<Self> {
        let to = from
            .checked_add_days(Days::new(u64::from(lookahead_days)))
            .with_context(|| format!("lookahead of {lookahead_days} days overflows from {from}"))?;
        Ok(Self { from, to })
    }

    /// Creates a window starting at today's local date.
    ///
    /// # Errors
    ///
    /// Returns an error if the end date is out of range.
    pub fn starting_today(lookahead_days: u32) -> Result<Self> {
        Self::new(Local::now().date_naive(), lookahead_days)
    }

    /// Start date as `YYYY-MM-DD`.
    #[must_use]
    pub fn from_param(&self) -> String {
        self.from.format("%Y-%m-%d").to_string()
    }

    /// End date as `YYYY-MM-DD`.
    #[must_use]
    pub fn to_param(&self) -> String {
        self.to.format("%Y-%m-%d").to_string()
    }
}

/// Appends `minEndDate` / `maxEndDate` to the listings base URL.
///
/// Query parameters already present on `base` are kept.
#[must_use]
pub fn build_listings_url(base: &Url, window: &DateWindow) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut()
        .append_pair("minEndDate", &window.from_param())
        .append_pair("maxEndDate", &window.to_param());
    url
}
