//! `ContentClient` - content site slug source implementation.

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use tracing::instrument;
use url::Url;

use super::api::LocalSlugSource;
use super::next_data::parse_slug_page;
use super::types::SlugEntry;
use crate::error::ScrapeError;
use crate::window::DateWindow;

/// Chapter codes requested by default.
pub const DEFAULT_CHAPTER_CODES: &str = "CN,SAR";

/// Page requested by default; only one page is ever fetched.
pub const DEFAULT_PAGE: u32 = 1;

/// Content site client.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct ContentClient {
    /// HTTP client.
    http_client: Client,
    /// Events page URL.
    base_url: Url,
    /// `chapters` query value.
    chapter_codes: String,
    /// `page` query value.
    page: u32,
}

/// Builder for `ContentClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct ContentClientBuilder {
    base_url: Option<Url>,
    user_agent: Option<String>,
    chapter_codes: Option<String>,
    page: Option<u32>,
}

impl ContentClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            user_agent: None,
            chapter_codes: None,
            page: None,
        }
    }

    /// Sets the events page URL (required).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Overrides the User-Agent (default: `crewsrq-api/<version>`).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets the `chapters` filter (default: `"CN,SAR"`).
    #[must_use]
    pub fn chapter_codes(mut self, codes: impl Into<String>) -> Self {
        self.chapter_codes = Some(codes.into());
        self
    }

    /// Sets the page number (default: 1).
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `base_url` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<ContentClient> {
        let base_url = self.base_url.context("base_url is required")?;
        let user_agent = self.user_agent.unwrap_or_else(|| {
            String::from(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
        });

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .build()
            .context("failed to build HTTP client")?;

        Ok(ContentClient {
            http_client,
            base_url,
            chapter_codes: self
                .chapter_codes
                .unwrap_or_else(|| String::from(DEFAULT_CHAPTER_CODES)),
            page: self.page.unwrap_or(DEFAULT_PAGE),
        })
    }
}

impl ContentClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> ContentClientBuilder {
        ContentClientBuilder::new()
    }

    /// Builds the query for one window.
    fn build_query(&self, window: &DateWindow) -> Vec<(&'static str, String)> {
        vec![
            ("from", window.from_param()),
            ("to", window.to_param()),
            ("chapters", self.chapter_codes.clone()),
            ("page", self.page.to_string()),
        ]
    }
}

impl LocalSlugSource for ContentClient {
    #[instrument(skip_all)]
    async fn fetch_slugs(&self, window: &DateWindow) -> Result<Vec<SlugEntry>> {
        let query = self.build_query(window);

        let request = self
            .http_client
            .get(self.base_url.clone())
            .query(&query)
            .build()
            .context("failed to build slug map request")?;
        tracing::info!(url = %request.url(), "Fetching slug map");

        let result = self.http_client.execute(request).await;
        let response = result.context("slug map request failed")?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ScrapeError::Request {
                status: status.as_u16(),
            }
            .into());
        }

        let html = response
            .text()
            .await
            .context("failed to read slug map response body")?;
        tracing::debug!(body_len = html.len(), "Slug map body received");

        parse_slug_page(&html)
    }
}
