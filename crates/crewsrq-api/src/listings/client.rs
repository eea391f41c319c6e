//! `ListingsClient` - listings API client implementation.

use anyhow::{Context, Result};
use reqwest::Client;
use reqwest::header::{ACCEPT_ENCODING, HeaderMap, HeaderValue};
use tracing::instrument;
use url::Url;

use super::api::LocalListingsApi;
use super::types::RawEvent;
use crate::error::ScrapeError;
use crate::window::{DateWindow, build_listings_url};

/// Desktop browser User-Agent; the listings API rejects obvious bots.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36";

/// Listings API client.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct ListingsClient {
    /// HTTP client (identity encoding, fixed User-Agent).
    http_client: Client,
    /// Listings base URL, without the date window.
    base_url: Url,
}

/// Builder for `ListingsClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct ListingsClientBuilder {
    base_url: Option<Url>,
    user_agent: Option<String>,
}

impl ListingsClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            user_agent: None,
        }
    }

    /// Sets the listings base URL (required).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Overrides the User-Agent (default: [`DEFAULT_USER_AGENT`]).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `base_url` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<ListingsClient> {
        let base_url = self.base_url.context("base_url is required")?;
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| String::from(DEFAULT_USER_AGENT));

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("identity"));

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .default_headers(headers)
            .build()
            .context("failed to build HTTP client")?;

        Ok(ListingsClient {
            http_client,
            base_url,
        })
    }
}

impl ListingsClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> ListingsClientBuilder {
        ListingsClientBuilder::new()
    }

    /// Decodes a listings response body.
    pub(crate) fn parse_events(body: &str) -> Result<Vec<RawEvent>> {
        let raw_result: std::result::Result<Vec<RawEvent>, _> = serde_json::from_str(body);
        raw_result.with_context(|| {
            let preview = body.get(..body.floor_char_boundary(200)).unwrap_or(body);
            format!("failed to decode listings JSON (len={}): {preview}", body.len())
        })
    }
}

impl LocalListingsApi for ListingsClient {
    #[instrument(skip_all)]
    async fn fetch_events(&self, window: &DateWindow) -> Result<Vec<RawEvent>> {
        let url = build_listings_url(&self.base_url, window);
        tracing::info!(%url, "Fetching events");

        let result = self.http_client.get(url.clone()).send().await;
        let response = result.with_context(|| format!("request failed: {url}"))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            }
            .into());
        }

        let body = response
            .text()
            .await
            .with_context(|| format!("failed to read response body: {url}"))?;
        tracing::debug!(body_len = body.len(), "Listings body received");

        Self::parse_events(&body)
    }
}
