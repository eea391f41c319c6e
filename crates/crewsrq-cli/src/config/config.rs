//! `AppConfig` struct and TOML loading.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use url::Url;

use crewsrq_api::content::{ContentClient, DEFAULT_CHAPTER_CODES, DEFAULT_PAGE};
use crewsrq_api::join::{EventTags, JoinSettings, UnresolvedSlug};
use crewsrq_api::listings::{DEFAULT_CHAPTER, DEFAULT_USER_AGENT, EventFilter, ListingsClient};
use crewsrq_api::pacer::FixedPacer;
use crewsrq_api::pipeline::PipelineSettings;
use crewsrq_api::window::DEFAULT_LOOKAHEAD_DAYS;

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Listings API base URL.
    pub url: Url,
    /// Content site events page URL.
    pub url2: Url,
    /// Public site base prepended to cleaned slugs.
    pub base_url: Url,

    /// Organizer tag copied onto every record.
    #[serde(default)]
    pub organizer: String,
    /// Industry tag copied onto every record.
    #[serde(default)]
    pub industry: String,
    /// Market tag copied onto every record.
    #[serde(default)]
    pub market: String,

    /// Seconds to wait between the listings and slug map requests.
    #[serde(default = "default_scraper_interval")]
    pub scraper_interval: u64,
    /// Days after today covered by the date window.
    #[serde(default = "default_lookahead_days")]
    pub lookahead_days: u32,
    /// Chapter name events must match.
    #[serde(default = "default_chapter")]
    pub chapter: String,
    /// `chapters` query value for the content site.
    #[serde(default = "default_chapter_codes")]
    pub chapter_codes: String,
    /// Content site page number.
    #[serde(default = "default_page")]
    pub page: u32,
    /// User-Agent for the listings API.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Policy for events without a slug entry.
    #[serde(default)]
    pub on_unresolved_slug: UnresolvedSlug,
}

const fn default_scraper_interval() -> u64 {
    1
}

const fn default_lookahead_days() -> u32 {
    DEFAULT_LOOKAHEAD_DAYS
}

fn default_chapter() -> String {
    String::from(DEFAULT_CHAPTER)
}

fn default_chapter_codes() -> String {
    String::from(DEFAULT_CHAPTER_CODES)
}

const fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_user_agent() -> String {
    String::from(DEFAULT_USER_AGENT)
}

impl AppConfig {
    /// Loads config from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, cannot be parsed, lacks a
    /// required URL, or a URL is not `http`/`https`.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("config file not found: {}", path.display());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self =
            toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every endpoint is an HTTP(S) URL.
    fn validate(&self) -> Result<()> {
        for (name, url) in [
            ("url", &self.url),
            ("url2", &self.url2),
            ("base_url", &self.base_url),
        ] {
            if !matches!(url.scheme(), "http" | "https") {
                bail!("`{name}` must be an http(s) URL, got {url}");
            }
        }
        Ok(())
    }

    /// Renders the effective configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialize config to TOML")
    }

    /// Builds the listings API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn listings_client(&self) -> Result<ListingsClient> {
        ListingsClient::builder()
            .base_url(self.url.clone())
            .user_agent(&self.user_agent)
            .build()
            .context("failed to build listings client")
    }

    /// Builds the content site client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn content_client(&self) -> Result<ContentClient> {
        ContentClient::builder()
            .base_url(self.url2.clone())
            .chapter_codes(&self.chapter_codes)
            .page(self.page)
            .build()
            .context("failed to build content client")
    }

    /// Pause between the two requests.
    #[must_use]
    pub const fn pacer(&self) -> FixedPacer {
        FixedPacer::new(Duration::from_secs(self.scraper_interval))
    }

    /// Pipeline parameters.
    #[must_use]
    pub fn pipeline_settings(&self) -> PipelineSettings {
        PipelineSettings {
            lookahead_days: self.lookahead_days,
            filter: EventFilter::new(&self.chapter),
            join: JoinSettings {
                base_url: String::from(self.base_url.as_str().trim_end_matches('/')),
                tags: EventTags {
                    organizer: self.organizer.clone(),
                    industry: self.industry.clone(),
                    market: self.market.clone(),
                },
                unresolved_slug: self.on_unresolved_slug,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    const MINIMAL: &str = r#"
url = "https://api.example.org/events"
url2 = "https://www.example.org/events"
base_url = "https://www.example.org"
"#;

    fn write_config(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_minimal_applies_defaults() {
        // Arrange
        let (_dir, path) = write_config(MINIMAL);

        // Act
        let config = AppConfig::load(&path).unwrap();

        // Assert
        assert_eq!(config.scraper_interval, 1);
        assert_eq!(config.lookahead_days, 365);
        assert_eq!(config.chapter, "CREW Sarasota/Manatee");
        assert_eq!(config.chapter_codes, "CN,SAR");
        assert_eq!(config.page, 1);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.on_unresolved_slug, UnresolvedSlug::Skip);
        assert!(config.organizer.is_empty());
    }

    #[test]
    fn test_load_full_config() {
        // Arrange
        let content = format!(
            r#"{MINIMAL}
organizer = "CREW SRQ"
industry = "Commercial Real Estate"
market = "Sarasota"
scraper_interval = 0
lookahead_days = 30
chapter = "CREW Tampa Bay"
chapter_codes = "CN"
page = 2
user_agent = "test-agent"
on_unresolved_slug = "fail"
"#
        );
        let (_dir, path) = write_config(&content);

        // Act
        let config = AppConfig::load(&path).unwrap();

        // Assert
        assert_eq!(config.organizer, "CREW SRQ");
        assert_eq!(config.scraper_interval, 0);
        assert_eq!(config.lookahead_days, 30);
        assert_eq!(config.chapter, "CREW Tampa Bay");
        assert_eq!(config.page, 2);
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.on_unresolved_slug, UnresolvedSlug::Fail);
    }

    #[test]
    fn test_load_missing_file_is_error() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        // Act
        let err = AppConfig::load(&path).unwrap_err();

        // Assert
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn test_load_missing_url_is_error() {
        // Arrange
        let (_dir, path) = write_config(r#"url = "https://api.example.org/events""#);

        // Act
        let result = AppConfig::load(&path);

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_url_is_error() {
        // Arrange
        let content = MINIMAL.replace("https://www.example.org/events", "not a url");
        let (_dir, path) = write_config(&content);

        // Act
        let err = AppConfig::load(&path).unwrap_err();

        // Assert
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn test_load_non_http_scheme_is_error() {
        // Arrange
        let content = MINIMAL.replace("https://www.example.org\"", "ftp://www.example.org\"");
        let (_dir, path) = write_config(&content);

        // Act
        let err = AppConfig::load(&path).unwrap_err();

        // Assert
        assert!(err.to_string().contains("`base_url` must be an http(s) URL"));
    }

    #[test]
    fn test_pipeline_settings_trims_base_url() {
        // Arrange
        let (_dir, path) = write_config(MINIMAL);
        let config = AppConfig::load(&path).unwrap();

        // Act
        let settings = config.pipeline_settings();

        // Assert
        assert_eq!(settings.join.base_url, "https://www.example.org");
        assert_eq!(settings.filter.chapter, "CREW Sarasota/Manatee");
        assert_eq!(settings.lookahead_days, 365);
    }

    #[test]
    fn test_pacer_uses_interval() {
        // Arrange
        let content = format!("{MINIMAL}\nscraper_interval = 3\n");
        let (_dir, path) = write_config(&content);
        let config = AppConfig::load(&path).unwrap();

        // Act
        let pacer = config.pacer();

        // Assert
        assert_eq!(pacer.interval(), Duration::from_secs(3));
    }

    #[test]
    fn test_to_toml_reloads() {
        // Arrange
        let (_dir, path) = write_config(MINIMAL);
        let config = AppConfig::load(&path).unwrap();

        // Act
        let rendered = config.to_toml().unwrap();
        let reloaded: AppConfig = toml::from_str(&rendered).unwrap();

        // Assert
        assert_eq!(reloaded, config);
    }
}
