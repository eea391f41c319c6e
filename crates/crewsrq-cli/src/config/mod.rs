//! Application configuration module.
//!
//! Reads the TOML file holding endpoint URLs, output tags and scraper
//! tuning.

#[allow(clippy::module_inception)]
mod config;
mod paths;

#[allow(clippy::module_name_repetitions)]
pub use config::AppConfig;
pub use paths::resolve_config_path;
