//! Config file resolution.

use std::path::PathBuf;

use anyhow::{Context, Result};

/// Resolves the config file path.
///
/// - If `file` is `Some`, returns it unchanged.
/// - Otherwise returns `~/.config/crewsrq/config.toml`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined (when `file` is `None`).
pub fn resolve_config_path(file: Option<&PathBuf>) -> Result<PathBuf> {
    if let Some(f) = file {
        return Ok(f.clone());
    }

    let home = std::env::var("HOME").context("HOME environment variable is not set")?;
    Ok(PathBuf::from(home)
        .join(".config")
        .join("crewsrq")
        .join("config.toml"))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_resolve_with_file() {
        // Arrange
        let file = PathBuf::from("/tmp/myproject/crewsrq.toml");

        // Act
        let path = resolve_config_path(Some(&file)).unwrap();

        // Assert
        assert_eq!(path, file);
    }

    #[test]
    fn test_resolve_default() {
        // Arrange & Act
        let path = resolve_config_path(None).unwrap();

        // Assert
        assert!(path.ends_with(".config/crewsrq/config.toml"));
    }
}
