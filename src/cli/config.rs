//! TOML configuration file support.
//!
//! Settings that would otherwise be repeated on every invocation can live in
//! a config file passed with `--config`; command-line flags win over it:
//!
//! ```toml
//! # omemeta.toml
//! [filter]
//! enabled = true
//!
//! [demo]
//! images = 2
//! channels = 3
//! planes = true
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Root configuration structure for omemeta.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Sanitizing decorator settings.
    #[serde(default)]
    pub filter: FilterConfig,

    /// Settings for the demo command.
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Configuration of the sanitizing decorator used by writing commands.
#[derive(Debug, Default, Deserialize)]
pub struct FilterConfig {
    /// Strip control characters from free text (default: true).
    pub enabled: Option<bool>,
}

/// Configuration for the demo command.
#[derive(Debug, Default, Deserialize)]
pub struct DemoConfig {
    /// Number of images to generate.
    pub images: Option<usize>,

    /// Number of channels per image.
    pub channels: Option<usize>,

    /// Write Z/C/T coordinates for every plane.
    pub planes: Option<bool>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Load the file if one was given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::from_file)
    }

    /// Whether writes go through the sanitizer, with `disable` from the command line winning.
    pub fn filter_enabled(&self, disable: bool) -> bool {
        !disable && self.filter.enabled.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [filter]
            enabled = false

            [demo]
            images = 2
            channels = 3
            planes = true
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.filter.enabled, Some(false));
        assert_eq!(config.demo.images, Some(2));
        assert_eq!(config.demo.channels, Some(3));
        assert_eq!(config.demo.planes, Some(true));
        assert!(!config.filter_enabled(false));
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [demo]
            channels = 4
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.demo.channels, Some(4));
        assert_eq!(config.demo.images, None);
        assert!(config.filter_enabled(false));
        assert!(!config.filter_enabled(true));
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.filter.enabled, None);
        assert!(Config::load(None).unwrap().filter_enabled(false));
    }

    #[test]
    fn test_invalid_config() {
        assert!(Config::from_str("[demo]\nimages = \"two\"").is_err());
    }
}
