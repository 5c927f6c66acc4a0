//! TOML configuration file support.
//!
//! ```toml
//! # mzconvert.toml
//! [conversion]
//! target_extension = "mzsb"
//! show_progress = false
//! compress_scans = true
//! buffer_size = 1048576
//! ```

use anyhow::{Context, Result};
use mzconvert::convert::ConversionConfig;
use serde::Deserialize;
use std::path::Path;

/// Root configuration structure for mzconvert.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Conversion-specific settings.
    #[serde(default)]
    pub conversion: ConversionSettings,
}

/// `[conversion]` table; unset keys keep their defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConversionSettings {
    /// Extension of derived output files.
    pub target_extension: Option<String>,

    /// Print per-file progress lines.
    pub show_progress: Option<bool>,

    /// gzip each scan's peak table.
    pub compress_scans: Option<bool>,

    /// Input read buffer size in bytes.
    pub buffer_size: Option<usize>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}

impl ConversionSettings {
    /// Overlay the keys present in the file on `base`.
    pub fn apply(&self, mut base: ConversionConfig) -> ConversionConfig {
        if let Some(extension) = &self.target_extension {
            base.target_extension = extension.trim_start_matches('.').to_string();
        }
        if let Some(show) = self.show_progress {
            base.show_progress = show;
        }
        if let Some(compress) = self.compress_scans {
            base.writer.compress_scans = compress;
        }
        if let Some(size) = self.buffer_size {
            base.buffer_size = size.max(1);
        }
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [conversion]
            target_extension = ".bin"
            show_progress = false
            compress_scans = false
            buffer_size = 1024
        "#;

        let config = Config::parse(toml).unwrap();
        let applied = config.conversion.apply(ConversionConfig::default());
        assert_eq!(applied.target_extension, "bin");
        assert!(!applied.show_progress);
        assert!(!applied.writer.compress_scans);
        assert_eq!(applied.buffer_size, 1024);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = Config::parse("[conversion]\nshow_progress = false\n").unwrap();
        let applied = config.conversion.apply(ConversionConfig::default());
        assert!(!applied.show_progress);
        assert_eq!(applied.target_extension, "mzsb");
        assert!(applied.writer.compress_scans);
    }

    #[test]
    fn test_empty_config() {
        let config = Config::parse("").unwrap();
        assert!(config.conversion.target_extension.is_none());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Config::parse("[conversion]\nrow_group_size = 5\n").is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(Config::from_file(Path::new("/nonexistent/mzconvert.toml")).is_err());
    }
}
