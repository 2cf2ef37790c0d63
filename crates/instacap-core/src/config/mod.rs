//! Configuration management for InstaCap.
//!
//! Configuration is loaded from the platform config directory with sensible
//! defaults. Every section implements `Default`, so a partial file only
//! overrides what it names.

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for InstaCap.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Image analysis settings
    pub analysis: AnalysisConfig,

    /// Resource limits
    pub limits: LimitsConfig,

    /// Default caption options
    pub caption: CaptionConfig,

    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// Uses platform-appropriate directories:
    /// - macOS: ~/Library/Application Support/com.instacap.instacap/config.toml
    /// - Linux: ~/.config/instacap/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\instacap\config\config.toml
    ///
    /// Falls back to ~/.instacap/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "instacap", "instacap")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let expanded = shellexpand::tilde("~/.instacap/config.toml");
                PathBuf::from(expanded.into_owned())
            })
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Style, Tone};
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.analysis.sample_size, 50);
        assert_eq!(config.limits.max_input_mb, 25);
        assert_eq!(config.caption.tone, Tone::Casual);
        assert_eq!(config.caption.style, Style::Medium);
        assert!(config.output.pretty);
    }

    #[test]
    fn test_config_to_toml() {
        let config = Config::default();
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[analysis]"));
        assert!(toml.contains("[caption]"));
        assert!(toml.contains("tone = \"casual\""));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = Config::from_toml("[caption]\ntone = \"professional\"\nemojis = false\n").unwrap();
        assert_eq!(config.caption.tone, Tone::Professional);
        assert!(!config.caption.emojis);
        assert!(config.caption.hashtags);
        assert_eq!(config.analysis.sample_size, 50);
    }

    #[test]
    fn test_load_from_file_validates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[analysis]\nsample_size = 0").unwrap();
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("sample_size"));
    }

    #[test]
    fn test_unknown_tone_is_parse_error() {
        let err = Config::from_toml("[caption]\ntone = \"sarcastic\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_toml_roundtrip_of_defaults() {
        let toml = Config::default().to_toml().unwrap();
        let parsed = Config::from_toml(&toml).unwrap();
        assert_eq!(parsed.caption.options(), Config::default().caption.options());
    }
}
