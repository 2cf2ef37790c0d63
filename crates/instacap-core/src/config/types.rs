//! Sub-configuration structs with their defaults.

use crate::types::{CaptionOptions, Style, Tone};
use serde::{Deserialize, Serialize};

/// Image analysis settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Edge length of the square grid the image is downsampled to before
    /// averaging colors
    pub sample_size: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self { sample_size: 50 }
    }
}

/// Resource limits to protect against problematic inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum encoded input size in megabytes
    pub max_input_mb: u64,

    /// Maximum image dimension (width or height)
    pub max_image_dimension: u32,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_input_mb: 25,
            max_image_dimension: 20000,
        }
    }
}

/// Default caption options, used when the caller doesn't override them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptionConfig {
    pub tone: Tone,
    pub style: Style,

    /// Append the hashtag block
    pub hashtags: bool,

    /// Substitute an emoji into the template
    pub emojis: bool,
}

impl Default for CaptionConfig {
    fn default() -> Self {
        let options = CaptionOptions::default();
        Self {
            tone: options.tone,
            style: options.style,
            hashtags: options.include_hashtags,
            emojis: options.include_emojis,
        }
    }
}

impl CaptionConfig {
    /// Caption options described by this section.
    pub fn options(&self) -> CaptionOptions {
        CaptionOptions {
            tone: self.tone,
            style: self.style,
            include_hashtags: self.hashtags,
            include_emojis: self.emojis,
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
