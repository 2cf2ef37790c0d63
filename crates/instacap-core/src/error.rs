//! Error types for the InstaCap analysis pipeline.
//!
//! Errors are organized by stage so the message that lands in a `Failure`
//! outcome says what went wrong (bad base64, undecodable bytes, degenerate
//! dimensions) without the caller having to inspect the variant.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for InstaCap operations.
#[derive(Error, Debug)]
pub enum InstacapError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pipeline processing errors
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Errors raised while turning input bytes into an image profile.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Input bytes could not be decoded as an image
    #[error("Decode error: {message}")]
    Decode { message: String },

    /// Input text is not valid base64
    #[error("Invalid base64 image data: {message}")]
    InvalidBase64 { message: String },

    /// Image decoded to zero width or height
    #[error("Degenerate image: {width}x{height} has no area")]
    DegenerateImage { width: u32, height: u32 },

    /// Encoded input exceeds the size limit
    #[error("Input too large: {size_mb}MB > {max_mb}MB")]
    InputTooLarge { size_mb: u64, max_mb: u64 },

    /// Image dimensions exceed limit
    #[error("Image too large: {width}x{height} > {max_dim}")]
    ImageTooLarge {
        width: u32,
        height: u32,
        max_dim: u32,
    },

    /// Format could not be detected from the content
    #[error("Unsupported format: {format}")]
    UnsupportedFormat { format: String },

    /// A codec panicked while decoding or analyzing the image
    #[error("Analysis aborted: {message}")]
    Panicked { message: String },

    /// Input file could not be read
    #[error("Cannot read {path}: {message}")]
    Read { path: PathBuf, message: String },
}

/// Convenience type alias for InstaCap results.
pub type Result<T> = std::result::Result<T, InstacapError>;

/// Convenience type alias for pipeline-specific results.
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_message_includes_dimensions() {
        let err = PipelineError::DegenerateImage {
            width: 0,
            height: 12,
        };
        assert_eq!(err.to_string(), "Degenerate image: 0x12 has no area");
    }

    #[test]
    fn test_pipeline_error_wraps_into_top_level() {
        let err: InstacapError = PipelineError::Decode {
            message: "bad header".into(),
        }
        .into();
        assert!(err.to_string().contains("bad header"));
    }
}
