//! InstaCap Core - offline photo captioning.
//!
//! InstaCap writes a short caption for a photo without a vision model. It
//! measures a few visual statistics (color mood, brightness, aspect-ratio
//! shape) and maps them through caption templates, with optional emoji and
//! hashtag decoration. It's the fallback path when a hosted vision service
//! isn't available.
//!
//! # Architecture
//!
//! ```text
//! Bytes/Base64 → Decode → Profile (color, brightness, shape) → Caption → Outcome
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use instacap_core::{CaptionOptions, Captioner, Config};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let captioner = Captioner::new(&Config::load()?);
//! let bytes = std::fs::read("./photo.jpg")?;
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let outcome = captioner.caption_bytes(&bytes, &CaptionOptions::default(), &mut rng);
//! println!("{}", serde_json::to_string_pretty(&outcome)?);
//! ```

// Module declarations
pub mod analysis;
pub mod caption;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod types;

// Re-exports for convenient access
pub use analysis::ProfileBuilder;
pub use caption::{CaptionSynthesizer, TemplateTable};
pub use config::Config;
pub use error::{ConfigError, InstacapError, PipelineError, PipelineResult, Result};
pub use output::{Outcome, OutputFormat, OutputWriter};
pub use pipeline::Captioner;
pub use types::{
    BrightnessInfo, BrightnessLevel, CaptionOptions, CaptionResult, ColorInfo, ColorMood,
    ImageProfile, ShapeBase, ShapeInfo, Style, Tone,
};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
