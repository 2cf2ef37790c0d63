//! Pipeline orchestration: decode, analyze, caption, and wrap the outcome.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use rand::Rng;

use crate::analysis::ProfileBuilder;
use crate::caption::CaptionSynthesizer;
use crate::config::Config;
use crate::error::{PipelineError, PipelineResult};
use crate::output::Outcome;
use crate::types::{CaptionOptions, ImageProfile};

use super::decode::{format_to_string, ImageDecoder};
use super::validate::Validator;

/// The facade that turns encoded image data into a captioned outcome.
///
/// Holds only immutable configuration, so a single instance can be shared
/// across threads; each call takes its own random generator.
pub struct Captioner {
    validator: Validator,
    profiler: ProfileBuilder,
    synthesizer: CaptionSynthesizer,
}

impl Captioner {
    /// Create a captioner with the given configuration and built-in templates.
    pub fn new(config: &Config) -> Self {
        Self::with_synthesizer(config, CaptionSynthesizer::default())
    }

    /// Create a captioner with a custom synthesizer.
    pub fn with_synthesizer(config: &Config, synthesizer: CaptionSynthesizer) -> Self {
        Self {
            validator: Validator::new(config.limits.clone()),
            profiler: ProfileBuilder::new(&config.analysis),
            synthesizer,
        }
    }

    /// Caption raw encoded image bytes. Never fails; errors become
    /// `Outcome::Failure`.
    pub fn caption_bytes<R: Rng + ?Sized>(
        &self,
        bytes: &[u8],
        options: &CaptionOptions,
        rng: &mut R,
    ) -> Outcome {
        let start = std::time::Instant::now();
        let result = self.analyze_bytes(bytes).map(|profile| {
            let caption = self.synthesizer.synthesize(&profile, options, rng);
            (caption.text, profile)
        });
        let outcome = Outcome::from_result(result);
        match &outcome {
            Outcome::Success { profile, .. } => tracing::debug!(
                "Captioned {}x{} image in {:?} (tone={}, style={})",
                profile.width(),
                profile.height(),
                start.elapsed(),
                options.tone,
                options.style
            ),
            Outcome::Failure { message } => tracing::warn!("Captioning failed: {message}"),
        }
        outcome
    }

    /// Caption base64-encoded image data.
    pub fn caption_base64<R: Rng + ?Sized>(
        &self,
        data: &str,
        options: &CaptionOptions,
        rng: &mut R,
    ) -> Outcome {
        match ImageDecoder::decode_base64(data) {
            Ok(bytes) => self.caption_bytes(&bytes, options, rng),
            Err(e) => {
                tracing::warn!("Captioning failed: {e}");
                Outcome::failure(e)
            }
        }
    }

    /// Caption an image file on disk.
    pub fn caption_file<R: Rng + ?Sized>(
        &self,
        path: &Path,
        options: &CaptionOptions,
        rng: &mut R,
    ) -> Outcome {
        tracing::debug!("Reading: {:?}", path);
        match std::fs::read(path) {
            Ok(bytes) => self.caption_bytes(&bytes, options, rng),
            Err(e) => {
                let err = PipelineError::Read {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                };
                tracing::warn!("Captioning failed: {err}");
                Outcome::failure(err)
            }
        }
    }

    /// Decode and analyze image bytes without writing a caption.
    ///
    /// A panic inside a codec is caught and reported as
    /// `PipelineError::Panicked`.
    pub fn analyze_bytes(&self, bytes: &[u8]) -> PipelineResult<ImageProfile> {
        catch_panic(|| self.analyze_unguarded(bytes))
    }

    fn analyze_unguarded(&self, bytes: &[u8]) -> PipelineResult<ImageProfile> {
        self.validator.check_input(bytes)?;

        let decode_start = std::time::Instant::now();
        let decoded = ImageDecoder::decode_bytes(bytes, &self.validator)?;
        tracing::trace!(
            "  Decode ({}): {:?}",
            format_to_string(decoded.format),
            decode_start.elapsed()
        );

        self.profiler.build(&decoded.image)
    }
}

/// Run `f`, turning a panic into `PipelineError::Panicked`.
fn catch_panic<T>(f: impl FnOnce() -> PipelineResult<T>) -> PipelineResult<T> {
    panic::catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|payload| {
        Err(PipelineError::Panicked {
            message: panic_message(payload.as_ref()),
        })
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "decoder panicked".to_string()
    }
}
