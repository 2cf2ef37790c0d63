//! Assembles the complete image profile from the individual analyzers.

use image::{DynamicImage, GenericImageView};

use crate::config::AnalysisConfig;
use crate::error::{PipelineError, PipelineResult};
use crate::types::{Dimensions, ImageProfile};

use super::brightness::BrightnessAnalyzer;
use super::color::ColorAnalyzer;
use super::shape::ShapeClassifier;

/// Builds an `ImageProfile` from a decoded image.
pub struct ProfileBuilder {
    color: ColorAnalyzer,
}

impl ProfileBuilder {
    /// Create a builder with the given analysis settings.
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            color: ColorAnalyzer::new(config.sample_size),
        }
    }

    /// Analyze an image. Fails only for zero-area images.
    pub fn build(&self, image: &DynamicImage) -> PipelineResult<ImageProfile> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(PipelineError::DegenerateImage { width, height });
        }

        let start = std::time::Instant::now();
        let colors = self.color.analyze(image);
        tracing::trace!("  Color: {:?}", start.elapsed());

        let brightness_start = std::time::Instant::now();
        let brightness = BrightnessAnalyzer::analyze(image);
        tracing::trace!("  Brightness: {:?}", brightness_start.elapsed());

        let shape = ShapeClassifier::classify(width, height, &colors, &brightness);

        tracing::debug!(
            "Profiled {}x{} image: mood={}, brightness={}, shape={}",
            width,
            height,
            colors.mood,
            brightness.level,
            shape.base
        );

        Ok(ImageProfile {
            dimensions: Dimensions { width, height },
            aspect_ratio: f64::from(width) / f64::from(height),
            colors,
            brightness,
            shape,
        })
    }
}
