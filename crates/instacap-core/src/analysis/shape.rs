//! Aspect-ratio shape classification with mood and brightness modifiers.

use crate::types::{BrightnessInfo, ColorInfo, ShapeBase, ShapeInfo};

/// Ratios above this are landscape.
const LANDSCAPE_ABOVE: f64 = 1.5;

/// Ratios below this are portrait.
const PORTRAIT_BELOW: f64 = 0.8;

/// Combines dimensions with color and brightness results.
pub struct ShapeClassifier;

impl ShapeClassifier {
    /// Classify an image of the given size.
    ///
    /// `height` must be non-zero; the profile builder rejects degenerate
    /// images before getting here.
    pub fn classify(
        width: u32,
        height: u32,
        colors: &ColorInfo,
        brightness: &BrightnessInfo,
    ) -> ShapeInfo {
        let ratio = f64::from(width) / f64::from(height);
        let modifiers = colors
            .mood
            .modifier()
            .into_iter()
            .chain(brightness.level.modifier())
            .map(str::to_string)
            .collect();

        ShapeInfo {
            base: ShapeBase::classify(ratio),
            modifiers,
        }
    }
}

impl ShapeBase {
    /// Bucket an aspect ratio. Both thresholds are exclusive.
    pub fn classify(aspect_ratio: f64) -> Self {
        if aspect_ratio > LANDSCAPE_ABOVE {
            ShapeBase::Landscape
        } else if aspect_ratio < PORTRAIT_BELOW {
            ShapeBase::Portrait
        } else {
            ShapeBase::Square
        }
    }
}
