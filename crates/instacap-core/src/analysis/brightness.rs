//! Mean luminance and brightness level.

use image::DynamicImage;

use crate::types::{BrightnessInfo, BrightnessLevel};

/// Luminance below this is dark.
const DARK_BELOW: f64 = 0.3;

/// Luminance above this is bright.
const BRIGHT_ABOVE: f64 = 0.7;

/// Measures overall image brightness.
pub struct BrightnessAnalyzer;

impl BrightnessAnalyzer {
    /// Average the ITU-R 601-2 luma of the full image, normalized to 0.0..=1.0.
    pub fn analyze(image: &DynamicImage) -> BrightnessInfo {
        let rgb = image.to_rgb8();
        let count = (u64::from(rgb.width()) * u64::from(rgb.height())).max(1);
        let sum: u64 = rgb.pixels().map(|p| u64::from(luma_601(p.0))).sum();
        let value = (sum as f64 / count as f64) / 255.0;

        BrightnessInfo {
            level: BrightnessLevel::classify(value),
            value,
        }
    }
}

/// Integer luma `L = R*299/1000 + G*587/1000 + B*114/1000`, rounded.
pub fn luma_601([r, g, b]: [u8; 3]) -> u8 {
    let weighted = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
    ((weighted + 500) / 1000) as u8
}

impl BrightnessLevel {
    /// Bucket a normalized luminance. Both thresholds are exclusive, so
    /// exactly 0.3 and exactly 0.7 are balanced.
    pub fn classify(value: f64) -> Self {
        if value < DARK_BELOW {
            BrightnessLevel::Dark
        } else if value > BRIGHT_ABOVE {
            BrightnessLevel::Bright
        } else {
            BrightnessLevel::Balanced
        }
    }

    /// Shape modifier contributed by this level, if any.
    pub fn modifier(&self) -> Option<&'static str> {
        match self {
            BrightnessLevel::Dark => Some("moody"),
            BrightnessLevel::Bright => Some("bright"),
            BrightnessLevel::Balanced => None,
        }
    }
}
