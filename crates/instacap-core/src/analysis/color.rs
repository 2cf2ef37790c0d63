//! Representative color and mood extraction.

use image::imageops::FilterType;
use image::{DynamicImage, RgbImage};

use crate::types::{ColorInfo, ColorMood};

/// Saturation below which a color reads as gray.
const LOW_SATURATION: f64 = 0.2;

/// Value below which a gray reads as monochrome rather than neutral.
const LOW_VALUE: f64 = 0.3;

/// Averages a downsampled copy of the image and labels its mood.
pub struct ColorAnalyzer {
    sample_size: u32,
}

impl ColorAnalyzer {
    /// Create an analyzer that averages over a `sample_size × sample_size` grid.
    pub fn new(sample_size: u32) -> Self {
        Self {
            sample_size: sample_size.max(1),
        }
    }

    /// Compute the color statistics of an image.
    pub fn analyze(&self, image: &DynamicImage) -> ColorInfo {
        let sample = image
            .resize_exact(self.sample_size, self.sample_size, FilterType::Triangle)
            .to_rgb8();
        let mean = mean_rgb(&sample);
        color_info_from_mean(mean)
    }
}

/// Build `ColorInfo` from a per-channel mean in the 0..=255 range.
pub fn color_info_from_mean(mean: [f64; 3]) -> ColorInfo {
    let [r, g, b] = mean;
    let (hue, saturation, value) = rgb_to_hsv(r / 255.0, g / 255.0, b / 255.0);
    ColorInfo {
        dominant_rgb: mean.map(|c| c.clamp(0.0, 255.0) as u8),
        saturation,
        value,
        mood: ColorMood::classify(hue, saturation, value),
    }
}

/// Per-channel mean of an RGB image.
fn mean_rgb(image: &RgbImage) -> [f64; 3] {
    let mut sums = [0u64; 3];
    for pixel in image.pixels() {
        for (sum, &channel) in sums.iter_mut().zip(pixel.0.iter()) {
            *sum += u64::from(channel);
        }
    }
    let count = (u64::from(image.width()) * u64::from(image.height())).max(1) as f64;
    sums.map(|sum| sum as f64 / count)
}

/// Convert RGB components in 0.0..=1.0 to `(hue, saturation, value)`.
///
/// Hue is a fraction of a full turn in `[0, 1)`; grays get hue 0.
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let value = max;
    if max == min {
        return (0.0, 0.0, value);
    }

    let range = max - min;
    let saturation = range / max;
    let rc = (max - r) / range;
    let gc = (max - g) / range;
    let bc = (max - b) / range;
    let hue = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    ((hue / 6.0).rem_euclid(1.0), saturation, value)
}

impl ColorMood {
    /// Classify a color by hue, saturation and value. First matching rule wins.
    pub fn classify(hue: f64, saturation: f64, value: f64) -> Self {
        if saturation < LOW_SATURATION {
            if value < LOW_VALUE {
                ColorMood::Monochrome
            } else {
                ColorMood::Neutral
            }
        } else if hue < 0.1 || hue > 0.9 {
            ColorMood::Warm
        } else if hue < 0.3 {
            ColorMood::Energetic
        } else if hue < 0.7 {
            ColorMood::Cool
        } else {
            ColorMood::Creative
        }
    }

    /// Shape modifier contributed by this mood, if any.
    pub fn modifier(&self) -> Option<&'static str> {
        match self {
            ColorMood::Warm => Some("warm"),
            ColorMood::Cool => Some("cool"),
            ColorMood::Energetic => Some("vibrant"),
            ColorMood::Monochrome => Some("artistic"),
            ColorMood::Neutral | ColorMood::Creative => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn uniform(width: u32, height: u32, rgb: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(rgb)))
    }

    #[test]
    fn test_pure_red_is_warm() {
        let info = ColorAnalyzer::new(50).analyze(&uniform(1, 1, [255, 0, 0]));
        assert_eq!(info.dominant_rgb, [255, 0, 0]);
        assert!((info.saturation - 1.0).abs() < 1e-9);
        assert!((info.value - 1.0).abs() < 1e-9);
        assert_eq!(info.mood, ColorMood::Warm);
    }

    #[test]
    fn test_primary_colors_map_to_expected_moods() {
        let analyzer = ColorAnalyzer::new(8);
        // Yellow: hue 1/6
        assert_eq!(
            analyzer.analyze(&uniform(4, 4, [255, 255, 0])).mood,
            ColorMood::Energetic
        );
        // Blue: hue 2/3
        assert_eq!(
            analyzer.analyze(&uniform(4, 4, [0, 0, 255])).mood,
            ColorMood::Cool
        );
        // Purple: hue 0.75
        assert_eq!(
            analyzer.analyze(&uniform(4, 4, [128, 0, 255])).mood,
            ColorMood::Creative
        );
    }

    #[test]
    fn test_grays_split_on_value() {
        let analyzer = ColorAnalyzer::new(8);
        let dark = analyzer.analyze(&uniform(3, 3, [20, 20, 20]));
        assert_eq!(dark.mood, ColorMood::Monochrome);
        assert_eq!(dark.saturation, 0.0);

        let light = analyzer.analyze(&uniform(3, 3, [200, 200, 200]));
        assert_eq!(light.mood, ColorMood::Neutral);
    }

    #[test]
    fn test_mean_of_two_halves() {
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, Rgb([200, 0, 0]));
        img.put_pixel(1, 0, Rgb([0, 0, 100]));
        assert_eq!(mean_rgb(&img), [100.0, 0.0, 50.0]);
    }

    #[test]
    fn test_dominant_rgb_truncates() {
        let info = color_info_from_mean([10.9, 20.5, 30.1]);
        assert_eq!(info.dominant_rgb, [10, 20, 30]);
    }

    #[test]
    fn test_rgb_to_hsv_ranges() {
        for &(r, g, b) in &[
            (0.0, 0.0, 0.0),
            (1.0, 1.0, 1.0),
            (0.2, 0.9, 0.4),
            (0.9, 0.1, 0.5),
            (0.3, 0.3, 0.31),
        ] {
            let (h, s, v) = rgb_to_hsv(r, g, b);
            assert!((0.0..1.0).contains(&h), "hue {h} out of range");
            assert!((0.0..=1.0).contains(&s));
            assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_rgb_to_hsv_magenta_wraps_below_one() {
        // Magenta-red: r max, b > g, so the raw hue is negative before wrapping
        let (h, _, _) = rgb_to_hsv(1.0, 0.0, 0.2);
        assert!(h > 0.9 && h < 1.0);
    }

    #[test]
    fn test_classify_hue_boundaries() {
        assert_eq!(ColorMood::classify(0.099, 0.5, 0.5), ColorMood::Warm);
        assert_eq!(ColorMood::classify(0.1, 0.5, 0.5), ColorMood::Energetic);
        assert_eq!(ColorMood::classify(0.3, 0.5, 0.5), ColorMood::Cool);
        assert_eq!(ColorMood::classify(0.7, 0.5, 0.5), ColorMood::Creative);
        // Strict `> 0.9`: the seam itself stays creative
        assert_eq!(ColorMood::classify(0.9, 0.5, 0.5), ColorMood::Creative);
        assert_eq!(ColorMood::classify(0.9001, 0.5, 0.5), ColorMood::Warm);
    }

    #[test]
    fn test_classify_saturation_checked_first() {
        assert_eq!(ColorMood::classify(0.5, 0.19, 0.29), ColorMood::Monochrome);
        assert_eq!(ColorMood::classify(0.5, 0.19, 0.3), ColorMood::Neutral);
        assert_eq!(ColorMood::classify(0.5, 0.2, 0.1), ColorMood::Cool);
    }

    #[test]
    fn test_mood_modifiers() {
        assert_eq!(ColorMood::Energetic.modifier(), Some("vibrant"));
        assert_eq!(ColorMood::Monochrome.modifier(), Some("artistic"));
        assert_eq!(ColorMood::Neutral.modifier(), None);
        assert_eq!(ColorMood::Creative.modifier(), None);
    }
}
