//! Core data types for the InstaCap analysis pipeline.
//!
//! These types represent the profile extracted from an image and the
//! options that shape the caption written from it. Field and variant names
//! serialize exactly as downstream callers of the analyzer JSON expect them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The complete output of the analysis stage for one image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageProfile {
    /// Pixel dimensions of the decoded image
    pub dimensions: Dimensions,

    /// `width / height`
    pub aspect_ratio: f64,

    /// Representative color and mood
    pub colors: ColorInfo,

    /// Mean luminance and its bucket
    pub brightness: BrightnessInfo,

    /// Shape category and descriptive modifiers
    #[serde(rename = "type")]
    pub shape: ShapeInfo,
}

impl ImageProfile {
    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.dimensions.height
    }
}

/// Image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Color statistics derived from the downsampled mean pixel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorInfo {
    /// Mean RGB, truncated to integers
    pub dominant_rgb: [u8; 3],

    /// HSV saturation of the mean color, 0.0 to 1.0
    pub saturation: f64,

    /// HSV value of the mean color, 0.0 to 1.0
    pub value: f64,

    /// Qualitative mood label
    pub mood: ColorMood,
}

/// Mean luminance and its qualitative level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrightnessInfo {
    pub level: BrightnessLevel,

    /// Normalized mean luminance, 0.0 to 1.0
    pub value: f64,
}

/// Shape category plus ordered modifier tags (color first, then brightness).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeInfo {
    pub base: ShapeBase,
    pub modifiers: Vec<String>,
}

/// Declares a fieldless enum that serializes, displays and parses as a
/// lowercase word.
macro_rules! word_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $word:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The lowercase word for this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $word),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($word => Ok($name::$variant),)+
                    other => Err(format!(
                        "unknown {} '{}' (expected one of: {})",
                        stringify!($name).to_lowercase(),
                        other,
                        [$($word),+].join(", ")
                    )),
                }
            }
        }
    };
}

word_enum! {
    /// Color mood derived from hue, saturation and value.
    ColorMood {
        Monochrome => "monochrome",
        Neutral => "neutral",
        Warm => "warm",
        Energetic => "energetic",
        Cool => "cool",
        Creative => "creative",
    }
}

word_enum! {
    /// Brightness bucket of the mean luminance.
    BrightnessLevel {
        Dark => "dark",
        Balanced => "balanced",
        Bright => "bright",
    }
}

word_enum! {
    /// Aspect-ratio category.
    ShapeBase {
        Landscape => "landscape",
        Portrait => "portrait",
        Square => "square",
    }
}

word_enum! {
    /// Voice of the caption.
    Tone {
        Casual => "casual",
        Professional => "professional",
        Funny => "funny",
        Inspirational => "inspirational",
        Trendy => "trendy",
    }
}

word_enum! {
    /// Caption length.
    Style {
        Short => "short",
        Medium => "medium",
        Long => "long",
    }
}

/// Presentation options for caption synthesis.
///
/// The synthesizer takes every field from the caller; `Default` only exists
/// so config and CLI layers have a starting point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionOptions {
    pub tone: Tone,
    pub style: Style,
    pub include_hashtags: bool,
    pub include_emojis: bool,
}

impl Default for CaptionOptions {
    fn default() -> Self {
        Self {
            tone: Tone::Casual,
            style: Style::Medium,
            include_hashtags: true,
            include_emojis: true,
        }
    }
}

/// Final caption text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionResult {
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> ImageProfile {
        ImageProfile {
            dimensions: Dimensions {
                width: 200,
                height: 100,
            },
            aspect_ratio: 2.0,
            colors: ColorInfo {
                dominant_rgb: [10, 20, 200],
                saturation: 0.95,
                value: 0.78,
                mood: ColorMood::Cool,
            },
            brightness: BrightnessInfo {
                level: BrightnessLevel::Dark,
                value: 0.12,
            },
            shape: ShapeInfo {
                base: ShapeBase::Landscape,
                modifiers: vec!["cool".into(), "moody".into()],
            },
        }
    }

    #[test]
    fn test_profile_serializes_with_analyzer_field_names() {
        let json = serde_json::to_value(sample_profile()).unwrap();
        assert_eq!(json["dimensions"]["width"], 200);
        assert_eq!(json["dimensions"]["height"], 100);
        assert_eq!(json["aspect_ratio"], 2.0);
        assert_eq!(json["colors"]["dominant_rgb"], serde_json::json!([10, 20, 200]));
        assert_eq!(json["colors"]["mood"], "cool");
        assert_eq!(json["brightness"]["level"], "dark");
        assert_eq!(json["type"]["base"], "landscape");
        assert_eq!(json["type"]["modifiers"], serde_json::json!(["cool", "moody"]));
    }

    #[test]
    fn test_profile_accessors() {
        let profile = sample_profile();
        assert_eq!(profile.width(), 200);
        assert_eq!(profile.height(), 100);
    }

    #[test]
    fn test_word_enums_parse_case_insensitively() {
        assert_eq!("Casual".parse::<Tone>().unwrap(), Tone::Casual);
        assert_eq!("LONG".parse::<Style>().unwrap(), Style::Long);
        assert_eq!("creative".parse::<ColorMood>().unwrap(), ColorMood::Creative);
    }

    #[test]
    fn test_word_enum_parse_error_lists_choices() {
        let err = "sarcastic".parse::<Tone>().unwrap_err();
        assert!(err.contains("sarcastic"));
        assert!(err.contains("inspirational"));
    }

    #[test]
    fn test_display_matches_serde() {
        for tone in Tone::ALL {
            let json = serde_json::to_string(tone).unwrap();
            assert_eq!(json, format!("\"{tone}\""));
        }
    }

    #[test]
    fn test_caption_options_default() {
        let options = CaptionOptions::default();
        assert_eq!(options.tone, Tone::Casual);
        assert_eq!(options.style, Style::Medium);
        assert!(options.include_hashtags);
        assert!(options.include_emojis);
    }
}
