//! Turns an image profile and caption options into caption text.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{CaptionOptions, CaptionResult, ImageProfile};

use super::emoji;
use super::hashtags::hashtags_for;
use super::templates::{TemplateKey, TemplateTable, DEFAULT_TEMPLATE};

/// Separates the caption body from the hashtag block.
const HASHTAG_SEPARATOR: &str = "\n\n";

/// Template-driven caption writer.
///
/// Holds only its template table, so one synthesizer can serve any number
/// of requests; randomness is passed in per call.
#[derive(Debug, Clone, Default)]
pub struct CaptionSynthesizer {
    templates: TemplateTable,
}

impl CaptionSynthesizer {
    /// Create a synthesizer with a custom template table.
    pub fn new(templates: TemplateTable) -> Self {
        Self { templates }
    }

    /// Get a reference to the template table.
    pub fn templates(&self) -> &TemplateTable {
        &self.templates
    }

    /// Write a caption for `profile`.
    ///
    /// The template is drawn from `rng` first, then the emoji (when enabled),
    /// so a generator in the same state always yields the same text.
    pub fn synthesize<R: Rng + ?Sized>(
        &self,
        profile: &ImageProfile,
        options: &CaptionOptions,
        rng: &mut R,
    ) -> CaptionResult {
        let key = TemplateKey {
            shape: profile.shape.base,
            tone: options.tone,
            style: options.style,
        };
        let (tier, candidates) = self.templates.resolve(key);
        tracing::trace!(
            "Template lookup {}/{}/{} resolved at {:?} tier",
            key.shape,
            key.tone,
            key.style,
            tier
        );
        let template = candidates
            .choose(rng)
            .copied()
            .unwrap_or(DEFAULT_TEMPLATE);

        let chosen_emoji = options
            .include_emojis
            .then(|| emoji::pick_emoji(profile.colors.mood, profile.brightness.level, rng));
        let mut text = emoji::apply(template, chosen_emoji);

        if options.include_hashtags {
            let tags = hashtags_for(profile.colors.mood, profile.shape.base);
            text.push_str(HASHTAG_SEPARATOR);
            text.push_str(&tags.join(" "));
        }

        CaptionResult { text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caption::{BASE_HASHTAGS, MAX_HASHTAGS, PLACEHOLDER};
    use crate::types::{
        BrightnessInfo, BrightnessLevel, ColorInfo, ColorMood, Dimensions, ShapeBase, ShapeInfo,
        Style, Tone,
    };
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn profile(base: ShapeBase, mood: ColorMood, level: BrightnessLevel) -> ImageProfile {
        ImageProfile {
            dimensions: Dimensions {
                width: 100,
                height: 100,
            },
            aspect_ratio: 1.0,
            colors: ColorInfo {
                dominant_rgb: [200, 40, 40],
                saturation: 0.8,
                value: 0.78,
                mood,
            },
            brightness: BrightnessInfo { level, value: 0.5 },
            shape: ShapeInfo {
                base,
                modifiers: vec![],
            },
        }
    }

    fn options(tone: Tone, style: Style, hashtags: bool, emojis: bool) -> CaptionOptions {
        CaptionOptions {
            tone,
            style,
            include_hashtags: hashtags,
            include_emojis: emojis,
        }
    }

    fn first_pick() -> StepRng {
        StepRng::new(0, 0)
    }

    #[test]
    fn test_first_candidate_with_emoji_and_hashtags() {
        let synth = CaptionSynthesizer::default();
        let result = synth.synthesize(
            &profile(ShapeBase::Square, ColorMood::Warm, BrightnessLevel::Dark),
            &options(Tone::Casual, Style::Short, true, true),
            &mut first_pick(),
        );
        assert_eq!(
            result.text,
            "Perfect frame 🔥\n\n#photooftheday #instagood #picoftheday #sunset #golden \
             #warmvibes #cozy #square #composition #balance"
        );
    }

    #[test]
    fn test_fixed_rng_is_idempotent() {
        let synth = CaptionSynthesizer::default();
        let p = profile(ShapeBase::Landscape, ColorMood::Cool, BrightnessLevel::Bright);
        let o = options(Tone::Professional, Style::Medium, true, true);
        let a = synth.synthesize(&p, &o, &mut first_pick());
        let b = synth.synthesize(&p, &o, &mut first_pick());
        assert_eq!(a, b);

        let c = synth.synthesize(&p, &o, &mut StdRng::seed_from_u64(42));
        let d = synth.synthesize(&p, &o, &mut StdRng::seed_from_u64(42));
        assert_eq!(c, d);
    }

    #[test]
    fn test_no_emojis_leaves_no_artifacts() {
        let synth = CaptionSynthesizer::default();
        let mut rng = StdRng::seed_from_u64(3);
        for base in ShapeBase::ALL {
            for tone in Tone::ALL {
                for style in Style::ALL {
                    for _ in 0..4 {
                        let result = synth.synthesize(
                            &profile(*base, ColorMood::Neutral, BrightnessLevel::Balanced),
                            &options(*tone, *style, false, false),
                            &mut rng,
                        );
                        assert!(!result.text.contains(PLACEHOLDER));
                        assert!(!result.text.contains("  "), "{:?}", result.text);
                        assert!(!result.text.ends_with(' '));
                    }
                }
            }
        }
    }

    #[test]
    fn test_no_hashtags_has_no_block() {
        let synth = CaptionSynthesizer::default();
        let result = synth.synthesize(
            &profile(ShapeBase::Portrait, ColorMood::Creative, BrightnessLevel::Bright),
            &options(Tone::Casual, Style::Long, false, true),
            &mut first_pick(),
        );
        assert!(!result.text.contains("\n\n"));
        assert!(!result.text.contains('#'));
    }

    #[test]
    fn test_hashtag_block_shape() {
        let synth = CaptionSynthesizer::default();
        for mood in ColorMood::ALL {
            for base in ShapeBase::ALL {
                let result = synth.synthesize(
                    &profile(*base, *mood, BrightnessLevel::Balanced),
                    &options(Tone::Trendy, Style::Short, true, false),
                    &mut first_pick(),
                );
                let (_, block) = result.text.split_once("\n\n").unwrap();
                let tags: Vec<&str> = block.split(' ').collect();
                assert!(tags.len() <= MAX_HASHTAGS);
                assert_eq!(&tags[..3], &BASE_HASHTAGS[..]);
            }
        }
    }

    #[test]
    fn test_tone_gap_uses_style_templates() {
        let synth = CaptionSynthesizer::default();
        let result = synth.synthesize(
            &profile(ShapeBase::Square, ColorMood::Neutral, BrightnessLevel::Balanced),
            &options(Tone::Funny, Style::Short, false, false),
            &mut first_pick(),
        );
        assert_eq!(result.text, "Picture perfect moment");
    }

    #[test]
    fn test_custom_table() {
        let mut table = TemplateTable::with_default(&["Only this {emoji}"]);
        table.insert_style(Style::Long, &["Long one {emoji}"]);
        let synth = CaptionSynthesizer::new(table);
        let p = profile(ShapeBase::Square, ColorMood::Neutral, BrightnessLevel::Balanced);

        let short = synth.synthesize(
            &p,
            &options(Tone::Casual, Style::Short, false, false),
            &mut first_pick(),
        );
        assert_eq!(short.text, "Only this");

        let long = synth.synthesize(
            &p,
            &options(Tone::Casual, Style::Long, false, false),
            &mut first_pick(),
        );
        assert_eq!(long.text, "Long one");
    }

    #[test]
    fn test_emoji_comes_from_mood_or_brightness_sets() {
        let synth = CaptionSynthesizer::default();
        let mut rng = StdRng::seed_from_u64(11);
        let p = profile(ShapeBase::Square, ColorMood::Monochrome, BrightnessLevel::Dark);
        for _ in 0..20 {
            let result =
                synth.synthesize(&p, &options(Tone::Casual, Style::Short, false, true), &mut rng);
            let emoji = result.text.rsplit(' ').next().unwrap();
            assert!(
                emoji::mood_emojis(ColorMood::Monochrome).contains(&emoji)
                    || emoji::brightness_emojis(BrightnessLevel::Dark).contains(&emoji),
                "{emoji}"
            );
        }
    }
}
