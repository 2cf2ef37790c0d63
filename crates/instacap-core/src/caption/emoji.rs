//! Emoji decoration keyed by color mood and brightness level.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{BrightnessLevel, ColorMood};

use super::templates::PLACEHOLDER;

const MOOD_EMOJIS: &[(ColorMood, &[&str])] = &[
    (ColorMood::Warm, &["🔥", "🌅", "☀️", "🧡"]),
    (ColorMood::Cool, &["💙", "🌊", "❄️", "🌙"]),
    (ColorMood::Energetic, &["⚡", "🌈", "✨", "💫"]),
    (ColorMood::Creative, &["🎨", "💜", "🌸", "✨"]),
    (ColorMood::Monochrome, &["🖤", "🤍", "📸", "⚫"]),
    (ColorMood::Neutral, &["🌟", "✨", "💛", "🌼"]),
];

/// Used for a mood with no entry in the table.
const FALLBACK_MOOD_EMOJIS: &[&str] = &["✨", "🌟", "💫", "⭐"];

const BRIGHTNESS_EMOJIS: &[(BrightnessLevel, &[&str])] = &[
    (BrightnessLevel::Bright, &["☀️", "✨", "🌟", "💡"]),
    (BrightnessLevel::Dark, &["🌙", "🖤", "🌃", "✨"]),
    (BrightnessLevel::Balanced, &["🌤️", "⚖️", "🌈", "💫"]),
];

/// Used for a brightness level with no entry in the table.
const FALLBACK_BRIGHTNESS_EMOJIS: &[&str] = &["✨", "🌟"];

/// Emoji set for a color mood.
pub fn mood_emojis(mood: ColorMood) -> &'static [&'static str] {
    MOOD_EMOJIS
        .iter()
        .find(|(m, _)| *m == mood)
        .map(|&(_, set)| set)
        .unwrap_or(FALLBACK_MOOD_EMOJIS)
}

/// Emoji set for a brightness level.
pub fn brightness_emojis(level: BrightnessLevel) -> &'static [&'static str] {
    BRIGHTNESS_EMOJIS
        .iter()
        .find(|(l, _)| *l == level)
        .map(|&(_, set)| set)
        .unwrap_or(FALLBACK_BRIGHTNESS_EMOJIS)
}

/// Pick one emoji uniformly from the merged mood and brightness sets.
pub fn pick_emoji<R: Rng + ?Sized>(
    mood: ColorMood,
    level: BrightnessLevel,
    rng: &mut R,
) -> &'static str {
    let pool: Vec<&'static str> = mood_emojis(mood)
        .iter()
        .chain(brightness_emojis(level))
        .copied()
        .collect();
    pool.choose(rng).copied().unwrap_or("✨")
}

/// Fill the template placeholder with `emoji`, or strip it (and the space
/// before it) when `emoji` is `None`.
pub fn apply(template: &str, emoji: Option<&str>) -> String {
    match emoji {
        Some(emoji) => template.replace(PLACEHOLDER, emoji),
        None => template
            .replace(&format!(" {PLACEHOLDER}"), "")
            .replace(PLACEHOLDER, ""),
    }
}
