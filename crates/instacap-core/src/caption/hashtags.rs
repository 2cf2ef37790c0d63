//! Hashtag block built from fixed base tags plus mood and shape tags.

use crate::types::{ColorMood, ShapeBase};

/// Tags that open every hashtag block.
pub const BASE_HASHTAGS: [&str; 3] = ["#photooftheday", "#instagood", "#picoftheday"];

/// Upper bound on the number of tags in a block.
pub const MAX_HASHTAGS: usize = 10;

const MOOD_HASHTAGS: &[(ColorMood, [&str; 4])] = &[
    (ColorMood::Warm, ["#sunset", "#golden", "#warmvibes", "#cozy"]),
    (ColorMood::Cool, ["#cool", "#calm", "#peaceful", "#blue"]),
    (ColorMood::Energetic, ["#vibrant", "#energy", "#colorful", "#alive"]),
    (ColorMood::Creative, ["#artistic", "#creative", "#unique", "#inspiration"]),
    (ColorMood::Monochrome, ["#blackandwhite", "#minimalist", "#classic", "#timeless"]),
    (ColorMood::Neutral, ["#natural", "#simple", "#clean", "#fresh"]),
];

const SHAPE_HASHTAGS: &[(ShapeBase, [&str; 4])] = &[
    (ShapeBase::Landscape, ["#landscape", "#nature", "#view", "#scenery"]),
    (ShapeBase::Portrait, ["#portrait", "#selfie", "#mood", "#style"]),
    (ShapeBase::Square, ["#square", "#composition", "#balance", "#perfect"]),
];

/// Mood-specific tags; empty when the mood has no entry.
pub fn mood_hashtags(mood: ColorMood) -> &'static [&'static str] {
    MOOD_HASHTAGS
        .iter()
        .find(|(m, _)| *m == mood)
        .map(|(_, tags)| tags.as_slice())
        .unwrap_or(&[])
}

/// Shape-specific tags; empty when the shape has no entry.
pub fn shape_hashtags(shape: ShapeBase) -> &'static [&'static str] {
    SHAPE_HASHTAGS
        .iter()
        .find(|(s, _)| *s == shape)
        .map(|(_, tags)| tags.as_slice())
        .unwrap_or(&[])
}

/// Ordered tags for a mood and shape: base, then mood, then shape, capped at
/// `MAX_HASHTAGS`.
pub fn hashtags_for(mood: ColorMood, shape: ShapeBase) -> Vec<&'static str> {
    BASE_HASHTAGS
        .iter()
        .chain(mood_hashtags(mood))
        .chain(shape_hashtags(shape))
        .copied()
        .take(MAX_HASHTAGS)
        .collect()
}
