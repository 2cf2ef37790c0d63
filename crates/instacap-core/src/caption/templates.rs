//! Caption templates and their fallback chain.
//!
//! Templates are looked up by `(shape, tone, style)`. Only some combinations
//! have their own wording; anything else falls back to templates keyed by
//! style alone, and finally to a generic default set.

use std::collections::HashMap;

use crate::types::{ShapeBase, Style, Tone};

/// Token replaced by an emoji, or removed when emojis are disabled.
pub const PLACEHOLDER: &str = "{emoji}";

/// Exact lookup key for a template set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TemplateKey {
    pub shape: ShapeBase,
    pub tone: Tone,
    pub style: Style,
}

/// Which level of the fallback chain produced a template set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateTier {
    /// Matched `(shape, tone, style)` exactly
    Exact,
    /// Matched style only
    Style,
    /// Nothing matched; generic default set
    Default,
}

/// Template sets with an exact → style → default fallback chain.
///
/// Empty candidate sets are never returned; an empty entry behaves like a
/// missing one.
#[derive(Debug, Clone)]
pub struct TemplateTable {
    exact: HashMap<TemplateKey, Vec<&'static str>>,
    by_style: HashMap<Style, Vec<&'static str>>,
    default: Vec<&'static str>,
}

impl TemplateTable {
    /// Create a table with no keyed entries and the given default set.
    pub fn with_default(default: &[&'static str]) -> Self {
        Self {
            exact: HashMap::new(),
            by_style: HashMap::new(),
            default: default.to_vec(),
        }
    }

    /// Register templates for an exact `(shape, tone, style)` key.
    pub fn insert(&mut self, key: TemplateKey, candidates: &[&'static str]) -> &mut Self {
        self.exact.insert(key, candidates.to_vec());
        self
    }

    /// Register style-only fallback templates.
    pub fn insert_style(&mut self, style: Style, candidates: &[&'static str]) -> &mut Self {
        self.by_style.insert(style, candidates.to_vec());
        self
    }

    /// Resolve the candidate set for a key, walking the fallback chain.
    pub fn resolve(&self, key: TemplateKey) -> (TemplateTier, &[&'static str]) {
        if let Some(candidates) = self.exact.get(&key).filter(|c| !c.is_empty()) {
            return (TemplateTier::Exact, candidates.as_slice());
        }
        if let Some(candidates) = self.by_style.get(&key.style).filter(|c| !c.is_empty()) {
            return (TemplateTier::Style, candidates.as_slice());
        }
        if self.default.is_empty() {
            return (TemplateTier::Default, DEFAULT_TEMPLATES);
        }
        (TemplateTier::Default, self.default.as_slice())
    }

    /// Number of exact keys with their own templates.
    pub fn exact_len(&self) -> usize {
        self.exact.len()
    }

    /// The built-in caption templates.
    pub fn builtin() -> Self {
        let mut table = Self::with_default(DEFAULT_TEMPLATES);
        for &(shape, tone, style, candidates) in EXACT_TEMPLATES {
            table.insert(TemplateKey { shape, tone, style }, candidates);
        }
        table
            .insert_style(Style::Short, STYLE_SHORT)
            .insert_style(Style::Medium, STYLE_MEDIUM)
            .insert_style(Style::Long, STYLE_LONG);
        table
    }
}

impl Default for TemplateTable {
    fn default() -> Self {
        Self::builtin()
    }
}

type ExactEntry = (ShapeBase, Tone, Style, &'static [&'static str]);

const EXACT_TEMPLATES: &[ExactEntry] = &[
    (
        ShapeBase::Landscape,
        Tone::Casual,
        Style::Short,
        &[
            "Views for days! {emoji}",
            "Nature calling {emoji}",
            "Wide open spaces {emoji}",
        ],
    ),
    (
        ShapeBase::Landscape,
        Tone::Casual,
        Style::Medium,
        &[
            "Sometimes you need to step back and take in the bigger picture. {emoji} What's your favorite view?",
            "There's something about wide open spaces that just speaks to the soul. {emoji} Where's your happy place?",
        ],
    ),
    (
        ShapeBase::Landscape,
        Tone::Casual,
        Style::Long,
        &[
            "Every landscape tells a story, and this one is speaking to me in all the right ways. {emoji} There's magic in those wide open spaces that reminds us how beautiful our world really is. Sometimes we get so caught up in the daily grind that we forget to look up and appreciate the view.",
        ],
    ),
    (
        ShapeBase::Landscape,
        Tone::Professional,
        Style::Short,
        &[
            "Perspective matters. {emoji}",
            "Strategic viewpoint. {emoji}",
            "Expanding horizons. {emoji}",
        ],
    ),
    (
        ShapeBase::Landscape,
        Tone::Professional,
        Style::Medium,
        &[
            "Success often comes from taking a step back and seeing the bigger picture. {emoji} What new perspectives are you exploring?",
            "In business, as in life, it's important to maintain a broad perspective. {emoji} How are you expanding your horizons?",
        ],
    ),
    (
        ShapeBase::Landscape,
        Tone::Professional,
        Style::Long,
        &[
            "Leadership requires the ability to see beyond the immediate horizon and envision possibilities that others might miss. {emoji} Every great achievement starts with someone who dared to look further, think bigger, and pursue a vision that seemed impossible to others.",
        ],
    ),
    (
        ShapeBase::Portrait,
        Tone::Casual,
        Style::Short,
        &[
            "Just me being me {emoji}",
            "Feeling myself today {emoji}",
            "Portrait mode activated {emoji}",
        ],
    ),
    (
        ShapeBase::Portrait,
        Tone::Casual,
        Style::Medium,
        &[
            "Sometimes the best conversations happen with yourself. {emoji} What's one thing you're proud of today?",
            "Taking a moment to appreciate how far I've come. {emoji} Self-love isn't selfish, it's necessary.",
        ],
    ),
    (
        ShapeBase::Portrait,
        Tone::Casual,
        Style::Long,
        &[
            "There's something powerful about taking a moment to really see yourself - not just the reflection in the mirror, but the person you've become through all the ups and downs. {emoji} Every line, every smile, every expression tells the story of your journey.",
        ],
    ),
    (
        ShapeBase::Square,
        Tone::Casual,
        Style::Short,
        &[
            "Perfect frame {emoji}",
            "Square vibes {emoji}",
            "Centered and ready {emoji}",
        ],
    ),
    (
        ShapeBase::Square,
        Tone::Casual,
        Style::Medium,
        &[
            "Sometimes life fits perfectly in a square frame. {emoji} What's your perfect moment looking like today?",
            "Finding balance in the chaos, one square at a time. {emoji} How do you stay centered?",
        ],
    ),
    (
        ShapeBase::Square,
        Tone::Casual,
        Style::Long,
        &[
            "There's something satisfying about a perfectly balanced composition - much like life, it's all about finding that sweet spot where everything just feels right. {emoji} Whether it's work-life balance or just the perfect lighting for a photo, harmony is everything.",
        ],
    ),
];

const STYLE_SHORT: &[&str] = &[
    "Picture perfect moment {emoji}",
    "Loving this vibe {emoji}",
    "Just what I needed {emoji}",
];

const STYLE_MEDIUM: &[&str] = &[
    "Sometimes a picture really is worth a thousand words. {emoji} What story does this tell you?",
    "Capturing moments that matter, one frame at a time. {emoji} What's your favorite memory recently?",
];

const STYLE_LONG: &[&str] = &[
    "Every photo tells a story, and this one is all about embracing the moment and finding beauty in the everyday. {emoji} Life moves fast, but memories like these remind us to slow down and appreciate the journey we're on.",
];

/// Last-resort template when a table's default set is empty.
pub const DEFAULT_TEMPLATE: &str = "Picture perfect moment {emoji}";

const DEFAULT_TEMPLATES: &[&str] = &[DEFAULT_TEMPLATE];
