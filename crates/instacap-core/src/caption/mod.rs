//! Caption synthesis from an image profile.
//!
//! A caption is built in three steps: pick a template for the
//! shape/tone/style, fill (or drop) its emoji placeholder using the color
//! mood and brightness, then optionally append a hashtag block. Every random
//! choice goes through a caller-supplied `rand::Rng`, so a seeded generator
//! reproduces the same caption.

pub mod emoji;
pub mod hashtags;
pub mod synthesizer;
pub mod templates;

pub use hashtags::{BASE_HASHTAGS, MAX_HASHTAGS};
pub use synthesizer::CaptionSynthesizer;
pub use templates::{TemplateKey, TemplateTable, TemplateTier, DEFAULT_TEMPLATE, PLACEHOLDER};
