//! Image property analysis.
//!
//! Reduces a decoded image to a handful of statistics:
//! - **color**: downsampled mean color, its HSV form and a mood label
//! - **brightness**: mean luminance and a dark/balanced/bright level
//! - **shape**: aspect-ratio category plus modifier tags
//! - **profile**: runs the three and assembles an `ImageProfile`

pub mod brightness;
pub mod color;
pub mod profile;
pub mod shape;

pub use brightness::BrightnessAnalyzer;
pub use color::{rgb_to_hsv, ColorAnalyzer};
pub use profile::ProfileBuilder;
pub use shape::ShapeClassifier;
