//! Image processing pipeline components.
//!
//! - **decode**: base64 and byte decoding with format detection
//! - **validate**: input size and dimension limits
//! - **processor**: orchestrates decode → profile → caption → outcome

pub mod decode;
pub mod processor;
pub mod validate;

// Re-exports for convenient access
pub use decode::{DecodedImage, ImageDecoder};
pub use processor::Captioner;
pub use validate::Validator;
