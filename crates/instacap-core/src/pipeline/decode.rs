//! Image decoding from in-memory bytes or base64 text.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use image::{DynamicImage, ImageDecoder as _, ImageFormat};
use std::io::Cursor;

use crate::error::PipelineError;

use super::validate::Validator;

/// Result of decoding an image.
#[derive(Debug)]
pub struct DecodedImage {
    /// The decoded image, normalized to 8-bit RGB
    pub image: DynamicImage,
    /// Detected image format
    pub format: ImageFormat,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

/// Stateless image decoder.
pub struct ImageDecoder;

impl ImageDecoder {
    /// Decode an image, detecting the format from its content.
    ///
    /// Dimensions are read from the header and checked against `validator`
    /// before any pixel data is decoded.
    pub fn decode_bytes(
        bytes: &[u8],
        validator: &Validator,
    ) -> Result<DecodedImage, PipelineError> {
        let reader = image::ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| PipelineError::Decode {
                message: format!("Cannot detect image format: {}", e),
            })?;
        let format = reader.format().ok_or_else(|| PipelineError::UnsupportedFormat {
            format: "unknown".to_string(),
        })?;
        let decoder = reader.into_decoder().map_err(|e| PipelineError::Decode {
            message: e.to_string(),
        })?;

        let (width, height) = decoder.dimensions();
        validator.check_dimensions(width, height)?;

        let image = DynamicImage::from_decoder(decoder).map_err(|e| PipelineError::Decode {
            message: e.to_string(),
        })?;
        let image = match image {
            rgb @ DynamicImage::ImageRgb8(_) => rgb,
            other => DynamicImage::ImageRgb8(other.to_rgb8()),
        };
        Ok(DecodedImage {
            image,
            format,
            width,
            height,
        })
    }

    /// Decode base64 text into raw image bytes.
    ///
    /// ASCII whitespace anywhere in the text (including line wrapping) and a
    /// `data:<mime>;base64,` prefix are ignored.
    pub fn decode_base64(text: &str) -> Result<Vec<u8>, PipelineError> {
        let trimmed = text.trim();
        let payload = match trimmed.strip_prefix("data:") {
            Some(rest) => rest
                .split_once(',')
                .map(|(_, data)| data)
                .ok_or_else(|| PipelineError::InvalidBase64 {
                    message: "data URL has no payload".to_string(),
                })?,
            None => trimmed,
        };
        let payload: String = payload
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        BASE64
            .decode(payload)
            .map_err(|e| PipelineError::InvalidBase64 {
                message: e.to_string(),
            })
    }
}

/// Convert an ImageFormat to a string representation.
pub fn format_to_string(format: ImageFormat) -> String {
    match format {
        ImageFormat::Jpeg => "jpeg".to_string(),
        ImageFormat::Png => "png".to_string(),
        ImageFormat::WebP => "webp".to_string(),
        ImageFormat::Gif => "gif".to_string(),
        ImageFormat::Tiff => "tiff".to_string(),
        ImageFormat::Bmp => "bmp".to_string(),
        ImageFormat::Ico => "ico".to_string(),
        ImageFormat::Pnm => "pnm".to_string(),
        _ => "unknown".to_string(),
    }
}
