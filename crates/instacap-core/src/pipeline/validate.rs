//! Input limit checks before and after decoding.

use crate::config::LimitsConfig;
use crate::error::PipelineError;

/// Enforces size and dimension limits on inputs.
pub struct Validator {
    limits: LimitsConfig,
}

impl Validator {
    /// Create a new validator with the given limits.
    pub fn new(limits: LimitsConfig) -> Self {
        Self { limits }
    }

    /// Reject empty or oversized encoded input before decoding it.
    pub fn check_input(&self, bytes: &[u8]) -> Result<(), PipelineError> {
        if bytes.is_empty() {
            return Err(PipelineError::Decode {
                message: "Input is empty".to_string(),
            });
        }
        let max_bytes = self.limits.max_input_mb.saturating_mul(1024 * 1024);
        let len = bytes.len() as u64;
        if len > max_bytes {
            return Err(PipelineError::InputTooLarge {
                size_mb: len / (1024 * 1024),
                max_mb: self.limits.max_input_mb,
            });
        }
        Ok(())
    }

    /// Reject zero-area or oversized decoded dimensions.
    pub fn check_dimensions(&self, width: u32, height: u32) -> Result<(), PipelineError> {
        if width == 0 || height == 0 {
            return Err(PipelineError::DegenerateImage { width, height });
        }
        let max_dim = self.limits.max_image_dimension;
        if width > max_dim || height > max_dim {
            return Err(PipelineError::ImageTooLarge {
                width,
                height,
                max_dim,
            });
        }
        Ok(())
    }
}
