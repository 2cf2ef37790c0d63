//! Concurrent captioning of several inputs with per-request random generators.

use std::path::PathBuf;
use std::sync::Arc;

use futures_util::stream::{self, StreamExt};
use instacap_core::{CaptionOptions, Captioner, Outcome};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// One image to caption.
#[derive(Debug, Clone)]
pub enum CaptionInput {
    /// Base64-encoded image data
    Base64(String),
    /// Path to an image file
    File(PathBuf),
}

/// Generator for the input at `index`: `seed + index` when seeded, fresh
/// entropy otherwise.
pub fn rng_for(seed: Option<u64>, index: usize) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(index as u64)),
        None => StdRng::from_entropy(),
    }
}

/// Caption every input, at most `parallel` at a time, preserving input order.
///
/// Each request runs on the blocking pool with its own generator; a task
/// that panics is reported as a failure outcome for that input.
pub async fn caption_all(
    captioner: Arc<Captioner>,
    inputs: Vec<CaptionInput>,
    options: CaptionOptions,
    seed: Option<u64>,
    parallel: usize,
) -> Vec<Outcome> {
    stream::iter(inputs.into_iter().enumerate())
        .map(|(index, input)| {
            let captioner = Arc::clone(&captioner);
            async move {
                let task = tokio::task::spawn_blocking(move || {
                    let mut rng = rng_for(seed, index);
                    match &input {
                        CaptionInput::Base64(data) => {
                            captioner.caption_base64(data, &options, &mut rng)
                        }
                        CaptionInput::File(path) => {
                            captioner.caption_file(path, &options, &mut rng)
                        }
                    }
                });
                task.await.unwrap_or_else(|e| {
                    tracing::error!("Caption task {index} failed: {e}");
                    Outcome::failure(format!("Caption task failed: {e}"))
                })
            }
        })
        .buffered(parallel.max(1))
        .collect()
        .await
}
