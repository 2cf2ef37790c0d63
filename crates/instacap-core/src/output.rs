//! Captioning outcomes and their JSON/JSONL output.
//!
//! `Outcome` is the single result type at the library boundary. It
//! serializes to the analyzer record shape:
//!
//! ```text
//! {"success": true,  "caption": "...", "analysis": {...}, "source": "analyzer"}
//! {"success": false, "error": "...",                      "source": "analyzer"}
//! ```

use serde::{Serialize, Serializer};
use std::fmt::Display;
use std::io::{self, Write};

use crate::types::ImageProfile;

/// Value of the `source` field on every serialized outcome.
pub const OUTCOME_SOURCE: &str = "analyzer";

/// Result of one captioning request.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The image was analyzed and captioned
    Success {
        caption: String,
        profile: ImageProfile,
    },
    /// Decoding or analysis failed
    Failure { message: String },
}

impl Outcome {
    /// Build a failure from any displayable error.
    pub fn failure(error: impl Display) -> Self {
        Outcome::Failure {
            message: error.to_string(),
        }
    }

    /// Wrap a pipeline result, converting the error to a failure.
    pub fn from_result<E: Display>(result: Result<(String, ImageProfile), E>) -> Self {
        match result {
            Ok((caption, profile)) => Outcome::Success { caption, profile },
            Err(e) => Outcome::failure(e),
        }
    }

    /// Whether the request succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// Caption text, if successful.
    pub fn caption(&self) -> Option<&str> {
        match self {
            Outcome::Success { caption, .. } => Some(caption),
            Outcome::Failure { .. } => None,
        }
    }

    /// Image profile, if successful.
    pub fn profile(&self) -> Option<&ImageProfile> {
        match self {
            Outcome::Success { profile, .. } => Some(profile),
            Outcome::Failure { .. } => None,
        }
    }
}

/// Flat wire form of an `Outcome`.
#[derive(Serialize)]
struct OutcomeRecord<'a> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    caption: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    analysis: Option<&'a ImageProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    source: &'static str,
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let record = match self {
            Outcome::Success { caption, profile } => OutcomeRecord {
                success: true,
                caption: Some(caption.as_str()),
                analysis: Some(profile),
                error: None,
                source: OUTCOME_SOURCE,
            },
            Outcome::Failure { message } => OutcomeRecord {
                success: false,
                caption: None,
                analysis: None,
                error: Some(message.as_str()),
                source: OUTCOME_SOURCE,
            },
        };
        record.serialize(serializer)
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Single JSON object or array
    Json,
    /// One JSON object per line (newline-delimited JSON)
    JsonLines,
}

/// A writer that serializes items to JSON or JSONL format.
pub struct OutputWriter<W: Write> {
    writer: W,
    format: OutputFormat,
    pretty: bool,
}

impl<W: Write> OutputWriter<W> {
    /// Create a new output writer.
    ///
    /// `pretty` only affects JSON format; JSONL is always one compact object
    /// per line.
    pub fn new(writer: W, format: OutputFormat, pretty: bool) -> Self {
        Self {
            writer,
            format,
            pretty,
        }
    }

    /// Write a single item.
    pub fn write<T: Serialize>(&mut self, item: &T) -> io::Result<()> {
        if self.pretty && self.format == OutputFormat::Json {
            serde_json::to_writer_pretty(&mut self.writer, item).map_err(io::Error::other)?;
        } else {
            serde_json::to_writer(&mut self.writer, item).map_err(io::Error::other)?;
        }
        writeln!(self.writer)
    }

    /// Write multiple items.
    ///
    /// For JSON format, writes as a JSON array.
    /// For JSONL format, writes one object per line.
    pub fn write_all<T: Serialize>(&mut self, items: &[T]) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => self.write(&items),
            OutputFormat::JsonLines => {
                for item in items {
                    self.write(item)?;
                }
                Ok(())
            }
        }
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
