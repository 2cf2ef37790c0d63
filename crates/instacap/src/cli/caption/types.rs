//! CLI enum types for the caption command: tone, style, output format.

use clap::ValueEnum;
use instacap_core::{OutputFormat as CoreOutputFormat, Style, Tone};

/// Caption tone.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ToneArg {
    Casual,
    Professional,
    Funny,
    Inspirational,
    Trendy,
}

impl From<ToneArg> for Tone {
    fn from(arg: ToneArg) -> Self {
        match arg {
            ToneArg::Casual => Tone::Casual,
            ToneArg::Professional => Tone::Professional,
            ToneArg::Funny => Tone::Funny,
            ToneArg::Inspirational => Tone::Inspirational,
            ToneArg::Trendy => Tone::Trendy,
        }
    }
}

/// Caption length.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StyleArg {
    /// One short line
    Short,
    /// A couple of sentences
    Medium,
    /// A short paragraph
    Long,
}

impl From<StyleArg> for Style {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Short => Style::Short,
            StyleArg::Medium => Style::Medium,
            StyleArg::Long => Style::Long,
        }
    }
}

/// Supported output formats.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Single JSON object or array
    Json,
    /// One JSON object per line (newline-delimited)
    Jsonl,
}

impl From<OutputFormat> for CoreOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => CoreOutputFormat::Json,
            OutputFormat::Jsonl => CoreOutputFormat::JsonLines,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Jsonl => write!(f, "jsonl"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_args_map_one_to_one() {
        let mapped: Vec<Tone> = ToneArg::value_variants()
            .iter()
            .map(|&arg| arg.into())
            .collect();
        assert_eq!(mapped, Tone::ALL);
    }

    #[test]
    fn style_args_map_one_to_one() {
        let mapped: Vec<Style> = StyleArg::value_variants()
            .iter()
            .map(|&arg| arg.into())
            .collect();
        assert_eq!(mapped, Style::ALL);
    }

    #[test]
    fn output_format_display() {
        assert_eq!(OutputFormat::Jsonl.to_string(), "jsonl");
    }
}
