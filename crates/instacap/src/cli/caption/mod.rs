//! The `instacap caption` command for captioning images.

mod batch;
pub mod types;

pub use types::{OutputFormat, StyleArg, ToneArg};

use clap::Args;
use instacap_core::config::CaptionConfig;
use instacap_core::{CaptionOptions, Captioner, Config, Outcome, OutputWriter};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::PathBuf;
use std::sync::Arc;

use batch::{caption_all, CaptionInput};

/// Arguments for the `caption` command.
#[derive(Args, Debug)]
pub struct CaptionArgs {
    /// Image files to caption
    pub files: Vec<PathBuf>,

    /// Base64-encoded image data ("-" reads it from stdin)
    #[arg(long)]
    pub image: Option<String>,

    /// Caption tone (defaults to [caption].tone in config)
    #[arg(short, long, value_enum)]
    pub tone: Option<ToneArg>,

    /// Caption length (defaults to [caption].style in config)
    #[arg(short, long, value_enum)]
    pub style: Option<StyleArg>,

    /// Leave out the hashtag block
    #[arg(long)]
    pub no_hashtags: bool,

    /// Leave out the emoji
    #[arg(long)]
    pub no_emojis: bool,

    /// Seed for template and emoji selection (input N uses seed + N)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of images captioned concurrently
    #[arg(short, long, default_value = "4")]
    pub parallel: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Compact JSON even when config asks for pretty output
    #[arg(long)]
    pub compact: bool,
}

/// Manual Default impl for constructing CaptionArgs outside of clap.
///
/// Values match the clap `#[arg(default_value = ...)]` annotations above.
impl Default for CaptionArgs {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            image: None,
            tone: None,
            style: None,
            no_hashtags: false,
            no_emojis: false,
            seed: None,
            parallel: 4,
            format: OutputFormat::Json,
            output: None,
            compact: false,
        }
    }
}

impl CaptionArgs {
    /// Merge CLI overrides onto the configured caption defaults.
    fn caption_options(&self, defaults: &CaptionConfig) -> CaptionOptions {
        let base = defaults.options();
        CaptionOptions {
            tone: self.tone.map_or(base.tone, Into::into),
            style: self.style.map_or(base.style, Into::into),
            include_hashtags: base.include_hashtags && !self.no_hashtags,
            include_emojis: base.include_emojis && !self.no_emojis,
        }
    }

    /// Collect inputs: base64 data first, then files in the order given.
    fn inputs(&self) -> anyhow::Result<Vec<CaptionInput>> {
        let mut inputs = Vec::with_capacity(self.files.len() + 1);
        if let Some(image) = &self.image {
            let data = if image == "-" {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                buffer
            } else {
                image.clone()
            };
            inputs.push(CaptionInput::Base64(data));
        }
        inputs.extend(self.files.iter().cloned().map(CaptionInput::File));
        Ok(inputs)
    }
}

/// Execute the caption command.
pub async fn execute(args: CaptionArgs, config: Config) -> anyhow::Result<()> {
    let inputs = args.inputs()?;
    if inputs.is_empty() {
        anyhow::bail!("No input given: pass image files or --image <BASE64>");
    }
    if args.parallel == 0 {
        anyhow::bail!("--parallel must be at least 1");
    }

    let options = args.caption_options(&config.caption);
    tracing::debug!(
        "Captioning {} input(s): tone={}, style={}, hashtags={}, emojis={}, format={}",
        inputs.len(),
        options.tone,
        options.style,
        options.include_hashtags,
        options.include_emojis,
        args.format
    );

    let single = inputs.len() == 1;
    let captioner = Arc::new(Captioner::new(&config));
    let outcomes = caption_all(captioner, inputs, options, args.seed, args.parallel).await;

    let succeeded = outcomes.iter().filter(|o| o.is_success()).count();
    tracing::info!("Captioned {}/{} image(s)", succeeded, outcomes.len());

    let pretty = config.output.pretty && !args.compact;
    match &args.output {
        Some(path) => {
            let path = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned());
            let file = File::create(&path)?;
            write_outcomes(BufWriter::new(file), &args, pretty, single, &outcomes)?;
            tracing::info!("Output written to {:?}", path);
        }
        None => {
            let stdout = std::io::stdout();
            write_outcomes(stdout.lock(), &args, pretty, single, &outcomes)?;
        }
    }

    Ok(())
}

/// Write outcomes: a lone input as a single object, several as an array
/// (JSON) or one per line (JSONL).
fn write_outcomes<W: Write>(
    writer: W,
    args: &CaptionArgs,
    pretty: bool,
    single: bool,
    outcomes: &[Outcome],
) -> anyhow::Result<()> {
    let mut writer = OutputWriter::new(writer, args.format.into(), pretty);
    match outcomes {
        [only] if single => writer.write(only)?,
        _ => writer.write_all(outcomes)?,
    }
    writer.flush()?;
    Ok(())
}
