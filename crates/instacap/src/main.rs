//! InstaCap CLI - offline photo captions from color, brightness and shape.
//!
//! InstaCap decodes an image, measures its color mood, brightness and aspect
//! ratio, and writes a templated caption with optional emoji and hashtags.
//! Results are printed as JSON outcome records.
//!
//! # Usage
//!
//! ```bash
//! # Caption a file
//! instacap caption photo.jpg
//!
//! # Caption base64 data, professional tone, no emoji
//! instacap caption --image "$(base64 -w0 photo.jpg)" --tone professional --no-emojis
//!
//! # Caption several files as JSON lines, reproducibly
//! instacap caption a.jpg b.png c.webp --format jsonl --seed 7
//!
//! # View configuration
//! instacap config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// InstaCap - offline photo captions from simple visual statistics.
#[derive(Parser, Debug)]
#[command(name = "instacap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze images and write captions
    Caption(cli::caption::CaptionArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so use eprintln for config warnings.
    let config = match instacap_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `instacap config path`."
            );
            instacap_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("InstaCap v{}", instacap_core::VERSION);

    match cli.command {
        Commands::Caption(args) => cli::caption::execute(args, config).await,
        Commands::Config(args) => cli::config::execute(args).await,
    }
}
