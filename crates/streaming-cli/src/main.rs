mod cmd;
mod render;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use streaming_core::{config::Config, types::Phase};

#[derive(Parser)]
#[command(
    name = "streaming",
    about = "Streaming helper. Check it out at https://www.twitch.tv/worldofyaml",
    version,
    propagate_version = true
)]
struct Cli {
    /// dotenv file with API keys (ignored when missing)
    #[arg(long, global = true, env = "STREAMING_ENV_FILE", default_value = ".env")]
    env_file: PathBuf,

    /// Chat model override (default: OPENAI_MODEL or gpt-4o-mini)
    #[arg(long, global = true)]
    model: Option<String>,

    /// Do not post the live status to the personal page
    #[arg(long, global = true)]
    no_hook: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the stream.
    Start,

    /// Small break - coffee preparation.
    #[command(name = "kafe")]
    Coffee {
        /// Length of the break in seconds
        #[arg(value_parser = cmd::parse_seconds, allow_negative_numbers = true)]
        seconds: u64,
    },

    /// Small break during the stream.
    Break {
        /// Length of the break in seconds
        #[arg(value_parser = cmd::parse_seconds, allow_negative_numbers = true)]
        seconds: u64,
    },

    /// Stop the stream.
    #[command(alias = "end")]
    Stop,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::Level::WARN.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config =
        Config::load(Some(&cli.env_file)).context("failed to load configuration")?;
    if let Some(model) = cli.model {
        config.openai_model = model;
    }

    let ctx = cmd::Context {
        config,
        hook: !cli.no_hook,
    };

    match cli.command {
        Commands::Start => cmd::sequence::run(&ctx, Phase::Start, None),
        Commands::Coffee { seconds } => cmd::sequence::run(&ctx, Phase::Coffee, Some(seconds)),
        Commands::Break { seconds } => cmd::sequence::run(&ctx, Phase::Break, Some(seconds)),
        Commands::Stop => cmd::sequence::run(&ctx, Phase::Stop, None),
    }
}
