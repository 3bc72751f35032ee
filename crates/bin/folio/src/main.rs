//! folio: checks portfolio content and previews metric counters.
//!
//! ```text
//! folio check                       # every metric on the site parses
//! folio preview '$1.7M+' --fps 30   # print each frame of a counter run
//! ```

mod commands;
mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_domain::counter::{CounterSpec, CounterTarget, Easing};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::preview::PreviewOptions;
use crate::config::Config;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "Portfolio content checker and counter previewer")]
struct Cli {
    /// Configuration file (defaults to ./folio.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that every metric in the content file can be animated
    Check {
        /// Content file (overrides the configured path)
        content: Option<PathBuf>,
    },
    /// Play a counter on a simulated display and print every frame
    Preview(PreviewArgs),
}

#[derive(clap::Args)]
struct PreviewArgs {
    /// Target value, plain (`960`) or decorated (`$1.7M+`)
    #[arg(allow_hyphen_values = true)]
    target: String,
    /// Run length in milliseconds
    #[arg(short, long)]
    duration: Option<f64>,
    /// Easing curve: linear or ease-out-quart
    #[arg(short, long)]
    easing: Option<Easing>,
    /// Simulated refresh rate
    #[arg(long, default_value_t = 60)]
    fps: u32,
    /// Fixed number of decimal places
    #[arg(long)]
    decimals: Option<u32>,
    /// Text before the number (replaces the one in the target)
    #[arg(long)]
    prefix: Option<String>,
    /// Text after the number (replaces the one in the target)
    #[arg(long)]
    suffix: Option<String>,
    /// Gate the counter on visibility and scroll it into view after this many
    /// milliseconds
    #[arg(long, value_name = "MS")]
    visible_after: Option<f64>,
    /// Print frames as a JSON array
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.logging.filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let mut out = std::io::stdout().lock();
    match cli.command {
        Commands::Check { content } => {
            let path = content.unwrap_or_else(|| config.content.path.clone());
            commands::check::run(&path, &mut out)
        }
        Commands::Preview(args) => {
            let spec = preview_spec(&args, &config)?;
            let options = PreviewOptions {
                fps: args.fps,
                visible_after_ms: args.visible_after,
                trigger: config.trigger(),
                restart: config.counter.restart,
            };
            tracing::info!(target_text = %args.target, fps = args.fps, "previewing counter");
            let frames = commands::preview::preview(spec, &options);
            if args.json {
                commands::preview::write_frames_json(&frames, &mut out)?;
            } else {
                commands::preview::write_frames(&frames, &mut out)?;
            }
            Ok(())
        }
    }
}

fn preview_spec(args: &PreviewArgs, config: &Config) -> Result<CounterSpec> {
    let mut builder = CounterSpec::builder()
        .target(CounterTarget::Decorated(args.target.clone()))
        .duration_ms(args.duration.unwrap_or(config.counter.duration_ms))
        .easing(args.easing.unwrap_or(config.counter.easing));
    if let Some(decimals) = args.decimals {
        builder = builder.decimals(decimals);
    }
    if let Some(prefix) = &args.prefix {
        builder = builder.prefix(prefix.as_str());
    }
    if let Some(suffix) = &args.suffix {
        builder = builder.suffix(suffix.as_str());
    }
    builder
        .build()
        .with_context(|| format!("cannot animate {:?}", args.target))
}
