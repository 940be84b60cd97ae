use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_subscriber::util::SubscriberInitExt;

use easel_easing::config::EasingConfig;

use crate::sample::{render_catalog, render_table, sample, Mode};

mod sample;

/// Samples an easing preset over a duration.
#[derive(Parser, Debug)]
#[command(name = "easel")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Preset name, e.g. REGULAR_IN_OUT
    #[arg(short, long)]
    preset: Option<String>,

    /// Blend toward linear (0 is linear, 1 the full curve)
    #[arg(short, long)]
    strength: Option<f32>,

    /// JSON easing config, defaults to <config dir>/easel/easing.json when present
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long, default_value = "1.0")]
    duration: f32,

    /// Number of intervals to sample
    #[arg(long, default_value = "10")]
    steps: u32,

    /// Interpolate from this start value instead of returning raw positions
    #[arg(long)]
    start: Option<f32>,

    /// Range covered from the start value
    #[arg(long, default_value = "1.0")]
    range: f32,

    /// Use the clamped entry points
    #[arg(long)]
    clamp: bool,

    /// Print samples as JSON
    #[arg(long)]
    json: bool,

    /// List the preset catalog and exit
    #[arg(long)]
    list: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .compact()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish()
        .try_init()?;

    if args.list {
        print!("{}", render_catalog());
        return Ok(());
    }

    let mut config = load_config(args.config.as_deref())?;
    if let Some(preset) = args.preset {
        config.preset = preset;
    }
    if let Some(strength) = args.strength {
        config.strength = strength;
    }
    let easing = config.resolve()?;

    let mode = Mode::new(args.start, args.range, args.clamp);
    info!("Sampling {easing} over {} in {} steps ({mode:?})", args.duration, args.steps);
    let samples = sample(&easing, mode, args.duration, args.steps);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&samples)?);
    } else {
        print!("{}", render_table(&easing, &samples));
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<EasingConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match dirs::config_dir().map(|dir| dir.join("easel").join("easing.json")) {
            Some(path) if path.is_file() => path,
            _ => {
                debug!("No easing config found, using defaults");
                return Ok(EasingConfig::default());
            }
        },
    };

    debug!("Loading easing config at {path:?}");
    let data = fs::read(&path).with_context(|| format!("Failed to read {path:?}"))?;
    serde_json::from_slice(&data).with_context(|| format!("Invalid easing config {path:?}"))
}
