//! twinrange CLI — inspect slider views and replay input scripts.
//!
//! Commands:
//! - `view` — print the derived view of each slider as JSON
//! - `replay` — feed a scripted event sequence through the sliders and
//!   report every outcome and change notification

mod logging;
mod script;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing::info;

use twinrange_core::{DoubleRangeSlider, SliderSet};

#[derive(Parser)]
#[command(
    name = "twinrange",
    about = "twinrange CLI — dual-thumb range slider engine"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the derived view of each slider as JSON.
    View {
        /// Path to a TOML slider set. Defaults to the built-in samples.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Only show the slider with this id.
        #[arg(long)]
        id: Option<String>,
    },
    /// Replay an event script against the sliders.
    Replay {
        /// Event script: `<slider-id> <action> <thumb> [arg]` per line.
        #[arg(long)]
        script: PathBuf,

        /// Path to a TOML slider set. Defaults to the built-in samples.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match cli.command {
        Commands::View { config, id } => cmd_view(config.as_deref(), id.as_deref()),
        Commands::Replay { script, config } => cmd_replay(&script, config.as_deref()),
    }
}

fn load_set(path: Option<&Path>) -> Result<SliderSet> {
    match path {
        Some(p) => {
            let set = SliderSet::from_file(p)
                .with_context(|| format!("loading slider set from {}", p.display()))?;
            info!(path = %p.display(), sliders = set.len(), "slider set loaded");
            Ok(set)
        }
        None => Ok(SliderSet::samples()),
    }
}

fn cmd_view(config: Option<&Path>, id: Option<&str>) -> Result<()> {
    let set = load_set(config)?;
    let mut views = serde_json::Map::new();
    for slider_config in &set.slider {
        if id.is_some_and(|wanted| wanted != slider_config.id) {
            continue;
        }
        let slider = DoubleRangeSlider::new(slider_config);
        views.insert(slider_config.id.clone(), serde_json::to_value(slider.view())?);
    }
    if let Some(wanted) = id {
        if views.is_empty() {
            bail!("no slider with id {wanted:?}");
        }
    }
    println!("{}", serde_json::to_string_pretty(&views)?);
    Ok(())
}

fn cmd_replay(script_path: &Path, config: Option<&Path>) -> Result<()> {
    let set = load_set(config)?;
    let content = std::fs::read_to_string(script_path)
        .with_context(|| format!("reading script {}", script_path.display()))?;
    let events = script::parse(&content)?;

    for event in &events {
        if set.get(&event.slider).is_none() {
            bail!("line {}: unknown slider {:?}", event.line, event.slider);
        }
    }

    let mut sliders: Vec<DoubleRangeSlider> = set
        .slider
        .iter()
        .map(|config| {
            let id = config.id.clone();
            DoubleRangeSlider::with_listener(config, move |low: i64, high: i64| {
                println!("  change {id}: {low}..{high}");
            })
        })
        .collect();

    for event in &events {
        let Some(slider) = sliders.iter_mut().find(|s| s.id() == event.slider) else {
            continue;
        };
        let outcome = script::apply(slider, event);
        println!(
            "line {}: {} {:?} {} -> {}",
            event.line, event.slider, event.action, event.thumb, outcome
        );
    }

    let mut views = serde_json::Map::new();
    for slider in &sliders {
        views.insert(slider.id().to_string(), serde_json::to_value(slider.view())?);
    }
    println!("{}", serde_json::to_string_pretty(&views)?);
    Ok(())
}
