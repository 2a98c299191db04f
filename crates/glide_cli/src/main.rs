//! Glide CLI
//!
//! Replays overlay scrollbar scenarios and inspects thumb geometry.
//!
//! - `glide simulate <scenario.toml>`: run a scenario frame by frame
//! - `glide thumb --pos .. --maximum .. --track-length ..`: compute a thumb rect
//! - `glide preset <name>`: print a built-in animation config as TOML

mod scenario;
mod simulate;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use glide_animation::ScrollbarAnimationConfig;
use glide_core::{compute_thumb_rect, Orientation, ScrollbarGeometryInputs};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use scenario::Scenario;
use simulate::{format_report, Simulation};

#[derive(Parser)]
#[command(name = "glide")]
#[command(author, version, about = "Overlay scrollbar animation toolkit", long_about = None)]
struct Cli {
    /// Enable debug logging from the animation controllers
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a scenario against a simulated frame driver
    Simulate {
        /// Scenario file
        scenario: PathBuf,

        /// Print frames as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute the thumb rectangle for a scroll position
    Thumb {
        /// Current scroll offset
        #[arg(long, allow_negative_numbers = true)]
        pos: f32,

        /// Largest scroll offset
        #[arg(long)]
        maximum: f32,

        /// Track length along the scroll axis
        #[arg(long)]
        track_length: f32,

        /// Where the track starts along the scroll axis
        #[arg(long, default_value = "0")]
        track_start: f32,

        /// Full thumb thickness
        #[arg(long, default_value = "10")]
        thickness: f32,

        /// Viewport length / content length
        #[arg(long, default_value = "1")]
        ratio: f32,

        #[arg(long, value_enum, default_value = "vertical")]
        orientation: OrientationArg,

        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        vertical_adjust: f32,

        /// Thinning scale (1 = full thickness)
        #[arg(long, default_value = "1")]
        thickness_scale: f32,
    },

    /// Print a built-in animation config as TOML
    Preset {
        #[arg(value_enum)]
        name: PresetName,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Horizontal,
    Vertical,
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Horizontal => Orientation::Horizontal,
            OrientationArg::Vertical => Orientation::Vertical,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PresetName {
    FadeToZero,
    OverlayThinning,
}

impl PresetName {
    fn config(self) -> ScrollbarAnimationConfig {
        match self {
            PresetName::FadeToZero => ScrollbarAnimationConfig::fade_to_zero(),
            PresetName::OverlayThinning => ScrollbarAnimationConfig::overlay_thinning(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "glide=debug,glide_animation=debug,glide_core=trace"
    } else {
        "glide=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Simulate { scenario, json } => cmd_simulate(scenario, json),
        Commands::Thumb {
            pos,
            maximum,
            track_length,
            track_start,
            thickness,
            ratio,
            orientation,
            vertical_adjust,
            thickness_scale,
        } => {
            let inputs = ScrollbarGeometryInputs {
                orientation: orientation.into(),
                current_pos: pos,
                maximum,
                track_start,
                track_length,
                thumb_thickness: thickness,
                vertical_adjust,
                visible_to_total_ratio: ratio,
                thickness_scale,
            };
            cmd_thumb(&inputs)
        }
        Commands::Preset { name } => cmd_preset(name),
    }
}

fn cmd_simulate(path: PathBuf, json: bool) -> Result<()> {
    let scenario = Scenario::load(&path)?;
    info!(
        "Simulating {} ({} events, {}ms)",
        path.display(),
        scenario.events.len(),
        scenario.duration_ms
    );

    let report = Simulation::new(scenario).run();
    if json {
        let text = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
        println!("{}", text);
    } else {
        print!("{}", format_report(&report));
    }
    Ok(())
}

fn cmd_thumb(inputs: &ScrollbarGeometryInputs) -> Result<()> {
    let rect = compute_thumb_rect(inputs);
    println!(
        "x={:.1} y={:.1} width={:.1} height={:.1}",
        rect.x(),
        rect.y(),
        rect.width(),
        rect.height()
    );
    Ok(())
}

fn cmd_preset(name: PresetName) -> Result<()> {
    let text = name
        .config()
        .to_toml()
        .context("Failed to serialize preset")?;
    print!("{}", text);
    Ok(())
}
