//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Heatmap Replay - pressure-sensor heatmap replay pipeline
#[derive(Parser, Debug)]
#[command(
    name = "heatmap-replay",
    author,
    version,
    about = "Pressure-sensor heatmap replay pipeline",
    long_about = "Replays a recorded (or synthetic) time series of pressure-sensor frames\n\
                  as colorized heatmaps: temporal median aggregation, spatial resampling,\n\
                  and color-ramp mapping, dispatched to configured sinks."
)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true, env = "HEATMAP_REPLAY_VERBOSE")]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format
    #[arg(
        long,
        value_enum,
        default_value = "pretty",
        global = true,
        env = "HEATMAP_REPLAY_LOG_FORMAT"
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay the history through the render pipeline
    Render(RenderArgs),

    /// Validate configuration file without rendering
    Validate(ValidateArgs),

    /// Display configuration, ramp, and method information
    Info(InfoArgs),
}

/// Arguments for the `render` command
#[derive(Parser, Debug, Clone)]
pub struct RenderArgs {
    /// Path to configuration file (TOML or JSON)
    #[arg(
        short,
        long,
        default_value = "replay.toml",
        env = "HEATMAP_REPLAY_CONFIG"
    )]
    pub config: PathBuf,

    /// History index to start from
    #[arg(long, default_value = "0")]
    pub start: usize,

    /// Cursor step between rendered frames (negative replays backward)
    #[arg(long, default_value = "1", allow_hyphen_values = true)]
    pub step: i64,

    /// Maximum number of frames to render (0 = until the history boundary)
    #[arg(long, default_value = "0", env = "HEATMAP_REPLAY_MAX_FRAMES")]
    pub max_frames: u64,

    /// Override the configured resampling method (bilinear / cosine / bicubic)
    #[arg(long)]
    pub method: Option<String>,

    /// Override the configured color ramp
    #[arg(long)]
    pub ramp: Option<String>,

    /// Override the configured window span in seconds
    #[arg(long)]
    pub window: Option<f64>,

    /// Directory of extra JSON ramp assets to load
    #[arg(long, env = "HEATMAP_REPLAY_RAMP_DIR")]
    pub ramp_dir: Option<PathBuf>,

    /// Validate configuration and exit without rendering
    #[arg(long)]
    pub dry_run: bool,

    /// Prometheus metrics port (0 = disabled)
    #[arg(long, default_value = "0", env = "HEATMAP_REPLAY_METRICS_PORT")]
    pub metrics_port: u16,
}

/// Arguments for the `validate` command
#[derive(Parser, Debug, Clone)]
pub struct ValidateArgs {
    /// Path to configuration file (TOML or JSON)
    #[arg(
        short,
        long,
        default_value = "replay.toml",
        env = "HEATMAP_REPLAY_CONFIG"
    )]
    pub config: PathBuf,

    /// Emit the validation result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `info` command
#[derive(Parser, Debug, Clone)]
pub struct InfoArgs {
    /// Path to configuration file; omit to list only ramps and methods
    #[arg(short, long, env = "HEATMAP_REPLAY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit the information as JSON
    #[arg(long)]
    pub json: bool,
}

/// Log output format
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum LogFormat {
    /// JSON structured logs
    Json,
    /// Human-readable multi-line format
    Pretty,
    /// Compact single-line format
    Compact,
}
