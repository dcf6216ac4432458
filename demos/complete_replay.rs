//! Complete Replay Example
//!
//! Demonstrates reading a single configuration file, building a synthetic
//! frame history, walking the cursor through the render pipeline, and
//! fanning out via the dispatcher.
//!
//! Run with: cargo run --bin complete_replay [config_path]

use std::path::PathBuf;

use config_loader::ConfigLoader;
use contracts::PlaybackCursor;
use dispatcher::Dispatcher;
use heatmap::RenderOptions;
use observability::RenderStatsAggregator;
use ramp_store::RampStore;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Complete Replay Demo");

    let config_path = resolve_config_path();
    info!(path = %config_path.display(), "Loading unified config file");
    let blueprint = ConfigLoader::load_from_path(config_path.as_path())?;
    info!(sensor = %blueprint.sensor.id, "Blueprint loaded");

    // ==== Stage 1: Ramps and history ====
    let ramps = RampStore::with_builtins();
    let history = ingestion::build_history(&blueprint.source, &blueprint.sensor)?;
    observability::record_frames_ingested(history.len() as u64);
    let snapshot = history.snapshot();

    // ==== Stage 2: Dispatcher with sinks from config ====
    let mut dispatcher = Dispatcher::from_configs(&blueprint.sinks);
    info!(sinks = dispatcher.sink_count(), "Dispatcher ready");

    // ==== Stage 3: Walk the history through the pipeline ====
    let options = RenderOptions::from_blueprint(&blueprint);
    let mut stats = RenderStatsAggregator::new();
    let mut cursor = PlaybackCursor::new(0);
    let mut frame_id = 0u64;

    loop {
        let frame = heatmap::render(&snapshot, cursor, frame_id, &options, &ramps)?;
        observability::record_render_metrics(&frame.meta, frame.frame_id);
        stats.record(&frame.meta);
        dispatcher.dispatch(&frame);
        frame_id += 1;

        let next = playback::move_forward(&snapshot, cursor, 1)?;
        if next == cursor {
            break;
        }
        cursor = next;
    }

    // ==== Stage 4: Shutdown ====
    dispatcher.flush_all()?;
    dispatcher.close_all();

    let elapsed = stats.elapsed_us();
    info!(
        frames = stats.frames(),
        mean_render_us = format!("{:.0}", elapsed.mean),
        max_render_us = format!("{:.0}", elapsed.max),
        "Replay complete"
    );

    info!("Complete Replay Demo finished");
    Ok(())
}

fn resolve_config_path() -> PathBuf {
    std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("crates/config_loader/examples/full.toml"))
}
