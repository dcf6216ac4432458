//! Replay orchestrator.
//!
//! Drives the synchronous loop: load blueprint, ingest history, walk the
//! cursor, render each frame, and fan it out to the sinks.

use std::time::Instant;

use anyhow::{Context, Result};
use contracts::{PlaybackCursor, ReplayBlueprint, ReplayError, SinkConfig, SinkType};
use dispatcher::Dispatcher;
use heatmap::RenderOptions;
use observability::RenderStatsAggregator;
use ramp_store::RampStore;
use tracing::{info, warn};

use crate::cli::RenderArgs;
use crate::pipeline::ReplayStats;

/// Load the blueprint and apply command-line overrides.
pub fn load_blueprint(args: &RenderArgs) -> Result<ReplayBlueprint> {
    let mut blueprint = config_loader::ConfigLoader::load_from_path(&args.config)
        .with_context(|| format!("Failed to load {}", args.config.display()))?;

    if let Some(method) = &args.method {
        blueprint.render.method = method.parse().context("Invalid --method override")?;
    }
    if let Some(ramp) = &args.ramp {
        blueprint.render.ramp = ramp.clone();
    }
    if let Some(window) = args.window {
        if !(window > 0.0) {
            return Err(ReplayError::config_validation(
                "render.window_s",
                "must be positive",
            ))
            .context("Invalid --window override");
        }
        blueprint.render.window_s = window;
    }

    Ok(blueprint)
}

/// Run the replay loop to completion.
///
/// The cursor starts at `--start` (clamped into the history) and advances by
/// `--step` after every rendered frame. The loop ends when the cursor stops
/// moving (clamped at a history boundary) or `--max-frames` is reached.
pub fn run_replay(blueprint: &ReplayBlueprint, args: &RenderArgs) -> Result<ReplayStats> {
    if args.step == 0 && args.max_frames == 0 {
        anyhow::bail!("--step 0 never reaches a history boundary; set --max-frames");
    }

    // Ramps: builtins plus any user-provided assets
    let mut ramps = RampStore::with_builtins();
    if let Some(dir) = &args.ramp_dir {
        let loaded = ramps
            .load_dir(dir)
            .with_context(|| format!("Failed to load ramps from {}", dir.display()))?;
        info!(dir = %dir.display(), loaded, "ramp assets loaded");
    }

    // History
    let history = ingestion::build_history(&blueprint.source, &blueprint.sensor)
        .context("Failed to build frame history")?;
    observability::record_frames_ingested(history.len() as u64);
    let out_of_order = history.out_of_order_count();
    if out_of_order > 0 {
        warn!(
            count = out_of_order,
            "history contains out-of-order frames; windows may span non-contiguous indices"
        );
    }
    let snapshot = history.snapshot();

    // Sinks: fall back to a log sink so frames are never silently dropped
    let sink_configs: Vec<SinkConfig> = if blueprint.sinks.is_empty() {
        vec![SinkConfig {
            name: "default-log".to_string(),
            sink_type: SinkType::Log,
            params: Default::default(),
        }]
    } else {
        blueprint.sinks.clone()
    };
    let mut dispatcher = Dispatcher::from_configs(&sink_configs);

    let options = RenderOptions::from_blueprint(blueprint);
    info!(
        history_len = snapshot.len(),
        window_s = options.window_s,
        method = %options.method,
        ramp = %options.ramp,
        target = format!("{}x{}", options.target_width, options.target_height),
        sinks = dispatcher.sink_count(),
        "replay starting"
    );

    let started = Instant::now();
    let mut cursor =
        playback::move_forward(&snapshot, PlaybackCursor::new(0), args.start as i64)?;
    let mut render_stats = RenderStatsAggregator::new();
    let mut frames_rendered: u64 = 0;
    let mut sink_failures: u64 = 0;

    loop {
        let frame = heatmap::render(&snapshot, cursor, frames_rendered, &options, &ramps)?;
        observability::record_render_metrics(&frame.meta, frame.frame_id);
        render_stats.record(&frame.meta);
        sink_failures += dispatcher.dispatch(&frame) as u64;
        frames_rendered += 1;

        if args.max_frames > 0 && frames_rendered >= args.max_frames {
            break;
        }
        let next = playback::move_forward(&snapshot, cursor, args.step)?;
        if next == cursor {
            break;
        }
        cursor = next;
    }

    dispatcher.flush_all().context("Failed to flush sinks")?;
    dispatcher.close_all();

    let sink_metrics = dispatcher.metrics();
    for (name, metrics) in &sink_metrics {
        observability::record_sink_totals(name, metrics.write_count(), metrics.failure_count());
    }

    let duration = started.elapsed();
    info!(
        frames_rendered,
        sink_failures,
        elapsed_s = duration.as_secs_f64(),
        "replay finished"
    );

    Ok(ReplayStats {
        frames_rendered,
        sink_failures,
        history_len: snapshot.len(),
        sink_count: dispatcher.sink_count(),
        out_of_order,
        duration,
        render: render_stats,
        sink_metrics,
    })
}
