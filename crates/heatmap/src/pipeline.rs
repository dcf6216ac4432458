//! Pipeline driver: aggregate -> resample -> colormap.

use std::time::Instant;

use contracts::{
    ColorRampProvider, HistorySnapshot, PlaybackCursor, RenderConfig, RenderMeta, RenderedFrame,
    ReplayBlueprint, ReplayError, ResampleMethod,
};
use playback::current_frame;
use tracing::debug;

use crate::aggregate::median_window;
use crate::colormap::map_grid;
use crate::resample::resampler_for;

/// Everything the driver needs besides the history itself.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Temporal window span (seconds)
    pub window_s: f64,

    /// Target resolution
    pub target_width: usize,
    pub target_height: usize,

    /// Resampling method
    pub method: ResampleMethod,

    /// Ramp name, resolved through the injected provider
    pub ramp: String,

    /// Value range mapped onto the ramp
    pub range_min: f64,
    pub range_max: f64,
}

impl RenderOptions {
    /// Derive options from a validated blueprint.
    pub fn from_blueprint(blueprint: &ReplayBlueprint) -> Self {
        let render: &RenderConfig = &blueprint.render;
        let (range_min, range_max) = render.effective_range(&blueprint.sensor);
        Self {
            window_s: render.window_s,
            target_width: render.target_width,
            target_height: render.target_height,
            method: render.method,
            ramp: render.ramp.clone(),
            range_min,
            range_max,
        }
    }
}

/// Run the full pipeline for the cursor-selected frame.
///
/// Pure over its inputs: identical snapshot, cursor, and options produce a
/// byte-identical pixel buffer. Recomputes everything on every call; there
/// is no caching.
///
/// # Errors
/// Surfaces the whole taxonomy: `UnknownRamp` from the provider,
/// `EmptyHistory` from cursor resolution, `EmptyWindow`/`ShapeMismatch`
/// from aggregation, `GridBounds` from resampling.
pub fn render(
    snapshot: &HistorySnapshot,
    cursor: PlaybackCursor,
    frame_id: u64,
    options: &RenderOptions,
    ramps: &dyn ColorRampProvider,
) -> Result<RenderedFrame, ReplayError> {
    let started = Instant::now();

    let current = current_frame(snapshot, cursor)?;
    let ramp = ramps.ramp(&options.ramp)?;

    let aggregate = median_window(snapshot, current, options.window_s)?;
    let resampler = resampler_for(options.method);
    let resampled = resampler.resample(
        &aggregate.grid,
        options.target_width,
        options.target_height,
    )?;
    let pixels = map_grid(&resampled, options.range_min, options.range_max, ramp);

    let elapsed_us = started.elapsed().as_micros() as u64;
    debug!(
        frame_id,
        t_current = current.timestamp,
        frames_in_window = aggregate.frame_count,
        method = resampler.name(),
        elapsed_us,
        "frame rendered"
    );

    Ok(RenderedFrame {
        frame_id,
        t_current: current.timestamp,
        pixels,
        meta: RenderMeta {
            window_s: options.window_s,
            frames_in_window: aggregate.frame_count,
            method: resampler.name().to_string(),
            ramp: ramp.name().to_string(),
            target_width: options.target_width,
            target_height: options.target_height,
            range_min: options.range_min,
            range_max: options.range_max,
            elapsed_us,
        },
    })
}
