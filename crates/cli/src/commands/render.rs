//! `render` command implementation.

use anyhow::Result;
use tracing::info;

use crate::cli::RenderArgs;
use crate::pipeline::{load_blueprint, run_replay};

/// Execute the `render` command
pub fn run_render(args: &RenderArgs) -> Result<()> {
    if args.metrics_port > 0 {
        observability::init_metrics_only(args.metrics_port)?;
    }

    let blueprint = load_blueprint(args)?;

    if args.dry_run {
        println!("✓ Configuration is valid: {}", args.config.display());
        println!("\n  Sensor: {} ({}x{})", blueprint.sensor.id, blueprint.sensor.rows, blueprint.sensor.cols);
        println!("  Window: {}s", blueprint.render.window_s);
        println!(
            "  Target: {}x{} via {}",
            blueprint.render.target_width, blueprint.render.target_height, blueprint.render.method
        );
        println!("  Ramp: {}", blueprint.render.ramp);
        println!("  Sinks: {}", blueprint.sinks.len());
        info!("Dry run complete, skipping render");
        return Ok(());
    }

    let stats = run_replay(&blueprint, args)?;
    stats.print_summary();

    if stats.sink_failures > 0 {
        anyhow::bail!("{} sink write(s) failed", stats.sink_failures);
    }

    Ok(())
}
