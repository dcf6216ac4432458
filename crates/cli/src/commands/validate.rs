//! `validate` command implementation.

use anyhow::{Context, Result};
use contracts::{ColorRampProvider, ReplayBlueprint, SourceConfig};
use ramp_store::RampStore;
use serde::Serialize;
use tracing::info;

use crate::cli::ValidateArgs;

/// Validation result for JSON output
#[derive(Serialize)]
struct ValidationResult {
    valid: bool,
    config_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warnings: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<ConfigSummary>,
}

#[derive(Serialize)]
struct ConfigSummary {
    version: String,
    sensor: String,
    grid: String,
    source: String,
    window_s: f64,
    target: String,
    method: String,
    ramp: String,
    sink_count: usize,
}

/// Execute the `validate` command
pub fn run_validate(args: &ValidateArgs) -> Result<()> {
    info!(config = %args.config.display(), "Validating configuration");

    let result = validate_config(args);

    if args.json {
        let json = serde_json::to_string_pretty(&result)
            .context("Failed to serialize validation result")?;
        println!("{}", json);
    } else {
        print_validation_result(&result);
    }

    if result.valid {
        Ok(())
    } else {
        anyhow::bail!("Configuration validation failed")
    }
}

fn validate_config(args: &ValidateArgs) -> ValidationResult {
    let config_path = args.config.display().to_string();

    // Check file exists
    if !args.config.exists() {
        return ValidationResult {
            valid: false,
            config_path,
            error: Some(format!("File not found: {}", args.config.display())),
            warnings: None,
            summary: None,
        };
    }

    // Try to load and validate
    match config_loader::ConfigLoader::load_from_path(&args.config) {
        Ok(blueprint) => {
            let warnings = collect_warnings(&blueprint);

            ValidationResult {
                valid: true,
                config_path,
                error: None,
                warnings: if warnings.is_empty() {
                    None
                } else {
                    Some(warnings)
                },
                summary: Some(summarize(&blueprint)),
            }
        }
        Err(e) => ValidationResult {
            valid: false,
            config_path,
            error: Some(e.to_string()),
            warnings: None,
            summary: None,
        },
    }
}

fn summarize(blueprint: &ReplayBlueprint) -> ConfigSummary {
    let source = match &blueprint.source {
        SourceConfig::Recording { path } => format!("recording ({})", path.display()),
        SourceConfig::Synthetic {
            frame_count,
            interval_s,
        } => format!("synthetic ({frame_count} frames @ {interval_s}s)"),
    };

    ConfigSummary {
        version: format!("{:?}", blueprint.version),
        sensor: blueprint.sensor.id.to_string(),
        grid: format!("{}x{}", blueprint.sensor.rows, blueprint.sensor.cols),
        source,
        window_s: blueprint.render.window_s,
        target: format!(
            "{}x{}",
            blueprint.render.target_width, blueprint.render.target_height
        ),
        method: blueprint.render.method.to_string(),
        ramp: blueprint.render.ramp.clone(),
        sink_count: blueprint.sinks.len(),
    }
}

/// Collect configuration warnings (non-fatal issues)
fn collect_warnings(blueprint: &ReplayBlueprint) -> Vec<String> {
    let mut warnings = Vec::new();

    // Check for empty sinks
    if blueprint.sinks.is_empty() {
        warnings.push("No sinks configured - rendered frames will only reach the log".to_string());
    }

    // Ramp must resolve at render time; builtins cover the common names
    let builtins = RampStore::with_builtins();
    if builtins.ramp(&blueprint.render.ramp).is_err() {
        warnings.push(format!(
            "Ramp '{}' is not built in - provide it via --ramp-dir when rendering",
            blueprint.render.ramp
        ));
    }

    // A window far wider than the recording keeps every frame in scope
    if let SourceConfig::Synthetic {
        frame_count,
        interval_s,
    } = blueprint.source
    {
        let span = frame_count.saturating_sub(1) as f64 * interval_s;
        if blueprint.render.window_s > span && frame_count > 1 {
            warnings.push(format!(
                "window_s ({}) exceeds the synthetic recording span ({:.1}s) - every render aggregates the full history",
                blueprint.render.window_s, span
            ));
        }
    }

    warnings
}

fn print_validation_result(result: &ValidationResult) {
    if result.valid {
        println!("✓ Configuration is valid: {}", result.config_path);

        if let Some(ref summary) = result.summary {
            println!("\n  Version: {}", summary.version);
            println!("  Sensor: {} ({})", summary.sensor, summary.grid);
            println!("  Source: {}", summary.source);
            println!("  Window: {}s", summary.window_s);
            println!("  Target: {} via {}", summary.target, summary.method);
            println!("  Ramp: {}", summary.ramp);
            println!("  Sinks: {}", summary.sink_count);
        }

        if let Some(ref warnings) = result.warnings {
            println!("\n⚠ Warnings:");
            for warning in warnings {
                println!("  - {}", warning);
            }
        }
    } else {
        println!("✗ Configuration is invalid: {}", result.config_path);
        if let Some(ref error) = result.error {
            println!("\n  Error: {}", error);
        }
    }
}
