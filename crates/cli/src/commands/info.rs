//! `info` command implementation.

use anyhow::{Context, Result};
use contracts::{ColorRampProvider, ResampleMethod};
use ramp_store::RampStore;
use serde::Serialize;

use crate::cli::InfoArgs;

#[derive(Serialize)]
struct InfoOutput {
    ramps: Vec<String>,
    methods: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<serde_json::Value>,
}

/// Execute the `info` command
pub fn run_info(args: &InfoArgs) -> Result<()> {
    let store = RampStore::with_builtins();
    let ramps: Vec<String> = store.names().iter().map(|n| n.to_string()).collect();
    let methods = vec![
        ResampleMethod::Bilinear.as_str(),
        ResampleMethod::Cosine.as_str(),
        ResampleMethod::Bicubic.as_str(),
    ];

    let config = match &args.config {
        Some(path) => {
            let blueprint = config_loader::ConfigLoader::load_from_path(path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            Some(serde_json::to_value(&blueprint).context("Failed to serialize blueprint")?)
        }
        None => None,
    };

    if args.json {
        let output = InfoOutput {
            ramps,
            methods,
            config,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Built-in color ramps:");
    for name in &ramps {
        println!("  - {}", name);
    }

    println!("\nResampling methods:");
    for method in &methods {
        println!("  - {}", method);
    }

    if let Some(config) = config {
        println!("\nLoaded configuration:");
        println!("{}", serde_json::to_string_pretty(&config)?);
    }

    Ok(())
}
