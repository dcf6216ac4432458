//! # Config Loader
//!
//! Configuration loading and parsing module.
//!
//! Responsibilities:
//! - Parse TOML/JSON configuration files
//! - Validate configuration legality
//! - Produce a [`ReplayBlueprint`]
//!
//! # Example
//!
//! ```no_run
//! use config_loader::ConfigLoader;
//! use std::path::Path;
//!
//! let blueprint = ConfigLoader::load_from_path(Path::new("replay.toml")).unwrap();
//! println!("Sensor: {}", blueprint.sensor.id);
//! ```

mod parser;
mod validator;

pub use contracts::ReplayBlueprint;
pub use parser::ConfigFormat;

use contracts::ReplayError;
use std::path::Path;

/// Configuration loader
///
/// Provides static methods to load configuration from files or strings.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from file path
    ///
    /// Automatically detects format from file extension (.toml / .json).
    ///
    /// # Errors
    /// - File read failure
    /// - Unsupported format
    /// - Parse failure
    /// - Validation failure
    pub fn load_from_path(path: &Path) -> Result<ReplayBlueprint, ReplayError> {
        let format = Self::detect_format(path)?;
        let content = Self::read_file(path)?;
        Self::load_from_str(&content, format)
    }

    /// Load configuration from string
    ///
    /// # Errors
    /// - Parse failure
    /// - Validation failure
    pub fn load_from_str(
        content: &str,
        format: ConfigFormat,
    ) -> Result<ReplayBlueprint, ReplayError> {
        let blueprint = parser::parse(content, format)?;
        validator::validate(&blueprint)?;
        Ok(blueprint)
    }

    /// Serialize a blueprint to TOML string
    pub fn to_toml(blueprint: &ReplayBlueprint) -> Result<String, ReplayError> {
        toml::to_string_pretty(blueprint)
            .map_err(|e| ReplayError::config_parse(format!("TOML serialize error: {e}")))
    }

    /// Serialize a blueprint to JSON string
    pub fn to_json(blueprint: &ReplayBlueprint) -> Result<String, ReplayError> {
        serde_json::to_string_pretty(blueprint)
            .map_err(|e| ReplayError::config_parse(format!("JSON serialize error: {e}")))
    }
}

impl ConfigLoader {
    /// Infer configuration format from file extension
    fn detect_format(path: &Path) -> Result<ConfigFormat, ReplayError> {
        let ext = path.extension().and_then(|e| e.to_str()).ok_or_else(|| {
            ReplayError::config_parse("cannot determine file format from extension")
        })?;

        ConfigFormat::from_extension(ext)
            .ok_or_else(|| ReplayError::config_parse(format!("unsupported config format: .{ext}")))
    }

    /// Read configuration file content
    fn read_file(path: &Path) -> Result<String, ReplayError> {
        Ok(std::fs::read_to_string(path)?)
    }
}
