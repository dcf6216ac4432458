//! # Ramp Store
//!
//! Color ramp assets behind the [`ColorRampProvider`] capability.
//!
//! Responsibilities:
//! - Builtin ramps (jet / plasma / viridis / grayscale) expanded from
//!   anchor control points
//! - JSON ramp assets loaded from files or a directory
//! - Case-insensitive name lookup
//!
//! The store is read-only after construction and safe to share across
//! pipeline invocations.
//!
//! ## Usage example
//!
//! ```
//! use contracts::ColorRampProvider;
//! use ramp_store::RampStore;
//!
//! let store = RampStore::with_builtins();
//! let ramp = store.ramp("Viridis").unwrap();
//! assert_eq!(ramp.len(), 256);
//! ```

mod builtin;
mod loader;

use std::collections::BTreeMap;
use std::path::Path;

use contracts::{ColorRamp, ColorRampProvider, ReplayError};
use tracing::{debug, info};

/// In-memory ramp registry keyed by lowercase name.
#[derive(Debug, Default)]
pub struct RampStore {
    ramps: BTreeMap<String, ColorRamp>,
}

impl RampStore {
    /// Empty store, mostly for tests that inject fixtures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the builtin ramps.
    pub fn with_builtins() -> Self {
        let mut store = Self::new();
        for ramp in builtin::builtin_ramps() {
            store.insert(ramp);
        }
        store
    }

    /// Register a ramp, replacing any existing ramp of the same name.
    pub fn insert(&mut self, ramp: ColorRamp) {
        debug!(ramp = ramp.name(), len = ramp.len(), "ramp registered");
        self.ramps.insert(ramp.name().to_lowercase(), ramp);
    }

    /// Load one JSON ramp asset and register it.
    pub fn load_file(&mut self, path: &Path) -> Result<(), ReplayError> {
        let ramp = loader::load_ramp_file(path)?;
        info!(ramp = ramp.name(), path = %path.display(), "ramp asset loaded");
        self.insert(ramp);
        Ok(())
    }

    /// Load every `.json` asset in a directory and register them.
    ///
    /// Non-JSON files are skipped; the first parse or validation failure
    /// aborts the load.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize, ReplayError> {
        let mut loaded = 0;
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) == Some("json") {
                self.load_file(&path)?;
                loaded += 1;
            }
        }
        Ok(loaded)
    }

    pub fn len(&self) -> usize {
        self.ramps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ramps.is_empty()
    }
}

impl ColorRampProvider for RampStore {
    fn ramp(&self, name: &str) -> Result<&ColorRamp, ReplayError> {
        self.ramps
            .get(&name.to_lowercase())
            .ok_or_else(|| ReplayError::unknown_ramp(name))
    }

    fn names(&self) -> Vec<&str> {
        // BTreeMap keys are already sorted
        self.ramps.values().map(|r| r.name()).collect()
    }
}
