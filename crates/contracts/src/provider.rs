//! ColorRampProvider trait - injected ramp lookup capability.

use crate::{ColorRamp, ReplayError};

/// Resolves ramp names to ordered RGBA palettes.
///
/// Passed into the pipeline driver explicitly instead of a static asset
/// registry, so callers control where ramps come from (builtins, asset
/// files, test fixtures). Implementations are read-only after construction
/// and safe to share across invocations.
pub trait ColorRampProvider {
    /// Look up a ramp by name (case-insensitive).
    ///
    /// # Errors
    /// [`ReplayError::UnknownRamp`] when no ramp carries the name.
    fn ramp(&self, name: &str) -> Result<&ColorRamp, ReplayError>;

    /// Names of all available ramps, sorted.
    fn names(&self) -> Vec<&str>;
}
