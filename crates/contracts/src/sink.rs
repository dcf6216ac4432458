//! RenderSink trait - Dispatcher output interface
//!
//! Defines the abstract interface for sinks. The pipeline is synchronous
//! by design, so sinks are plain blocking writers.

use crate::{RenderedFrame, ReplayError};

/// Rendered-frame output trait
///
/// All sink implementations must implement this trait.
pub trait RenderSink {
    /// Sink name (used for logging/metrics)
    fn name(&self) -> &str;

    /// Write one rendered frame
    ///
    /// # Errors
    /// Returns write error (should include context)
    fn write(&mut self, frame: &RenderedFrame) -> Result<(), ReplayError>;

    /// Flush buffered output (if any)
    fn flush(&mut self) -> Result<(), ReplayError> {
        Ok(())
    }

    /// Close sink
    fn close(&mut self) -> Result<(), ReplayError> {
        Ok(())
    }
}
