//! # Dispatcher
//!
//! Fan-out of rendered frames to configured sinks.
//!
//! Responsibilities:
//! - Sink construction from [`SinkConfig`] lists
//! - Sequential fan-out of [`RenderedFrame`]s (the pipeline is synchronous)
//! - Per-sink write/failure counters
//!
//! ## Usage example
//!
//! ```ignore
//! use dispatcher::Dispatcher;
//!
//! let mut dispatcher = Dispatcher::from_configs(&blueprint.sinks);
//! for frame in rendered {
//!     dispatcher.dispatch(&frame);
//! }
//! dispatcher.close_all();
//! ```

mod dispatcher;
mod metrics;
pub mod sinks;

pub use crate::dispatcher::Dispatcher;
pub use crate::metrics::SinkMetrics;
pub use crate::sinks::{LogSink, PngSink, PngSinkConfig};

// Re-export contracts types
pub use contracts::{RenderSink, RenderedFrame, SinkConfig, SinkType};
