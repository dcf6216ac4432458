//! Sink implementations.

mod log;
mod png;

pub use log::LogSink;
pub use png::{PngSink, PngSinkConfig};
