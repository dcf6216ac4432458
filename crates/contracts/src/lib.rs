//! # Contracts
//!
//! Frozen interface contracts, defining inter-module data structures and traits.
//! All business crates can only depend on this crate, reverse dependencies are prohibited.
//!
//! ## Time Model
//! - Uses the sensor recording timestamp (seconds, f64) as primary clock
//! - `frame_id` is optional, used for ordering/diagnostics

mod blueprint;
mod color;
mod error;
mod frame;
mod history;
mod provider;
mod render;
mod sensor;
mod sensor_id;
mod sink;

pub use blueprint::*;
pub use color::*;
pub use error::*;
pub use frame::*;
pub use history::*;
pub use provider::ColorRampProvider;
pub use render::*;
pub use sensor::*;
pub use sensor_id::SensorId;
pub use sink::RenderSink;
