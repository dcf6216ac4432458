//! # Heatmap
//!
//! The numeric core of the replay pipeline: a deterministic, synchronous
//! transform from a window of historical sensor frames to a displayable
//! RGBA pixel buffer.
//!
//! Stages, composed left to right by [`pipeline::render`]:
//! - [`aggregate`] - per-cell median over a time window at native resolution
//! - [`resample`] - rescale to target resolution (bilinear / cosine / bicubic)
//! - [`colormap`] - value-to-color mapping through a named ramp
//!
//! Everything recomputes fully on every invocation; there is no caching and
//! no internal concurrency. All grid arithmetic is `f64`.
//!
//! ## Usage example
//!
//! ```ignore
//! use heatmap::{render, RenderOptions};
//!
//! let snapshot = history.snapshot();
//! let frame = render(&snapshot, cursor, frame_id, &options, &ramps)?;
//! display(frame.pixels);
//! ```

pub mod aggregate;
pub mod colormap;
pub mod pipeline;
pub mod resample;

pub use aggregate::{median_window, WindowAggregate};
pub use colormap::map_grid;
pub use pipeline::{render, RenderOptions};
pub use resample::{resampler_for, Resampler};

// Re-export contracts types
pub use contracts::{PixelBuffer, RenderedFrame, RenderMeta, ResampleMethod};
