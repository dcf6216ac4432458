//! # Playback
//!
//! Frame history ownership and cursor navigation.
//!
//! Responsibilities:
//! - Append-only [`FrameHistory`] with out-of-order detection
//! - Cheap immutable snapshots for the render pipeline
//! - Bounded cursor transitions (`move_forward` / `move_backward` / `set_current`)
//!
//! ## Usage example
//!
//! ```
//! use contracts::{Frame, PlaybackCursor, ReadingGrid};
//! use playback::{move_forward, FrameHistory};
//!
//! let mut history = FrameHistory::new();
//! for t in 0..5 {
//!     history.push(Frame::new(t as f64, ReadingGrid::filled(2, 2, t)));
//! }
//!
//! let snapshot = history.snapshot();
//! let cursor = PlaybackCursor::new(2);
//! let cursor = move_forward(&snapshot, cursor, 10).unwrap();
//! assert_eq!(cursor.index, 4); // clamped at the last frame
//! ```

mod cursor;
mod history;

pub use cursor::{current_frame, move_backward, move_forward, set_current};
pub use history::FrameHistory;

// Re-export contracts types
pub use contracts::{Frame, HistorySnapshot, PlaybackCursor};
