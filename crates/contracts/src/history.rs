//! HistorySnapshot and PlaybackCursor - immutable view of the frame history
//! and the pointer selecting the "current" frame.
//!
//! The mutable, append-only `FrameHistory` lives in the `playback` crate;
//! only the shared read-side data structures are part of the contracts.

use std::sync::Arc;

use crate::{Frame, ReplayError};

/// Immutable snapshot of the frame history.
///
/// Taken at the start of each pipeline invocation so concurrent appends by
/// the ingestion side can never race a render in progress. Frames are held
/// behind `Arc`, so a snapshot is a vector of pointer clones.
#[derive(Debug, Clone, Default)]
pub struct HistorySnapshot {
    frames: Vec<Arc<Frame>>,
}

impl HistorySnapshot {
    pub fn new(frames: Vec<Arc<Frame>>) -> Self {
        Self { frames }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Arc<Frame>> {
        self.frames.get(index)
    }

    pub fn first(&self) -> Option<&Arc<Frame>> {
        self.frames.first()
    }

    pub fn last(&self) -> Option<&Arc<Frame>> {
        self.frames.last()
    }

    pub fn frames(&self) -> &[Arc<Frame>] {
        &self.frames
    }

    /// Index of the frame carrying `timestamp`, if any.
    ///
    /// Frame identity is timestamp equality; ingestion is expected to keep
    /// timestamps unique per history.
    pub fn index_of_timestamp(&self, timestamp: f64) -> Option<usize> {
        self.frames.iter().position(|f| f.timestamp == timestamp)
    }
}

/// Pointer into a [`HistorySnapshot`] selecting the current frame.
///
/// Plain data; the bounded step transitions live in the `playback` crate.
/// Invariant: a cursor produced by those transitions always resolves to a
/// member of the snapshot it was produced against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackCursor {
    pub index: usize,
}

impl PlaybackCursor {
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    /// Resolve the cursor against a snapshot.
    ///
    /// # Errors
    /// [`ReplayError::EmptyHistory`] when the snapshot holds no frames;
    /// never silently substitutes a default frame.
    pub fn resolve<'a>(&self, snapshot: &'a HistorySnapshot) -> Result<&'a Arc<Frame>, ReplayError> {
        if snapshot.is_empty() {
            return Err(ReplayError::EmptyHistory);
        }
        snapshot
            .get(self.index)
            .ok_or_else(|| ReplayError::other(format!(
                "cursor index {} outside history of {} frames",
                self.index,
                snapshot.len()
            )))
    }
}
