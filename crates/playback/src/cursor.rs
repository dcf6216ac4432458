//! Pure cursor transitions over a history snapshot.
//!
//! Movement clamps at both boundaries rather than wrapping or erroring.
//! Negative counts are an inverse move; the clamp keeps the cursor inside
//! the history either way.

use std::sync::Arc;

use contracts::{Frame, HistorySnapshot, PlaybackCursor, ReplayError};

/// Clamp a signed target index into `[0, len - 1]`.
fn clamp_index(target: i64, len: usize) -> usize {
    target.clamp(0, len as i64 - 1) as usize
}

/// Step the cursor `count` frames toward the end of history.
///
/// # Errors
/// [`ReplayError::EmptyHistory`] when the snapshot holds no frames.
pub fn move_forward(
    snapshot: &HistorySnapshot,
    cursor: PlaybackCursor,
    count: i64,
) -> Result<PlaybackCursor, ReplayError> {
    if snapshot.is_empty() {
        return Err(ReplayError::EmptyHistory);
    }
    let target = cursor.index as i64 + count;
    Ok(PlaybackCursor::new(clamp_index(target, snapshot.len())))
}

/// Step the cursor `count` frames toward the start of history.
///
/// # Errors
/// [`ReplayError::EmptyHistory`] when the snapshot holds no frames.
pub fn move_backward(
    snapshot: &HistorySnapshot,
    cursor: PlaybackCursor,
    count: i64,
) -> Result<PlaybackCursor, ReplayError> {
    if snapshot.is_empty() {
        return Err(ReplayError::EmptyHistory);
    }
    let target = cursor.index as i64 - count;
    Ok(PlaybackCursor::new(clamp_index(target, snapshot.len())))
}

/// Point the cursor at the frame carrying `timestamp`.
///
/// Frame identity is timestamp equality.
///
/// # Errors
/// - [`ReplayError::EmptyHistory`] when the snapshot holds no frames
/// - [`ReplayError::FrameNotFound`] when no frame carries the timestamp
pub fn set_current(
    snapshot: &HistorySnapshot,
    timestamp: f64,
) -> Result<PlaybackCursor, ReplayError> {
    if snapshot.is_empty() {
        return Err(ReplayError::EmptyHistory);
    }
    snapshot
        .index_of_timestamp(timestamp)
        .map(PlaybackCursor::new)
        .ok_or(ReplayError::FrameNotFound { timestamp })
}

/// Resolve the cursor to its frame.
pub fn current_frame<'a>(
    snapshot: &'a HistorySnapshot,
    cursor: PlaybackCursor,
) -> Result<&'a Arc<Frame>, ReplayError> {
    cursor.resolve(snapshot)
}
