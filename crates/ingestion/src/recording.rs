//! JSONL frame recordings: one frame object per line.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use contracts::{Frame, ReplayError};
use tracing::debug;

/// Load a JSONL recording.
///
/// Blank lines are skipped; any malformed line aborts the load with a
/// parse error naming the line number.
pub fn load_frames(path: &Path) -> Result<Vec<Frame>, ReplayError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut frames = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let frame: Frame = serde_json::from_str(&line).map_err(|e| ReplayError::ConfigParse {
            message: format!(
                "recording {}:{}: {e}",
                path.display(),
                line_no + 1
            ),
            source: Some(Box::new(e)),
        })?;
        frames.push(frame);
    }

    debug!(path = %path.display(), frames = frames.len(), "recording parsed");
    Ok(frames)
}

/// Write frames as a JSONL recording.
pub fn save_frames(path: &Path, frames: &[Frame]) -> Result<(), ReplayError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for frame in frames {
        let line = serde_json::to_string(frame)
            .map_err(|e| ReplayError::other(format!("recording serialize error: {e}")))?;
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;
    Ok(())
}
