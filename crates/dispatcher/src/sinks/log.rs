//! LogSink - logs frame summaries via tracing.

use contracts::{RenderSink, RenderedFrame, ReplayError};
use tracing::info;

/// Sink that logs rendered-frame summaries for debugging.
pub struct LogSink {
    name: String,
}

impl LogSink {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl RenderSink for LogSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn write(&mut self, frame: &RenderedFrame) -> Result<(), ReplayError> {
        info!(
            sink = %self.name,
            frame_id = frame.frame_id,
            t_current = frame.t_current,
            width = frame.pixels.width(),
            height = frame.pixels.height(),
            frames_in_window = frame.meta.frames_in_window,
            method = %frame.meta.method,
            elapsed_us = frame.meta.elapsed_us,
            "frame rendered"
        );
        Ok(())
    }

    fn close(&mut self) -> Result<(), ReplayError> {
        info!(sink = %self.name, "LogSink closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::{PixelBuffer, RenderMeta, Rgba};

    #[test]
    fn test_log_sink_write_succeeds() {
        let mut sink = LogSink::new("test_log");
        let frame = RenderedFrame {
            frame_id: 1,
            t_current: 0.5,
            pixels: PixelBuffer::new(1, 1, vec![Rgba::new(0.0, 0.0, 0.0, 1.0)]),
            meta: RenderMeta::default(),
        };
        assert!(sink.write(&frame).is_ok());
        assert!(sink.flush().is_ok());
        assert!(sink.close().is_ok());
    }
}
