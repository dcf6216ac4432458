//! PngSink - writes rendered frames to disk with folder structure.
//!
//! Layout under the configured base path:
//! ```text
//! <base>/run_<utc timestamp>/
//!   frames/000042.png      RGBA8 frame
//!   meta/000042.json       RenderMeta
//! ```

use std::collections::HashMap;
use std::fs::{self, File};
use std::path::PathBuf;

use chrono::Utc;
use contracts::{RenderSink, RenderedFrame, ReplayError};
use tracing::debug;

/// Configuration for [`PngSink`].
#[derive(Debug, Clone)]
pub struct PngSinkConfig {
    /// Base output directory; a per-run subdirectory is created inside it.
    pub base_path: PathBuf,
}

impl PngSinkConfig {
    /// Create config from a params map (`base_path`, default `./output`).
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let base_path = params
            .get("base_path")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./output"));
        Self { base_path }
    }
}

/// Sink that writes PNG frames plus render metadata JSON.
pub struct PngSink {
    name: String,
    run_dir: PathBuf,
    dirs_created: bool,
}

impl PngSink {
    /// Create a new PngSink; the run directory is created lazily on first write.
    pub fn new(name: impl Into<String>, config: PngSinkConfig) -> Self {
        let run_dir = config
            .base_path
            .join(format!("run_{}", Utc::now().format("%Y%m%dT%H%M%SZ")));
        Self {
            name: name.into(),
            run_dir,
            dirs_created: false,
        }
    }

    /// Create from a params map (for the sink factory).
    pub fn from_params(name: impl Into<String>, params: &HashMap<String, String>) -> Self {
        Self::new(name, PngSinkConfig::from_params(params))
    }

    /// Directory this run writes into.
    pub fn run_dir(&self) -> &PathBuf {
        &self.run_dir
    }

    fn ensure_dirs(&mut self) -> std::io::Result<()> {
        if !self.dirs_created {
            fs::create_dir_all(self.run_dir.join("frames"))?;
            fs::create_dir_all(self.run_dir.join("meta"))?;
            self.dirs_created = true;
        }
        Ok(())
    }

    fn write_frame_to_disk(&mut self, frame: &RenderedFrame) -> std::io::Result<()> {
        self.ensure_dirs()?;

        let png_path = self
            .run_dir
            .join("frames")
            .join(format!("{:06}.png", frame.frame_id));
        image::save_buffer(
            &png_path,
            &frame.pixels.to_rgba8_bytes(),
            frame.pixels.width() as u32,
            frame.pixels.height() as u32,
            image::ColorType::Rgba8,
        )
        .map_err(std::io::Error::other)?;

        let meta_path = self
            .run_dir
            .join("meta")
            .join(format!("{:06}.json", frame.frame_id));
        let meta_file = File::create(meta_path)?;
        serde_json::to_writer(meta_file, &frame.meta)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        debug!(sink = %self.name, path = %png_path.display(), "frame written");
        Ok(())
    }
}

impl RenderSink for PngSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn write(&mut self, frame: &RenderedFrame) -> Result<(), ReplayError> {
        self.write_frame_to_disk(frame)
            .map_err(|e| ReplayError::sink_write(&self.name, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::{PixelBuffer, RenderMeta, Rgba};

    fn rendered_frame(frame_id: u64) -> RenderedFrame {
        let pixels = vec![Rgba::new(1.0, 0.0, 0.0, 1.0); 4];
        RenderedFrame {
            frame_id,
            t_current: 1.0,
            pixels: PixelBuffer::new(2, 2, pixels),
            meta: RenderMeta {
                method: "bilinear".to_string(),
                target_width: 2,
                target_height: 2,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_png_and_meta_written() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = PngSink::new(
            "test_png",
            PngSinkConfig {
                base_path: dir.path().to_path_buf(),
            },
        );
        sink.write(&rendered_frame(42)).unwrap();

        let run_dir = sink.run_dir().clone();
        assert!(run_dir.join("frames/000042.png").exists());
        let meta_json = std::fs::read_to_string(run_dir.join("meta/000042.json")).unwrap();
        assert!(meta_json.contains("bilinear"));
    }

    #[test]
    fn test_from_params_default_base_path() {
        let config = PngSinkConfig::from_params(&HashMap::new());
        assert_eq!(config.base_path, PathBuf::from("./output"));
    }
}
