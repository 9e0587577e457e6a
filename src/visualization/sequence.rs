//! Ordered frame-sequence export
//!
//! `GifExporter` collects per-step snapshots in strictly increasing step
//! order and stitches them into a single animated GIF. Out-of-order
//! delivery is rejected, never silently reordered.

use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};
use plotters::prelude::*;

use crate::visualization::frame::{draw_scatter, FrameSnapshot};

pub struct GifExporter {
    path: PathBuf,
    size: (u32, u32), // frame size in pixels
    frame_delay_ms: u32,
    axis_range: f64,
    frames: Vec<FrameSnapshot>,
}

impl GifExporter {
    pub fn new(
        path: impl Into<PathBuf>,
        size: (u32, u32),
        frame_delay_ms: u32,
        axis_range: f64,
    ) -> Self {
        Self {
            path: path.into(),
            size,
            frame_delay_ms,
            axis_range,
            frames: Vec::new(),
        }
    }

    /// Queue one snapshot. Steps must arrive in strictly increasing order
    pub fn push(&mut self, snap: FrameSnapshot) -> Result<()> {
        if let Some(last) = self.frames.last() {
            if snap.step <= last.step {
                bail!(
                    "frame for step {} delivered after step {}",
                    snap.step,
                    last.step
                );
            }
        }
        self.frames.push(snap);
        Ok(())
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Render every queued frame, in order, into the output GIF and
    /// return its path
    pub fn finish(self) -> Result<PathBuf> {
        if self.frames.is_empty() {
            bail!("no frames were captured; nothing to export");
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        {
            let root = BitMapBackend::gif(&self.path, self.size, self.frame_delay_ms)
                .map_err(|e| anyhow!("failed to open {}: {e}", self.path.display()))?
                .into_drawing_area();

            for snap in &self.frames {
                draw_scatter(&root, snap, self.axis_range)?;
                root.present()
                    .map_err(|e| anyhow!("failed to write gif frame {}: {e}", snap.step))?;
            }
        }

        Ok(self.path)
    }
}
