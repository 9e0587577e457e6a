//! Per-step frame rendering
//!
//! `FrameWriter` turns a read-only step snapshot (positions + densities)
//! into a PNG scatter plot, one file per captured step. It never touches
//! simulation state and runs only after a step has completed.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::colors::colormaps::{ColorMap, ViridisRGB};

use crate::simulation::states::NVec3;

/// Snapshot of one completed step, as handed to the renderers
#[derive(Debug, Clone)]
pub struct FrameSnapshot {
    pub step: usize, // step the snapshot was taken after
    pub positions: Vec<NVec3>,
    pub density: Vec<f64>,
}

/// Writes one PNG scatter plot per captured step
pub struct FrameWriter {
    out_dir: PathBuf,
    size: (u32, u32), // frame size in pixels
    axis_range: f64, // plot covers [-axis_range, axis_range] on x and y
}

impl FrameWriter {
    pub fn new(out_dir: impl Into<PathBuf>, size: (u32, u32), axis_range: f64) -> Self {
        Self {
            out_dir: out_dir.into(),
            size,
            axis_range,
        }
    }

    /// Render one snapshot to `frame_{step:05}.png` inside the output
    /// directory, returning the written path
    pub fn write_frame(&self, snap: &FrameSnapshot) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.out_dir)
            .with_context(|| format!("failed to create {}", self.out_dir.display()))?;

        let path = self.out_dir.join(format!("frame_{:05}.png", snap.step));
        {
            let root = BitMapBackend::new(&path, self.size).into_drawing_area();
            draw_scatter(&root, snap, self.axis_range)?;
            root.present()
                .map_err(|e| anyhow!("failed to write {}: {e}", path.display()))?;
        }

        Ok(path)
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }
}

/// Draw one snapshot onto any plotters drawing area: an x/y scatter of
/// the cloud with each particle colored by its local density
pub(crate) fn draw_scatter<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    snap: &FrameSnapshot,
    axis_range: f64,
) -> Result<()> {
    root.fill(&BLACK).map_err(|e| anyhow!("fill failed: {e}"))?;

    let mut chart = ChartBuilder::on(root)
        .caption(
            format!("step {}", snap.step),
            ("sans-serif", 18).into_font().color(&WHITE),
        )
        .margin(10)
        .build_cartesian_2d(-axis_range..axis_range, -axis_range..axis_range)
        .map_err(|e| anyhow!("chart build failed: {e}"))?;

    let (lo, hi) = density_bounds(&snap.density);

    chart
        .draw_series(snap.positions.iter().zip(&snap.density).map(|(p, &rho)| {
            let color = ViridisRGB.get_color_normalized(rho as f32, lo, hi);
            Circle::new((p.x, p.y), 3, color.filled())
        }))
        .map_err(|e| anyhow!("draw failed: {e}"))?;

    Ok(())
}

/// Colormap bounds for a density field, padded so a uniform field still
/// maps to a valid range
fn density_bounds(density: &[f64]) -> (f32, f32) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &rho in density {
        lo = lo.min(rho);
        hi = hi.max(rho);
    }
    if !lo.is_finite() || !hi.is_finite() || hi <= lo {
        return (0.0, 1.0);
    }
    (lo as f32, hi as f32)
}
