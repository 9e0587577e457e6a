//! Offline simulation driver
//!
//! Steps a scenario to completion, printing progress as it goes. With
//! rendering enabled it captures a snapshot every `frame_interval`
//! steps, writes a PNG per captured step, and stitches all captured
//! frames into one GIF at the end. Rendering happens between steps,
//! from read-only snapshots; the renderers never see mutable state.

use std::path::PathBuf;

use anyhow::Result;

use crate::configuration::config::IntegratorConfig;
use crate::simulation::density::density_at;
use crate::simulation::integrator::{semi_implicit_euler, velocity_verlet};
use crate::simulation::scenario::Scenario;
use crate::visualization::frame::{FrameSnapshot, FrameWriter};
use crate::visualization::sequence::GifExporter;

/// Where rendered artifacts go, relative to the working directory
const OUT_DIR: &str = "out";
/// Rendered frame size in pixels
const FRAME_SIZE: (u32, u32) = (640, 640);
/// GIF frame delay in milliseconds
const FRAME_DELAY_MS: u32 = 40;
/// Plot axis half-width in simulation units
const AXIS_RANGE: f64 = 2.0;

/// Run a scenario to completion
///
/// Advances the system `n_steps` times with the configured integrator.
/// The step loop is strictly sequential: step k + 1 starts only after
/// step k's state mutation has completed.
pub fn run_offline(mut scenario: Scenario) -> Result<()> {
    let params = scenario.parameters.clone();
    let engine = scenario.engine.clone();

    println!(
        "run_offline: {} particles, {} steps, dt = {}",
        scenario.system.len(),
        params.n_steps,
        params.dt
    );

    let mut render = engine.render.then(|| {
        (
            FrameWriter::new(OUT_DIR, FRAME_SIZE, AXIS_RANGE),
            GifExporter::new(
                PathBuf::from(OUT_DIR).join("simulation.gif"),
                FRAME_SIZE,
                FRAME_DELAY_MS,
                AXIS_RANGE,
            ),
        )
    });

    for _ in 0..params.n_steps {
        match engine.integrator {
            IntegratorConfig::Euler => {
                semi_implicit_euler(&mut scenario.system, &scenario.forces, &params)
            }
            IntegratorConfig::Verlet => {
                velocity_verlet(&mut scenario.system, &scenario.forces, &params)
            }
        }

        let sys = &scenario.system;

        if let Some((writer, exporter)) = render.as_mut() {
            if sys.step % engine.frame_interval == 0 {
                // Densities are recomputed for rendering from the frozen
                // positions; the physics of the next step does not depend
                // on anything done here
                let density = density_at(&sys.positions, &sys.positions, params.m, params.h);
                let snap = FrameSnapshot {
                    step: sys.step,
                    positions: sys.positions.clone(),
                    density,
                };
                writer.write_frame(&snap)?;
                exporter.push(snap)?;
            }
        }

        if sys.step % 100 == 0 || sys.step == params.n_steps {
            println!("step {:5} / {}, t = {:.3}", sys.step, params.n_steps, sys.t);
        }
    }

    if let Some((_, exporter)) = render {
        let frames = exporter.frame_count();
        let path = exporter.finish()?;
        println!("wrote {} ({} frames)", path.display(), frames);
    }

    Ok(())
}
