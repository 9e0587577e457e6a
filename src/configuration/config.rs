//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – engine options (integrator, rendering)
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`InitialConfig`]    – how the particle cloud is seeded
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   integrator: "euler"     # or "verlet"
//!   render: true
//!   frame_interval: 4       # capture every 4th step
//!
//! parameters:
//!   h: 0.1                  # smoothing length
//!   k: 0.1                  # equation-of-state constant
//!   n: 1.0                  # polytropic index
//!   lambda: 2.01            # confinement coefficient
//!   nu: 1.0                 # damping coefficient
//!   m: 0.005                # particle mass
//!   dt: 0.04                # fixed step size
//!   n_steps: 300            # total steps
//!
//! initial:
//!   n_particles: 400
//!   cloud_radius: 1.0       # scale of the seeded gaussian cloud
//!   seed: 42
//! ```
//!
//! The engine then maps this configuration into its internal runtime scenario
//! representation; validation happens once, at scenario construction.

use anyhow::{ensure, Result};
use serde::Deserialize;

/// Which integrator method is used by the engine
/// `integrator: "euler"` or `integrator: "verlet"`
#[derive(Deserialize, Debug, Clone)]
pub enum IntegratorConfig {
    #[serde(rename = "euler")] // Semi-implicit (symplectic) Euler. One force evaluation per step; the default
    Euler,

    #[serde(rename = "verlet")] // Velocity-Verlet. Two force evaluations per step, fixed step size
    Verlet,
}

/// High-level engine configuration
/// Controls how the simulation is run, not what it computes
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub integrator: IntegratorConfig, // time integrator used for advancing the system state
    pub render: bool, // `true` - write per-step frames and a gif, `false` - headless run
    pub frame_interval: Option<usize>, // capture every k-th step; defaults to every step
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub h: f64, // smoothing length
    pub k: f64, // equation-of-state constant
    pub n: f64, // polytropic index
    pub lambda: f64, // confinement coefficient
    pub nu: f64, // damping coefficient
    pub m: f64, // particle mass, shared by every particle
    pub dt: f64, // fixed step size
    pub n_steps: usize, // total number of steps
}

/// Configuration for the seeded initial state
#[derive(Deserialize, Debug)]
pub struct InitialConfig {
    pub n_particles: usize, // number of particles; fixed for the run
    pub cloud_radius: f64, // scale of the seeded gaussian cloud
    pub seed: u64, // deterministic seed to make runs reproducable
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // engine-level configuration (integrator, rendering)
    pub parameters: ParametersConfig, // global numerical and physical parameters
    pub initial: InitialConfig, // how the initial particle cloud is seeded
}

impl ScenarioConfig {
    /// Check the preconditions the core assumes and never guards at
    /// runtime: h > 0, m > 0, dt > 0, n != 0, at least one particle and
    /// one step. A violation is a fatal misconfiguration (h = 0 makes
    /// the kernel singular) and fails scenario construction before any
    /// physics runs.
    pub fn validate(&self) -> Result<()> {
        let p = &self.parameters;
        ensure!(p.h > 0.0, "smoothing length h must be > 0 (got {})", p.h);
        ensure!(p.m > 0.0, "particle mass m must be > 0 (got {})", p.m);
        ensure!(p.dt > 0.0, "step size dt must be > 0 (got {})", p.dt);
        ensure!(p.n != 0.0, "polytropic index n must be nonzero");
        ensure!(p.n_steps >= 1, "n_steps must be at least 1");

        let init = &self.initial;
        ensure!(init.n_particles >= 1, "need at least one particle");
        ensure!(
            init.cloud_radius > 0.0,
            "cloud_radius must be > 0 (got {})",
            init.cloud_radius
        );

        if let Some(interval) = self.engine.frame_interval {
            ensure!(interval >= 1, "frame_interval must be at least 1");
        }

        Ok(())
    }
}
