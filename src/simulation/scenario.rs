//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing), validates it, and produces a
//! runtime bundle (`Scenario`) containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with the seeded cloud at t = 0)
//! - active force set (`AccelSet`)
//!
//! The bundle is consumed by the offline driver and the benchmarks.

use anyhow::Result;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, Confinement, Damping, PressureForce};
use crate::simulation::params::Parameters;
use crate::simulation::seeder::seed_cloud;
use crate::simulation::states::System;

/// Fully-initialized runtime bundle built from a [`ScenarioConfig`]
///
/// Contains the engine settings, parameters, current system state, and
/// the set of active force laws (accelerations). The system is owned
/// here and mutated only by the integrator.
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        // Preconditions are enforced here, once; the core never re-checks
        cfg.validate()?;

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            h: p_cfg.h,
            k: p_cfg.k,
            n: p_cfg.n,
            lambda: p_cfg.lambda,
            nu: p_cfg.nu,
            m: p_cfg.m,
            dt: p_cfg.dt,
            n_steps: p_cfg.n_steps,
            seed: cfg.initial.seed,
        };

        // Initial system state: seeded gaussian cloud at rest, t = 0
        let system: System = seed_cloud(
            cfg.initial.n_particles,
            cfg.initial.cloud_radius,
            cfg.initial.seed,
        );

        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        let engine = Engine {
            integrator: e_cfg.integrator,
            render: e_cfg.render,
            frame_interval: e_cfg.frame_interval.unwrap_or(1),
        };

        // Forces: pressure gradient + confinement + damping
        let forces = AccelSet::new()
            .with(PressureForce {
                h: parameters.h,
                m: parameters.m,
                k: parameters.k,
                n: parameters.n,
            })
            .with(Confinement {
                lambda: parameters.lambda,
            })
            .with(Damping { nu: parameters.nu });

        Ok(Self {
            engine,
            parameters,
            system,
            forces,
        })
    }
}
