//! Core state types for the SPH simulation.
//!
//! `System` holds the particle cloud in struct-of-arrays layout:
//! one position and one velocity per particle, plus the current
//! simulation time `t` and the completed-step counter `step`.
//!
//! All particles share a single scalar mass, which lives in
//! [`Parameters`](crate::simulation::params::Parameters), not here.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone)]
pub struct System {
    pub positions: Vec<NVec3>, // particle positions
    pub velocities: Vec<NVec3>, // particle velocities
    pub t: f64, // time
    pub step: usize, // completed steps; 0 = seeded, never stepped
}

impl System {
    /// Build a system at t = 0 from matching position/velocity arrays
    pub fn new(positions: Vec<NVec3>, velocities: Vec<NVec3>) -> Self {
        assert_eq!(positions.len(), velocities.len(), "position/velocity length mismatch");
        Self {
            positions,
            velocities,
            t: 0.0,
            step: 0,
        }
    }

    /// Number of particles; fixed for the simulation's lifetime
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
