//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - smoothing length and shared particle mass (`h`, `m`),
//! - equation-of-state constants (`k`, `n`),
//! - confinement and damping coefficients (`lambda`, `nu`),
//! - fixed step size, total step count, and random seed

#[derive(Debug, Clone)]
pub struct Parameters {
    pub h: f64, // smoothing length
    pub k: f64, // equation-of-state constant
    pub n: f64, // polytropic index
    pub lambda: f64, // confinement coefficient
    pub nu: f64, // damping coefficient
    pub m: f64, // particle mass, shared by every particle
    pub dt: f64, // step size
    pub n_steps: usize, // total number of steps
    pub seed: u64, // deterministic seed to make runs reproducable
}
