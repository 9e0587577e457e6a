//! Force / acceleration contributors for the SPH engine
//!
//! Defines the acceleration trait, the term-summing `AccelSet`, and the
//! three contributors of the toy-star model: symmetrized SPH pressure
//! forces, a linear confining force toward the origin, and linear
//! velocity damping

use crate::simulation::density::density_at;
use crate::simulation::eos;
use crate::simulation::kernel;
use crate::simulation::states::{System, NVec3};

/// Collection of acceleration terms (pressure, confinement, damping, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per particle
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add an acceleration term
    pub fn with(mut self, term: impl Acceleration + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all particles in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [NVec3]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each particle
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec3]);
}

/// Symmetrized SPH pressure-gradient force (direct n^2 sum)
///
/// Estimates density and pressure at every particle, then accumulates
/// `-m (P_i/rho_i^2 + P_j/rho_j^2) grad W(x_i - x_j)` over unordered
/// pairs. The per-pair factor is symmetric in i and j while the kernel
/// gradient is antisymmetric, so each pair's two contributions are equal
/// and opposite and total momentum is conserved up to rounding.
pub struct PressureForce {
    pub h: f64, // smoothing length
    pub m: f64, // particle mass
    pub k: f64, // equation-of-state constant
    pub n: f64, // polytropic index
}

impl Acceleration for PressureForce {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec3]) {
        let n = sys.len();
        if n == 0 { // no particles, return
            return;
        }

        // Density at every particle position, sampled against the full
        // set (self-contribution included), then pressure from the
        // polytropic closure
        let rho = density_at(&sys.positions, &sys.positions, self.m, self.h);
        let p = eos::pressure_field(&rho, self.k, self.n);

        // Per-particle factor P_i / rho_i^2
        let f: Vec<f64> = p
            .iter()
            .zip(&rho)
            .map(|(&pi, &rho_i)| pi / (rho_i * rho_i))
            .collect();

        // Loop over each unordered pair (i, j) with i < j. The i = j term
        // contributes nothing: the kernel gradient vanishes at zero
        // separation.
        for i in 0..n {
            let xi = sys.positions[i];

            for j in (i + 1)..n {
                // Displacement from j to i and the kernel gradient along it
                let d = xi - sys.positions[j];
                let g = kernel::gradient(d, self.h);

                // Shared pair term m (P_i/rho_i^2 + P_j/rho_j^2) grad W
                let pair = self.m * (f[i] + f[j]) * g;

                // -------------------------
                // Equal and opposite: the reversed pair sees
                // grad W(-d) = -grad W(d)
                // -------------------------
                out[i] -= pair;
                out[j] += pair;
            }
        }
    }
}

/// Linear restoring force toward the origin: `a_i += -lambda * x_i`
/// Stands in for the star's self-gravity in this simplified model
pub struct Confinement {
    pub lambda: f64,
}

impl Acceleration for Confinement {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec3]) {
        for (a, x) in out.iter_mut().zip(&sys.positions) {
            *a -= self.lambda * *x;
        }
    }
}

/// Linear velocity damping: `a_i += -nu * v_i` (viscous dissipation)
pub struct Damping {
    pub nu: f64,
}

impl Acceleration for Damping {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec3]) {
        for (a, v) in out.iter_mut().zip(&sys.velocities) {
            *a -= self.nu * *v;
        }
    }
}
