//! Kernel-sum density estimation
//!
//! Estimates the local density at each sample point as a mass-weighted
//! sum of Gaussian kernel contributions from every particle. Each
//! sample's sum is independent of the others, so rows are evaluated in
//! parallel with rayon.

use rayon::prelude::*;

use crate::simulation::kernel;
use crate::simulation::separation::pairwise_deltas;
use crate::simulation::states::NVec3;

/// Density at each of the `samples` positions:
///
/// ```text
/// rho_i = sum_j m * W(samples[i] - particles[j], h)
/// ```
///
/// Strictly positive for h > 0 and a non-empty particle set, since the
/// Gaussian weight never vanishes. When `samples` is the particle set
/// itself, each particle's own j = i contribution is included; the
/// self-term keeps the estimate bounded away from zero when particles
/// cluster tightly.
pub fn density_at(samples: &[NVec3], particles: &[NVec3], m: f64, h: f64) -> Vec<f64> {
    let n = particles.len();
    if n == 0 { // no particles, no contributions
        return vec![0.0; samples.len()];
    }

    let deltas = pairwise_deltas(samples, particles);
    deltas
        .par_chunks(n)
        .map(|row| row.iter().map(|&d| m * kernel::weight(d, h)).sum())
        .collect()
}
