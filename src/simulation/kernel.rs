//! Gaussian smoothing kernel for SPH field estimates
//!
//! `weight` is the 3D Gaussian kernel W(d, h); `gradient` is its analytic
//! gradient with respect to the displacement vector. Both are pure
//! functions of their inputs and well-behaved at zero separation: the
//! weight is finite and maximal, the gradient is exactly zero.

use std::f64::consts::PI;

use crate::simulation::states::NVec3;

/// Gaussian kernel value
///
/// ```text
/// W(d, h) = (1 / (h sqrt(pi)))^3 * exp(-r^2 / h^2),   r = |d|
/// ```
///
/// Strictly positive for every separation and normalized to integrate
/// to 1 over all space for fixed `h`.
pub fn weight(d: NVec3, h: f64) -> f64 {
    let r2 = d.norm_squared();
    let c = 1.0 / (h * PI.sqrt());
    c * c * c * (-r2 / (h * h)).exp()
}

/// Gradient of [`weight`] with respect to the displacement `d`
///
/// Each component is `(-2 exp(-r^2/h^2) / (h^5 pi^1.5)) * d_axis`.
/// Antisymmetric under swapping the pair: `gradient(-d) = -gradient(d)`.
/// The pairwise force sum relies on that for Newton's-third-law symmetry.
pub fn gradient(d: NVec3, h: f64) -> NVec3 {
    let r2 = d.norm_squared();
    let scale = -2.0 * (-r2 / (h * h)).exp() / (h.powi(5) * PI.powf(1.5));
    scale * d
}
