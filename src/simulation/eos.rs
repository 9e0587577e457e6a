//! Polytropic equation of state
//!
//! Closes the momentum equation with P = k * rho^(1 + 1/n), monotone
//! increasing in rho for k > 0, n > 0: denser regions push back harder.

/// Pressure for a single density value
pub fn pressure(rho: f64, k: f64, n: f64) -> f64 {
    k * rho.powf(1.0 + 1.0 / n)
}

/// Pressure for every entry of a density field
pub fn pressure_field(rho: &[f64], k: f64, n: f64) -> Vec<f64> {
    rho.iter().map(|&r| pressure(r, k, n)).collect()
}
