//! Fixed-step time integrators for the SPH system
//!
//! Provides the semi-implicit (symplectic) Euler step used by default
//! and a velocity-Verlet alternative, both driven by `AccelSet` and
//! `Parameters`. Step count is fixed; there is no adaptive stepping.

use super::forces::AccelSet;
use super::params::Parameters;
use super::states::{System, NVec3};

/// Advance the system by one step using semi-implicit Euler
///
/// Velocity is updated from the acceleration at the pre-step state, then
/// position is updated with the freshly updated velocity:
///
/// ```text
/// v_n+1 = v_n + dt * a(x_n, v_n)
/// x_n+1 = x_n + dt * v_n+1
/// ```
///
/// The position update must use `v_n+1`, not `v_n`; that ordering is
/// what separates the scheme from plain explicit Euler and gives it its
/// symplectic energy behavior.
pub fn semi_implicit_euler(sys: &mut System, forces: &AccelSet, params: &Parameters) {
    let n = sys.len();
    if n == 0 { // no particles, return
        return;
    }

    let dt = params.dt; // time step dt

    // a_n from (x_n, v_n) at time t_n
    let mut acc = vec![NVec3::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut acc);

    // Kick: v_n+1 = v_n + dt * a_n
    for (v, a) in sys.velocities.iter_mut().zip(acc.iter()) {
        *v += dt * *a;
    }

    // Drift with the new velocity: x_n+1 = x_n + dt * v_n+1
    for (x, v) in sys.positions.iter_mut().zip(sys.velocities.iter()) {
        *x += dt * *v;
    }

    // Advance time and the step counter
    sys.t += dt;
    sys.step += 1;
}

/// Advance the system by one step using velocity-Verlet
/// Uses two force evaluations per step: half-kick, full drift, half-kick
pub fn velocity_verlet(sys: &mut System, forces: &AccelSet, params: &Parameters) {
    let n = sys.len();
    if n == 0 { // no particles, return
        return;
    }

    let dt = params.dt; // time step dt
    let half_dt = 0.5 * dt; // half step dt/2

    // a_n from (x_n, v_n) at time t_n
    let mut a_old = vec![NVec3::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut a_old);

    // Kick: v_n+1/2 = v_n + (dt/2) * a_n
    for (v, a) in sys.velocities.iter_mut().zip(a_old.iter()) {
        *v += half_dt * *a;
    }

    // Drift: x_n+1 = x_n + dt * v_n+1/2
    for (x, v) in sys.positions.iter_mut().zip(sys.velocities.iter()) {
        *x += dt * *v;
    }

    // Advance time: t_n+1 = t_n + dt
    sys.t += dt;

    // a_n+1 from x_n+1 at time t_n+1
    let mut a_new = vec![NVec3::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut a_new);

    // Second kick: v_n+1 = v_n+1/2 + (dt/2) * a_n+1
    for (v, a) in sys.velocities.iter_mut().zip(a_new.iter()) {
        *v += half_dt * *a;
    }

    sys.step += 1;
}
