//! Deterministic initial-condition generation
//!
//! Seeds the particle cloud: standard-normal positions scaled by the
//! cloud radius, zero velocities. The same seed always reproduces the
//! same cloud, which reproducible runs and the test suite rely on.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

use crate::simulation::states::{System, NVec3};

/// Build the initial system: `n` particles in a Gaussian cloud of the
/// given radius, all velocities zero, at t = 0 with no steps taken
pub fn seed_cloud(n: usize, radius: f64, seed: u64) -> System {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut positions = Vec::with_capacity(n);
    for _ in 0..n {
        let x: f64 = StandardNormal.sample(&mut rng);
        let y: f64 = StandardNormal.sample(&mut rng);
        let z: f64 = StandardNormal.sample(&mut rng);
        positions.push(radius * NVec3::new(x, y, z));
    }

    System::new(positions, vec![NVec3::zeros(); n])
}
