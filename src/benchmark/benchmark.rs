use std::time::Instant;

use crate::simulation::density::density_at;
use crate::simulation::forces::{AccelSet, Confinement, Damping, PressureForce};
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec3, System};

/// Helper to build a manual System of size `n`
fn make_system(n: usize) -> System {
    let mut positions = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        positions.push(NVec3::new(
            (i_f * 0.37).sin(),
            (i_f * 0.13).cos(),
            (i_f * 0.07).sin(),
        ));
    }

    System::new(positions, vec![NVec3::zeros(); n])
}

/// Default physics parameters for the benchmarks
fn make_params() -> Parameters {
    Parameters {
        h: 0.1,
        k: 0.1,
        n: 1.0,
        lambda: 2.01,
        nu: 1.0,
        m: 0.005,
        dt: 0.04,
        n_steps: 300,
        seed: 42,
    }
}

/// Full toy-star force set: pressure + confinement + damping
fn make_forces(p: &Parameters) -> AccelSet {
    AccelSet::new()
        .with(PressureForce {
            h: p.h,
            m: p.m,
            k: p.k,
            n: p.n,
        })
        .with(Confinement { lambda: p.lambda })
        .with(Damping { nu: p.nu })
}

/// Time the density estimate against the full acceleration assembly for
/// a range of system sizes. Both are direct n^2 sums; the acceleration
/// assembly dominates because it also walks every unordered pair for the
/// kernel gradients.
pub fn bench_accel() {
    // Different system sizes to test
    let ns = [100, 200, 400, 800, 1600, 3200];

    for n in ns {
        let sys = make_system(n);
        let params = make_params();
        let forces = make_forces(&params);

        let mut out = vec![NVec3::zeros(); n];

        // Warm up
        let _ = density_at(&sys.positions, &sys.positions, params.m, params.h);
        forces.accumulate_accels(0.0, &sys, &mut out);

        // Time the density estimate alone
        let t0 = Instant::now();
        let _ = density_at(&sys.positions, &sys.positions, params.m, params.h);
        let dt_density = t0.elapsed().as_secs_f64();

        // Time the full acceleration assembly
        let t1 = Instant::now();
        forces.accumulate_accels(0.0, &sys, &mut out);
        let dt_accel = t1.elapsed().as_secs_f64();

        println!(
            "N = {n:5}, density = {:8.6} s, accel = {:8.6} s",
            dt_density, dt_accel
        );
    }
}

/// Time full integrator steps for a range of system sizes
pub fn bench_step() {
    let ns = [100, 200, 400, 800, 1600, 3200];
    let steps = 3; // number of integrator steps per size (tune as needed)

    for n in ns {
        let mut sys = make_system(n);
        let params = make_params();
        let forces = make_forces(&params);

        // Warm-up
        semi_implicit_euler(&mut sys, &forces, &params);

        let t0 = Instant::now();
        for _ in 0..steps {
            semi_implicit_euler(&mut sys, &forces, &params);
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {:5}, step = {:8.6} s", n, per_step);
    }
}

/// Benchmark density and full steps over a fine grid of n
/// Paste output directly into a spreadsheet to graph
pub fn bench_step_curve() {
    println!("N,density_ms,step_ms");

    for n in (100..=3200).step_by(100) {
        // Small n: average over a few steps to smooth noise
        // Large n: only 1 step to avoid minutes of runtime
        let steps = if n <= 800 { 5 } else { 1 };

        let mut sys = make_system(n);
        let params = make_params();
        let forces = make_forces(&params);

        let t0 = Instant::now();
        for _ in 0..steps {
            let _ = density_at(&sys.positions, &sys.positions, params.m, params.h);
        }
        let ms_density = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        let t1 = Instant::now();
        for _ in 0..steps {
            semi_implicit_euler(&mut sys, &forces, &params);
        }
        let ms_step = t1.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6},{:.6}", n, ms_density, ms_step);
    }
}
