use sphsim::simulation::density::density_at;
use sphsim::simulation::eos;
use sphsim::simulation::kernel;
use sphsim::simulation::separation::pairwise_deltas;
use sphsim::{
    semi_implicit_euler, seed_cloud, velocity_verlet, AccelSet, Confinement, Damping,
    EngineConfig, FrameSnapshot, GifExporter, InitialConfig, IntegratorConfig, NVec3, Parameters,
    ParametersConfig, PressureForce, ScenarioConfig, System,
};

/// Build a simple 2-particle System separated along the x-axis
pub fn two_particle_system(dist: f64) -> System {
    System::new(
        vec![NVec3::zeros(), NVec3::new(dist, 0.0, 0.0)],
        vec![NVec3::zeros(); 2],
    )
}

/// Default physics parameters for tests
pub fn test_params() -> Parameters {
    Parameters {
        h: 1.0,
        k: 0.1,
        n: 1.0,
        lambda: 0.0,
        nu: 0.0,
        m: 1.0,
        dt: 0.01,
        n_steps: 1,
        seed: 42,
    }
}

/// Build a pressure-only AccelSet (no confinement, no damping)
pub fn pressure_set(p: &Parameters) -> AccelSet {
    AccelSet::new().with(PressureForce {
        h: p.h,
        m: p.m,
        k: p.k,
        n: p.n,
    })
}

// ==================================================================================
// Kernel tests
// ==================================================================================

#[test]
fn kernel_weight_positive_and_axis_symmetric() {
    let h = 0.7;
    let probes = [
        NVec3::new(0.0, 0.0, 0.0),
        NVec3::new(0.3, -0.2, 0.5),
        NVec3::new(1.5, 0.0, 0.0),
        NVec3::new(-0.4, 1.1, -0.9),
    ];

    for d in probes {
        let w = kernel::weight(d, h);
        assert!(w > 0.0, "weight not positive at {:?}", d);

        // Flipping the sign of any axis leaves the weight unchanged
        assert_eq!(w, kernel::weight(NVec3::new(-d.x, d.y, d.z), h));
        assert_eq!(w, kernel::weight(NVec3::new(d.x, -d.y, d.z), h));
        assert_eq!(w, kernel::weight(NVec3::new(d.x, d.y, -d.z), h));
    }
}

#[test]
fn kernel_weight_peaks_at_zero_separation() {
    let h = 1.0;
    let w0 = kernel::weight(NVec3::zeros(), h);
    assert!(w0.is_finite());
    assert!(w0 > kernel::weight(NVec3::new(0.1, 0.0, 0.0), h));
    assert!(w0 > kernel::weight(NVec3::new(0.0, -0.5, 0.3), h));
}

#[test]
fn kernel_gradient_antisymmetric() {
    let h = 0.5;
    let d = NVec3::new(0.2, -0.4, 0.1);

    let g_pos = kernel::gradient(d, h);
    let g_neg = kernel::gradient(-d, h);

    assert_eq!(g_pos, -g_neg, "gradient is not antisymmetric");
}

#[test]
fn kernel_gradient_zero_at_zero_separation() {
    let g = kernel::gradient(NVec3::zeros(), 0.3);
    assert_eq!(g, NVec3::zeros());
}

// ==================================================================================
// Separation tests
// ==================================================================================

#[test]
fn pairwise_deltas_shape_and_diagonal() {
    let query = vec![NVec3::new(1.0, 0.0, 0.0), NVec3::new(0.0, 2.0, 0.0)];
    let reference = vec![
        NVec3::new(1.0, 0.0, 0.0),
        NVec3::new(0.0, 2.0, 0.0),
        NVec3::new(0.0, 0.0, 3.0),
    ];

    let deltas = pairwise_deltas(&query, &reference);
    assert_eq!(deltas.len(), query.len() * reference.len());

    // Row-major: deltas[i * n + j] = query[i] - reference[j]
    assert_eq!(deltas[0], NVec3::zeros()); // query[0] vs reference[0]
    assert_eq!(deltas[1 * 3 + 1], NVec3::zeros()); // query[1] vs reference[1]
    assert_eq!(deltas[2], NVec3::new(1.0, 0.0, -3.0));
}

// ==================================================================================
// Density tests
// ==================================================================================

#[test]
fn density_positive_and_sized() {
    let sys = seed_cloud(5, 1.0, 11);
    let rho = density_at(&sys.positions, &sys.positions, 0.5, 0.4);

    assert_eq!(rho.len(), 5);
    for (i, &r) in rho.iter().enumerate() {
        assert!(r > 0.0, "density not positive for particle {}: {}", i, r);
    }
}

#[test]
fn density_permutation_invariant() {
    let positions = vec![
        NVec3::new(0.0, 0.0, 0.0),
        NVec3::new(0.3, 0.1, -0.2),
        NVec3::new(-0.5, 0.4, 0.2),
        NVec3::new(0.1, -0.6, 0.5),
    ];
    let perm = [2, 0, 3, 1];
    let permuted: Vec<NVec3> = perm.iter().map(|&i| positions[i]).collect();

    let rho = density_at(&positions, &positions, 1.0, 0.4);
    let rho_perm = density_at(&permuted, &permuted, 1.0, 0.4);

    for (slot, &src) in perm.iter().enumerate() {
        assert!(
            (rho_perm[slot] - rho[src]).abs() < 1e-12,
            "density changed under permutation: {} vs {}",
            rho_perm[slot],
            rho[src]
        );
    }
}

#[test]
fn density_single_particle_is_self_term() {
    let positions = vec![NVec3::new(0.2, -0.1, 0.7)];
    let m = 0.5;
    let h = 0.3;

    let rho = density_at(&positions, &positions, m, h);

    // Only the j = i contribution exists: m * W(0, h)
    assert_eq!(rho, vec![m * kernel::weight(NVec3::zeros(), h)]);
}

// ==================================================================================
// Equation-of-state tests
// ==================================================================================

#[test]
fn pressure_monotone_in_density() {
    let k = 0.1;
    let n = 1.0;

    let mut last = eos::pressure(0.5, k, n);
    for rho in [1.0, 2.0, 4.0, 10.0] {
        let p = eos::pressure(rho, k, n);
        assert!(p > last, "pressure not increasing at rho = {}", rho);
        last = p;
    }
}

// ==================================================================================
// Force tests
// ==================================================================================

#[test]
fn pressure_force_conserves_momentum() {
    let sys = System::new(
        vec![
            NVec3::new(0.0, 0.0, 0.0),
            NVec3::new(0.3, 0.1, -0.2),
            NVec3::new(-0.5, 0.4, 0.2),
        ],
        vec![NVec3::zeros(); 3],
    );
    let mut p = test_params();
    p.h = 0.4;
    let forces = pressure_set(&p);

    let mut acc = vec![NVec3::zeros(); 3];
    forces.accumulate_accels(sys.t, &sys, &mut acc);

    // Uniform mass, so net momentum change is m * sum of accelerations
    let net = p.m * (acc[0] + acc[1] + acc[2]);

    assert!(net.norm() < 1e-12, "Net momentum not zero: {:?}", net);
}

#[test]
fn pressure_force_pushes_particles_apart() {
    let sys = two_particle_system(1.0);
    let p = test_params();
    let forces = pressure_set(&p);

    let mut acc = vec![NVec3::zeros(); 2];
    forces.accumulate_accels(sys.t, &sys, &mut acc);

    // Repulsion: particle 0 accelerates toward -x, particle 1 toward +x
    assert!(acc[0].x < 0.0, "particle 0 not pushed away: {:?}", acc[0]);
    assert!(acc[1].x > 0.0, "particle 1 not pushed away: {:?}", acc[1]);
}

#[test]
fn single_particle_feels_only_confinement_and_damping() {
    let x = NVec3::new(0.5, -0.2, 0.1);
    let v = NVec3::new(0.0, 0.0, 1.0);
    let sys = System::new(vec![x], vec![v]);

    let lambda = 0.7;
    let nu = 0.3;
    let p = test_params();
    let forces = pressure_set(&p)
        .with(Confinement { lambda })
        .with(Damping { nu });

    let mut acc = vec![NVec3::zeros(); 1];
    forces.accumulate_accels(sys.t, &sys, &mut acc);

    // No pair exists, so the pressure term contributes exactly nothing
    let expected = -lambda * x - nu * v;
    assert!(
        (acc[0] - expected).norm() < 1e-15,
        "expected {:?}, got {:?}",
        expected,
        acc[0]
    );
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn euler_two_particles_repel_symmetrically() {
    // N = 2 at (0,0,0) and (1,0,0), at rest, pressure only
    let mut sys = two_particle_system(1.0);
    let p = test_params();
    let forces = pressure_set(&p);

    semi_implicit_euler(&mut sys, &forces, &p);

    assert_eq!(sys.step, 1);

    // The pair moved apart
    let gap = sys.positions[1].x - sys.positions[0].x;
    assert!(gap > 1.0, "particles did not separate: gap = {}", gap);

    // Exactly opposite velocities (2-body momentum conservation)
    let v_sum = sys.velocities[0] + sys.velocities[1];
    assert!(v_sum.norm() < 1e-15, "velocities not opposite: {:?}", v_sum);
}

#[test]
fn verlet_two_particles_repel_symmetrically() {
    let mut sys = two_particle_system(1.0);
    let p = test_params();
    let forces = pressure_set(&p);

    velocity_verlet(&mut sys, &forces, &p);

    let gap = sys.positions[1].x - sys.positions[0].x;
    assert!(gap > 1.0, "particles did not separate: gap = {}", gap);

    let v_sum = sys.velocities[0] + sys.velocities[1];
    assert!(v_sum.norm() < 1e-15, "velocities not opposite: {:?}", v_sum);
}

#[test]
fn euler_step_is_deterministic() {
    let p = Parameters {
        h: 0.2,
        k: 0.1,
        n: 1.0,
        lambda: 2.01,
        nu: 1.0,
        m: 0.05,
        dt: 0.02,
        n_steps: 5,
        seed: 123,
    };

    let forces_a = pressure_set(&p)
        .with(Confinement { lambda: p.lambda })
        .with(Damping { nu: p.nu });
    let forces_b = pressure_set(&p)
        .with(Confinement { lambda: p.lambda })
        .with(Damping { nu: p.nu });

    let mut sys_a = seed_cloud(30, 1.0, p.seed);
    let mut sys_b = seed_cloud(30, 1.0, p.seed);

    for _ in 0..p.n_steps {
        semi_implicit_euler(&mut sys_a, &forces_a, &p);
        semi_implicit_euler(&mut sys_b, &forces_b, &p);
    }

    assert_eq!(sys_a.step, p.n_steps);
    for i in 0..sys_a.len() {
        assert_eq!(sys_a.positions[i], sys_b.positions[i], "position {} diverged", i);
        assert_eq!(sys_a.velocities[i], sys_b.velocities[i], "velocity {} diverged", i);
    }
}

#[test]
fn step_counter_tracks_completed_steps() {
    let mut sys = two_particle_system(1.0);
    let p = test_params();
    let forces = pressure_set(&p);

    assert_eq!(sys.step, 0);
    assert_eq!(sys.t, 0.0);

    for k in 1..=3 {
        semi_implicit_euler(&mut sys, &forces, &p);
        assert_eq!(sys.step, k);
    }
    assert!((sys.t - 3.0 * p.dt).abs() < 1e-15);
}

// ==================================================================================
// Seeder tests
// ==================================================================================

#[test]
fn seeder_is_deterministic_per_seed() {
    let a = seed_cloud(10, 1.0, 5);
    let b = seed_cloud(10, 1.0, 5);
    let c = seed_cloud(10, 1.0, 6);

    assert_eq!(a.positions, b.positions);
    assert_ne!(a.positions, c.positions);

    // Cloud starts at rest, before any step
    assert!(a.velocities.iter().all(|v| *v == NVec3::zeros()));
    assert_eq!(a.t, 0.0);
    assert_eq!(a.step, 0);
}

// ==================================================================================
// Configuration tests
// ==================================================================================

fn valid_config() -> ScenarioConfig {
    ScenarioConfig {
        engine: EngineConfig {
            integrator: IntegratorConfig::Euler,
            render: false,
            frame_interval: None,
        },
        parameters: ParametersConfig {
            h: 0.1,
            k: 0.1,
            n: 1.0,
            lambda: 2.01,
            nu: 1.0,
            m: 0.005,
            dt: 0.04,
            n_steps: 300,
        },
        initial: InitialConfig {
            n_particles: 400,
            cloud_radius: 1.0,
            seed: 42,
        },
    }
}

#[test]
fn config_validation_accepts_valid_scenario() {
    assert!(valid_config().validate().is_ok());
}

#[test]
fn config_validation_rejects_bad_parameters() {
    let mut cfg = valid_config();
    cfg.parameters.h = 0.0;
    assert!(cfg.validate().is_err(), "h = 0 must be rejected");

    let mut cfg = valid_config();
    cfg.parameters.dt = 0.0;
    assert!(cfg.validate().is_err(), "dt = 0 must be rejected");

    let mut cfg = valid_config();
    cfg.parameters.n = 0.0;
    assert!(cfg.validate().is_err(), "n = 0 must be rejected");

    let mut cfg = valid_config();
    cfg.parameters.m = -1.0;
    assert!(cfg.validate().is_err(), "negative mass must be rejected");

    let mut cfg = valid_config();
    cfg.initial.n_particles = 0;
    assert!(cfg.validate().is_err(), "empty particle set must be rejected");
}

// ==================================================================================
// Sequence-export tests
// ==================================================================================

fn snapshot(step: usize) -> FrameSnapshot {
    FrameSnapshot {
        step,
        positions: vec![NVec3::zeros()],
        density: vec![1.0],
    }
}

#[test]
fn gif_exporter_rejects_out_of_order_frames() {
    let mut exporter = GifExporter::new("unused.gif", (64, 64), 40, 1.0);

    exporter.push(snapshot(2)).unwrap();
    assert_eq!(exporter.frame_count(), 1);

    // Re-delivering an earlier or equal step is a defect, not a reorder
    assert!(exporter.push(snapshot(1)).is_err());
    assert!(exporter.push(snapshot(2)).is_err());
    assert!(exporter.push(snapshot(3)).is_ok());
}
