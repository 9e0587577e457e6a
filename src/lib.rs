pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{System, NVec3};
pub use simulation::params::Parameters;
pub use simulation::forces::{Acceleration, AccelSet, PressureForce, Confinement, Damping};
pub use simulation::integrator::{semi_implicit_euler, velocity_verlet};
pub use simulation::seeder::seed_cloud;
pub use simulation::scenario::Scenario;

pub use configuration::config::{IntegratorConfig, EngineConfig, ParametersConfig, InitialConfig, ScenarioConfig};

pub use visualization::frame::{FrameSnapshot, FrameWriter};
pub use visualization::sequence::GifExporter;
pub use visualization::offline::run_offline;

pub use benchmark::benchmark::{bench_accel, bench_step, bench_step_curve};
