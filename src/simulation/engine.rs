//! High-level runtime engine settings
//!
//! Selects the integrator and the offline-rendering options used when
//! building and running a `Scenario`

use crate::configuration::config::IntegratorConfig;

#[derive(Debug, Clone)]
pub struct Engine {
    pub integrator: IntegratorConfig, // euler or verlet
    pub render: bool, // false = headless, true = write frames + gif
    pub frame_interval: usize, // capture every k-th step
}
