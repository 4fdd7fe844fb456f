//! High-level runtime engine settings
//!
//! Selects the initial pressure policy and whether the loop guards against
//! non-finite values. Neither changes the numerical scheme itself.

use crate::configuration::config::{EngineConfig, InitialPressureConfig};

#[derive(Debug, Clone, Default)]
pub struct Engine {
    pub halt_on_divergence: bool, // false = reference behavior, never checks
    pub initial_pressure: InitialPressureConfig, // zero or kappa * rho^2 at t = 0
}

impl From<EngineConfig> for Engine {
    fn from(cfg: EngineConfig) -> Self {
        Self {
            halt_on_divergence: cfg.halt_on_divergence,
            initial_pressure: cfg.initial_pressure,
        }
    }
}
