//! Configuration types for loading toy-star scenarios from YAML.
//!
//! A scenario is a thin, `serde`-deserializable description of one run:
//!
//! - [`EngineConfig`]     – run-time switches (divergence guard, initial pressure)
//! - [`GridConfig`]       – domain half-width and node count
//! - [`ParametersConfig`] – physical coefficients and time-stepping controls
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every section is optional; missing sections and fields fall back to the
//! reference run.
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   halt_on_divergence: false   # stop with an error on non-finite values
//!   initial_pressure: zero      # or "consistent" (kappa * rho^2 at t = 0)
//!
//! grid:
//!   half_width: 1.0             # domain is [-L, L]
//!   nodes: 200                  # N >= 3
//!
//! parameters:
//!   kappa: 0.1                  # pressure response, P = kappa * rho^2
//!   lambda: 2.01                # gravitational forcing, g = -lambda * x
//!   nu: 1.0                     # linear damping
//!   dt: 0.0005                  # time step
//!   t_max: 2.0                  # total simulated time
//!   sample_stride: 20           # steps between captured frames
//! ```
//!
//! Values are validated when the runtime [`Scenario`](crate::Scenario) is built,
//! not here.

use serde::Deserialize;

/// How the pressure field is initialized before the first step
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitialPressureConfig {
    /// Pressure starts at zero everywhere and is first derived after step 0
    #[default]
    #[serde(rename = "zero")]
    Zero,

    /// Pressure starts as kappa * rho^2 of the initial density
    #[serde(rename = "consistent")]
    Consistent,
}

/// Engine-level switches that do not change the numerical scheme
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub halt_on_divergence: bool, // check for non-finite density/velocity after every step
    pub initial_pressure: InitialPressureConfig,
}

/// Spatial domain
#[derive(Deserialize, Debug, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    pub half_width: f64, // L, domain spans [-L, L]
    pub nodes: usize,    // N
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            half_width: 1.0,
            nodes: 200,
        }
    }
}

/// Physical coefficients and time-stepping controls
#[derive(Deserialize, Debug, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct ParametersConfig {
    pub kappa: f64,           // pressure-response coefficient
    pub lambda: f64,          // gravitational-forcing strength
    pub nu: f64,              // linear damping coefficient
    pub dt: f64,              // time step size
    pub t_max: f64,           // total simulated time
    pub sample_stride: usize, // steps between frame captures
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            kappa: 0.1,
            lambda: 2.01,
            nu: 1.0,
            dt: 0.0005,
            t_max: 2.0,
            sample_stride: 20,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub grid: GridConfig,
    pub parameters: ParametersConfig,
}

impl ScenarioConfig {
    /// Parse a scenario from YAML text
    pub fn from_yaml_str(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }
}
