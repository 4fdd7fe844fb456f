//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - pressure response, forcing strength and damping (`kappa`, `lambda`, `nu`),
//! - fixed step size and end time,
//! - frame sampling stride

use crate::configuration::config::ParametersConfig;
use crate::error::{invalid_config, SimResult};

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub kappa: f64,           // pressure response, P = kappa * rho^2
    pub lambda: f64,          // gravitational forcing, g = -lambda * x
    pub nu: f64,              // linear damping
    pub dt: f64,              // step size
    pub t_max: f64,           // time end
    pub sample_stride: usize, // steps between captured frames
}

impl Parameters {
    /// Check the ranges the explicit scheme needs before any stepping
    pub fn validate(&self) -> SimResult<()> {
        for (field, value) in [("parameters.kappa", self.kappa), ("parameters.lambda", self.lambda), ("parameters.nu", self.nu)] {
            if !value.is_finite() {
                return Err(invalid_config(field, format!("must be finite, got {value}")));
            }
        }
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(invalid_config("parameters.dt", format!("must be positive, got {}", self.dt)));
        }
        if !self.t_max.is_finite() || self.t_max <= 0.0 {
            return Err(invalid_config("parameters.t_max", format!("must be positive, got {}", self.t_max)));
        }
        if self.sample_stride < 1 {
            return Err(invalid_config("parameters.sample_stride", "must be at least 1"));
        }
        Ok(())
    }

    /// Total number of Euler steps, floor(t_max / dt)
    pub fn steps(&self) -> usize {
        (self.t_max / self.dt).floor() as usize
    }

    /// Number of frames the loop will capture (steps 0, stride, 2*stride, ...)
    pub fn expected_frames(&self) -> usize {
        self.steps().div_ceil(self.sample_stride)
    }
}

impl From<ParametersConfig> for Parameters {
    fn from(cfg: ParametersConfig) -> Self {
        Self {
            kappa: cfg.kappa,
            lambda: cfg.lambda,
            nu: cfg.nu,
            dt: cfg.dt,
            t_max: cfg.t_max,
            sample_stride: cfg.sample_stride,
        }
    }
}
