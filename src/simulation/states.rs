//! Core state types for the toy-star fluid.
//!
//! - `Field` is one scalar value per grid node (nalgebra `DVector<f64>`)
//! - `FluidState` holds density, velocity, the derived pressure,
//!   the current simulation time `t` and the number of completed steps

use nalgebra::DVector;

use crate::configuration::config::InitialPressureConfig;

pub type Field = DVector<f64>;

/// Density anchored at both boundary nodes after every step
pub const BOUNDARY_DENSITY: f64 = 1.0;
/// Velocity anchored at both boundary nodes after every step
pub const BOUNDARY_VELOCITY: f64 = 0.0;

#[derive(Debug, Clone, PartialEq)]
pub struct FluidState {
    pub density: Field,  // rho
    pub velocity: Field, // v
    pub pressure: Field, // P = kappa * rho^2, derived
    pub t: f64,          // time
    pub step: usize,     // completed steps
}

impl FluidState {
    /// Uniform fluid at rest: rho = 1, v = 0
    pub fn at_rest(nodes: usize, kappa: f64, initial_pressure: InitialPressureConfig) -> Self {
        let mut state = Self {
            density: Field::from_element(nodes, 1.0),
            velocity: Field::zeros(nodes),
            pressure: Field::zeros(nodes),
            t: 0.0,
            step: 0,
        };
        if initial_pressure == InitialPressureConfig::Consistent {
            state.update_pressure(kappa);
        }
        state
    }

    /// Re-derive pressure elementwise from the current density
    pub fn update_pressure(&mut self, kappa: f64) {
        self.pressure
            .iter_mut()
            .zip(self.density.iter())
            .for_each(|(p, rho)| *p = kappa * rho * rho);
    }

    /// Anchor both boundary nodes. Pressure at those nodes is re-derived
    /// from the anchored density so every stored frame stays consistent.
    pub fn enforce_boundaries(&mut self, kappa: f64) {
        let last = self.density.len() - 1;
        for i in [0, last] {
            self.density[i] = BOUNDARY_DENSITY;
            self.velocity[i] = BOUNDARY_VELOCITY;
            self.pressure[i] = kappa * BOUNDARY_DENSITY * BOUNDARY_DENSITY;
        }
    }

    /// True when every density and velocity value is finite
    pub fn is_finite(&self) -> bool {
        self.density.iter().chain(self.velocity.iter()).all(|v| v.is_finite())
    }

    pub fn len(&self) -> usize {
        self.density.len()
    }

    pub fn is_empty(&self) -> bool {
        self.density.is_empty()
    }
}
