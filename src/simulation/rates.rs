//! Right-hand sides of the toy-star equations
//!
//! Continuity (conservation form):
//!
//! ```text
//! d(rho)/dt = -d(rho v)/dx
//! ```
//!
//! Momentum, built as a sum of independent [`MomentumTerm`]s:
//!
//! ```text
//! dv/dt = -2 kappa d(rho)/dx   (pressure gradient, P = kappa rho^2)
//!         + g                  (external forcing, g = -lambda x)
//!         - nu v               (linear damping)
//! ```
//!
//! Both rates are evaluated from the same pre-step state.

use super::derivative::first_derivative;
use super::grid::Grid;
use super::params::Parameters;
use super::states::{Field, FluidState};

/// Collection of momentum contributions
/// Each term implements [`MomentumTerm`] and their contributions are summed
/// into a single dv/dt value per node
pub struct TermSet {
    terms: Vec<Box<dyn MomentumTerm + Send + Sync>>,
}

impl TermSet {
    /// Create an empty term set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add a momentum term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: MomentumTerm + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Pressure gradient, gravity and damping, in that order
    pub fn standard(params: &Parameters, grid: &Grid) -> Self {
        Self::new()
            .with(PressureGradient { kappa: params.kappa })
            .with(Gravity::new(params.lambda, grid))
            .with(LinearDamping { nu: params.nu })
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Compute dv/dt for `state`
    /// - `out[i]` is set to the sum of contributions from all terms
    pub fn accumulate(&self, state: &FluidState, grid: &Grid, out: &mut Field) {
        out.fill(0.0);
        for term in &self.terms {
            term.acceleration(state, grid, out);
        }
    }
}

impl Default for TermSet {
    fn default() -> Self {
        Self::new()
    }
}

/// A source of acceleration in the momentum equation
/// Implementations add their contribution into `out[i]` for each node
pub trait MomentumTerm {
    fn acceleration(&self, state: &FluidState, grid: &Grid, out: &mut Field);
}

/// -2 kappa d(rho)/dx, the gradient of P = kappa rho^2 per unit density
pub struct PressureGradient {
    pub kappa: f64,
}

impl MomentumTerm for PressureGradient {
    fn acceleration(&self, state: &FluidState, grid: &Grid, out: &mut Field) {
        let drho_dx = first_derivative(&state.density, grid.dx());
        out.axpy(-2.0 * self.kappa, &drho_dx, 1.0);
    }
}

/// Position-dependent, time-independent forcing g = -lambda x
pub struct Gravity {
    g: Field,
}

impl Gravity {
    /// Precompute the forcing field once for the grid
    pub fn new(lambda: f64, grid: &Grid) -> Self {
        Self {
            g: grid.x().map(|x| -lambda * x),
        }
    }

    pub fn field(&self) -> &Field {
        &self.g
    }
}

impl MomentumTerm for Gravity {
    fn acceleration(&self, _state: &FluidState, _grid: &Grid, out: &mut Field) {
        *out += &self.g;
    }
}

/// -nu v
pub struct LinearDamping {
    pub nu: f64,
}

impl MomentumTerm for LinearDamping {
    fn acceleration(&self, state: &FluidState, _grid: &Grid, out: &mut Field) {
        out.axpy(-self.nu, &state.velocity, 1.0);
    }
}

/// Time derivatives of both integrated fields at one instant
#[derive(Debug, Clone, PartialEq)]
pub struct Rates {
    pub density: Field,  // d(rho)/dt
    pub velocity: Field, // dv/dt
}

/// -d(rho v)/dx, derivative taken on the flux product
pub fn density_rate(state: &FluidState, grid: &Grid) -> Field {
    let flux = state.density.component_mul(&state.velocity);
    -first_derivative(&flux, grid.dx())
}

/// Evaluate both rates from the current state without modifying it
pub fn evaluate_rates(state: &FluidState, terms: &TermSet, grid: &Grid) -> Rates {
    let density = density_rate(state, grid);
    let mut velocity = Field::zeros(state.len());
    terms.accumulate(state, grid, &mut velocity);
    Rates { density, velocity }
}
