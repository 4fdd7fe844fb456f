//! Fixed-step forward Euler integration of the toy-star fluid
//!
//! One step evaluates both rates from the pre-step state, updates density
//! and velocity, re-derives pressure, then re-anchors the boundary nodes.
//! [`run`] repeats that floor(t_max / dt) times and samples frames.

use log::{debug, info};

use super::frames::FrameBuffer;
use super::grid::Grid;
use super::params::Parameters;
use super::rates::{evaluate_rates, TermSet};
use super::scenario::Scenario;
use super::states::FluidState;
use crate::error::{SimError, SimResult};

/// Advance `state` by one explicit Euler step of size `params.dt`.
/// Updates density, velocity, pressure, `state.t` and `state.step` in-place.
pub fn euler_step(state: &mut FluidState, terms: &TermSet, grid: &Grid, params: &Parameters) {
    let dt = params.dt;

    // Both rates from the pre-step state, before either field is written
    let rates = evaluate_rates(state, terms, grid);

    // rho_n+1 = rho_n + dt * d(rho)/dt,  v_n+1 = v_n + dt * dv/dt
    state.density.axpy(dt, &rates.density, 1.0);
    state.velocity.axpy(dt, &rates.velocity, 1.0);

    state.update_pressure(params.kappa);

    // Dirichlet anchoring every step, the one-sided stencils drift otherwise
    state.enforce_boundaries(params.kappa);

    state.t += dt;
    state.step += 1;
}

/// Result of a complete run: the shared grid, the captured frames and the
/// state after the last step
#[derive(Debug, Clone)]
pub struct Run {
    pub grid: Grid,
    pub frames: FrameBuffer,
    pub final_state: FluidState,
}

/// Integrate a scenario to `t_max`, capturing a frame after every step
/// whose index is a multiple of `sample_stride`
pub fn run(scenario: Scenario) -> SimResult<Run> {
    let Scenario {
        engine,
        parameters,
        grid,
        mut state,
        terms,
    } = scenario;

    let steps = parameters.steps();
    let stride = parameters.sample_stride;
    let mut frames = FrameBuffer::with_capacity(parameters.expected_frames());

    info!(
        "integrating {} nodes, dx = {:.6}, {} steps of dt = {}, frame every {} steps",
        grid.len(),
        grid.dx(),
        steps,
        parameters.dt,
        stride
    );

    for step in 0..steps {
        euler_step(&mut state, &terms, &grid, &parameters);

        if engine.halt_on_divergence && !state.is_finite() {
            return Err(SimError::Diverged { step, t: state.t });
        }

        if step % stride == 0 {
            frames.capture(step, &state);
            debug!(
                "frame {} at step {} (t = {:.4}), max density {:.6}",
                frames.len() - 1,
                step,
                state.t,
                state.density.max()
            );
        }
    }

    info!("captured {} frames, final t = {:.6}", frames.len(), state.t);

    Ok(Run {
        grid,
        frames,
        final_state: state,
    })
}
