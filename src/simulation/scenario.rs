//! Build a fully-initialized, validated run from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - the fixed grid (`Grid`)
//! - initial fluid state (`FluidState` at rest, t = 0)
//! - active momentum terms (`TermSet`)
//!
//! All configuration errors surface here, before any stepping.

use crate::configuration::config::ScenarioConfig;
use crate::error::SimResult;
use crate::simulation::engine::Engine;
use crate::simulation::grid::Grid;
use crate::simulation::params::Parameters;
use crate::simulation::rates::TermSet;
use crate::simulation::states::FluidState;

/// Runtime bundle consumed by [`run`](crate::simulation::integrator::run)
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub grid: Grid,
    pub state: FluidState,
    pub terms: TermSet,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> SimResult<Self> {
        let grid = Grid::new(cfg.grid.half_width, cfg.grid.nodes)?;

        let parameters = Parameters::from(cfg.parameters);
        parameters.validate()?;

        let engine = Engine::from(cfg.engine);

        // Initial state: uniform density at rest
        let state = FluidState::at_rest(grid.len(), parameters.kappa, engine.initial_pressure);

        // Momentum terms: pressure gradient, gravity, damping
        let terms = TermSet::standard(&parameters, &grid);

        Ok(Self {
            engine,
            parameters,
            grid,
            state,
            terms,
        })
    }
}
