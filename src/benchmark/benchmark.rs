use std::time::Instant;

use crate::configuration::config::InitialPressureConfig;
use crate::simulation::grid::Grid;
use crate::simulation::integrator::euler_step;
use crate::simulation::params::Parameters;
use crate::simulation::rates::TermSet;
use crate::simulation::states::FluidState;

/// Helper to build reference parameters with a small, stable step
fn make_params() -> Parameters {
    Parameters {
        kappa: 0.1,
        lambda: 2.01,
        nu: 1.0,
        dt: 1.0e-5,
        t_max: 1.0,
        sample_stride: 20,
    }
}

/// Time `steps` Euler steps on a grid of `nodes` points, returns ms per step
pub fn time_steps(nodes: usize, steps: usize) -> Option<f64> {
    let grid = Grid::new(1.0, nodes).ok()?;
    let params = make_params();
    let terms = TermSet::standard(&params, &grid);
    let mut state = FluidState::at_rest(grid.len(), params.kappa, InitialPressureConfig::Zero);

    // Warm-up one step
    euler_step(&mut state, &terms, &grid, &params);

    let t0 = Instant::now();
    for _ in 0..steps {
        euler_step(&mut state, &terms, &grid, &params);
    }
    Some(t0.elapsed().as_secs_f64() * 1000.0 / steps.max(1) as f64)
}

/// Benchmark `euler_step` for a range of grid sizes
/// Paste output directly into a spreadsheet to graph
pub fn bench_step_curve() {
    println!("N,step_ms");

    // Doubling node counts
    let mut nodes = 100;
    while nodes <= 102_400 {
        // Small grids: average over many steps to smooth noise
        let steps = if nodes <= 3200 { 1000 } else { 100 };
        if let Some(ms) = time_steps(nodes, steps) {
            println!("{},{:.6}", nodes, ms);
        }
        nodes *= 2;
    }
}
