pub mod simulation;
pub mod configuration;
pub mod output;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Field, FluidState, BOUNDARY_DENSITY, BOUNDARY_VELOCITY};
pub use simulation::grid::Grid;
pub use simulation::derivative::{first_derivative, first_derivative_into};
pub use simulation::rates::{evaluate_rates, density_rate, Rates, MomentumTerm, TermSet, PressureGradient, Gravity, LinearDamping};
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;
pub use simulation::frames::{Frame, FrameBuffer};
pub use simulation::integrator::{euler_step, run, Run};
pub use simulation::scenario::Scenario;

pub use configuration::config::{ScenarioConfig, EngineConfig, GridConfig, ParametersConfig, InitialPressureConfig};

pub use output::export::{export_run, write_csv, write_yaml};

pub use benchmark::benchmark::{bench_step_curve, time_steps};

pub use error::{SimError, SimResult};
