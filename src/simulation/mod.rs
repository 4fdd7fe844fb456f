pub mod states;
pub mod grid;
pub mod derivative;
pub mod params;
pub mod engine;
pub mod rates;
pub mod frames;
pub mod integrator;
pub mod scenario;
