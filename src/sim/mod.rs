pub mod integrator;
pub mod runner;
pub mod state;

pub use runner::{simulate, simulate_trace};
