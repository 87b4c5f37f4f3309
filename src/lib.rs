pub mod error;
pub mod io;
pub mod sim;

// Convenience re-exports for the common entry points
pub mod types {
    pub use crate::error::SimulationError;
    pub use crate::sim::state::{SimulationParameters, SimulationResult, State};
}

pub mod integrator {
    pub use crate::sim::integrator::euler_step;
    pub use crate::sim::runner::{simulate, simulate_trace, MAX_STEPS};
}
