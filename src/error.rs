use thiserror::Error;

/// Errors originating inside the simulation core.
///
/// The integrator has exactly one precondition: a positive time step. With a
/// zero or negative step the altitude never decreases toward zero, so the
/// loop cannot terminate; it is reported up front instead of hanging. The
/// step ceiling exists for the same reason — parameter sets with no landing
/// (zero gravity, upward launch) fail instead of spinning forever.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SimulationError {
    #[error("time_step must be > 0 for the integration to terminate, got {0}")]
    InvalidTimeStep(f64),

    #[error("projectile did not reach ground level within {0} steps")]
    StepLimitExceeded(u64),
}
