use crate::error::SimulationError;
use crate::sim::integrator::euler_step;
use crate::sim::state::{SimulationParameters, SimulationResult, State};

// ---------------------------------------------------------------------------
// Full simulation loop: launch to ground contact
// ---------------------------------------------------------------------------

/// Safety ceiling on iteration count. Only reachable for parameter sets that
/// cannot terminate (e.g. zero gravity with an upward launch); the reference
/// scenario lands in well under 10,000 steps.
pub const MAX_STEPS: u64 = 100_000_000;

/// Run the simulation until the projectile returns to ground level.
///
/// Pure and deterministic: identical parameters produce bit-identical
/// results. The step that carries `y` across zero is kept in full — the
/// reported landing state is whatever the state is after that step, with no
/// interpolation back to the exact crossing. If `height <= 0` the loop never
/// runs and the result is the initial velocity components with distance 0.
pub fn simulate(params: &SimulationParameters) -> Result<SimulationResult, SimulationError> {
    if params.time_step <= 0.0 {
        return Err(SimulationError::InvalidTimeStep(params.time_step));
    }

    let mut state = State::launch(params);
    let mut steps: u64 = 0;

    while state.pos.y > 0.0 {
        if steps >= MAX_STEPS {
            return Err(SimulationError::StepLimitExceeded(MAX_STEPS));
        }
        euler_step(&mut state, params);
        steps += 1;
    }

    Ok(SimulationResult::from_state(&state))
}

/// Like [`simulate`], but records one state snapshot per step (including the
/// launch state) for plotting.
pub fn simulate_trace(
    params: &SimulationParameters,
) -> Result<(SimulationResult, Vec<State>), SimulationError> {
    if params.time_step <= 0.0 {
        return Err(SimulationError::InvalidTimeStep(params.time_step));
    }

    let mut state = State::launch(params);
    let mut trajectory = vec![state];

    while state.pos.y > 0.0 {
        if trajectory.len() as u64 > MAX_STEPS {
            return Err(SimulationError::StepLimitExceeded(MAX_STEPS));
        }
        euler_step(&mut state, params);
        trajectory.push(state);
    }

    Ok((SimulationResult::from_state(&state), trajectory))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
