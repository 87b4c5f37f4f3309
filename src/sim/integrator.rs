use crate::sim::state::{SimulationParameters, State};

// ---------------------------------------------------------------------------
// Explicit Euler step with sequential in-place velocity updates
// ---------------------------------------------------------------------------

/// Advance the state by one fixed time step.
///
/// The update order is part of the contract: gravity first, then drag on
/// `vx`, then drag on the post-gravity `vy`, then position from the freshly
/// updated velocities. Each line reads the value produced by the line above
/// it within the same step (sequential update, not a snapshot update) —
/// reordering or reassociating these expressions changes the trajectory.
pub fn euler_step(state: &mut State, params: &SimulationParameters) {
    let dt = params.time_step;

    state.vel.y -= params.gravity * params.mass * dt;
    state.vel.x -= state.vel.x * params.air_resistance * dt;
    state.vel.y -= state.vel.y * params.air_resistance * dt;
    state.pos.x += state.vel.x * dt;
    state.pos.y += state.vel.y * dt;
    state.time += dt;
}
