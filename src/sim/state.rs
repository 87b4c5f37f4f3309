use nalgebra::Vector2;

// ---------------------------------------------------------------------------
// Simulation parameters: the seven scalars read from simsetting.txt
// ---------------------------------------------------------------------------

/// Input parameters for one simulation run.
///
/// Every field defaults to 0.0; a settings file only has to list the keys it
/// cares about. No range validation is applied beyond the time-step
/// precondition checked by the runner — a negative mass is accepted and
/// produces whatever the formula yields.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SimulationParameters {
    pub gravity: f64,           // m/s^2, acceleration magnitude
    pub mass: f64,              // kg
    pub velocity: f64,          // m/s, initial speed magnitude
    pub angle: f64,             // rad, measured from the vertical axis
    pub height: f64,            // m, initial altitude
    pub air_resistance: f64,    // 1/m, linear drag coefficient
    pub time_step: f64,         // s, fixed integration interval
}

// ---------------------------------------------------------------------------
// Projectile state
// ---------------------------------------------------------------------------

/// Instantaneous projectile state. `pos.x` is downrange distance, `pos.y`
/// altitude.
#[derive(Debug, Clone, Copy)]
pub struct State {
    pub time: f64,
    pub pos: Vector2<f64>,    // m
    pub vel: Vector2<f64>,    // m/s
}

impl State {
    /// State at the muzzle, before any integration step.
    ///
    /// The launch angle is measured from the vertical axis: the horizontal
    /// component uses `sin`, the vertical component `cos`. This matches the
    /// established cannonsim convention and must not be "corrected" to the
    /// horizontal-from-ground one — doing so would change every trajectory.
    pub fn launch(params: &SimulationParameters) -> State {
        State {
            time: 0.0,
            pos: Vector2::new(0.0, params.height),
            vel: Vector2::new(
                params.velocity * params.angle.sin(),
                params.velocity * params.angle.cos(),
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// Simulation result
// ---------------------------------------------------------------------------

/// Final state when the projectile reaches ground level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationResult {
    pub distance: f64,    // m, final horizontal position
    pub final_vx: f64,    // m/s
    pub final_vy: f64,    // m/s
}

impl SimulationResult {
    pub fn from_state(state: &State) -> SimulationResult {
        SimulationResult {
            distance: state.pos.x,
            final_vx: state.vel.x,
            final_vy: state.vel.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameters_default_to_zero() {
        let p = SimulationParameters::default();
        assert_eq!(p.gravity, 0.0);
        assert_eq!(p.mass, 0.0);
        assert_eq!(p.velocity, 0.0);
        assert_eq!(p.angle, 0.0);
        assert_eq!(p.height, 0.0);
        assert_eq!(p.air_resistance, 0.0);
        assert_eq!(p.time_step, 0.0);
    }

    #[test]
    fn launch_uses_sin_for_horizontal_and_cos_for_vertical() {
        let params = SimulationParameters {
            velocity: 10.0,
            angle: 0.3,
            height: 2.0,
            ..Default::default()
        };
        let s = State::launch(&params);
        assert_eq!(s.pos.x, 0.0);
        assert_eq!(s.pos.y, 2.0);
        assert_eq!(s.vel.x, 10.0 * 0.3_f64.sin());
        assert_eq!(s.vel.y, 10.0 * 0.3_f64.cos());
    }

    #[test]
    fn vertical_launch_has_no_horizontal_velocity() {
        // angle = 0 means straight up under this convention
        let params = SimulationParameters {
            velocity: 25.0,
            height: 1.0,
            ..Default::default()
        };
        let s = State::launch(&params);
        assert_eq!(s.vel.x, 0.0);
        assert_eq!(s.vel.y, 25.0);
    }
}
