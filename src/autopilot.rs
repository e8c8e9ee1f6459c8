//! Demo pilots
//!
//! Pilots read the flight state and produce input flags, standing in for a
//! player in demo/idle mode and in the headless runner.

use crate::consts::*;
use crate::sim::{FlightState, InputFlags};

pub trait Pilot {
    fn name(&self) -> &str;
    fn act(&mut self, state: &FlightState) -> InputFlags;
}

/// Never touches the controls
pub struct Freefall;

impl Pilot for Freefall {
    fn name(&self) -> &str {
        "freefall"
    }

    fn act(&mut self, _state: &FlightState) -> InputFlags {
        InputFlags::default()
    }
}

/// Steers over the catch point and rides a braking curve down to it
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Target arrival speed as a fraction of the landing limit
    pub arrival_fraction: f32,
    /// Horizontal velocity wanted per unit of offset from the catch point
    pub lateral_gain: f32,
    /// Fastest horizontal correction the pilot will ask for
    pub max_lateral_speed: f32,
    /// Tolerated horizontal velocity error before steering
    pub lateral_deadband: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            arrival_fraction: 0.6,
            lateral_gain: 2.0,
            max_lateral_speed: 150.0,
            lateral_deadband: 10.0,
        }
    }
}

impl Autopilot {
    /// Highest vertical speed from which the vehicle can still brake to the
    /// arrival speed within `distance`, using half the spare engine authority.
    pub fn allowed_descent_speed(&self, state: &FlightState, distance: f32) -> f32 {
        let arrival = state.profile.max_landing_speed * self.arrival_fraction;
        let braking = 0.5 * (ENGINE_THRUST.abs() - state.profile.gravity);
        if braking <= 0.0 {
            return arrival;
        }
        (arrival * arrival + 2.0 * braking * distance.max(0.0)).sqrt()
    }
}

impl Pilot for Autopilot {
    fn name(&self) -> &str {
        "autopilot"
    }

    fn act(&mut self, state: &FlightState) -> InputFlags {
        if state.is_terminal() {
            return InputFlags::default();
        }
        let target = state.catch_zone.center;
        let pos = state.vehicle.position;
        let vel = state.vehicle.velocity;

        let max_vx = self.max_lateral_speed;
        let desired_vx = ((target.x - pos.x) * self.lateral_gain).clamp(-max_vx, max_vx);
        let error = desired_vx - vel.x;

        let distance = target.y - pos.y;
        let thrust =
            distance > -CENTER_TOLERANCE && vel.y > self.allowed_descent_speed(state, distance);

        InputFlags {
            thrust,
            steer_left: error < -self.lateral_deadband,
            steer_right: error > self.lateral_deadband,
        }
    }
}
