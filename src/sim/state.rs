//! Flight state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::catch_zone::CatchZoneGeometry;
use super::profile::EnvironmentProfile;
use crate::consts::*;
use crate::settings::Settings;

/// Continuous input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFlags {
    pub thrust: bool,
    pub steer_left: bool,
    pub steer_right: bool,
}

impl InputFlags {
    pub fn is_steering(&self) -> bool {
        self.steer_left || self.steer_right
    }
}

/// Kinematic state of the falling vehicle (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleState {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    /// Bank angle (radians, signed, negative = leaning left)
    pub rotation: f32,
    pub engines_on: bool,
}

impl VehicleState {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self {
            position,
            velocity,
            acceleration: Vec2::ZERO,
            rotation: 0.0,
            engines_on: false,
        }
    }

    /// Spawn point for a play field of the given width
    pub fn spawn(field_width: f32) -> Self {
        Self::new(
            Vec2::new(field_width / 2.0 + START_X_OFFSET, START_Y),
            Vec2::new(0.0, START_VELOCITY_Y),
        )
    }

    #[inline]
    pub fn vertical_speed(&self) -> f32 {
        self.velocity.y.abs()
    }

    /// Stop all motion in place
    pub fn freeze(&mut self) {
        self.velocity = Vec2::ZERO;
        self.acceleration = Vec2::ZERO;
        self.engines_on = false;
    }
}

/// Why the vehicle crashed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashReason {
    /// Fell past the arms and hit the ground
    Missed,
}

/// Why a catch attempt failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureReason {
    TooFast,
}

/// Flight result; leaves `Flying` exactly once and never reverts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum FlightOutcome {
    #[default]
    Flying,
    Crashed { reason: CrashReason },
    LandedSuccess { speed: f32 },
    LandedFailure {
        reason: FailureReason,
        speed: f32,
    },
}

impl FlightOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, FlightOutcome::Flying)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FlightOutcome::LandedSuccess { .. })
    }

    /// Vertical speed measured at the catch attempt
    pub fn landing_speed(&self) -> Option<f32> {
        match self {
            FlightOutcome::LandedSuccess { speed } | FlightOutcome::LandedFailure { speed, .. } => {
                Some(*speed)
            }
            _ => None,
        }
    }

    /// Short player-facing description
    pub fn message(&self) -> &'static str {
        match self {
            FlightOutcome::Flying => "In flight",
            FlightOutcome::Crashed { .. } => "Mission failed - missed the arms",
            FlightOutcome::LandedSuccess { .. } => "Mission success - caught by the tower",
            FlightOutcome::LandedFailure { .. } => "Mission failed - landing speed too high",
        }
    }
}

/// HUD readout
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Telemetry {
    /// Vertical speed magnitude
    pub speed: f32,
    /// Height above the catch point, never negative
    pub altitude: f32,
    /// Speed currently above the landing limit
    pub over_limit: bool,
}

/// Complete flight state for one session
#[derive(Debug, Clone, Serialize)]
pub struct FlightState {
    pub profile: EnvironmentProfile,
    pub catch_zone: CatchZoneGeometry,
    /// Vehicle center y at which it touches the ground
    pub ground_y: f32,
    pub vehicle: VehicleState,
    pub outcome: FlightOutcome,
    /// Simulation tick counter (advancing ticks only)
    pub time_ticks: u64,
}

impl FlightState {
    /// Fresh flight at the spawn point
    pub fn new(profile: EnvironmentProfile, settings: &Settings) -> Self {
        let field = settings.field;
        Self {
            profile,
            catch_zone: CatchZoneGeometry::for_field(field.width, field.height, settings.scale()),
            ground_y: field.ground_surface() - VEHICLE_HEIGHT / 2.0,
            vehicle: VehicleState::spawn(field.width),
            outcome: FlightOutcome::Flying,
            time_ticks: 0,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn telemetry(&self) -> Telemetry {
        let speed = self.vehicle.vertical_speed();
        Telemetry {
            speed,
            altitude: (self.catch_zone.center.y - self.vehicle.position.y).max(0.0),
            over_limit: speed > self.profile.max_landing_speed,
        }
    }
}
