//! Deterministic flight simulation
//!
//! All gameplay logic lives here. This module must stay pure:
//! - No rendering, timers, or platform dependencies
//! - One writer per tick; invalid frame times are no-ops
//! - Terminal outcomes freeze the vehicle for good

pub mod catch_zone;
pub mod landing;
pub mod physics;
pub mod profile;
pub mod state;
pub mod tick;

pub use catch_zone::{CatchZoneGeometry, ContainmentBand, TowerLayout, tower_base};
pub use landing::{LandingVerdict, evaluate};
pub use physics::integrate;
pub use profile::{EnvironmentProfile, ProfileKey, Theme};
pub use state::{
    CrashReason, FailureReason, FlightOutcome, FlightState, InputFlags, Telemetry, VehicleState,
};
pub use tick::{FlightEvent, TickResult, tick};
