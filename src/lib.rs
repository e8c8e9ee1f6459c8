//! Tower Catch - a 2D landing mini-game
//!
//! A vehicle falls toward a launch tower and must be steered and throttled
//! into the gap between the tower's two catching arms before it hits the ground.
//!
//! Core modules:
//! - `sim`: Deterministic flight simulation (physics, catch zone, landing verdicts)
//! - `session`: Session start, terminal-event finalization and profile chaining
//! - `input`: Keyboard/touch mapping to per-tick input flags
//! - `autopilot`: Demo pilots that fly the simulation without a player
//! - `settings`: Explicit display/input configuration

pub mod autopilot;
pub mod error;
pub mod input;
pub mod session;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use session::{Campaign, DelayedFinalization, FinalizeTicket, SessionId, SessionSummary};
pub use settings::{DisplayMode, InputMode, Settings};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep used by the native runner (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Cap on physics steps inside one core tick (10 s of frame time)
    pub const MAX_STEPS_PER_TICK: u32 = 600;

    /// Default play field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;
    /// Ground surface sits this far above the bottom of the play field
    pub const GROUND_OFFSET: f32 = 30.0;

    /// Vehicle body size (not affected by display scale)
    pub const VEHICLE_WIDTH: f32 = 20.0;
    pub const VEHICLE_HEIGHT: f32 = 60.0;
    /// Spawn point relative to the top-center of the field
    pub const START_X_OFFSET: f32 = -130.0;
    pub const START_Y: f32 = 30.0;
    pub const START_VELOCITY_Y: f32 = 60.0;

    /// Engine acceleration (negative = upward, y grows downward)
    pub const ENGINE_THRUST: f32 = -250.0;
    /// Horizontal acceleration while steering
    pub const STEER_ACCEL: f32 = 800.0;
    /// Horizontal speed cap while steering
    pub const HORIZONTAL_SPEED: f32 = 220.0;
    /// Linear horizontal deceleration while not steering (units/s²)
    pub const HORIZONTAL_DRAG: f32 = 100.0;
    /// Bank angle while steering (radians)
    pub const ROTATION_SPEED: f32 = 0.08;
    /// Per-tick multiplier pulling rotation back to upright
    pub const ROTATION_DAMPING: f32 = 0.95;

    /// Fastest vertical speed that still counts as a catch
    pub const MAX_LANDING_SPEED: f32 = 80.0;

    /// Tower layout (unscaled)
    pub const TOWER_BASE_OFFSET: f32 = 50.0;
    pub const TOWER_WIDTH: f32 = 35.0;
    pub const TOWER_HEIGHT: f32 = 350.0;
    pub const ARM_LENGTH: f32 = 70.0;
    pub const ARM_WIDTH: f32 = 10.0;
    pub const ARM_SPACING: f32 = 35.0;
    pub const CATCH_ZONE_WIDTH: f32 = 60.0;

    /// Extra horizontal slack on each side of the catch zone
    pub const HORIZONTAL_BUFFER: f32 = 15.0;
    /// Half-height of the vertical gate around the arms' midline
    pub const CENTER_TOLERANCE: f32 = 8.0;

    /// Uniform scale used in compact display mode
    pub const COMPACT_SCALE: f32 = 0.7;

    /// Freeze-frame before a catch verdict is finalized (seconds)
    pub const VERDICT_FINALIZE_DELAY: f32 = 1.0;
    /// Explosion time before a crash is finalized (seconds)
    pub const CRASH_FINALIZE_DELAY: f32 = 0.8;

    /// Horizontal drag distance before a touch gesture steers
    pub const TOUCH_DEAD_ZONE: f32 = 20.0;
}
