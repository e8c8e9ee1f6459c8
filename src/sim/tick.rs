//! Per-frame flight state machine
//!
//! Each tick splits the frame into short physics steps. After every step the
//! catch zone is checked, then the ground. The first terminal condition
//! reached freezes the vehicle; every later tick is a no-op.

use serde::Serialize;

use super::landing::{LandingVerdict, evaluate};
use super::physics::{integrate, is_valid_dt};
use super::state::{
    CrashReason, FailureReason, FlightOutcome, FlightState, InputFlags, Telemetry, VehicleState,
};
use crate::consts::*;

/// Emitted once, on the tick the flight becomes terminal
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlightEvent {
    pub outcome: FlightOutcome,
    /// Vertical speed at the moment of the verdict or impact
    pub landing_speed: f32,
    /// How long the host should hold the frozen frame before finalizing (seconds)
    pub finalize_after: f32,
}

/// Snapshot handed to the presentation layer after every tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TickResult {
    pub vehicle: VehicleState,
    pub outcome: FlightOutcome,
    pub telemetry: Telemetry,
    pub event: Option<FlightEvent>,
}

impl FlightState {
    /// Advance this flight by one frame
    pub fn tick(&mut self, input: &InputFlags, dt: f32) -> TickResult {
        tick(self, input, dt)
    }

    fn snapshot(&self, event: Option<FlightEvent>) -> TickResult {
        TickResult {
            vehicle: self.vehicle,
            outcome: self.outcome,
            telemetry: self.telemetry(),
            event,
        }
    }
}

/// Number of physics steps used for a frame of `dt` seconds
///
/// Steps are at most `SIM_DT` long so the vehicle cannot jump over the
/// catch gate, up to `MAX_STEPS_PER_TICK` steps per frame.
pub fn step_count(dt: f32) -> u32 {
    ((dt / SIM_DT).ceil() as u32).clamp(1, MAX_STEPS_PER_TICK)
}

/// Advance the flight by `dt` seconds
pub fn tick(state: &mut FlightState, input: &InputFlags, dt: f32) -> TickResult {
    // Physics stops exactly once
    if state.is_terminal() {
        return state.snapshot(None);
    }

    if !is_valid_dt(dt) {
        log::trace!("Ignoring tick with dt={dt}");
        return state.snapshot(None);
    }

    state.time_ticks += 1;
    let steps = step_count(dt);
    let step_dt = dt / steps as f32;
    let mut event = None;
    for _ in 0..steps {
        event = step(state, input, step_dt);
        if event.is_some() {
            break;
        }
    }

    state.snapshot(event)
}

/// One physics step followed by the catch-zone and ground checks
fn step(state: &mut FlightState, input: &InputFlags, dt: f32) -> Option<FlightEvent> {
    integrate(&mut state.vehicle, &state.profile, input, dt);

    // Catch zone first: a verdict on the same step as ground contact wins
    let verdict = evaluate(
        state.vehicle.position,
        state.vehicle.velocity.y,
        &state.catch_zone,
        state.profile.max_landing_speed,
    );
    match verdict {
        LandingVerdict::Success { speed } => Some(finish(
            state,
            FlightOutcome::LandedSuccess { speed },
            speed,
            VERDICT_FINALIZE_DELAY,
        )),
        LandingVerdict::TooFast { speed } => Some(finish(
            state,
            FlightOutcome::LandedFailure {
                reason: FailureReason::TooFast,
                speed,
            },
            speed,
            VERDICT_FINALIZE_DELAY,
        )),
        LandingVerdict::NotInZone if state.vehicle.position.y >= state.ground_y => {
            let speed = state.vehicle.vertical_speed();
            Some(finish(
                state,
                FlightOutcome::Crashed {
                    reason: CrashReason::Missed,
                },
                speed,
                CRASH_FINALIZE_DELAY,
            ))
        }
        LandingVerdict::NotInZone => None,
    }
}

/// Freeze the vehicle and record the terminal outcome
fn finish(
    state: &mut FlightState,
    outcome: FlightOutcome,
    landing_speed: f32,
    finalize_after: f32,
) -> FlightEvent {
    state.vehicle.freeze();
    state.outcome = outcome;
    log::info!(
        "{} at {}: {} (speed {:.1}, tick {})",
        state.profile.name,
        state.vehicle.position,
        outcome.message(),
        landing_speed,
        state.time_ticks
    );
    FlightEvent {
        outcome,
        landing_speed,
        finalize_after,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::ProfileKey;
    use glam::Vec2;

    fn earth_state() -> FlightState {
        FlightState::new(ProfileKey::Earth.profile(), &Settings::default())
    }

    #[test]
    fn test_tick_falls() {
        let mut state = earth_state();
        let start = state.vehicle.position;
        let result = tick(&mut state, &InputFlags::default(), SIM_DT);
        assert_eq!(result.outcome, FlightOutcome::Flying);
        assert!(result.event.is_none());
        assert!(result.vehicle.position.y > start.y);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_zero_dt_does_not_count() {
        let mut state = earth_state();
        let before = state.vehicle;
        let result = tick(&mut state, &InputFlags::default(), 0.0);
        assert_eq!(result.vehicle, before);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_catch_emits_event_once() {
        let mut state = earth_state();
        state.vehicle.position = state.catch_zone.center - Vec2::new(0.0, 2.0);
        state.vehicle.velocity = Vec2::new(0.0, 40.0);

        let result = tick(&mut state, &InputFlags::default(), SIM_DT);
        let event = result.event.expect("verdict on first tick");
        assert!(matches!(event.outcome, FlightOutcome::LandedSuccess { .. }));
        assert_eq!(event.finalize_after, VERDICT_FINALIZE_DELAY);
        assert!((event.landing_speed - 42.0).abs() < 1e-3);
        assert_eq!(result.vehicle.velocity, Vec2::ZERO);

        let again = tick(&mut state, &InputFlags::default(), SIM_DT);
        assert!(again.event.is_none());
        assert_eq!(again.outcome, event.outcome);
    }

    #[test]
    fn test_ground_crash() {
        let mut state = earth_state();
        state.vehicle.position = Vec2::new(50.0, state.ground_y - 1.0);
        state.vehicle.velocity = Vec2::new(0.0, 200.0);

        let result = tick(&mut state, &InputFlags::default(), SIM_DT);
        let event = result.event.expect("ground contact");
        assert_eq!(
            event.outcome,
            FlightOutcome::Crashed {
                reason: CrashReason::Missed,
            }
        );
        assert_eq!(event.finalize_after, CRASH_FINALIZE_DELAY);
        assert!((event.landing_speed - 202.0).abs() < 1e-3);
    }

    #[test]
    fn test_catch_wins_over_ground_on_same_tick() {
        let mut state = earth_state();
        // Raise the ground to the catch midline so both fire together
        state.ground_y = state.catch_zone.center.y;
        state.vehicle.position = state.catch_zone.center - Vec2::new(0.0, 0.5);
        state.vehicle.velocity = Vec2::new(0.0, 60.0);

        let result = tick(&mut state, &InputFlags::default(), SIM_DT);
        assert!(result.vehicle.position.y >= state.ground_y);
        assert!(matches!(result.outcome, FlightOutcome::LandedSuccess { .. }));
    }

    #[test]
    fn test_step_count() {
        assert_eq!(step_count(SIM_DT), 1);
        assert_eq!(step_count(0.001), 1);
        for dt in [0.05, 0.1, 0.2, 1.0] {
            assert!(dt / step_count(dt) as f32 <= SIM_DT + 1e-6, "dt={dt}");
        }
        assert_eq!(step_count(1.0e9), MAX_STEPS_PER_TICK);
    }

    #[test]
    fn test_long_frames_still_judged() {
        for dt in [SIM_DT, 0.05, 0.1, 0.2] {
            let mut state = earth_state();
            state.vehicle.position.x = state.catch_zone.center.x;
            state.vehicle.velocity = Vec2::ZERO;

            for _ in 0..10_000 {
                if state.is_terminal() {
                    break;
                }
                tick(&mut state, &InputFlags::default(), dt);
            }
            assert!(
                matches!(
                    state.outcome,
                    FlightOutcome::LandedFailure {
                        reason: FailureReason::TooFast,
                        ..
                    }
                ),
                "dt={dt}: {:?}",
                state.outcome
            );
        }
    }

    #[test]
    fn test_long_frame_stops_at_verdict() {
        let mut state = earth_state();
        state.vehicle.position = state.catch_zone.center - Vec2::new(0.0, 20.0);
        state.vehicle.velocity = Vec2::ZERO;

        let result = tick(&mut state, &InputFlags::default(), 1.0);
        let event = result.event.expect("verdict inside the frame");
        assert!(matches!(event.outcome, FlightOutcome::LandedSuccess { .. }));
        let band = state.catch_zone.containment_band();
        assert!(band.contains(result.vehicle.position));
        assert_eq!(result.vehicle.velocity, Vec2::ZERO);
        assert_eq!(state.time_ticks, 1);
    }
}
