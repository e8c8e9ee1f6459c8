//! Vehicle physics integration
//!
//! Single-point motion: gravity plus optional engine thrust vertically,
//! steering acceleration with a speed cap and drag horizontally. Rotation is
//! cosmetic banking that snaps while steering and decays when released.

use glam::Vec2;

use super::profile::EnvironmentProfile;
use super::state::{InputFlags, VehicleState};
use crate::consts::*;

/// True when `dt` can advance the simulation
#[inline]
pub fn is_valid_dt(dt: f32) -> bool {
    dt.is_finite() && dt > 0.0
}

/// Advance the vehicle by `dt` seconds.
///
/// Velocity is updated before position (semi-implicit Euler). Stalled or
/// garbage frame times leave the vehicle untouched.
pub fn integrate(
    vehicle: &mut VehicleState,
    profile: &EnvironmentProfile,
    input: &InputFlags,
    dt: f32,
) {
    if !is_valid_dt(dt) {
        return;
    }

    let thrust = if input.thrust { ENGINE_THRUST } else { 0.0 };
    // Left wins when both are held
    let (steer, bank) = if input.steer_left {
        (-STEER_ACCEL, -ROTATION_SPEED)
    } else if input.steer_right {
        (STEER_ACCEL, ROTATION_SPEED)
    } else {
        (0.0, 0.0)
    };

    vehicle.engines_on = input.thrust;
    vehicle.acceleration = Vec2::new(steer, thrust + profile.gravity);
    vehicle.velocity += vehicle.acceleration * dt;

    if input.is_steering() {
        let vx = vehicle.velocity.x;
        vehicle.velocity.x = vx.clamp(-HORIZONTAL_SPEED, HORIZONTAL_SPEED);
        vehicle.rotation = bank;
    } else {
        vehicle.velocity.x = apply_drag(vehicle.velocity.x, HORIZONTAL_DRAG * dt);
        vehicle.rotation *= ROTATION_DAMPING;
    }

    vehicle.position += vehicle.velocity * dt;
}

/// Move `v` toward zero by `amount` without crossing it
#[inline]
fn apply_drag(v: f32, amount: f32) -> f32 {
    if v > amount {
        v - amount
    } else if v < -amount {
        v + amount
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::ProfileKey;

    fn earth() -> EnvironmentProfile {
        ProfileKey::Earth.profile()
    }

    fn at_rest() -> VehicleState {
        VehicleState::new(Vec2::new(100.0, 100.0), Vec2::ZERO)
    }

    #[test]
    fn test_free_fall() {
        let mut v = at_rest();
        integrate(&mut v, &earth(), &InputFlags::default(), 0.5);
        assert_eq!(v.velocity, Vec2::new(0.0, 60.0));
        // position uses the updated velocity
        assert_eq!(v.position, Vec2::new(100.0, 130.0));
        assert_eq!(v.acceleration, Vec2::new(0.0, 120.0));
        assert!(!v.engines_on);
    }

    #[test]
    fn test_thrust_sums_with_gravity() {
        let mut v = at_rest();
        let input = InputFlags {
            thrust: true,
            ..Default::default()
        };
        integrate(&mut v, &earth(), &input, 0.1);
        assert!((v.acceleration.y - (-130.0)).abs() < 1e-4);
        assert!((v.velocity.y - (-13.0)).abs() < 1e-4);
        assert!(v.engines_on);
    }

    #[test]
    fn test_invalid_dt_is_noop() {
        for dt in [0.0, -0.016, f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let mut v = at_rest();
            v.velocity = Vec2::new(10.0, 20.0);
            v.rotation = 0.05;
            let before = v;
            let input = InputFlags {
                thrust: true,
                steer_left: true,
                steer_right: false,
            };
            integrate(&mut v, &earth(), &input, dt);
            assert_eq!(v, before, "dt={dt}");
        }
    }

    #[test]
    fn test_horizontal_speed_capped_while_steering() {
        let mut v = at_rest();
        let input = InputFlags {
            steer_right: true,
            ..Default::default()
        };
        for _ in 0..120 {
            integrate(&mut v, &earth(), &input, SIM_DT);
            assert!(v.velocity.x <= HORIZONTAL_SPEED);
        }
        assert_eq!(v.velocity.x, HORIZONTAL_SPEED);
        assert_eq!(v.rotation, ROTATION_SPEED);
    }

    #[test]
    fn test_left_wins_over_right() {
        let mut v = at_rest();
        let input = InputFlags {
            steer_left: true,
            steer_right: true,
            ..Default::default()
        };
        integrate(&mut v, &earth(), &input, SIM_DT);
        assert!(v.velocity.x < 0.0);
        assert_eq!(v.rotation, -ROTATION_SPEED);
    }

    #[test]
    fn test_drag_stops_drift_without_reversing() {
        let mut v = at_rest();
        v.velocity.x = 30.0;
        let mut last = v.velocity.x;
        for _ in 0..60 {
            integrate(&mut v, &earth(), &InputFlags::default(), SIM_DT);
            assert!(v.velocity.x <= last);
            assert!(v.velocity.x >= 0.0);
            last = v.velocity.x;
        }
        assert_eq!(v.velocity.x, 0.0);
    }

    #[test]
    fn test_no_world_bounds() {
        let mut v = VehicleState::new(Vec2::new(-500.0, 100.0), Vec2::new(-200.0, 0.0));
        let input = InputFlags {
            steer_left: true,
            ..Default::default()
        };
        integrate(&mut v, &earth(), &input, 1.0);
        assert!(v.position.x < -500.0);
    }
}
