//! Landing evaluation
//!
//! The vehicle is judged only when its center is inside the containment band:
//! horizontally forgiving, vertically a thin strip on the arms' midline. A
//! vehicle merely passing the upper arm is not judged yet, so it still has
//! time to brake before the midline.

use glam::Vec2;

use super::catch_zone::CatchZoneGeometry;

/// Result of one evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LandingVerdict {
    /// Outside the band; keep flying
    NotInZone,
    /// In the band, but faster than the limit
    TooFast { speed: f32 },
    Success { speed: f32 },
}

impl LandingVerdict {
    /// Verdicts that end the flight
    pub fn is_binding(&self) -> bool {
        !matches!(self, LandingVerdict::NotInZone)
    }
}

/// Judge a vehicle at `position` falling with vertical velocity `velocity_y`.
///
/// Pure; the caller freezes the vehicle on a binding verdict and stops
/// calling.
pub fn evaluate(
    position: Vec2,
    velocity_y: f32,
    zone: &CatchZoneGeometry,
    max_landing_speed: f32,
) -> LandingVerdict {
    if !zone.containment_band().contains(position) {
        return LandingVerdict::NotInZone;
    }

    let speed = velocity_y.abs();
    if speed > max_landing_speed {
        LandingVerdict::TooFast { speed }
    } else {
        LandingVerdict::Success { speed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn zone() -> CatchZoneGeometry {
        CatchZoneGeometry::for_field(800.0, 600.0, 1.0)
    }

    #[test]
    fn test_success_at_center() {
        let z = zone();
        let verdict = evaluate(z.center, 50.0, &z, MAX_LANDING_SPEED);
        assert_eq!(verdict, LandingVerdict::Success { speed: 50.0 });
        assert!(verdict.is_binding());
    }

    #[test]
    fn test_limit_is_inclusive() {
        let z = zone();
        assert_eq!(
            evaluate(z.center, MAX_LANDING_SPEED, &z, MAX_LANDING_SPEED),
            LandingVerdict::Success {
                speed: MAX_LANDING_SPEED,
            }
        );
        assert_eq!(
            evaluate(z.center, 80.5, &z, MAX_LANDING_SPEED),
            LandingVerdict::TooFast { speed: 80.5 }
        );
    }

    #[test]
    fn test_upward_speed_counts_too() {
        let z = zone();
        assert_eq!(
            evaluate(z.center, -120.0, &z, MAX_LANDING_SPEED),
            LandingVerdict::TooFast { speed: 120.0 }
        );
    }

    #[test]
    fn test_inside_visual_zone_but_off_midline() {
        let z = zone();
        // Between the arms, but 12 units above the midline
        let p = z.center - Vec2::new(0.0, 12.0);
        assert!(p.y > z.center.y - z.height / 2.0);
        assert_eq!(
            evaluate(p, 500.0, &z, MAX_LANDING_SPEED),
            LandingVerdict::NotInZone
        );
    }

    #[test]
    fn test_horizontal_buffer_forgives() {
        let z = zone();
        let just_inside = Vec2::new(z.left() - HORIZONTAL_BUFFER + 0.5, z.center.y);
        let just_outside = Vec2::new(z.left() - HORIZONTAL_BUFFER - 0.5, z.center.y);
        assert!(evaluate(just_inside, 10.0, &z, MAX_LANDING_SPEED).is_binding());
        assert!(!evaluate(just_outside, 10.0, &z, MAX_LANDING_SPEED).is_binding());
    }
}
