//! Catch zone geometry
//!
//! The tower stands on the ground with two catching arms centered on its
//! height, reaching out to the left. The catch zone is the gap between the
//! arms, computed once per session from the tower layout and display scale.
//!
//! Landing checks do not use the zone rectangle directly but a containment
//! band around it: wider than the zone horizontally, and a thin strip around
//! the arms' midline vertically.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tower dimensions in unscaled local units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TowerLayout {
    pub tower_width: f32,
    pub tower_height: f32,
    pub arm_length: f32,
    pub arm_width: f32,
    /// Vertical gap between the upper and lower arm
    pub arm_spacing: f32,
    /// Horizontal reach of the catch zone, measured from the tower face
    pub zone_width: f32,
}

impl Default for TowerLayout {
    fn default() -> Self {
        Self {
            tower_width: TOWER_WIDTH,
            tower_height: TOWER_HEIGHT,
            arm_length: ARM_LENGTH,
            arm_width: ARM_WIDTH,
            arm_spacing: ARM_SPACING,
            zone_width: CATCH_ZONE_WIDTH,
        }
    }
}

/// Axis-aligned tolerance rectangle (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainmentBand {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl ContainmentBand {
    #[inline]
    pub fn contains_x(&self, x: f32) -> bool {
        x >= self.left && x <= self.right
    }

    #[inline]
    pub fn contains_y(&self, y: f32) -> bool {
        y >= self.top && y <= self.bottom
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        self.contains_x(p.x) && self.contains_y(p.y)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// World-space catch zone. Read-only for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CatchZoneGeometry {
    pub center: Vec2,
    pub width: f32,
    /// Equals the scaled arm spacing
    pub height: f32,
}

impl CatchZoneGeometry {
    /// Place the zone for a tower whose base sits at `base`
    pub fn compute(base: Vec2, layout: &TowerLayout, scale: f32) -> Self {
        // Arms are centered on the tower's height
        let arm_y = -layout.tower_height / 2.0;
        // Zone hugs the tower's left face
        let zone_left = -layout.tower_width / 2.0 - layout.zone_width;
        let local_center = Vec2::new(zone_left + layout.zone_width / 2.0, arm_y);

        Self {
            center: base + local_center * scale,
            width: layout.zone_width * scale,
            height: layout.arm_spacing * scale,
        }
    }

    /// Zone for the default tower placed on a play field of the given size
    pub fn for_field(width: f32, height: f32, scale: f32) -> Self {
        Self::compute(tower_base(width, height), &TowerLayout::default(), scale)
    }

    /// Horizontal edges of the visual zone
    pub fn left(&self) -> f32 {
        self.center.x - self.width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.center.x + self.width / 2.0
    }

    /// Tolerance rectangle the vehicle center must be inside to be judged
    pub fn containment_band(&self) -> ContainmentBand {
        ContainmentBand {
            left: self.left() - HORIZONTAL_BUFFER,
            right: self.right() + HORIZONTAL_BUFFER,
            top: self.center.y - CENTER_TOLERANCE,
            bottom: self.center.y + CENTER_TOLERANCE,
        }
    }
}

/// Tower base position: centered horizontally, just above the bottom edge
pub fn tower_base(field_width: f32, field_height: f32) -> Vec2 {
    Vec2::new(field_width / 2.0, field_height - TOWER_BASE_OFFSET)
}
