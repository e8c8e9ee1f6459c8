//! Environment profiles
//!
//! Each landing site has its own gravity and colour theme. The landing speed
//! limit is shared by every site.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::MAX_LANDING_SPEED;
use crate::error::ConfigError;

/// Available landing sites, in campaign order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProfileKey {
    #[default]
    Earth,
    Mars,
}

impl ProfileKey {
    pub const ALL: [ProfileKey; 2] = [ProfileKey::Earth, ProfileKey::Mars];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileKey::Earth => "earth",
            ProfileKey::Mars => "mars",
        }
    }

    /// Site unlocked by a successful catch here
    pub fn next(&self) -> Option<ProfileKey> {
        match self {
            ProfileKey::Earth => Some(ProfileKey::Mars),
            ProfileKey::Mars => None,
        }
    }

    pub fn profile(&self) -> EnvironmentProfile {
        match self {
            ProfileKey::Earth => EnvironmentProfile {
                key: *self,
                name: "Starbase, Texas",
                gravity: 120.0,
                max_landing_speed: MAX_LANDING_SPEED,
                theme: Theme {
                    sky_top: 0x1a4d6d,
                    sky_bottom: 0x87ceeb,
                    ground: 0x8b7355,
                    flame_outer: 0xff8c00,
                    flame_inner: 0xff4500,
                },
            },
            ProfileKey::Mars => EnvironmentProfile {
                key: *self,
                name: "Base Alpha, Mars",
                // 38% of Earth
                gravity: 45.0,
                max_landing_speed: MAX_LANDING_SPEED,
                theme: Theme {
                    sky_top: 0x8b4513,
                    sky_bottom: 0xd84315,
                    ground: 0x8b4513,
                    flame_outer: 0xff6600,
                    flame_inner: 0xff3300,
                },
            },
        }
    }
}

impl FromStr for ProfileKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "earth" => Ok(ProfileKey::Earth),
            "mars" => Ok(ProfileKey::Mars),
            _ => Err(ConfigError::UnknownProfile(s.to_string())),
        }
    }
}

impl fmt::Display for ProfileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colours for the presentation layer (0xRRGGBB)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub sky_top: u32,
    pub sky_bottom: u32,
    pub ground: u32,
    pub flame_outer: u32,
    pub flame_inner: u32,
}

/// Physical constants for one landing site. Immutable for a session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnvironmentProfile {
    pub key: ProfileKey,
    pub name: &'static str,
    /// Downward acceleration (units/s²), always positive
    pub gravity: f32,
    pub max_landing_speed: f32,
    pub theme: Theme,
}
