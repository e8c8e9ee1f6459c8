//! Session settings
//!
//! Display scale and input mode are passed in explicitly at session start
//! instead of being sniffed from the device.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Display layout presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DisplayMode {
    #[default]
    Standard,
    /// Small screens: the tower is drawn smaller, leaving more fall time
    Compact,
}

impl DisplayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Standard => "Standard",
            DisplayMode::Compact => "Compact",
        }
    }

    /// Uniform scale applied to the catching structure
    pub fn scale(&self) -> f32 {
        match self {
            DisplayMode::Standard => 1.0,
            DisplayMode::Compact => COMPACT_SCALE,
        }
    }
}

/// Where continuous input comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum InputMode {
    #[default]
    Keyboard,
    /// Hold to fire engines, drag sideways to steer
    Touch,
}

/// Play field size in world units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayField {
    pub width: f32,
    pub height: f32,
}

impl Default for PlayField {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

impl PlayField {
    /// World y of the ground surface
    pub fn ground_surface(&self) -> f32 {
        self.height - GROUND_OFFSET
    }
}

/// Game settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    pub display: DisplayMode,
    pub input_mode: InputMode,
    #[serde(default)]
    pub field: PlayField,
    /// Explicit scale; overrides the display mode preset when set
    #[serde(default)]
    pub display_scale: Option<f32>,
}

impl Settings {
    /// Create settings from a display preset
    pub fn from_display(display: DisplayMode) -> Self {
        Self {
            display,
            ..Self::default()
        }
    }

    /// Effective uniform scale for the catching structure
    pub fn scale(&self) -> f32 {
        self.display_scale.unwrap_or_else(|| self.display.scale())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let scale = self.scale();
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ConfigError::InvalidDisplayScale(scale));
        }
        let PlayField { width, height } = self.field;
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(ConfigError::InvalidPlayField { width, height });
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
