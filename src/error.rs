//! Configuration errors
//!
//! The simulation itself never fails: bad frame times degrade to no-op ticks.
//! Only starting a session with bad configuration is rejected.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown environment profile: {0:?}")]
    UnknownProfile(String),

    #[error("display scale must be finite and positive, got {0}")]
    InvalidDisplayScale(f32),

    #[error("play field must be finite and positive, got {width}x{height}")]
    InvalidPlayField { width: f32, height: f32 },

    #[error("settings JSON: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("settings file: {0}")]
    Io(#[from] std::io::Error),
}
