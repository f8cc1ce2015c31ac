//! Startup configuration
//!
//! Every constant the simulation needs is fixed at startup. Values come from
//! `hex_bounce.json` in the working directory when present, defaults otherwise.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Invalid or unreadable configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be positive and finite, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must lie in (0, 1], got {value}")]
    OutOfUnitRange { field: &'static str, value: f32 },
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },
    #[error("target_fps must be positive")]
    ZeroFrameRate,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid json: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Frame rate cap for the loop
    pub target_fps: u32,
    /// Stop after this many frames (headless runs); `None` runs until closed
    pub max_frames: Option<u64>,

    // === Ball ===
    pub ball_radius: f32,
    pub ball_start: [f32; 2],
    /// Pixels per frame
    pub ball_velocity: [f32; 2],

    // === Hexagon ===
    pub hexagon_center: [f32; 2],
    pub hexagon_radius: f32,
    /// Degrees
    pub hexagon_start_angle: f32,
    /// Degrees per frame
    pub hexagon_angular_velocity: f32,

    // === Physics ===
    pub gravity: f32,
    pub friction: f32,
    pub bounciness: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            target_fps: TARGET_FPS,
            max_frames: None,

            ball_radius: BALL_RADIUS,
            ball_start: [BALL_START_X, BALL_START_Y],
            ball_velocity: [BALL_START_VX, BALL_START_VY],

            hexagon_center: [SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0],
            hexagon_radius: HEXAGON_RADIUS,
            hexagon_start_angle: 0.0,
            hexagon_angular_velocity: HEXAGON_ANGULAR_VELOCITY,

            gravity: GRAVITY,
            friction: FRICTION,
            bounciness: BOUNCINESS,
        }
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn unit_range(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnitRange { field, value })
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

impl SimConfig {
    /// Config file looked up in the working directory
    pub const FILE_NAME: &'static str = "hex_bounce.json";

    /// Reject values the physics cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("screen_width", self.screen_width)?;
        positive("screen_height", self.screen_height)?;
        if self.target_fps == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }

        positive("ball_radius", self.ball_radius)?;
        positive("hexagon_radius", self.hexagon_radius)?;
        for (field, value) in [
            ("ball_start.x", self.ball_start[0]),
            ("ball_start.y", self.ball_start[1]),
            ("ball_velocity.x", self.ball_velocity[0]),
            ("ball_velocity.y", self.ball_velocity[1]),
            ("hexagon_center.x", self.hexagon_center[0]),
            ("hexagon_center.y", self.hexagon_center[1]),
            ("hexagon_start_angle", self.hexagon_start_angle),
            ("hexagon_angular_velocity", self.hexagon_angular_velocity),
            ("gravity", self.gravity),
        ] {
            finite(field, value)?;
        }

        unit_range("friction", self.friction)?;
        unit_range("bounciness", self.bounciness)?;
        Ok(())
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load `hex_bounce.json` if present, otherwise defaults
    ///
    /// A config file that exists but fails to load is reported as an error.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Path::new(Self::FILE_NAME);
        if path.exists() {
            let config = Self::load_from(path)?;
            log::info!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            log::info!("Using default config");
            Ok(Self::default())
        }
    }

    /// Pretty JSON for writing a starter config
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
