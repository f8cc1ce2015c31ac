//! Hex Bounce - a ball bouncing inside a rotating hexagon
//!
//! Core modules:
//! - `sim`: Per-frame physics (container rotation, integration, collisions)
//! - `renderer`: Scene drawing through the presenter primitives
//! - `platform`: Presenter seam, headless presenter and frame pacing
//! - `config`: Startup constants loaded from JSON
//! - `app`: The frame loop tying everything together

pub mod app;
pub mod config;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use app::run;
pub use config::{ConfigError, SimConfig};

use glam::Vec2;

/// Default configuration constants
pub mod consts {
    /// Screen dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    /// Frame rate the loop is paced to
    pub const TARGET_FPS: u32 = 60;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 15.0;
    pub const BALL_START_X: f32 = SCREEN_WIDTH / 2.0;
    pub const BALL_START_Y: f32 = SCREEN_HEIGHT / 3.0;
    pub const BALL_START_VX: f32 = 3.0;
    pub const BALL_START_VY: f32 = 0.0;

    /// Physics constants (per-frame units)
    pub const GRAVITY: f32 = 0.5;
    pub const FRICTION: f32 = 0.98;
    pub const BOUNCINESS: f32 = 0.75;

    /// Hexagon defaults
    pub const HEXAGON_RADIUS: f32 = 200.0;
    /// Degrees per frame
    pub const HEXAGON_ANGULAR_VELOCITY: f32 = 1.0;
    pub const HEXAGON_SIDES: usize = 6;
    /// Outline stroke width (pixels)
    pub const HEXAGON_STROKE: f32 = 2.0;
}

/// Wrap an angle in degrees to [0, 360)
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Convert polar (r, theta in radians) to cartesian offset
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
