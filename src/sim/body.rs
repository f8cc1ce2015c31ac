//! The ball and its per-frame motion
//!
//! Units are per frame: velocity is pixels/frame and gravity is
//! pixels/frame². Screen y grows downward, so positive gravity pulls down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Process-wide physics tuning, fixed at startup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConstants {
    /// Added to velocity.y every frame
    pub gravity: f32,
    /// Multiplicative velocity decay per frame, in (0, 1]
    pub friction: f32,
    /// Restitution applied on wall reflection, in (0, 1]
    pub bounciness: f32,
}

impl Default for PhysicsConstants {
    fn default() -> Self {
        use crate::consts::{BOUNCINESS, FRICTION, GRAVITY};
        Self {
            gravity: GRAVITY,
            friction: FRICTION,
            bounciness: BOUNCINESS,
        }
    }
}

/// The bouncing ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsBody {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl PhysicsBody {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Gravity acts on the vertical axis only
    #[inline]
    pub fn apply_gravity(&mut self, gravity: f32) {
        self.vel.y += gravity;
    }

    /// One explicit Euler step
    #[inline]
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    /// Per-frame velocity decay on both axes
    #[inline]
    pub fn apply_friction(&mut self, friction: f32) {
        self.vel *= friction;
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}
