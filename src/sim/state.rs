//! Simulation state and per-frame events
//!
//! Everything that changes from frame to frame lives in one `SimState`,
//! owned by the host and threaded through `step` by exclusive reference.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{PhysicsBody, PhysicsConstants};
use super::collision::ScreenBounds;
use super::container::RotatingContainer;
use crate::config::{ConfigError, SimConfig};

/// Screen axis for boundary bounces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// Something that happened during a frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    /// Ball reflected off container edge `edge` (0..6)
    EdgeBounce { edge: usize, velocity: Vec2 },
    /// Ball velocity flipped on a screen axis
    ScreenBounce { axis: Axis },
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    pub body: PhysicsBody,
    pub container: RotatingContainer,
    pub constants: PhysicsConstants,
    pub bounds: ScreenBounds,
    /// Frames simulated so far
    pub frame: u64,
}

impl SimState {
    pub fn new(
        body: PhysicsBody,
        container: RotatingContainer,
        constants: PhysicsConstants,
        bounds: ScreenBounds,
    ) -> Self {
        Self {
            body,
            container,
            constants,
            bounds,
            frame: 0,
        }
    }

    /// Build the initial state from a validated configuration
    pub fn from_config(config: &SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let body = PhysicsBody::new(
            Vec2::from(config.ball_start),
            Vec2::from(config.ball_velocity),
            config.ball_radius,
        );
        let container = RotatingContainer::new(
            Vec2::from(config.hexagon_center),
            config.hexagon_radius,
            config.hexagon_start_angle,
            config.hexagon_angular_velocity,
        );
        let constants = PhysicsConstants {
            gravity: config.gravity,
            friction: config.friction,
            bounciness: config.bounciness,
        };
        let bounds = ScreenBounds {
            width: config.screen_width,
            height: config.screen_height,
        };

        Ok(Self::new(body, container, constants, bounds))
    }

    /// Distance from the container center to the ball center
    pub fn ball_distance_from_center(&self) -> f32 {
        self.body.pos.distance(self.container.center)
    }
}

impl Default for SimState {
    fn default() -> Self {
        Self::new(
            PhysicsBody::new(
                Vec2::new(crate::consts::BALL_START_X, crate::consts::BALL_START_Y),
                Vec2::new(crate::consts::BALL_START_VX, crate::consts::BALL_START_VY),
                crate::consts::BALL_RADIUS,
            ),
            RotatingContainer::new(
                Vec2::new(
                    crate::consts::SCREEN_WIDTH / 2.0,
                    crate::consts::SCREEN_HEIGHT / 2.0,
                ),
                crate::consts::HEXAGON_RADIUS,
                0.0,
                crate::consts::HEXAGON_ANGULAR_VELOCITY,
            ),
            PhysicsConstants::default(),
            ScreenBounds::default(),
        )
    }
}
