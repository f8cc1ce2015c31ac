//! Collision detection and response for the ball against the hexagon
//!
//! The hard part of the simulation: testing a circle against six moving line
//! segments, then reflecting its velocity off the wall it touched. Contact is
//! segment-interior-only: corners are not treated as separate contact
//! features, and the ball is never pushed back out of a wall.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::PhysicsBody;
use super::container::{Edge, GeometryError};

/// Drawable area the ball is kept inside of
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenBounds {
    pub width: f32,
    pub height: f32,
}

impl Default for ScreenBounds {
    fn default() -> Self {
        use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
        }
    }
}

/// A ball touching the interior of a wall segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeContact {
    /// Closest point on the segment to the ball center
    pub point: Vec2,
    /// Distance from the ball center to `point`
    pub distance: f32,
}

/// Which screen axes flipped this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenHit {
    pub x: bool,
    pub y: bool,
}

impl ScreenHit {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Check a ball against one wall segment
///
/// Returns `Ok(None)` when the ball's projection falls outside the segment or
/// the ball is further than its radius from it.
pub fn ball_edge_contact(
    ball_pos: Vec2,
    ball_radius: f32,
    edge: &Edge,
) -> Result<Option<EdgeContact>, GeometryError> {
    let (dir, length) = edge.direction()?;

    let t = (ball_pos - edge.start).dot(dir);
    if !(0.0..=length).contains(&t) {
        return Ok(None);
    }

    let point = edge.start + dir * t;
    let distance = ball_pos.distance(point);
    if distance <= ball_radius {
        Ok(Some(EdgeContact { point, distance }))
    } else {
        Ok(None)
    }
}

/// Left-hand unit normal of a wall: (-u.y, u.x)
pub fn wall_normal(edge: &Edge) -> Result<Vec2, GeometryError> {
    let (dir, _) = edge.direction()?;
    Ok(Vec2::new(-dir.y, dir.x))
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Reflect velocity across a wall and scale by restitution
///
/// No approach-direction check: a ball already moving away from the wall
/// still has its normal component flipped.
pub fn reflect(velocity: Vec2, edge: &Edge, bounciness: f32) -> Result<Vec2, GeometryError> {
    let normal = wall_normal(edge)?;
    Ok(reflect_velocity(velocity, normal) * bounciness)
}

/// Test the ball against each edge in order and reflect off the first hit
///
/// Returns the index of the edge that reflected the ball, if any. Later
/// edges are not tested once one has reflected.
pub fn resolve_edges(body: &mut PhysicsBody, edges: &[Edge], bounciness: f32) -> Option<usize> {
    for (i, edge) in edges.iter().enumerate() {
        let contact = match ball_edge_contact(body.pos, body.radius, edge) {
            Ok(contact) => contact,
            Err(e) => {
                log::trace!("Skipping edge {}: {}", i, e);
                continue;
            }
        };

        if contact.is_some() {
            match reflect(body.vel, edge, bounciness) {
                Ok(vel) => {
                    body.vel = vel;
                    return Some(i);
                }
                Err(e) => log::trace!("Skipping edge {}: {}", i, e),
            }
        }
    }
    None
}

/// Flip velocity components when the ball pokes past the screen edges
///
/// A hard inversion with no restitution factor.
pub fn resolve_screen_bounds(body: &mut PhysicsBody, bounds: &ScreenBounds) -> ScreenHit {
    let r = body.radius;
    let mut hit = ScreenHit::default();

    if body.pos.x - r < 0.0 || body.pos.x + r > bounds.width {
        body.vel.x = -body.vel.x;
        hit.x = true;
    }
    if body.pos.y - r < 0.0 || body.pos.y + r > bounds.height {
        body.vel.y = -body.vel.y;
        hit.y = true;
    }
    hit
}
