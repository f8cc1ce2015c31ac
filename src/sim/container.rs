//! Rotating hexagon geometry
//!
//! The container is stored as a pose (center, radius, angle) and its
//! vertices are derived fresh every frame:
//! - vertex i sits at 60·i + rotation degrees around the center
//! - edge i joins vertex i to vertex (i + 1) mod 6, so winding is consistent

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::HEXAGON_SIDES;
use crate::{polar_to_cartesian, wrap_degrees};

/// Geometry failures that the collision pass can skip over
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("degenerate edge: start {start} and end {end} coincide")]
    DegenerateEdge { start: Vec2, end: Vec2 },
}

/// A wall segment between two consecutive container vertices
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub start: Vec2,
    pub end: Vec2,
}

impl Edge {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Unit direction from start to end, plus the segment length
    pub fn direction(&self) -> Result<(Vec2, f32), GeometryError> {
        let delta = self.end - self.start;
        let length = delta.length();
        if length <= f32::EPSILON {
            return Err(GeometryError::DegenerateEdge {
                start: self.start,
                end: self.end,
            });
        }
        Ok((delta / length, length))
    }
}

/// Vertices of a hexagon with the given pose, in ascending angle order
pub fn vertices(center: Vec2, radius: f32, rotation_degrees: f32) -> [Vec2; HEXAGON_SIDES] {
    let step = 360.0 / HEXAGON_SIDES as f32;
    std::array::from_fn(|i| {
        let angle = (step * i as f32 + rotation_degrees).to_radians();
        center + polar_to_cartesian(radius, angle)
    })
}

/// Advance a rotation angle by one frame, wrapped into [0, 360)
#[inline]
pub fn advance_rotation(current: f32, angular_velocity: f32) -> f32 {
    wrap_degrees(current + angular_velocity)
}

/// The hexagonal container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotatingContainer {
    pub center: Vec2,
    pub radius: f32,
    /// Current rotation (degrees, always in [0, 360))
    pub rotation_degrees: f32,
    /// Rotation applied each frame (degrees)
    pub angular_velocity: f32,
}

impl RotatingContainer {
    pub fn new(center: Vec2, radius: f32, rotation_degrees: f32, angular_velocity: f32) -> Self {
        Self {
            center,
            radius,
            rotation_degrees: wrap_degrees(rotation_degrees),
            angular_velocity,
        }
    }

    /// Rotate by one frame's worth of angular velocity
    pub fn advance(&mut self) {
        self.rotation_degrees = advance_rotation(self.rotation_degrees, self.angular_velocity);
    }

    /// Vertices for the current pose
    pub fn vertices(&self) -> [Vec2; HEXAGON_SIDES] {
        vertices(self.center, self.radius, self.rotation_degrees)
    }

    /// Edges for the current pose, edge i running from vertex i to vertex i + 1
    pub fn edges(&self) -> [Edge; HEXAGON_SIDES] {
        let points = self.vertices();
        std::array::from_fn(|i| Edge::new(points[i], points[(i + 1) % HEXAGON_SIDES]))
    }

    /// Radius of the circle through all vertices
    #[inline]
    pub fn bounding_radius(&self) -> f32 {
        self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_vertices_unrotated() {
        let points = vertices(Vec2::new(400.0, 300.0), 200.0, 0.0);
        assert!((points[0] - Vec2::new(600.0, 300.0)).length() < 1e-3);
        // Screen y grows downward, so vertices 1 and 2 form the bottom edge
        assert!(points[1].y > 300.0 && points[2].y > 300.0);
        assert!((points[3] - Vec2::new(200.0, 300.0)).length() < 1e-3);
    }

    #[test]
    fn test_edges_close_the_loop() {
        let container = RotatingContainer::new(Vec2::ZERO, 100.0, 30.0, 1.0);
        let points = container.vertices();
        let edges = container.edges();
        assert_eq!(edges.len(), 6);
        for (i, edge) in edges.iter().enumerate() {
            assert_eq!(edge.start, points[i]);
            assert_eq!(edge.end, points[(i + 1) % 6]);
        }
        // Regular hexagon: side length equals circumradius
        for edge in &edges {
            let (_, length) = edge.direction().unwrap();
            assert!((length - 100.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_degenerate_edge() {
        let p = Vec2::new(5.0, 5.0);
        let err = Edge::new(p, p).direction().unwrap_err();
        assert_eq!(err, GeometryError::DegenerateEdge { start: p, end: p });
    }

    #[test]
    fn test_advance_rotation_wraps() {
        assert!((advance_rotation(359.5, 1.0) - 0.5).abs() < 1e-4);
        assert!((advance_rotation(0.5, -1.0) - 359.5).abs() < 1e-4);
        assert_eq!(advance_rotation(10.0, 0.0), 10.0);
    }

    #[test]
    fn test_advance_rotation_full_turn() {
        let mut container = RotatingContainer::new(Vec2::ZERO, 50.0, 0.0, 1.0);
        for _ in 0..360 {
            container.advance();
            assert!((0.0..360.0).contains(&container.rotation_degrees));
        }
        assert!(container.rotation_degrees.abs() < 1e-3);
    }

    proptest! {
        /// Every vertex sits on the circumscribed circle
        #[test]
        fn prop_vertices_on_circle(
            theta in -720.0f32..720.0f32,
            cx in -500.0f32..500.0f32,
            cy in -500.0f32..500.0f32,
            radius in 1.0f32..400.0f32,
        ) {
            let center = Vec2::new(cx, cy);
            let points = vertices(center, radius, theta);
            prop_assert_eq!(points.len(), 6);
            for p in points {
                prop_assert!(((p - center).length() - radius).abs() < radius * 1e-4 + 1e-3);
            }
        }

        /// Steps that evenly divide a full turn come back to the start
        #[test]
        fn prop_rotation_periodic(
            start in 0.0f32..360.0f32,
            divisor in prop::sample::select(vec![1u32, 2, 3, 4, 5, 6, 8, 10, 12, 15]),
        ) {
            let omega = divisor as f32;
            let mut angle = start;
            for _ in 0..(360 / divisor) {
                angle = advance_rotation(angle, omega);
                prop_assert!((0.0..360.0).contains(&angle));
            }
            let diff = (angle - start).abs();
            prop_assert!(diff < 1e-2 || (360.0 - diff) < 1e-2);
        }
    }
}
