//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - One fixed step per frame, no wall-clock time
//! - Stable edge iteration order
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod container;
pub mod state;
pub mod tick;

pub use body::{PhysicsBody, PhysicsConstants};
pub use collision::{
    EdgeContact, ScreenBounds, ScreenHit, ball_edge_contact, reflect, reflect_velocity,
    resolve_edges, resolve_screen_bounds, wall_normal,
};
pub use container::{Edge, GeometryError, RotatingContainer, advance_rotation, vertices};
pub use state::{Axis, SimEvent, SimState};
pub use tick::step;
