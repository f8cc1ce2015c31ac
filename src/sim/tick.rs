//! Fixed per-frame simulation step
//!
//! Order within a frame matters and is fixed:
//! 1. rotate the container and rebuild its edges
//! 2. gravity, then explicit Euler integration
//! 3. edge collisions (first edge wins), then screen bounds
//! 4. friction, after any bounce, so restitution is damped the same frame

use super::collision::{resolve_edges, resolve_screen_bounds};
use super::state::{Axis, SimEvent, SimState};

/// Advance the simulation by one frame
///
/// Returns the bounces that happened, in the order they were resolved.
pub fn step(state: &mut SimState) -> Vec<SimEvent> {
    let mut events = Vec::new();

    // Collision must see the post-rotation pose
    state.container.advance();
    let edges = state.container.edges();

    let constants = state.constants;
    state.body.apply_gravity(constants.gravity);
    state.body.integrate();

    if let Some(edge) = resolve_edges(&mut state.body, &edges, constants.bounciness) {
        log::debug!(
            "Frame {}: edge {} bounce at ({:.1}, {:.1}), vel -> ({:.2}, {:.2})",
            state.frame,
            edge,
            state.body.pos.x,
            state.body.pos.y,
            state.body.vel.x,
            state.body.vel.y
        );
        events.push(SimEvent::EdgeBounce {
            edge,
            velocity: state.body.vel,
        });
    }

    let screen = resolve_screen_bounds(&mut state.body, &state.bounds);
    if screen.x {
        events.push(SimEvent::ScreenBounce { axis: Axis::X });
    }
    if screen.y {
        events.push(SimEvent::ScreenBounce { axis: Axis::Y });
    }
    if screen.any() {
        log::debug!("Frame {}: screen bounce {:?}", state.frame, screen);
    }

    state.body.apply_friction(constants.friction);
    state.frame += 1;

    events
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::sim::body::{PhysicsBody, PhysicsConstants};
    use crate::sim::collision::ScreenBounds;
    use crate::sim::container::RotatingContainer;

    fn classic_state(angular_velocity: f32) -> SimState {
        SimState::new(
            PhysicsBody::new(Vec2::new(400.0, 200.0), Vec2::new(3.0, 0.0), 15.0),
            RotatingContainer::new(Vec2::new(400.0, 300.0), 200.0, 0.0, angular_velocity),
            PhysicsConstants {
                gravity: 0.5,
                friction: 0.98,
                bounciness: 0.75,
            },
            ScreenBounds {
                width: 800.0,
                height: 600.0,
            },
        )
    }

    #[test]
    fn test_first_frame_order() {
        let mut state = classic_state(1.0);
        let events = step(&mut state);
        assert!(events.is_empty());
        assert_eq!(state.frame, 1);
        assert!((state.container.rotation_degrees - 1.0).abs() < 1e-6);
        // Gravity, integrate, then friction
        assert!((state.body.pos - Vec2::new(403.0, 200.5)).length() < 1e-5);
        assert!((state.body.vel - Vec2::new(3.0 * 0.98, 0.5 * 0.98)).length() < 1e-5);
    }

    #[test]
    fn test_friction_applies_after_bounce() {
        // Ball resting just above the bottom edge, falling onto it
        let mut state = classic_state(0.0);
        let bottom_y = 300.0 + 200.0 * (60.0f32).to_radians().sin();
        state.body.pos = Vec2::new(400.0, bottom_y - 20.0);
        state.body.vel = Vec2::new(0.0, 9.5);

        let events = step(&mut state);

        assert!(matches!(events[0], SimEvent::EdgeBounce { edge: 1, .. }));
        // (9.5 + 0.5) reflected, times bounciness, times friction
        assert!((state.body.vel.y - (-10.0 * 0.75 * 0.98)).abs() < 1e-3);
        assert!(state.body.vel.x.abs() < 1e-3);
    }

    #[test]
    fn test_screen_bounce_event() {
        let mut state = classic_state(0.0);
        state.constants.gravity = 0.0;
        state.body.pos = Vec2::new(-6.0, 300.0);
        state.body.vel = Vec2::new(5.0, 0.0);

        let events = step(&mut state);

        assert_eq!(events, vec![SimEvent::ScreenBounce { axis: Axis::X }]);
        assert!((state.body.vel.x - (-5.0 * 0.98)).abs() < 1e-5);
        assert_eq!(state.body.vel.y, 0.0);
    }

    #[test]
    fn test_free_flight_speed_decays_by_friction() {
        let mut state = classic_state(0.0);
        state.constants.gravity = 0.0;
        state.body.pos = Vec2::new(400.0, 300.0);
        state.body.vel = Vec2::new(0.3, -0.4);

        let mut expected = state.body.speed();
        for _ in 0..100 {
            let events = step(&mut state);
            assert!(events.is_empty());
            expected *= 0.98;
            assert!((state.body.speed() - expected).abs() < 1e-5);
        }
    }

    #[test]
    fn test_stationary_hexagon_scenario() {
        let mut state = classic_state(0.0);
        let limit = state.container.bounding_radius() + state.body.radius;

        let mut prev_vy = state.body.vel.y;
        let mut reversals = 0;
        for frame in 0..120 {
            step(&mut state);
            let vy = state.body.vel.y;
            if prev_vy > 0.0 && vy < 0.0 {
                reversals += 1;
            }
            prev_vy = vy;

            let dist = state.ball_distance_from_center();
            assert!(dist <= limit, "frame {}: ball escaped to distance {}", frame, dist);
        }
        assert!(reversals >= 1, "ball never bounced");
    }

    #[test]
    fn test_rotating_hexagon_bounces() {
        let mut state = classic_state(1.0);
        let bounces: usize = (0..100)
            .map(|_| {
                step(&mut state)
                    .iter()
                    .filter(|e| matches!(e, SimEvent::EdgeBounce { .. }))
                    .count()
            })
            .sum();
        assert!(bounces > 0);
        assert!((state.container.rotation_degrees - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = classic_state(1.0);
        let mut state2 = classic_state(1.0);

        for _ in 0..300 {
            let e1 = step(&mut state1);
            let e2 = step(&mut state2);
            assert_eq!(e1, e2);
        }

        assert_eq!(state1.frame, state2.frame);
        assert_eq!(state1.body.pos, state2.body.pos);
        assert_eq!(state1.body.vel, state2.body.vel);
    }
}
