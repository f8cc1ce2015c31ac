//! Scene drawing
//!
//! Turns the simulation state into presenter draw calls. Also provides the
//! display-list types the headless presenter records frames into.

pub mod frame;

pub use frame::{DrawCommand, Frame};

use crate::consts::HEXAGON_STROKE;
use crate::platform::Presenter;
use crate::sim::SimState;

/// RGBA, each channel in 0..=1
pub type Color = [f32; 4];

/// Colors for scene elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = [0.0, 0.0, 0.0, 1.0];
    pub const HEXAGON: Color = [1.0, 1.0, 1.0, 1.0];
    pub const BALL: Color = [1.0, 0.0, 0.0, 1.0];
}

/// Draw the container outline and the ball for the current state
pub fn draw_scene<P: Presenter + ?Sized>(state: &SimState, presenter: &mut P) {
    presenter.clear(colors::BACKGROUND);
    presenter.draw_polygon(&state.container.vertices(), colors::HEXAGON, HEXAGON_STROKE);
    presenter.draw_circle(state.body.pos, state.body.radius, colors::BALL, true);
}
