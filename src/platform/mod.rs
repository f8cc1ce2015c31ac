//! Platform abstraction layer
//!
//! The simulation only talks to a window through the `Presenter` trait:
//! - Input events (only close matters)
//! - Drawing primitives (clear, polygon outline, circle)
//! - Frame flush and pacing

pub mod clock;
pub mod headless;

use glam::Vec2;

pub use clock::FrameClock;
pub use headless::HeadlessPresenter;

use crate::renderer::Color;

/// Events surfaced by the presenter each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenterEvent {
    /// Window closed or quit requested
    Close,
}

/// Drawing and windowing collaborator driven by the frame loop
pub trait Presenter {
    /// Drain pending input events
    fn poll_events(&mut self) -> Vec<PresenterEvent>;

    /// Fill the frame with a solid color
    fn clear(&mut self, color: Color);

    /// Closed polygon outline through `points`
    fn draw_polygon(&mut self, points: &[Vec2], color: Color, stroke_width: f32);

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color, filled: bool);

    /// Flush the finished frame to the display
    fn present(&mut self);

    /// Wait out the rest of the frame budget; returns the frame's elapsed time
    fn tick(&mut self, target_fps: u32) -> std::time::Duration;
}
