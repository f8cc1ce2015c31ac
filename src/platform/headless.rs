//! Window-less presenter
//!
//! Records draw calls into a display list instead of rasterizing them, and
//! requests close once the frame about to be drawn is the last allowed one.
//! The loop finishes the frame it is on after a close, so exactly
//! `max_frames` frames get presented.

use std::time::Duration;

use glam::Vec2;

use super::{FrameClock, Presenter, PresenterEvent};
use crate::renderer::{Color, DrawCommand, Frame};

#[derive(Debug)]
pub struct HeadlessPresenter {
    /// Frame being drawn
    pending: Frame,
    /// Last frame flushed by `present`
    presented: Frame,
    frames_presented: u64,
    max_frames: Option<u64>,
    close_requested: bool,
    /// `None` disables pacing (tick returns immediately)
    clock: Option<FrameClock>,
}

impl HeadlessPresenter {
    /// Paced presenter that closes after `max_frames` frames, if given
    pub fn new(max_frames: Option<u64>) -> Self {
        Self {
            pending: Frame::new(),
            presented: Frame::new(),
            frames_presented: 0,
            max_frames,
            close_requested: false,
            clock: Some(FrameClock::new()),
        }
    }

    /// Run as fast as possible, without sleeping between frames
    pub fn unpaced(mut self) -> Self {
        self.clock = None;
        self
    }

    /// Ask the loop to stop after the current frame
    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    /// Frame currently being drawn
    pub fn pending(&self) -> &Frame {
        &self.pending
    }

    /// Most recently presented frame
    pub fn last_frame(&self) -> &Frame {
        &self.presented
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Rolling FPS, when pacing is enabled
    pub fn fps(&self) -> Option<f32> {
        self.clock.as_ref().map(FrameClock::fps)
    }
}

impl Presenter for HeadlessPresenter {
    fn poll_events(&mut self) -> Vec<PresenterEvent> {
        let limit_reached = self
            .max_frames
            .is_some_and(|max| self.frames_presented + 1 >= max);
        if self.close_requested || limit_reached {
            vec![PresenterEvent::Close]
        } else {
            Vec::new()
        }
    }

    fn clear(&mut self, color: Color) {
        self.pending.clear();
        self.pending.push(DrawCommand::Clear { color });
    }

    fn draw_polygon(&mut self, points: &[Vec2], color: Color, stroke_width: f32) {
        self.pending.push(DrawCommand::Polygon {
            points: points.to_vec(),
            color,
            stroke_width,
        });
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color, filled: bool) {
        self.pending.push(DrawCommand::Circle {
            center,
            radius,
            color,
            filled,
        });
    }

    fn present(&mut self) {
        self.presented = std::mem::take(&mut self.pending);
        self.frames_presented += 1;
    }

    fn tick(&mut self, target_fps: u32) -> Duration {
        match self.clock.as_mut() {
            Some(clock) => clock.tick(target_fps),
            None => Duration::ZERO,
        }
    }
}
