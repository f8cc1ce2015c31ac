//! Display list for one frame

use glam::Vec2;

use super::Color;

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        color: Color,
    },
    Polygon {
        points: Vec<Vec2>,
        color: Color,
        stroke_width: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
        filled: bool,
    },
}

/// Draw calls for one frame, in submission order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Center of the first circle drawn this frame
    pub fn circle_center(&self) -> Option<Vec2> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::Circle { center, .. } => Some(*center),
            _ => None,
        })
    }
}
