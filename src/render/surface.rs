//! Drawing target abstraction.

use serde::{Deserialize, Serialize};

use crate::common::Color;
use crate::math::vec2::Vec2;

/// An immediate-mode 2D target the engine paints manifests onto.
///
/// Hosts implement this over their canvas (a browser 2D context, a ggez
/// canvas, ...). All coordinates are world pixels.
pub trait Surface {
    /// Erases the `width x height` area before a frame.
    fn clear(&mut self, width: f64, height: f64);
    fn fill_circle(&mut self, center: Vec2, radius: f64, color: &Color);
    /// `origin` is the top-left corner.
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: &Color);
}

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Clear { width: f64, height: f64 },
    Circle { center: Vec2, radius: f64, color: Color },
    Rect { origin: Vec2, size: Vec2, color: Color },
}

/// A surface that records commands instead of rasterizing, so a frame can
/// be inspected or replayed onto another surface later.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Plays the recorded commands onto `target`, in order.
    pub fn replay(&self, target: &mut impl Surface) {
        for command in &self.commands {
            match command {
                DrawCommand::Clear { width, height } => target.clear(*width, *height),
                DrawCommand::Circle { center, radius, color } => {
                    target.fill_circle(*center, *radius, color)
                }
                DrawCommand::Rect { origin, size, color } => {
                    target.fill_rect(*origin, *size, color)
                }
            }
        }
    }
}

impl Surface for DrawList {
    fn clear(&mut self, width: f64, height: f64) {
        // A clear invalidates everything recorded before it
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f64, color: &Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color: color.clone(),
        });
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: &Color) {
        self.commands.push(DrawCommand::Rect {
            origin,
            size,
            color: color.clone(),
        });
    }
}
