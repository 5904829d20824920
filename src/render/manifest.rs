//! Read-only render snapshot of a world.

use serde::{Deserialize, Serialize};

use super::surface::Surface;
use crate::common::Color;
use crate::math::vec2::Vec2;
use crate::objects::{Ball, Block};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallSprite {
    pub position: Vec2,
    pub radius: f64,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockSprite {
    /// Top-left corner.
    pub position: Vec2,
    pub size: Vec2,
    pub color: Color,
}

/// A flat copy of everything needed to draw one frame. It is captured
/// between steps and never aliases live body state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub width: f64,
    pub height: f64,
    pub balls: Vec<BallSprite>,
    pub blocks: Vec<BlockSprite>,
}

impl Manifest {
    pub fn capture(width: f64, height: f64, balls: &[Ball], blocks: &[Block]) -> Self {
        Manifest {
            width,
            height,
            balls: balls
                .iter()
                .map(|ball| BallSprite {
                    position: ball.position,
                    radius: ball.radius(),
                    color: ball.color.clone(),
                })
                .collect(),
            blocks: blocks
                .iter()
                .map(|block| BlockSprite {
                    position: block.position,
                    size: block.size,
                    color: block.color.clone(),
                })
                .collect(),
        }
    }

    /// Clears the surface, then fills balls followed by blocks.
    pub fn paint(&self, surface: &mut impl Surface) {
        surface.clear(self.width, self.height);
        for ball in &self.balls {
            surface.fill_circle(ball.position, ball.radius, &ball.color);
        }
        for block in &self.blocks {
            surface.fill_rect(block.position, block.size, &block.color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::surface::{DrawCommand, DrawList};

    #[test]
    fn test_capture_copies_render_fields() {
        let balls = vec![Ball::new(10.0, 20.0, 5.0, 1.0, 1.0, "#00FFFF", 1.0, 0.5)];
        let blocks = vec![Block::new(0.0, 580.0, 400.0, 20.0, "#000000", 0.5)];
        let manifest = Manifest::capture(400.0, 600.0, &balls, &blocks);

        assert_eq!(manifest.width, 400.0);
        assert_eq!(manifest.height, 600.0);
        assert_eq!(
            manifest.balls,
            vec![BallSprite {
                position: Vec2::new(10.0, 20.0),
                radius: 5.0,
                color: Color::new("#00FFFF"),
            }]
        );
        assert_eq!(
            manifest.blocks,
            vec![BlockSprite {
                position: Vec2::new(0.0, 580.0),
                size: Vec2::new(400.0, 20.0),
                color: Color::new("#000000"),
            }]
        );
    }

    #[test]
    fn test_capture_is_a_snapshot() {
        let mut balls = vec![Ball::new(10.0, 20.0, 5.0, 0.0, 0.0, "#00FFFF", 1.0, 0.5)];
        let manifest = Manifest::capture(100.0, 100.0, &balls, &[]);
        balls[0].position = Vec2::new(50.0, 50.0);
        assert_eq!(manifest.balls[0].position, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_paint_order() {
        let balls = vec![
            Ball::new(10.0, 10.0, 5.0, 0.0, 0.0, "#111111", 1.0, 0.5),
            Ball::new(30.0, 10.0, 5.0, 0.0, 0.0, "#222222", 1.0, 0.5),
        ];
        let blocks = vec![Block::new(0.0, 90.0, 100.0, 10.0, "#333333", 0.5)];
        let mut list = DrawList::new();
        Manifest::capture(100.0, 100.0, &balls, &blocks).paint(&mut list);

        assert_eq!(list.len(), 4);
        assert_eq!(list.commands[0], DrawCommand::Clear { width: 100.0, height: 100.0 });
        assert_eq!(
            list.commands[1],
            DrawCommand::Circle {
                center: Vec2::new(10.0, 10.0),
                radius: 5.0,
                color: Color::new("#111111"),
            }
        );
        assert_eq!(
            list.commands[3],
            DrawCommand::Rect {
                origin: Vec2::new(0.0, 90.0),
                size: Vec2::new(100.0, 10.0),
                color: Color::new("#333333"),
            }
        );
    }

    #[test]
    fn test_empty_manifest_paints_only_clear() {
        let mut list = DrawList::new();
        Manifest::capture(10.0, 10.0, &[], &[]).paint(&mut list);
        assert_eq!(list.commands, vec![DrawCommand::Clear { width: 10.0, height: 10.0 }]);
    }
}
