use serde::{Deserialize, Serialize};

use crate::math::vec2::Vec2;

/// One edge of the world rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Wall {
    Left,
    Right,
    Top,
    Bottom,
}

impl Wall {
    pub const ALL: [Wall; 4] = [Wall::Left, Wall::Right, Wall::Top, Wall::Bottom];

    /// Unit normal pointing into the world.
    pub fn inward_normal(self) -> Vec2 {
        match self {
            Wall::Left => Vec2::new(1.0, 0.0),
            Wall::Right => Vec2::new(-1.0, 0.0),
            Wall::Top => Vec2::new(0.0, 1.0),
            Wall::Bottom => Vec2::new(0.0, -1.0),
        }
    }
}

/// The first side of a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collider {
    /// Index into the world's balls.
    Ball(usize),
    /// Index into the world's blocks.
    Block(usize),
    Wall(Wall),
}

/// A single overlap found by the narrow phase.
///
/// The second side is always a ball. For ball–ball contacts `a` holds the
/// lower index; for blocks and walls the static side is `a`, so the normal
/// points from the surface toward the ball.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub a: Collider,
    /// Index of the ball on side B.
    pub b: usize,
    /// Unit vector from A toward B.
    pub normal: Vec2,
    /// Overlap distance, `>= 0`.
    pub penetration: f64,
}

impl Contact {
    /// True when both sides are balls of the world.
    pub fn is_ball_pair(&self) -> bool {
        matches!(self.a, Collider::Ball(_))
    }

    /// True when `ball` is one of the two sides.
    pub fn involves_ball(&self, ball: usize) -> bool {
        self.b == ball || self.a == Collider::Ball(ball)
    }
}
