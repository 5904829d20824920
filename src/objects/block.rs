use serde::{Deserialize, Serialize};

use crate::collision::AABB;
use crate::common::Color;
use crate::math::vec2::Vec2;

/// An axis-aligned rectangular obstacle. Blocks are static colliders with
/// infinite mass; the engine never moves them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BlockRecord")]
pub struct Block {
    /// Top-left corner.
    pub position: Vec2,
    /// Width and height.
    pub size: Vec2,
    pub restitution: f64,
    pub color: Color,
}

impl Block {
    /// # Panics
    /// If `width` or `height` is not a positive finite number.
    pub fn new(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: impl Into<Color>,
        restitution: f64,
    ) -> Self {
        assert!(
            width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0,
            "Block size must be positive, got {width}x{height}"
        );
        Block {
            position: Vec2::new(x, y),
            size: Vec2::new(width, height),
            restitution,
            color: color.into(),
        }
    }

    pub fn aabb(&self) -> AABB {
        AABB::from_origin_size(self.position, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    /// Point of the rectangle nearest to `point`; `point` itself when inside.
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        self.aabb().closest_point(point)
    }
}

/// Serialized form of a block; the size is checked on load.
#[derive(Deserialize)]
struct BlockRecord {
    position: Vec2,
    size: Vec2,
    restitution: f64,
    #[serde(default)]
    color: Color,
}

impl TryFrom<BlockRecord> for Block {
    type Error = String;

    fn try_from(record: BlockRecord) -> Result<Self, Self::Error> {
        let size = record.size;
        if !(size.x.is_finite() && size.x > 0.0 && size.y.is_finite() && size.y > 0.0) {
            return Err(format!("block size must be positive, got {}x{}", size.x, size.y));
        }
        Ok(Block::new(
            record.position.x,
            record.position.y,
            size.x,
            size.y,
            record.color,
            record.restitution,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_new() {
        let block = Block::new(20.0, 0.0, 20.0, 600.0, "#000000", 1.0);
        assert_eq!(block.position, Vec2::new(20.0, 0.0));
        assert_eq!(block.size, Vec2::new(20.0, 600.0));
        assert_eq!(block.center(), Vec2::new(30.0, 300.0));
        assert_eq!(block.restitution, 1.0);
    }

    #[test]
    fn test_block_aabb() {
        let block = Block::new(10.0, 20.0, 30.0, 40.0, "#000000", 0.5);
        let aabb = block.aabb();
        assert_eq!(aabb.min, Vec2::new(10.0, 20.0));
        assert_eq!(aabb.max, Vec2::new(40.0, 60.0));
    }

    #[test]
    fn test_block_closest_point() {
        let block = Block::new(0.0, 0.0, 10.0, 10.0, "#000000", 0.5);
        assert_eq!(block.closest_point(Vec2::new(15.0, 5.0)), Vec2::new(10.0, 5.0));
        assert_eq!(block.closest_point(Vec2::new(-5.0, -5.0)), Vec2::new(0.0, 0.0));
        assert_eq!(block.closest_point(Vec2::new(3.0, 4.0)), Vec2::new(3.0, 4.0));
    }

    #[test]
    #[should_panic]
    fn test_block_zero_width_panics() {
        Block::new(0.0, 0.0, 0.0, 10.0, "#000000", 0.5);
    }

    #[test]
    #[should_panic]
    fn test_block_negative_height_panics() {
        Block::new(0.0, 0.0, 10.0, -1.0, "#000000", 0.5);
    }

    #[test]
    fn test_block_deserialize() {
        let block: Block = serde_json::from_str(
            r##"{ "position": { "x": 0.0, "y": 580.0 }, "size": { "x": 400.0, "y": 20.0 },
                 "restitution": 0.5, "color": "#000000" }"##,
        )
        .unwrap();
        assert_eq!(block, Block::new(0.0, 580.0, 400.0, 20.0, "#000000", 0.5));
    }

    #[test]
    fn test_block_deserialize_rejects_bad_size() {
        for size in [r#"{ "x": -5.0, "y": 10.0 }"#, r#"{ "x": 10.0, "y": 0.0 }"#] {
            let json = format!(
                r#"{{ "position": {{ "x": 10.0, "y": 10.0 }},
                     "size": {size}, "restitution": 0.5 }}"#
            );
            let result: Result<Block, _> = serde_json::from_str(&json);
            assert!(result.is_err(), "accepted size {size}");
        }
    }
}
