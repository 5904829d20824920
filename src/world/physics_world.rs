use crate::collision::AABB;
use crate::math::vec2::Vec2;
use crate::objects::{Ball, Block};

/// The playfield: a `width x height` rectangle anchored at the origin and
/// the bodies inside it, kept in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    width: f64,
    height: f64,
    balls: Vec<Ball>,
    blocks: Vec<Block>,
}

impl World {
    /// Creates an empty world.
    ///
    /// # Panics
    /// If either dimension is not a positive finite number.
    pub fn new(width: f64, height: f64) -> Self {
        assert!(
            width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0,
            "World size must be positive, got {width}x{height}"
        );
        Self {
            width,
            height,
            balls: Vec::new(),
            blocks: Vec::new(),
        }
    }

    /// Creates a world already holding `balls` and `blocks`.
    pub fn with_bodies(width: f64, height: f64, balls: Vec<Ball>, blocks: Vec<Block>) -> Self {
        Self {
            balls,
            blocks,
            ..Self::new(width, height)
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// `[0, width] x [0, height]`.
    pub fn bounds(&self) -> AABB {
        AABB::new(Vec2::ZERO, Vec2::new(self.width, self.height))
    }

    /// Adds a ball and returns its index.
    pub fn add_ball(&mut self, ball: Ball) -> usize {
        let index = self.balls.len();
        self.balls.push(ball);
        index
    }

    /// Adds a block and returns its index.
    pub fn add_block(&mut self, block: Block) -> usize {
        let index = self.blocks.len();
        self.blocks.push(block);
        index
    }

    /// Removes the ball at `index`, shifting later balls down by one.
    pub fn remove_ball(&mut self, index: usize) -> Option<Ball> {
        (index < self.balls.len()).then(|| self.balls.remove(index))
    }

    /// Removes the block at `index`, shifting later blocks down by one.
    pub fn remove_block(&mut self, index: usize) -> Option<Block> {
        (index < self.blocks.len()).then(|| self.blocks.remove(index))
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub(crate) fn balls_mut(&mut self) -> &mut [Ball] {
        &mut self.balls
    }

    /// Mutable balls alongside the (always static) blocks.
    pub(crate) fn bodies_mut(&mut self) -> (&mut [Ball], &[Block]) {
        (&mut self.balls, &self.blocks)
    }
}
