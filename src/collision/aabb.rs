// Defines an Axis-Aligned Bounding Box

use serde::{Deserialize, Serialize};

use crate::math::vec2::Vec2;

/// An Axis-Aligned Bounding Box defined by its minimum and maximum corner points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AABB {
    pub min: Vec2,
    pub max: Vec2,
}

impl AABB {
    /// Creates a new AABB, ordering the corners so that `min <= max`.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        AABB {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// Box spanning `origin` to `origin + size`.
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        AABB::new(origin, origin + size)
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Strict overlap test; boxes that merely touch do not overlap.
    pub fn overlaps(&self, other: &AABB) -> bool {
        let x_overlap = self.max.x > other.min.x && self.min.x < other.max.x;
        let y_overlap = self.max.y > other.min.y && self.min.y < other.max.y;
        x_overlap && y_overlap
    }

    /// Inclusive containment test.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// The point of the box (boundary or interior) nearest to `point`.
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x.clamp(self.min.x, self.max.x),
            point.y.clamp(self.min.y, self.max.y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_orders_corners() {
        let aabb = AABB::new(Vec2::new(5.0, 1.0), Vec2::new(1.0, 5.0));
        assert_eq!(aabb.min, Vec2::new(1.0, 1.0));
        assert_eq!(aabb.max, Vec2::new(5.0, 5.0));
        assert_eq!(aabb.width(), 4.0);
        assert_eq!(aabb.height(), 4.0);
        assert_eq!(aabb.center(), Vec2::new(3.0, 3.0));
    }

    #[test]
    fn test_overlaps() {
        let a = AABB::from_origin_size(Vec2::new(0.0, 0.0), Vec2::new(2.0, 2.0));
        let b = AABB::from_origin_size(Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0));
        let touching = AABB::from_origin_size(Vec2::new(2.0, 0.0), Vec2::new(2.0, 2.0));
        let far = AABB::from_origin_size(Vec2::new(10.0, 10.0), Vec2::new(1.0, 1.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&touching));
        assert!(!a.overlaps(&far));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let aabb = AABB::from_origin_size(Vec2::ZERO, Vec2::new(4.0, 2.0));
        assert!(aabb.contains(Vec2::new(2.0, 1.0)));
        assert!(aabb.contains(Vec2::new(4.0, 2.0)));
        assert!(!aabb.contains(Vec2::new(4.1, 1.0)));
    }

    #[test]
    fn test_closest_point_clamps_outside_points() {
        let aabb = AABB::from_origin_size(Vec2::new(10.0, 10.0), Vec2::new(20.0, 10.0));
        assert_eq!(aabb.closest_point(Vec2::new(0.0, 15.0)), Vec2::new(10.0, 15.0));
        assert_eq!(aabb.closest_point(Vec2::new(40.0, 40.0)), Vec2::new(30.0, 20.0));
        // Interior points map to themselves
        assert_eq!(aabb.closest_point(Vec2::new(12.0, 12.0)), Vec2::new(12.0, 12.0));
    }
}
