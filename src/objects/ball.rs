use serde::{Deserialize, Serialize};

use crate::collision::AABB;
use crate::common::Color;
use crate::math::vec2::Vec2;

/// A circular body. Dynamic when `mass > 0`, fixed (infinite mass) otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BallRecord")]
pub struct Ball {
    // Primary state
    pub position: Vec2,
    pub velocity: Vec2,

    // Immutable after construction
    radius: f64,
    mass: f64,
    #[serde(skip)]
    inv_mass: f64,

    pub restitution: f64,
    pub color: Color,
}

impl Ball {
    /// Creates a ball centered at `(x, y)` moving with `(vx, vy)`.
    ///
    /// A `mass` of zero (or any non-positive / non-finite value) makes the
    /// ball fixed: it is never moved by gravity or collision response.
    /// `restitution` is used as given; values above 1 add energy on bounce.
    ///
    /// # Panics
    /// If `radius` is not a positive finite number.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        x: f64,
        y: f64,
        radius: f64,
        vx: f64,
        vy: f64,
        color: impl Into<Color>,
        mass: f64,
        restitution: f64,
    ) -> Self {
        assert!(
            radius.is_finite() && radius > 0.0,
            "Ball radius must be positive, got {radius}"
        );
        let inv_mass = if mass.is_finite() && mass > 0.0 { 1.0 / mass } else { 0.0 };

        Ball {
            position: Vec2::new(x, y),
            velocity: Vec2::new(vx, vy),
            radius,
            mass,
            inv_mass,
            restitution,
            color: color.into(),
        }
    }

    /// Creates a fixed ball (zero mass, at rest).
    pub fn fixed(x: f64, y: f64, radius: f64, color: impl Into<Color>, restitution: f64) -> Self {
        Ball::new(x, y, radius, 0.0, 0.0, color, 0.0, restitution)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Mass as supplied at construction.
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// `1 / mass`, or 0 for fixed balls.
    pub fn inv_mass(&self) -> f64 {
        self.inv_mass
    }

    pub fn is_fixed(&self) -> bool {
        self.inv_mass == 0.0
    }

    pub fn aabb(&self) -> AABB {
        let extent = Vec2::new(self.radius, self.radius);
        AABB::new(self.position - extent, self.position + extent)
    }

    /// Zero for fixed balls.
    pub fn kinetic_energy(&self) -> f64 {
        if self.is_fixed() {
            0.0
        } else {
            0.5 * self.mass * self.velocity.magnitude_squared()
        }
    }

    /// Zero for fixed balls.
    pub fn momentum(&self) -> Vec2 {
        if self.is_fixed() {
            Vec2::ZERO
        } else {
            self.velocity * self.mass
        }
    }
}

/// Serialized form of a ball; `inv_mass` is derived on load.
#[derive(Deserialize)]
struct BallRecord {
    position: Vec2,
    #[serde(default)]
    velocity: Vec2,
    radius: f64,
    mass: f64,
    restitution: f64,
    #[serde(default)]
    color: Color,
}

impl TryFrom<BallRecord> for Ball {
    type Error = String;

    fn try_from(record: BallRecord) -> Result<Self, Self::Error> {
        if !(record.radius.is_finite() && record.radius > 0.0) {
            return Err(format!("ball radius must be positive, got {}", record.radius));
        }
        Ok(Ball::new(
            record.position.x,
            record.position.y,
            record.radius,
            record.velocity.x,
            record.velocity.y,
            record.color,
            record.mass,
            record.restitution,
        ))
    }
}
