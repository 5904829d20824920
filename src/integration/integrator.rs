use crate::collision::AABB;
use crate::math::vec2::Vec2;
use crate::objects::Ball;

/// Integrates a ball forward in time using Semi-Implicit Euler: velocity is
/// updated from gravity first, then position from the new velocity.
///
/// Fixed balls and non-positive (or non-finite) `dt` are left untouched.
/// `damping` is the fraction of velocity removed per second.
pub fn integrate(ball: &mut Ball, gravity: Vec2, damping: f64, dt: f64) {
    if ball.is_fixed() || !(dt.is_finite() && dt > 0.0) {
        return;
    }

    ball.velocity += gravity * dt;
    if damping > 0.0 {
        ball.velocity *= (1.0 - damping * dt).max(0.0);
    }
    ball.position += ball.velocity * dt;
}

/// Puts a dynamic ball whose center left `bounds` back on the boundary and
/// drops the outward velocity component. Returns true if it had escaped.
pub fn contain(ball: &mut Ball, bounds: &AABB) -> bool {
    if ball.is_fixed() || bounds.contains(ball.position) {
        return false;
    }

    let p = ball.position;
    if p.x < bounds.min.x {
        ball.position.x = bounds.min.x;
        ball.velocity.x = ball.velocity.x.max(0.0);
    } else if p.x > bounds.max.x {
        ball.position.x = bounds.max.x;
        ball.velocity.x = ball.velocity.x.min(0.0);
    }
    if p.y < bounds.min.y {
        ball.position.y = bounds.min.y;
        ball.velocity.y = ball.velocity.y.max(0.0);
    } else if p.y > bounds.max.y {
        ball.position.y = bounds.max.y;
        ball.velocity.y = ball.velocity.y.min(0.0);
    }
    true
}
