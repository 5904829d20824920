use crate::math::vec2::Vec2;
use crate::objects::{Ball, Block};
use super::manifold::{Collider, Contact, Wall};
use super::spatial_grid::SpatialGrid;

/// Distances below this are treated as coincident points.
const COINCIDENT_EPSILON: f64 = 1e-10;

/// Checks for overlap between two balls.
/// The normal points from `a` to `b`; coincident centers fall back to `(0, 1)`.
pub fn check_ball_ball(a: &Ball, a_idx: usize, b: &Ball, b_idx: usize) -> Option<Contact> {
    let dist_vec = b.position - a.position;
    let dist_sq = dist_vec.magnitude_squared();
    let radii_sum = a.radius() + b.radius();

    if dist_sq >= radii_sum * radii_sum {
        return None;
    }

    let distance = dist_sq.sqrt();
    let normal = if distance > COINCIDENT_EPSILON {
        dist_vec / distance
    } else {
        // Centers on top of each other, any unit vector separates them
        Vec2::new(0.0, 1.0)
    };

    Some(Contact {
        a: Collider::Ball(a_idx),
        b: b_idx,
        normal,
        penetration: radii_sum - distance,
    })
}

/// Checks for overlap between a ball and a block.
///
/// The normal points from the block surface toward the ball center. When
/// the center is inside the rectangle the nearest face is used and the
/// penetration is the radius plus the distance to that face.
pub fn check_ball_block(
    ball: &Ball,
    ball_idx: usize,
    block: &Block,
    block_idx: usize,
) -> Option<Contact> {
    let closest = block.closest_point(ball.position);
    let offset = ball.position - closest;
    let dist_sq = offset.magnitude_squared();
    let radius = ball.radius();

    let (normal, penetration) = if dist_sq > COINCIDENT_EPSILON * COINCIDENT_EPSILON {
        if dist_sq >= radius * radius {
            return None;
        }
        let distance = dist_sq.sqrt();
        (offset / distance, radius - distance)
    } else {
        let (normal, face_distance) = nearest_face(block, ball.position);
        (normal, radius + face_distance)
    };

    Some(Contact {
        a: Collider::Block(block_idx),
        b: ball_idx,
        normal,
        penetration,
    })
}

/// Outward normal of the face closest to an interior point, with the
/// distance to that face. Ties go to the earlier face in left, right,
/// top, bottom order.
fn nearest_face(block: &Block, point: Vec2) -> (Vec2, f64) {
    let aabb = block.aabb();
    let faces = [
        (Vec2::new(-1.0, 0.0), point.x - aabb.min.x),
        (Vec2::new(1.0, 0.0), aabb.max.x - point.x),
        (Vec2::new(0.0, -1.0), point.y - aabb.min.y),
        (Vec2::new(0.0, 1.0), aabb.max.y - point.y),
    ];

    let mut best = faces[0];
    for face in &faces[1..] {
        if face.1 < best.1 {
            best = *face;
        }
    }
    (best.0, best.1.max(0.0))
}

/// Checks a ball against one edge of the `width x height` world.
pub fn check_ball_wall(
    ball: &Ball,
    ball_idx: usize,
    wall: Wall,
    width: f64,
    height: f64,
) -> Option<Contact> {
    let p = ball.position;
    let r = ball.radius();
    let overshoot = match wall {
        Wall::Left => r - p.x,
        Wall::Right => p.x + r - width,
        Wall::Top => r - p.y,
        Wall::Bottom => p.y + r - height,
    };

    if overshoot > 0.0 {
        Some(Contact {
            a: Collider::Wall(wall),
            b: ball_idx,
            normal: wall.inward_normal(),
            penetration: overshoot,
        })
    } else {
        None
    }
}

/// Enumerates every overlapping pair into `contacts` (cleared first).
///
/// Order: ball–ball pairs by `(i, j)`, then each ball's block contacts in
/// block order, then each ball's wall contacts. Pairs whose sides are both
/// immovable are skipped. When `grid` is given it prunes ball–ball
/// candidates without changing the result.
pub fn detect_contacts(
    balls: &[Ball],
    blocks: &[Block],
    walls: Option<(f64, f64)>,
    grid: Option<&mut SpatialGrid>,
    contacts: &mut Vec<Contact>,
) {
    contacts.clear();

    match grid {
        Some(grid) => {
            grid.clear();
            for (i, ball) in balls.iter().enumerate() {
                grid.insert(i, &ball.aabb());
            }
            for (i, j) in grid.query_potential_pairs() {
                push_ball_pair(balls, i, j, contacts);
            }
        }
        None => {
            for i in 0..balls.len() {
                for j in (i + 1)..balls.len() {
                    push_ball_pair(balls, i, j, contacts);
                }
            }
        }
    }

    for (i, ball) in balls.iter().enumerate() {
        if ball.is_fixed() {
            continue;
        }
        let ball_box = ball.aabb();
        for (k, block) in blocks.iter().enumerate() {
            // Cheap reject before the closest-point test
            if !ball_box.overlaps(&block.aabb()) {
                continue;
            }
            if let Some(contact) = check_ball_block(ball, i, block, k) {
                contacts.push(contact);
            }
        }
    }

    if let Some((width, height)) = walls {
        for (i, ball) in balls.iter().enumerate() {
            if ball.is_fixed() {
                continue;
            }
            for wall in Wall::ALL {
                if let Some(contact) = check_ball_wall(ball, i, wall, width, height) {
                    contacts.push(contact);
                }
            }
        }
    }
}

fn push_ball_pair(balls: &[Ball], i: usize, j: usize, contacts: &mut Vec<Contact>) {
    let (a, b) = (&balls[i], &balls[j]);
    if a.is_fixed() && b.is_fixed() {
        return;
    }
    if let Some(contact) = check_ball_ball(a, i, b, j) {
        contacts.push(contact);
    }
}
