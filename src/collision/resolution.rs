//! Impulse-based contact response.

use crate::common::{EngineConfig, RestitutionRule};
use crate::math::vec2::Vec2;
use crate::objects::{Ball, Block};
use super::manifold::{Collider, Contact};

/// Motion state of one side of a contact, copied out before any write.
#[derive(Debug, Clone, Copy)]
struct Side {
    velocity: Vec2,
    inv_mass: f64,
    restitution: f64,
}

impl Side {
    fn of_ball(ball: &Ball) -> Self {
        Side {
            velocity: ball.velocity,
            inv_mass: ball.inv_mass(),
            restitution: ball.restitution,
        }
    }

    fn immovable(restitution: f64) -> Self {
        Side {
            velocity: Vec2::ZERO,
            inv_mass: 0.0,
            restitution,
        }
    }
}

/// Resolves contacts one at a time, in the order given: positional
/// correction first, then the velocity impulse.
///
/// Contacts sharing a ball are handled sequentially with the penetration
/// measured at detection time, so a ball wedged between several surfaces is
/// an approximation rather than a simultaneous solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolver {
    pub restitution_rule: RestitutionRule,
    pub wall_restitution: f64,
    /// Fraction of the penetration removed per contact.
    pub correction_percent: f64,
    /// Penetration left alone to avoid jitter on resting contacts.
    pub correction_slop: f64,
}

impl Resolver {
    pub fn from_config(config: &EngineConfig) -> Self {
        Resolver {
            restitution_rule: config.restitution_rule,
            wall_restitution: config.wall_restitution,
            correction_percent: config.correction_percent,
            correction_slop: config.correction_slop,
        }
    }

    pub fn resolve_all(&self, contacts: &[Contact], balls: &mut [Ball], blocks: &[Block]) {
        for contact in contacts {
            self.resolve(contact, balls, blocks);
        }
    }

    /// Resolves a single contact. Fixed balls, blocks and walls are never written.
    pub fn resolve(&self, contact: &Contact, balls: &mut [Ball], blocks: &[Block]) {
        let side_a = match contact.a {
            Collider::Ball(i) => Side::of_ball(&balls[i]),
            Collider::Block(k) => Side::immovable(blocks[k].restitution),
            Collider::Wall(_) => Side::immovable(self.wall_restitution),
        };
        let side_b = Side::of_ball(&balls[contact.b]);

        let total_inv_mass = side_a.inv_mass + side_b.inv_mass;
        if total_inv_mass <= 0.0 {
            return;
        }

        if let Some(correction) = self.positional_correction(contact, total_inv_mass) {
            self.apply(contact, balls, |ball, sign| {
                ball.position += correction * (sign * ball.inv_mass());
            });
        }

        if let Some(impulse) = self.impulse(contact.normal, &side_a, &side_b, total_inv_mass) {
            log::trace!(
                "{} impulse {:?} on {:?} -> ball {} (normal={:?}, depth={:.3})",
                if contact.is_ball_pair() { "ball-ball" } else { "static" },
                impulse,
                contact.a,
                contact.b,
                contact.normal,
                contact.penetration
            );
            self.apply(contact, balls, |ball, sign| {
                ball.velocity += impulse * (sign * ball.inv_mass());
            });
        }
    }

    /// Correction vector along the normal, already divided by the total
    /// inverse mass; `None` while the overlap is within the slop.
    fn positional_correction(&self, contact: &Contact, total_inv_mass: f64) -> Option<Vec2> {
        let magnitude = (contact.penetration - self.correction_slop).max(0.0);
        if magnitude < 1e-9 {
            return None;
        }
        Some(contact.normal * (magnitude / total_inv_mass * self.correction_percent))
    }

    /// Impulse applied to B (and negated for A); `None` when the sides are
    /// already separating or resting.
    fn impulse(&self, normal: Vec2, a: &Side, b: &Side, total_inv_mass: f64) -> Option<Vec2> {
        let relative_velocity = b.velocity - a.velocity;
        let velocity_along_normal = relative_velocity.dot(normal);
        if velocity_along_normal >= 0.0 {
            return None;
        }

        let e = self.restitution_rule.combine(a.restitution, b.restitution);
        let j = -(1.0 + e) * velocity_along_normal / total_inv_mass;
        Some(normal * j)
    }

    /// Calls `write` with sign -1 for a ball on side A and +1 for side B,
    /// skipping fixed balls.
    fn apply(&self, contact: &Contact, balls: &mut [Ball], write: impl Fn(&mut Ball, f64)) {
        if let Collider::Ball(i) = contact.a {
            let a = &mut balls[i];
            if !a.is_fixed() {
                write(a, -1.0);
            }
        }
        let b = &mut balls[contact.b];
        if !b.is_fixed() {
            write(b, 1.0);
        }
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Resolver::from_config(&EngineConfig::default())
    }
}
