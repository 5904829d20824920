//! How two bodies' material coefficients combine in a collision.

use serde::{Deserialize, Serialize};

/// Rule used to combine the restitution of the two sides of a contact.
///
/// Restitution is deliberately not clamped: coefficients above 1 inject
/// energy and are used for "extra bouncy" bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestitutionRule {
    /// The less bouncy side wins.
    Min,
    /// The bouncier side wins, so a very bouncy ball still rebounds off a
    /// dead wall.
    #[default]
    Max,
    /// Arithmetic mean.
    Average,
    /// Product of both coefficients.
    Multiply,
}

impl RestitutionRule {
    pub fn combine(self, a: f64, b: f64) -> f64 {
        match self {
            RestitutionRule::Min => a.min(b),
            RestitutionRule::Max => a.max(b),
            RestitutionRule::Average => 0.5 * (a + b),
            RestitutionRule::Multiply => a * b,
        }
    }
}
