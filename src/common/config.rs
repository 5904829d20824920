//! Engine tuning knobs, loadable from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::material::RestitutionRule;
use crate::math::vec2::Vec2;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// How the world rectangle constrains balls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryMode {
    /// The four edges act as static walls and produce contacts.
    #[default]
    Walls,
    /// Walls are supplied by the host as blocks; the edges only clamp
    /// balls that escaped anyway.
    ClampOnly,
}

/// Strategy for finding candidate ball–ball pairs.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BroadPhase {
    /// Test every pair.
    #[default]
    BruteForce,
    /// Uniform grid over the world; only balls sharing a cell are tested.
    Grid { cell_size: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Acceleration applied to every dynamic ball, px/s².
    pub gravity: Vec2,
    /// Seconds simulated by one `update`.
    pub time_step: f64,
    pub restitution_rule: RestitutionRule,
    /// Restitution of the implicit world walls.
    pub wall_restitution: f64,
    pub boundary: BoundaryMode,
    /// Fraction of the penetration removed per contact, in (0, 1].
    pub correction_percent: f64,
    /// Overlap tolerated without positional correction, px.
    pub correction_slop: f64,
    /// Fraction of velocity removed per simulated second.
    pub damping: f64,
    pub broad_phase: BroadPhase,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            gravity: Vec2::new(0.0, 980.0),
            time_step: 1.0 / 120.0,
            restitution_rule: RestitutionRule::Max,
            wall_restitution: 0.0,
            boundary: BoundaryMode::Walls,
            correction_percent: 0.8,
            correction_slop: 0.01,
            damping: 0.0,
            broad_phase: BroadPhase::BruteForce,
        }
    }
}

impl EngineConfig {
    /// Parses a (possibly partial) JSON document; missing fields keep their
    /// defaults. The result is validated.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rejects values the solver cannot work with. A non-positive
    /// `time_step` is allowed; stepping with it is a no-op.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.gravity.is_finite() {
            return Err(invalid("gravity", "components must be finite"));
        }
        if self.time_step.is_nan() {
            return Err(invalid("time_step", "must be a number"));
        }
        if !(self.correction_percent > 0.0 && self.correction_percent <= 1.0) {
            return Err(invalid(
                "correction_percent",
                format!("{} is outside (0, 1]", self.correction_percent),
            ));
        }
        non_negative("correction_slop", self.correction_slop)?;
        non_negative("damping", self.damping)?;
        non_negative("wall_restitution", self.wall_restitution)?;
        if let BroadPhase::Grid { cell_size } = self.broad_phase {
            if !(cell_size.is_finite() && cell_size > 0.0) {
                return Err(invalid(
                    "broad_phase.cell_size",
                    format!("{cell_size} is not a positive size"),
                ));
            }
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("{value} must be finite and >= 0")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.gravity, Vec2::new(0.0, 980.0));
        assert_eq!(config.restitution_rule, RestitutionRule::Max);
        assert_eq!(config.boundary, BoundaryMode::Walls);
        assert_eq!(config.broad_phase, BroadPhase::BruteForce);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = EngineConfig::from_json_str(
            r#"{ "gravity": { "x": 0.0, "y": 0.0 }, "restitution_rule": "min" }"#,
        )
        .unwrap();
        assert_eq!(config.gravity, Vec2::ZERO);
        assert_eq!(config.restitution_rule, RestitutionRule::Min);
        assert_eq!(config.time_step, EngineConfig::default().time_step);
        assert_eq!(config.correction_percent, 0.8);
    }

    #[test]
    fn test_grid_broad_phase_from_json() {
        let config = EngineConfig::from_json_str(
            r#"{ "broad_phase": { "kind": "grid", "cell_size": 64.0 }, "boundary": "clamp_only" }"#,
        )
        .unwrap();
        assert_eq!(config.broad_phase, BroadPhase::Grid { cell_size: 64.0 });
        assert_eq!(config.boundary, BoundaryMode::ClampOnly);
    }

    #[test]
    fn test_round_trip_through_json() {
        let mut config = EngineConfig::default();
        config.damping = 0.25;
        config.broad_phase = BroadPhase::Grid { cell_size: 32.0 };
        let json = config.to_json_string().unwrap();
        assert_eq!(EngineConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = EngineConfig::from_json_str("{ gravity: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_bad_correction_percent() {
        for percent in [0.0, -0.5, 1.5, f64::NAN] {
            let config = EngineConfig {
                correction_percent: percent,
                ..EngineConfig::default()
            };
            match config.validate() {
                Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, "correction_percent"),
                other => panic!("expected invalid correction_percent for {percent}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_rejects_bad_grid_cell_size() {
        let config = EngineConfig {
            broad_phase: BroadPhase::Grid { cell_size: 0.0 },
            ..EngineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "broad_phase.cell_size", .. })
        ));
    }

    #[test]
    fn test_rejects_non_finite_gravity_and_negative_damping() {
        let config = EngineConfig {
            gravity: Vec2::new(0.0, f64::INFINITY),
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());

        let config = EngineConfig {
            damping: -1.0,
            ..EngineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "damping", .. })
        ));
    }

    #[test]
    fn test_non_positive_time_step_is_accepted() {
        let config = EngineConfig {
            time_step: 0.0,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = EngineConfig::load("/definitely/not/here/engine.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_error_messages_name_the_field() {
        let err = invalid("damping", "bad");
        assert_eq!(err.to_string(), "invalid config field `damping`: bad");
    }
}
