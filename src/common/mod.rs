pub mod color;
pub mod config;
pub mod material;

pub use color::Color;
pub use config::{BoundaryMode, BroadPhase, ConfigError, EngineConfig};
pub use material::RestitutionRule;
