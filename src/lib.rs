//! A small 2D physics engine for balls and axis-aligned blocks.
//!
//! Hosts build [`Ball`]s and [`Block`]s, hand them to an [`Engine`], tick it
//! with [`Engine::update`] and paint the latest [`Manifest`] onto any
//! [`Surface`] with [`Engine::draw`].

pub mod math;
pub mod common;
pub mod objects;
pub mod collision;
pub mod integration;
pub mod world;
pub mod render;

// Re-export key types for easier use
pub use math::vec2::Vec2;
pub use common::{BoundaryMode, BroadPhase, Color, ConfigError, EngineConfig, RestitutionRule};
pub use objects::{Ball, Block};
pub use collision::{Collider, Contact, Wall, AABB};
pub use world::{Engine, World};
pub use render::{BallSprite, BlockSprite, DrawCommand, DrawList, FrameLimiter, Manifest, Surface};
