pub mod engine;
pub mod physics_world;

pub use engine::Engine;
pub use physics_world::World;
