pub mod aabb;
pub mod detection;
pub mod manifold;
pub mod resolution;
pub mod spatial_grid;

// Re-export key types
pub use aabb::AABB;
pub use detection::{check_ball_ball, check_ball_block, check_ball_wall, detect_contacts};
pub use manifold::{Collider, Contact, Wall};
pub use resolution::Resolver;
pub use spatial_grid::SpatialGrid;
