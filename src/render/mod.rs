pub mod manifest;
pub mod pacing;
pub mod surface;

pub use manifest::{BallSprite, BlockSprite, Manifest};
pub use pacing::FrameLimiter;
pub use surface::{DrawCommand, DrawList, Surface};
