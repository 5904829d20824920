pub mod ball;
pub mod block;

pub use ball::Ball;
pub use block::Block;
