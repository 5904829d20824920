pub mod integrator;

pub use integrator::{contain, integrate};
