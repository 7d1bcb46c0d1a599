pub mod engine;
pub mod present;

pub use engine::*;
pub use present::*;
