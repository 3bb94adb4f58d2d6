pub mod engine;
pub use engine::*;

pub mod summary;
pub use summary::*;
