//! Compute module - Game of Life engine.

mod grid;
mod neighbors;
mod random;
mod rule;

pub mod serializer;

pub use grid::*;
pub use neighbors::*;
pub use random::*;
pub use rule::*;
pub use serializer::LoadError;
