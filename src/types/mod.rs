// src/types/mod.rs
pub mod bounds;
pub mod segment;

pub use bounds::*;
pub use segment::*;

// Re-export the vector type the whole crate is written against
pub use bevy_math::Vec2;

/// Unified point type for the whole crate
pub type Point2D = Vec2;
