//! Value types for positions and collision: [Vec2] and integer axis-aligned boxes.
mod aabb;
mod vector;

pub use aabb::{Aabb2, Aabb3};
pub use vector::Vec2;
