//! Core primitives shared by every system: vector math, bounding boxes,
//! and borrowing helpers for the pairwise solver.

pub mod aabb;
pub mod utils;
pub mod vec2;

pub use aabb::Aabb;
pub use vec2::Vec2;
