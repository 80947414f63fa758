//! Geometry helpers for layout

pub mod aabb;
pub mod transform;

pub use aabb::Aabb;
pub use transform::LocalTransform;
