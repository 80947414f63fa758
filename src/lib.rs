//! Gridroom - procedural floor grid and enclosure layout for small 3D scenes

pub mod core;
pub mod math;
pub mod layout;
pub mod scene;
