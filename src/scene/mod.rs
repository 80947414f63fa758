//! Scene composition and the renderer boundary

pub mod assembler;
pub mod config;
pub mod decoration;
pub mod primitive;
pub mod render;

pub use assembler::{assemble_scene, SceneAssembler};
pub use config::SceneConfig;
pub use decoration::{Decoration, DecorationKind, CATALOG};
pub use primitive::{Color, Layer, Placement, Shape};
pub use render::{JsonRenderer, Renderer};
