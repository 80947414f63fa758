//! Layout of the floor grid and its enclosure.
//!
//! Every function here is a pure function of its parameters; the only
//! randomness is tile jitter, drawn from the RNG the caller passes in.

pub mod grid;
pub mod tiles;
pub mod solid;
pub mod segmented;
pub mod strategy;

pub use grid::{GridSpec, TileJitter};
pub use tiles::{layout_tiles, TilePlacement};
pub use solid::{layout_solid_walls, SolidWall, WallEdge, WallParams};
pub use segmented::{
    layout_segmented_walls, layout_wall_row, CornerPost, Orientation, RowAlignment,
    SegmentedEnclosure, WallSegment,
};
pub use strategy::{enclosure_bounds, WallBlock, WallLayoutStrategy};
