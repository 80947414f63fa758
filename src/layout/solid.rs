//! Solid perimeter walls: one box per grid edge.

use glam::Vec3;

use crate::core::error::ensure_positive;
use crate::core::Result;
use crate::math::Aabb;

use super::grid::GridSpec;

/// Default wall height in world units.
pub const DEFAULT_WALL_HEIGHT: f32 = 1.0;

/// Default wall thickness in world units.
pub const DEFAULT_WALL_THICKNESS: f32 = 0.5;

/// Height and thickness shared by every wall strategy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallParams {
    pub height: f32,
    pub thickness: f32,
}

impl Default for WallParams {
    fn default() -> Self {
        Self {
            height: DEFAULT_WALL_HEIGHT,
            thickness: DEFAULT_WALL_THICKNESS,
        }
    }
}

impl WallParams {
    pub fn new(height: f32, thickness: f32) -> Self {
        Self { height, thickness }
    }

    pub fn validate(&self) -> Result<()> {
        ensure_positive("wall_height", self.height)?;
        ensure_positive("wall_thickness", self.thickness)?;
        Ok(())
    }
}

/// Which side of the grid a wall closes off.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WallEdge {
    /// -Z
    Back,
    /// +Z
    Front,
    /// -X
    Left,
    /// +X
    Right,
}

impl WallEdge {
    pub const ALL: [WallEdge; 4] =
        [WallEdge::Back, WallEdge::Front, WallEdge::Left, WallEdge::Right];

    pub fn name(self) -> &'static str {
        match self {
            WallEdge::Back => "back",
            WallEdge::Front => "front",
            WallEdge::Left => "left",
            WallEdge::Right => "right",
        }
    }
}

/// One full-length wall box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolidWall {
    pub edge: WallEdge,
    /// World-space center of the box.
    pub position: Vec3,
    pub dimensions: Vec3,
}

impl SolidWall {
    /// Extent along the wall's long axis.
    pub fn length(&self) -> f32 {
        self.dimensions.x.max(self.dimensions.z)
    }

    pub fn footprint(&self) -> Aabb {
        Aabb::from_center_size(self.position, self.dimensions)
    }
}

/// Lay out four walls flush against the grid boundary, in back/front/left/right order.
///
/// Every wall is `map + thickness` long, so neighbouring walls overlap by half a
/// thickness on both axes at each corner.
pub fn layout_solid_walls(grid: &GridSpec, walls: &WallParams) -> Result<[SolidWall; 4]> {
    grid.validate()?;
    walls.validate()?;

    let map_size = grid.map_size();
    let half_map = map_size / 2.0;
    let offset = half_map + walls.thickness / 2.0;
    let y = walls.height / 2.0;

    let length = map_size + walls.thickness;
    let along_x = Vec3::new(length, walls.height, walls.thickness);
    let along_z = Vec3::new(walls.thickness, walls.height, length);

    let result = WallEdge::ALL.map(|side| {
        let (position, dimensions) = match side {
            WallEdge::Back => (Vec3::new(0.0, y, -offset), along_x),
            WallEdge::Front => (Vec3::new(0.0, y, offset), along_x),
            WallEdge::Left => (Vec3::new(-offset, y, 0.0), along_z),
            WallEdge::Right => (Vec3::new(offset, y, 0.0), along_z),
        };
        SolidWall { edge: side, position, dimensions }
    });

    log::debug!("Laid out solid enclosure: map {map_size}, wall offset {offset}");
    Ok(result)
}
