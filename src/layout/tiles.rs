//! Floor tile layout.
//!
//! Produces one box per grid cell, centered on the world origin, with a small
//! random vertical offset so the floor does not read as a single flat slab.

use glam::Vec3;
use rand::Rng;

use crate::core::error::Error;
use crate::core::Result;
use crate::math::Aabb;

use super::grid::{GridSpec, TileJitter};

/// Height of every floor tile box.
pub const TILE_HEIGHT: f32 = 1.0;

/// Resting center height of a tile; the top face sits at y = 0.
pub const TILE_BASE_Y: f32 = -0.5;

/// One floor tile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TilePlacement {
    pub grid_x: u32,
    pub grid_z: u32,
    /// World-space center of the tile box.
    pub position: Vec3,
    pub dimensions: Vec3,
}

impl TilePlacement {
    pub fn footprint(&self) -> Aabb {
        Aabb::from_center_size(self.position, self.dimensions)
    }
}

/// Lay out `size²` floor tiles in row-major order over `(x, z)`.
///
/// Tile `(x, z)` is centered at `((x - half) * cube + cube/2, y, (z - half) * cube + cube/2)`
/// so neighbouring tiles touch edge to edge. `y` is [`TILE_BASE_Y`] plus a jitter
/// drawn from `rng`; passing an identically seeded RNG reproduces the output exactly.
pub fn layout_tiles<R: Rng>(
    grid: &GridSpec,
    jitter: TileJitter,
    rng: &mut R,
) -> Result<Vec<TilePlacement>> {
    grid.validate()?;
    jitter.validate()?;

    let cube = grid.cube_size;
    let half = grid.half_size();
    let dimensions = Vec3::new(cube, TILE_HEIGHT, cube);

    let mut tiles = Vec::new();
    tiles.try_reserve_exact(grid.tile_count()).map_err(|e| {
        Error::invalid("grid_size", format!("cannot hold {} tiles: {e}", grid.tile_count()))
    })?;
    for x in 0..grid.size {
        for z in 0..grid.size {
            let world_x = (x as f32 - half) * cube + cube / 2.0;
            let world_z = (z as f32 - half) * cube + cube / 2.0;
            let offset: f32 = rng.random_range(-0.5..0.5);
            let world_y = TILE_BASE_Y + offset * jitter.magnitude;

            tiles.push(TilePlacement {
                grid_x: x,
                grid_z: z,
                position: Vec3::new(world_x, world_y, world_z),
                dimensions,
            });
        }
    }

    log::debug!(
        "Laid out {} floor tiles ({}x{}, cube {})",
        tiles.len(),
        grid.size,
        grid.size,
        cube
    );
    Ok(tiles)
}
