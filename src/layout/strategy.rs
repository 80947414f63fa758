//! Wall layout strategy selection.

use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::Result;
use crate::math::Aabb;

use super::grid::GridSpec;
use super::segmented::{layout_segmented_walls, CornerPost, RowAlignment, WallSegment};
use super::solid::{layout_solid_walls, SolidWall, WallParams};

/// How the enclosure around the grid is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum WallLayoutStrategy {
    /// Four full-length boxes.
    Solid,
    /// Rows of unit-length segments.
    Segmented {
        #[serde(default)]
        alignment: RowAlignment,
    },
}

impl Default for WallLayoutStrategy {
    fn default() -> Self {
        WallLayoutStrategy::Segmented {
            alignment: RowAlignment::Centered,
        }
    }
}

impl WallLayoutStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            WallLayoutStrategy::Solid => "solid",
            WallLayoutStrategy::Segmented { alignment: RowAlignment::Centered } => "segmented",
            WallLayoutStrategy::Segmented { alignment: RowAlignment::Trailing } => {
                "segmented-reference"
            }
        }
    }

    /// Lay out the enclosure as strategy-independent boxes.
    pub fn layout(&self, grid: &GridSpec, walls: &WallParams) -> Result<Vec<WallBlock>> {
        let blocks: Vec<WallBlock> = match *self {
            WallLayoutStrategy::Solid => layout_solid_walls(grid, walls)?
                .into_iter()
                .map(WallBlock::from)
                .collect(),
            WallLayoutStrategy::Segmented { alignment } => {
                let enclosure = layout_segmented_walls(grid, walls, alignment)?;
                enclosure
                    .segments
                    .into_iter()
                    .map(WallBlock::from)
                    .chain(enclosure.corners.into_iter().map(WallBlock::from))
                    .collect()
            }
        };
        Ok(blocks)
    }
}

impl FromStr for WallLayoutStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "solid" => Ok(WallLayoutStrategy::Solid),
            "segmented" => Ok(WallLayoutStrategy::Segmented {
                alignment: RowAlignment::Centered,
            }),
            "segmented-reference" => Ok(WallLayoutStrategy::Segmented {
                alignment: RowAlignment::Trailing,
            }),
            other => Err(Error::invalid(
                "wall_strategy",
                format!("expected `solid`, `segmented` or `segmented-reference`, got `{other}`"),
            )),
        }
    }
}

impl fmt::Display for WallLayoutStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single wall box, whichever strategy produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallBlock {
    pub position: Vec3,
    pub dimensions: Vec3,
}

impl WallBlock {
    pub fn footprint(&self) -> Aabb {
        Aabb::from_center_size(self.position, self.dimensions)
    }
}

/// Smallest box holding every block, or `None` for an empty enclosure.
pub fn enclosure_bounds(blocks: &[WallBlock]) -> Option<Aabb> {
    blocks.iter().map(WallBlock::footprint).reduce(|a, b| a.merged(&b))
}

impl From<SolidWall> for WallBlock {
    fn from(wall: SolidWall) -> Self {
        Self {
            position: wall.position,
            dimensions: wall.dimensions,
        }
    }
}

impl From<WallSegment> for WallBlock {
    fn from(segment: WallSegment) -> Self {
        Self {
            position: segment.position,
            dimensions: segment.dimensions,
        }
    }
}

impl From<CornerPost> for WallBlock {
    fn from(post: CornerPost) -> Self {
        Self {
            position: post.position,
            dimensions: post.dimensions,
        }
    }
}
