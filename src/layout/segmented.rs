//! Segmented perimeter walls built from unit-length boxes.
//!
//! Each wall is a row of `wall_length` segments laid out in a group-local frame
//! and moved into place by the group's [`LocalTransform`]. Two row alignments
//! exist:
//!
//! - [`RowAlignment::Trailing`] keeps the reference offset `(i - n) * cube + cube/2`,
//!   which puts the whole row on the negative side of the group origin. The
//!   matching reference composition reuses one group position for two walls and
//!   does not close the grid.
//! - [`RowAlignment::Centered`] offsets by `(i - n/2) * cube + cube/2`, centering the
//!   row on its group. The centered composition adds four corner posts and
//!   encloses the grid with no gaps and no overlapping blocks.

use std::str::FromStr;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::core::error::{ensure_positive, Error};
use crate::core::Result;
use crate::math::{Aabb, LocalTransform};

use super::grid::GridSpec;
use super::solid::WallParams;

/// Long axis of a wall row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    /// Runs along X.
    Horizontal,
    /// Runs along Z.
    Vertical,
}

impl FromStr for Orientation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "horizontal" => Ok(Orientation::Horizontal),
            "vertical" => Ok(Orientation::Vertical),
            other => Err(Error::invalid(
                "orientation",
                format!("expected `horizontal` or `vertical`, got `{other}`"),
            )),
        }
    }
}

/// Where a row sits relative to its group origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RowAlignment {
    /// Row ends half a cube before the group origin.
    Trailing,
    /// Row is centered on the group origin.
    #[default]
    Centered,
}

impl RowAlignment {
    /// Offset of segment `index` along the row's long axis.
    pub fn local_offset(self, index: u32, wall_length: u32, cube_size: f32) -> f32 {
        let start = match self {
            RowAlignment::Trailing => wall_length as f32,
            RowAlignment::Centered => wall_length as f32 / 2.0,
        };
        (index as f32 - start) * cube_size + cube_size / 2.0
    }
}

/// One unit-length box of a wall row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallSegment {
    pub orientation: Orientation,
    pub index: u32,
    /// Center in the row's group frame.
    pub local_position: Vec3,
    /// Center in world space.
    pub position: Vec3,
    pub dimensions: Vec3,
}

impl WallSegment {
    pub fn footprint(&self) -> Aabb {
        Aabb::from_center_size(self.position, self.dimensions)
    }
}

/// Square post filling one corner of a centered enclosure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CornerPost {
    pub position: Vec3,
    pub dimensions: Vec3,
}

impl CornerPost {
    pub fn footprint(&self) -> Aabb {
        Aabb::from_center_size(self.position, self.dimensions)
    }
}

/// Four wall rows plus any corner posts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SegmentedEnclosure {
    pub segments: Vec<WallSegment>,
    pub corners: Vec<CornerPost>,
}

impl SegmentedEnclosure {
    pub fn block_count(&self) -> usize {
        self.segments.len() + self.corners.len()
    }

    pub fn footprints(&self) -> impl Iterator<Item = Aabb> + '_ {
        self.segments
            .iter()
            .map(WallSegment::footprint)
            .chain(self.corners.iter().map(CornerPost::footprint))
    }
}

/// Lay out one row of `wall_length` segments translated by `group_position`.
pub fn layout_wall_row(
    wall_length: u32,
    cube_size: f32,
    walls: &WallParams,
    group_position: Vec3,
    orientation: Orientation,
    alignment: RowAlignment,
) -> Result<Vec<WallSegment>> {
    if wall_length == 0 {
        return Err(Error::invalid("wall_length", "must be >= 1, got 0"));
    }
    ensure_positive("cube_size", cube_size)?;
    walls.validate()?;
    if !group_position.is_finite() {
        return Err(Error::invalid(
            "group_position",
            format!("must be finite, got {group_position}"),
        ));
    }

    let group = LocalTransform::from_position(group_position);
    let y = walls.height / 2.0;
    let dimensions = match orientation {
        Orientation::Horizontal => Vec3::new(cube_size, walls.height, walls.thickness),
        Orientation::Vertical => Vec3::new(walls.thickness, walls.height, cube_size),
    };

    let segments = (0..wall_length)
        .map(|index| {
            let offset = alignment.local_offset(index, wall_length, cube_size);
            let local_position = match orientation {
                Orientation::Horizontal => Vec3::new(offset, y, 0.0),
                Orientation::Vertical => Vec3::new(0.0, y, offset),
            };
            WallSegment {
                orientation,
                index,
                local_position,
                position: group.apply(local_position),
                dimensions,
            }
        })
        .collect();

    Ok(segments)
}

/// Assemble the four perimeter rows around `grid`.
pub fn layout_segmented_walls(
    grid: &GridSpec,
    walls: &WallParams,
    alignment: RowAlignment,
) -> Result<SegmentedEnclosure> {
    grid.validate()?;
    walls.validate()?;

    let rows = match alignment {
        RowAlignment::Trailing => reference_rows(grid),
        RowAlignment::Centered => centered_rows(grid, walls),
    };

    let mut enclosure = SegmentedEnclosure::default();
    for (orientation, group_position) in rows {
        enclosure.segments.extend(layout_wall_row(
            grid.size,
            grid.cube_size,
            walls,
            group_position,
            orientation,
            alignment,
        )?);
    }

    if alignment == RowAlignment::Centered {
        let off = grid.map_size() / 2.0 + walls.thickness / 2.0;
        let dimensions = Vec3::new(walls.thickness, walls.height, walls.thickness);
        for (sx, sz) in [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)] {
            enclosure.corners.push(CornerPost {
                position: Vec3::new(sx * off, walls.height / 2.0, sz * off),
                dimensions,
            });
        }
    }

    log::debug!(
        "Laid out segmented enclosure ({:?}): {} segments, {} corner posts",
        alignment,
        enclosure.segments.len(),
        enclosure.corners.len()
    );
    Ok(enclosure)
}

/// Group placement used alongside the trailing offset. Distance is in tile
/// units and does not scale with cube size.
fn reference_rows(grid: &GridSpec) -> [(Orientation, Vec3); 4] {
    let odd = if grid.size % 2 == 1 { 1.0 } else { 0.0 };
    let dist = grid.size as f32 / 2.0 + odd;
    [
        (Orientation::Horizontal, Vec3::new(dist, 0.0, dist)),
        (Orientation::Horizontal, Vec3::new(dist, 0.0, -dist)),
        (Orientation::Vertical, Vec3::new(dist, 0.0, dist)),
        (Orientation::Vertical, Vec3::new(-dist, 0.0, dist)),
    ]
}

/// Back, front, left, right rows centered on each grid edge, one half
/// thickness outside it.
fn centered_rows(grid: &GridSpec, walls: &WallParams) -> [(Orientation, Vec3); 4] {
    let off = grid.map_size() / 2.0 + walls.thickness / 2.0;
    [
        (Orientation::Horizontal, Vec3::new(0.0, 0.0, -off)),
        (Orientation::Horizontal, Vec3::new(0.0, 0.0, off)),
        (Orientation::Vertical, Vec3::new(-off, 0.0, 0.0)),
        (Orientation::Vertical, Vec3::new(off, 0.0, 0.0)),
    ]
}
