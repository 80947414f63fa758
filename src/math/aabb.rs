//! Axis-aligned bounding box

use crate::core::types::Vec3;

/// Axis-aligned bounding box defined by min and max corners
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Create AABB from min and max corners
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create AABB from center and half-extents
    pub fn from_center_half_extent(center: Vec3, half_extent: Vec3) -> Self {
        Self {
            min: center - half_extent,
            max: center + half_extent,
        }
    }

    /// Create AABB for a box of full `size` centered on `center`
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        Self::from_center_half_extent(center, size * 0.5)
    }

    /// Expand AABB to include point
    pub fn expand(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Overlap of the two boxes projected onto the XZ ground plane.
    pub fn footprint_overlap(&self, other: &Aabb) -> f32 {
        let dx = (self.max.x.min(other.max.x) - self.min.x.max(other.min.x)).max(0.0);
        let dz = (self.max.z.min(other.max.z) - self.min.z.max(other.min.z)).max(0.0);
        dx * dz
    }

    /// Return merged AABB containing both
    pub fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}
