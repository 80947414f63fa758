//! Local transforms for grouped placements.
//!
//! Wall rows are laid out in a group-local frame and moved into world space by
//! the group's transform, the way a scene-graph parent would place its children.

use glam::{Mat4, Quat, Vec3};

/// Local transform of a group relative to the world origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocalTransform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: f32,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: 1.0,
        }
    }
}

impl LocalTransform {
    /// Create a translation-only transform.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Convert to a 4x4 matrix.
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            self.rotation,
            self.position,
        )
    }

    /// Map a point from the group frame into world space.
    pub fn apply(&self, local: Vec3) -> Vec3 {
        self.to_mat4().transform_point3(local)
    }
}
