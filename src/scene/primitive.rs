//! Renderable primitives handed to the renderer.

use std::fmt;

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::Result;
use crate::math::Aabb;

/// Material color, serialized as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color(pub [u8; 3]);

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Parse `#rgb` or `#rrggbb` (leading `#` optional).
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        let bad = || Error::invalid("color", format!("expected #rgb or #rrggbb, got `{s}`"));
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let channel = |hex: &str| u8::from_str_radix(hex, 16).map_err(|_| bad());
        match digits.len() {
            3 => {
                let mut out = [0u8; 3];
                for (i, slot) in out.iter_mut().enumerate() {
                    let v = channel(&digits[i..i + 1])?;
                    *slot = v * 17;
                }
                Ok(Self(out))
            }
            6 => Ok(Self([
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            ])),
            _ => Err(bad()),
        }
    }

    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.0;
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Color::from_hex(&s)
    }
}

/// Floor tile material
pub const TILE_COLOR: Color = Color::rgb(0x66, 0x66, 0x66);
/// Wall material
pub const WALL_COLOR: Color = Color::rgb(0x88, 0x88, 0x88);

/// Geometry of a placed primitive, centered on its position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Shape {
    Box { size: Vec3 },
    Cylinder { radius_top: f32, radius_bottom: f32, height: f32 },
    Cone { radius: f32, height: f32 },
    Icosahedron { radius: f32 },
}

impl Shape {
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Box { .. } => "box",
            Shape::Cylinder { .. } => "cylinder",
            Shape::Cone { .. } => "cone",
            Shape::Icosahedron { .. } => "icosahedron",
        }
    }

    /// Size of the unrotated axis-aligned box enclosing the shape.
    pub fn bounding_size(&self) -> Vec3 {
        match *self {
            Shape::Box { size } => size,
            Shape::Cylinder { radius_top, radius_bottom, height } => {
                let d = 2.0 * radius_top.max(radius_bottom);
                Vec3::new(d, height, d)
            }
            Shape::Cone { radius, height } => Vec3::new(2.0 * radius, height, 2.0 * radius),
            Shape::Icosahedron { radius } => Vec3::splat(2.0 * radius),
        }
    }
}

/// Which part of the scene a placement belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layer {
    Floor,
    Walls,
    Decoration,
}

/// One primitive ready for the renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub name: String,
    pub layer: Layer,
    pub shape: Shape,
    pub position: Vec3,
    pub rotation: Quat,
    pub color: Color,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl Placement {
    /// Unrotated placement that casts and receives shadows.
    pub fn new(
        name: impl Into<String>,
        layer: Layer,
        shape: Shape,
        position: Vec3,
        color: Color,
    ) -> Self {
        Self {
            name: name.into(),
            layer,
            shape,
            position,
            rotation: Quat::IDENTITY,
            color,
            cast_shadow: true,
            receive_shadow: true,
        }
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_shadows(mut self, cast: bool, receive: bool) -> Self {
        self.cast_shadow = cast;
        self.receive_shadow = receive;
        self
    }

    /// World-space bounds of the shape's box after rotation.
    pub fn bounds(&self) -> Aabb {
        let half = self.shape.bounding_size() * 0.5;
        let mut out = Aabb::new(Vec3::splat(f32::INFINITY), Vec3::splat(f32::NEG_INFINITY));
        for i in 0..8u8 {
            let corner = Vec3::new(
                if i & 1 != 0 { half.x } else { -half.x },
                if i & 2 != 0 { half.y } else { -half.y },
                if i & 4 != 0 { half.z } else { -half.z },
            );
            out.expand(self.position + self.rotation * corner);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex() {
        assert_eq!(Color::from_hex("#666").unwrap(), TILE_COLOR);
        assert_eq!(Color::from_hex("888888").unwrap(), WALL_COLOR);
        assert_eq!(Color::from_hex("#90EE90").unwrap(), Color::rgb(0x90, 0xee, 0x90));
        assert_eq!(TILE_COLOR.to_hex(), "#666666");
        assert!(Color::from_hex("#12345").unwrap_err().is_invalid_parameter());
        assert!(Color::from_hex("#gggggg").is_err());
        assert!(Color::from_hex("#ééé").is_err());
    }

    #[test]
    fn test_color_serializes_as_hex() {
        assert_eq!(serde_json::to_string(&WALL_COLOR).unwrap(), r##""#888888""##);
        let c: Color = serde_json::from_str(r##""#ff69b4""##).unwrap();
        assert_eq!(c, Color::rgb(0xff, 0x69, 0xb4));
        assert!(serde_json::from_str::<Color>(r#""pink""#).is_err());
    }

    #[test]
    fn test_shape_bounds() {
        let size = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Shape::Box { size }.bounding_size(), size);
        assert_eq!(
            Shape::Cylinder { radius_top: 0.1, radius_bottom: 0.25, height: 1.0 }.bounding_size(),
            Vec3::new(0.5, 1.0, 0.5)
        );
        let cone = Shape::Cone { radius: 1.0, height: 2.0 };
        assert_eq!(cone.bounding_size(), Vec3::splat(2.0));
        assert_eq!(Shape::Icosahedron { radius: 0.5 }.bounding_size(), Vec3::ONE);
    }

    #[test]
    fn test_placement_defaults() {
        let shape = Shape::Box { size: Vec3::ONE };
        let p = Placement::new("floor-0-0", Layer::Floor, shape, Vec3::ZERO, TILE_COLOR);
        assert_eq!(p.rotation, Quat::IDENTITY);
        assert!(p.cast_shadow && p.receive_shadow);
        assert_eq!(p.bounds(), Aabb::new(Vec3::splat(-0.5), Vec3::splat(0.5)));

        let p = p.with_shadows(false, true);
        assert!(!p.cast_shadow && p.receive_shadow);
    }

    #[test]
    fn test_rotated_bounds() {
        let wheel = Placement::new(
            "wheel",
            Layer::Decoration,
            Shape::Cylinder { radius_top: 0.2, radius_bottom: 0.2, height: 0.1 },
            Vec3::new(0.0, 0.2, 0.0),
            TILE_COLOR,
        )
        .with_rotation(Quat::from_rotation_x(std::f32::consts::FRAC_PI_2));
        let b = wheel.bounds();
        assert!(b.min.abs_diff_eq(Vec3::new(-0.2, 0.0, -0.05), 1e-5));
        assert!(b.max.abs_diff_eq(Vec3::new(0.2, 0.4, 0.05), 1e-5));
    }

    #[test]
    fn test_placement_json_shape() {
        let shape = Shape::Icosahedron { radius: 0.5 };
        let p = Placement::new("wall-0", Layer::Walls, shape, Vec3::ZERO, WALL_COLOR);
        let value = serde_json::to_value(&p).unwrap();
        assert_eq!(value["layer"], "walls");
        assert_eq!(value["shape"]["kind"], "icosahedron");
        assert_eq!(value["color"], "#888888");
        assert_eq!(value["position"], serde_json::json!([0.0, 0.0, 0.0]));
    }
}
