//! Fixed decoration catalog.
//!
//! Decorations are static props placed once on the floor. Each kind expands to
//! a small set of primitives positioned relative to the decoration's origin,
//! which sits on the floor surface.

use std::f32::consts::FRAC_PI_2;
use std::fmt;

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::primitive::{Color, Layer, Placement, Shape};

const TRUNK_COLOR: Color = Color::rgb(0x8b, 0x5a, 0x2b);
const FOLIAGE_COLOR: Color = Color::rgb(0x2e, 0x8b, 0x57);
const BUSH_COLOR: Color = Color::rgb(0x90, 0xee, 0x90);
const CAR_COLOR: Color = Color::rgb(0xff, 0x69, 0xb4);
const TIRE_COLOR: Color = Color::rgb(0x22, 0x22, 0x22);
const BUTTON_COLOR: Color = Color::rgb(0xcc, 0x22, 0x22);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecorationKind {
    Tree,
    Bush,
    Car,
    Button,
}

impl DecorationKind {
    pub fn name(self) -> &'static str {
        match self {
            DecorationKind::Tree => "tree",
            DecorationKind::Bush => "bush",
            DecorationKind::Car => "car",
            DecorationKind::Button => "button",
        }
    }
}

impl fmt::Display for DecorationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A decoration and where its base sits.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Decoration {
    pub kind: DecorationKind,
    pub position: Vec3,
}

/// The props placed in every scene, sized for the default 11×11 grid.
pub const CATALOG: [Decoration; 4] = [
    Decoration { kind: DecorationKind::Tree, position: Vec3::new(-3.0, 0.0, -3.0) },
    Decoration { kind: DecorationKind::Bush, position: Vec3::new(3.0, 0.0, -3.0) },
    Decoration { kind: DecorationKind::Car, position: Vec3::new(2.0, 0.0, 2.5) },
    Decoration { kind: DecorationKind::Button, position: Vec3::new(-2.5, 0.0, 2.0) },
];

impl Decoration {
    pub const fn new(kind: DecorationKind, position: Vec3) -> Self {
        Self { kind, position }
    }

    /// Expand into world-space primitives.
    pub fn primitives(&self) -> Vec<Placement> {
        let base = self.position;
        let part = |name: &str, shape: Shape, offset: Vec3, color: Color| {
            Placement::new(
                format!("{}-{}", self.kind, name),
                Layer::Decoration,
                shape,
                base + offset,
                color,
            )
        };

        match self.kind {
            DecorationKind::Tree => vec![
                part(
                    "trunk",
                    Shape::Cylinder { radius_top: 0.15, radius_bottom: 0.2, height: 1.0 },
                    Vec3::new(0.0, 0.5, 0.0),
                    TRUNK_COLOR,
                ),
                part(
                    "crown",
                    Shape::Cone { radius: 0.7, height: 1.5 },
                    Vec3::new(0.0, 1.75, 0.0),
                    FOLIAGE_COLOR,
                ),
            ],
            DecorationKind::Bush => vec![part(
                "foliage",
                Shape::Icosahedron { radius: 0.5 },
                Vec3::new(0.0, 0.5, 0.0),
                BUSH_COLOR,
            )],
            DecorationKind::Car => {
                let mut parts = vec![
                    part(
                        "body",
                        Shape::Box { size: Vec3::new(1.6, 0.5, 0.8) },
                        Vec3::new(0.0, 0.45, 0.0),
                        CAR_COLOR,
                    ),
                    part(
                        "cabin",
                        Shape::Box { size: Vec3::new(0.8, 0.4, 0.7) },
                        Vec3::new(-0.1, 0.9, 0.0),
                        CAR_COLOR,
                    ),
                ];
                // Wheels lie on their side: cylinder axis turned from Y onto Z.
                let axle = Quat::from_rotation_x(FRAC_PI_2);
                let hubs = [(-0.5, -0.4), (0.5, -0.4), (-0.5, 0.4), (0.5, 0.4)];
                for (i, (x, z)) in hubs.into_iter().enumerate() {
                    parts.push(
                        part(
                            &format!("wheel-{i}"),
                            Shape::Cylinder { radius_top: 0.2, radius_bottom: 0.2, height: 0.15 },
                            Vec3::new(x, 0.2, z),
                            TIRE_COLOR,
                        )
                        .with_rotation(axle),
                    );
                }
                parts
            }
            DecorationKind::Button => vec![
                part(
                    "cap",
                    Shape::Cylinder { radius_top: 0.3, radius_bottom: 0.3, height: 0.1 },
                    Vec3::new(0.0, 0.05, 0.0),
                    BUTTON_COLOR,
                )
                .with_shadows(false, true),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_one_of_each() {
        let kinds: Vec<DecorationKind> = CATALOG.iter().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            vec![
                DecorationKind::Tree,
                DecorationKind::Bush,
                DecorationKind::Car,
                DecorationKind::Button,
            ]
        );
    }

    #[test]
    fn test_primitive_counts() {
        let counts: Vec<usize> = CATALOG.iter().map(|d| d.primitives().len()).collect();
        assert_eq!(counts, vec![2, 1, 6, 1]);
    }

    #[test]
    fn test_primitives_are_offset_from_base() {
        let tree = Decoration::new(DecorationKind::Tree, Vec3::new(1.0, 0.0, 2.0));
        let parts = tree.primitives();
        assert_eq!(parts[0].name, "tree-trunk");
        assert_eq!(parts[0].position, Vec3::new(1.0, 0.5, 2.0));
        assert_eq!(parts[1].name, "tree-crown");
        assert_eq!(parts[1].shape.name(), "cone");
        assert!(parts.iter().all(|p| p.layer == Layer::Decoration));
    }

    #[test]
    fn test_decorations_rest_on_floor() {
        for decoration in CATALOG {
            let lowest = decoration
                .primitives()
                .iter()
                .map(|p| p.bounds().min.y)
                .fold(f32::INFINITY, f32::min);
            assert!(lowest.abs() < 1e-5, "{} floats at {lowest}", decoration.kind);
        }
    }

    #[test]
    fn test_car_wheels_are_rotated() {
        let car = Decoration::new(DecorationKind::Car, Vec3::ZERO).primitives();
        let wheels: Vec<&Placement> =
            car.iter().filter(|p| p.name.starts_with("car-wheel")).collect();
        assert_eq!(wheels.len(), 4);
        assert!(wheels.iter().all(|w| w.rotation != Quat::IDENTITY));
    }

    #[test]
    fn test_catalog_fits_default_grid() {
        for decoration in CATALOG {
            assert!(decoration.position.x.abs() < 5.5 && decoration.position.z.abs() < 5.5);
        }
    }
}
