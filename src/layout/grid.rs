//! Grid parameters shared by the tile and wall layouts.

use serde::{Deserialize, Serialize};

use crate::core::error::{ensure_positive, Error};
use crate::core::Result;

/// Default grid edge length in tiles.
pub const DEFAULT_GRID_SIZE: u32 = 11;

/// Largest accepted grid edge; bounds a tile layout at 16M placements.
pub const MAX_GRID_SIZE: u32 = 4096;

/// Default jitter magnitude for floor tiles.
pub const DEFAULT_JITTER: f32 = 0.05;

/// Square tile grid: `size` × `size` cubes of edge `cube_size`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    pub size: u32,
    pub cube_size: f32,
    /// Overrides the `size / 2` centering offset when set.
    pub half_size: Option<f32>,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            cube_size: 1.0,
            half_size: None,
        }
    }
}

impl GridSpec {
    pub fn new(size: u32, cube_size: f32) -> Self {
        Self {
            size,
            cube_size,
            half_size: None,
        }
    }

    /// Shift the grid by overriding the centering offset (in tile units).
    pub fn with_half_size(mut self, half_size: f32) -> Self {
        self.half_size = Some(half_size);
        self
    }

    /// Centering offset in tile units. Defaults to `size / 2`.
    pub fn half_size(&self) -> f32 {
        self.half_size.unwrap_or(self.size as f32 / 2.0)
    }

    /// World-space edge length of the whole grid.
    pub fn map_size(&self) -> f32 {
        self.size as f32 * self.cube_size
    }

    pub fn tile_count(&self) -> usize {
        (self.size as usize) * (self.size as usize)
    }

    /// Check size, cube size, and any half-size override.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 || self.size > MAX_GRID_SIZE {
            return Err(Error::invalid(
                "grid_size",
                format!("must be in 1..={MAX_GRID_SIZE}, got {}", self.size),
            ));
        }
        ensure_positive("cube_size", self.cube_size)?;
        if let Some(half) = self.half_size {
            if !half.is_finite() {
                return Err(Error::invalid("half_size", format!("must be finite, got {half}")));
            }
        }
        Ok(())
    }
}

/// Bounded random vertical offset applied to floor tiles.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TileJitter {
    /// Full width of the offset range; offsets fall in `[-magnitude/2, magnitude/2)`.
    pub magnitude: f32,
}

impl Default for TileJitter {
    fn default() -> Self {
        Self { magnitude: DEFAULT_JITTER }
    }
}

impl TileJitter {
    pub fn new(magnitude: f32) -> Self {
        Self { magnitude }
    }

    /// No vertical variation; every tile sits at the same height.
    pub fn none() -> Self {
        Self { magnitude: 0.0 }
    }

    pub fn validate(&self) -> Result<()> {
        if self.magnitude.is_finite() && self.magnitude >= 0.0 {
            Ok(())
        } else {
            Err(Error::invalid(
                "jitter",
                format!("must be finite and >= 0, got {}", self.magnitude),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid() {
        let grid = GridSpec::default();
        assert_eq!(grid.size, 11);
        assert_eq!(grid.cube_size, 1.0);
        assert_eq!(grid.half_size(), 5.5);
        assert_eq!(grid.tile_count(), 121);
        assert!(grid.validate().is_ok());
    }

    #[test]
    fn test_half_size_override() {
        let grid = GridSpec::new(4, 2.0).with_half_size(1.0);
        assert_eq!(grid.half_size(), 1.0);
        assert_eq!(grid.map_size(), 8.0);
    }

    #[test]
    fn test_validate_rejects_bad_grids() {
        assert!(GridSpec::new(0, 1.0).validate().unwrap_err().is_invalid_parameter());
        assert!(GridSpec::new(MAX_GRID_SIZE, 1.0).validate().is_ok());
        let err = GridSpec::new(MAX_GRID_SIZE + 1, 1.0).validate().unwrap_err();
        assert!(err.is_invalid_parameter());
        assert!(GridSpec::new(u32::MAX, 1.0).validate().is_err());
        assert!(GridSpec::new(3, 0.0).validate().is_err());
        assert!(GridSpec::new(3, -1.0).validate().is_err());
        assert!(GridSpec::new(3, 1.0).with_half_size(f32::NAN).validate().is_err());
    }

    #[test]
    fn test_jitter_validation() {
        assert!(TileJitter::default().validate().is_ok());
        assert!(TileJitter::none().validate().is_ok());
        assert!(TileJitter::new(-0.1).validate().is_err());
        assert!(TileJitter::new(f32::INFINITY).validate().is_err());
    }
}
