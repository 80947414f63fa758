//! Scene configuration

use std::path::Path;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use crate::layout::grid::{DEFAULT_GRID_SIZE, DEFAULT_JITTER};
use crate::layout::solid::{DEFAULT_WALL_HEIGHT, DEFAULT_WALL_THICKNESS};
use crate::layout::{GridSpec, TileJitter, WallLayoutStrategy, WallParams};

/// Parameters for one generated scene.
///
/// Missing fields fall back to their defaults when loading from JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Tiles along each edge of the floor
    pub grid_size: u32,
    /// Edge length of one tile in world units
    pub cube_size: f32,
    /// Centering offset override in tile units (default `grid_size / 2`)
    pub half_size: Option<f32>,
    pub wall_height: f32,
    pub wall_thickness: f32,
    /// Full range of the random tile height offset
    pub jitter: f32,
    /// Jitter seed; a fresh one is drawn per run when absent
    pub seed: Option<u64>,
    /// Enclosure strategy
    pub walls: WallLayoutStrategy,
    /// Whether to place the decoration catalog
    pub decorations: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            cube_size: 1.0,
            half_size: None,
            wall_height: DEFAULT_WALL_HEIGHT,
            wall_thickness: DEFAULT_WALL_THICKNESS,
            jitter: DEFAULT_JITTER,
            seed: None,
            walls: WallLayoutStrategy::default(),
            decorations: true,
        }
    }
}

impl SceneConfig {
    pub fn grid(&self) -> GridSpec {
        GridSpec {
            size: self.grid_size,
            cube_size: self.cube_size,
            half_size: self.half_size,
        }
    }

    pub fn wall_params(&self) -> WallParams {
        WallParams::new(self.wall_height, self.wall_thickness)
    }

    pub fn tile_jitter(&self) -> TileJitter {
        TileJitter::new(self.jitter)
    }

    /// Check every parameter up front.
    pub fn validate(&self) -> Result<()> {
        self.grid().validate()?;
        self.wall_params().validate()?;
        self.tile_jitter().validate()?;
        Ok(())
    }

    /// Jitter RNG: seeded from `seed`, or from the thread RNG when unset.
    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        }
    }

    /// Load from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::debug!("Loaded scene config from {}", path.display());
        Ok(config)
    }

    /// Parse a JSON document.
    ///
    /// `walls` accepts either the tagged object form or a selector string such
    /// as `"segmented-reference"`. An unknown strategy is an invalid parameter
    /// rather than a JSON error.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut value: serde_json::Value = serde_json::from_str(json)?;
        let walls = value.as_object_mut().and_then(|fields| fields.remove("walls"));

        let mut config: Self = serde_json::from_value(value)?;
        if let Some(walls) = walls {
            config.walls = match walls {
                serde_json::Value::String(selector) => selector.parse()?,
                other => WallLayoutStrategy::deserialize(other)
                    .map_err(|e| Error::invalid("walls", e.to_string()))?,
            };
        }
        Ok(config)
    }

    /// Save as pretty JSON, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, json)?;
        Ok(())
    }
}
