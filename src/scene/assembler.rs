//! Scene assembly: tiles, walls, and decorations in one renderable list.

use rand::Rng;

use crate::core::Result;
use crate::layout::{
    enclosure_bounds, layout_tiles, GridSpec, TileJitter, TilePlacement, WallBlock,
    WallLayoutStrategy, WallParams,
};

use super::config::SceneConfig;
use super::decoration::{Decoration, CATALOG};
use super::primitive::{Layer, Placement, Shape, TILE_COLOR, WALL_COLOR};
use super::render::Renderer;

/// Composes the floor, enclosure, and props of one scene.
#[derive(Clone, Debug)]
pub struct SceneAssembler {
    grid: GridSpec,
    walls: WallParams,
    jitter: TileJitter,
    strategy: WallLayoutStrategy,
    decorations: Vec<Decoration>,
}

impl SceneAssembler {
    pub fn new(config: &SceneConfig) -> Self {
        let decorations = if config.decorations { CATALOG.to_vec() } else { Vec::new() };
        Self {
            grid: config.grid(),
            walls: config.wall_params(),
            jitter: config.tile_jitter(),
            strategy: config.walls,
            decorations,
        }
    }

    /// Replace the decoration set.
    pub fn with_decorations(mut self, decorations: Vec<Decoration>) -> Self {
        self.decorations = decorations;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.grid.validate()?;
        self.walls.validate()?;
        self.jitter.validate()?;
        Ok(())
    }

    /// Tiles, then walls, then decorations.
    pub fn assemble<R: Rng>(&self, rng: &mut R) -> Result<Vec<Placement>> {
        self.validate()?;

        let tiles = layout_tiles(&self.grid, self.jitter, rng)?;
        let walls = self.strategy.layout(&self.grid, &self.walls)?;

        let capacity = tiles.len() + walls.len() + 8 * self.decorations.len();
        let mut placements = Vec::with_capacity(capacity);
        placements.extend(tiles.iter().map(tile_placement));
        placements.extend(walls.iter().enumerate().map(|(i, block)| wall_placement(i, block)));
        let first_decoration = placements.len();
        for decoration in &self.decorations {
            placements.extend(decoration.primitives());
        }

        for name in wall_clashes(&walls, &placements[first_decoration..]) {
            log::warn!("Decoration part {name} overlaps the enclosure");
        }
        if let Some(bounds) = enclosure_bounds(&walls) {
            log::debug!("Enclosure bounds {:?} .. {:?}", bounds.min, bounds.max);
        }

        log::info!(
            "Assembled scene: {} tiles, {} wall blocks ({}), {} decorations, {} primitives",
            tiles.len(),
            walls.len(),
            self.strategy,
            self.decorations.len(),
            placements.len()
        );
        Ok(placements)
    }

    /// Assemble and hand the result to `renderer`. Returns the primitive count.
    pub fn render<R: Rng, T: Renderer + ?Sized>(
        &self,
        renderer: &mut T,
        rng: &mut R,
    ) -> Result<usize> {
        let placements = self.assemble(rng)?;
        renderer.render(&placements)?;
        Ok(placements.len())
    }
}

/// Assemble the scene described by `config`.
pub fn assemble_scene<R: Rng>(config: &SceneConfig, rng: &mut R) -> Result<Vec<Placement>> {
    SceneAssembler::new(config).assemble(rng)
}

/// Names of placements whose ground footprint cuts into a wall block.
fn wall_clashes<'a>(walls: &[WallBlock], placements: &'a [Placement]) -> Vec<&'a str> {
    placements
        .iter()
        .filter(|p| {
            let bounds = p.bounds();
            walls.iter().any(|w| w.footprint().footprint_overlap(&bounds) > 0.0)
        })
        .map(|p| p.name.as_str())
        .collect()
}

fn tile_placement(tile: &TilePlacement) -> Placement {
    Placement::new(
        format!("floor-{}-{}", tile.grid_x, tile.grid_z),
        Layer::Floor,
        Shape::Box { size: tile.dimensions },
        tile.position,
        TILE_COLOR,
    )
}

fn wall_placement(index: usize, block: &WallBlock) -> Placement {
    Placement::new(
        format!("wall-{index}"),
        Layer::Walls,
        Shape::Box { size: block.dimensions },
        block.position,
        WALL_COLOR,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;
    use crate::layout::RowAlignment;
    use crate::scene::decoration::DecorationKind;
    use glam::Vec3;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(11)
    }

    fn count(placements: &[Placement], layer: Layer) -> usize {
        placements.iter().filter(|p| p.layer == layer).count()
    }

    #[test]
    fn test_default_scene() {
        let placements = assemble_scene(&SceneConfig::default(), &mut rng()).unwrap();
        assert_eq!(count(&placements, Layer::Floor), 121);
        assert_eq!(count(&placements, Layer::Walls), 4 * 11 + 4);
        assert_eq!(count(&placements, Layer::Decoration), 10);
        assert_eq!(placements.len(), 121 + 48 + 10);
    }

    #[test]
    fn test_order_is_tiles_walls_decorations() {
        let placements = assemble_scene(&SceneConfig::default(), &mut rng()).unwrap();
        let layers: Vec<Layer> = placements.iter().map(|p| p.layer).collect();
        let first_wall = layers.iter().position(|&l| l == Layer::Walls).unwrap();
        let first_decoration = layers.iter().position(|&l| l == Layer::Decoration).unwrap();
        assert_eq!(first_wall, 121);
        assert!(layers[..first_wall].iter().all(|&l| l == Layer::Floor));
        assert!(layers[first_wall..first_decoration].iter().all(|&l| l == Layer::Walls));
        assert!(layers[first_decoration..].iter().all(|&l| l == Layer::Decoration));
    }

    #[test]
    fn test_solid_strategy() {
        let config = SceneConfig {
            grid_size: 4,
            walls: WallLayoutStrategy::Solid,
            decorations: false,
            ..Default::default()
        };
        let placements = assemble_scene(&config, &mut rng()).unwrap();
        assert_eq!(placements.len(), 16 + 4);
        let wall = &placements[16];
        assert_eq!(wall.name, "wall-0");
        assert_eq!(wall.color, WALL_COLOR);
        assert!(wall.cast_shadow && wall.receive_shadow);
    }

    #[test]
    fn test_reference_strategy_has_no_corner_posts() {
        let config = SceneConfig {
            grid_size: 5,
            walls: WallLayoutStrategy::Segmented { alignment: RowAlignment::Trailing },
            decorations: false,
            ..Default::default()
        };
        let placements = assemble_scene(&config, &mut rng()).unwrap();
        assert_eq!(count(&placements, Layer::Walls), 20);
    }

    #[test]
    fn test_tiles_carry_grid_names_and_material() {
        let config = SceneConfig { grid_size: 2, decorations: false, ..Default::default() };
        let placements = assemble_scene(&config, &mut rng()).unwrap();
        let names: Vec<&str> = placements[..4].iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["floor-0-0", "floor-0-1", "floor-1-0", "floor-1-1"]);
        assert!(placements[..4].iter().all(|p| p.color == TILE_COLOR));
        assert!(placements[..4]
            .iter()
            .all(|p| p.shape == Shape::Box { size: Vec3::new(1.0, 1.0, 1.0) }));
    }

    #[test]
    fn test_same_seed_same_scene() {
        let config = SceneConfig { seed: Some(5), ..Default::default() };
        let a = assemble_scene(&config, &mut config.rng()).unwrap();
        let b = assemble_scene(&config, &mut config.rng()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_decorations() {
        let config = SceneConfig { grid_size: 3, ..Default::default() };
        let assembler = SceneAssembler::new(&config)
            .with_decorations(vec![Decoration::new(DecorationKind::Bush, Vec3::ZERO)]);
        let placements = assembler.assemble(&mut rng()).unwrap();
        assert_eq!(count(&placements, Layer::Decoration), 1);
        assert_eq!(placements.last().unwrap().name, "bush-foliage");
    }

    #[test]
    fn test_catalog_clears_default_enclosure() {
        let config = SceneConfig::default();
        let walls = config.walls.layout(&config.grid(), &config.wall_params()).unwrap();
        let props: Vec<Placement> = CATALOG.iter().flat_map(Decoration::primitives).collect();
        assert!(wall_clashes(&walls, &props).is_empty());
    }

    #[test]
    fn test_decoration_on_a_wall_is_reported() {
        let config = SceneConfig {
            grid_size: 4,
            walls: WallLayoutStrategy::Solid,
            ..Default::default()
        };
        let walls = config.walls.layout(&config.grid(), &config.wall_params()).unwrap();
        let bush = Decoration::new(DecorationKind::Bush, Vec3::new(2.25, 0.0, 0.0));
        let tree = Decoration::new(DecorationKind::Tree, Vec3::ZERO);
        let props: Vec<Placement> = [bush, tree].iter().flat_map(Decoration::primitives).collect();
        assert_eq!(wall_clashes(&walls, &props), vec!["bush-foliage"]);
    }

    #[test]
    fn test_invalid_config_produces_nothing() {
        let config = SceneConfig { wall_height: -1.0, ..Default::default() };
        let mut renderer: Vec<Placement> = Vec::new();
        let err = SceneAssembler::new(&config).render(&mut renderer, &mut rng()).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "wall_height", .. }));
        assert!(renderer.is_empty());

        let config = SceneConfig { grid_size: 0, ..Default::default() };
        assert!(assemble_scene(&config, &mut rng()).unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn test_render_forwards_everything() {
        let config = SceneConfig { grid_size: 3, decorations: false, ..Default::default() };
        let mut renderer: Vec<Placement> = Vec::new();
        let n = SceneAssembler::new(&config).render(&mut renderer, &mut rng()).unwrap();
        assert_eq!(n, 9 + 12 + 4);
        assert_eq!(renderer.len(), n);
    }
}
