//! Gridroom - generate a tiled room scene and write it as JSON
//!
//! Usage: gridroom [--config FILE] [--size N] [--cube S] [--height H]
//!                 [--thickness T] [--jitter J] [--seed SEED]
//!                 [--walls solid|segmented|segmented-reference]
//!                 [--no-decorations] [--out FILE]

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::str::FromStr;

use gridroom::core::{logging, Error, Result};
use gridroom::layout::WallLayoutStrategy;
use gridroom::scene::{JsonRenderer, SceneAssembler, SceneConfig};

fn main() {
    logging::init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let mut config = match parse_str_arg(&args, "--config") {
        Some(path) => SceneConfig::load(&PathBuf::from(path))?,
        None => SceneConfig::default(),
    };

    if let Some(size) = parse_arg::<u32>(&args, "--size", "grid_size")? {
        config.grid_size = size;
    }
    if let Some(cube) = parse_arg::<f32>(&args, "--cube", "cube_size")? {
        config.cube_size = cube;
    }
    if let Some(height) = parse_arg::<f32>(&args, "--height", "wall_height")? {
        config.wall_height = height;
    }
    if let Some(thickness) = parse_arg::<f32>(&args, "--thickness", "wall_thickness")? {
        config.wall_thickness = thickness;
    }
    if let Some(jitter) = parse_arg::<f32>(&args, "--jitter", "jitter")? {
        config.jitter = jitter;
    }
    if let Some(seed) = parse_arg::<u64>(&args, "--seed", "seed")? {
        config.seed = Some(seed);
    }
    if let Some(walls) = parse_str_arg(&args, "--walls") {
        config.walls = WallLayoutStrategy::from_str(&walls)?;
    }
    if args.iter().any(|a| a == "--no-decorations") {
        config.decorations = false;
    }

    config.validate()?;
    log::info!(
        "Grid {}x{} (cube {}), walls: {}, seed: {}",
        config.grid_size,
        config.grid_size,
        config.cube_size,
        config.walls,
        config.seed.map_or_else(|| "random".to_string(), |s| s.to_string())
    );

    let assembler = SceneAssembler::new(&config);
    let mut rng = config.rng();

    let count = match parse_str_arg(&args, "--out") {
        Some(path) => {
            let path = PathBuf::from(path);
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let mut renderer = JsonRenderer::new(BufWriter::new(File::create(&path)?));
            let count = assembler.render(&mut renderer, &mut rng)?;
            log::info!("Wrote {} primitives to {}", count, path.display());
            count
        }
        None => {
            let mut renderer = JsonRenderer::new(io::stdout().lock());
            assembler.render(&mut renderer, &mut rng)?
        }
    };
    log::debug!("Done ({count} primitives)");

    Ok(())
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

/// Parse the value following `flag`. A present but malformed value is an error.
fn parse_arg<T: FromStr>(args: &[String], flag: &str, name: &'static str) -> Result<Option<T>> {
    match parse_str_arg(args, flag) {
        None => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(|_| Error::InvalidParameter {
            name,
            reason: format!("cannot parse `{raw}` for {flag}"),
        }),
    }
}
