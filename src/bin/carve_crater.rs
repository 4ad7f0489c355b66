//! Crater carving binary — carves one crater into a heightmap PNG.
//!
//! Usage: cargo run --release --bin carve_crater -- [OPTIONS]
//!
//! Terrain:
//!   --heightmap <PNG>     Load base heights from a grayscale image
//!                         (default: generate FBM terrain)
//!   --resolution <N>      Heightmap texels per side (default: 513)
//!   --size-x <W>          Terrain world width (default: 1000)
//!   --size-y <H>          Terrain world height (default: 600)
//!   --size-z <D>          Terrain world depth (default: 1000)
//!   --origin-x <X>        Terrain world origin x (default: 0)
//!   --origin-z <Z>        Terrain world origin z (default: 0)
//!   --terrain-seed <SEED> Base terrain noise seed (default: 12345)
//!
//! Crater:
//!   --config <JSON>       Crater settings file (missing fields use defaults)
//!   --emitter-x <X>       Emitter world x (default: terrain center)
//!   --emitter-z <Z>       Emitter world z (default: terrain center)
//!   --shape <SHAPE>       circular | random
//!   --radius <R>          Radius in world units
//!   --depth <D>           Depth in world height units
//!   --border <B>          Border softness width
//!   --steps <N>           Rim random walk steps
//!   --amplitude <A>       Rim perturbation amplitude
//!   --smoothness <S>      Wall smoothness
//!   --seed <SEED>         Fixed rim seed (default: random each run)
//!
//! Output:
//!   --out <PNG>           Carved heightmap (default: crater.png)
//!   --report <JSON>       Write settings, seed and outcome as JSON
//!   --save-config <JSON>  Write the effective settings (with seed) back out

use std::path::{Path, PathBuf};
use std::time::Instant;

use glam::{Vec2, Vec3};
use serde_json::json;

use crater::carve::{CraterEmitter, CraterOutcome, CraterSettings, Shape};
use crater::core::{logging, Error, Result};
use crater::terrain::{io, TerrainGenerator, TerrainHeightmap, TerrainMetadata, TerrainParams};

fn main() {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    if let Err(err) = run(&args) {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<()> {
    let defaults = TerrainMetadata::default();
    let metadata = TerrainMetadata::new(
        Vec2::new(
            parse_f32_arg(args, "--origin-x")?.unwrap_or(defaults.world_origin.x),
            parse_f32_arg(args, "--origin-z")?.unwrap_or(defaults.world_origin.y),
        ),
        Vec3::new(
            parse_f32_arg(args, "--size-x")?.unwrap_or(defaults.world_size.x),
            parse_f32_arg(args, "--size-y")?.unwrap_or(defaults.world_size.y),
            parse_f32_arg(args, "--size-z")?.unwrap_or(defaults.world_size.z),
        ),
        parse_u32_arg(args, "--resolution")?.unwrap_or(defaults.heightmap_resolution),
    );

    let settings = load_settings(args)?;
    let fixed_seed = parse_f32_arg(args, "--seed")?;
    let out = parse_str_arg(args, "--out").unwrap_or_else(|| "crater.png".to_string());
    let out = PathBuf::from(out);

    let center = metadata.world_origin + Vec2::new(metadata.world_size.x, metadata.world_size.z) * 0.5;
    let emitter = Vec2::new(
        parse_f32_arg(args, "--emitter-x")?.unwrap_or(center.x),
        parse_f32_arg(args, "--emitter-z")?.unwrap_or(center.y),
    );

    println!("=== Crater ===");
    println!("Terrain: {}x{} texels over {} x {} x {}",
        metadata.heightmap_resolution, metadata.heightmap_resolution,
        metadata.world_size.x, metadata.world_size.y, metadata.world_size.z);
    println!("Emitter: ({}, {})", emitter.x, emitter.y);
    println!("Shape:   {:?}, radius {}, depth {}", settings.shape, settings.radius, settings.depth);
    println!();

    let mut terrain = match parse_str_arg(args, "--heightmap") {
        Some(path) => TerrainHeightmap::new(metadata, io::load_heightmap(Path::new(&path))?)?,
        None => {
            let seed = parse_u32_arg(args, "--terrain-seed")?.unwrap_or(12345);
            TerrainGenerator::new(TerrainParams { seed, ..Default::default() }).generate(metadata)
        }
    };

    let start = Instant::now();
    let mut carver = CraterEmitter::new(settings);
    let outcome = match fixed_seed {
        Some(seed) => carver.carve_with_seed(&mut terrain, &metadata, emitter, seed),
        None => carver.carve(&mut terrain, &metadata, emitter),
    };
    let elapsed = start.elapsed();

    match outcome {
        CraterOutcome::Applied(region) => println!(
            "Applied: region ({}, {}) {}x{} in {:.2}ms, seed {}",
            region.x, region.y, region.width, region.height,
            elapsed.as_secs_f64() * 1000.0, carver.seed()
        ),
        CraterOutcome::Skipped { region, reason } => println!(
            "Skipped: region ({}, {}) {}x{} ({:?})",
            region.x, region.y, region.width, region.height, reason
        ),
    }

    io::save_heightmap(terrain.heights(), &out)?;

    if let Some(path) = parse_str_arg(args, "--report") {
        let region = outcome.region();
        let report = json!({
            "applied": outcome.is_applied(),
            "region": region,
            "emitter": [emitter.x, emitter.y],
            "terrain": metadata,
            "settings": carver.settings(),
            "output": out.display().to_string(),
        });
        std::fs::write(&path, serde_json::to_string_pretty(&report)?)?;
    }

    if let Some(path) = parse_str_arg(args, "--save-config") {
        carver.settings().save(Path::new(&path))?;
    }

    println!("Output:  {}", out.display());
    Ok(())
}

/// Settings file (if any), clamped to editor ranges, then flag overrides
fn load_settings(args: &[String]) -> Result<CraterSettings> {
    let mut settings = match parse_str_arg(args, "--config") {
        Some(path) => CraterSettings::load(Path::new(&path))?.clamped(),
        None => CraterSettings::default(),
    };

    if let Some(shape) = parse_str_arg(args, "--shape") {
        settings.shape = match shape.to_ascii_lowercase().as_str() {
            "circular" => Shape::Circular,
            "random" => Shape::Random,
            other => return Err(Error::InvalidArgument(format!("unknown shape '{}'", other))),
        };
    }
    if let Some(v) = parse_f32_arg(args, "--radius")? { settings.radius = v; }
    if let Some(v) = parse_f32_arg(args, "--depth")? { settings.depth = v; }
    if let Some(v) = parse_f32_arg(args, "--border")? { settings.border = v; }
    if let Some(v) = parse_u32_arg(args, "--steps")? { settings.steps = v; }
    if let Some(v) = parse_f32_arg(args, "--amplitude")? { settings.amplitude = v; }
    if let Some(v) = parse_f32_arg(args, "--smoothness")? { settings.smoothness = v; }

    Ok(settings.clamped())
}

fn parse_f32_arg(args: &[String], flag: &str) -> Result<Option<f32>> {
    parse_arg(args, flag)
}

fn parse_u32_arg(args: &[String], flag: &str) -> Result<Option<u32>> {
    parse_arg(args, flag)
}

fn parse_arg<T: std::str::FromStr>(args: &[String], flag: &str) -> Result<Option<T>> {
    match parse_str_arg(args, flag) {
        None => Ok(None),
        Some(s) => s
            .parse()
            .map(Some)
            .map_err(|_| Error::InvalidArgument(format!("{} expects a number, got '{}'", flag, s))),
    }
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}
