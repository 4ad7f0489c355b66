//! Noise-based base terrain for carving into

use glam::Vec2;
use noise::{Fbm, MultiFractal, NoiseFn, Perlin};
use rayon::prelude::*;

use super::heightmap::TerrainHeightmap;
use super::metadata::TerrainMetadata;

/// Parameters controlling base terrain generation
#[derive(Clone, Debug)]
pub struct TerrainParams {
    pub seed: u32,
    pub scale: f32,        // Horizontal scale in world units (larger = smoother)
    pub base_height: f32,  // Normalized height at noise value -1
    pub height_range: f32, // Normalized height span covered by the noise
    pub octaves: u32,      // FBM octaves (detail levels)
    pub persistence: f32,  // FBM persistence (0.5 typical)
    pub lacunarity: f32,   // FBM lacunarity (2.0 typical)
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            seed: 12345,
            scale: 250.0,
            base_height: 0.3,
            height_range: 0.2,
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
        }
    }
}

/// Procedural heightmap generator using fractal Brownian motion (FBM)
pub struct TerrainGenerator {
    params: TerrainParams,
    noise: Fbm<Perlin>,
}

impl TerrainGenerator {
    pub fn new(params: TerrainParams) -> Self {
        let noise = Fbm::<Perlin>::new(params.seed)
            .set_octaves(params.octaves as usize)
            .set_persistence(params.persistence as f64)
            .set_lacunarity(params.lacunarity as f64);

        Self { params, noise }
    }

    pub fn params(&self) -> &TerrainParams {
        &self.params
    }

    /// Normalized height at world position (x, z), clamped to [0, 1]
    pub fn height_at(&self, x: f32, z: f32) -> f32 {
        let nx = (x / self.params.scale) as f64;
        let nz = (z / self.params.scale) as f64;

        // Noise value in [-1, 1]
        let noise_value = self.noise.get([nx, nz]);
        let normalized = ((noise_value + 1.0) / 2.0) as f32;
        (self.params.base_height + normalized * self.params.height_range).clamp(0.0, 1.0)
    }

    /// Sample the full heightmap for a terrain, one row per rayon task
    pub fn generate(&self, metadata: TerrainMetadata) -> TerrainHeightmap {
        let res = metadata.heightmap_resolution;
        let mut terrain = TerrainHeightmap::flat(metadata, 0.0);

        let start = std::time::Instant::now();
        terrain
            .heights_mut()
            .as_mut_slice()
            .par_chunks_mut(res.max(1) as usize)
            .enumerate()
            .for_each(|(row, samples)| {
                for (col, sample) in samples.iter_mut().enumerate() {
                    let world = metadata.texel_to_world(Vec2::new(col as f32, row as f32));
                    *sample = self.height_at(world.x, world.y);
                }
            });

        log::info!(
            "Generated {}x{} base heightmap in {:.1}ms",
            res,
            res,
            start.elapsed().as_secs_f64() * 1000.0
        );

        terrain
    }
}
