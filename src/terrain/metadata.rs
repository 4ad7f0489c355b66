//! Terrain placement and sampling metadata

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::coords;

/// Immutable snapshot of where a terrain sits in the world and how finely
/// its heightmap samples it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TerrainMetadata {
    /// World-space (x, z) of the terrain's low corner
    pub world_origin: Vec2,
    /// World-space extent (x = width, y = max height, z = depth)
    pub world_size: Vec3,
    /// Heightmap texels per side
    pub heightmap_resolution: u32,
}

impl Default for TerrainMetadata {
    fn default() -> Self {
        Self {
            world_origin: Vec2::ZERO,
            world_size: Vec3::new(1000.0, 600.0, 1000.0),
            heightmap_resolution: 513,
        }
    }
}

impl TerrainMetadata {
    pub fn new(world_origin: Vec2, world_size: Vec3, heightmap_resolution: u32) -> Self {
        Self {
            world_origin,
            world_size,
            heightmap_resolution,
        }
    }

    /// World (x, z) to heightmap texel space
    pub fn world_to_texel(&self, p: Vec2) -> Vec2 {
        coords::world_to_texel(
            p,
            self.world_origin,
            self.world_size.x,
            self.world_size.z,
            self.heightmap_resolution,
        )
    }

    /// Heightmap texel space to world (x, z)
    pub fn texel_to_world(&self, p: Vec2) -> Vec2 {
        coords::texel_to_world(
            p,
            self.world_origin,
            self.world_size.x,
            self.world_size.z,
            self.heightmap_resolution,
        )
    }

    /// World-space length to texels, scaled by the larger horizontal extent
    pub fn texel_radius(&self, world_radius: f32) -> f32 {
        coords::world_radius_to_texels(
            world_radius,
            self.world_size.x,
            self.world_size.z,
            self.heightmap_resolution,
        )
    }

    /// World height units to normalized heightmap units
    pub fn normalized_height(&self, world_height: f32) -> f32 {
        world_height / self.world_size.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_metadata() {
        let meta = TerrainMetadata::default();
        assert_eq!(meta.heightmap_resolution, 513);
        assert_eq!(meta.world_size, Vec3::new(1000.0, 600.0, 1000.0));
    }

    #[test]
    fn test_emitter_at_terrain_center() {
        let meta = TerrainMetadata::default();
        let texel = meta.world_to_texel(Vec2::new(500.0, 500.0));
        assert!((texel.x - 256.5).abs() < 1e-4);
        assert!((texel.y - 256.5).abs() < 1e-4);
    }

    #[test]
    fn test_texel_radius() {
        let meta = TerrainMetadata::default();
        assert!((meta.texel_radius(5.0) - 2.565).abs() < 1e-5);
    }

    #[test]
    fn test_normalized_height() {
        let meta = TerrainMetadata::default();
        assert!((meta.normalized_height(3.0) - 0.005).abs() < 1e-7);
    }

    #[test]
    fn test_serde_roundtrip() {
        let meta = TerrainMetadata::new(Vec2::new(-50.0, 25.0), Vec3::new(200.0, 80.0, 400.0), 257);
        let json = serde_json::to_string(&meta).unwrap();
        let back: TerrainMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(meta, back);
    }
}
