//! Terrain heightmap storage, coordinate mapping and generation

pub mod metadata;
pub use metadata::TerrainMetadata;

pub mod coords;
pub use coords::{world_to_texel, texel_to_world, world_radius_to_texels};

pub mod heightmap;
pub use heightmap::{HeightmapBuffer, HeightmapHost, TerrainHeightmap};

pub mod invalidator;
pub use invalidator::HeightmapInvalidator;

pub mod generator;
pub use generator::{TerrainGenerator, TerrainParams};

pub mod io;
