//! World-space crater emitter

use glam::Vec2;
use rand::Rng;

use crate::terrain::{HeightmapHost, TerrainHeightmap, TerrainMetadata};

use super::params::{CraterSettings, SEED_RANGE};
use super::writer::{execute, CraterOutcome};

/// Carves craters at world-space emitter positions.
///
/// Holds the user-facing settings. Each [`carve`](Self::carve) draws a new
/// seed and records it in the settings, so the last crater can be
/// reproduced with [`carve_with_seed`](Self::carve_with_seed).
#[derive(Clone, Debug, Default)]
pub struct CraterEmitter {
    settings: CraterSettings,
}

impl CraterEmitter {
    pub fn new(settings: CraterSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &CraterSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut CraterSettings {
        &mut self.settings
    }

    /// Seed used by the most recent carve
    pub fn seed(&self) -> f32 {
        self.settings.seed
    }

    /// Carve with a freshly drawn seed
    pub fn carve<H: HeightmapHost + ?Sized>(
        &mut self,
        host: &mut H,
        metadata: &TerrainMetadata,
        emitter: Vec2,
    ) -> CraterOutcome {
        let seed = rand::rng().random_range(*SEED_RANGE.start()..*SEED_RANGE.end());
        self.carve_with_seed(host, metadata, emitter, seed)
    }

    /// Carve with an explicit seed
    pub fn carve_with_seed<H: HeightmapHost + ?Sized>(
        &mut self,
        host: &mut H,
        metadata: &TerrainMetadata,
        emitter: Vec2,
        seed: f32,
    ) -> CraterOutcome {
        self.settings.seed = seed;
        let params = self.settings.to_parameters(metadata, emitter);
        log::debug!(
            "Crater at world ({}, {}) -> texel ({:.3}, {:.3}), radius {:.3} texels, seed {}",
            emitter.x,
            emitter.y,
            params.center.x,
            params.center.y,
            params.radius,
            seed
        );
        execute(host, metadata, &params)
    }

    /// Carve into an in-memory terrain using its own metadata
    pub fn carve_terrain(&mut self, terrain: &mut TerrainHeightmap, emitter: Vec2) -> CraterOutcome {
        let metadata = *terrain.metadata();
        self.carve(terrain, &metadata, emitter)
    }
}
