//! Crater shape parameters and user-facing settings

use std::ops::RangeInclusive;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::Result;
use crate::terrain::TerrainMetadata;

/// Editor ranges for the tunable settings
pub const DEPTH_RANGE: RangeInclusive<f32> = 0.0..=10.0;
pub const BORDER_RANGE: RangeInclusive<f32> = 0.0..=0.01;
pub const STEPS_RANGE: RangeInclusive<u32> = 8..=40;
pub const SEED_RANGE: RangeInclusive<f32> = -1e5..=1e5;
pub const AMPLITUDE_RANGE: RangeInclusive<f32> = 0.001..=0.01;
pub const SMOOTHNESS_RANGE: RangeInclusive<f32> = 0.05..=0.4;

/// Crater footprint
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Round bowl with a soft border band
    Circular,
    /// Round bowl whose rim is pulled in by a seeded random walk
    #[default]
    Random,
}

/// Texel-space parameters for a single crater operation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CraterParameters {
    pub shape: Shape,
    /// Crater center in heightmap texel space
    pub center: Vec2,
    /// Radius in texels
    pub radius: f32,
    /// Depth at the center in normalized height units
    pub depth: f32,
    /// Soft band width past the rim, as a fraction of the heightmap extent
    pub border: f32,
    /// Random walk node count (random shape only)
    pub steps: u32,
    pub seed: f32,
    /// Maximum rim pull-in, as a fraction of the heightmap extent
    pub amplitude: f32,
    /// Fraction of the radius over which the wall eases in
    pub smoothness: f32,
}

/// World-space crater settings as exposed to an editor or config file
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CraterSettings {
    pub shape: Shape,
    /// Radius in world units
    pub radius: f32,
    /// Depth in world height units
    pub depth: f32,
    pub border: f32,
    pub steps: u32,
    /// Replaced with a fresh random value on every interactive run
    pub seed: f32,
    pub amplitude: f32,
    pub smoothness: f32,
}

impl Default for CraterSettings {
    fn default() -> Self {
        Self {
            shape: Shape::Random,
            radius: 5.0,
            depth: 3.0,
            border: 0.003,
            steps: 24,
            seed: 0.0,
            amplitude: 0.005,
            smoothness: 0.3,
        }
    }
}

impl CraterSettings {
    /// Read settings from a JSON file; missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let settings: CraterSettings = serde_json::from_str(&json)?;
        log::debug!("Loaded crater settings from {}: {:?}", path.display(), settings);
        Ok(settings)
    }

    /// Write settings as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Clamp every ranged setting into its editor range.
    ///
    /// The radius has no editor range and is left untouched.
    pub fn clamped(&self) -> Self {
        Self {
            shape: self.shape,
            radius: self.radius,
            depth: self.depth.clamp(*DEPTH_RANGE.start(), *DEPTH_RANGE.end()),
            border: self.border.clamp(*BORDER_RANGE.start(), *BORDER_RANGE.end()),
            steps: self.steps.clamp(*STEPS_RANGE.start(), *STEPS_RANGE.end()),
            seed: self.seed.clamp(*SEED_RANGE.start(), *SEED_RANGE.end()),
            amplitude: self.amplitude.clamp(*AMPLITUDE_RANGE.start(), *AMPLITUDE_RANGE.end()),
            smoothness: self.smoothness.clamp(*SMOOTHNESS_RANGE.start(), *SMOOTHNESS_RANGE.end()),
        }
    }

    /// Project onto a terrain: emitter (x, z) becomes the texel-space
    /// center, radius goes to texels, depth to normalized height.
    pub fn to_parameters(&self, metadata: &TerrainMetadata, emitter: Vec2) -> CraterParameters {
        CraterParameters {
            shape: self.shape,
            center: metadata.world_to_texel(emitter),
            radius: metadata.texel_radius(self.radius),
            depth: metadata.normalized_height(self.depth),
            border: self.border,
            steps: self.steps,
            seed: self.seed,
            amplitude: self.amplitude,
            smoothness: self.smoothness,
        }
    }
}
