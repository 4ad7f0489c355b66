//! Per-texel crater displacement
//!
//! Every texel's new height depends only on its own position and the fixed
//! parameter set, so the scratch buffer is processed row-parallel.

use std::f32::consts::{PI, TAU};

use glam::Vec2;
use rayon::prelude::*;

use crate::math::falloff::{hash_signed, lerp, smoothstep};
use crate::math::Region;
use crate::terrain::HeightmapBuffer;

use super::params::{CraterParameters, Shape};

/// Regions smaller than this run on the calling thread
const PARALLEL_THRESHOLD: usize = 4096;

/// Share of the depth lost between center and rim from bowl curvature
const BOWL_CURVATURE: f32 = 0.25;

/// Smallest rim radius a random walk may pull the rim in to, as a
/// fraction of the nominal radius
const MIN_RIM_FRACTION: f32 = 0.5;

/// Height displacement as a function of texel-space position.
///
/// Returned values are subtracted from the heightmap and must be >= 0.
pub trait DisplacementKernel: Sync {
    fn displacement_at(&self, texel: Vec2) -> f32;
}

/// Closed random walk around the rim, one node per step.
///
/// Node values are normalized to [0, 1]; 0 leaves the rim at full radius.
#[derive(Clone, Debug, PartialEq)]
pub struct RimWalk {
    nodes: Vec<f32>,
}

impl RimWalk {
    pub fn new(seed: f32, steps: u32) -> Self {
        let steps = steps.max(1) as usize;
        let seed_bits = seed.to_bits();

        let mut walk = Vec::with_capacity(steps + 1);
        let mut value = 0.0f32;
        walk.push(value);
        for i in 1..=steps {
            value += hash_signed(i as i32, 0, seed_bits);
            walk.push(value);
        }

        // Remove drift so the last node meets the first
        let drift = walk[steps];
        let mut nodes: Vec<f32> = (0..steps)
            .map(|i| walk[i] - drift * i as f32 / steps as f32)
            .collect();

        let (lo, hi) = nodes
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        let span = hi - lo;
        for n in &mut nodes {
            *n = if span > f32::EPSILON { (*n - lo) / span } else { 0.0 };
        }

        Self { nodes }
    }

    pub fn nodes(&self) -> &[f32] {
        &self.nodes
    }

    /// Walk value at `angle` radians, eased between neighbouring nodes
    pub fn sample(&self, angle: f32) -> f32 {
        let steps = self.nodes.len();
        let phase = (angle + PI) / TAU * steps as f32;
        let base = phase.floor();
        let i0 = (base as i64).rem_euclid(steps as i64) as usize;
        let i1 = (i0 + 1) % steps;
        let f = phase - base;
        lerp(self.nodes[i0], self.nodes[i1], smoothstep(0.0, 1.0, f))
    }
}

/// Crater displacement for one set of parameters
#[derive(Clone, Debug)]
pub struct CraterKernel {
    params: CraterParameters,
    border_texels: f32,
    amplitude_texels: f32,
    rim: Option<RimWalk>,
}

impl CraterKernel {
    /// `resolution` converts border and amplitude from terrain fractions
    /// into texels.
    pub fn new(params: CraterParameters, resolution: u32) -> Self {
        let rim = match params.shape {
            Shape::Circular => None,
            Shape::Random => Some(RimWalk::new(params.seed, params.steps)),
        };
        Self {
            params,
            border_texels: params.border * resolution as f32,
            amplitude_texels: params.amplitude * resolution as f32,
            rim,
        }
    }

    pub fn params(&self) -> &CraterParameters {
        &self.params
    }

    pub fn border_texels(&self) -> f32 {
        self.border_texels
    }

    /// Rim radius in the direction `angle`
    pub fn rim_radius(&self, angle: f32) -> f32 {
        let radius = self.params.radius;
        match &self.rim {
            None => radius,
            Some(walk) => {
                (radius - self.amplitude_texels * walk.sample(angle)).max(radius * MIN_RIM_FRACTION)
            }
        }
    }

    /// Distance from the center beyond which nothing is displaced
    pub fn outer_radius(&self) -> f32 {
        self.params.radius + self.border_texels
    }
}

impl DisplacementKernel for CraterKernel {
    fn displacement_at(&self, texel: Vec2) -> f32 {
        let offset = texel - self.params.center;
        let d = offset.length();
        let rim = self.rim_radius(offset.y.atan2(offset.x));
        let outer = rim + self.border_texels;
        if d.is_nan() || d >= outer {
            return 0.0;
        }

        let wall = 1.0 - smoothstep(rim * (1.0 - self.params.smoothness), outer, d);
        let t = if rim > 0.0 { (d / rim).clamp(0.0, 1.0) } else { 1.0 };
        let bowl = 1.0 - BOWL_CURVATURE * t * t;
        (self.params.depth * bowl * wall).max(0.0)
    }
}

/// Lower every texel of `scratch` by the kernel's displacement.
///
/// `region` is where `scratch` sits in the full heightmap; scratch texel
/// (u, v) is evaluated at texel-space point (region.x + u, region.y + v).
pub fn apply_displacement<K: DisplacementKernel + ?Sized>(
    scratch: &mut HeightmapBuffer,
    region: &Region,
    kernel: &K,
) {
    let width = scratch.width() as usize;
    if width == 0 || scratch.height() == 0 {
        return;
    }

    let displace_row = |(v, row): (usize, &mut [f32])| {
        let ty = (region.y + v as i32) as f32;
        for (u, height) in row.iter_mut().enumerate() {
            let tx = (region.x + u as i32) as f32;
            *height -= kernel.displacement_at(Vec2::new(tx, ty));
        }
    };

    let texels = width * scratch.height() as usize;
    let rows = scratch.as_mut_slice();
    if texels >= PARALLEL_THRESHOLD {
        log::trace!("Displacing {} texels on the rayon pool", texels);
        rows.par_chunks_mut(width).enumerate().for_each(displace_row);
    } else {
        rows.chunks_mut(width).enumerate().for_each(displace_row);
    }
}
