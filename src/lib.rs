//! Crater - heightmap crater deformation for terrain editing
//!
//! Maps a world-space emitter position onto a terrain heightmap and carves a
//! circular or random-rimmed crater into the affected texel region.

pub mod core;
pub mod math;
pub mod terrain;
pub mod carve;
