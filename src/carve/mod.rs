//! Crater carving
//!
//! A crater is carved by mapping the emitter into texel space, deriving a
//! square region around it, displacing every texel of that region and
//! writing it back. Regions that do not fit the heightmap are skipped
//! without touching anything.

pub mod params;
pub mod kernel;
pub mod writer;
pub mod emitter;

// Re-exports
pub use params::{CraterParameters, CraterSettings, Shape};
pub use kernel::{apply_displacement, CraterKernel, DisplacementKernel, RimWalk};
pub use writer::{derive_region, execute, execute_kernel, validate_region, CraterOutcome, SkipReason};
pub use emitter::CraterEmitter;
