//! Mathematical utilities and data structures

pub mod region;
pub mod falloff;

pub use region::Region;
pub use falloff::{smoothstep, lerp};
