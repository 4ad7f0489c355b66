//! Error types for the crater crate

use thiserror::Error;

/// Main error type for the crate
///
/// The crater operation itself never fails; these errors come from the
/// surfaces around it (files, images, configuration, command-line input).
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Heightmap size mismatch: expected {expected}x{expected}, got {actual_width}x{actual_height}")]
    HeightmapSize {
        expected: u32,
        actual_width: u32,
        actual_height: u32,
    },
}
