//! Heightmap import/export as 16-bit grayscale PNG

use std::path::Path;

use image::{ImageBuffer, Luma};

use crate::core::{Error, Result};
use super::heightmap::HeightmapBuffer;

/// Load a grayscale image as normalized heights.
///
/// Any format the `image` crate understands works; samples are widened to
/// 16 bits and mapped onto [0, 1].
pub fn load_heightmap(path: &Path) -> Result<HeightmapBuffer> {
    let img = image::open(path)?.into_luma16();
    let (width, height) = img.dimensions();
    let data = img
        .into_raw()
        .into_iter()
        .map(|v| v as f32 / u16::MAX as f32)
        .collect();
    log::info!("Loaded {}x{} heightmap from {}", width, height, path.display());
    HeightmapBuffer::from_data(width, height, data)
}

/// Save normalized heights as a 16-bit grayscale PNG.
///
/// Heights outside [0, 1] are clamped.
pub fn save_heightmap(heights: &HeightmapBuffer, path: &Path) -> Result<()> {
    let raw: Vec<u16> = heights
        .as_slice()
        .iter()
        .map(|&h| (h.clamp(0.0, 1.0) * u16::MAX as f32).round() as u16)
        .collect();
    let img: ImageBuffer<Luma<u16>, Vec<u16>> =
        ImageBuffer::from_raw(heights.width(), heights.height(), raw).ok_or_else(|| {
            Error::InvalidArgument(format!(
                "cannot encode {}x{} heightmap",
                heights.width(),
                heights.height()
            ))
        })?;
    img.save(path)?;
    log::info!(
        "Saved {}x{} heightmap to {}",
        heights.width(),
        heights.height(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let path = temp_dir.path().join("heights.png");

        let mut heights = HeightmapBuffer::filled(17, 9, 0.5);
        heights.set(3, 4, 0.0);
        heights.set(16, 8, 1.0);
        save_heightmap(&heights, &path).unwrap();

        let loaded = load_heightmap(&path).unwrap();
        assert_eq!(loaded.width(), 17);
        assert_eq!(loaded.height(), 9);
        assert_eq!(loaded.get(3, 4), 0.0);
        assert_eq!(loaded.get(16, 8), 1.0);
        assert!((loaded.get(0, 0) - 0.5).abs() < 1.0 / u16::MAX as f32);
    }

    #[test]
    fn test_save_clamps_out_of_range() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let path = temp_dir.path().join("clamped.png");

        let mut heights = HeightmapBuffer::new(4, 4);
        heights.set(0, 0, -0.2);
        heights.set(1, 0, 1.7);
        save_heightmap(&heights, &path).unwrap();

        let loaded = load_heightmap(&path).unwrap();
        assert_eq!(loaded.get(0, 0), 0.0);
        assert_eq!(loaded.get(1, 0), 1.0);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        assert!(load_heightmap(&temp_dir.path().join("missing.png")).is_err());
    }
}
