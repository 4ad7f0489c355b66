//! Heightmap storage and the host interface the crater writer talks to

use crate::core::{Error, Result};
use crate::math::Region;

use super::invalidator::HeightmapInvalidator;
use super::metadata::TerrainMetadata;

/// Row-major grid of normalized height samples (conventionally in [0, 1])
#[derive(Clone, Debug, PartialEq)]
pub struct HeightmapBuffer {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl HeightmapBuffer {
    /// Create a zero-filled buffer
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, 0.0)
    }

    /// Create a buffer with every sample set to `value`
    pub fn filled(width: u32, height: u32, value: f32) -> Self {
        Self {
            width,
            height,
            data: vec![value; width as usize * height as usize],
        }
    }

    /// Wrap existing samples; `data.len()` must equal `width * height`
    pub fn from_data(width: u32, height: u32, data: Vec<f32>) -> Result<Self> {
        if data.len() != width as usize * height as usize {
            return Err(Error::InvalidArgument(format!(
                "heightmap data has {} samples, expected {}x{}",
                data.len(),
                width,
                height
            )));
        }
        Ok(Self { width, height, data })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Sample at texel (x, y)
    pub fn get(&self, x: u32, y: u32) -> f32 {
        self.data[self.index(x, y)]
    }

    /// Set sample at texel (x, y)
    pub fn set(&mut self, x: u32, y: u32, value: f32) {
        let i = self.index(x, y);
        self.data[i] = value;
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Copy a sub-rectangle into a new buffer of the region's size.
    ///
    /// The region must have a non-negative corner and lie inside the buffer.
    pub fn extract(&self, region: &Region) -> HeightmapBuffer {
        let (w, h) = (region.width as usize, region.height as usize);
        let mut data = Vec::with_capacity(w * h);
        for row in 0..h {
            let start = self.index(region.x as u32, region.y as u32 + row as u32);
            data.extend_from_slice(&self.data[start..start + w]);
        }
        HeightmapBuffer {
            width: w as u32,
            height: h as u32,
            data,
        }
    }

    /// Copy `src` into this buffer with its low corner at (x, y).
    pub fn blit(&mut self, src: &HeightmapBuffer, x: u32, y: u32) {
        let w = src.width as usize;
        for row in 0..src.height {
            let dst = self.index(x, y + row);
            let s = row as usize * w;
            self.data[dst..dst + w].copy_from_slice(&src.data[s..s + w]);
        }
    }

    /// Lowest and highest sample
    pub fn min_max(&self) -> (f32, f32) {
        self.data.iter().fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
    }
}

/// Terrain storage the crater writer reads from and writes back to.
///
/// Callers must serialize operations per terrain; the writer holds no lock
/// and assumes it is the only one touching the region until it returns.
pub trait HeightmapHost {
    /// Heightmap extent in texels (width, height)
    fn heightmap_size(&self) -> (u32, u32);

    /// Copy out a validated region
    fn extract_region(&self, region: &Region) -> HeightmapBuffer;

    /// Overwrite a validated region with `buffer`, which has the region's size
    fn write_region(&mut self, buffer: &HeightmapBuffer, region: &Region);

    /// Flag the region as modified and rebuild whatever depends on it
    fn mark_dirty_and_resync(&mut self, region: &Region);
}

/// In-memory terrain: metadata, heights and dirty tracking
#[derive(Debug)]
pub struct TerrainHeightmap {
    metadata: TerrainMetadata,
    heights: HeightmapBuffer,
    invalidator: HeightmapInvalidator,
}

impl TerrainHeightmap {
    /// Flat terrain at `base_height`
    pub fn flat(metadata: TerrainMetadata, base_height: f32) -> Self {
        let res = metadata.heightmap_resolution;
        Self {
            metadata,
            heights: HeightmapBuffer::filled(res, res, base_height),
            invalidator: HeightmapInvalidator::new(),
        }
    }

    /// Wrap existing heights; they must be resolution x resolution
    pub fn new(metadata: TerrainMetadata, heights: HeightmapBuffer) -> Result<Self> {
        let res = metadata.heightmap_resolution;
        if heights.width() != res || heights.height() != res {
            return Err(Error::HeightmapSize {
                expected: res,
                actual_width: heights.width(),
                actual_height: heights.height(),
            });
        }
        Ok(Self {
            metadata,
            heights,
            invalidator: HeightmapInvalidator::new(),
        })
    }

    pub fn metadata(&self) -> &TerrainMetadata {
        &self.metadata
    }

    pub fn heights(&self) -> &HeightmapBuffer {
        &self.heights
    }

    pub(crate) fn heights_mut(&mut self) -> &mut HeightmapBuffer {
        &mut self.heights
    }

    pub fn invalidator(&self) -> &HeightmapInvalidator {
        &self.invalidator
    }

    pub fn into_heights(self) -> HeightmapBuffer {
        self.heights
    }
}

impl HeightmapHost for TerrainHeightmap {
    fn heightmap_size(&self) -> (u32, u32) {
        (self.heights.width(), self.heights.height())
    }

    fn extract_region(&self, region: &Region) -> HeightmapBuffer {
        self.heights.extract(region)
    }

    fn write_region(&mut self, buffer: &HeightmapBuffer, region: &Region) {
        debug_assert_eq!(buffer.width() as i32, region.width);
        debug_assert_eq!(buffer.height() as i32, region.height);
        self.heights.blit(buffer, region.x as u32, region.y as u32);
    }

    fn mark_dirty_and_resync(&mut self, region: &Region) {
        self.invalidator.mark_dirty(*region);
        if let Some(synced) = self.invalidator.resync() {
            log::trace!("Resynced heightmap region {:?}", synced);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(width: u32, height: u32) -> HeightmapBuffer {
        let data = (0..width * height).map(|i| i as f32).collect();
        HeightmapBuffer::from_data(width, height, data).unwrap()
    }

    #[test]
    fn test_from_data_rejects_wrong_len() {
        assert!(HeightmapBuffer::from_data(4, 4, vec![0.0; 15]).is_err());
    }

    #[test]
    fn test_get_set() {
        let mut buffer = HeightmapBuffer::new(8, 4);
        buffer.set(7, 3, 0.25);
        assert_eq!(buffer.get(7, 3), 0.25);
        assert_eq!(buffer.as_slice()[31], 0.25);
    }

    #[test]
    fn test_extract() {
        let buffer = ramp(8, 8);
        let sub = buffer.extract(&Region::new(2, 3, 3, 2));
        assert_eq!(sub.width(), 3);
        assert_eq!(sub.height(), 2);
        assert_eq!(sub.as_slice(), &[26.0, 27.0, 28.0, 34.0, 35.0, 36.0]);
    }

    #[test]
    fn test_extract_then_blit_is_identity() {
        let mut buffer = ramp(16, 16);
        let original = buffer.clone();
        let region = Region::new(5, 7, 6, 4);
        let sub = buffer.extract(&region);
        buffer.blit(&sub, 5, 7);
        assert_eq!(buffer, original);
    }

    #[test]
    fn test_blit_only_touches_region() {
        let mut buffer = HeightmapBuffer::filled(8, 8, 1.0);
        buffer.blit(&HeightmapBuffer::filled(2, 3, 0.0), 4, 1);
        for y in 0..8 {
            for x in 0..8 {
                let inside = (4..6).contains(&x) && (1..4).contains(&y);
                assert_eq!(buffer.get(x, y), if inside { 0.0 } else { 1.0 });
            }
        }
    }

    #[test]
    fn test_min_max() {
        let buffer = ramp(4, 4);
        assert_eq!(buffer.min_max(), (0.0, 15.0));
    }

    #[test]
    fn test_terrain_rejects_wrong_size() {
        let meta = TerrainMetadata { heightmap_resolution: 33, ..Default::default() };
        let result = TerrainHeightmap::new(meta, HeightmapBuffer::new(32, 33));
        assert!(matches!(result, Err(Error::HeightmapSize { expected: 33, .. })));
    }

    #[test]
    fn test_host_mark_dirty_and_resync() {
        let meta = TerrainMetadata { heightmap_resolution: 33, ..Default::default() };
        let mut terrain = TerrainHeightmap::flat(meta, 0.5);
        assert_eq!(terrain.heightmap_size(), (33, 33));

        let region = Region::new(3, 4, 5, 5);
        terrain.mark_dirty_and_resync(&region);
        assert_eq!(terrain.invalidator().generation(), 1);
        assert_eq!(terrain.invalidator().sync_count(), 1);
        assert_eq!(terrain.invalidator().last_synced(), Some(region));
        assert!(!terrain.invalidator().has_dirty());
    }
}
