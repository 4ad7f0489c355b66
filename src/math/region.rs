//! Integer texel rectangle

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in heightmap texel space
///
/// `x`/`y` is the low corner, `width`/`height` the extent in texels.
/// Signed so that footprints hanging off the low edges stay representable
/// until they are rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    /// Create region from corner and extent
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Square bounding box around a circular footprint
    ///
    /// Rounds half to even, matching the integer rounding the terrain
    /// tooling has always used for this box. The same square is used for
    /// both crater shapes.
    pub fn from_center_radius(center: Vec2, radius: f32) -> Self {
        let side = (radius * 2.0).round_ties_even() as i32;
        Self {
            x: (center.x - radius).round_ties_even() as i32,
            y: (center.y - radius).round_ties_even() as i32,
            width: side,
            height: side,
        }
    }

    /// Check the region against a `width` x `height` texel grid.
    ///
    /// The low corner must lie strictly inside on both axes: a corner at
    /// exactly 0 is rejected even though it is addressable. The extent only
    /// has to fit into the space remaining from the corner to the far edge.
    /// This asymmetry is long-standing behaviour and is kept as is.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        let (w, h) = (width as i64, height as i64);
        let (x, y) = (self.x as i64, self.y as i64);

        if x <= 0 || x >= w || y <= 0 || y >= h {
            return false;
        }
        if self.width < 0 || self.height < 0 {
            return false;
        }
        self.width as i64 <= w - x && self.height as i64 <= h - y
    }

    /// Number of texels covered
    pub fn area(&self) -> usize {
        self.width.max(0) as usize * self.height.max(0) as usize
    }

    /// True when the region covers no texels
    pub fn is_empty(&self) -> bool {
        self.area() == 0
    }

    /// Exclusive far corner (x + width, y + height)
    pub fn max(&self) -> (i32, i32) {
        (self.x + self.width, self.y + self.height)
    }

    /// Check if texel (tx, ty) lies inside the region
    pub fn contains(&self, tx: i32, ty: i32) -> bool {
        let (max_x, max_y) = self.max();
        tx >= self.x && tx < max_x && ty >= self.y && ty < max_y
    }

    /// Smallest region covering both
    pub fn merged(&self, other: &Region) -> Region {
        let (ax, ay) = self.max();
        let (bx, by) = other.max();
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Region {
            x,
            y,
            width: ax.max(bx) - x,
            height: ay.max(by) - y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_center_radius() {
        let region = Region::from_center_radius(Vec2::new(256.5, 256.5), 2.565);
        assert_eq!(region, Region::new(254, 254, 5, 5));
    }

    #[test]
    fn test_from_center_radius_rounds_half_to_even() {
        // Corner 10.5 -> 10, 12.5 -> 12, extent 2.5 -> 2
        let region = Region::from_center_radius(Vec2::new(11.75, 13.75), 1.25);
        assert_eq!(region.x, 10);
        assert_eq!(region.y, 12);
        assert_eq!(region.width, 2);
        assert_eq!(region.height, 2);
    }

    #[test]
    fn test_fits_within_rejects_zero_corner() {
        assert!(!Region::new(0, 5, 4, 4).fits_within(64, 64));
        assert!(!Region::new(5, 0, 4, 4).fits_within(64, 64));
        assert!(Region::new(1, 1, 4, 4).fits_within(64, 64));
    }

    #[test]
    fn test_fits_within_rejects_negative_corner() {
        assert!(!Region::new(-3, -3, 5, 5).fits_within(513, 513));
    }

    #[test]
    fn test_fits_within_far_edge() {
        // Exactly reaching the far edge is fine, one more texel is not
        assert!(Region::new(60, 60, 4, 4).fits_within(64, 64));
        assert!(!Region::new(60, 10, 5, 4).fits_within(64, 64));
        assert!(!Region::new(10, 60, 4, 5).fits_within(64, 64));
        assert!(!Region::new(64, 10, 0, 0).fits_within(64, 64));
    }

    #[test]
    fn test_fits_within_rejects_negative_extent() {
        assert!(!Region::new(10, 10, -2, 4).fits_within(64, 64));
    }

    #[test]
    fn test_contains_and_area() {
        let region = Region::new(2, 3, 4, 5);
        assert_eq!(region.area(), 20);
        assert!(region.contains(2, 3));
        assert!(region.contains(5, 7));
        assert!(!region.contains(6, 7));
        assert!(!region.contains(2, 8));
        assert!(Region::new(1, 1, 0, 3).is_empty());
    }

    #[test]
    fn test_merged() {
        let a = Region::new(0, 0, 2, 2);
        let b = Region::new(5, 1, 2, 4);
        assert_eq!(a.merged(&b), Region::new(0, 0, 7, 5));
    }
}
