//! World space <-> heightmap texel space mapping
//!
//! World points are horizontal (x, z) pairs carried in a `Vec2`; texel
//! points are (column, row) in the heightmap grid. Arithmetic runs in f64 so
//! a round trip through both directions is stable to well under 1e-4 texels.
//!
//! No bounds checks happen here. A zero world size produces non-finite
//! coordinates, which the region check downstream rejects.

use glam::Vec2;

/// Map a world-space (x, z) point into heightmap texel space
pub fn world_to_texel(p: Vec2, origin: Vec2, size_x: f32, size_z: f32, resolution: u32) -> Vec2 {
    let h = resolution as f64;
    let x = (p.x as f64 - origin.x as f64) / size_x as f64;
    let y = (p.y as f64 - origin.y as f64) / size_z as f64;
    Vec2::new((h * x) as f32, (h * y) as f32)
}

/// Map a heightmap texel point back into world-space (x, z)
pub fn texel_to_world(p: Vec2, origin: Vec2, size_x: f32, size_z: f32, resolution: u32) -> Vec2 {
    let h = resolution as f64;
    let kx = p.x as f64 / h;
    let ky = p.y as f64 / h;
    let x = lerp64(origin.x as f64, origin.x as f64 + size_x as f64, kx);
    let y = lerp64(origin.y as f64, origin.y as f64 + size_z as f64, ky);
    Vec2::new(x as f32, y as f32)
}

/// Scale a world-space length into texels.
///
/// Uses the larger horizontal extent as reference, so on non-square
/// terrains the footprint is a circle in texel space, not in world space.
pub fn world_radius_to_texels(radius: f32, size_x: f32, size_z: f32, resolution: u32) -> f32 {
    resolution as f32 / size_x.max(size_z) * radius
}

fn lerp64(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-4;

    fn assert_close(a: Vec2, b: Vec2) {
        assert!(
            (a - b).abs().max_element() < TOLERANCE,
            "expected {:?} ~= {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_world_to_texel_origin_and_far_corner() {
        let origin = Vec2::new(100.0, -200.0);
        assert_close(world_to_texel(origin, origin, 500.0, 250.0, 257), Vec2::ZERO);
        assert_close(
            world_to_texel(Vec2::new(600.0, 50.0), origin, 500.0, 250.0, 257),
            Vec2::splat(257.0),
        );
    }

    #[test]
    fn test_texel_to_world_midpoint() {
        let world = texel_to_world(Vec2::splat(256.5), Vec2::ZERO, 1000.0, 1000.0, 513);
        assert_close(world, Vec2::splat(500.0));
    }

    #[test]
    fn test_round_trip() {
        let cases = [
            (Vec2::ZERO, 1000.0, 1000.0, 513),
            (Vec2::new(-500.0, -500.0), 1000.0, 1000.0, 513),
            (Vec2::new(37.5, -12.25), 640.0, 320.0, 257),
            (Vec2::new(100.0, 200.0), 96.0, 128.0, 129),
        ];

        for (origin, sx, sz, res) in cases {
            for i in 0..=16 {
                for j in 0..=16 {
                    let p = Vec2::new(
                        res as f32 * i as f32 / 16.0,
                        res as f32 * j as f32 / 16.0 + 0.37,
                    );
                    let world = texel_to_world(p, origin, sx, sz, res);
                    let back = world_to_texel(world, origin, sx, sz, res);
                    assert_close(back, p);
                }
            }
        }
    }

    #[test]
    fn test_world_to_texel_out_of_range_is_not_clamped() {
        let p = world_to_texel(Vec2::new(-10.0, 1100.0), Vec2::ZERO, 1000.0, 1000.0, 513);
        assert!(p.x < 0.0);
        assert!(p.y > 513.0);
    }

    #[test]
    fn test_zero_size_is_non_finite() {
        let p = world_to_texel(Vec2::new(5.0, 5.0), Vec2::ZERO, 0.0, 0.0, 513);
        assert!(!p.x.is_finite());
    }

    #[test]
    fn test_radius_uses_larger_extent() {
        assert!((world_radius_to_texels(5.0, 1000.0, 1000.0, 513) - 2.565).abs() < 1e-5);
        // Non-square: x extent dominates
        let r = world_radius_to_texels(10.0, 2000.0, 500.0, 1025);
        assert!((r - 5.125).abs() < 1e-5);
    }
}
