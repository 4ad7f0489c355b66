//! Scalar shaping functions and deterministic hashing

/// Hermite smoothstep between `edge0` and `edge1`
///
/// Degenerate edges (`edge1 <= edge0`) collapse to a hard step at `edge0`.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge1 <= edge0 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Linear interpolation from `a` to `b`
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Deterministic 2D integer hash
pub fn hash_2d(x: i32, y: i32, seed: u32) -> u32 {
    let mut h = seed;
    h ^= x as u32;
    h = h.wrapping_mul(0x45d9f3b);
    h ^= h >> 16;
    h ^= y as u32;
    h = h.wrapping_mul(0x45d9f3b);
    h ^= h >> 16;
    h
}

/// Hash mapped to [-1, 1]
pub fn hash_signed(x: i32, y: i32, seed: u32) -> f32 {
    let h = hash_2d(x, y, seed);
    (h & 0xFFFF) as f32 / 65535.0 * 2.0 - 1.0
}
