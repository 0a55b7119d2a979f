//! Noise Generation
//!
//! Deterministic value noise and a two-octave fBm used to shape the clouds,
//! plus the easing curves shared by the rest of the scene.

/// Pseudo-random value for an integer lattice point.
/// Returns a value in [0.0, 1.0).
#[inline]
pub fn hash(ix: i32, iy: i32) -> f64 {
    let n = f64::from(ix) * 127.1 + f64::from(iy) * 311.7;
    let s = n.sin() * 43758.5453123;
    let f = s - s.floor();
    // Tiny negative products round up to exactly 1.0
    if f >= 1.0 {
        0.0
    } else {
        f
    }
}

/// Hermite smoothstep between two edges, GLSL semantics.
/// Edges may be given in reverse order to get a falling curve.
#[inline]
pub fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    if edge0 == edge1 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Quintic smootherstep on [0,1]: 6t⁵ - 15t⁴ + 10t³
/// Zero first and second derivatives at both ends.
#[inline]
pub fn smootherstep(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// 2D value noise with smootherstep interpolation.
/// Returns a value in [0.0, 1.0).
pub fn value_noise(x: f64, y: f64) -> f64 {
    let x0 = x.floor();
    let y0 = y.floor();
    let fx = smootherstep(x - x0);
    let fy = smootherstep(y - y0);

    let ix = x0 as i32;
    let iy = y0 as i32;

    let c00 = hash(ix, iy);
    let c10 = hash(ix.wrapping_add(1), iy);
    let c01 = hash(ix, iy.wrapping_add(1));
    let c11 = hash(ix.wrapping_add(1), iy.wrapping_add(1));

    let top = lerp(c00, c10, fx);
    let bottom = lerp(c01, c11, fx);
    lerp(top, bottom, fy)
}

/// Two-octave fBm: base octave at full weight, double frequency at 0.75,
/// normalised by the weight sum so the result stays in [0.0, 1.0).
pub fn fbm(x: f64, y: f64) -> f64 {
    let base = value_noise(x, y);
    let detail = value_noise(x * 2.0, y * 2.0);
    (base + 0.75 * detail) / 1.75
}
