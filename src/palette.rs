//! Colour samples and the sky gradient model.

use std::ops::Add;

use crate::constants::{
    HORIZON, SKY_BLEND_LOWER, SKY_BLEND_UPPER, SKY_BOTTOM_AFTERNOON, SKY_BOTTOM_DUSK,
    SKY_MID_AFTERNOON, SKY_MID_DUSK, SKY_TOP_AFTERNOON, SKY_TOP_DUSK,
};
use crate::noise::{lerp, smoothstep};

// ============================================================================
// Rgb
// ============================================================================

/// Floating point colour sample. Channels are kept in [0,1] by the
/// compositing stages; nothing becomes bytes until the frame is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(v: f64) -> Self {
        Self::new(v, v, v)
    }

    #[inline]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(
            lerp(self.r, other.r, t),
            lerp(self.g, other.g, t),
            lerp(self.b, other.b, t),
        )
    }

    #[inline]
    pub fn scale(self, k: f64) -> Self {
        Self::new(self.r * k, self.g * k, self.b * k)
    }

    #[inline]
    pub fn clamped(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
        )
    }

    /// Euclidean distance in RGB space
    pub fn distance(self, other: Self) -> f64 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        (dr * dr + dg * dg + db * db).sqrt()
    }

    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }
}

impl Add for Rgb {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

// ============================================================================
// HSV
// ============================================================================

/// A hue/saturation/value triple. Hue in degrees, any range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub hue: f64,
    pub sat: f64,
    pub val: f64,
}

impl Hsv {
    pub const fn new(hue: f64, sat: f64, val: f64) -> Self {
        Self { hue, sat, val }
    }

    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(
            lerp(self.hue, other.hue, t),
            lerp(self.sat, other.sat, t),
            lerp(self.val, other.val, t),
        )
    }

    pub fn to_rgb(self) -> Rgb {
        hsv_to_rgb(self.hue, self.sat, self.val)
    }
}

/// HSV to RGB color conversion
/// h: degrees (wrapped into 0-360, negatives allowed), s: 0-1, v: 0-1
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let h = h.rem_euclid(360.0);
    let c = v * s;
    let h_prime = h / 60.0;
    let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());
    let m = v - c;

    let (r1, g1, b1) = match h_prime as i32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb::new(r1 + m, g1 + m, b1 + m)
}

// ============================================================================
// Sky bands
// ============================================================================

/// How far the cycle has moved from afternoon (0) to dusk (1).
/// Periodic in phase, so the value at phase 0 and phase -> 1 agree.
#[inline]
pub fn dusk_amount(phase: f64) -> f64 {
    0.5 - 0.5 * (std::f64::consts::TAU * phase).cos()
}

/// The three sky colours for one frame. Position independent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyBands {
    pub top: Rgb,
    pub mid: Rgb,
    pub bottom: Rgb,
}

impl SkyBands {
    pub fn at_phase(phase: f64) -> Self {
        let dusk = dusk_amount(phase);
        Self {
            top: SKY_TOP_AFTERNOON.lerp(SKY_TOP_DUSK, dusk).to_rgb(),
            mid: SKY_MID_AFTERNOON.lerp(SKY_MID_DUSK, dusk).to_rgb(),
            bottom: SKY_BOTTOM_AFTERNOON.lerp(SKY_BOTTOM_DUSK, dusk).to_rgb(),
        }
    }

    /// Three-stop gradient with two overlapping smoothsteps.
    /// `t_sky` is 0 at the top of the scene and 1 at the horizon.
    pub fn gradient(&self, t_sky: f64) -> Rgb {
        let upper = smoothstep(SKY_BLEND_UPPER.0, SKY_BLEND_UPPER.1, t_sky);
        let lower = smoothstep(SKY_BLEND_LOWER.0, SKY_BLEND_LOWER.1, t_sky);
        self.top.lerp(self.mid, upper).lerp(self.bottom, lower)
    }

    /// Sky colour at normalised height `ny`.
    pub fn sky_color(&self, ny: f64) -> Rgb {
        self.gradient(ny / HORIZON)
    }

    /// Reflected colour at normalised height `ny` below the horizon.
    /// `warp` shifts the mirrored lookup; zero gives an exact mirror.
    pub fn water_color(&self, ny: f64, warp: f64) -> Rgb {
        self.sky_color(2.0 * HORIZON - ny + warp)
    }
}
