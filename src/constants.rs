//! Tuning constants for the sunset scene.
//!
//! Nothing here is read at runtime from anywhere else; change a value and
//! rebuild. Distances are in normalised scene space ([0,1] on both axes,
//! y pointing down), angular rates in radians per second.

use crate::palette::{Hsv, Rgb};

// ============================================================================
// Animation clock
// ============================================================================

/// Length of one full afternoon -> dusk -> afternoon cycle, in minutes.
pub const CYCLE_MINUTES: f64 = 3.0;

/// Cycle length in seconds.
pub const CYCLE_SECONDS: f64 = CYCLE_MINUTES * 60.0;

// ============================================================================
// Sky gradient
// ============================================================================

/// Normalised y of the horizon line. Sky above, water below.
pub const HORIZON: f64 = 0.6;

/// First smoothstep range of the sky blend (top -> mid).
pub const SKY_BLEND_UPPER: (f64, f64) = (0.0, 0.6);

/// Second smoothstep range of the sky blend (mid -> bottom).
pub const SKY_BLEND_LOWER: (f64, f64) = (0.4, 1.0);

pub const SKY_TOP_AFTERNOON: Hsv = Hsv::new(235.0, 0.55, 0.42);
pub const SKY_TOP_DUSK: Hsv = Hsv::new(262.0, 0.62, 0.24);
pub const SKY_MID_AFTERNOON: Hsv = Hsv::new(290.0, 0.42, 0.62);
pub const SKY_MID_DUSK: Hsv = Hsv::new(325.0, 0.55, 0.46);
pub const SKY_BOTTOM_AFTERNOON: Hsv = Hsv::new(28.0, 0.80, 0.98);
pub const SKY_BOTTOM_DUSK: Hsv = Hsv::new(8.0, 0.88, 0.86);

// ============================================================================
// Sun
// ============================================================================

/// Sun height at phase 0 (highest point of the arc).
pub const SUN_Y_HIGH: f64 = 0.32;

/// Sun height at phase 0.5, just touching the horizon.
pub const SUN_Y_LOW: f64 = 0.56;

pub const SUN_X_CENTER: f64 = 0.5;

/// Horizontal swing of the sun over one cycle.
pub const SUN_X_SWAY: f64 = 0.18;

/// Core radius while high in the sky.
pub const SUN_RADIUS_MIN: f64 = 0.045;

/// Core radius while sitting on the horizon.
pub const SUN_RADIUS_MAX: f64 = 0.07;

/// Glow radius as a multiple of the core radius.
pub const SUN_GLOW_FACTOR: f64 = 3.0;

/// Blend weight of the glow at the sun's centre.
pub const SUN_GLOW_STRENGTH: f64 = 0.55;

/// Fraction of the core radius that is fully opaque core colour.
pub const SUN_CORE_SOLID: f64 = 0.7;

pub const SUN_GLOW_COLOR: Rgb = Rgb::new(1.0, 0.78, 0.55);
pub const SUN_CORE_COLOR: Rgb = Rgb::new(1.0, 0.97, 0.82);

// ============================================================================
// Clouds
// ============================================================================

/// Noise frequency across the scene width.
pub const CLOUD_FREQ_X: f64 = 3.0;

/// Noise frequency across the scene height. Higher than x for flat streaks.
pub const CLOUD_FREQ_Y: f64 = 6.0;

/// Horizontal drift in noise units per second.
pub const CLOUD_DRIFT_X: f64 = 0.05;

/// Vertical drift in noise units per second.
pub const CLOUD_DRIFT_Y: f64 = 0.03;

/// fbm value where clouds start to appear.
pub const CLOUD_THRESHOLD: f64 = 0.62;

/// Coverage is scaled by this before shading.
pub const CLOUD_OPACITY: f64 = 0.25;

/// Brightening gain of a fully covered cloud at the top of the sky.
pub const CLOUD_GAIN_TOP: f64 = 1.9;

/// Brightening gain of a fully covered cloud at the horizon.
pub const CLOUD_GAIN_HORIZON: f64 = 1.3;

// ============================================================================
// Water
// ============================================================================

pub const RIPPLE_FREQ_A: f64 = 42.0;
pub const RIPPLE_FREQ_B: f64 = 77.0;

/// Angular speed of the first ripple wave. The second runs at 0.8x, reversed.
pub const RIPPLE_SPEED: f64 = 1.6;

pub const RIPPLE_SPEED_RATIO: f64 = 0.8;

/// Weight of the second ripple wave relative to the first.
pub const RIPPLE_B_WEIGHT: f64 = 0.5;

/// How far (in normalised y) the ripple warps the mirrored gradient lookup.
pub const RIPPLE_AMPLITUDE: f64 = 0.012;

/// Darkening factor reached at the bottom of the scene.
pub const WATER_DEPTH_FLOOR: f64 = 0.75;

/// Falloff constant `k` of the glint band `1 / (1 + k * dx^2)`.
pub const GLINT_FALLOFF: f64 = 220.0;

/// Spatial frequency of the travelling glint wave along y.
pub const GLINT_WAVE_FREQ: f64 = 90.0;

pub const GLINT_WAVE_SPEED: f64 = 2.5;

pub const GLINT_STRENGTH: f64 = 0.35;

/// Per-channel glint scale, biased warm.
pub const GLINT_TINT: Rgb = Rgb::new(1.0, 0.9, 0.8);

// ============================================================================
// Shimmer
// ============================================================================

pub const SHIMMER_AMPLITUDE: f64 = 0.004;

/// Frequency applied to `2y + 3x` (pixel units).
pub const SHIMMER_FREQ: f64 = 0.9;

// ============================================================================
// Quantisation
// ============================================================================

pub const LEVELS_RED: u32 = 6;

/// One more level than red/blue; the eye is most sensitive to green.
pub const LEVELS_GREEN: u32 = 7;

pub const LEVELS_BLUE: u32 = 6;

/// Scale of the Bayer offset, in units of one level.
pub const DITHER_STRENGTH: f64 = 1.0;
