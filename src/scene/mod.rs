//! Per-pixel scene compositing.
//!
//! Everything that depends only on time is gathered once per frame into
//! [`FrameParams`]. Each pixel then runs a fixed sequence of stages on a
//! single colour accumulator:
//!
//! 1. sky gradient + clouds, or water reflection + depth + glint
//! 2. sun glow, then sun core
//! 3. shimmer
//!
//! Every stage clamps its result before handing it on.

mod sky;
mod sun;
mod water;

use crate::clock::FrameTime;
use crate::constants::{
    CLOUD_DRIFT_X, CLOUD_DRIFT_Y, GLINT_WAVE_SPEED, HORIZON, RIPPLE_SPEED, RIPPLE_SPEED_RATIO,
    SHIMMER_AMPLITUDE, SHIMMER_FREQ, SUN_GLOW_FACTOR, SUN_RADIUS_MAX, SUN_RADIUS_MIN,
    SUN_X_CENTER, SUN_X_SWAY, SUN_Y_HIGH, SUN_Y_LOW,
};
use crate::noise::lerp;
use crate::palette::{dusk_amount, Rgb, SkyBands};

pub use sky::cloud_coverage;
pub use water::ripple;

/// Sun position and size for one frame, in normalised scene space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunState {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub glow_radius: f64,
}

impl SunState {
    pub fn at_phase(phase: f64) -> Self {
        let dusk = dusk_amount(phase);
        let radius = lerp(SUN_RADIUS_MIN, SUN_RADIUS_MAX, dusk);
        Self {
            x: SUN_X_CENTER + SUN_X_SWAY * (std::f64::consts::TAU * phase).sin(),
            y: lerp(SUN_Y_HIGH, SUN_Y_LOW, dusk),
            radius,
            glow_radius: radius * SUN_GLOW_FACTOR,
        }
    }
}

/// Frame-constant inputs to the per-pixel stages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParams {
    pub time: FrameTime,
    pub bands: SkyBands,
    pub sun: SunState,
    /// Cloud noise offset in noise units
    pub cloud_offset: (f64, f64),
    /// Wave angles, each already reduced into [0, 2π)
    pub ripple_angle_a: f64,
    pub ripple_angle_b: f64,
    pub glint_angle: f64,
}

impl FrameParams {
    pub fn new(elapsed_seconds: f64) -> Self {
        let time = FrameTime::new(elapsed_seconds);
        Self {
            time,
            bands: SkyBands::at_phase(time.phase),
            sun: SunState::at_phase(time.phase),
            cloud_offset: (elapsed_seconds * CLOUD_DRIFT_X, elapsed_seconds * CLOUD_DRIFT_Y),
            ripple_angle_a: time.angle(RIPPLE_SPEED),
            ripple_angle_b: time.angle(RIPPLE_SPEED * RIPPLE_SPEED_RATIO),
            glint_angle: time.angle(GLINT_WAVE_SPEED),
        }
    }

    /// Composited, unquantised colour of pixel (x, y) in a width x height frame.
    pub fn shade(&self, x: u32, y: u32, width: u32, height: u32) -> Rgb {
        let nx = f64::from(x) / f64::from(width.max(1));
        let ny = f64::from(y) / f64::from(height.max(1));
        self.shade_at(nx, ny, x, y)
    }

    /// Same as [`shade`](Self::shade) with the normalised position given directly.
    /// `px`/`py` are the integer pixel indices the shimmer is keyed on.
    pub fn shade_at(&self, nx: f64, ny: f64, px: u32, py: u32) -> Rgb {
        let mut color = if ny < HORIZON {
            sky::shade(self, nx, ny)
        } else {
            water::shade(self, nx, ny)
        };
        color = sun::apply(&self.sun, color, nx, ny);
        shimmer(color, px, py)
    }
}

/// Tiny fixed-pattern wobble on all channels
#[inline]
fn shimmer(color: Rgb, px: u32, py: u32) -> Rgb {
    let key = 2.0 * f64::from(py) + 3.0 * f64::from(px);
    let wobble = SHIMMER_AMPLITUDE * (key * SHIMMER_FREQ).sin();
    (color + Rgb::gray(wobble)).clamped()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{CYCLE_SECONDS, SUN_CORE_COLOR};

    fn in_unit_cube(c: Rgb) -> bool {
        c.is_finite() && [c.r, c.g, c.b].iter().all(|v| (0.0..=1.0).contains(v))
    }

    #[test]
    fn test_sun_high_at_phase_zero() {
        let sun = SunState::at_phase(0.0);
        assert!((sun.y - 0.32).abs() < 1e-9);
        assert!((sun.x - 0.5).abs() < 1e-9);
        assert!((sun.glow_radius - 3.0 * sun.radius).abs() < 1e-12);
    }

    #[test]
    fn test_sun_lowest_at_half_cycle() {
        let sun = SunState::at_phase(0.5);
        assert!((sun.y - SUN_Y_LOW).abs() < 1e-9);
        assert!(sun.y < HORIZON);
        assert!((sun.radius - SUN_RADIUS_MAX).abs() < 1e-9);
    }

    #[test]
    fn test_shade_stays_in_range() {
        for elapsed in [0.0, 41.7, 90.0, 3.0 * 86_400.0 + 0.25, 1e8, 1e308, f64::MAX] {
            let params = FrameParams::new(elapsed);
            for y in 0..48 {
                for x in 0..48 {
                    let c = params.shade(x, y, 48, 48);
                    assert!(in_unit_cube(c), "t={} ({}, {}) -> {:?}", elapsed, x, y, c);
                }
            }
        }
    }

    #[test]
    fn test_phase_wrap_is_continuous() {
        let eps = 1e-6;
        let before = FrameParams::new(CYCLE_SECONDS - eps);
        let after = FrameParams::new(CYCLE_SECONDS + eps);
        let mut worst: f64 = 0.0;
        for y in 0..64 {
            for x in 0..64 {
                let a = before.shade(x, y, 64, 64);
                let b = after.shade(x, y, 64, 64);
                worst = worst.max(a.distance(b));
            }
        }
        assert!(worst < 1e-3, "jump of {} across the cycle boundary", worst);
    }

    #[test]
    fn test_sun_centre_is_closest_to_core_colour() {
        let (w, h) = (128u32, 128u32);
        for elapsed in [0.0, 30.0, 75.0] {
            let params = FrameParams::new(elapsed);
            let sun = params.sun;
            let cx = (sun.x * f64::from(w)).round() as u32;
            let cy = (sun.y * f64::from(h)).round() as u32;
            let centre = params.shade(cx, cy, w, h).distance(SUN_CORE_COLOR);

            for y in 0..h {
                for x in 0..w {
                    let nx = f64::from(x) / f64::from(w);
                    let ny = f64::from(y) / f64::from(h);
                    let d = ((nx - sun.x).powi(2) + (ny - sun.y).powi(2)).sqrt();
                    if d > sun.glow_radius {
                        let other = params.shade(x, y, w, h).distance(SUN_CORE_COLOR);
                        assert!(
                            centre < other,
                            "t={} pixel ({}, {}) is as close to the core colour as the sun",
                            elapsed,
                            x,
                            y
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_shimmer_is_tiny() {
        let base = Rgb::gray(0.5);
        for x in 0..32 {
            let c = shimmer(base, x, 7);
            assert!(c.distance(base) <= SHIMMER_AMPLITUDE * 3f64.sqrt() + 1e-12);
        }
    }
}
