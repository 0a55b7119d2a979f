use super::FrameParams;
use crate::constants::{
    GLINT_FALLOFF, GLINT_STRENGTH, GLINT_TINT, GLINT_WAVE_FREQ, HORIZON, RIPPLE_AMPLITUDE,
    RIPPLE_B_WEIGHT, RIPPLE_FREQ_A, RIPPLE_FREQ_B, WATER_DEPTH_FLOOR,
};
use crate::noise::{lerp, smoothstep};
use crate::palette::Rgb;

/// Two crossing waves along x, travelling in opposite directions.
/// Range is [-1.5, 1.5].
pub fn ripple(params: &FrameParams, nx: f64) -> f64 {
    let a = (nx * RIPPLE_FREQ_A + params.ripple_angle_a).sin();
    let b = (nx * RIPPLE_FREQ_B - params.ripple_angle_b).sin();
    a + RIPPLE_B_WEIGHT * b
}

/// 0 at the horizon, 1 at the bottom of the scene.
#[inline]
fn depth(ny: f64) -> f64 {
    ((ny - HORIZON) / (1.0 - HORIZON)).clamp(0.0, 1.0)
}

/// Specular streak under the sun, broken up by a travelling wave.
fn glint(params: &FrameParams, nx: f64, ny: f64, ripple: f64) -> f64 {
    let dx = nx - params.sun.x;
    let band = 1.0 / (1.0 + GLINT_FALLOFF * dx * dx);
    let wave = 0.5 + 0.5 * (ny * GLINT_WAVE_FREQ - params.glint_angle + ripple).sin();
    band * wave * GLINT_STRENGTH
}

pub(super) fn shade(params: &FrameParams, nx: f64, ny: f64) -> Rgb {
    let ripple = ripple(params, nx);
    let mut color = params.bands.water_color(ny, ripple * RIPPLE_AMPLITUDE);

    let darken = lerp(1.0, WATER_DEPTH_FLOOR, smoothstep(0.0, 1.0, depth(ny)));
    color = color.scale(darken).clamped();

    let g = glint(params, nx, ny, ripple);
    (color + GLINT_TINT.scale(g)).clamped()
}
