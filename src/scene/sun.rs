use super::SunState;
use crate::constants::{SUN_CORE_COLOR, SUN_CORE_SOLID, SUN_GLOW_COLOR, SUN_GLOW_STRENGTH};
use crate::noise::smoothstep;
use crate::palette::Rgb;

/// Glow first, core on top. Both run when the pixel is inside the core.
pub(super) fn apply(sun: &SunState, color: Rgb, nx: f64, ny: f64) -> Rgb {
    let d = (nx - sun.x).hypot(ny - sun.y);
    let mut color = color;

    if d < sun.glow_radius {
        let glow = smoothstep(sun.glow_radius, 0.0, d) * SUN_GLOW_STRENGTH;
        color = color.lerp(SUN_GLOW_COLOR, glow).clamped();
    }

    if d < sun.radius {
        let core = smoothstep(sun.radius, sun.radius * SUN_CORE_SOLID, d);
        color = color.lerp(SUN_CORE_COLOR, core).clamped();
    }

    color
}
