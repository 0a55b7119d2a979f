use super::FrameParams;
use crate::constants::{
    CLOUD_FREQ_X, CLOUD_FREQ_Y, CLOUD_GAIN_HORIZON, CLOUD_GAIN_TOP, CLOUD_OPACITY,
    CLOUD_THRESHOLD, HORIZON,
};
use crate::noise::{fbm, lerp, smoothstep};
use crate::palette::Rgb;

/// Soft cloud mask in [0, 1] at a sky position.
pub fn cloud_coverage(params: &FrameParams, nx: f64, ny: f64) -> f64 {
    let (ox, oy) = params.cloud_offset;
    let v = fbm(nx * CLOUD_FREQ_X + ox, ny * CLOUD_FREQ_Y + oy);
    smoothstep(CLOUD_THRESHOLD, 1.0, v)
}

/// Sky gradient lightened where clouds pass, more so near the top.
pub(super) fn shade(params: &FrameParams, nx: f64, ny: f64) -> Rgb {
    let base = params.bands.sky_color(ny);
    let t_sky = (ny / HORIZON).clamp(0.0, 1.0);
    let gain = lerp(CLOUD_GAIN_TOP, CLOUD_GAIN_HORIZON, t_sky);
    let coverage = cloud_coverage(params, nx, ny);
    let factor = lerp(1.0, gain, coverage * CLOUD_OPACITY);
    base.scale(factor).clamped()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coverage_range() {
        let params = FrameParams::new(12.5);
        for i in 0..100 {
            for j in 0..30 {
                let c = cloud_coverage(&params, i as f64 / 100.0, j as f64 / 50.0);
                assert!((0.0..=1.0).contains(&c));
            }
        }
    }

    #[test]
    fn test_clouds_only_lighten() {
        let params = FrameParams::new(33.0);
        for i in 0..64 {
            for j in 0..38 {
                let (nx, ny) = (i as f64 / 64.0, j as f64 / 64.0);
                let plain = params.bands.sky_color(ny);
                let shaded = shade(&params, nx, ny);
                assert!(shaded.r >= plain.r - 1e-12);
                assert!(shaded.g >= plain.g - 1e-12);
                assert!(shaded.b >= plain.b - 1e-12);
            }
        }
    }

    #[test]
    fn test_clouds_drift_with_time() {
        let a = FrameParams::new(0.0);
        let b = FrameParams::new(40.0);
        let moved = (0..200).any(|i| {
            let nx = i as f64 / 200.0;
            let ny = 0.2;
            (fbm_at(&a, nx, ny) - fbm_at(&b, nx, ny)).abs() > 1e-3
        });
        assert!(moved);
    }

    fn fbm_at(params: &FrameParams, nx: f64, ny: f64) -> f64 {
        let (ox, oy) = params.cloud_offset;
        fbm(nx * CLOUD_FREQ_X + ox, ny * CLOUD_FREQ_Y + oy)
    }
}
