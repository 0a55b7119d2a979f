//! Frame assembly: the renderer's public entry point.

use crate::dither::LEVELS;
use crate::display::PixelBuffer;
use crate::error::{DuskfallError, Result};
use crate::scene::FrameParams;

/// One tick's worth of input to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRequest {
    pub width: u32,
    pub height: u32,
    pub elapsed_seconds: f64,
}

impl FrameRequest {
    /// Validated request. Zero dimensions are rejected, and negative or
    /// non-finite times are clamped to zero.
    pub fn new(width: u32, height: u32, elapsed_seconds: f64) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(DuskfallError::InvalidSize { width, height });
        }
        let elapsed_seconds = if elapsed_seconds.is_finite() {
            elapsed_seconds.max(0.0)
        } else {
            0.0
        };
        Ok(Self {
            width,
            height,
            elapsed_seconds,
        })
    }

    pub fn render(&self) -> PixelBuffer {
        render_frame(self.width, self.height, self.elapsed_seconds)
    }
}

/// Clamp then round a channel to a byte
#[inline]
pub fn to_byte(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Render the full scene at `elapsed_seconds` into a fresh RGBA8 buffer.
/// Pure: identical arguments give identical bytes.
pub fn render_frame(width: u32, height: u32, elapsed_seconds: f64) -> PixelBuffer {
    let params = FrameParams::new(elapsed_seconds);
    let mut buffer = PixelBuffer::with_size(width, height);

    for y in 0..height {
        let row = buffer.row_mut(y);
        for (x, px) in (0..width).zip(row.chunks_exact_mut(4)) {
            let color = LEVELS.quantize(params.shade(x, y, width, height), x, y);
            px[0] = to_byte(color.r);
            px[1] = to_byte(color.g);
            px[2] = to_byte(color.b);
            px[3] = 255;
        }
    }

    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{CYCLE_SECONDS, HORIZON};
    use crate::dither::Levels;

    /// Bytes a channel with `levels` levels can legally produce
    fn grid_bytes(levels: u32) -> Vec<u8> {
        let steps = f64::from(levels - 1);
        (0..levels).map(|k| to_byte(f64::from(k) / steps)).collect()
    }

    fn assert_on_grid(buf: &PixelBuffer, levels: Levels) {
        let (r, g, b) = (
            grid_bytes(levels.red),
            grid_bytes(levels.green),
            grid_bytes(levels.blue),
        );
        for px in buf.as_bytes().chunks_exact(4) {
            assert!(r.contains(&px[0]), "red {} off grid", px[0]);
            assert!(g.contains(&px[1]), "green {} off grid", px[1]);
            assert!(b.contains(&px[2]), "blue {} off grid", px[2]);
            assert_eq!(px[3], 255);
        }
    }

    #[test]
    fn test_buffer_shape() {
        let buf = render_frame(17, 5, 1.0);
        assert_eq!(buf.width(), 17);
        assert_eq!(buf.height(), 5);
        assert_eq!(buf.as_bytes().len(), 17 * 5 * 4);
    }

    #[test]
    fn test_deterministic() {
        let a = render_frame(48, 27, 123.456);
        let b = render_frame(48, 27, 123.456);
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_channels_on_level_grid() {
        for t in [0.0, 12.0, 90.0, 151.3, CYCLE_SECONDS * 7.0 + 3.0] {
            assert_on_grid(&render_frame(40, 40, t), LEVELS);
        }
    }

    #[test]
    fn test_multi_day_elapsed() {
        // Three and ten days of uptime
        for t in [259_200.0, 864_000.75] {
            let buf = render_frame(32, 32, t);
            assert_on_grid(&buf, LEVELS);
        }
    }

    #[test]
    fn test_phase_zero_scene() {
        let params = FrameParams::new(0.0);
        assert!((params.sun.y - 0.32).abs() < 0.01);

        // Upper rows are the blue top band
        let buf = render_frame(64, 64, 0.0);
        let (mut r, mut g, mut b) = (0u32, 0u32, 0u32);
        for y in 0..8 {
            for x in 0..64 {
                let (pr, pg, pb, _) = buf.get_pixel_rgba(x, y).unwrap();
                r += u32::from(pr);
                g += u32::from(pg);
                b += u32::from(pb);
            }
        }
        assert!(b > r && b > g, "top rows not blue: r={} g={} b={}", r, g, b);

        // Unquantised top row sits next to the top band colour
        let top = params.bands.top;
        for x in 0..64 {
            let c = params.shade(x, 0, 64, 64);
            assert!(c.distance(top) < 0.15, "x={} {:?} vs {:?}", x, c, top);
        }
    }

    #[test]
    fn test_deep_water_darker_than_horizon_sky() {
        // Bottom row is deep water, no brighter than the sky just above the horizon
        let params = FrameParams::new(0.0);
        let h = 100u32;
        let horizon_row = (HORIZON * f64::from(h)) as u32 - 1;
        let x = 5;
        let sky = params.shade(x, horizon_row, h, h);
        let deep = params.shade(x, h - 1, h, h);
        assert!(deep.r + deep.g + deep.b <= sky.r + sky.g + sky.b + 0.05);
    }

    #[test]
    fn test_resolution_change_recomputes() {
        let small = render_frame(8, 8, 5.0);
        let large = render_frame(16, 16, 5.0);
        assert_eq!(small.as_bytes().len() * 4, large.as_bytes().len());
        assert_eq!(render_frame(8, 8, 5.0), small);
    }

    #[test]
    fn test_request_validation() {
        assert!(matches!(
            FrameRequest::new(0, 10, 0.0),
            Err(DuskfallError::InvalidSize { width: 0, height: 10 })
        ));
        let req = FrameRequest::new(4, 4, -3.0).unwrap();
        assert_eq!(req.elapsed_seconds, 0.0);
        let req = FrameRequest::new(4, 4, f64::NAN).unwrap();
        assert_eq!(req.elapsed_seconds, 0.0);
        assert_eq!(req.render(), render_frame(4, 4, 0.0));
    }

    #[test]
    fn test_to_byte() {
        assert_eq!(to_byte(-0.2), 0);
        assert_eq!(to_byte(0.0), 0);
        assert_eq!(to_byte(0.5), 128);
        assert_eq!(to_byte(1.0), 255);
        assert_eq!(to_byte(3.0), 255);
    }
}
