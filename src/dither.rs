//! Ordered (Bayer) dithering and per-channel quantisation.

use crate::constants::{DITHER_STRENGTH, LEVELS_BLUE, LEVELS_GREEN, LEVELS_RED};
use crate::palette::Rgb;

/// Classic recursive 8x8 Bayer matrix, a permutation of 0..64.
/// Indexed `[y % 8][x % 8]`.
pub const BAYER_8X8: [[u8; 8]; 8] = [
    [0, 32, 8, 40, 2, 34, 10, 42],
    [48, 16, 56, 24, 50, 18, 58, 26],
    [12, 44, 4, 36, 14, 46, 6, 38],
    [60, 28, 52, 20, 62, 30, 54, 22],
    [3, 35, 11, 43, 1, 33, 9, 41],
    [51, 19, 59, 27, 49, 17, 57, 25],
    [15, 47, 7, 39, 13, 45, 5, 37],
    [63, 31, 55, 23, 61, 29, 53, 21],
];

/// Signed threshold in [-0.5, 0.5) for pixel (x, y).
#[inline]
pub fn threshold(x: u32, y: u32) -> f64 {
    f64::from(BAYER_8X8[(y % 8) as usize][(x % 8) as usize]) / 64.0 - 0.5
}

/// Dither one channel value and snap it to one of `levels` evenly spaced
/// values in [0, 1].
#[inline]
pub fn quantize_channel(v: f64, levels: u32, x: u32, y: u32) -> f64 {
    let levels = levels.max(2);
    let offset = threshold(x, y) * DITHER_STRENGTH / f64::from(levels);
    let v = (v + offset).clamp(0.0, 1.0);
    let steps = f64::from(levels - 1);
    (v * steps).round() / steps
}

/// Level counts per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Levels {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl Levels {
    pub const fn new(red: u32, green: u32, blue: u32) -> Self {
        Self { red, green, blue }
    }

    pub fn quantize(&self, color: Rgb, x: u32, y: u32) -> Rgb {
        Rgb::new(
            quantize_channel(color.r, self.red, x, y),
            quantize_channel(color.g, self.green, x, y),
            quantize_channel(color.b, self.blue, x, y),
        )
    }
}

impl Default for Levels {
    fn default() -> Self {
        LEVELS
    }
}

/// The scene's palette depth.
pub const LEVELS: Levels = Levels::new(LEVELS_RED, LEVELS_GREEN, LEVELS_BLUE);
