use crate::error::{DuskfallError, Result};

// ============================================================================
// Utility Functions
// ============================================================================

/// Write an opaque pixel to a 4-byte slice in R, G, B, A order
#[inline]
fn write_pixel(dest: &mut [u8], r: u8, g: u8, b: u8) {
    dest[0] = r;
    dest[1] = g;
    dest[2] = b;
    dest[3] = 255;
}

// ============================================================================
// PixelBuffer
// ============================================================================

/// Row-major RGBA8 pixel buffer, top row first, 4 bytes per pixel.
/// This is what a finished frame is handed out as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Create an opaque black buffer
    pub fn with_size(width: u32, height: u32) -> Self {
        let mut buffer = Self {
            pixels: vec![0; width as usize * height as usize * 4],
            width,
            height,
        };
        buffer.clear(0, 0, 0);
        buffer
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row
    #[inline]
    pub fn pitch(&self) -> usize {
        self.width as usize * 4
    }

    /// Check if coordinates are within bounds
    #[inline]
    fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Calculate byte offset for pixel at (x, y)
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Clear to a solid opaque color
    pub fn clear(&mut self, r: u8, g: u8, b: u8) {
        for chunk in self.pixels.chunks_exact_mut(4) {
            write_pixel(chunk, r, g, b);
        }
    }

    /// Set a single opaque pixel (bounds checked)
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x, y);
            write_pixel(&mut self.pixels[idx..idx + 4], r, g, b);
        }
    }

    /// Read all 4 channels of a pixel (bounds checked)
    /// Returns (r, g, b, a) or None if out of bounds
    #[inline]
    pub fn get_pixel_rgba(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x, y);
            Some((
                self.pixels[idx],
                self.pixels[idx + 1],
                self.pixels[idx + 2],
                self.pixels[idx + 3],
            ))
        } else {
            None
        }
    }

    /// Mutable access to one row's bytes
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let pitch = self.pitch();
        let start = y as usize * pitch;
        &mut self.pixels[start..start + pitch]
    }

    /// Raw pixel data for texture upload / export
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Nearest-neighbour integer upscale. Each source pixel becomes a
    /// `scale` x `scale` block. A scale of 0 or 1 returns a copy.
    /// Fails when the enlarged size does not fit in a `u32`.
    pub fn upscaled(&self, scale: u32) -> Result<Self> {
        if scale <= 1 {
            return Ok(self.clone());
        }
        let (Some(out_w), Some(out_h)) =
            (self.width.checked_mul(scale), self.height.checked_mul(scale))
        else {
            return Err(DuskfallError::InvalidSize {
                width: self.width.saturating_mul(scale),
                height: self.height.saturating_mul(scale),
            });
        };
        let scale_us = scale as usize;
        let mut out = Self::with_size(out_w, out_h);
        if self.width == 0 || self.height == 0 {
            return Ok(out);
        }
        let src_pitch = self.pitch();
        let dst_pitch = out.pitch();

        for (sy, src_row) in self.pixels.chunks_exact(src_pitch).enumerate() {
            let first = sy * scale_us * dst_pitch;
            {
                let dst_row = &mut out.pixels[first..first + dst_pitch];
                for (src_px, dst_block) in src_row
                    .chunks_exact(4)
                    .zip(dst_row.chunks_exact_mut(4 * scale_us))
                {
                    for dst_px in dst_block.chunks_exact_mut(4) {
                        dst_px.copy_from_slice(src_px);
                    }
                }
            }
            // Remaining rows of the block are copies of the first
            for k in 1..scale_us {
                out.pixels
                    .copy_within(first..first + dst_pitch, first + k * dst_pitch);
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_opaque_black() {
        let buf = PixelBuffer::with_size(3, 2);
        assert_eq!(buf.as_bytes().len(), 3 * 2 * 4);
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(buf.get_pixel_rgba(x, y), Some((0, 0, 0, 255)));
            }
        }
    }

    #[test]
    fn test_set_get_rgba_order() {
        let mut buf = PixelBuffer::with_size(4, 4);
        buf.set_pixel(1, 2, 10, 20, 30);
        assert_eq!(buf.get_pixel_rgba(1, 2), Some((10, 20, 30, 255)));
        let idx = (2 * 4 + 1) * 4;
        assert_eq!(&buf.as_bytes()[idx..idx + 4], &[10, 20, 30, 255]);
    }

    #[test]
    fn test_out_of_bounds_ignored() {
        let mut buf = PixelBuffer::with_size(2, 2);
        buf.set_pixel(5, 0, 1, 2, 3);
        assert_eq!(buf.get_pixel_rgba(2, 0), None);
        assert_eq!(buf.get_pixel_rgba(0, 2), None);
        assert!(buf.as_bytes().chunks(4).all(|p| p == [0, 0, 0, 255]));
    }

    #[test]
    fn test_upscale_nearest() {
        let mut buf = PixelBuffer::with_size(2, 2);
        buf.set_pixel(0, 0, 255, 0, 0);
        buf.set_pixel(1, 0, 0, 255, 0);
        buf.set_pixel(0, 1, 0, 0, 255);
        buf.set_pixel(1, 1, 9, 9, 9);

        let up = buf.upscaled(3).unwrap();
        assert_eq!((up.width(), up.height()), (6, 6));
        for y in 0..6 {
            for x in 0..6 {
                let (r, g, b, _) = buf.get_pixel_rgba(x / 3, y / 3).unwrap();
                assert_eq!(up.get_pixel_rgba(x, y), Some((r, g, b, 255)), "at ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_upscale_identity() {
        let mut buf = PixelBuffer::with_size(3, 1);
        buf.set_pixel(2, 0, 1, 2, 3);
        assert_eq!(buf.upscaled(1).unwrap(), buf);
        assert_eq!(buf.upscaled(0).unwrap(), buf);
    }

    #[test]
    fn test_upscale_overflow_is_rejected() {
        // Zero height keeps the allocation empty
        let wide = PixelBuffer::with_size(1 << 27, 0);
        assert!(matches!(
            wide.upscaled(64),
            Err(DuskfallError::InvalidSize { width: u32::MAX, height: 0 })
        ));
        let tall = PixelBuffer::with_size(0, u32::MAX / 2);
        assert!(matches!(tall.upscaled(3), Err(DuskfallError::InvalidSize { .. })));
        assert_eq!(wide.upscaled(16).unwrap().width(), 1 << 31);
    }

    #[test]
    fn test_row_mut() {
        let mut buf = PixelBuffer::with_size(2, 3);
        buf.row_mut(1)[4..8].copy_from_slice(&[7, 8, 9, 255]);
        assert_eq!(buf.get_pixel_rgba(1, 1), Some((7, 8, 9, 255)));
    }
}
