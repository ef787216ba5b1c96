//! RGBA pixel buffer that every canvas operation draws into.
//!
//! Rows are padded to a 64-byte stride so that row slices stay aligned for
//! trueno's SIMD kernels; [`Framebuffer::backend`] reports which kernel set
//! trueno selected on this machine.

use crate::color::Rgba;
use crate::error::{Error, Result};
use trueno::Backend;

/// Alignment for SIMD operations (64 bytes for AVX-512).
const SIMD_ALIGNMENT: usize = 64;

/// Fixed-size RGBA8 framebuffer.
///
/// Dimensions are set at construction and never change. Every write
/// accessor ignores coordinates outside the buffer.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGBA pixels in row-major order, 4 bytes per pixel.
    pixels: Vec<u8>,
    /// Stride in bytes (may include padding for alignment).
    stride: usize,
}

impl Framebuffer {
    /// Create a new framebuffer with every pixel transparent black.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_canvas::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(800, 600).unwrap();
    /// assert_eq!(fb.width(), 800);
    /// assert_eq!(fb.height(), 600);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let row_bytes = (width as usize) * 4;
        let stride = (row_bytes + SIMD_ALIGNMENT - 1) & !(SIMD_ALIGNMENT - 1);
        let pixels = vec![0; stride * (height as usize)];

        Ok(Self {
            width,
            height,
            pixels,
            stride,
        })
    }

    /// Create a framebuffer pre-filled with `color`.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn filled(width: u32, height: u32, color: Rgba) -> Result<Self> {
        let mut fb = Self::new(width, height)?;
        fb.clear(color);
        Ok(fb)
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the stride (row width in bytes, including any padding).
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Get the raw pixel data, including stride padding.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Get a row of pixels as a slice.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * self.stride;
        let end = start + (self.width as usize) * 4;
        Some(&self.pixels[start..end])
    }

    /// Clear the framebuffer to a solid color.
    pub fn clear(&mut self, color: Rgba) {
        let [r, g, b, a] = color.to_array();

        // 64-byte pattern (16 pixels) so the row copy vectorizes
        let pattern: [u8; 64] = {
            let mut p = [0u8; 64];
            for px in p.chunks_exact_mut(4) {
                px.copy_from_slice(&[r, g, b, a]);
            }
            p
        };

        for y in 0..self.height {
            let row_start = (y as usize) * self.stride;
            let row_end = row_start + (self.width as usize) * 4;
            let row = &mut self.pixels[row_start..row_end];

            let mut offset = 0;
            while offset + 64 <= row.len() {
                row[offset..offset + 64].copy_from_slice(&pattern);
                offset += 64;
            }

            for chunk in row[offset..].chunks_exact_mut(4) {
                chunk.copy_from_slice(&[r, g, b, a]);
            }
        }
    }

    /// Replace a rectangular region with a solid color.
    ///
    /// Coordinates are clamped to framebuffer bounds.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        let Some((x1, y1, x2, y2)) = self.clamp_rect(x, y, w, h) else {
            return;
        };

        let [r, g, b, a] = color.to_array();
        let rect_width = (x2 - x1) as usize;

        for row_y in y1..y2 {
            let row_start = (row_y as usize) * self.stride + (x1 as usize) * 4;
            let row = &mut self.pixels[row_start..row_start + rect_width * 4];

            for chunk in row.chunks_exact_mut(4) {
                chunk.copy_from_slice(&[r, g, b, a]);
            }
        }
    }

    /// Alpha-blend a color over a rectangular region.
    ///
    /// Coordinates are clamped to framebuffer bounds.
    pub fn blend_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        if color.is_opaque() {
            self.fill_rect(x, y, w, h, color);
            return;
        }
        let Some((x1, y1, x2, y2)) = self.clamp_rect(x, y, w, h) else {
            return;
        };
        for row_y in y1..y2 {
            for col_x in x1..x2 {
                self.blend_pixel(col_x, row_y, color);
            }
        }
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = self.pixel_index(x, y);
        Some(Rgba::from_array([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]))
    }

    /// Set the color at a specific pixel coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.pixel_index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
    }

    /// Blend a color at a specific pixel coordinate using alpha blending.
    ///
    /// Uses the standard "over" compositing operation:
    /// `out = src * src_alpha + dst * dst_alpha * (1 - src_alpha)`.
    /// An opaque source replaces the pixel exactly and a fully transparent
    /// source leaves it untouched.
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height || color.a == 0 {
            return;
        }
        if color.is_opaque() {
            self.set_pixel(x, y, color);
            return;
        }

        let idx = self.pixel_index(x, y);
        let src_a = f32::from(color.a) / 255.0;
        let dst_a = f32::from(self.pixels[idx + 3]) / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);

        let blend = |src: u8, dst: u8| -> u8 {
            let src_f = f32::from(src) / 255.0;
            let dst_f = f32::from(dst) / 255.0;
            let out = (src_f * src_a + dst_f * dst_a * (1.0 - src_a)) / out_a;
            (out * 255.0) as u8
        };

        self.pixels[idx] = blend(color.r, self.pixels[idx]);
        self.pixels[idx + 1] = blend(color.g, self.pixels[idx + 1]);
        self.pixels[idx + 2] = blend(color.b, self.pixels[idx + 2]);
        self.pixels[idx + 3] = (out_a * 255.0) as u8;
    }

    /// Count the pixels exactly equal to `color`.
    #[must_use]
    pub fn count_pixels(&self, color: Rgba) -> usize {
        let needle = color.to_array();
        (0..self.height)
            .filter_map(|y| self.row(y))
            .flat_map(|row| row.chunks_exact(4))
            .filter(|px| *px == needle)
            .count()
    }

    /// Get pixel data without stride padding, as image encoders expect.
    #[must_use]
    pub fn to_compact_pixels(&self) -> Vec<u8> {
        let row_bytes = (self.width as usize) * 4;

        if self.stride == row_bytes {
            return self.pixels[..row_bytes * (self.height as usize)].to_vec();
        }

        let mut compact = Vec::with_capacity(row_bytes * (self.height as usize));
        for y in 0..self.height {
            let start = (y as usize) * self.stride;
            compact.extend_from_slice(&self.pixels[start..start + row_bytes]);
        }
        compact
    }

    /// Get the selected SIMD backend.
    #[must_use]
    pub fn backend() -> Backend {
        Backend::select_best()
    }

    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * self.stride + (x as usize) * 4
    }

    /// Clamp a rectangle to the buffer, returning half-open corners.
    fn clamp_rect(&self, x: u32, y: u32, w: u32, h: u32) -> Option<(u32, u32, u32, u32)> {
        let x1 = x.min(self.width);
        let y1 = y.min(self.height);
        let x2 = x.saturating_add(w).min(self.width);
        let y2 = y.saturating_add(h).min(self.height);

        (x1 < x2 && y1 < y2).then_some((x1, y1, x2, y2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_framebuffer() {
        let fb = Framebuffer::new(100, 50).unwrap();
        assert_eq!(fb.width(), 100);
        assert_eq!(fb.height(), 50);
        assert_eq!(fb.pixel_count(), 5000);
        assert!(fb.stride() >= 400);
        assert_eq!(fb.stride() % SIMD_ALIGNMENT, 0);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Framebuffer::new(0, 100).is_err());
        assert!(Framebuffer::new(100, 0).is_err());
        assert!(Framebuffer::new(0, 0).is_err());
    }

    #[test]
    fn test_filled() {
        let fb = Framebuffer::filled(7, 3, Rgba::WHITE).unwrap();
        assert_eq!(fb.count_pixels(Rgba::WHITE), 21);
    }

    #[test]
    fn test_clear() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::RED);

        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(fb.get_pixel(x, y), Some(Rgba::RED));
            }
        }
    }

    #[test]
    fn test_clear_wide_rows() {
        // Wider than one 16-pixel pattern chunk plus a remainder
        let mut fb = Framebuffer::new(37, 2).unwrap();
        fb.clear(Rgba::BLUE);
        assert_eq!(fb.get_pixel(0, 0), Some(Rgba::BLUE));
        assert_eq!(fb.get_pixel(36, 1), Some(Rgba::BLUE));
        assert_eq!(fb.count_pixels(Rgba::BLUE), 74);
    }

    #[test]
    fn test_fill_rect() {
        let mut fb = Framebuffer::filled(100, 100, Rgba::WHITE).unwrap();
        fb.fill_rect(10, 10, 20, 20, Rgba::RED);

        assert_eq!(fb.get_pixel(15, 15), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(29, 29), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(30, 30), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::WHITE));
    }

    #[test]
    fn test_fill_rect_clamped() {
        let mut fb = Framebuffer::filled(10, 10, Rgba::WHITE).unwrap();
        fb.fill_rect(8, 8, u32::MAX, u32::MAX, Rgba::RED);
        assert_eq!(fb.count_pixels(Rgba::RED), 4);
    }

    #[test]
    fn test_set_get_pixel() {
        let mut fb = Framebuffer::new(10, 10).unwrap();

        fb.set_pixel(5, 5, Rgba::BLUE);
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::BLUE));

        // Out of bounds
        fb.set_pixel(100, 100, Rgba::BLUE);
        assert_eq!(fb.get_pixel(100, 100), None);
    }

    #[test]
    fn test_blend_pixel_semi_transparent() {
        let mut fb = Framebuffer::filled(10, 10, Rgba::WHITE).unwrap();

        fb.blend_pixel(5, 5, Rgba::new(255, 0, 0, 128));

        let result = fb.get_pixel(5, 5).unwrap();
        assert!(result.r > 200);
        assert!(result.g > 100);
        assert!(result.b > 100);
        assert!(result.a >= 254);
    }

    #[test]
    fn test_blend_pixel_opaque_replaces_exactly() {
        let mut fb = Framebuffer::filled(4, 4, Rgba::WHITE).unwrap();
        let c = Rgba::rgb(77, 13, 201);
        fb.blend_pixel(1, 1, c);
        fb.blend_pixel(1, 1, c);
        assert_eq!(fb.get_pixel(1, 1), Some(c));
    }

    #[test]
    fn test_blend_pixel_transparent_is_noop() {
        let mut fb = Framebuffer::filled(4, 4, Rgba::WHITE).unwrap();
        fb.blend_pixel(1, 1, Rgba::TRANSPARENT);
        assert_eq!(fb.get_pixel(1, 1), Some(Rgba::WHITE));
    }

    #[test]
    fn test_blend_rect() {
        let mut fb = Framebuffer::filled(10, 10, Rgba::BLACK).unwrap();
        fb.blend_rect(0, 0, 2, 2, Rgba::new(255, 255, 255, 128));
        let px = fb.get_pixel(1, 1).unwrap();
        assert!(px.r > 100 && px.r < 150);
        assert_eq!(fb.get_pixel(2, 2), Some(Rgba::BLACK));
    }

    #[test]
    fn test_compact_pixels_drop_padding() {
        let fb = Framebuffer::filled(3, 2, Rgba::RED).unwrap();
        let compact = fb.to_compact_pixels();
        assert_eq!(compact.len(), 3 * 2 * 4);
        assert!(compact.chunks_exact(4).all(|px| px == [255, 0, 0, 255]));
    }

    #[test]
    fn test_backend_selection() {
        let backend = Framebuffer::backend();
        println!("Selected backend: {backend:?}");
    }
}
