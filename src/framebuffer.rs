//! RGBA pixel surface.
//!
//! [`Framebuffer`] is the canvas the rasterizers paint into. It implements
//! [`PixelSink`], clipping every coordinate outside `0..width` × `0..height`.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::{Point, Size};
use crate::sink::PixelSink;

/// Row alignment in bytes.
const ROW_ALIGNMENT: usize = 64;

/// Row-major RGBA8 framebuffer.
///
/// Rows are padded to a multiple of 64 bytes; use
/// [`to_compact_pixels`](Self::to_compact_pixels) for tightly packed data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGBA pixels in row-major order, 4 bytes each: [R, G, B, A].
    pixels: Vec<u8>,
    /// Stride in bytes (includes row padding).
    stride: usize,
}

impl Framebuffer {
    /// Create a new, fully transparent framebuffer.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use canvas_raster::framebuffer::Framebuffer;
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
        let stride = (row_bytes + ROW_ALIGNMENT - 1) & !(ROW_ALIGNMENT - 1);
        let pixels = vec![0; stride * (height as usize)];

        Ok(Self {
            width,
            height,
            pixels,
            stride,
        })
    }

    /// Build a framebuffer from tightly packed RGBA8 rows.
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is zero or `rgba` is not exactly
    /// `width * height * 4` bytes long.
    pub fn from_rgba_pixels(width: u32, height: u32, rgba: &[u8]) -> Result<Self> {
        let mut fb = Self::new(width, height)?;
        let row_bytes = (width as usize) * 4;

        if rgba.len() != row_bytes * (height as usize) {
            return Err(Error::UnsupportedImage(format!(
                "expected {} bytes of RGBA data for {width}x{height}, got {}",
                row_bytes * (height as usize),
                rgba.len()
            )));
        }

        for (y, src) in rgba.chunks_exact(row_bytes).enumerate() {
            let start = y * fb.stride;
            fb.pixels[start..start + row_bytes].copy_from_slice(src);
        }

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

    /// Get both dimensions.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get a row of pixels as a slice, without padding.
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
        let rgba = color.to_array();
        let row_bytes = (self.width as usize) * 4;

        for row in self.pixels.chunks_exact_mut(self.stride) {
            for chunk in row[..row_bytes].chunks_exact_mut(4) {
                chunk.copy_from_slice(&rgba);
            }
        }
    }

    /// Fill a rectangular region with a solid color.
    ///
    /// Coordinates are clamped to framebuffer bounds.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        let x1 = x.min(self.width);
        let y1 = y.min(self.height);
        let x2 = x.saturating_add(w).min(self.width);
        let y2 = y.saturating_add(h).min(self.height);

        if x1 >= x2 || y1 >= y2 {
            return;
        }

        let rgba = color.to_array();
        let rect_width = (x2 - x1) as usize;

        for row_y in y1..y2 {
            let row_start = (row_y as usize) * self.stride + (x1 as usize) * 4;
            let row = &mut self.pixels[row_start..row_start + rect_width * 4];

            for chunk in row.chunks_exact_mut(4) {
                chunk.copy_from_slice(&rgba);
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

    /// Color at a signed coordinate, `None` outside the surface.
    #[must_use]
    pub fn pixel_at(&self, point: Point) -> Option<Rgba> {
        let x = u32::try_from(point.x).ok()?;
        let y = u32::try_from(point.y).ok()?;
        self.get_pixel(x, y)
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
    /// `out = src * src_alpha + dst * dst_alpha * (1 - src_alpha)`
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.pixel_index(x, y);
        let src_a = f32::from(color.a) / 255.0;
        let dst_a = f32::from(self.pixels[idx + 3]) / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);

        if out_a > 0.0 {
            let blend = |src: u8, dst: u8| -> u8 {
                let src_f = f32::from(src) / 255.0;
                let dst_f = f32::from(dst) / 255.0;
                let out = (src_f * src_a + dst_f * dst_a * (1.0 - src_a)) / out_a;
                (out * 255.0).round() as u8
            };

            self.pixels[idx] = blend(color.r, self.pixels[idx]);
            self.pixels[idx + 1] = blend(color.g, self.pixels[idx + 1]);
            self.pixels[idx + 2] = blend(color.b, self.pixels[idx + 2]);
            self.pixels[idx + 3] = (out_a * 255.0).round() as u8;
        }
    }

    /// Draw `image` stretched over the whole surface (nearest neighbour).
    pub fn draw_image_scaled(&mut self, image: &Framebuffer) {
        let (dw, dh) = (u64::from(self.width), u64::from(self.height));
        let (sw, sh) = (u64::from(image.width), u64::from(image.height));

        for y in 0..self.height {
            // Sample at pixel centres: src = floor((dst + 0.5) * src_len / dst_len)
            let sy = ((2 * u64::from(y) + 1) * sh / (2 * dh)) as u32;
            for x in 0..self.width {
                let sx = ((2 * u64::from(x) + 1) * sw / (2 * dw)) as u32;
                if let Some(color) = image.get_pixel(sx, sy) {
                    self.blend_pixel(x, y, color);
                }
            }
        }
    }

    /// Calculate the byte index for a pixel coordinate.
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * self.stride + (x as usize) * 4
    }

    /// Get pixel data as a compact buffer without stride padding.
    ///
    /// This is what PNG encoding expects.
    #[must_use]
    pub fn to_compact_pixels(&self) -> Vec<u8> {
        let row_bytes = (self.width as usize) * 4;
        let mut compact = Vec::with_capacity(row_bytes * (self.height as usize));
        for y in 0..self.height {
            if let Some(row) = self.row(y) {
                compact.extend_from_slice(row);
            }
        }
        compact
    }
}

impl PixelSink for Framebuffer {
    /// Opaque colours replace the pixel, translucent ones blend over it.
    fn put_pixel(&mut self, point: Point, color: Rgba) {
        let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) else {
            return;
        };
        if color.a == 255 {
            self.set_pixel(x, y, color);
        } else {
            self.blend_pixel(x, y, color);
        }
    }

    fn bounds(&self) -> Option<Size> {
        Some(self.size())
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
        assert_eq!(fb.size(), Size::new(100, 50));
        // Stride should be >= width * 4 and aligned
        assert!(fb.stride >= 400);
        assert_eq!(fb.stride % ROW_ALIGNMENT, 0);
        assert_eq!(fb.get_pixel(0, 0), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Framebuffer::new(0, 100).is_err());
        assert!(Framebuffer::new(100, 0).is_err());
        assert!(Framebuffer::new(0, 0).is_err());
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
    fn test_fill_rect() {
        let mut fb = Framebuffer::new(100, 100).unwrap();
        fb.clear(Rgba::WHITE);
        fb.fill_rect(10, 10, 20, 20, Rgba::RED);

        assert_eq!(fb.get_pixel(15, 15), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(30, 30), Some(Rgba::WHITE));
    }

    #[test]
    fn test_fill_rect_saturates() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.fill_rect(5, 5, u32::MAX, u32::MAX, Rgba::BLUE);
        assert_eq!(fb.get_pixel(9, 9), Some(Rgba::BLUE));
        assert_eq!(fb.get_pixel(4, 4), Some(Rgba::TRANSPARENT));
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
    fn test_blend_pixel() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::WHITE);

        fb.blend_pixel(5, 5, Rgba::new(255, 0, 0, 128));

        let result = fb.get_pixel(5, 5).unwrap();
        // Pinkish blend of red and white
        assert_eq!(result.r, 255);
        assert!(result.g > 100 && result.g < 160);
        assert_eq!(result.a, 255);
    }

    #[test]
    fn test_blend_onto_transparent_keeps_source() {
        let mut fb = Framebuffer::new(2, 2).unwrap();
        fb.blend_pixel(0, 0, Rgba::GREEN);
        assert_eq!(fb.get_pixel(0, 0), Some(Rgba::GREEN));
    }

    #[test]
    fn test_put_pixel_clips() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.put_pixel(Point::new(-1, 5), Rgba::RED);
        fb.put_pixel(Point::new(5, -1), Rgba::RED);
        fb.put_pixel(Point::new(10, 5), Rgba::RED);
        fb.put_pixel(Point::new(i32::MIN, i32::MAX), Rgba::RED);
        assert!(fb.to_compact_pixels().iter().all(|&b| b == 0));

        fb.put_pixel(Point::new(9, 9), Rgba::RED);
        assert_eq!(fb.pixel_at(Point::new(9, 9)), Some(Rgba::RED));
        assert_eq!(fb.pixel_at(Point::new(-1, 0)), None);
    }

    #[test]
    fn test_put_pixel_translucent_blends() {
        let mut fb = Framebuffer::new(4, 4).unwrap();
        fb.clear(Rgba::BLACK);
        fb.put_pixel(Point::new(1, 1), Rgba::WHITE.with_alpha(0));
        assert_eq!(fb.get_pixel(1, 1), Some(Rgba::BLACK));
    }

    #[test]
    fn test_row_access() {
        let mut fb = Framebuffer::new(10, 5).unwrap();
        fb.clear(Rgba::BLACK);
        fb.set_pixel(5, 2, Rgba::RED);

        let row = fb.row(2).unwrap();
        assert_eq!(row.len(), 40);
        assert_eq!(&row[20..24], &[255, 0, 0, 255]);
        assert!(fb.row(5).is_none());
    }

    #[test]
    fn test_compact_pixels_strip_padding() {
        let mut fb = Framebuffer::new(3, 2).unwrap();
        fb.clear(Rgba::RED);
        let compact = fb.to_compact_pixels();
        assert!(fb.stride > 3 * 4);
        assert_eq!(compact.len(), 3 * 2 * 4);
        assert!(compact.chunks_exact(4).all(|c| c == [255, 0, 0, 255]));
    }

    #[test]
    fn test_from_rgba_pixels() {
        let data: Vec<u8> = [Rgba::RED, Rgba::GREEN, Rgba::BLUE, Rgba::WHITE]
            .iter()
            .flat_map(|c| c.to_array())
            .collect();
        let fb = Framebuffer::from_rgba_pixels(2, 2, &data).unwrap();
        assert_eq!(fb.get_pixel(0, 0), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(1, 0), Some(Rgba::GREEN));
        assert_eq!(fb.get_pixel(0, 1), Some(Rgba::BLUE));
        assert_eq!(fb.get_pixel(1, 1), Some(Rgba::WHITE));
        assert_eq!(fb.to_compact_pixels(), data);
    }

    #[test]
    fn test_from_rgba_pixels_length_mismatch() {
        let err = Framebuffer::from_rgba_pixels(2, 2, &[0; 15]).unwrap_err();
        assert!(matches!(err, Error::UnsupportedImage(_)));
    }

    #[test]
    fn test_draw_image_scaled_up() {
        let data: Vec<u8> = [Rgba::RED, Rgba::BLUE]
            .iter()
            .flat_map(|c| c.to_array())
            .collect();
        let image = Framebuffer::from_rgba_pixels(2, 1, &data).unwrap();

        let mut fb = Framebuffer::new(4, 2).unwrap();
        fb.draw_image_scaled(&image);

        for y in 0..2 {
            assert_eq!(fb.get_pixel(0, y), Some(Rgba::RED));
            assert_eq!(fb.get_pixel(1, y), Some(Rgba::RED));
            assert_eq!(fb.get_pixel(2, y), Some(Rgba::BLUE));
            assert_eq!(fb.get_pixel(3, y), Some(Rgba::BLUE));
        }
    }

    #[test]
    fn test_draw_image_scaled_down() {
        let mut image = Framebuffer::new(8, 8).unwrap();
        image.clear(Rgba::GREEN);
        let mut fb = Framebuffer::new(3, 3).unwrap();
        fb.clear(Rgba::WHITE);
        fb.draw_image_scaled(&image);
        assert_eq!(fb.get_pixel(2, 2), Some(Rgba::GREEN));
    }
}
