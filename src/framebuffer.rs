//! Pixel buffer that the rasterizers write into.
//!
//! A fixed-size, row-major grid of tightly packed RGB triplets. Rasterizers
//! only ever write through [`PixelBuffer::set_pixel`] and
//! [`PixelBuffer::fill_span`], which clip silently; the public read accessor
//! [`PixelBuffer::get`] instead reports out-of-range coordinates as an error.

use crate::color::Rgb;
use crate::error::{Error, Result};

/// Bytes per pixel (R, G, B).
const CHANNELS: usize = 3;

/// Largest accepted width or height, in pixels.
///
/// Caps a buffer at 768 MiB of pixel data, so dimensions read from a scene
/// file are rejected instead of exhausting memory.
pub const MAX_DIMENSION: u32 = 16_384;

/// Fixed-size RGB pixel grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGB pixels in row-major order, 3 bytes each.
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Create a new buffer filled with `background`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if width or height is zero or
    /// larger than [`MAX_DIMENSION`].
    ///
    /// # Example
    ///
    /// ```
    /// use rasterkit::color::Rgb;
    /// use rasterkit::framebuffer::PixelBuffer;
    ///
    /// let buf = PixelBuffer::new(200, 100, Rgb::WHITE).unwrap();
    /// assert_eq!(buf.width(), 200);
    /// assert_eq!(buf.get(0, 0).unwrap(), Rgb::WHITE);
    /// ```
    pub fn new(width: u32, height: u32, background: Rgb) -> Result<Self> {
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(Error::InvalidDimensions { width, height });
        }

        let pixels = background.to_array().repeat((width as usize) * (height as usize));
        log::debug!("created {width}x{height} pixel buffer, background {background}");

        Ok(Self { width, height, pixels })
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

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Get the raw pixel data as a slice.
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
        let row_bytes = self.row_bytes();
        let start = (y as usize) * row_bytes;
        Some(&self.pixels[start..start + row_bytes])
    }

    /// Whether `(x, y)` lies inside the buffer.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Read the color at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinate is outside the
    /// buffer. Unlike drawing, reading is never clipped.
    pub fn get(&self, x: i32, y: i32) -> Result<Rgb> {
        if !self.contains(x, y) {
            return Err(Error::OutOfBounds { x, y, width: self.width, height: self.height });
        }
        Ok(self.read(x as u32, y as u32))
    }

    /// Get the color at a pixel coordinate, or `None` if out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.read(x, y))
    }

    /// Write a pixel, silently discarding coordinates outside the buffer.
    ///
    /// Returns whether the write landed.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        let idx = self.pixel_index(x as u32, y as u32);
        self.pixels[idx..idx + CHANNELS].copy_from_slice(&color.to_array());
        true
    }

    /// Fill the inclusive span `x_start..=x_end` on row `y`.
    ///
    /// The span is clipped to the buffer; an empty or fully clipped span is a
    /// no-op. Returns the number of pixels written.
    pub fn fill_span(&mut self, y: i32, x_start: i32, x_end: i32, color: Rgb) -> usize {
        if y < 0 || (y as u32) >= self.height || x_start > x_end {
            return 0;
        }

        let lo = i64::from(x_start).max(0);
        let hi = i64::from(x_end).min(i64::from(self.width) - 1);
        if lo > hi {
            return 0;
        }

        let start = self.pixel_index(lo as u32, y as u32);
        let end = self.pixel_index(hi as u32, y as u32) + CHANNELS;
        let rgb = color.to_array();
        for chunk in self.pixels[start..end].chunks_exact_mut(CHANNELS) {
            chunk.copy_from_slice(&rgb);
        }

        (hi - lo + 1) as usize
    }

    /// Fill the whole buffer with one color.
    pub fn clear(&mut self, color: Rgb) {
        let rgb = color.to_array();
        for chunk in self.pixels.chunks_exact_mut(CHANNELS) {
            chunk.copy_from_slice(&rgb);
        }
    }

    /// Count the pixels that currently hold `color`.
    #[must_use]
    pub fn count_color(&self, color: Rgb) -> usize {
        let rgb = color.to_array();
        self.pixels.chunks_exact(CHANNELS).filter(|c| *c == rgb).count()
    }

    /// Serialize to tightly packed row-major RGB bytes, the form every
    /// encoder in [`crate::output`] consumes.
    #[must_use]
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    #[inline]
    fn read(&self, x: u32, y: u32) -> Rgb {
        let idx = self.pixel_index(x, y);
        Rgb::new(self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2])
    }

    #[inline]
    const fn row_bytes(&self) -> usize {
        (self.width as usize) * CHANNELS
    }

    /// Calculate the byte index for a pixel coordinate.
    #[inline]
    const fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * self.row_bytes() + (x as usize) * CHANNELS
    }
}
