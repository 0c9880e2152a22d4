//! Surface - a 32-bit ARGB framebuffer
//!
//! The drawing target for hexagon-mode polygon rasterization, and the
//! backing store behind every picker's packed pixel output. Pixels are
//! stored one `u32` per pixel in row-major order, top to bottom; the
//! packed layout is the [`crate::argb`] format.

use crate::error::{Error, Result};

/// A width x height buffer of packed ARGB pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl Surface {
    /// Create a new surface initialized to transparent (all zero).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either extent is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let data = vec![0u32; width as usize * height as usize];
        Ok(Self { width, height, data })
    }

    /// Get the surface width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the surface height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Get a pixel value.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    /// Set a pixel value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, value: u32) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.data[y as usize * self.width as usize + x as usize] = value;
        Ok(())
    }

    /// Set a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, value: u32) {
        self.data[y as usize * self.width as usize + x as usize] = value;
    }

    /// Serialize to a tightly packed byte buffer.
    ///
    /// 4 bytes per pixel, row-major, little-endian per pixel - so the byte
    /// order within each pixel is B, G, R, A, the standard 32bpp layout a
    /// bitmap constructor expects.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() * 4);
        for pixel in &self.data {
            out.extend_from_slice(&pixel.to_le_bytes());
        }
        out
    }
}
