//! Huepick Core - Basic data structures for picker rendering
//!
//! This crate provides the fundamental types used throughout the huepick
//! color-picker rendering engine:
//!
//! - [`Point`] / [`Rect`] - 2D coordinates and axis-aligned rectangles
//! - [`PolarCoordinates`] - polar form of a position relative to a center
//! - [`Surface`] - a 32-bit ARGB framebuffer
//! - [`argb`] - packed-pixel channel helpers
//! - polygon utilities ([`point_in_polygon`], [`hexagon_vertices`])

pub mod error;
pub mod point;
pub mod polar;
pub mod polygon;
pub mod surface;

pub use error::{Error, Result};
pub use point::{Point, Rect};
pub use polar::{PolarCoordinates, to_polar};
pub use polygon::{hexagon_vertices, point_in_polygon, polygon_bounds};
pub use surface::Surface;

/// Color channel helpers for packed 32-bit ARGB pixels.
///
/// # Pixel format
///
/// Pixels are stored as `0xAARRGGBB` (alpha in MSB, blue in LSB). When the
/// packed value is written out little-endian the byte order is B, G, R, A -
/// the standard 32bpp surface layout consumed by bitmap construction APIs.
pub mod argb {
    /// Alpha channel shift (MSB)
    pub const ALPHA_SHIFT: u32 = 24;
    /// Red channel shift
    pub const RED_SHIFT: u32 = 16;
    /// Green channel shift
    pub const GREEN_SHIFT: u32 = 8;
    /// Blue channel shift (LSB)
    pub const BLUE_SHIFT: u32 = 0;

    /// Fully opaque alpha, already shifted into position.
    pub const OPAQUE: u32 = 0xFF00_0000;

    /// Extract the alpha component from a packed pixel.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Extract the red component from a packed pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract the green component from a packed pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract the blue component from a packed pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Compose a fully opaque packed ARGB pixel.
    #[inline]
    pub fn compose(r: u8, g: u8, b: u8) -> u32 {
        OPAQUE | ((r as u32) << RED_SHIFT) | ((g as u32) << GREEN_SHIFT) | ((b as u32) << BLUE_SHIFT)
    }

    /// Compose a packed ARGB pixel with an explicit alpha.
    #[inline]
    pub fn compose_argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
        ((a as u32) << ALPHA_SHIFT)
            | ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
    }

    /// Extract RGB components from a packed pixel.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }

    /// Extract all four components from a packed pixel.
    #[inline]
    pub fn extract_argb(pixel: u32) -> (u8, u8, u8, u8) {
        (alpha(pixel), red(pixel), green(pixel), blue(pixel))
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_compose_extract() {
            let pixel = compose(0x12, 0x34, 0x56);
            assert_eq!(pixel, 0xFF12_3456);
            assert_eq!(extract_rgb(pixel), (0x12, 0x34, 0x56));
            assert_eq!(alpha(pixel), 0xFF);
        }

        #[test]
        fn test_compose_argb() {
            let pixel = compose_argb(0x00, 0xAA, 0xBB, 0xCC);
            assert_eq!(pixel, 0x00AA_BBCC);
            assert_eq!(extract_argb(pixel), (0x00, 0xAA, 0xBB, 0xCC));
        }

        #[test]
        fn test_little_endian_byte_order() {
            // Packed ARGB written little-endian must come out as B,G,R,A
            let pixel = compose(0xFF, 0x00, 0x00); // pure red
            assert_eq!(pixel.to_le_bytes(), [0x00, 0x00, 0xFF, 0xFF]);
        }
    }
}
