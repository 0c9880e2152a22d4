//! Huepick - procedural color picker rendering
//!
//! Huepick generates color-picker surfaces without any GUI dependency:
//! given a layout mode and its geometric parameters it produces an
//! immutable picker holding a packed pixel buffer (or a rasterized
//! framebuffer for the hexagon mode) and a list of colored elements
//! for hit-testing.
//!
//! # Overview
//!
//! - Smooth and hue-only wheels, linear gradients and hue bars,
//!   channel-interpolated hue boxes, hexagonal honeycomb wheels
//! - HSV conversion with a legacy achromatic encoding preserved for
//!   compatibility with existing picker consumers
//! - Polar and linear coordinate transforms, point-in-polygon tests
//! - Analytic and element-scan hit-testing with optional clamping
//!
//! # Example
//!
//! ```
//! use huepick::render::Picker;
//!
//! // A smooth wheel of radius 50 at full brightness.
//! let picker = Picker::wheel(50, 1.0, 0.0, false).unwrap();
//! assert_eq!(picker.bounds().w, 101.0);
//!
//! // The rightmost edge pixel is pure red.
//! let hit = picker.hit_test(100.0, 50.0, false);
//! assert_eq!(hit.color, Some(0xFFFF_0000));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use huepick_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use huepick_color as color;
pub use huepick_render as render;
