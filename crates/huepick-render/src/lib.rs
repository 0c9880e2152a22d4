//! huepick-render - picker geometry and rasterization
//!
//! Turns a layout mode and its geometric parameters into a fully
//! populated, immutable [`Picker`]: a list of colored elements for
//! hit-testing plus either a packed per-pixel buffer or, for the
//! hexagon mode, a rasterized framebuffer.
//!
//! Construction is a single synchronous pass with no shared state, so
//! independent pickers can be generated concurrently and a finished
//! picker can be read from any thread.

pub mod element;
pub mod error;
mod hexagon;
mod hit;
mod huebox;
mod linear;
pub mod mode;
pub mod picker;
mod wheel;

pub use element::{ElementShape, PickerElement};
pub use error::{RenderError, RenderResult};
pub use hit::HitResult;
pub use mode::PickerMode;
pub use picker::{Picker, PickerOptions};

pub use huepick_color;
pub use huepick_core;

/// Normalize an angle in degrees into [0, 360).
#[inline]
pub(crate) fn wrap_degrees(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}
