//! Error types for huepick-core
//!
//! A single error enum covers the core data structures. Degenerate numeric
//! cases (origin points with no defined angle, zero-chroma colors) are not
//! errors - they have defined sentinel outcomes - so the taxonomy here is
//! deliberately narrow.

use thiserror::Error;

/// Huepick core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid surface dimensions
    #[error("invalid surface dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel coordinates out of bounds
    #[error("pixel out of bounds: ({x}, {y}) outside {width}x{height}")]
    OutOfBounds { x: u32, y: u32, width: u32, height: u32 },
}

/// Result type alias for huepick-core operations
pub type Result<T> = std::result::Result<T, Error>;
