//! Error types for huepick-render
//!
//! Construction-time validation failures only. Degenerate numeric cases
//! during generation and hit-testing (undefined angles, out-of-bounds
//! queries, zero-chroma colors) are defined outcomes, never errors.

use thiserror::Error;

/// Errors that can occur while constructing a picker
#[derive(Debug, Error)]
pub enum RenderError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] huepick_core::Error),

    /// Zero or otherwise unusable extent
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// Inconsistent construction parameters
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type for picker construction
pub type RenderResult<T> = Result<T, RenderError>;
