//! Huepick Color - HSV conversion and the named-color catalog
//!
//! This crate is the single source of truth for "what color sits at this
//! HSV coordinate":
//!
//! - **HSV conversion** ([`hsv`]): bidirectional packed-ARGB <-> HSV
//!   mapping, including the legacy achromatic-sentinel convention the
//!   picker renderer depends on
//! - **Named colors** ([`catalog`]): an explicitly constructed, read-only
//!   lookup table for name and nearest-color queries

pub mod catalog;
pub mod hsv;

// Re-export core types
pub use huepick_core;

pub use catalog::{NamedColor, NamedColorCatalog};
pub use hsv::{HUE_SENTINEL, Hsv};
