//! Point, Rect - 2D coordinates and axis-aligned rectangles
//!
//! Coordinates are `f64` throughout: element centers produced by the
//! staggered hexagon grid walk are not integral, and hit-test queries
//! arrive as floating-point screen positions.

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle.
///
/// A simple Copy type; width and height are assumed non-negative by
/// construction sites (picker constructors validate their extents before
/// building any Rect).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left x coordinate
    pub x: f64,
    /// Top y coordinate
    pub y: f64,
    /// Width
    pub w: f64,
    /// Height
    pub h: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Get the right x coordinate (exclusive).
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    /// Get the bottom y coordinate (exclusive).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Get the center point.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Check whether a point lies inside the rectangle.
    ///
    /// The left/top edges are inclusive, the right/bottom edges exclusive.
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Clamp a point to the nearest in-bounds coordinate.
    ///
    /// The clamped range is `[x, x + w - 1]` on each axis so the result is
    /// always an addressable position, never the exclusive edge.
    pub fn clamp_point(&self, x: f64, y: f64) -> Point {
        Point::new(
            x.clamp(self.x, (self.right() - 1.0).max(self.x)),
            y.clamp(self.y, (self.bottom() - 1.0).max(self.y)),
        )
    }
}
