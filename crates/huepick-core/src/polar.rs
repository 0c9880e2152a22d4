//! Polar coordinate transforms
//!
//! Conversion between Cartesian offsets (relative to a picker's center) and
//! polar `(radius, arc)` form, with the arc measured in degrees. Angle 0
//! points along the positive x axis and increases toward positive y, which
//! on a top-down screen surface reads as clockwise.
//!
//! The origin has no defined angle: [`to_polar`] returns a NaN arc there,
//! and callers treat that as the achromatic position (no hue).

use crate::point::Point;

/// Polar form of a position relative to a center point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarCoordinates {
    /// Distance from the center
    pub radius: f64,
    /// Angle in degrees, normalized to [0, 360); NaN at the origin
    pub arc: f64,
}

impl PolarCoordinates {
    /// Create polar coordinates from raw parts.
    #[inline]
    pub const fn new(radius: f64, arc: f64) -> Self {
        Self { radius, arc }
    }

    /// True when this position is the origin (undefined angle).
    #[inline]
    pub fn is_origin(&self) -> bool {
        self.arc.is_nan()
    }

    /// Map back to screen coordinates relative to `center`.
    ///
    /// Exact inverse of [`to_polar`] up to floating-point rounding. The
    /// origin (NaN arc) maps to `center` itself.
    pub fn to_screen(&self, center: Point) -> Point {
        if self.is_origin() {
            return center;
        }
        let rad = self.arc.to_radians();
        Point::new(
            center.x + self.radius * rad.cos(),
            center.y + self.radius * rad.sin(),
        )
    }
}

/// Convert Cartesian offsets from a center into polar coordinates.
///
/// Returns `radius = sqrt(x^2 + y^2)` and the atan2-derived arc in degrees
/// normalized to [0, 360). The arc is NaN when both offsets are zero.
pub fn to_polar(x: f64, y: f64) -> PolarCoordinates {
    if x == 0.0 && y == 0.0 {
        return PolarCoordinates::new(0.0, f64::NAN);
    }
    let radius = x.hypot(y);
    let mut arc = y.atan2(x).to_degrees();
    if arc < 0.0 {
        arc += 360.0;
    }
    PolarCoordinates::new(radius, arc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axes() {
        let p = to_polar(10.0, 0.0);
        assert!((p.radius - 10.0).abs() < 1e-9);
        assert!((p.arc - 0.0).abs() < 1e-9);

        let p = to_polar(0.0, 10.0);
        assert!((p.arc - 90.0).abs() < 1e-9);

        let p = to_polar(-10.0, 0.0);
        assert!((p.arc - 180.0).abs() < 1e-9);

        let p = to_polar(0.0, -10.0);
        assert!((p.arc - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_origin_has_no_angle() {
        let p = to_polar(0.0, 0.0);
        assert_eq!(p.radius, 0.0);
        assert!(p.is_origin());
    }

    #[test]
    fn test_roundtrip() {
        let center = Point::new(50.0, 50.0);
        for (x, y) in [(3.0, 4.0), (-7.5, 2.25), (0.0, -12.0), (1e-3, 1e-3)] {
            let polar = to_polar(x, y);
            let back = polar.to_screen(center);
            assert!((back.x - (center.x + x)).abs() < 1e-9, "x for ({x},{y})");
            assert!((back.y - (center.y + y)).abs() < 1e-9, "y for ({x},{y})");
        }
    }

    #[test]
    fn test_origin_maps_to_center() {
        let center = Point::new(5.0, 6.0);
        assert_eq!(to_polar(0.0, 0.0).to_screen(center), center);
    }
}
