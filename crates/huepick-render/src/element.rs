//! PickerElement - one discrete addressable unit of the picker surface

use huepick_core::{Point, PolarCoordinates, Rect, polygon_bounds};

/// Shape of a picker element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementShape {
    /// A single pixel
    Point,
    /// A hexagonal cell
    Hexagon,
}

/// A single addressable unit of the generated picker.
///
/// Elements are immutable once constructed: the color is derived solely
/// from the center position and the picker's fixed parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerElement {
    /// Packed ARGB color assigned to this element
    pub color: u32,
    /// Representative point (pixel position or hex-cell center)
    pub center: Point,
    /// Axis-aligned rectangle enclosing the element
    pub bounds: Rect,
    /// Outline vertices: length 1 for a pixel, 6 for a hexagonal cell
    /// (clockwise from -30 degrees)
    pub polygon: Vec<Point>,
    /// Polar form of the center relative to the picker's center, for
    /// radial modes
    pub polar: Option<PolarCoordinates>,
    /// Element shape
    pub shape: ElementShape,
}

impl PickerElement {
    /// Build a single-pixel element.
    pub fn point(color: u32, center: Point, polar: Option<PolarCoordinates>) -> Self {
        Self {
            color,
            center,
            bounds: Rect::new(center.x, center.y, 1.0, 1.0),
            polygon: vec![center],
            polar,
            shape: ElementShape::Point,
        }
    }

    /// Build a hexagonal-cell element from its freshly built vertex list.
    pub fn hexagon(color: u32, center: Point, polygon: Vec<Point>, polar: PolarCoordinates) -> Self {
        let bounds = polygon_bounds(&polygon);
        Self {
            color,
            center,
            bounds,
            polygon,
            polar: Some(polar),
            shape: ElementShape::Hexagon,
        }
    }
}

/// Sort elements ascending by center x, tie-broken by center y.
///
/// The declared scan order of the element list for linear, hue-box and
/// hexagon modes.
pub(crate) fn sort_elements(elements: &mut [PickerElement]) {
    elements.sort_by(|a, b| {
        a.center
            .x
            .total_cmp(&b.center.x)
            .then(a.center.y.total_cmp(&b.center.y))
    });
}
