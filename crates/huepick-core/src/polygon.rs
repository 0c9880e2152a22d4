//! Polygon utilities
//!
//! Point-in-polygon membership testing and the hexagon vertex template used
//! by both the hexagon picker layout and its per-cell polygons.

use crate::point::{Point, Rect};
use crate::polar::PolarCoordinates;

/// Odd-even-rule point-in-polygon test (ray casting).
///
/// Iterates edges `(i, j = previous vertex)` and toggles the inside flag
/// whenever the horizontal ray at the test point's y crosses the edge.
/// The asymmetric `<` / `>=` comparisons on the two edge endpoints decide
/// membership when the ray passes exactly through a vertex; hexagon-cell
/// membership depends on that exact tie-break, so it must not be changed.
pub fn point_in_polygon(polygon: &[Point], x: f64, y: f64) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = polygon[i];
        let pj = polygon[j];
        if (pi.y < y && pj.y >= y) || (pj.y < y && pi.y >= y) {
            let crossing = pi.x + (y - pi.y) / (pj.y - pi.y) * (pj.x - pi.x);
            if crossing < x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Build the 6 vertices of a hexagon centered at `center` with the given
/// circumradius.
///
/// Vertices are in clockwise order starting from an angular offset of -30
/// degrees (so the cell has flat left/right sides and pointed top/bottom
/// vertices on a y-down surface). A fresh vector is returned per call;
/// callers never share or rewrite vertex buffers.
pub fn hexagon_vertices(center: Point, radius: f64) -> Vec<Point> {
    (0..6)
        .map(|i| {
            let arc = -30.0 + 60.0 * i as f64;
            PolarCoordinates::new(radius, arc).to_screen(center)
        })
        .collect()
}

/// Compute the axis-aligned bounding rectangle of a polygon.
///
/// Returns a zero-sized rectangle at the origin for an empty polygon.
pub fn polygon_bounds(polygon: &[Point]) -> Rect {
    let Some(first) = polygon.first() else {
        return Rect::default();
    };
    let (mut x_min, mut y_min, mut x_max, mut y_max) = (first.x, first.y, first.x, first.y);
    for p in &polygon[1..] {
        x_min = x_min.min(p.x);
        y_min = y_min.min(p.y);
        x_max = x_max.max(p.x);
        y_max = y_max.max(p.y);
    }
    Rect::new(x_min, y_min, x_max - x_min, y_max - y_min)
}
