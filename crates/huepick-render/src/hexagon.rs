//! Hexagonal honeycomb wheel generation
//!
//! Walks a staggered grid of hexagon centers clipped to a master
//! hexagon, colors each cell from its polar position, and paints the
//! cells into a framebuffer via filled-polygon rasterization. This is
//! the only mode that outputs a framebuffer instead of a packed
//! per-pixel buffer.

use huepick_core::{Point, Rect, Surface, hexagon_vertices, point_in_polygon, polar};
use huepick_color::Hsv;

use crate::element::{PickerElement, sort_elements};
use crate::error::RenderResult;
use crate::picker::{GeneratedParts, PickerOptions};
use crate::wrap_degrees;

pub(crate) fn generate(options: &PickerOptions) -> RenderResult<GeneratedParts> {
    let r = f64::from(options.radius);
    let side = 2 * options.radius + 1;
    let center = Point::new(r, r);
    let master = hexagon_vertices(center, r);

    let step_x = options.element_size * 1.5;
    let step_y = options.element_size / 2.0;
    let cell_radius = options.element_size / 2.0;
    let rows = (2.0 * r / step_y).floor() as u32;

    let mut surface = Surface::new(side, side)?;
    let mut elements = Vec::new();

    for row in 0..=rows {
        let y = f64::from(row) * step_y;
        // Every other row shifts half a step, the honeycomb stagger.
        let offset = if row % 2 == 1 { step_x / 2.0 } else { 0.0 };
        let cols = ((2.0 * r - offset) / step_x).floor() as u32;
        for col in 0..=cols {
            let x = offset + f64::from(col) * step_x;
            if !point_in_polygon(&master, x, y) {
                continue;
            }
            let mut pt = polar::to_polar(x - r, y - r);
            pt.radius = pt.radius.min(r);
            let color = if pt.is_origin() {
                // The dead-center cell gets the raw -1 bit pattern
                // (opaque white), not the achromatic gray every other
                // degenerate-angle path produces. Kept for
                // compatibility with existing consumers.
                -1i32 as u32
            } else {
                let ratio = pt.radius / r;
                Hsv::Chromatic {
                    hue: wrap_degrees(pt.arc - options.hue_offset),
                    saturation: if options.invert_saturation { 1.0 - ratio } else { ratio },
                    value: options.value,
                }
                .to_color()
            };
            let cell = hexagon_vertices(Point::new(x, y), cell_radius);
            fill_polygon(&mut surface, &cell, color);
            elements.push(PickerElement::hexagon(color, Point::new(x, y), cell, pt));
        }
    }
    sort_elements(&mut elements);

    Ok(GeneratedParts {
        bounds: Rect::new(0.0, 0.0, f64::from(side), f64::from(side)),
        wheel_radius: r,
        elements,
        pixel_buffer: None,
        framebuffer: Some(surface),
    })
}

/// Paint a filled polygon into the surface.
///
/// Even-odd scanline fill sampled at pixel centers: a pixel is painted
/// when its center `(x + 0.5, y + 0.5)` lies inside the polygon.
fn fill_polygon(surface: &mut Surface, polygon: &[Point], color: u32) {
    if polygon.len() < 3 {
        return;
    }
    let (min_y, max_y) = polygon
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.y), hi.max(p.y))
        });
    let row_start = min_y.floor().max(0.0) as u32;
    let row_end = (max_y.ceil() as i64).min(i64::from(surface.height()) - 1);
    if row_end < 0 {
        return;
    }

    let mut crossings: Vec<f64> = Vec::with_capacity(polygon.len());
    for row in row_start..=row_end as u32 {
        let fy = f64::from(row) + 0.5;
        crossings.clear();
        let mut j = polygon.len() - 1;
        for i in 0..polygon.len() {
            let (pi, pj) = (polygon[i], polygon[j]);
            if (pi.y < fy && pj.y >= fy) || (pj.y < fy && pi.y >= fy) {
                crossings.push(pi.x + (fy - pi.y) / (pj.y - pi.y) * (pj.x - pi.x));
            }
            j = i;
        }
        crossings.sort_by(f64::total_cmp);
        for pair in crossings.chunks_exact(2) {
            // Pixel centers inside [pair[0], pair[1])
            let x_start = (pair[0] - 0.5).ceil().max(0.0) as u32;
            let x_end = ((pair[1] - 0.5).ceil() as i64 - 1).min(i64::from(surface.width()) - 1);
            if x_end < 0 {
                continue;
            }
            for x in x_start..=x_end as u32 {
                surface.set_pixel_unchecked(x, row, color);
            }
        }
    }
}
