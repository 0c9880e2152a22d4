//! Linear gradient and hue-bar generation

use huepick_core::{Point, Rect};
use huepick_color::Hsv;

use crate::element::{PickerElement, sort_elements};
use crate::picker::{GeneratedParts, PickerOptions};
use crate::wrap_degrees;

/// Generate a rectangular gradient surface.
///
/// Hue runs along the major axis (horizontal or vertical per the mode);
/// saturation runs along the perpendicular axis, or is pinned to 1 for
/// the hue-bar modes.
pub(crate) fn generate(options: &PickerOptions) -> GeneratedParts {
    let width = options.width;
    let height = options.height;
    let vertical = options.mode.is_vertical();
    let hue_bar = options.mode.is_hue_bar();

    let mut elements = Vec::new();
    let mut buffer = Vec::with_capacity((width as usize) * (height as usize) * 4);

    for y in 0..height {
        for x in 0..width {
            let (axis, extent, perp, perp_extent) = if vertical {
                (y, height, x, width)
            } else {
                (x, width, y, height)
            };
            let hue = wrap_degrees(f64::from(axis) / f64::from(extent) * 360.0 - options.hue_offset);
            let saturation = if hue_bar {
                1.0
            } else {
                let ratio = f64::from(perp) / f64::from(perp_extent);
                if options.invert_saturation { 1.0 - ratio } else { ratio }
            };
            let color = Hsv::Chromatic {
                hue,
                saturation,
                value: options.value,
            }
            .to_color();
            elements.push(PickerElement::point(
                color,
                Point::new(f64::from(x), f64::from(y)),
                None,
            ));
            buffer.extend_from_slice(&color.to_le_bytes());
        }
    }
    sort_elements(&mut elements);

    GeneratedParts {
        bounds: Rect::new(0.0, 0.0, f64::from(width), f64::from(height)),
        wheel_radius: 0.0,
        elements,
        pixel_buffer: Some(buffer),
        framebuffer: None,
    }
}
