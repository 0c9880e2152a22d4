//! Smooth wheel and hue-ring generation

use huepick_core::{Point, Rect, polar};
use huepick_color::Hsv;

use crate::element::PickerElement;
use crate::mode::PickerMode;
use crate::picker::{GeneratedParts, PickerOptions};
use crate::wrap_degrees;

/// Generate a per-pixel wheel surface of size `(2r + 1) x (2r + 1)`.
///
/// Pixels outside the disc (and inside the ring hole for the hue
/// wheel) are fully transparent and produce no element.
pub(crate) fn generate(options: &PickerOptions) -> GeneratedParts {
    let r = f64::from(options.radius);
    let side = 2 * options.radius + 1;
    let hue_ring = options.mode == PickerMode::HueWheel;
    let inner = r - options.ring_thickness;

    let mut elements = Vec::new();
    let mut buffer = Vec::with_capacity((side as usize) * (side as usize) * 4);

    for y in 0..side {
        for x in 0..side {
            let pt = polar::to_polar(f64::from(x) - r, f64::from(y) - r);
            let mut color = 0u32;
            if pt.radius <= r && !(hue_ring && pt.radius < inner) {
                let saturation = if hue_ring {
                    1.0
                } else {
                    let ratio = pt.radius / r;
                    if options.invert_saturation { 1.0 - ratio } else { ratio }
                };
                let hsv = if pt.is_origin() {
                    Hsv::Achromatic {
                        saturation,
                        value: options.value,
                    }
                } else {
                    Hsv::Chromatic {
                        hue: wrap_degrees(pt.arc - options.hue_offset),
                        saturation,
                        value: options.value,
                    }
                };
                color = hsv.to_color();
            }
            if color != 0 {
                elements.push(PickerElement::point(
                    color,
                    Point::new(f64::from(x), f64::from(y)),
                    Some(pt),
                ));
            }
            buffer.extend_from_slice(&color.to_le_bytes());
        }
    }

    GeneratedParts {
        bounds: Rect::new(0.0, 0.0, f64::from(side), f64::from(side)),
        wheel_radius: r,
        elements,
        pixel_buffer: Some(buffer),
        framebuffer: None,
    }
}
