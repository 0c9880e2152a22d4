//! Hue-box generation
//!
//! Unlike the HSV-driven layouts, the hue-box interpolates packed
//! channels directly: red rises and blue falls along the major axis,
//! green rises along the perpendicular axis while an orange
//! pseudo-channel falls. The orange channel only reaches the output in
//! tetrachromatic mode, where it perturbs even pixels on even rows.

use huepick_core::{Point, Rect, argb};

use crate::element::{PickerElement, sort_elements};
use crate::picker::{GeneratedParts, PickerOptions};

fn channel(position: u32, extent: u32) -> f64 {
    f64::from(position) * 255.0 / f64::from(extent)
}

pub(crate) fn generate(options: &PickerOptions) -> GeneratedParts {
    let width = options.width;
    let height = options.height;
    let vertical = options.mode.is_vertical();

    let mut elements = Vec::new();
    let mut buffer = Vec::with_capacity((width as usize) * (height as usize) * 4);

    for y in 0..height {
        for x in 0..width {
            let (axis, extent, perp, perp_extent) = if vertical {
                (y, height, x, width)
            } else {
                (x, width, y, height)
            };
            let ta = channel(axis, extent);
            let mut tp = channel(perp, perp_extent);
            if options.invert_saturation {
                tp = 255.0 - tp;
            }
            let mut red = ta;
            let blue = 255.0 - ta;
            let mut green = tp;
            let orange = 255.0 - tp;
            if options.tetrachromatic && x % 2 == 0 && y % 2 == 0 {
                red = (red + orange / 2.0).min(255.0);
                green = (green + orange / 2.0).min(255.0);
            }
            let color = argb::compose(
                red.round() as u8,
                green.round() as u8,
                blue.round() as u8,
            );
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

#[cfg(test)]
mod tests {
    use crate::picker::Picker;

    fn pixel(buf: &[u8], width: u32, x: u32, y: u32) -> u32 {
        let idx = ((y * width + x) * 4) as usize;
        u32::from_le_bytes([buf[idx], buf[idx + 1], buf[idx + 2], buf[idx + 3]])
    }

    #[test]
    fn test_horizontal_corners() {
        let picker = Picker::hue_box(false, 255, 255, false, false).unwrap();
        let buf = picker.pixel_buffer().unwrap();
        // Left edge: no red, full blue; top row: no green.
        assert_eq!(pixel(buf, 255, 0, 0), 0xFF00_00FF);
        // Right edge, bottom row: red and green saturated, blue gone.
        assert_eq!(pixel(buf, 255, 254, 254), 0xFFFE_FE01);
    }

    #[test]
    fn test_invert_flips_green_axis() {
        let plain = Picker::hue_box(false, 100, 100, false, false).unwrap();
        let flipped = Picker::hue_box(false, 100, 100, true, false).unwrap();
        let a = pixel(plain.pixel_buffer().unwrap(), 100, 30, 0);
        let b = pixel(flipped.pixel_buffer().unwrap(), 100, 30, 0);
        assert_eq!(a & 0x0000_FF00, 0);
        assert_eq!(b & 0x0000_FF00, 0x0000_FF00);
    }

    #[test]
    fn test_tetrachromatic_perturbs_even_pixels_only() {
        let plain = Picker::hue_box(false, 64, 64, false, false).unwrap();
        let tetra = Picker::hue_box(false, 64, 64, false, true).unwrap();
        let pb = plain.pixel_buffer().unwrap();
        let tb = tetra.pixel_buffer().unwrap();
        // Odd coordinates are untouched.
        assert_eq!(pixel(pb, 64, 3, 5), pixel(tb, 64, 3, 5));
        // At the top-left the orange channel is at its peak.
        assert_ne!(pixel(pb, 64, 2, 0), pixel(tb, 64, 2, 0));
    }

    #[test]
    fn test_vertical_swaps_axes() {
        let horizontal = Picker::hue_box(false, 120, 80, false, false).unwrap();
        let vertical = Picker::hue_box(true, 80, 120, false, false).unwrap();
        let a = pixel(horizontal.pixel_buffer().unwrap(), 120, 30, 10);
        let b = pixel(vertical.pixel_buffer().unwrap(), 80, 10, 30);
        assert_eq!(a, b);
    }

    #[test]
    fn test_requires_color_box_flag() {
        use crate::mode::PickerMode;
        use crate::picker::{Picker, PickerOptions};
        let err = Picker::generate(PickerOptions {
            mode: PickerMode::HueBoxHorizontal,
            width: 10,
            height: 10,
            ..Default::default()
        });
        assert!(err.is_err());
    }
}
