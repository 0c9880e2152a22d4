//! Linear, hue-bar and hue-box picker regression tests

use huepick_render::{Picker, PickerMode};

fn pixel(buf: &[u8], width: u32, x: u32, y: u32) -> u32 {
    let idx = ((y * width + x) * 4) as usize;
    u32::from_le_bytes([buf[idx], buf[idx + 1], buf[idx + 2], buf[idx + 3]])
}

// ============================================================================
// Hue bar
// ============================================================================

#[test]
fn test_hue_bar_reference_scenario() {
    // Width 360 maps one hue degree per pixel; midpoint is cyan on
    // every row.
    let picker = Picker::linear(PickerMode::HueBarHorizontal, 360, 10, 1.0, 0.0, false).unwrap();
    let buf = picker.pixel_buffer().unwrap();
    for y in 0..10 {
        assert_eq!(pixel(buf, 360, 180, y), 0xFF00_FFFF);
    }
}

#[test]
fn test_hue_bar_vertical_mirrors_horizontal() {
    let h = Picker::linear(PickerMode::HueBarHorizontal, 360, 10, 1.0, 0.0, false).unwrap();
    let v = Picker::linear(PickerMode::HueBarVertical, 10, 360, 1.0, 0.0, false).unwrap();
    let hb = h.pixel_buffer().unwrap();
    let vb = v.pixel_buffer().unwrap();
    for i in 0..360 {
        assert_eq!(pixel(hb, 360, i, 4), pixel(vb, 10, 4, i));
    }
}

// ============================================================================
// Linear gradient
// ============================================================================

#[test]
fn test_linear_saturation_axis() {
    let picker = Picker::linear(PickerMode::LinearHorizontal, 360, 100, 1.0, 0.0, false).unwrap();
    let buf = picker.pixel_buffer().unwrap();
    // Top row: saturation 0, every hue collapses to white.
    assert_eq!(pixel(buf, 360, 0, 0), 0xFFFF_FFFF);
    assert_eq!(pixel(buf, 360, 180, 0), 0xFFFF_FFFF);
    // Saturation grows toward the bottom row.
    let top = pixel(buf, 360, 180, 1);
    let bottom = pixel(buf, 360, 180, 99);
    assert_ne!(top, bottom);
}

#[test]
fn test_linear_inversion_flips_saturation_axis() {
    let plain = Picker::linear(PickerMode::LinearHorizontal, 90, 40, 1.0, 0.0, false).unwrap();
    let inverted = Picker::linear(PickerMode::LinearHorizontal, 90, 40, 1.0, 0.0, true).unwrap();
    let pb = plain.pixel_buffer().unwrap();
    let ib = inverted.pixel_buffer().unwrap();
    // Row y carries saturation y/40 plain and 1 - y/40 inverted, so row
    // y of one matches row 40 - y of the other, up to one rounding step
    // per channel.
    for y in 1..40 {
        for x in [0, 30, 60, 89] {
            let a = pixel(pb, 90, x, y);
            let b = pixel(ib, 90, x, 40 - y);
            for shift in [0, 8, 16] {
                let ca = (a >> shift) & 0xFF;
                let cb = (b >> shift) & 0xFF;
                assert!(ca.abs_diff(cb) <= 1, "({x},{y}): {a:08X} vs {b:08X}");
            }
        }
    }
    // And the top row swaps white for fully saturated color.
    assert_eq!(pixel(pb, 90, 0, 0), 0xFFFF_FFFF);
    assert_eq!(pixel(ib, 90, 0, 0), 0xFFFF_0000);
}

#[test]
fn test_hue_offset_shifts_gradient() {
    let picker = Picker::linear(PickerMode::HueBarHorizontal, 360, 4, 1.0, 120.0, false).unwrap();
    let buf = picker.pixel_buffer().unwrap();
    // x = 120 now reads hue 0.
    assert_eq!(pixel(buf, 360, 120, 0), 0xFFFF_0000);
}

#[test]
fn test_element_order_invariant() {
    let picker = Picker::linear(PickerMode::LinearVertical, 12, 9, 1.0, 0.0, false).unwrap();
    let elements = picker.elements();
    assert_eq!(elements.len(), 12 * 9);
    for pair in elements.windows(2) {
        let a = (pair[0].center.x, pair[0].center.y);
        let b = (pair[1].center.x, pair[1].center.y);
        assert!(a < b);
    }
}

#[test]
fn test_zero_extent_rejected() {
    assert!(Picker::linear(PickerMode::LinearHorizontal, 0, 10, 1.0, 0.0, false).is_err());
    assert!(Picker::linear(PickerMode::LinearHorizontal, 10, 0, 1.0, 0.0, false).is_err());
}

// ============================================================================
// Hue box
// ============================================================================

#[test]
fn test_hue_box_bypasses_hsv() {
    // The hue box is plain channel interpolation: the blue channel falls
    // linearly along the axis regardless of brightness or hue math.
    let picker = Picker::hue_box(false, 256, 64, false, false).unwrap();
    let buf = picker.pixel_buffer().unwrap();
    let left = pixel(buf, 256, 0, 32);
    let right = pixel(buf, 256, 255, 32);
    assert_eq!(left & 0xFF, 0xFF);
    assert_eq!(right & 0xFF, 0x01);
}

#[test]
fn test_hue_box_requires_flag_via_options() {
    use huepick_render::PickerOptions;
    let result = Picker::generate(PickerOptions {
        mode: PickerMode::HueBoxVertical,
        width: 8,
        height: 8,
        ..Default::default()
    });
    assert!(result.is_err());
}

#[test]
fn test_hue_box_elements_match_buffer() {
    let picker = Picker::hue_box(false, 16, 16, false, false).unwrap();
    let buf = picker.pixel_buffer().unwrap();
    for e in picker.elements() {
        let (x, y) = (e.center.x as u32, e.center.y as u32);
        assert_eq!(e.color, pixel(buf, 16, x, y));
    }
}
