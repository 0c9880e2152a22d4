//! HSV color conversion
//!
//! Bidirectional mapping between packed ARGB pixels and HSV triples.
//!
//! # The achromatic convention
//!
//! Zero-chroma colors have no hue. Historically this engine marked them
//! with the sentinel hue value -1 and packed a brightness-dependent gray
//! level into the saturation/value slots with a piecewise formula:
//!
//! - `value <= 0.5`: `saturation = 1`, `value' = 510 * value / 360`
//! - `value >  0.5`: `value' = 1`, `saturation = 720 * (1 - value) / 360`
//!
//! and the reverse conversion reapplies the same piecewise scaling to the
//! value slot to recover a gray level. This is NOT standard HSV achromatic
//! handling and the encode/decode pair is not a true inverse; it is
//! preserved legacy behavior that calling code branches on, so it must not
//! be "fixed". The sentinel itself is represented here as a tagged enum
//! variant ([`Hsv::Achromatic`]) rather than a magic number; the raw -1
//! only appears at the conversion boundary ([`Hsv::from_parts`],
//! [`Hsv::hue`]).

use huepick_core::argb;

/// Legacy hue sentinel meaning "no hue / achromatic".
///
/// Only meaningful at the [`Hsv::from_parts`] / [`Hsv::hue`] boundary;
/// internally the achromatic case is a distinct enum variant.
pub const HUE_SENTINEL: f64 = -1.0;

/// An HSV coordinate.
///
/// Hue is in degrees `[0, 360)`, saturation and value in `[0, 1]`. The
/// achromatic case is a separate variant carrying the legacy packed
/// saturation/value pair (see the module docs).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hsv {
    /// A color with a defined hue.
    Chromatic { hue: f64, saturation: f64, value: f64 },
    /// A zero-chroma (gray) color in the legacy packed encoding.
    Achromatic { saturation: f64, value: f64 },
}

/// The legacy piecewise gray scaling shared by the achromatic encode and
/// decode paths.
#[inline]
fn achromatic_gray(value: f64) -> f64 {
    if value <= 0.5 {
        510.0 * value / 360.0
    } else {
        720.0 * (1.0 - value) / 360.0
    }
}

/// Scale a unit component to a byte, rounding half away from zero.
#[inline]
fn unit_to_byte(v: f64) -> u8 {
    // f64::round rounds half away from zero, which is the rounding the
    // legacy conversion used.
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

impl Hsv {
    /// Convert normalized RGB channels (each in `[0, 1]`) to HSV.
    ///
    /// Zero-chroma inputs produce [`Hsv::Achromatic`] with the legacy
    /// packed encoding; otherwise the standard 6-sector chroma formula
    /// applies, with `saturation = chroma / value` (0 when value is 0).
    pub fn from_channels(r: f64, g: f64, b: f64) -> Self {
        let r = r.clamp(0.0, 1.0);
        let g = g.clamp(0.0, 1.0);
        let b = b.clamp(0.0, 1.0);

        let mx = r.max(g).max(b);
        let mn = r.min(g).min(b);
        let chroma = mx - mn;
        let value = mx;

        if chroma == 0.0 {
            return Self::achromatic_from_level(value);
        }

        let raw = if r == mx {
            (g - b) / chroma
        } else if g == mx {
            2.0 + (b - r) / chroma
        } else {
            4.0 + (r - g) / chroma
        };
        let mut hue = raw * 60.0;
        if hue < 0.0 {
            hue += 360.0;
        }

        let saturation = if value == 0.0 { 0.0 } else { chroma / value };
        Hsv::Chromatic { hue, saturation, value }
    }

    /// Convert a packed ARGB pixel to HSV. Alpha is ignored.
    pub fn from_color(color: u32) -> Self {
        let (r, g, b) = argb::extract_rgb(color);
        Self::from_channels(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    /// Build the achromatic variant from a plain gray level in `[0, 1]`,
    /// applying the legacy packed encoding.
    pub fn achromatic_from_level(value: f64) -> Self {
        if value <= 0.5 {
            Hsv::Achromatic {
                saturation: 1.0,
                value: 510.0 * value / 360.0,
            }
        } else {
            Hsv::Achromatic {
                saturation: 720.0 * (1.0 - value) / 360.0,
                value: 1.0,
            }
        }
    }

    /// Build an [`Hsv`] from a raw legacy triple, honoring the -1 hue
    /// sentinel.
    pub fn from_parts(hue: f64, saturation: f64, value: f64) -> Self {
        if hue == HUE_SENTINEL || hue.is_nan() {
            Hsv::Achromatic { saturation, value }
        } else {
            Hsv::Chromatic { hue, saturation, value }
        }
    }

    /// Get the hue in degrees, or the legacy -1 sentinel for the
    /// achromatic variant.
    pub fn hue(&self) -> f64 {
        match self {
            Hsv::Chromatic { hue, .. } => *hue,
            Hsv::Achromatic { .. } => HUE_SENTINEL,
        }
    }

    /// Get the saturation slot.
    pub fn saturation(&self) -> f64 {
        match self {
            Hsv::Chromatic { saturation, .. } | Hsv::Achromatic { saturation, .. } => *saturation,
        }
    }

    /// Get the value slot.
    pub fn value(&self) -> f64 {
        match self {
            Hsv::Chromatic { value, .. } | Hsv::Achromatic { value, .. } => *value,
        }
    }

    /// Convert to a fully opaque packed ARGB pixel.
    ///
    /// Chromatic inputs go through the standard chroma/sector
    /// decomposition; hue at or above 360 is normalized by a single
    /// subtraction, matching the legacy conversion. Achromatic inputs
    /// recover a gray level by reapplying the legacy piecewise scaling to
    /// the value slot (module docs). Component bytes round half away from
    /// zero. No inputs are errors; everything is clamped.
    pub fn to_color(&self) -> u32 {
        match *self {
            Hsv::Achromatic { value, .. } => {
                let gray = unit_to_byte(achromatic_gray(value.clamp(0.0, 1.0)));
                argb::compose(gray, gray, gray)
            }
            Hsv::Chromatic { hue, saturation, value } => {
                let mut hue = hue;
                if hue >= 360.0 {
                    hue -= 360.0;
                }
                let saturation = saturation.clamp(0.0, 1.0);
                let value = value.clamp(0.0, 1.0);

                let chroma = value * saturation;
                let sector = ((hue / 60.0).floor() as i64).rem_euclid(6);
                let f = hue / 60.0 - (hue / 60.0).floor();
                let lo = value - chroma;
                let rising = lo + chroma * f;
                let falling = lo + chroma * (1.0 - f);

                let (r, g, b) = match sector {
                    0 => (value, rising, lo),
                    1 => (falling, value, lo),
                    2 => (lo, value, rising),
                    3 => (lo, falling, value),
                    4 => (rising, lo, value),
                    _ => (value, lo, falling),
                };
                argb::compose(unit_to_byte(r), unit_to_byte(g), unit_to_byte(b))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_sectors() {
        let red = Hsv::Chromatic { hue: 0.0, saturation: 1.0, value: 1.0 };
        assert_eq!(red.to_color(), 0xFFFF_0000);

        let yellow = Hsv::Chromatic { hue: 60.0, saturation: 1.0, value: 1.0 };
        assert_eq!(yellow.to_color(), 0xFFFF_FF00);

        let green = Hsv::Chromatic { hue: 120.0, saturation: 1.0, value: 1.0 };
        assert_eq!(green.to_color(), 0xFF00_FF00);

        let cyan = Hsv::Chromatic { hue: 180.0, saturation: 1.0, value: 1.0 };
        assert_eq!(cyan.to_color(), 0xFF00_FFFF);

        let blue = Hsv::Chromatic { hue: 240.0, saturation: 1.0, value: 1.0 };
        assert_eq!(blue.to_color(), 0xFF00_00FF);

        let magenta = Hsv::Chromatic { hue: 300.0, saturation: 1.0, value: 1.0 };
        assert_eq!(magenta.to_color(), 0xFFFF_00FF);
    }

    #[test]
    fn test_from_channels_pure_red() {
        let hsv = Hsv::from_channels(1.0, 0.0, 0.0);
        match hsv {
            Hsv::Chromatic { hue, saturation, value } => {
                assert!(hue.abs() < 1e-9);
                assert!((saturation - 1.0).abs() < 1e-9);
                assert!((value - 1.0).abs() < 1e-9);
            }
            _ => panic!("pure red must be chromatic"),
        }
    }

    #[test]
    fn test_gray_is_achromatic() {
        let hsv = Hsv::from_channels(0.5, 0.5, 0.5);
        assert!(matches!(hsv, Hsv::Achromatic { .. }));
        assert_eq!(hsv.hue(), HUE_SENTINEL);
    }

    #[test]
    fn test_achromatic_encoding_branches() {
        // Below the midpoint: saturation pinned to 1, value scaled by 510/360
        let lo = Hsv::achromatic_from_level(0.25);
        assert!((lo.saturation() - 1.0).abs() < 1e-9);
        assert!((lo.value() - 510.0 * 0.25 / 360.0).abs() < 1e-9);

        // Above the midpoint: value pinned to 1, saturation scaled by 720/360
        let hi = Hsv::achromatic_from_level(0.75);
        assert!((hi.value() - 1.0).abs() < 1e-9);
        assert!((hi.saturation() - 720.0 * 0.25 / 360.0).abs() < 1e-9);
    }

    #[test]
    fn test_achromatic_full_brightness_is_black() {
        // The legacy decode applied to value = 1 collapses to gray 0. UI
        // code depends on this exact outcome at the wheel's dead center.
        let hsv = Hsv::Achromatic { saturation: 0.0, value: 1.0 };
        assert_eq!(hsv.to_color(), 0xFF00_0000);
    }

    #[test]
    fn test_sentinel_boundary() {
        let hsv = Hsv::from_parts(HUE_SENTINEL, 0.3, 0.4);
        assert!(matches!(hsv, Hsv::Achromatic { .. }));
        let hsv = Hsv::from_parts(90.0, 0.3, 0.4);
        assert!(matches!(hsv, Hsv::Chromatic { .. }));
    }

    #[test]
    fn test_hue_wrap() {
        for hue in [0.0, 45.0, 123.456, 240.0, 359.9] {
            let a = Hsv::Chromatic { hue, saturation: 0.8, value: 0.9 }.to_color();
            let b = Hsv::Chromatic { hue: hue + 360.0, saturation: 0.8, value: 0.9 }.to_color();
            assert_eq!(a, b, "hue {hue} vs {}", hue + 360.0);
        }
    }

    #[test]
    fn test_roundtrip_chromatic() {
        let colors = [
            (255u8, 0u8, 0u8),
            (0, 255, 0),
            (0, 0, 255),
            (255, 255, 0),
            (0, 255, 255),
            (128, 64, 32),
            (17, 200, 113),
            (254, 1, 77),
        ];
        for (r, g, b) in colors {
            let hsv = Hsv::from_channels(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0);
            let (rr, rg, rb) = argb::extract_rgb(hsv.to_color());
            assert!(
                (rr as i32 - r as i32).abs() <= 1
                    && (rg as i32 - g as i32).abs() <= 1
                    && (rb as i32 - b as i32).abs() <= 1,
                "roundtrip failed for ({r},{g},{b}): got ({rr},{rg},{rb})"
            );
        }
    }

    #[test]
    fn test_black_zero_saturation() {
        // value == 0 forces chroma 0, so black is achromatic
        let hsv = Hsv::from_channels(0.0, 0.0, 0.0);
        assert!(matches!(hsv, Hsv::Achromatic { .. }));
        // gray = 510 * 0 / 360 = 0 -> opaque black
        assert_eq!(hsv.to_color(), 0xFF00_0000);
    }
}
