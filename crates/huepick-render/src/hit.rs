//! Hit-testing generated pickers

use huepick_core::{Point, point_in_polygon, polar};
use huepick_color::Hsv;

use crate::mode::PickerMode;
use crate::picker::Picker;
use crate::wrap_degrees;

/// Result of a hit-test query.
///
/// `color` is `None` for positions that map to no picker content. The
/// coordinates echo the query position, adjusted when clamping moved it
/// into bounds (or back onto the wheel edge).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitResult {
    /// Color under the query position, if any
    pub color: Option<u32>,
    /// Effective x coordinate of the hit
    pub x: f64,
    /// Effective y coordinate of the hit
    pub y: f64,
}

impl HitResult {
    fn miss(x: f64, y: f64) -> Self {
        Self { color: None, x, y }
    }

    fn hit(color: u32, x: f64, y: f64) -> Self {
        Self {
            color: Some(color),
            x,
            y,
        }
    }
}

impl Picker {
    /// Look up the color under a position.
    ///
    /// Out-of-bounds positions miss (echoing the query coordinates
    /// untouched) unless `clamp_to_nearest` is set, which first snaps
    /// the position to the nearest in-bounds coordinate. The smooth
    /// wheel modes answer analytically; every other mode scans the
    /// element list in order and returns the first element whose
    /// polygon contains the position.
    pub fn hit_test(&self, x: f64, y: f64, clamp_to_nearest: bool) -> HitResult {
        let (mut qx, mut qy) = (x, y);
        if !self.bounds().contains(qx, qy) {
            if !clamp_to_nearest {
                return HitResult::miss(x, y);
            }
            let p = self.bounds().clamp_point(qx, qy);
            qx = p.x;
            qy = p.y;
        }
        match self.mode() {
            PickerMode::Wheel | PickerMode::HueWheel => self.hit_wheel(x, y, qx, qy, clamp_to_nearest),
            _ => self.hit_elements(qx, qy),
        }
    }

    fn hit_wheel(&self, x: f64, y: f64, qx: f64, qy: f64, clamp_to_nearest: bool) -> HitResult {
        let r = self.wheel_radius();
        let center = Point::new(r, r);
        let mut pt = polar::to_polar(qx - center.x, qy - center.y);
        let (qx, qy) = if pt.radius > r {
            if !clamp_to_nearest {
                return HitResult::miss(x, y);
            }
            pt.radius = r;
            let fixed = pt.to_screen(center);
            (fixed.x, fixed.y)
        } else {
            (qx, qy)
        };
        let saturation = if self.mode() == PickerMode::HueWheel {
            1.0
        } else {
            let ratio = pt.radius / r;
            if self.invert_saturation() { 1.0 - ratio } else { ratio }
        };
        let hsv = if pt.is_origin() {
            Hsv::Achromatic {
                saturation,
                value: self.value(),
            }
        } else {
            Hsv::Chromatic {
                hue: wrap_degrees(pt.arc + self.hue_offset()),
                saturation,
                value: self.value(),
            }
        };
        HitResult::hit(hsv.to_color(), qx, qy)
    }

    fn hit_elements(&self, qx: f64, qy: f64) -> HitResult {
        for element in self.elements() {
            let matched = if element.polygon.len() == 1 {
                element.polygon[0].x == qx && element.polygon[0].y == qy
            } else {
                point_in_polygon(&element.polygon, qx, qy)
            };
            if matched {
                return HitResult::hit(element.color, qx, qy);
            }
        }
        HitResult::miss(qx, qy)
    }
}
