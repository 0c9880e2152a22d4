//! Picker construction and the generated instance

use huepick_core::{Rect, Surface};

use crate::element::PickerElement;
use crate::error::{RenderError, RenderResult};
use crate::mode::PickerMode;
use crate::{hexagon, huebox, linear, wheel};

/// Construction parameters for a picker.
///
/// Only the fields relevant to the chosen mode are consulted; the
/// convenience constructors on [`Picker`] fill in the right subset.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerOptions {
    /// Geometric layout
    pub mode: PickerMode,
    /// Surface width in pixels (linear and hue-box modes)
    pub width: u32,
    /// Surface height in pixels (linear and hue-box modes)
    pub height: u32,
    /// Wheel radius in pixels (radial modes)
    pub radius: u32,
    /// Ring thickness in pixels (hue wheel); pixels closer to the center
    /// than `radius - ring_thickness` are transparent
    pub ring_thickness: f64,
    /// Hexagon cell size (hexagon wheel)
    pub element_size: f64,
    /// Fixed HSV value component in [0, 1]
    pub value: f64,
    /// Rotation of the hue axis in degrees
    pub hue_offset: f64,
    /// Reverse the saturation mapping (1 - s)
    pub invert_saturation: bool,
    /// Perturb even pixels on even rows with the orange pseudo-channel
    /// (hue-box modes)
    pub tetrachromatic: bool,
    /// Must be set when requesting a hue-box mode; guards against callers
    /// accidentally selecting the non-HSV layout
    pub color_box: bool,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            mode: PickerMode::Wheel,
            width: 0,
            height: 0,
            radius: 0,
            ring_thickness: 0.0,
            element_size: 0.0,
            value: 1.0,
            hue_offset: 0.0,
            invert_saturation: false,
            tetrachromatic: false,
            color_box: false,
        }
    }
}

/// Output of a mode generator, assembled into a [`Picker`].
pub(crate) struct GeneratedParts {
    pub bounds: Rect,
    pub wheel_radius: f64,
    pub elements: Vec<PickerElement>,
    pub pixel_buffer: Option<Vec<u8>>,
    pub framebuffer: Option<Surface>,
}

/// A fully generated picker.
///
/// Constructed in one pass from a [`PickerOptions`] and read-only
/// thereafter. Per-pixel modes carry a packed [`Self::pixel_buffer`];
/// the hexagon mode instead carries a rasterized [`Self::framebuffer`].
#[derive(Debug, Clone)]
pub struct Picker {
    mode: PickerMode,
    bounds: Rect,
    value: f64,
    hue_offset: f64,
    invert_saturation: bool,
    wheel_radius: f64,
    elements: Vec<PickerElement>,
    pixel_buffer: Option<Vec<u8>>,
    framebuffer: Option<Surface>,
}

impl Picker {
    /// Generate a picker from explicit options.
    ///
    /// # Errors
    ///
    /// - [`RenderError::InvalidConfiguration`] when a hue-box mode is
    ///   requested without [`PickerOptions::color_box`] set
    /// - [`RenderError::InvalidDimension`] for zero extents (radius,
    ///   width/height, element size)
    pub fn generate(options: PickerOptions) -> RenderResult<Self> {
        let mut options = options;
        options.value = options.value.clamp(0.0, 1.0);

        if options.mode.is_hue_box() && !options.color_box {
            return Err(RenderError::InvalidConfiguration(
                "hue-box mode requires the color_box flag".to_string(),
            ));
        }
        if options.mode.is_radial() {
            if options.radius == 0 {
                return Err(RenderError::InvalidDimension(
                    "wheel radius must be > 0".to_string(),
                ));
            }
            if options.mode == PickerMode::HexagonWheel && options.element_size <= 0.0 {
                return Err(RenderError::InvalidDimension(
                    "hexagon element size must be > 0".to_string(),
                ));
            }
        } else if options.width == 0 || options.height == 0 {
            return Err(RenderError::InvalidDimension(format!(
                "picker extents must be > 0: {}x{}",
                options.width, options.height
            )));
        }

        let parts = match options.mode {
            PickerMode::Wheel | PickerMode::HueWheel => wheel::generate(&options),
            PickerMode::HexagonWheel => hexagon::generate(&options)?,
            m if m.is_hue_box() => huebox::generate(&options),
            _ => linear::generate(&options),
        };

        Ok(Self {
            mode: options.mode,
            bounds: parts.bounds,
            value: options.value,
            hue_offset: options.hue_offset,
            invert_saturation: options.invert_saturation,
            wheel_radius: parts.wheel_radius,
            elements: parts.elements,
            pixel_buffer: parts.pixel_buffer,
            framebuffer: parts.framebuffer,
        })
    }

    /// Generate a smooth color wheel.
    pub fn wheel(radius: u32, value: f64, hue_offset: f64, invert: bool) -> RenderResult<Self> {
        Self::generate(PickerOptions {
            mode: PickerMode::Wheel,
            radius,
            value,
            hue_offset,
            invert_saturation: invert,
            ..Default::default()
        })
    }

    /// Generate a hue-only ring of the given thickness.
    pub fn hue_wheel(
        radius: u32,
        ring_thickness: f64,
        value: f64,
        hue_offset: f64,
    ) -> RenderResult<Self> {
        Self::generate(PickerOptions {
            mode: PickerMode::HueWheel,
            radius,
            ring_thickness,
            value,
            hue_offset,
            ..Default::default()
        })
    }

    /// Generate a linear or hue-bar picker.
    ///
    /// # Errors
    ///
    /// [`RenderError::InvalidConfiguration`] if `mode` is not one of the
    /// four linear layouts.
    pub fn linear(
        mode: PickerMode,
        width: u32,
        height: u32,
        value: f64,
        hue_offset: f64,
        invert: bool,
    ) -> RenderResult<Self> {
        if !mode.is_linear() {
            return Err(RenderError::InvalidConfiguration(format!(
                "{mode:?} is not a linear layout"
            )));
        }
        Self::generate(PickerOptions {
            mode,
            width,
            height,
            value,
            hue_offset,
            invert_saturation: invert,
            ..Default::default()
        })
    }

    /// Generate a hue-box picker (direct channel interpolation).
    pub fn hue_box(
        vertical: bool,
        width: u32,
        height: u32,
        invert: bool,
        tetrachromatic: bool,
    ) -> RenderResult<Self> {
        Self::generate(PickerOptions {
            mode: if vertical {
                PickerMode::HueBoxVertical
            } else {
                PickerMode::HueBoxHorizontal
            },
            width,
            height,
            invert_saturation: invert,
            tetrachromatic,
            color_box: true,
            ..Default::default()
        })
    }

    /// Generate a hexagonal honeycomb wheel.
    pub fn hexagon(
        radius: u32,
        element_size: f64,
        value: f64,
        rotation: f64,
        invert: bool,
    ) -> RenderResult<Self> {
        Self::generate(PickerOptions {
            mode: PickerMode::HexagonWheel,
            radius,
            element_size,
            value,
            hue_offset: rotation,
            invert_saturation: invert,
            ..Default::default()
        })
    }

    /// Get the layout mode.
    #[inline]
    pub fn mode(&self) -> PickerMode {
        self.mode
    }

    /// Get the overall bounds, anchored at (0, 0).
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Get the fixed HSV value component.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Get the hue-axis rotation in degrees.
    #[inline]
    pub fn hue_offset(&self) -> f64 {
        self.hue_offset
    }

    /// Whether the saturation mapping is reversed.
    #[inline]
    pub fn invert_saturation(&self) -> bool {
        self.invert_saturation
    }

    /// Get the wheel radius (0 for non-radial modes).
    #[inline]
    pub fn wheel_radius(&self) -> f64 {
        self.wheel_radius
    }

    /// Get the element list.
    ///
    /// Linear, hue-box and hexagon elements are sorted ascending by
    /// `(center.x, center.y)`; wheel elements stay in row-major scan
    /// order.
    #[inline]
    pub fn elements(&self) -> &[PickerElement] {
        &self.elements
    }

    /// Get the packed pixel buffer (4 bytes per pixel, row-major, B,G,R,A
    /// byte order). `None` for the hexagon mode.
    #[inline]
    pub fn pixel_buffer(&self) -> Option<&[u8]> {
        self.pixel_buffer.as_deref()
    }

    /// Get the rasterized framebuffer. `Some` only for the hexagon mode.
    #[inline]
    pub fn framebuffer(&self) -> Option<&Surface> {
        self.framebuffer.as_ref()
    }
}
