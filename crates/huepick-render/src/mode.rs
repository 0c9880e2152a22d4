//! Picker layout modes

/// The geometric layout of a picker surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PickerMode {
    /// Smooth disc: hue by angle, saturation by radius
    #[default]
    Wheel,
    /// Hue-only ring: hollow center, saturation pinned to 1
    HueWheel,
    /// Honeycomb of discrete hexagonal cells over the wheel layout
    HexagonWheel,
    /// Hue along x, saturation along y
    LinearHorizontal,
    /// Hue along y, saturation along x
    LinearVertical,
    /// Hue along x, saturation pinned to 1
    HueBarHorizontal,
    /// Hue along y, saturation pinned to 1
    HueBarVertical,
    /// Direct channel interpolation along x (bypasses HSV)
    HueBoxHorizontal,
    /// Direct channel interpolation along y (bypasses HSV)
    HueBoxVertical,
}

impl PickerMode {
    /// Modes laid out around a center point.
    pub fn is_radial(self) -> bool {
        matches!(
            self,
            PickerMode::Wheel | PickerMode::HueWheel | PickerMode::HexagonWheel
        )
    }

    /// Modes generated by the linear per-pixel gradient loop.
    pub fn is_linear(self) -> bool {
        matches!(
            self,
            PickerMode::LinearHorizontal
                | PickerMode::LinearVertical
                | PickerMode::HueBarHorizontal
                | PickerMode::HueBarVertical
        )
    }

    /// Modes that pin saturation to 1 along the whole surface.
    pub fn is_hue_bar(self) -> bool {
        matches!(
            self,
            PickerMode::HueBarHorizontal | PickerMode::HueBarVertical
        )
    }

    /// Modes that bypass the HSV pipeline entirely.
    pub fn is_hue_box(self) -> bool {
        matches!(
            self,
            PickerMode::HueBoxHorizontal | PickerMode::HueBoxVertical
        )
    }

    /// Modes whose gradient axis runs top to bottom.
    pub fn is_vertical(self) -> bool {
        matches!(
            self,
            PickerMode::LinearVertical | PickerMode::HueBarVertical | PickerMode::HueBoxVertical
        )
    }
}
