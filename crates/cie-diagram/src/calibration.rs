//! Affine calibration tying a diagram image to its coordinate system.

use cie_core::Real;

/// Pixel position on the diagram image, measured from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelPosition {
    pub x: Real,
    pub y: Real,
}

impl PixelPosition {
    pub const fn new(x: Real, y: Real) -> Self {
        Self { x, y }
    }
}

/// Axis ranges plus the pixel rectangle they occupy on the image.
///
/// `origin_*_px` is where (`axis_horiz_min`, `axis_vert_min`) sits; the pixel
/// span extends right by `width_px` and up by `height_px`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiagramCalibration {
    pub axis_horiz_min: Real,
    pub axis_horiz_max: Real,
    pub axis_vert_min: Real,
    pub axis_vert_max: Real,
    pub origin_x_px: Real,
    pub origin_y_px: Real,
    pub width_px: Real,
    pub height_px: Real,
}

impl DiagramCalibration {
    pub fn horiz_range(&self) -> Real {
        self.axis_horiz_max - self.axis_horiz_min
    }

    pub fn vert_range(&self) -> Real {
        self.axis_vert_max - self.axis_vert_min
    }

    /// True when an axis range or the pixel span is not positive.
    pub fn is_degenerate(&self) -> bool {
        // Written as negations so NaN ranges also count as degenerate.
        !(self.horiz_range() > 0.0
            && self.vert_range() > 0.0
            && self.width_px > 0.0
            && self.height_px > 0.0)
    }

    /// Pixel center of the calibrated rectangle.
    pub fn center(&self) -> PixelPosition {
        PixelPosition::new(
            self.origin_x_px + self.width_px / 2.0,
            self.origin_y_px - self.height_px / 2.0,
        )
    }
}

/// Map a domain coordinate pair to its pixel position.
///
/// Ratios are not clamped, so points outside the axis window land outside the
/// pixel rectangle. A degenerate calibration maps every point to
/// [`DiagramCalibration::center`].
pub fn project(horiz: Real, vert: Real, calib: &DiagramCalibration) -> PixelPosition {
    if calib.is_degenerate() {
        return calib.center();
    }

    let h_ratio = (horiz - calib.axis_horiz_min) / calib.horiz_range();
    let v_ratio = (vert - calib.axis_vert_min) / calib.vert_range();

    // Pixel rows grow downward, the vertical domain axis grows upward.
    PixelPosition::new(
        calib.origin_x_px + h_ratio * calib.width_px,
        calib.origin_y_px - v_ratio * calib.height_px,
    )
}
