//! On-image marker placement.
//!
//! The clamp here only keeps the marker glyph inside the image. It works on a
//! copy of the projected position and never feeds back into point data.

use cie_core::Real;

use crate::calibration::PixelPosition;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerLayout {
    pub image_width_px: Real,
    pub image_height_px: Real,
    pub marker_half_size_px: Real,
}

impl Default for MarkerLayout {
    fn default() -> Self {
        Self {
            image_width_px: 600.0,
            image_height_px: 600.0,
            marker_half_size_px: 12.0,
        }
    }
}

impl MarkerLayout {
    /// Clamp a projected position into `[half, dimension - half]` on each axis.
    pub fn place(&self, pos: PixelPosition) -> PixelPosition {
        let half = self.marker_half_size_px;
        PixelPosition::new(
            clamp_axis(pos.x, half, self.image_width_px - half),
            clamp_axis(pos.y, half, self.image_height_px - half),
        )
    }
}

// `f64::clamp` panics when lo > hi (image smaller than the marker); the
// lower bound wins instead.
fn clamp_axis(v: Real, lo: Real, hi: Real) -> Real {
    v.min(hi).max(lo)
}

/// Coordinates are displayed with four decimals, halves rounded away from zero.
pub fn format_coordinate(v: Real) -> String {
    if v == 0.0 {
        // Also covers -0.0, which has no sign on screen.
        return "0.0000".to_string();
    }
    // A double lies exactly halfway between two 4-decimal values only when it
    // is an odd multiple of 1/32. `{:.4}` rounds those to even.
    let thirty_seconds = v.abs() * 32.0;
    let is_half = thirty_seconds < 1e12
        && thirty_seconds.fract() == 0.0
        && thirty_seconds % 2.0 == 1.0;
    if !is_half {
        return format!("{v:.4}");
    }
    let units = (v.abs() * 10_000.0 + 0.5) as u64;
    let sign = if v < 0.0 { "-" } else { "" };
    format!("{sign}{}.{:04}", units / 10_000, units % 10_000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inside_positions_are_untouched() {
        let layout = MarkerLayout::default();
        let p = PixelPosition::new(300.0, 40.0);
        assert_eq!(layout.place(p), p);
    }

    #[test]
    fn outside_positions_are_pulled_in() {
        let layout = MarkerLayout::default();
        assert_eq!(
            layout.place(PixelPosition::new(-50.0, 900.0)),
            PixelPosition::new(12.0, 588.0)
        );
        assert_eq!(
            layout.place(PixelPosition::new(599.0, 3.0)),
            PixelPosition::new(588.0, 12.0)
        );
    }

    #[test]
    fn tiny_image_does_not_panic() {
        let layout = MarkerLayout {
            image_width_px: 10.0,
            image_height_px: 10.0,
            marker_half_size_px: 12.0,
        };
        assert_eq!(
            layout.place(PixelPosition::new(5.0, 5.0)),
            PixelPosition::new(12.0, 12.0)
        );
    }

    #[test]
    fn four_decimals() {
        assert_eq!(format_coordinate(0.1978), "0.1978");
        assert_eq!(format_coordinate(0.3), "0.3000");
        assert_eq!(format_coordinate(0.123456), "0.1235");
    }

    #[test]
    fn exact_halves_round_away_from_zero() {
        assert_eq!(format_coordinate(0.03125), "0.0313");
        assert_eq!(format_coordinate(0.15625), "0.1563");
        assert_eq!(format_coordinate(0.09375), "0.0938");
        assert_eq!(format_coordinate(-0.03125), "-0.0313");
        assert_eq!(format_coordinate(2.40625), "2.4063");
    }

    #[test]
    fn non_halves_keep_nearest_rounding() {
        assert_eq!(format_coordinate(0.0625), "0.0625");
        assert_eq!(format_coordinate(0.46834), "0.4683");
        assert_eq!(format_coordinate(-0.3127), "-0.3127");
        assert_eq!(format_coordinate(12.5), "12.5000");
    }

    #[test]
    fn negative_zero_has_no_sign() {
        assert_eq!(format_coordinate(-0.0), "0.0000");
    }
}
