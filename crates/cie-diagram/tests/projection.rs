use cie_diagram::{DiagramCalibration, DiagramKind, MarkerLayout, PixelPosition, project};
use proptest::prelude::*;

/// Pixel positions agree to well under a thousandth of a pixel.
fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn cie1976_corners_hit_pixel_rectangle() {
    let calib = DiagramKind::Cie1976Uv.calibration();
    assert_eq!(project(0.0, 0.0, calib), PixelPosition::new(38.0, 566.0));
    let top_right = project(0.6, 0.6, calib);
    assert!(close(top_right.x, 565.0));
    assert!(close(top_right.y, 21.0));
}

#[test]
fn cie1931_corners_hit_pixel_rectangle() {
    let calib = DiagramKind::Cie1931Xy.calibration();
    assert_eq!(project(0.0, 0.0, calib), PixelPosition::new(72.0, 542.0));
    let top_right = project(0.8, 0.9, calib);
    assert!(close(top_right.x, 570.0));
    assert!(close(top_right.y, 17.0));
}

#[test]
fn d65_on_1976_diagram() {
    let calib = DiagramKind::Cie1976Uv.calibration();
    let p = project(0.1978, 0.4683, calib);
    assert!(close(p.x, 38.0 + 0.1978 / 0.6 * 527.0));
    assert!(close(p.y, 566.0 - 0.4683 / 0.6 * 545.0));
}

#[test]
fn marker_clamp_leaves_projection_alone() {
    let calib = DiagramKind::Cie1931Xy.calibration();
    let raw = project(2.0, -1.0, calib);
    let placed = MarkerLayout::default().place(raw);
    assert!(raw.x > 600.0 && raw.y > 600.0);
    assert_eq!(placed, PixelPosition::new(588.0, 588.0));
}

fn calibration() -> impl Strategy<Value = DiagramCalibration> {
    (
        -1.0_f64..1.0,
        1e-3_f64..2.0,
        -1.0_f64..1.0,
        1e-3_f64..2.0,
        0.0_f64..1000.0,
        0.0_f64..1000.0,
        1.0_f64..1000.0,
        1.0_f64..1000.0,
    )
        .prop_map(|(h_min, h_span, v_min, v_span, ox, oy, w, h)| DiagramCalibration {
            axis_horiz_min: h_min,
            axis_horiz_max: h_min + h_span,
            axis_vert_min: v_min,
            axis_vert_max: v_min + v_span,
            origin_x_px: ox,
            origin_y_px: oy,
            width_px: w,
            height_px: h,
        })
}

proptest! {
    #[test]
    fn axis_minimum_maps_to_origin(calib in calibration()) {
        let p = project(calib.axis_horiz_min, calib.axis_vert_min, &calib);
        prop_assert_eq!(p, PixelPosition::new(calib.origin_x_px, calib.origin_y_px));
    }

    #[test]
    fn axis_maximum_maps_to_far_corner(calib in calibration()) {
        let p = project(calib.axis_horiz_max, calib.axis_vert_max, &calib);
        prop_assert!(close(p.x, calib.origin_x_px + calib.width_px));
        prop_assert!(close(p.y, calib.origin_y_px - calib.height_px));
    }

    #[test]
    fn collapsed_horizontal_axis_falls_back(calib in calibration(), u in -5.0_f64..5.0, v in -5.0_f64..5.0) {
        let degenerate = DiagramCalibration { axis_horiz_max: calib.axis_horiz_min, ..calib };
        let p = project(u, v, &degenerate);
        prop_assert_eq!(p, degenerate.center());
    }

    #[test]
    fn placed_marker_stays_on_image(x in -2000.0_f64..2000.0, y in -2000.0_f64..2000.0) {
        let layout = MarkerLayout::default();
        let p = layout.place(PixelPosition::new(x, y));
        prop_assert!(p.x >= 12.0 && p.x <= 588.0);
        prop_assert!(p.y >= 12.0 && p.y <= 588.0);
    }
}
