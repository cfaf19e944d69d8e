//! Render-ready projections of session state.

use cie_core::PointId;
use cie_diagram::{DiagramSpec, MarkerLayout, PixelPosition, format_coordinate, project};
use cie_points::Point;

/// Shown in place of the point list when nothing has been marked.
pub const EMPTY_LIST_TEXT: &str = "No points marked yet.";

/// One line of the point list.
#[derive(Debug, Clone, PartialEq)]
pub struct PointRow {
    pub id: PointId,
    pub name: String,
    /// e.g. `u': 0.1978, v': 0.4683`
    pub coordinates: String,
}

impl PointRow {
    pub(crate) fn new(point: &Point, spec: &DiagramSpec) -> Self {
        Self {
            id: point.id,
            name: point.name.clone(),
            coordinates: format!(
                "{}: {}, {}: {}",
                spec.labels.horiz,
                format_coordinate(point.horiz),
                spec.labels.vert,
                format_coordinate(point.vert)
            ),
        }
    }
}

/// A point placed on the diagram image.
#[derive(Debug, Clone, PartialEq)]
pub struct PlottedPoint {
    pub id: PointId,
    pub name: String,
    /// Unclamped projection of the point's coordinates.
    pub pixel: PixelPosition,
    /// Where the marker glyph is drawn.
    pub marker: PixelPosition,
    /// Accessible description of the marker.
    pub label: String,
}

impl PlottedPoint {
    pub(crate) fn new(point: &Point, spec: &DiagramSpec, layout: &MarkerLayout) -> Self {
        let pixel = project(point.horiz, point.vert, &spec.calibration);
        Self {
            id: point.id,
            name: point.name.clone(),
            pixel,
            marker: layout.place(pixel),
            label: format!(
                "Point: {} at ({}: {}, {}: {})",
                point.name,
                spec.labels.horiz,
                format_coordinate(point.horiz),
                spec.labels.vert,
                format_coordinate(point.vert)
            ),
        }
    }
}
