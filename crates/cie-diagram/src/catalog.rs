//! Built-in diagram catalog.
//!
//! Two diagrams ship with the tool: the CIE 1976 u'v' diagram and the CIE
//! 1931 xy diagram. Each pairs a fixed calibration for its background image
//! with the labels the front end shows next to it.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use cie_core::Real;

use crate::calibration::DiagramCalibration;
use crate::error::DiagramError;
use crate::marker::MarkerLayout;

/// A pair of strings, one per axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisLabels {
    pub horiz: &'static str,
    pub vert: &'static str,
}

/// JSON keys for the horizontal and vertical coordinates of one diagram.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisFields {
    pub horiz: &'static str,
    pub vert: &'static str,
}

impl AxisFields {
    pub const UV_PRIME: AxisFields = AxisFields {
        horiz: "uPrime",
        vert: "vPrime",
    };
    pub const XY: AxisFields = AxisFields {
        horiz: "x",
        vert: "y",
    };
}

/// Calibration plus presentation metadata for one diagram image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiagramSpec {
    pub kind: DiagramKind,
    pub image_path: &'static str,
    pub image_width_px: u32,
    pub image_height_px: u32,
    pub calibration: DiagramCalibration,
    /// Short labels (`u'`, `x`) used in lists and tooltips.
    pub labels: AxisLabels,
    /// Long labels used on input forms.
    pub full_labels: AxisLabels,
    pub placeholders: AxisLabels,
    /// Keys used for the two axes in exported JSON.
    pub json_fields: AxisFields,
    pub title_suffix: &'static str,
}

impl DiagramSpec {
    /// Marker layout for this diagram's image.
    pub fn marker_layout(&self, marker_half_size_px: Real) -> MarkerLayout {
        MarkerLayout {
            image_width_px: Real::from(self.image_width_px),
            image_height_px: Real::from(self.image_height_px),
            marker_half_size_px,
        }
    }
}

pub const CIE1976_UV: DiagramSpec = DiagramSpec {
    kind: DiagramKind::Cie1976Uv,
    image_path: "/mceclip5.png",
    image_width_px: 600,
    image_height_px: 600,
    calibration: DiagramCalibration {
        axis_horiz_min: 0.0,
        axis_horiz_max: 0.6,
        axis_vert_min: 0.0,
        axis_vert_max: 0.6,
        origin_x_px: 38.0,
        origin_y_px: 566.0,
        width_px: 527.0,
        height_px: 545.0,
    },
    labels: AxisLabels {
        horiz: "u'",
        vert: "v'",
    },
    full_labels: AxisLabels {
        horiz: "u' coordinate",
        vert: "v' coordinate",
    },
    placeholders: AxisLabels {
        horiz: "0.1978",
        vert: "0.4683",
    },
    json_fields: AxisFields::UV_PRIME,
    title_suffix: "u'v' (1976)",
};

pub const CIE1931_XY: DiagramSpec = DiagramSpec {
    kind: DiagramKind::Cie1931Xy,
    image_path: "/cie1931_diagram.png",
    image_width_px: 600,
    image_height_px: 600,
    calibration: DiagramCalibration {
        axis_horiz_min: 0.0,
        axis_horiz_max: 0.8,
        axis_vert_min: 0.0,
        axis_vert_max: 0.9,
        origin_x_px: 72.0,
        origin_y_px: 542.0,
        width_px: 498.0,
        height_px: 525.0,
    },
    labels: AxisLabels {
        horiz: "x",
        vert: "y",
    },
    full_labels: AxisLabels {
        horiz: "x coordinate",
        vert: "y coordinate",
    },
    placeholders: AxisLabels {
        horiz: "0.3127",
        vert: "0.3290",
    },
    json_fields: AxisFields::XY,
    title_suffix: "xy (1931)",
};

/// Which built-in diagram is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagramKind {
    #[serde(rename = "1976uv", alias = "1976")]
    Cie1976Uv,
    #[default]
    #[serde(rename = "1931xy", alias = "1931")]
    Cie1931Xy,
}

impl DiagramKind {
    pub const ALL: [DiagramKind; 2] = [DiagramKind::Cie1976Uv, DiagramKind::Cie1931Xy];

    pub fn spec(self) -> &'static DiagramSpec {
        match self {
            DiagramKind::Cie1976Uv => &CIE1976_UV,
            DiagramKind::Cie1931Xy => &CIE1931_XY,
        }
    }

    pub fn calibration(self) -> &'static DiagramCalibration {
        &self.spec().calibration
    }

    /// The other diagram.
    pub fn toggled(self) -> Self {
        match self {
            DiagramKind::Cie1976Uv => DiagramKind::Cie1931Xy,
            DiagramKind::Cie1931Xy => DiagramKind::Cie1976Uv,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DiagramKind::Cie1976Uv => "1976uv",
            DiagramKind::Cie1931Xy => "1931xy",
        }
    }
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiagramKind {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1976uv" | "1976" | "uv" => Ok(DiagramKind::Cie1976Uv),
            "1931xy" | "1931" | "xy" => Ok(DiagramKind::Cie1931Xy),
            other => Err(DiagramError::UnknownDiagram(other.to_string())),
        }
    }
}
