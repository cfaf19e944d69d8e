//! Point records.

use cie_core::{PointId, Real};

/// A named chromaticity coordinate held by a [`crate::PointStore`].
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub id: PointId,
    pub name: String,
    pub horiz: Real,
    pub vert: Real,
}

/// A point as it appears in an exchange file: no id.
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalPoint {
    pub name: String,
    pub horiz: Real,
    pub vert: Real,
}

impl ExternalPoint {
    pub fn new(name: impl Into<String>, horiz: Real, vert: Real) -> Self {
        Self {
            name: name.into(),
            horiz,
            vert,
        }
    }
}

impl From<&Point> for ExternalPoint {
    fn from(point: &Point) -> Self {
        Self {
            name: point.name.clone(),
            horiz: point.horiz,
            vert: point.vert,
        }
    }
}
