//! Form-boundary parsing of user-typed point data.
//!
//! The store accepts whatever typed values it is given, so required-field and
//! numeric checks happen here before a point is added.

use cie_core::{Real, ensure_finite};
use cie_diagram::DiagramSpec;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq)]
pub struct PointInput {
    pub name: String,
    pub horiz: Real,
    pub vert: Real,
}

impl PointInput {
    pub fn new(name: impl Into<String>, horiz: Real, vert: Real) -> Self {
        Self {
            name: name.into(),
            horiz,
            vert,
        }
    }

    /// Parse raw text fields, naming the offending axis with the diagram's labels.
    pub fn parse(
        name: &str,
        horiz_text: &str,
        vert_text: &str,
        spec: &DiagramSpec,
    ) -> AppResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Input("Point name is required".to_string()));
        }

        let horiz = parse_coordinate(horiz_text, spec.full_labels.horiz)?;
        let vert = parse_coordinate(vert_text, spec.full_labels.vert)?;

        Ok(Self::new(name, horiz, vert))
    }
}

fn parse_coordinate(text: &str, label: &'static str) -> AppResult<Real> {
    let not_a_number = || AppError::Input(format!("{} must be a number", label));
    let value: Real = text.trim().parse().map_err(|_| not_a_number())?;
    ensure_finite(value, label).map_err(|_| not_a_number())
}
