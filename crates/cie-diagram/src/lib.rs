//! cie-diagram: chromaticity diagram calibrations and the domain-to-pixel mapping.

pub mod calibration;
pub mod catalog;
pub mod error;
pub mod marker;

pub use calibration::{DiagramCalibration, PixelPosition, project};
pub use catalog::{AxisFields, AxisLabels, CIE1931_XY, CIE1976_UV, DiagramKind, DiagramSpec};
pub use error::DiagramError;
pub use marker::{MarkerLayout, format_coordinate};
