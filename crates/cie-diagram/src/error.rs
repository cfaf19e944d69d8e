//! Error types for diagram selection.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiagramError {
    #[error("Unknown diagram '{0}' (expected 1976uv or 1931xy)")]
    UnknownDiagram(String),
}
