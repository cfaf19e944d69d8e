//! Error types for the cie-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates
/// and provides a unified error interface for every front end.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid points payload: {0}")]
    Points(#[from] cie_points::ValidationError),

    #[error("Invalid input: {0}")]
    Input(String),

    #[error("There are no points to export")]
    NothingToExport,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Core(#[from] cie_core::CieError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for cie-app operations.
pub type AppResult<T> = Result<T, AppError>;
