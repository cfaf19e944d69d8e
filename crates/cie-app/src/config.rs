//! Session configuration, optionally loaded from YAML.

use std::path::Path;

use cie_diagram::DiagramKind;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Diagram shown when a session starts.
    pub default_diagram: DiagramKind,
    pub marker_half_size_px: f64,
    /// File name offered for exports when none is given.
    pub export_file_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_diagram: DiagramKind::default(),
            marker_half_size_px: 12.0,
            export_file_name: "cie_points.json".to_string(),
        }
    }
}

impl SessionConfig {
    fn check(&self) -> AppResult<()> {
        if !self.marker_half_size_px.is_finite() || self.marker_half_size_px < 0.0 {
            return Err(AppError::Config(format!(
                "marker_half_size_px must be non-negative and finite (got {})",
                self.marker_half_size_px
            )));
        }
        if self.export_file_name.trim().is_empty() {
            return Err(AppError::Config(
                "export_file_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load a session config from a YAML file. Missing keys take their defaults.
pub fn load_config(path: &Path) -> AppResult<SessionConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_config(&content)
}

pub fn parse_config(content: &str) -> AppResult<SessionConfig> {
    // An empty file is a valid "all defaults" config.
    if content.trim().is_empty() {
        return Ok(SessionConfig::default());
    }
    let config: SessionConfig = serde_yaml::from_str(content)
        .map_err(|e| AppError::Config(format!("Failed to parse config YAML: {}", e)))?;
    config.check()?;
    Ok(config)
}
