//! Session state owner.
//!
//! # Invariants
//! - The session is the only writer of its point store.
//! - Import replaces the whole collection or nothing.
//! - Switching diagrams keeps the stored numbers; only their interpretation
//!   (labels, calibration, exchange keys) changes.

use std::path::Path;

use cie_core::PointId;
use cie_diagram::{DiagramKind, DiagramSpec, MarkerLayout};
use cie_points::{AxisFields, PointStore, to_json};
use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::error::{AppError, AppResult};
use crate::input::PointInput;
use crate::notice::Notice;
use crate::view::{PlottedPoint, PointRow};

#[derive(Debug, Clone)]
pub struct Session {
    store: PointStore,
    diagram: DiagramKind,
    config: SessionConfig,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            store: PointStore::new(),
            diagram: config.default_diagram,
            config,
        }
    }

    pub fn store(&self) -> &PointStore {
        &self.store
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn diagram(&self) -> DiagramKind {
        self.diagram
    }

    pub fn spec(&self) -> &'static DiagramSpec {
        self.diagram.spec()
    }

    /// Exchange keys of the active diagram.
    pub fn fields(&self) -> AxisFields {
        self.spec().json_fields
    }

    pub fn marker_layout(&self) -> MarkerLayout {
        self.spec().marker_layout(self.config.marker_half_size_px)
    }

    pub fn set_diagram(&mut self, kind: DiagramKind) {
        debug!(from = %self.diagram, to = %kind, "diagram selected");
        self.diagram = kind;
    }

    /// Switch to the other diagram and return it.
    pub fn toggle_diagram(&mut self) -> DiagramKind {
        self.set_diagram(self.diagram.toggled());
        self.diagram
    }

    pub fn add_point(&mut self, input: PointInput) -> Notice {
        let point = self.store.add(input.name, input.horiz, input.vert);
        Notice::info("Point added", format!("Added point \"{}\".", point.name))
    }

    /// Returns a notice only when a point was actually removed.
    pub fn delete_point(&mut self, id: &PointId) -> Option<Notice> {
        let point = self.store.remove(id)?;
        Some(Notice::destructive(
            "Point deleted",
            format!("Point \"{}\" has been deleted.", point.name),
        ))
    }

    pub fn clear_points(&mut self) -> Notice {
        self.store.clear();
        Notice::info("Points cleared", "All marked points have been cleared.")
    }

    /// Serialize the collection under the active diagram's keys.
    pub fn export_json(&self) -> AppResult<String> {
        if self.store.is_empty() {
            return Err(AppError::NothingToExport);
        }
        Ok(to_json(&self.store.export_all(), self.fields())?)
    }

    pub fn export_to_file(&self, path: &Path) -> AppResult<Notice> {
        let content = self.export_json()?;
        std::fs::write(path, content).map_err(|e| AppError::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
        info!(path = %path.display(), count = self.store.len(), "points exported");
        Ok(Notice::info(
            "Export successful",
            format!("Point data exported to {}.", path.display()),
        ))
    }

    /// Replace the collection with the records in `raw`.
    pub fn import_json(&mut self, raw: &str) -> AppResult<Notice> {
        let fields = self.fields();
        let count = self.store.import_replace(raw, fields)?.len();
        Ok(Notice::info(
            "Import successful",
            format!("Imported {} points.", count),
        ))
    }

    pub fn import_from_file(&mut self, path: &Path) -> AppResult<Notice> {
        let content = std::fs::read_to_string(path).map_err(|e| AppError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        // Rejections are logged once, by the store.
        let notice = self.import_json(&content)?;
        info!(path = %path.display(), count = self.store.len(), "points imported");
        Ok(notice)
    }

    pub fn list_rows(&self) -> Vec<PointRow> {
        let spec = self.spec();
        self.store.iter().map(|p| PointRow::new(p, spec)).collect()
    }

    pub fn plot(&self) -> Vec<PlottedPoint> {
        let spec = self.spec();
        let layout = self.marker_layout();
        self.store
            .iter()
            .map(|p| PlottedPoint::new(p, spec, &layout))
            .collect()
    }
}
