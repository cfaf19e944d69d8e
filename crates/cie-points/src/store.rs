//! In-memory point collection.
//!
//! # Invariants
//! - Insertion order is the only ordering.
//! - Ids are pairwise unique; every id is generated here, never taken from input.
//! - A failed import leaves the collection untouched.

use cie_core::{PointId, Real};
use tracing::{debug, warn};

use crate::exchange::{AxisFields, parse_payload};
use crate::point::{ExternalPoint, Point};
use crate::validate::ValidationError;

#[derive(Debug, Clone, Default)]
pub struct PointStore {
    points: Vec<Point>,
}

impl PointStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, id: &PointId) -> Option<&Point> {
        self.points.iter().find(|p| p.id == *id)
    }

    /// Append a new point under a fresh id.
    ///
    /// Names may repeat; the store does not check name or range.
    pub fn add(&mut self, name: impl Into<String>, horiz: Real, vert: Real) -> &Point {
        let point = Point {
            id: PointId::generate(),
            name: name.into(),
            horiz,
            vert,
        };
        debug!(id = %point.id, name = %point.name, horiz, vert, "point added");
        self.points.push(point);
        &self.points[self.points.len() - 1]
    }

    /// Remove and return the point with `id`, if present.
    pub fn remove(&mut self, id: &PointId) -> Option<Point> {
        let index = self.points.iter().position(|p| p.id == *id)?;
        let point = self.points.remove(index);
        debug!(id = %point.id, name = %point.name, "point removed");
        Some(point)
    }

    /// Returns whether a point was removed. Unknown ids are a no-op.
    pub fn delete(&mut self, id: &PointId) -> bool {
        self.remove(id).is_some()
    }

    pub fn clear(&mut self) {
        debug!(count = self.points.len(), "points cleared");
        self.points.clear();
    }

    /// Current points without ids, in order.
    pub fn export_all(&self) -> Vec<ExternalPoint> {
        self.points.iter().map(ExternalPoint::from).collect()
    }

    /// Discard the current collection and take `records` under fresh ids.
    pub fn replace_all(&mut self, records: Vec<ExternalPoint>) -> &[Point] {
        self.points = records
            .into_iter()
            .map(|record| Point {
                id: PointId::generate(),
                name: record.name,
                horiz: record.horiz,
                vert: record.vert,
            })
            .collect();
        debug!(count = self.points.len(), "points replaced");
        &self.points
    }

    /// Validate `raw` and, only if every record passes, replace the collection.
    pub fn import_replace(
        &mut self,
        raw: &str,
        fields: AxisFields,
    ) -> Result<&[Point], ValidationError> {
        match parse_payload(raw, fields) {
            Ok(records) => Ok(self.replace_all(records)),
            Err(err) => {
                warn!(error = %err, "import rejected");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_preserves_insertion_order() {
        let mut store = PointStore::new();
        store.add("C", 0.3, 0.3);
        store.add("A", 0.1, 0.1);
        store.add("B", 0.2, 0.2);
        let names: Vec<&str> = store.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["C", "A", "B"]);
    }

    #[test]
    fn remove_returns_the_point() {
        let mut store = PointStore::new();
        let id = store.add("D65", 0.1978, 0.4683).id;
        let removed = store.remove(&id).unwrap();
        assert_eq!(removed.name, "D65");
        assert!(store.is_empty());
        assert!(store.remove(&id).is_none());
    }

    #[test]
    fn delete_keeps_remaining_order() {
        let mut store = PointStore::new();
        store.add("A", 0.1, 0.1);
        let b = store.add("B", 0.2, 0.2).id;
        store.add("C", 0.3, 0.3);
        assert!(store.delete(&b));
        let names: Vec<&str> = store.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["A", "C"]);
    }

    #[test]
    fn get_finds_by_id() {
        let mut store = PointStore::new();
        let id = store.add("E", 0.3333, 0.3333).id;
        assert_eq!(store.get(&id).map(|p| p.name.as_str()), Some("E"));
        assert!(store.get(&PointId::generate()).is_none());
    }
}
