//! JSON exchange format.
//!
//! A file is a bare array of `{ "name": string, <horiz>: number, <vert>: number }`
//! records. The two axis keys depend on the active coordinate system, so
//! records are (de)serialized by hand against an [`AxisFields`] rather than
//! through a derived struct.

pub use cie_diagram::AxisFields;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::point::ExternalPoint;
use crate::validate::ValidationError;

const NAME_FIELD: &str = "name";

struct Record<'a> {
    point: &'a ExternalPoint,
    fields: AxisFields,
}

impl Serialize for Record<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry(NAME_FIELD, &self.point.name)?;
        map.serialize_entry(self.fields.horiz, &self.point.horiz)?;
        map.serialize_entry(self.fields.vert, &self.point.vert)?;
        map.end()
    }
}

/// Serialize points as a pretty-printed array (two-space indent).
pub fn to_json(points: &[ExternalPoint], fields: AxisFields) -> serde_json::Result<String> {
    let records: Vec<Record<'_>> = points
        .iter()
        .map(|point| Record { point, fields })
        .collect();
    serde_json::to_string_pretty(&records)
}

/// Check a raw payload against the exchange schema.
///
/// Records are checked in order and the first violation is returned. Unknown
/// keys, including any `id`, are ignored.
pub fn parse_payload(raw: &str, fields: AxisFields) -> Result<Vec<ExternalPoint>, ValidationError> {
    let value: Value = serde_json::from_str(raw).map_err(|e| ValidationError::Malformed {
        reason: e.to_string(),
    })?;

    let Value::Array(records) = value else {
        return Err(ValidationError::NotAnArray);
    };

    records
        .iter()
        .enumerate()
        .map(|(i, record)| parse_record(i + 1, record, fields))
        .collect()
}

fn parse_record(
    index: usize,
    record: &Value,
    fields: AxisFields,
) -> Result<ExternalPoint, ValidationError> {
    let obj = record
        .as_object()
        .ok_or(ValidationError::NotAnObject { index })?;

    let name = field(obj, index, NAME_FIELD)?
        .as_str()
        .ok_or_else(|| wrong_type(index, NAME_FIELD, "string"))?;
    let horiz = number_field(obj, index, fields.horiz)?;
    let vert = number_field(obj, index, fields.vert)?;

    Ok(ExternalPoint::new(name, horiz, vert))
}

fn field<'a>(
    obj: &'a Map<String, Value>,
    index: usize,
    name: &str,
) -> Result<&'a Value, ValidationError> {
    obj.get(name).ok_or_else(|| ValidationError::MissingField {
        index,
        field: name.to_string(),
    })
}

fn number_field(
    obj: &Map<String, Value>,
    index: usize,
    name: &str,
) -> Result<f64, ValidationError> {
    field(obj, index, name)?
        .as_f64()
        .ok_or_else(|| wrong_type(index, name, "number"))
}

fn wrong_type(index: usize, field: &str, expected: &'static str) -> ValidationError {
    ValidationError::WrongType {
        index,
        field: field.to_string(),
        expected,
    }
}
