//! Import validation errors.

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Payload is not valid JSON: {reason}")]
    Malformed { reason: String },

    #[error("Payload is not an array")]
    NotAnArray,

    #[error("Record {index} is not an object")]
    NotAnObject { index: usize },

    #[error("Record {index} is missing required field '{field}'")]
    MissingField { index: usize, field: String },

    #[error("Record {index} has wrong type for field '{field}' (expected {expected})")]
    WrongType {
        index: usize,
        field: String,
        expected: &'static str,
    },
}

impl ValidationError {
    /// 1-based index of the offending record, if the failure is record-level.
    pub fn record_index(&self) -> Option<usize> {
        match self {
            ValidationError::NotAnObject { index }
            | ValidationError::MissingField { index, .. }
            | ValidationError::WrongType { index, .. } => Some(*index),
            ValidationError::Malformed { .. } | ValidationError::NotAnArray => None,
        }
    }
}
