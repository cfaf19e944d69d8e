//! cie-points: the named point collection and its JSON exchange format.

pub mod exchange;
pub mod point;
pub mod store;
pub mod validate;

pub use exchange::{AxisFields, parse_payload, to_json};
pub use point::{ExternalPoint, Point};
pub use store::PointStore;
pub use validate::ValidationError;
