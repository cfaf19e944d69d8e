//! cie-core: shared foundation for cievis.
//!
//! Contains:
//! - numeric (Real + finite checks)
//! - ids (opaque point identifiers)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CieError, CieResult};
pub use ids::*;
pub use numeric::*;
