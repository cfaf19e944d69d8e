//! Shared application service layer for cievis.
//!
//! This crate gives any front end (command line, GUI, web bridge) one owner
//! for session state: the point collection, the active diagram, and the
//! session configuration. Front ends collect input, call into a [`Session`],
//! and render the rows, plotted markers and notices it returns.

pub mod config;
pub mod error;
pub mod input;
pub mod notice;
pub mod session;
pub mod view;

// Re-export key types for convenience
pub use config::{SessionConfig, load_config};
pub use error::{AppError, AppResult};
pub use input::PointInput;
pub use notice::{Notice, NoticeLevel};
pub use session::Session;
pub use view::{EMPTY_LIST_TEXT, PlottedPoint, PointRow};
