//! Input validation for geometry boundaries

pub mod data;
pub mod error;

pub use data::{validate_coordinate, validate_path};
pub use error::GeometryError;
