//! Input validation and error classification

pub mod data;
pub mod error;

pub use data::{validate_bearing, validate_coordinate, validate_distance, validate_matrix};
pub use error::GeodesyError;
