//! Error classification for geodetic and transform operations

use serde::{Deserialize, Serialize};
use std::fmt;

/// Errors reported by the geodetic solver and the transform builder
///
/// Every failure is an explicit result value; no condition is logged and
/// swallowed, and no NaN or infinity ever leaves the crate silently.
/// Coincident inverse inputs are deliberately NOT an error: distance 0 with a
/// bearing fallback of 0 is a legitimate placement at the viewer's location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GeodesyError {
    /// Latitude/longitude outside the valid WGS-84 ranges, or non-finite
    InvalidCoordinate { latitude: f64, longitude: f64 },
    /// Negative or non-finite geodesic distance
    InvalidDistance { distance_m: f64 },
    /// Non-finite bearing
    InvalidBearing { bearing_deg: f64 },
    /// The inverse geodesic iteration did not converge within the iteration
    /// cap (near-antipodal inputs)
    ConvergenceFailure { iterations: u32, residual: f64 },
    /// A transform matrix entry is NaN or infinite
    NonFiniteMatrix { row: usize, column: usize },
}

impl fmt::Display for GeodesyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeodesyError::InvalidCoordinate {
                latitude,
                longitude,
            } => {
                write!(
                    f,
                    "Invalid coordinate ({}, {}): latitude must be within [-90, 90] and longitude within [-180, 180]",
                    latitude, longitude
                )
            }
            GeodesyError::InvalidDistance { distance_m } => {
                write!(
                    f,
                    "Invalid distance {} m: must be finite and non-negative",
                    distance_m
                )
            }
            GeodesyError::InvalidBearing { bearing_deg } => {
                write!(f, "Invalid bearing {}°: must be finite", bearing_deg)
            }
            GeodesyError::ConvergenceFailure {
                iterations,
                residual,
            } => {
                write!(
                    f,
                    "Geodesic iteration failed to converge after {} iterations (residual {:.3e} rad)",
                    iterations, residual
                )
            }
            GeodesyError::NonFiniteMatrix { row, column } => {
                write!(
                    f,
                    "Transform matrix entry ({}, {}) is not finite",
                    row, column
                )
            }
        }
    }
}

impl std::error::Error for GeodesyError {}
