//! Input validators shared by the solver and the transform builder
//!
//! Every public solver/builder operation validates through these before any
//! trigonometric work, so out-of-range or non-finite input is rejected at the
//! boundary instead of surfacing later as NaN.

use crate::core::types::GeoCoordinate;
use crate::validation::error::GeodesyError;
use nalgebra::Matrix4;

/// Validate a WGS-84 coordinate
pub fn validate_coordinate(coordinate: &GeoCoordinate) -> Result<(), GeodesyError> {
    let valid = coordinate.latitude.is_finite()
        && coordinate.longitude.is_finite()
        && (-90.0..=90.0).contains(&coordinate.latitude)
        && (-180.0..=180.0).contains(&coordinate.longitude);

    if valid {
        Ok(())
    } else {
        Err(GeodesyError::InvalidCoordinate {
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
        })
    }
}

/// Validate a geodesic distance: finite and non-negative
pub fn validate_distance(distance_m: f64) -> Result<(), GeodesyError> {
    if distance_m.is_finite() && distance_m >= 0.0 {
        Ok(())
    } else {
        Err(GeodesyError::InvalidDistance { distance_m })
    }
}

/// Validate a bearing: finite (any magnitude; callers normalize to [0, 360))
pub fn validate_bearing(bearing_deg: f64) -> Result<(), GeodesyError> {
    if bearing_deg.is_finite() {
        Ok(())
    } else {
        Err(GeodesyError::InvalidBearing { bearing_deg })
    }
}

/// Validate that every matrix entry is finite, reporting the first offender
pub fn validate_matrix(matrix: &Matrix4<f32>) -> Result<(), GeodesyError> {
    for column in 0..4 {
        for row in 0..4 {
            if !matrix[(row, column)].is_finite() {
                return Err(GeodesyError::NonFiniteMatrix { row, column });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_bounds() {
        let valid = GeoCoordinate {
            latitude: 89.999,
            longitude: -179.999,
        };
        assert!(validate_coordinate(&valid).is_ok());

        let bad_latitude = GeoCoordinate {
            latitude: 91.0,
            longitude: 0.0,
        };
        assert_eq!(
            validate_coordinate(&bad_latitude),
            Err(GeodesyError::InvalidCoordinate {
                latitude: 91.0,
                longitude: 0.0,
            })
        );

        let bad_longitude = GeoCoordinate {
            latitude: 0.0,
            longitude: 180.001,
        };
        assert!(validate_coordinate(&bad_longitude).is_err());
    }

    #[test]
    fn test_non_finite_coordinate_rejected() {
        let nan_latitude = GeoCoordinate {
            latitude: f64::NAN,
            longitude: 0.0,
        };
        assert!(validate_coordinate(&nan_latitude).is_err());

        let infinite_longitude = GeoCoordinate {
            latitude: 0.0,
            longitude: f64::INFINITY,
        };
        assert!(validate_coordinate(&infinite_longitude).is_err());
    }

    #[test]
    fn test_distance_bounds() {
        assert!(validate_distance(0.0).is_ok());
        assert!(validate_distance(10_000.0).is_ok());
        assert!(validate_distance(-1.0).is_err());
        assert!(validate_distance(f64::NAN).is_err());
        assert!(validate_distance(f64::INFINITY).is_err());
    }

    #[test]
    fn test_bearing_must_be_finite() {
        assert!(validate_bearing(-720.0).is_ok());
        assert!(validate_bearing(1234.5).is_ok());
        assert!(validate_bearing(f64::NAN).is_err());
    }

    #[test]
    fn test_matrix_entries_must_be_finite() {
        let identity = Matrix4::<f32>::identity();
        assert!(validate_matrix(&identity).is_ok());

        let mut poisoned = identity;
        poisoned[(1, 3)] = f32::NAN;
        assert_eq!(
            validate_matrix(&poisoned),
            Err(GeodesyError::NonFiniteMatrix { row: 1, column: 3 })
        );
    }
}
