//! Core value types shared by the solver and the transform builder

use crate::core::constants::{WGS84_FLATTENING, WGS84_SEMI_MAJOR_AXIS_M};
use crate::validation::data::validate_coordinate;
use crate::validation::error::GeodesyError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A WGS-84 geographic coordinate in decimal degrees
///
/// Latitude is constrained to [-90, 90] and longitude to [-180, 180];
/// out-of-range values are rejected at every solver entry point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    /// Create a coordinate, rejecting out-of-range or non-finite components
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeodesyError> {
        let coordinate = Self {
            latitude,
            longitude,
        };
        validate_coordinate(&coordinate)?;
        Ok(coordinate)
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

/// A geographic fix: coordinate plus the optional metadata a location feed
/// attaches to it
///
/// Altitude, timestamp and accuracy are owned by the location service; the
/// geodetic solver reads only the coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Horizontal coordinate
    pub coordinate: GeoCoordinate,
    /// Altitude above the ellipsoid (meters)
    pub altitude_m: Option<f64>,
    /// Fix timestamp (milliseconds since epoch)
    pub timestamp_ms: Option<u64>,
    /// Estimated horizontal accuracy (meters)
    pub horizontal_accuracy_m: Option<f64>,
}

impl GeoPoint {
    /// A bare fix with no altitude or metadata
    pub fn from_coordinate(coordinate: GeoCoordinate) -> Self {
        Self {
            coordinate,
            altitude_m: None,
            timestamp_ms: None,
            horizontal_accuracy_m: None,
        }
    }
}

/// Output of the inverse geodesic solve
///
/// Distance is non-negative; both bearings are normalized to [0, 360).
/// Consumed immediately by the transform builder, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeodesicResult {
    /// Geodesic distance along the ellipsoid surface (meters)
    pub distance_m: f64,
    /// Forward azimuth at the start point, clockwise from north (degrees)
    pub initial_bearing_deg: f64,
    /// Forward azimuth at the end point, clockwise from north (degrees)
    pub final_bearing_deg: f64,
}

/// A placed object's position in the local AR frame
///
/// Axis convention: x = right, y = up, z = forward (into the scene). The AR
/// session's world frame points z out of the scene, so converting a node
/// translation negates z; `bearing = atan2(x, z)` then agrees with the
/// placement rotation and round trips are consistent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedObjectOffset {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl PlacedObjectOffset {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Convert a translation expressed in the AR session's world frame
    /// (z out of the scene) into the into-scene convention
    pub fn from_scene_translation(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z: -z }
    }

    /// Straight-line magnitude of the offset (meters)
    pub fn magnitude_m(&self) -> f64 {
        let x = f64::from(self.x);
        let y = f64::from(self.y);
        let z = f64::from(self.z);
        (x * x + y * y + z * z).sqrt()
    }
}

/// Reference ellipsoid parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipsoid {
    /// Semi-major axis (meters)
    pub semi_major_axis_m: f64,
    /// Flattening factor
    pub flattening: f64,
}

impl Ellipsoid {
    /// WGS-84 parameters
    pub fn wgs84() -> Self {
        Self {
            semi_major_axis_m: WGS84_SEMI_MAJOR_AXIS_M,
            flattening: WGS84_FLATTENING,
        }
    }

    /// Semi-minor axis, derived as a(1 - f) (meters)
    pub fn semi_minor_axis_m(&self) -> f64 {
        self.semi_major_axis_m * (1.0 - self.flattening)
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::wgs84()
    }
}
