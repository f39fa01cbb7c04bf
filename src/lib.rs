//! Geographic pose library
//!
//! Converts between real-world WGS-84 coordinates and a local 3D
//! augmented-reality frame: a Vincenty geodesic solver paired with a 4x4
//! placement-transform builder, plus the object registry and location-feed
//! plumbing an AR session needs around them.

pub mod core;
pub mod geodesy;
pub mod location;
pub mod scene;
pub mod transform;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{
    Ellipsoid, GeoCoordinate, GeoPoint, GeodesicResult, PlacedObjectOffset,
    VINCENTY_MAX_ITERATIONS, VINCENTY_TOLERANCE_RAD, WGS84_FLATTENING, WGS84_SEMI_MAJOR_AXIS_M,
};
pub use crate::geodesy::{
    degrees_to_radians, normalize_bearing_deg, normalize_longitude_deg, radians_to_degrees,
    GeodeticSolver,
};
pub use crate::location::{LocationEvent, LocationService, LocationSnapshot, SubscriptionHandle};
pub use crate::scene::{NodeId, ObjectData, ObjectRegistry};
pub use crate::transform::TransformBuilder;
pub use crate::utils::SolveReport;
pub use crate::validation::GeodesyError;
