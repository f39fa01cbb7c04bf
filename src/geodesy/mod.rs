//! Geodetic solver and angle utilities

pub mod angle;
pub mod vincenty;

pub use angle::{
    degrees_to_radians, normalize_bearing_deg, normalize_longitude_deg, radians_to_degrees,
};
pub use vincenty::GeodeticSolver;
