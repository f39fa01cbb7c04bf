//! Ellipsoid parameters and solver limits

/// WGS-84 semi-major axis (meters)
pub const WGS84_SEMI_MAJOR_AXIS_M: f64 = 6378137.0;

/// WGS-84 flattening factor
pub const WGS84_FLATTENING: f64 = 1.0 / 298.257223563;

/// Iteration cap for the Vincenty solvers; exceeding it is reported as a
/// convergence failure, never a silently approximated result
pub const VINCENTY_MAX_ITERATIONS: u32 = 200;

/// Convergence tolerance on the auxiliary angle between iterations (radians)
pub const VINCENTY_TOLERANCE_RAD: f64 = 1e-12;
