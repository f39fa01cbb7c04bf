//! Homogeneous matrix construction helpers
//!
//! Matrices are `nalgebra::Matrix4<f32>`, column-major: columns 0-2 are the
//! orthonormal basis, column 3 the translation with w = 1. All rotation
//! construction funnels through `rotation_about_y` so sign conventions live
//! in exactly one place.

use nalgebra::{Matrix4, Rotation3, Translation3, Vector3};

/// Rotation about the vertical (+y) axis by `angle_rad`
///
/// Positive angles rotate counterclockwise viewed from above (right-handed
/// y-up frame); callers placing by compass bearing negate the angle.
pub fn rotation_about_y(angle_rad: f32) -> Matrix4<f32> {
    Rotation3::from_axis_angle(&Vector3::y_axis(), angle_rad).to_homogeneous()
}

/// Translation by `offset`
pub fn translation(offset: Vector3<f32>) -> Matrix4<f32> {
    Translation3::from(offset).to_homogeneous()
}
