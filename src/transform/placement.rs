//! Bridging geographic coordinates and the local AR frame
//!
//! The AR session frame is right-handed y-up: x right, y up, z out of the
//! scene, so the into-scene direction at zero heading is -z and geographic
//! north coincides with it. Bearings are measured clockwise from north viewed
//! from above, which is a rotation by the negated bearing about +y.

use crate::core::types::{GeoCoordinate, PlacedObjectOffset};
use crate::geodesy::angle::{degrees_to_radians, normalize_bearing_deg, radians_to_degrees};
use crate::geodesy::vincenty::GeodeticSolver;
use crate::transform::matrix;
use crate::validation::data::validate_matrix;
use crate::validation::error::GeodesyError;
use nalgebra::{Matrix4, Vector3};

/// Builds placement transforms from geodetic solves and maps AR-local
/// offsets back to geographic coordinates
///
/// Pure and stateless apart from the solver parameters; it never mutates its
/// matrix arguments and adds no failure modes of its own beyond input-matrix
/// validation.
#[derive(Debug, Clone, Default)]
pub struct TransformBuilder {
    solver: GeodeticSolver,
}

impl TransformBuilder {
    /// Create a builder backed by a WGS-84 solver
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder backed by a specific solver
    pub fn with_solver(solver: GeodeticSolver) -> Self {
        Self { solver }
    }

    /// The geodetic solver backing this builder
    pub fn solver(&self) -> &GeodeticSolver {
        &self.solver
    }

    /// Build the transform that places an object at `target` as seen from
    /// `viewer`, anchored at the viewer's current orientation matrix
    ///
    /// Composes a translation of `distance` into the scene with a rotation by
    /// the initial bearing about the vertical axis, then left-multiplies by
    /// `anchor_matrix`: `anchor * R_y(-bearing) * T(0, 0, -distance)`. Only
    /// the initial bearing rotates the placement; the destination-side
    /// bearing does not contribute. Returns a new matrix.
    pub fn build_placement_transform(
        &self,
        anchor_matrix: &Matrix4<f32>,
        viewer: &GeoCoordinate,
        target: &GeoCoordinate,
    ) -> Result<Matrix4<f32>, GeodesyError> {
        validate_matrix(anchor_matrix)?;
        let geodesic = self.solver.inverse(viewer, target)?;

        let rotation = matrix::rotation_about_y(
            -(degrees_to_radians(geodesic.initial_bearing_deg) as f32),
        );
        let translation =
            matrix::translation(Vector3::new(0.0, 0.0, -(geodesic.distance_m as f32)));

        Ok(anchor_matrix * rotation * translation)
    }

    /// Extract a placement transform's translation as an AR-local offset
    ///
    /// The world-frame z is negated so the offset follows the into-scene
    /// convention that `locate_from_offset` expects.
    pub fn placement_offset(
        &self,
        transform: &Matrix4<f32>,
    ) -> Result<PlacedObjectOffset, GeodesyError> {
        validate_matrix(transform)?;
        Ok(PlacedObjectOffset::from_scene_translation(
            transform[(0, 3)],
            transform[(1, 3)],
            transform[(2, 3)],
        ))
    }

    /// Map an AR-local offset from `anchor` back to a geographic coordinate
    ///
    /// Distance is the straight-line offset magnitude and the bearing is
    /// `atan2(x, z)` in the into-scene frame, so a placement's own offset
    /// resolves back to its target. A zero offset resolves to `anchor`
    /// exactly. Altitude is not reconstructed; the local-frame model here is
    /// planar. `anchor_matrix` participates only through validation.
    pub fn locate_from_offset(
        &self,
        anchor_matrix: &Matrix4<f32>,
        anchor: &GeoCoordinate,
        offset: &PlacedObjectOffset,
    ) -> Result<GeoCoordinate, GeodesyError> {
        validate_matrix(anchor_matrix)?;

        let distance_m = offset.magnitude_m();
        let bearing_deg = normalize_bearing_deg(radians_to_degrees(
            f64::from(offset.x).atan2(f64::from(offset.z)),
        ));

        self.solver.direct(anchor, distance_m, bearing_deg)
    }
}
