//! Vincenty's formulae for the direct and inverse geodesic problems
//!
//! Solves on a reference ellipsoid (WGS-84 by default) with all internal
//! trigonometry in radians and the public interface in degrees. Accuracy is
//! sub-meter for the distances this library targets (AR placement range,
//! under ~10 km); no guarantee is made for global-scale lines.

use crate::core::constants::{VINCENTY_MAX_ITERATIONS, VINCENTY_TOLERANCE_RAD};
use crate::core::types::{Ellipsoid, GeoCoordinate, GeodesicResult};
use crate::geodesy::angle::{
    degrees_to_radians, normalize_bearing_deg, normalize_longitude_deg, radians_to_degrees,
};
use crate::validation::data::{validate_bearing, validate_coordinate, validate_distance};
use crate::validation::error::GeodesyError;
use std::f64::consts::PI;

/// Geodesic solver over a reference ellipsoid
///
/// Stateless apart from its parameters; every solve is a pure function of its
/// arguments and safe to call from any thread.
#[derive(Debug, Clone)]
pub struct GeodeticSolver {
    ellipsoid: Ellipsoid,
    max_iterations: u32,
    tolerance_rad: f64,
}

impl Default for GeodeticSolver {
    fn default() -> Self {
        Self {
            ellipsoid: Ellipsoid::wgs84(),
            max_iterations: VINCENTY_MAX_ITERATIONS,
            tolerance_rad: VINCENTY_TOLERANCE_RAD,
        }
    }
}

impl GeodeticSolver {
    /// Create a solver with WGS-84 parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solver with a custom ellipsoid and iteration limits
    pub fn with_parameters(ellipsoid: Ellipsoid, max_iterations: u32, tolerance_rad: f64) -> Self {
        Self {
            ellipsoid,
            max_iterations,
            tolerance_rad,
        }
    }

    /// The ellipsoid this solver operates on
    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    /// Solve the inverse geodesic problem: distance and forward/reverse
    /// bearings between two coordinates
    ///
    /// Coincident inputs return distance 0 with both bearings 0 (the bearing
    /// is undefined there; 0 is the documented deterministic fallback).
    /// Near-antipodal inputs for which the iteration cannot converge within
    /// the iteration cap return `ConvergenceFailure`.
    pub fn inverse(
        &self,
        from: &GeoCoordinate,
        to: &GeoCoordinate,
    ) -> Result<GeodesicResult, GeodesyError> {
        validate_coordinate(from)?;
        validate_coordinate(to)?;

        let a = self.ellipsoid.semi_major_axis_m;
        let f = self.ellipsoid.flattening;
        let b = self.ellipsoid.semi_minor_axis_m();

        let phi1 = degrees_to_radians(from.latitude);
        let phi2 = degrees_to_radians(to.latitude);
        // Shortest-way longitude difference, so dateline-crossing pairs
        // iterate from a small angle rather than a near-full turn
        let l = degrees_to_radians(normalize_longitude_deg(to.longitude - from.longitude));

        // Reduced latitudes on the auxiliary sphere
        let u1 = ((1.0 - f) * phi1.tan()).atan();
        let u2 = ((1.0 - f) * phi2.tan()).atan();
        let (sin_u1, cos_u1) = u1.sin_cos();
        let (sin_u2, cos_u2) = u2.sin_cos();

        let mut lambda = l;
        let mut iterations = 0u32;

        loop {
            let (sin_lambda, cos_lambda) = lambda.sin_cos();
            let sin_sigma = ((cos_u2 * sin_lambda).powi(2)
                + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
            .sqrt();

            if sin_sigma == 0.0 {
                // Coincident points
                return Ok(GeodesicResult {
                    distance_m: 0.0,
                    initial_bearing_deg: 0.0,
                    final_bearing_deg: 0.0,
                });
            }

            let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
            let sigma = sin_sigma.atan2(cos_sigma);
            let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
            let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
            // Equatorial line: cos^2(alpha) = 0
            let cos_2sigma_m = if cos_sq_alpha == 0.0 {
                0.0
            } else {
                cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
            };
            let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));

            let lambda_next = l
                + (1.0 - c)
                    * f
                    * sin_alpha
                    * (sigma
                        + c * sin_sigma
                            * (cos_2sigma_m
                                + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));
            let residual = (lambda_next - lambda).abs();

            // The auxiliary longitude difference escaping (-pi, pi) means the
            // iteration is diverging (near-antipodal inputs)
            if !lambda_next.is_finite() || lambda_next.abs() > PI {
                return Err(GeodesyError::ConvergenceFailure {
                    iterations,
                    residual,
                });
            }

            if residual < self.tolerance_rad {
                let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);
                let (big_a, big_b) = vincenty_series(u_sq);
                let delta_sigma = big_b
                    * sin_sigma
                    * (cos_2sigma_m
                        + big_b / 4.0
                            * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                                - big_b / 6.0
                                    * cos_2sigma_m
                                    * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                                    * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));

                let distance_m = b * big_a * (sigma - delta_sigma);
                let alpha1 = (cos_u2 * sin_lambda)
                    .atan2(cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda);
                let alpha2 = (cos_u1 * sin_lambda)
                    .atan2(-sin_u1 * cos_u2 + cos_u1 * sin_u2 * cos_lambda);

                let initial_bearing_deg = normalize_bearing_deg(radians_to_degrees(alpha1));
                let final_bearing_deg = normalize_bearing_deg(radians_to_degrees(alpha2));

                if !distance_m.is_finite()
                    || !initial_bearing_deg.is_finite()
                    || !final_bearing_deg.is_finite()
                {
                    return Err(GeodesyError::ConvergenceFailure {
                        iterations,
                        residual,
                    });
                }

                return Ok(GeodesicResult {
                    distance_m,
                    initial_bearing_deg,
                    final_bearing_deg,
                });
            }

            lambda = lambda_next;
            iterations += 1;
            if iterations >= self.max_iterations {
                return Err(GeodesyError::ConvergenceFailure {
                    iterations,
                    residual,
                });
            }
        }
    }

    /// Solve the direct geodesic problem: the destination reached by walking
    /// `distance_m` from `from` along the initial `bearing_deg`
    ///
    /// Distance 0 returns `from` unchanged; the bearing is normalized to
    /// [0, 360) before use.
    pub fn direct(
        &self,
        from: &GeoCoordinate,
        distance_m: f64,
        bearing_deg: f64,
    ) -> Result<GeoCoordinate, GeodesyError> {
        validate_coordinate(from)?;
        validate_distance(distance_m)?;
        validate_bearing(bearing_deg)?;

        if distance_m == 0.0 {
            return Ok(*from);
        }

        let a = self.ellipsoid.semi_major_axis_m;
        let f = self.ellipsoid.flattening;
        let b = self.ellipsoid.semi_minor_axis_m();

        let phi1 = degrees_to_radians(from.latitude);
        let alpha1 = degrees_to_radians(normalize_bearing_deg(bearing_deg));
        let (sin_alpha1, cos_alpha1) = alpha1.sin_cos();

        let tan_u1 = (1.0 - f) * phi1.tan();
        let cos_u1 = 1.0 / (1.0 + tan_u1 * tan_u1).sqrt();
        let sin_u1 = tan_u1 * cos_u1;

        let sigma1 = tan_u1.atan2(cos_alpha1);
        let sin_alpha = cos_u1 * sin_alpha1;
        let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
        let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);
        let (big_a, big_b) = vincenty_series(u_sq);

        let sigma_base = distance_m / (b * big_a);
        let mut sigma = sigma_base;
        let mut iterations = 0u32;

        loop {
            let cos_2sigma_m = (2.0 * sigma1 + sigma).cos();
            let (sin_sigma, cos_sigma) = sigma.sin_cos();
            let delta_sigma = big_b
                * sin_sigma
                * (cos_2sigma_m
                    + big_b / 4.0
                        * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                            - big_b / 6.0
                                * cos_2sigma_m
                                * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                                * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));
            let sigma_next = sigma_base + delta_sigma;
            let residual = (sigma_next - sigma).abs();
            sigma = sigma_next;

            if residual < self.tolerance_rad {
                break;
            }

            iterations += 1;
            if iterations >= self.max_iterations {
                return Err(GeodesyError::ConvergenceFailure {
                    iterations,
                    residual,
                });
            }
        }

        let (sin_sigma, cos_sigma) = sigma.sin_cos();
        let cos_2sigma_m = (2.0 * sigma1 + sigma).cos();

        let transverse = sin_u1 * sin_sigma - cos_u1 * cos_sigma * cos_alpha1;
        let phi2 = (sin_u1 * cos_sigma + cos_u1 * sin_sigma * cos_alpha1)
            .atan2((1.0 - f) * (sin_alpha * sin_alpha + transverse * transverse).sqrt());
        let lambda = (sin_sigma * sin_alpha1)
            .atan2(cos_u1 * cos_sigma - sin_u1 * sin_sigma * cos_alpha1);
        let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
        let l = lambda
            - (1.0 - c)
                * f
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m
                            + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

        let destination = GeoCoordinate {
            latitude: radians_to_degrees(phi2),
            longitude: normalize_longitude_deg(from.longitude + radians_to_degrees(l)),
        };

        if !destination.latitude.is_finite() || !destination.longitude.is_finite() {
            return Err(GeodesyError::ConvergenceFailure {
                iterations,
                residual: 0.0,
            });
        }

        Ok(destination)
    }
}

/// Vincenty's A and B series terms from u^2, shared by both solvers
fn vincenty_series(u_sq: f64) -> (f64, f64) {
    let big_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
    let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
    (big_a, big_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokyo() -> GeoCoordinate {
        GeoCoordinate {
            latitude: 35.6895,
            longitude: 139.6917,
        }
    }

    fn osaka() -> GeoCoordinate {
        GeoCoordinate {
            latitude: 34.6937,
            longitude: 135.5023,
        }
    }

    #[test]
    fn test_tokyo_to_osaka_scenario() {
        let solver = GeodeticSolver::new();
        let result = solver.inverse(&tokyo(), &osaka()).unwrap();

        // Known geodesic for these coordinates: ~397.2 km bearing ~255°
        assert!(
            (result.distance_m - 397_200.0).abs() < 1_200.0,
            "distance was {} m",
            result.distance_m
        );
        assert!(
            (result.initial_bearing_deg - 255.1).abs() < 1.2,
            "initial bearing was {}°",
            result.initial_bearing_deg
        );
    }

    #[test]
    fn test_inverse_symmetry() {
        let solver = GeodeticSolver::new();
        let forward = solver.inverse(&tokyo(), &osaka()).unwrap();
        let reverse = solver.inverse(&osaka(), &tokyo()).unwrap();

        assert!((forward.distance_m - reverse.distance_m).abs() < 1e-6);

        // Forward initial bearing and reverse final bearing differ by 180°
        let difference =
            (forward.initial_bearing_deg - reverse.final_bearing_deg).rem_euclid(360.0);
        assert!((difference - 180.0).abs() < 1e-6, "difference was {}°", difference);
    }

    #[test]
    fn test_coincident_points_fall_back_to_zero_bearing() {
        let solver = GeodeticSolver::new();
        let result = solver.inverse(&tokyo(), &tokyo()).unwrap();
        assert_eq!(result.distance_m, 0.0);
        assert_eq!(result.initial_bearing_deg, 0.0);
        assert_eq!(result.final_bearing_deg, 0.0);
    }

    #[test]
    fn test_invalid_inputs_rejected_before_solving() {
        let solver = GeodeticSolver::new();
        let bad = GeoCoordinate {
            latitude: 91.0,
            longitude: 0.0,
        };
        assert!(matches!(
            solver.inverse(&bad, &tokyo()),
            Err(GeodesyError::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            solver.direct(&tokyo(), -5.0, 0.0),
            Err(GeodesyError::InvalidDistance { .. })
        ));
        assert!(matches!(
            solver.direct(&tokyo(), 100.0, f64::NAN),
            Err(GeodesyError::InvalidBearing { .. })
        ));
    }

    #[test]
    fn test_near_antipodal_reports_convergence_failure() {
        let solver = GeodeticSolver::new();
        let from = GeoCoordinate {
            latitude: 0.0,
            longitude: 0.0,
        };
        let to = GeoCoordinate {
            latitude: 0.0,
            longitude: 179.9,
        };
        // Must terminate within the cap: either a finite near-half-circumference
        // distance or an explicit failure, never NaN and never a hang
        match solver.inverse(&from, &to) {
            Ok(result) => {
                assert!(result.distance_m.is_finite());
                assert!(result.distance_m > 19_000_000.0);
            }
            Err(error) => {
                assert!(matches!(error, GeodesyError::ConvergenceFailure { .. }));
            }
        }
    }

    #[test]
    fn test_inverse_across_the_dateline() {
        let solver = GeodeticSolver::new();
        let east = GeoCoordinate {
            latitude: 0.0,
            longitude: -179.95,
        };
        let west = GeoCoordinate {
            latitude: 0.0,
            longitude: 179.95,
        };
        // 0.1° of equator the short way across the dateline, heading west
        let result = solver.inverse(&east, &west).unwrap();
        assert!((result.distance_m - 11_131.949).abs() < 1.0);
        assert!((result.initial_bearing_deg - 270.0).abs() < 1e-6);
    }

    #[test]
    fn test_direct_zero_distance_returns_start() {
        let solver = GeodeticSolver::new();
        let origin = GeoCoordinate {
            latitude: 0.0,
            longitude: 0.0,
        };
        let result = solver.direct(&origin, 0.0, 123.4).unwrap();
        assert_eq!(result, origin);
    }

    #[test]
    fn test_direct_east_along_equator() {
        let solver = GeodeticSolver::new();
        let origin = GeoCoordinate {
            latitude: 0.0,
            longitude: 0.0,
        };
        // One degree of longitude along the equator: a * pi / 180
        let one_degree_m = 111_319.490_793_272_6;
        let destination = solver.direct(&origin, one_degree_m, 90.0).unwrap();
        assert!(destination.latitude.abs() < 1e-9);
        assert!((destination.longitude - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_direct_north_along_meridian() {
        let solver = GeodeticSolver::new();
        let origin = GeoCoordinate {
            latitude: 0.0,
            longitude: 0.0,
        };
        let destination = solver.direct(&origin, 10_000.0, 0.0).unwrap();
        assert!((destination.latitude - 0.09043).abs() < 1e-4);
        assert!(destination.longitude.abs() < 1e-9);
    }

    #[test]
    fn test_direct_normalizes_bearing() {
        let solver = GeodeticSolver::new();
        let origin = tokyo();
        let plain = solver.direct(&origin, 2_500.0, 47.0).unwrap();
        let wrapped = solver.direct(&origin, 2_500.0, 47.0 + 720.0).unwrap();
        let negative = solver.direct(&origin, 2_500.0, 47.0 - 360.0).unwrap();
        assert!((plain.latitude - wrapped.latitude).abs() < 1e-12);
        assert!((plain.longitude - wrapped.longitude).abs() < 1e-12);
        assert!((plain.latitude - negative.latitude).abs() < 1e-12);
    }

    #[test]
    fn test_direct_inverse_consistency() {
        let solver = GeodeticSolver::new();
        let start = tokyo();

        for &(distance, bearing) in &[
            (1.0, 0.0),
            (250.0, 90.0),
            (5_000.0, 47.25),
            (9_999.0, 181.5),
            (7_500.0, 359.0),
        ] {
            let destination = solver.direct(&start, distance, bearing).unwrap();
            let back = solver.inverse(&start, &destination).unwrap();
            assert!(
                (back.distance_m - distance).abs() < 0.01,
                "round trip distance {} for input {}",
                back.distance_m,
                distance
            );
            assert!(
                (back.initial_bearing_deg - bearing).abs() < 1e-5,
                "round trip bearing {} for input {}",
                back.initial_bearing_deg,
                bearing
            );
        }
    }

    #[test]
    fn test_inverse_converges_quickly_for_placement_range() {
        // The iteration cap is a hard bound; typical AR-range solves should
        // stay far beneath it
        let solver = GeodeticSolver::with_parameters(Ellipsoid::wgs84(), 20, 1e-12);
        let near = GeoCoordinate {
            latitude: 35.6900,
            longitude: 139.6925,
        };
        assert!(solver.inverse(&tokyo(), &near).is_ok());
    }
}
