//! Degree/radian conversion and angle normalization
//!
//! All trigonometric work inside the solvers happens in radians; the public
//! interface speaks degrees. These helpers are pure and have no failure
//! modes.

/// Convert degrees to radians
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Convert radians to degrees
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Normalize a bearing to [0, 360)
pub fn normalize_bearing_deg(bearing_deg: f64) -> f64 {
    let normalized = bearing_deg.rem_euclid(360.0);
    // rem_euclid of a tiny negative value can round up to exactly 360
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Normalize a longitude to [-180, 180)
pub fn normalize_longitude_deg(longitude_deg: f64) -> f64 {
    (longitude_deg + 180.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_degree_radian_round_trip() {
        assert!((degrees_to_radians(180.0) - PI).abs() < 1e-15);
        assert!((radians_to_degrees(PI / 2.0) - 90.0).abs() < 1e-12);
        assert!((radians_to_degrees(degrees_to_radians(57.2958)) - 57.2958).abs() < 1e-12);
    }

    #[test]
    fn test_bearing_normalization() {
        assert_eq!(normalize_bearing_deg(0.0), 0.0);
        assert_eq!(normalize_bearing_deg(360.0), 0.0);
        assert_eq!(normalize_bearing_deg(725.0), 5.0);
        assert_eq!(normalize_bearing_deg(-90.0), 270.0);
        assert_eq!(normalize_bearing_deg(-360.0), 0.0);
    }

    #[test]
    fn test_bearing_normalization_stays_below_360() {
        // A tiny negative input must not round up to 360
        let normalized = normalize_bearing_deg(-1e-20);
        assert!((0.0..360.0).contains(&normalized));
    }

    #[test]
    fn test_longitude_normalization() {
        assert_eq!(normalize_longitude_deg(0.0), 0.0);
        assert_eq!(normalize_longitude_deg(190.0), -170.0);
        assert_eq!(normalize_longitude_deg(-190.0), 170.0);
        assert_eq!(normalize_longitude_deg(540.0), -180.0);
    }
}
