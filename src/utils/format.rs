//! Human-readable and JSON rendering of solver output
//!
//! The library never prints; callers that want diagnostics build a
//! `SolveReport` and render it themselves.

use crate::core::types::{Ellipsoid, GeoCoordinate, GeodesicResult};
use serde::{Deserialize, Serialize};

/// A solved inverse problem bundled with its inputs for display or logging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveReport {
    /// Start coordinate
    pub from: GeoCoordinate,
    /// End coordinate
    pub to: GeoCoordinate,
    /// Solver output
    pub result: GeodesicResult,
    /// Ellipsoid the solve ran on
    pub ellipsoid: Ellipsoid,
}

impl SolveReport {
    pub fn new(
        from: GeoCoordinate,
        to: GeoCoordinate,
        result: GeodesicResult,
        ellipsoid: Ellipsoid,
    ) -> Self {
        Self {
            from,
            to,
            result,
            ellipsoid,
        }
    }

    /// Multi-line human-readable rendering
    pub fn to_text(&self) -> String {
        format!(
            "From:            {}\n\
             To:              {}\n\
             Distance:        {:.3} m\n\
             Initial bearing: {:.4}°\n\
             Final bearing:   {:.4}°",
            self.from,
            self.to,
            self.result.distance_m,
            self.result.initial_bearing_deg,
            self.result.final_bearing_deg,
        )
    }

    /// Pretty-printed JSON rendering
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
