//! Route-table summaries.

use std::fmt;

use serde::Serialize;

use cn_core::{Location, Segment};

/// Aggregate figures over a route table.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct RouteStats {
    pub total_routes:       usize,
    pub accessible_routes:  usize,
    pub total_distance_m:   f64,
    /// Mean segment length; 0 for an empty table.
    pub average_distance_m: f64,
}

impl RouteStats {
    /// Distances that are not finite are left out of the sums (but the
    /// segment still counts as a route).
    pub fn from_segments(segments: &[Segment]) -> Self {
        let measured: Vec<f64> = segments
            .iter()
            .map(|s| s.distance_m)
            .filter(|d| d.is_finite())
            .collect();
        let total_distance_m: f64 = measured.iter().sum();
        let average_distance_m = if measured.is_empty() {
            0.0
        } else {
            total_distance_m / measured.len() as f64
        };

        Self {
            total_routes: segments.len(),
            accessible_routes: segments.iter().filter(|s| s.accessible).count(),
            total_distance_m,
            average_distance_m,
        }
    }
}

impl fmt::Display for RouteStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Routes:      {}", self.total_routes)?;
        writeln!(f, "Accessible Routes: {}", self.accessible_routes)?;
        writeln!(f, "Total Distance:    {:.0} m", self.total_distance_m)?;
        write!(f, "Average Distance:  {:.1} m", self.average_distance_m)
    }
}

/// Every location named by a segment, sorted and de-duplicated.  Used to
/// populate origin/destination choices.
pub fn location_directory(segments: &[Segment]) -> Vec<Location> {
    let mut locations: Vec<Location> = segments
        .iter()
        .flat_map(|s| [&s.start, &s.end])
        .filter(|l| !l.is_blank())
        .cloned()
        .collect();
    locations.sort_unstable();
    locations.dedup();
    locations
}
