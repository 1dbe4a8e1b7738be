//! Turning a raw [`PathResult`] into a [`RouteOutcome`].
//!
//! Cases are checked in order:
//!
//! | # | Condition                                         | Outcome              |
//! |---|---------------------------------------------------|----------------------|
//! | 1 | origin or destination missing, or result malformed | `MissingSelection`  |
//! | 2 | origin == destination                             | `SameLocation`       |
//! | 3 | distance is infinite                              | `NoRoute`            |
//! | 4 | accessibility required, some edge inaccessible    | `NoAccessibleRoute`  |
//! | 5 | otherwise                                         | `Found`              |

use tracing::warn;

use cn_core::NavConfig;
use cn_graph::PathResult;

use crate::outcome::{AccessibilityClass, RouteOutcome, RouteSummary, WalkingTime};
use crate::query::RouteQuery;

/// Cases 1 and 2: outcomes decided by the query alone.  `None` means a
/// search is needed.
pub fn screen(query: &RouteQuery) -> Option<RouteOutcome> {
    let Some((origin, destination)) = query.selection() else {
        return Some(RouteOutcome::MissingSelection);
    };
    if origin == destination {
        return Some(RouteOutcome::SameLocation { location: origin.clone() });
    }
    None
}

/// Derive the outcome for `query` from the search `result`.
pub fn present(query: &RouteQuery, result: &PathResult, config: &NavConfig) -> RouteOutcome {
    if let Some(outcome) = screen(query) {
        return outcome;
    }
    let Some((origin, destination)) = query.selection() else {
        return RouteOutcome::MissingSelection;
    };

    if !result.is_consistent() {
        warn!(
            %origin,
            %destination,
            distance_m = result.total_distance_m,
            path_len = result.path.len(),
            trail_len = result.edge_accessibility.len(),
            "malformed path result"
        );
        return RouteOutcome::MissingSelection;
    }

    if !result.is_found() {
        return RouteOutcome::NoRoute {
            origin:      origin.clone(),
            destination: destination.clone(),
        };
    }

    if query.accessibility_required && !result.is_fully_accessible() {
        return RouteOutcome::NoAccessibleRoute {
            origin:      origin.clone(),
            destination: destination.clone(),
            distance_m:  result.total_distance_m,
        };
    }

    RouteOutcome::Found(RouteSummary {
        origin:        origin.clone(),
        destination:   destination.clone(),
        distance_m:    result.total_distance_m,
        path:          result.path.clone(),
        walking_time:  WalkingTime::from_secs(config.walking_secs(result.total_distance_m)),
        accessibility: AccessibilityClass::from_trail(&result.edge_accessibility),
        segment_count: result.segment_count(),
    })
}
