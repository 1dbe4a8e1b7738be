//! Presentation-ready route outcomes.
//!
//! `Display` on each type renders the user-facing text.

use std::fmt;

use cn_core::Location;

// ── WalkingTime ───────────────────────────────────────────────────────────────

/// Estimated walking duration.
///
/// Displayed as minutes with one decimal below one hour, otherwise as hours
/// with one decimal: `"1.8 minutes"`, `"1.2 hours"`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkingTime {
    pub seconds: f64,
}

impl WalkingTime {
    pub fn from_secs(seconds: f64) -> Self {
        Self { seconds }
    }

    pub fn minutes(self) -> f64 {
        self.seconds / 60.0
    }

    pub fn hours(self) -> f64 {
        self.minutes() / 60.0
    }
}

impl fmt::Display for WalkingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = self.minutes();
        if minutes < 60.0 {
            write!(f, "{minutes:.1} minutes")
        } else {
            write!(f, "{:.1} hours", self.hours())
        }
    }
}

// ── AccessibilityClass ────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AccessibilityClass {
    /// Every segment on the route is accessible.
    FullyAccessible,
    /// At least one segment is not.
    PartiallyAccessible,
}

impl AccessibilityClass {
    pub fn from_trail(edge_accessibility: &[bool]) -> Self {
        if edge_accessibility.iter().all(|&a| a) {
            AccessibilityClass::FullyAccessible
        } else {
            AccessibilityClass::PartiallyAccessible
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AccessibilityClass::FullyAccessible     => "Fully Accessible",
            AccessibilityClass::PartiallyAccessible => "Partially Accessible",
        }
    }
}

impl fmt::Display for AccessibilityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── RouteSummary ──────────────────────────────────────────────────────────────

/// A found route, ready to show.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteSummary {
    pub origin:        Location,
    pub destination:   Location,
    pub distance_m:    f64,
    pub path:          Vec<Location>,
    pub walking_time:  WalkingTime,
    pub accessibility: AccessibilityClass,
    /// Number of segments walked (`path.len() - 1`).
    pub segment_count: usize,
}

impl RouteSummary {
    /// The path joined with arrows: `"Gate → Lib → Cafe"`.
    pub fn path_display(&self) -> String {
        let names: Vec<&str> = self.path.iter().map(Location::as_str).collect();
        names.join(" → ")
    }
}

impl fmt::Display for RouteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Route Found: {} to {}", self.origin, self.destination)?;
        writeln!(f, "{}", self.path_display())?;
        writeln!(f, "{:.0} meters", self.distance_m)?;
        writeln!(f, "~{}", self.walking_time)?;
        writeln!(f, "{}", self.accessibility)?;
        write!(f, "{} segments", self.segment_count)
    }
}

// ── RouteOutcome ──────────────────────────────────────────────────────────────

/// The answer to a route query.  Exactly one variant applies, checked in
/// declaration order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", rename_all = "snake_case"))]
pub enum RouteOutcome {
    /// Origin or destination not chosen.  No search was run.
    MissingSelection,
    /// Origin and destination are the same.  No search was run.
    SameLocation { location: Location },
    /// The locations are not connected (or at least one is unknown).
    NoRoute { origin: Location, destination: Location },
    /// A route exists but uses an inaccessible segment, and the query
    /// required accessibility.
    NoAccessibleRoute { origin: Location, destination: Location, distance_m: f64 },
    Found(RouteSummary),
}

impl RouteOutcome {
    /// Short machine-friendly name of the variant, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            RouteOutcome::MissingSelection          => "missing_selection",
            RouteOutcome::SameLocation { .. }       => "same_location",
            RouteOutcome::NoRoute { .. }            => "no_route",
            RouteOutcome::NoAccessibleRoute { .. }  => "no_accessible_route",
            RouteOutcome::Found(_)                  => "found",
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, RouteOutcome::Found(_))
    }

    pub fn summary(&self) -> Option<&RouteSummary> {
        match self {
            RouteOutcome::Found(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for RouteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteOutcome::MissingSelection => f.write_str(
                "Please select both starting point and destination to find your route.",
            ),
            RouteOutcome::SameLocation { .. } => {
                f.write_str("Starting point and destination cannot be the same location.")
            }
            RouteOutcome::NoRoute { origin, destination } => write!(
                f,
                "No route found between {origin} and {destination}. \
                 Please check if both locations exist."
            ),
            RouteOutcome::NoAccessibleRoute { .. } => f.write_str(
                "No fully accessible route found. Try disabling the accessibility \
                 filter or choose different locations.",
            ),
            RouteOutcome::Found(summary) => fmt::Display::fmt(summary, f),
        }
    }
}
