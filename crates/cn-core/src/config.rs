//! Engine configuration.

use crate::{CoreError, CoreResult};

/// Average walking speed used for time estimates, in metres per second.
pub const DEFAULT_WALKING_SPEED_MPS: f64 = 1.4;

// ── AccessibilityPolicy ───────────────────────────────────────────────────────

/// How an accessibility-required query is answered.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AccessibilityPolicy {
    /// Find the shortest path ignoring accessibility, then reject it if any
    /// edge on it is inaccessible.  A longer, fully accessible alternative is
    /// never substituted.
    #[default]
    PostFilter,
    /// Search only accessible edges when accessibility is required.
    ConstrainedSearch,
}

impl AccessibilityPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            AccessibilityPolicy::PostFilter        => "post_filter",
            AccessibilityPolicy::ConstrainedSearch => "constrained_search",
        }
    }
}

impl std::fmt::Display for AccessibilityPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── NavConfig ─────────────────────────────────────────────────────────────────

/// Route engine configuration.
///
/// Typically loaded from a TOML file by the application crate; every field
/// has a default so a partial file is fine.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct NavConfig {
    /// Walking speed for time estimates (m/s).  Default: 1.4.
    pub walking_speed_mps: f64,

    /// Upper bound on vertices settled per search.  `None` = unbounded.
    /// A search that hits the bound reports "no route".
    pub max_explored: Option<usize>,

    pub accessibility_policy: AccessibilityPolicy,

    /// Reuse a built graph across queries while the edge-set revision is
    /// unchanged.
    pub cache_graph: bool,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            walking_speed_mps:    DEFAULT_WALKING_SPEED_MPS,
            max_explored:         None,
            accessibility_policy: AccessibilityPolicy::PostFilter,
            cache_graph:          true,
        }
    }
}

impl NavConfig {
    /// Check field ranges.  Call once after loading a config file.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.walking_speed_mps.is_finite() || self.walking_speed_mps <= 0.0 {
            return Err(CoreError::Config(format!(
                "walking_speed_mps must be a positive number, got {}",
                self.walking_speed_mps
            )));
        }
        if self.max_explored == Some(0) {
            return Err(CoreError::Config(
                "max_explored must be at least 1 when set".to_owned(),
            ));
        }
        Ok(())
    }

    /// Walking time in seconds for `distance_m` metres.
    #[inline]
    pub fn walking_secs(&self, distance_m: f64) -> f64 {
        distance_m / self.walking_speed_mps
    }
}
