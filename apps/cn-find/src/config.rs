//! Engine configuration loading.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use cn_core::NavConfig;

/// Load a TOML config file, or the defaults when no path is given.
///
/// ```toml
/// walking_speed_mps    = 1.2
/// max_explored         = 5000
/// accessibility_policy = "constrained_search"
/// cache_graph          = true
/// ```
pub fn load(path: Option<&Path>) -> Result<NavConfig> {
    let Some(path) = path else {
        return Ok(NavConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: NavConfig = toml::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    info!(path = %path.display(), policy = %config.accessibility_policy, "loaded engine config");
    Ok(config)
}
