//! Subcommand implementations.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;
use tracing::{info, warn};

use cn_core::{EdgeSnapshot, Location, NavConfig};
use cn_route::{RouteOutcome, RoutePlanner, RouteQuery};
use cn_store::{CsvSegmentStore, RouteStats, SegmentStore, load_segments_csv, location_directory};

pub fn query_from_args(
    from: Option<String>,
    to: Option<String>,
    accessible: bool,
    alternatives: bool,
) -> RouteQuery {
    RouteQuery {
        origin:                 from.map(Location::from),
        destination:            to.map(Location::from),
        accessibility_required: accessible,
        show_alternatives:      alternatives,
    }
}

pub fn find(routes: &Path, config: NavConfig, query: &RouteQuery, as_json: bool) -> Result<()> {
    let snapshot = snapshot(routes)?;
    let planner = RoutePlanner::new(config)?;
    let outcome = planner.plan(&snapshot, query);
    print_outcome(&outcome, as_json)
}

pub fn batch(routes: &Path, config: NavConfig, queries_path: &Path, as_json: bool) -> Result<()> {
    let text = std::fs::read_to_string(queries_path)
        .with_context(|| format!("reading queries {}", queries_path.display()))?;
    let queries: Vec<RouteQuery> = serde_json::from_str(&text)
        .with_context(|| format!("parsing queries {}", queries_path.display()))?;

    let snapshot = snapshot(routes)?;
    let planner = RoutePlanner::new(config)?;
    let outcomes = planner.plan_many(&snapshot, &queries);

    if as_json {
        let rows: Vec<_> = outcomes
            .iter()
            .map(|o| json!({ "message": o.to_string(), "outcome": o }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for (query, outcome) in queries.iter().zip(&outcomes) {
            let name = |l: &Option<Location>| l.as_ref().map_or("-", Location::as_str).to_owned();
            println!("# {} → {}", name(&query.origin), name(&query.destination));
            println!("{outcome}\n");
        }
    }
    Ok(())
}

pub fn locations(routes: &Path) -> Result<()> {
    let report = load_segments_csv(routes)
        .with_context(|| format!("loading routes {}", routes.display()))?;
    for location in location_directory(&report.segments) {
        println!("{location}");
    }
    Ok(())
}

pub fn stats(routes: &Path, as_json: bool) -> Result<()> {
    let report = load_segments_csv(routes)
        .with_context(|| format!("loading routes {}", routes.display()))?;
    let stats = RouteStats::from_segments(&report.segments);
    if as_json {
        let out = json!({ "stats": stats, "unusable_rows": report.unusable });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{stats}");
        if report.unusable > 0 {
            println!("Unusable Rows:     {}", report.unusable);
        }
    }
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn snapshot(routes: &Path) -> Result<EdgeSnapshot> {
    let snapshot = CsvSegmentStore::new(routes)
        .snapshot()
        .with_context(|| format!("loading routes {}", routes.display()))?;
    if snapshot.is_empty() {
        warn!(path = %routes.display(), "route table is empty or missing");
    } else {
        info!(segments = snapshot.len(), revision = snapshot.revision(), "loaded route table");
    }
    Ok(snapshot)
}

fn print_outcome(outcome: &RouteOutcome, as_json: bool) -> Result<()> {
    if as_json {
        let out = json!({ "message": outcome.to_string(), "outcome": outcome });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{outcome}");
    }
    Ok(())
}
