//! Route-record CSV loader and writer.
//!
//! # CSV format
//!
//! One row per undirected route segment.
//!
//! ```csv
//! id,start_location,end_location,distance_m,accessible
//! 1,Main Gate,Library,100,true
//! 2,Library,Cafeteria,50,True
//! 3,Library,Old Annex,,false
//! ```
//!
//! | Column           | Parsing                                              |
//! |------------------|------------------------------------------------------|
//! | `id`             | optional `u64`; anything else becomes "no id"        |
//! | `start_location` | location name; blank makes the row unusable          |
//! | `end_location`   | location name; blank makes the row unusable          |
//! | `distance_m`     | finite, non-negative `f64`; otherwise NaN (unusable) |
//! | `accessible`     | `true` iff the text is "true" in any letter case     |
//!
//! Every row becomes a [`Segment`].  A row whose distance is missing or
//! unusable gets `distance_m = NaN` (never 0) and is counted in
//! [`LoadReport::unusable`]; it still names its locations and counts as a
//! route, but the graph builder will not give it an edge.  Only structural
//! problems (I/O, missing columns, ragged rows) are errors.

use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use cn_core::{EdgeSnapshot, Location, Segment, SegmentId};

use crate::StoreResult;

/// Column order used when writing.
pub const ROUTE_COLUMNS: [&str; 5] = ["id", "start_location", "end_location", "distance_m", "accessible"];

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RouteRecord {
    #[serde(default)]
    id:             Option<String>,
    start_location: String,
    end_location:   String,
    #[serde(default)]
    distance_m:     Option<String>,
    #[serde(default)]
    accessible:     Option<String>,
}

#[derive(Serialize)]
struct RouteRow<'a> {
    id:             Option<u64>,
    start_location: &'a str,
    end_location:   &'a str,
    distance_m:     f64,
    accessible:     bool,
}

// ── LoadReport ────────────────────────────────────────────────────────────────

/// All rows of a route table, plus how many of them are unusable.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub segments: Vec<Segment>,
    pub unusable: usize,
}

impl LoadReport {
    /// The rows that may contribute graph edges.
    pub fn usable(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.segments.iter().filter(|s| s.is_usable())
    }

    pub fn into_snapshot(self, revision: u64) -> EdgeSnapshot {
        EdgeSnapshot::new(revision, self.segments)
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load route segments from a CSV file.
pub fn load_segments_csv(path: &Path) -> StoreResult<LoadReport> {
    let file = std::fs::File::open(path)?;
    load_segments_reader(file)
}

/// Like [`load_segments_csv`] but accepts any `Read` source.
pub fn load_segments_reader<R: Read>(reader: R) -> StoreResult<LoadReport> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut report = LoadReport::default();
    for (row, result) in csv_reader.deserialize::<RouteRecord>().enumerate() {
        let segment = to_segment(result?);
        if !segment.is_usable() {
            // +2: one for the header, one for 1-based numbering.
            warn!(row = row + 2, "route row has an unusable distance or location");
            report.unusable += 1;
        }
        report.segments.push(segment);
    }

    debug!(segments = report.segments.len(), unusable = report.unusable, "loaded route table");
    Ok(report)
}

/// Write segments in the route-table column layout, header included.
pub fn write_segments_csv<W: Write>(writer: W, segments: &[Segment]) -> StoreResult<()> {
    let mut w = csv::Writer::from_writer(writer);
    if segments.is_empty() {
        w.write_record(ROUTE_COLUMNS)?;
    }
    for s in segments {
        w.serialize(RouteRow {
            id:             s.id.map(|id| id.0),
            start_location: s.start.as_str(),
            end_location:   s.end.as_str(),
            distance_m:     s.distance_m,
            accessible:     s.accessible,
        })?;
    }
    w.flush()?;
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn to_segment(record: RouteRecord) -> Segment {
    Segment {
        id:         record.id.as_deref().and_then(parse_id),
        start:      Location::from(record.start_location),
        end:        Location::from(record.end_location),
        distance_m: record.distance_m.as_deref().and_then(parse_distance).unwrap_or(f64::NAN),
        accessible: record.accessible.as_deref().is_some_and(parse_accessible),
    }
}

/// Finite, non-negative metres, or `None`.
pub fn parse_distance(s: &str) -> Option<f64> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|d| d.is_finite() && *d >= 0.0)
}

/// Case-insensitive "true"; everything else is `false`.
pub fn parse_accessible(s: &str) -> bool {
    s.trim().eq_ignore_ascii_case("true")
}

fn parse_id(s: &str) -> Option<SegmentId> {
    s.trim().parse::<u64>().ok().map(SegmentId)
}
