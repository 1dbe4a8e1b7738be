//! Segment stores: the read side of the edge store as the engine sees it.
//!
//! A store hands out [`EdgeSnapshot`]s.  Each snapshot carries a revision
//! that changes whenever the underlying segments do, which is what the
//! graph cache keys on.

use std::hash::Hasher;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use rustc_hash::FxHasher;
use tracing::debug;

use cn_core::{EdgeSnapshot, Segment, SegmentId};

use crate::loader::load_segments_reader;
use crate::StoreResult;

// ── SegmentStore trait ────────────────────────────────────────────────────────

/// Source of edge-set snapshots.
pub trait SegmentStore: Send + Sync {
    /// Take a snapshot of the current segments.
    fn snapshot(&self) -> StoreResult<EdgeSnapshot>;
}

// ── MemorySegmentStore ────────────────────────────────────────────────────────

/// In-memory segment list.  Every mutation bumps the revision.
#[derive(Debug, Default)]
pub struct MemorySegmentStore {
    revision: u64,
    segments: Vec<Segment>,
}

impl MemorySegmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self { revision: 1, segments }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Add a segment, assigning it the next free id (one past the largest
    /// id in use) when it has none.  Returns the segment's id.
    pub fn insert(&mut self, mut segment: Segment) -> SegmentId {
        let id = *segment.id.get_or_insert_with(|| self.next_id());
        self.segments.push(segment);
        self.revision += 1;
        id
    }

    /// Replace the segment with `id`.  Returns `false` if there is none.
    pub fn update(&mut self, id: SegmentId, mut segment: Segment) -> bool {
        let Some(slot) = self.segments.iter_mut().find(|s| s.id == Some(id)) else {
            return false;
        };
        segment.id = Some(id);
        *slot = segment;
        self.revision += 1;
        true
    }

    pub fn remove(&mut self, id: SegmentId) -> Option<Segment> {
        let pos = self.segments.iter().position(|s| s.id == Some(id))?;
        self.revision += 1;
        Some(self.segments.remove(pos))
    }

    pub fn replace_all(&mut self, segments: Vec<Segment>) {
        self.segments = segments;
        self.revision += 1;
    }

    fn next_id(&self) -> SegmentId {
        let max = self.segments.iter().filter_map(|s| s.id).map(|id| id.0).max();
        SegmentId(max.map_or(1, |m| m + 1))
    }
}

impl SegmentStore for MemorySegmentStore {
    fn snapshot(&self) -> StoreResult<EdgeSnapshot> {
        Ok(EdgeSnapshot::new(self.revision, self.segments.clone()))
    }
}

// ── CsvSegmentStore ───────────────────────────────────────────────────────────

/// Route table on disk, re-read on every snapshot.
///
/// The revision is a hash of the file bytes, so an unchanged file keeps its
/// revision (and any cached graph) while any edit produces a new one.  A
/// missing file reads as an empty table.
#[derive(Debug, Clone)]
pub struct CsvSegmentStore {
    path: PathBuf,
}

impl CsvSegmentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SegmentStore for CsvSegmentStore {
    fn snapshot(&self) -> StoreResult<EdgeSnapshot> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "route table missing; using empty edge set");
                return Ok(EdgeSnapshot::empty());
            }
            Err(e) => return Err(e.into()),
        };

        let mut hasher = FxHasher::default();
        hasher.write(&bytes);
        let revision = hasher.finish();

        let report = load_segments_reader(bytes.as_slice())?;
        Ok(report.into_snapshot(revision))
    }
}
