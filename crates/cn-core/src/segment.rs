//! Route segments and edge-set snapshots.

use std::sync::Arc;

use crate::{Location, SegmentId};

// ── Segment ───────────────────────────────────────────────────────────────────

/// One walkable route segment between two locations.
///
/// Segments are undirected: the graph builder materialises both traversal
/// directions with the same distance and accessibility flag.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// Record id from the edge store, if it had one.
    pub id:         Option<SegmentId>,
    pub start:      Location,
    pub end:        Location,
    /// Length in metres.  Must be finite and non-negative to be usable.
    pub distance_m: f64,
    /// `true` if the segment is wheelchair accessible.
    pub accessible: bool,
}

impl Segment {
    pub fn new(
        start: impl Into<Location>,
        end: impl Into<Location>,
        distance_m: f64,
        accessible: bool,
    ) -> Self {
        Self {
            id: None,
            start: start.into(),
            end: end.into(),
            distance_m,
            accessible,
        }
    }

    pub fn with_id(mut self, id: SegmentId) -> Self {
        self.id = Some(id);
        self
    }

    /// `true` if the segment may contribute edges to a graph: finite,
    /// non-negative distance and non-blank endpoints.
    pub fn is_usable(&self) -> bool {
        self.distance_m.is_finite()
            && self.distance_m >= 0.0
            && !self.start.is_blank()
            && !self.end.is_blank()
    }

    #[inline]
    pub fn is_self_loop(&self) -> bool {
        self.start == self.end
    }
}

// ── EdgeSnapshot ──────────────────────────────────────────────────────────────

/// An immutable view of the edge store at one point in time.
///
/// `revision` identifies the edge-set version: two snapshots with equal
/// revisions hold the same segments, so a graph built from one may serve
/// the other.  Cloning is cheap (the segment list is shared).
#[derive(Clone, Debug)]
pub struct EdgeSnapshot {
    revision: u64,
    segments: Arc<[Segment]>,
}

impl EdgeSnapshot {
    pub fn new(revision: u64, segments: impl Into<Arc<[Segment]>>) -> Self {
        Self { revision, segments: segments.into() }
    }

    /// An empty snapshot at revision 0.
    pub fn empty() -> Self {
        Self::new(0, Vec::<Segment>::new())
    }

    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
