//! Campus route graph and builder.
//!
//! # Data layout
//!
//! Locations are interned to dense `VertexId`s in ascending lexicographic
//! order of name.  Outgoing adjacency entries use **Compressed Sparse Row
//! (CSR)** format; given a `VertexId v`, its entries occupy the slice:
//!
//! ```text
//! edge_to[ vertex_out_start[v] .. vertex_out_start[v+1] ]
//! ```
//!
//! Every usable segment contributes exactly two entries, `start → end` and
//! `end → start`, carrying the same distance and accessibility flag.
//! Parallel segments between the same pair are all kept.  Within one
//! vertex the entries keep segment insertion order.

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use cn_core::{EdgeId, Location, Segment, VertexId};

use crate::{GraphError, GraphResult};

// ── CampusGraph ───────────────────────────────────────────────────────────────

/// Undirected route graph in CSR format.
///
/// Immutable once built: share it behind an `Arc` and rebuild from a fresh
/// snapshot when the edge data changes.  Edge arrays are `pub` for direct
/// indexed access in the search loop.
pub struct CampusGraph {
    // ── Vertex data ───────────────────────────────────────────────────────
    /// Location name of each vertex, sorted.  Indexed by `VertexId`.
    locations: Vec<Location>,
    index:     FxHashMap<Location, VertexId>,

    // ── CSR adjacency ─────────────────────────────────────────────────────
    /// CSR row pointer.  Length = `vertex_count + 1`.
    pub vertex_out_start: Vec<u32>,

    // ── Edge data (indexed by EdgeId) ─────────────────────────────────────
    /// Source vertex of each entry; used to walk predecessor edges back
    /// during path reconstruction.
    pub edge_from: Vec<VertexId>,

    pub edge_to: Vec<VertexId>,

    /// Segment length in metres.
    pub edge_distance_m: Vec<f64>,

    /// Wheelchair accessibility of the originating segment.
    pub edge_accessible: Vec<bool>,

    skipped_segments: usize,
}

impl CampusGraph {
    /// Construct a graph with no vertices.  Every search against it reports
    /// "no path".
    pub fn empty() -> Self {
        CampusGraphBuilder::new().build()
    }

    /// Build a graph from a segment list in one call.
    pub fn from_segments<'a, I>(segments: I) -> Self
    where
        I: IntoIterator<Item = &'a Segment>,
    {
        let mut b = CampusGraphBuilder::new();
        b.extend(segments);
        b.build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn vertex_count(&self) -> usize {
        self.locations.len()
    }

    /// Number of directed adjacency entries (twice the usable segments).
    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Segments that were rejected as unusable while building.
    pub fn skipped_segments(&self) -> usize {
        self.skipped_segments
    }

    // ── Vertex lookup ─────────────────────────────────────────────────────

    #[inline]
    pub fn vertex(&self, location: &str) -> Option<VertexId> {
        self.index.get(location).copied()
    }

    /// Like [`vertex`](Self::vertex) but reports unknown names as an error.
    pub fn require_vertex(&self, location: &Location) -> GraphResult<VertexId> {
        self.vertex(location.as_str())
            .ok_or_else(|| GraphError::UnknownLocation(location.clone()))
    }

    pub fn contains(&self, location: &str) -> bool {
        self.index.contains_key(location)
    }

    #[inline]
    pub fn location(&self, vertex: VertexId) -> &Location {
        &self.locations[vertex.index()]
    }

    /// All locations with at least one usable segment, sorted by name.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s of all outgoing entries from `vertex`.
    #[inline]
    pub fn out_edges(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.vertex_out_start[vertex.index()] as usize;
        let end   = self.vertex_out_start[vertex.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    #[inline]
    pub fn out_degree(&self, vertex: VertexId) -> usize {
        let start = self.vertex_out_start[vertex.index()] as usize;
        let end   = self.vertex_out_start[vertex.index() + 1] as usize;
        end - start
    }
}

// ── CampusGraphBuilder ────────────────────────────────────────────────────────

/// Collect segments, then call [`build`](Self::build).
///
/// Unusable segments (non-finite or negative distance, blank endpoint) are
/// dropped at insertion and never reach the graph; a location that appears
/// only in such segments does not become a vertex.
///
/// # Example
///
/// ```
/// use cn_core::Segment;
/// use cn_graph::CampusGraphBuilder;
///
/// let mut b = CampusGraphBuilder::new();
/// b.add_segment(&Segment::new("Gate", "Library", 100.0, true));
/// b.add_segment(&Segment::new("Library", "Cafe", 50.0, true));
/// let graph = b.build();
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 4); // bidirectional
/// ```
pub struct CampusGraphBuilder {
    raw_edges: Vec<RawEdge>,
    skipped:   usize,
}

struct RawEdge {
    start:      Location,
    end:        Location,
    distance_m: f64,
    accessible: bool,
}

impl CampusGraphBuilder {
    pub fn new() -> Self {
        Self { raw_edges: Vec::new(), skipped: 0 }
    }

    pub fn with_capacity(segments: usize) -> Self {
        Self { raw_edges: Vec::with_capacity(segments), skipped: 0 }
    }

    /// Add one undirected segment.  Returns `false` if it was unusable and
    /// has been skipped.
    pub fn add_segment(&mut self, segment: &Segment) -> bool {
        if !segment.is_usable() {
            warn!(
                id = ?segment.id,
                start = %segment.start,
                end = %segment.end,
                distance_m = segment.distance_m,
                "skipping unusable route segment"
            );
            self.skipped += 1;
            return false;
        }
        self.raw_edges.push(RawEdge {
            start:      segment.start.clone(),
            end:        segment.end.clone(),
            distance_m: segment.distance_m,
            accessible: segment.accessible,
        });
        true
    }

    pub fn extend<'a, I>(&mut self, segments: I)
    where
        I: IntoIterator<Item = &'a Segment>,
    {
        for s in segments {
            self.add_segment(s);
        }
    }

    pub fn segment_count(&self) -> usize { self.raw_edges.len() }
    pub fn skipped_count(&self) -> usize { self.skipped }

    /// Consume the builder and produce a frozen [`CampusGraph`].
    ///
    /// Time complexity: O(V log V + E log E).
    pub fn build(self) -> CampusGraph {
        // Intern locations in sorted order so VertexId order == name order.
        let mut locations: Vec<Location> = self
            .raw_edges
            .iter()
            .flat_map(|e| [e.start.clone(), e.end.clone()])
            .collect();
        locations.sort_unstable();
        locations.dedup();

        let index: FxHashMap<Location, VertexId> = locations
            .iter()
            .enumerate()
            .map(|(i, loc)| (loc.clone(), VertexId(i as u32)))
            .collect();

        // Both directions per segment.  Stable sort keeps insertion order
        // within each source vertex.
        let mut directed: Vec<(VertexId, VertexId, f64, bool)> =
            Vec::with_capacity(self.raw_edges.len() * 2);
        for e in &self.raw_edges {
            let a = index[&e.start];
            let b = index[&e.end];
            directed.push((a, b, e.distance_m, e.accessible));
            directed.push((b, a, e.distance_m, e.accessible));
        }
        directed.sort_by_key(|&(from, ..)| from);

        let vertex_count = locations.len();
        let mut vertex_out_start = vec![0u32; vertex_count + 1];
        for &(from, ..) in &directed {
            vertex_out_start[from.index() + 1] += 1;
        }
        for i in 1..=vertex_count {
            vertex_out_start[i] += vertex_out_start[i - 1];
        }
        debug_assert_eq!(vertex_out_start[vertex_count] as usize, directed.len());

        let edge_from       = directed.iter().map(|e| e.0).collect();
        let edge_to         = directed.iter().map(|e| e.1).collect();
        let edge_distance_m = directed.iter().map(|e| e.2).collect();
        let edge_accessible = directed.iter().map(|e| e.3).collect();

        debug!(
            vertices = vertex_count,
            edges = directed.len(),
            skipped = self.skipped,
            "built campus graph"
        );

        CampusGraph {
            locations,
            index,
            vertex_out_start,
            edge_from,
            edge_to,
            edge_distance_m,
            edge_accessible,
            skipped_segments: self.skipped,
        }
    }
}

impl Default for CampusGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
