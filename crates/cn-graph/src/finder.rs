//! Path-finding trait and default Dijkstra implementation.
//!
//! # Tie-breaking
//!
//! Frontier entries with equal tentative distance pop in ascending
//! `VertexId` order, which is the lexicographic order of location names.
//! A vertex keeps the first predecessor that reached it at its final
//! distance (relaxation uses strict `<`).
//!
//! Parallel segments of equal length between the same two locations give
//! the same path; the accessible one is preferred so the accessibility
//! trail does not depend on segment order.  Otherwise the first segment in
//! input order wins.
//!
//! # Missing vertices
//!
//! Searches never fail.  An origin or destination that is not in the graph,
//! an empty graph, a disconnected pair, or a search that hits its
//! exploration bound all produce a result with no path.  The last case is
//! flagged with `PathResult::bound_reached` so callers can tell "gave up"
//! apart from "does not exist".

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::{debug, warn};

use cn_core::{EdgeId, Location, VertexId};

use crate::GraphResult;
use crate::network::CampusGraph;

// ── PathResult ────────────────────────────────────────────────────────────────

/// Raw output of a shortest-path search.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    /// Total length in metres; `f64::INFINITY` when no path exists.
    pub total_distance_m: f64,
    /// Locations from origin to destination inclusive; empty when no path.
    pub path: Vec<Location>,
    /// Accessibility of each traversed edge, `path.len() - 1` entries.
    pub edge_accessibility: Vec<bool>,
    /// The search stopped at its exploration bound before settling the
    /// destination.  Always `false` for a found path.
    pub bound_reached: bool,
}

impl PathResult {
    pub fn no_path() -> Self {
        Self {
            total_distance_m:   f64::INFINITY,
            path:               Vec::new(),
            edge_accessibility: Vec::new(),
            bound_reached:      false,
        }
    }

    /// No path, because the exploration bound was hit first.
    pub fn bound_reached() -> Self {
        Self { bound_reached: true, ..Self::no_path() }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        self.total_distance_m.is_finite()
    }

    /// Number of edges traversed.
    pub fn segment_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// `true` if every traversed edge is accessible (vacuously for an empty
    /// trail).
    pub fn is_fully_accessible(&self) -> bool {
        self.edge_accessibility.iter().all(|&a| a)
    }

    /// `true` if the fields agree with each other: a found result has a
    /// non-empty path with one trail entry per edge, a missing one has
    /// neither.
    pub fn is_consistent(&self) -> bool {
        if self.is_found() {
            !self.bound_reached
                && !self.path.is_empty()
                && self.edge_accessibility.len() + 1 == self.path.len()
        } else {
            self.total_distance_m == f64::INFINITY
                && self.path.is_empty()
                && self.edge_accessibility.is_empty()
        }
    }
}

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
///
/// Implementations must be `Send + Sync` so a single finder can answer
/// queries from several threads against shared graphs.
pub trait PathFinder: Send + Sync {
    /// Find the shortest path from `origin` to `destination`.
    ///
    /// Never fails: unknown locations and unreachable pairs yield
    /// [`PathResult::no_path`].  `origin == destination` yields distance 0
    /// and the single-element path `[origin]`.
    fn find_path(&self, graph: &CampusGraph, origin: &Location, destination: &Location)
        -> PathResult;
}

// ── DijkstraFinder ────────────────────────────────────────────────────────────

/// Dijkstra's algorithm over the CSR campus graph, using segment distance
/// as cost.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraFinder {
    accessible_only: bool,
    max_explored:    Option<usize>,
}

impl DijkstraFinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A finder that only traverses accessible edges.
    pub fn accessible_only() -> Self {
        Self { accessible_only: true, max_explored: None }
    }

    /// Give up (returning "no path") once `limit` vertices have been
    /// settled without reaching the destination.
    pub fn with_max_explored(mut self, limit: Option<usize>) -> Self {
        self.max_explored = limit;
        self
    }

    pub fn is_accessible_only(&self) -> bool {
        self.accessible_only
    }
}

impl PathFinder for DijkstraFinder {
    fn find_path(
        &self,
        graph: &CampusGraph,
        origin: &Location,
        destination: &Location,
    ) -> PathResult {
        match endpoints(graph, origin, destination) {
            Ok((from, to)) => self.search(graph, from, to),
            Err(e) => {
                debug!(error = %e, "no path");
                PathResult::no_path()
            }
        }
    }
}

fn endpoints(
    graph: &CampusGraph,
    origin: &Location,
    destination: &Location,
) -> GraphResult<(VertexId, VertexId)> {
    Ok((graph.require_vertex(origin)?, graph.require_vertex(destination)?))
}

/// Min-heap frontier entry.  Ordered so `BinaryHeap` pops the smallest
/// distance first and, among equal distances, the smallest `VertexId`.
#[derive(Copy, Clone, Debug)]
struct Frontier {
    dist_m: f64,
    vertex: VertexId,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist_m
            .total_cmp(&self.dist_m)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl DijkstraFinder {
    fn search(&self, graph: &CampusGraph, from: VertexId, to: VertexId) -> PathResult {
        let n = graph.vertex_count();
        let mut dist      = vec![f64::INFINITY; n];
        let mut prev_edge = vec![EdgeId::INVALID; n];
        let mut visited   = vec![false; n];
        let mut settled   = 0usize;

        dist[from.index()] = 0.0;
        let mut heap = BinaryHeap::new();
        heap.push(Frontier { dist_m: 0.0, vertex: from });

        while let Some(Frontier { dist_m, vertex }) = heap.pop() {
            if visited[vertex.index()] {
                continue;
            }
            visited[vertex.index()] = true;
            settled += 1;

            if vertex == to {
                debug!(settled, distance_m = dist_m, "path found");
                return reconstruct(graph, &prev_edge, from, to, dist_m);
            }

            if let Some(limit) = self.max_explored {
                if settled >= limit {
                    warn!(
                        limit,
                        origin = %graph.location(from),
                        destination = %graph.location(to),
                        "search exploration bound reached"
                    );
                    return PathResult::bound_reached();
                }
            }

            for edge in graph.out_edges(vertex) {
                if self.accessible_only && !graph.edge_accessible[edge.index()] {
                    continue;
                }
                let neighbor = graph.edge_to[edge.index()];
                if visited[neighbor.index()] {
                    continue;
                }
                let candidate = dist_m + graph.edge_distance_m[edge.index()];
                if candidate < dist[neighbor.index()] {
                    dist[neighbor.index()] = candidate;
                    prev_edge[neighbor.index()] = edge;
                    heap.push(Frontier { dist_m: candidate, vertex: neighbor });
                } else if candidate == dist[neighbor.index()]
                    && prefers_parallel(graph, prev_edge[neighbor.index()], edge)
                {
                    prev_edge[neighbor.index()] = edge;
                }
            }
        }

        debug!(settled, "no path");
        PathResult::no_path()
    }
}

/// `true` if `edge` leaves the same vertex as `current` and is accessible
/// where `current` is not.
fn prefers_parallel(graph: &CampusGraph, current: EdgeId, edge: EdgeId) -> bool {
    current != EdgeId::INVALID
        && graph.edge_from[current.index()] == graph.edge_from[edge.index()]
        && graph.edge_accessible[edge.index()]
        && !graph.edge_accessible[current.index()]
}

fn reconstruct(
    graph: &CampusGraph,
    prev_edge: &[EdgeId],
    from: VertexId,
    to: VertexId,
    total_distance_m: f64,
) -> PathResult {
    let mut edges = Vec::new();
    let mut cur = to;
    while cur != from {
        let e = prev_edge[cur.index()];
        debug_assert!(e != EdgeId::INVALID, "settled vertex without predecessor");
        edges.push(e);
        cur = graph.edge_from[e.index()];
    }
    edges.reverse();

    let mut path = Vec::with_capacity(edges.len() + 1);
    path.push(graph.location(from).clone());
    path.extend(edges.iter().map(|e| graph.location(graph.edge_to[e.index()]).clone()));
    let edge_accessibility = edges.iter().map(|e| graph.edge_accessible[e.index()]).collect();

    PathResult { total_distance_m, path, edge_accessibility, bound_reached: false }
}
