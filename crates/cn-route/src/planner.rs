//! End-to-end query answering: screen, build or reuse a graph, search,
//! present.

use std::sync::Arc;

use tracing::debug;

use cn_core::{AccessibilityPolicy, EdgeSnapshot, Location, NavConfig, Segment};
use cn_graph::{CampusGraph, DijkstraFinder, GraphCache, PathFinder, PathResult};

use crate::outcome::RouteOutcome;
use crate::present::{present, screen};
use crate::query::RouteQuery;
use crate::RouteResult;

/// Answers [`RouteQuery`]s against edge snapshots.
///
/// Holds two finders: `finder` for ordinary searches and
/// `accessible_finder` for the constrained-search policy.  With
/// `NavConfig::cache_graph` set, the graph built for a snapshot revision is
/// reused until a snapshot with another revision arrives.
///
/// `RoutePlanner` is `Send + Sync`; share one across threads.
pub struct RoutePlanner<F: PathFinder = DijkstraFinder> {
    config:            NavConfig,
    finder:            F,
    accessible_finder: F,
    cache:             GraphCache,
}

impl RoutePlanner<DijkstraFinder> {
    /// Planner with Dijkstra finders bounded by `config.max_explored`.
    pub fn new(config: NavConfig) -> RouteResult<Self> {
        let finder = DijkstraFinder::new().with_max_explored(config.max_explored);
        let accessible = DijkstraFinder::accessible_only().with_max_explored(config.max_explored);
        Self::with_finders(config, finder, accessible)
    }
}

impl<F: PathFinder> RoutePlanner<F> {
    /// Planner with custom finders.  `accessible_finder` must only traverse
    /// accessible edges; it is used only under
    /// [`AccessibilityPolicy::ConstrainedSearch`].
    pub fn with_finders(config: NavConfig, finder: F, accessible_finder: F) -> RouteResult<Self> {
        config.validate()?;
        Ok(Self { config, finder, accessible_finder, cache: GraphCache::new() })
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// Answer one query against `snapshot`.
    pub fn plan(&self, snapshot: &EdgeSnapshot, query: &RouteQuery) -> RouteOutcome {
        if let Some(outcome) = screen(query) {
            debug!(outcome = outcome.kind(), "query answered without search");
            return outcome;
        }
        let graph = self.graph_for(snapshot);
        self.plan_on(&graph, query)
    }

    /// Answer one query against a bare segment list (always builds a fresh
    /// graph).
    pub fn plan_segments(&self, segments: &[Segment], query: &RouteQuery) -> RouteOutcome {
        if let Some(outcome) = screen(query) {
            return outcome;
        }
        let graph = CampusGraph::from_segments(segments);
        self.plan_on(&graph, query)
    }

    /// Answer a batch of queries against one snapshot, sharing one graph.
    /// Results are in query order.
    pub fn plan_many(&self, snapshot: &EdgeSnapshot, queries: &[RouteQuery]) -> Vec<RouteOutcome> {
        let graph = self.graph_for(snapshot);

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            queries.par_iter().map(|q| self.plan_on(&graph, q)).collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            queries.iter().map(|q| self.plan_on(&graph, q)).collect()
        }
    }

    /// Answer a query against an already built graph.
    pub fn plan_on(&self, graph: &CampusGraph, query: &RouteQuery) -> RouteOutcome {
        let Some((origin, destination)) = query.selection() else {
            return RouteOutcome::MissingSelection;
        };
        if origin == destination {
            return screen(query).unwrap_or(RouteOutcome::MissingSelection);
        }
        if query.show_alternatives {
            debug!("alternative routes requested; only the shortest route is computed");
        }

        let result = self.search(graph, origin, destination, query.accessibility_required);
        let outcome = present(query, &result, &self.config);
        debug!(%origin, %destination, outcome = outcome.kind(), "route query answered");
        outcome
    }

    fn search(
        &self,
        graph: &CampusGraph,
        origin: &Location,
        destination: &Location,
        accessibility_required: bool,
    ) -> PathResult {
        let constrained = accessibility_required
            && self.config.accessibility_policy == AccessibilityPolicy::ConstrainedSearch;
        if !constrained {
            return self.finder.find_path(graph, origin, destination);
        }

        let accessible = self.accessible_finder.find_path(graph, origin, destination);
        if accessible.is_found() || accessible.bound_reached {
            // Bound hit: no route, whatever the unconstrained search finds.
            return accessible;
        }
        // No accessible route.  The unconstrained search tells "no route at
        // all" apart from "only inaccessible routes"; in the latter case its
        // path contains an inaccessible edge and is rejected by `present`.
        self.finder.find_path(graph, origin, destination)
    }

    fn graph_for(&self, snapshot: &EdgeSnapshot) -> Arc<CampusGraph> {
        if self.config.cache_graph {
            self.cache.get_or_build(snapshot)
        } else {
            Arc::new(CampusGraph::from_segments(snapshot.segments()))
        }
    }
}
