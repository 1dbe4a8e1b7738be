//! Revision-keyed cache of the most recently built graph.
//!
//! Graphs are frozen behind `Arc`: a query that obtained a graph keeps using
//! it even if another thread rebuilds the cache for a newer revision, so a
//! single search never mixes adjacency from two edge-set versions.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

use cn_core::EdgeSnapshot;

use crate::network::CampusGraph;

struct CachedGraph {
    revision: u64,
    graph:    Arc<CampusGraph>,
}

/// Holds at most one built graph, tagged with the snapshot revision it was
/// built from.
#[derive(Default)]
pub struct GraphCache {
    slot: Mutex<Option<CachedGraph>>,
}

impl GraphCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached graph if it was built from `snapshot`'s revision,
    /// otherwise build one from the snapshot and cache it.
    ///
    /// The lock is held while building so concurrent misses on the same
    /// revision build once.  It is released before the caller searches.
    pub fn get_or_build(&self, snapshot: &EdgeSnapshot) -> Arc<CampusGraph> {
        let mut slot = self.lock();
        if let Some(cached) = slot.as_ref() {
            if cached.revision == snapshot.revision() {
                return Arc::clone(&cached.graph);
            }
        }

        debug!(revision = snapshot.revision(), segments = snapshot.len(), "rebuilding cached graph");
        let graph = Arc::new(CampusGraph::from_segments(snapshot.segments()));
        *slot = Some(CachedGraph { revision: snapshot.revision(), graph: Arc::clone(&graph) });
        graph
    }

    /// Drop the cached graph; the next lookup rebuilds.
    pub fn invalidate(&self) {
        *self.lock() = None;
    }

    /// Revision of the cached graph, if any.
    pub fn cached_revision(&self) -> Option<u64> {
        self.lock().as_ref().map(|c| c.revision)
    }

    // A panic while building leaves the slot untouched, so a poisoned lock
    // still guards a valid value.
    fn lock(&self) -> MutexGuard<'_, Option<CachedGraph>> {
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
