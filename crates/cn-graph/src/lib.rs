//! `cn-graph`: campus route graph, shortest-path search, and graph cache.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`network`] | `CampusGraph` (CSR), `CampusGraphBuilder`                   |
//! | [`finder`]  | `PathFinder` trait, `PathResult`, `DijkstraFinder`          |
//! | [`cache`]   | `GraphCache` (one frozen graph per edge-set revision)       |
//! | [`error`]   | `GraphError`, `GraphResult<T>`                              |

pub mod cache;
pub mod error;
pub mod finder;
pub mod network;


pub use cache::GraphCache;
pub use error::{GraphError, GraphResult};
pub use finder::{DijkstraFinder, PathFinder, PathResult};
pub use network::{CampusGraph, CampusGraphBuilder};
