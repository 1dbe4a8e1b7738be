//! Graph-subsystem error type.

use thiserror::Error;

use cn_core::Location;

/// Errors produced by `cn-graph`.
///
/// Searches never fail; only the strict lookup API reports errors.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("location {0:?} is not part of the route graph")]
    UnknownLocation(Location),
}

pub type GraphResult<T> = Result<T, GraphError>;
