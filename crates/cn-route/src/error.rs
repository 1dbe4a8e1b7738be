//! Route-planner error type.

use thiserror::Error;

use cn_core::CoreError;

/// Errors constructing a planner.  Answering a query never fails: every
/// business result is a [`RouteOutcome`](crate::RouteOutcome).
#[derive(Debug, Error)]
pub enum RouteError {
    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type RouteResult<T> = Result<T, RouteError>;
