//! Edge-store error type.

use thiserror::Error;

/// Failures reading or writing persisted route records.
///
/// Individual rows with unusable values are not errors; the loader skips
/// and counts them.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("route CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
