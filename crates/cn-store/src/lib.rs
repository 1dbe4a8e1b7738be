//! `cn-store`: the edge-store boundary of the `campus_nav` route engine.
//!
//! Persisted route records are a table of
//! `id, start_location, end_location, distance_m, accessible`.  This crate
//! turns that table into `cn_core::Segment`s and hands the engine immutable
//! [`EdgeSnapshot`](cn_core::EdgeSnapshot)s; nothing downstream depends on
//! the storage format.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`loader`] | `load_segments_csv`, `load_segments_reader`, `write_segments_csv`, `LoadReport` |
//! | [`store`]  | `SegmentStore` trait, `MemorySegmentStore`, `CsvSegmentStore` |
//! | [`stats`]  | `RouteStats`, `location_directory`                         |
//! | [`error`]  | `StoreError`, `StoreResult<T>`                             |

pub mod error;
pub mod loader;
pub mod stats;
pub mod store;

#[cfg(test)]
mod tests;

pub use error::{StoreError, StoreResult};
pub use loader::{LoadReport, load_segments_csv, load_segments_reader, write_segments_csv};
pub use stats::{RouteStats, location_directory};
pub use store::{CsvSegmentStore, MemorySegmentStore, SegmentStore};
