//! `cn-core`: foundational types for the `campus_nav` route engine.
//!
//! This crate is a dependency of every other `cn-*` crate.  It has no `cn-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`ids`]      | `VertexId`, `EdgeId`, `SegmentId`                      |
//! | [`location`] | `Location`                                             |
//! | [`segment`]  | `Segment`, `EdgeSnapshot`                              |
//! | [`config`]   | `NavConfig`, `AccessibilityPolicy`                     |
//! | [`error`]    | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod location;
pub mod segment;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{AccessibilityPolicy, DEFAULT_WALKING_SPEED_MPS, NavConfig};
pub use error::{CoreError, CoreResult};
pub use ids::{EdgeId, SegmentId, VertexId};
pub use location::Location;
pub use segment::{EdgeSnapshot, Segment};
