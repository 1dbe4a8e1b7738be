//! `cn-route`: route queries, outcome presentation, and the planner.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`query`]   | `RouteQuery`                                                |
//! | [`outcome`] | `RouteOutcome`, `RouteSummary`, `WalkingTime`, `AccessibilityClass` |
//! | [`present`] | `screen`, `present`: pure derivation from a `PathResult`   |
//! | [`planner`] | `RoutePlanner`: screen, graph, search, present             |
//! | [`error`]   | `RouteError`, `RouteResult<T>`                              |
//!
//! # Example
//!
//! ```
//! use cn_core::{EdgeSnapshot, NavConfig, Segment};
//! use cn_route::{RouteOutcome, RoutePlanner, RouteQuery};
//!
//! let snapshot = EdgeSnapshot::new(1, vec![
//!     Segment::new("Gate", "Lib", 100.0, true),
//!     Segment::new("Lib", "Cafe", 50.0, true),
//! ]);
//! let planner = RoutePlanner::new(NavConfig::default()).unwrap();
//! let outcome = planner.plan(&snapshot, &RouteQuery::new("Gate", "Cafe"));
//! assert_eq!(outcome.summary().unwrap().distance_m, 150.0);
//! assert!(matches!(
//!     planner.plan(&snapshot, &RouteQuery::new("Gate", "Museum")),
//!     RouteOutcome::NoRoute { .. }
//! ));
//! ```
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | `RoutePlanner::plan_many` runs on the Rayon pool.         |
//! | `serde`    | Derives `Serialize`/`Deserialize` on queries and outcomes. |

pub mod error;
pub mod outcome;
pub mod planner;
pub mod present;
pub mod query;


pub use error::{RouteError, RouteResult};
pub use outcome::{AccessibilityClass, RouteOutcome, RouteSummary, WalkingTime};
pub use planner::RoutePlanner;
pub use present::{present, screen};
pub use query::RouteQuery;
