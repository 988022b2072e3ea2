//! `lr-locate` — stateless "where am I on this route" queries for the
//! `lineref` toolkit.
//!
//! Consumes the immutable route model assembled by `lr-route` and answers
//! arbitrary GPS fixes with the nearest route point, the enclosing segment
//! and way, bracketing stops, and progress percentages.
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`locator`] | `RouteLocator`, `RouteLocation` and its parts         |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | [`RouteLocator::locate_batch`] fans out on a Rayon pool.|
//! | `serde`    | Propagates serde derives to the route model records.    |

pub mod locator;


pub use locator::{LocatedSegment, LocatedWay, RouteLocation, RouteLocator, StopBracket};
