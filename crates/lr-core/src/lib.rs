//! `lr-core` — foundational types for the `lineref` route toolkit.
//!
//! This crate is a dependency of every other `lr-*` crate.  It intentionally
//! has no `lr-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                                    |
//! |-----------|-------------------------------------------------------------|
//! | [`ids`]   | `NodeId`, `WayId` (OSM element identifiers)                 |
//! | [`geo`]   | `GeoPoint`, haversine distance, bearing, segment projection |
//! | [`role`]  | `MemberRole` (route path vs. the six stop/platform roles)   |
//! | [`error`] | `CoreError`, `CoreResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod role;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{CardinalDirection, GeoPoint, SegmentProjection};
pub use ids::{NodeId, WayId};
pub use role::MemberRole;
