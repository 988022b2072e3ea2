//! `lr-route` — relation input, segment stitching, and the route model for
//! the `lineref` toolkit.
//!
//! The pipeline: the fetching layer feeds relation members into
//! [`RelationInput`]; [`assemble`] stitches the route-forming ways into one
//! oriented, cumulative-distance-indexed polyline and projects the stop
//! candidates onto it; the resulting [`Route`] is the immutable model that
//! `lr-locate` answers queries against.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`input`]       | `RelationInput`, `RouteWay`, `StopCandidate`          |
//! | [`assemble`]    | greedy stitching walk, `Assembly`, warnings           |
//! | [`model`]       | `Route`, `RoutePoint`, `WaySpan`, `Stop`, validation  |
//! | [`diagnostics`] | `ConnectivityReport` over the endpoint graph          |
//! | [`guidance`]    | structured turn/stop guidance records                 |
//! | [`error`]       | `RouteError`, `RouteResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to the route/stop records.    |

pub mod assemble;
pub mod diagnostics;
pub mod error;
pub mod guidance;
pub mod input;
pub mod model;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use assemble::{assemble, assemble_with, AssembleOptions, Assembly, AssemblyWarning};
pub use diagnostics::{survey, ConnectivityReport, Junction};
pub use error::{RouteError, RouteResult};
pub use guidance::{
    extract_guidance, extract_guidance_with, GuidanceKind, GuidanceOptions, GuidancePoint,
    TurnDirection, TurnSeverity,
};
pub use input::{RelationInput, RouteWay, StopCandidate, WayNode};
pub use model::{NearestPoint, Route, RoutePoint, Stop, WaySpan};
