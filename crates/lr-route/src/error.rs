//! Assembly and model errors.

use lr_core::{CoreError, WayId};
use thiserror::Error;

/// Errors raised while assembling a route or validating a route model.
#[derive(Debug, Error)]
pub enum RouteError {
    /// The relation has no route-forming (empty-role) ways.
    #[error("relation has no route-forming ways")]
    Empty,

    /// A route-forming way has fewer than two nodes.
    #[error("way {way} is degenerate: {nodes} node(s), need at least 2")]
    DegenerateSegment { way: WayId, nodes: usize },

    /// The greedy walk finished with ways left over: the route-forming ways
    /// do not connect into a single path.  `unused` is sorted by way id.
    #[error("route is fragmented, unconsumed ways: {unused:?}")]
    Fragmented { unused: Vec<WayId> },

    /// A route model (typically reloaded from persisted records) failed
    /// structural validation.
    #[error("invalid route model: {0}")]
    InvalidModel(String),

    /// Input coordinates or roles failed validation at the boundary.
    #[error(transparent)]
    Input(#[from] CoreError),
}

/// Shorthand result type for `lr-route` operations.
pub type RouteResult<T> = Result<T, RouteError>;
