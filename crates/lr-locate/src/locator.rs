//! Stateless location queries against an assembled route.
//!
//! [`RouteLocator`] checks its model once at construction; after that every
//! query is a pure read over immutable data, so one locator can serve any
//! number of concurrent callers without locking.  Rebuilding a route yields
//! a fresh locator that replaces the old one wholesale.

use log::warn;
use lr_core::{GeoPoint, NodeId, WayId};
use lr_route::{NearestPoint, Route, RouteResult};

/// Where a query falls within one polyline segment (consecutive point pair).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LocatedSegment {
    /// Index of the segment formed by `points[index]` and `points[index + 1]`.
    pub index: usize,
    pub start_node: NodeId,
    pub end_node: NodeId,
    /// Metres from the segment's start node to the nearest point.
    pub into_m: f64,
    /// Position within the segment as a percentage of its length.
    pub pct: f64,
}

/// Which consumed way the nearest point falls on.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LocatedWay {
    /// Index into [`Route::spans`].
    pub index: usize,
    pub id: WayId,
    /// First node of the span in traversal order (not the way's stored
    /// order, which may have been reversed during assembly).
    pub start_node: NodeId,
    pub end_node: NodeId,
    /// Metres from the span's start to the nearest point.
    pub into_m: f64,
    pub pct: f64,
}

/// The stops bracketing a route position.
///
/// Missing brackets stay `None`; they are never defaulted to the nearest
/// existing stop.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StopBracket {
    /// Index into [`Route::stops`] of the last stop at or before the
    /// position.  `None` before the first stop.
    pub prev: Option<usize>,
    /// Index of the first stop strictly past the position.  `None` after
    /// the last stop.
    pub next: Option<usize>,
    /// Distance between the two bracketing stops, metres.
    pub gap_m: Option<f64>,
    /// Progress from `prev` towards `next`, percent.  `None` when either
    /// bracket is missing or both stops sit at the same distance.
    pub progress_pct: Option<f64>,
}

/// Everything known about one query's position on the route.  Created
/// fresh per query, read, and discarded.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RouteLocation {
    /// Nearest point on the route polyline.
    pub nearest: GeoPoint,
    /// Great-circle distance from the query to `nearest`, metres.
    pub offset_m: f64,
    /// Distance from the route start to `nearest`, metres.
    pub along_m: f64,
    /// `along_m` over the total route length, clamped to `[0, 100]`.
    pub progress_pct: f64,
    pub segment: LocatedSegment,
    pub way: LocatedWay,
    pub stops: StopBracket,
}

/// A validated route model plus the query machinery over it.
#[derive(Clone, Debug)]
pub struct RouteLocator {
    route: Route,
}

impl RouteLocator {
    /// Take ownership of `route`, validating it first.  Freshly assembled
    /// routes always pass; models reloaded from persisted records may not.
    ///
    /// # Errors
    ///
    /// `RouteError::InvalidModel` when the model fails structural checks.
    pub fn new(route: Route) -> RouteResult<Self> {
        route.validate()?;
        Ok(Self { route })
    }

    /// The underlying route model.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Locate `query` on the route.
    ///
    /// Total for any finite query coordinate: a fix far off the route comes
    /// back with a large `offset_m` rather than an error.  Exact projection
    /// ties between segments resolve to the earliest segment, so repeated
    /// queries are stable.
    pub fn locate(&self, query: GeoPoint) -> RouteLocation {
        let route = &self.route;
        let points = route.points();
        debug_assert!(points.len() >= 2, "validated model has at least one segment");

        // Project onto every consecutive pair; strict `<` keeps the
        // earliest segment on exact offset ties.
        let mut nearest = NearestPoint::from_segment(points, 0, query);
        for segment in 1..points.len() - 1 {
            let candidate = NearestPoint::from_segment(points, segment, query);
            if candidate.projection.offset_m < nearest.projection.offset_m {
                nearest = candidate;
            }
        }

        // A fraction of exactly 1.0 can overshoot the last cumulative
        // distance by a rounding step; the clamp keeps the position inside
        // the model's range.
        let along_m = nearest.along_m.clamp(0.0, route.total_m());

        let seg_start = points[nearest.segment];
        let seg_end = points[nearest.segment + 1];
        let segment = LocatedSegment {
            index: nearest.segment,
            start_node: seg_start.node,
            end_node: seg_end.node,
            into_m: nearest.projection.fraction * (seg_end.along_m - seg_start.along_m),
            pct: 100.0 * nearest.projection.fraction,
        };

        let progress_pct = if route.total_m() > 0.0 {
            (100.0 * along_m / route.total_m()).clamp(0.0, 100.0)
        } else {
            0.0
        };

        RouteLocation {
            nearest: nearest.projection.point,
            offset_m: nearest.projection.offset_m,
            along_m,
            progress_pct,
            segment,
            way: self.locate_way(along_m),
            stops: self.bracket_stops(along_m),
        }
    }

    /// Locate a batch of independent fixes.
    ///
    /// With the `parallel` Cargo feature the batch fans out on Rayon's
    /// thread pool; output order matches `queries` either way.
    pub fn locate_batch(&self, queries: &[GeoPoint]) -> Vec<RouteLocation> {
        #[cfg(not(feature = "parallel"))]
        {
            queries.iter().map(|&q| self.locate(q)).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            queries.par_iter().map(|&q| self.locate(q)).collect()
        }
    }

    /// Attribute a route position to the way span containing it.
    fn locate_way(&self, along_m: f64) -> LocatedWay {
        let route = &self.route;
        let spans = route.spans();
        let (index, span) = match route.way_at(along_m) {
            Some(found) => found,
            None => {
                // Spans cover [0, total] in a validated model, so this only
                // triggers for non-finite query coordinates.
                warn!("no way span covers {along_m} m, attributing to the last way");
                (spans.len() - 1, &spans[spans.len() - 1])
            }
        };

        let into_m = along_m - span.start_m;
        LocatedWay {
            index,
            id: span.way,
            start_node: route.points()[span.first_point].node,
            end_node: route.points()[span.last_point].node,
            into_m,
            pct: if span.len_m() > 0.0 { 100.0 * into_m / span.len_m() } else { 0.0 },
        }
    }

    /// Find the stops bracketing a route position.
    fn bracket_stops(&self, along_m: f64) -> StopBracket {
        let stops = self.route.stops();

        // Stops are ordered by distance, so the last one at or before the
        // position is a single forward scan away.
        let mut prev = None;
        for (i, stop) in stops.iter().enumerate() {
            if stop.along_m <= along_m {
                prev = Some(i);
            } else {
                break;
            }
        }
        let next = match prev {
            Some(i) if i + 1 < stops.len() => Some(i + 1),
            Some(_) => None,
            None if !stops.is_empty() => Some(0),
            None => None,
        };

        let (gap_m, progress_pct) = match (prev, next) {
            (Some(p), Some(n)) => {
                let gap = stops[n].along_m - stops[p].along_m;
                let progress = (gap > 0.0)
                    .then(|| 100.0 * (along_m - stops[p].along_m) / gap);
                (Some(gap), progress)
            }
            _ => (None, None),
        };

        StopBracket { prev, next, gap_m, progress_pct }
    }
}
