//! The assembled route model.
//!
//! A `Route` is a cumulative-distance-indexed polyline plus the ordered stop
//! list and the per-way spans the polyline was stitched from.  It is built
//! once by the assembler (or reconstructed from persisted records), then only
//! read; republishing a rebuilt model replaces it wholesale.

use lr_core::geo::{project_onto_segment, SegmentProjection};
use lr_core::{GeoPoint, MemberRole, NodeId, WayId};

use crate::error::{RouteError, RouteResult};

/// One polyline point with its cumulative distance from the route start.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutePoint {
    pub node: NodeId,
    pub point: GeoPoint,
    /// Great-circle distance from the route start, metres.
    pub along_m: f64,
}

/// The contiguous run of polyline points contributed by one consumed way.
///
/// Spans chain: each span's first point is the previous span's last point
/// (the shared junction node), so together they cover the whole polyline.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaySpan {
    pub way: WayId,
    /// True when the way's node order was flipped during assembly.
    pub reversed: bool,
    /// Index of the span's first polyline point.
    pub first_point: usize,
    /// Index of the span's last polyline point (inclusive).
    pub last_point: usize,
    /// Cumulative distance at `first_point`, metres.
    pub start_m: f64,
    /// Cumulative distance at `last_point`, metres.
    pub end_m: f64,
}

impl WaySpan {
    /// Length of the way as traversed by the route, metres.
    #[inline]
    pub fn len_m(&self) -> f64 {
        self.end_m - self.start_m
    }
}

/// A stop projected onto the route and ordered by distance from its start.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    pub node: NodeId,
    pub name: Option<String>,
    pub role: MemberRole,
    /// The stop's own position (not the projected route point).
    pub point: GeoPoint,
    /// Distance from the route start to the stop's projection, metres.
    pub along_m: f64,
    /// Perpendicular distance from the stop to the route, metres.
    pub offset_m: f64,
    /// Distance from the previous stop; `None` for the first stop.
    pub from_prev_m: Option<f64>,
    /// Distance to the next stop; `None` for the last stop.
    pub to_next_m: Option<f64>,
}

/// Nearest point on the route polyline to a query coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NearestPoint {
    /// Index of the polyline segment (pair `points[i]`, `points[i + 1]`).
    pub segment: usize,
    pub projection: SegmentProjection,
    /// Distance from the route start to the projected point, metres.
    pub along_m: f64,
}

impl NearestPoint {
    /// Project `query` onto polyline segment `segment`.
    ///
    /// The caller keeps `segment` in range: `points` must hold at least
    /// `segment + 2` entries.  Stop projection and the locator both come
    /// through here, so their distance arithmetic cannot drift apart.
    pub fn from_segment(points: &[RoutePoint], segment: usize, query: GeoPoint) -> Self {
        let a = &points[segment];
        let b = &points[segment + 1];
        let projection = project_onto_segment(query, a.point, b.point);
        NearestPoint {
            segment,
            projection,
            along_m: a.along_m + projection.fraction * (b.along_m - a.along_m),
        }
    }
}

/// The assembled route: polyline, way spans, ordered stops, total length.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub(crate) points: Vec<RoutePoint>,
    pub(crate) spans: Vec<WaySpan>,
    pub(crate) stops: Vec<Stop>,
    pub(crate) total_m: f64,
}

impl Route {
    /// Reconstruct a route from persisted records, validating it.
    ///
    /// Total length is taken from the last point's cumulative distance.
    ///
    /// # Errors
    ///
    /// `RouteError::InvalidModel` when the records do not form a consistent
    /// model (see [`Route::validate`]).
    pub fn from_parts(
        points: Vec<RoutePoint>,
        spans: Vec<WaySpan>,
        stops: Vec<Stop>,
    ) -> RouteResult<Self> {
        let total_m = points.last().map_or(0.0, |p| p.along_m);
        let route = Route { points, spans, stops, total_m };
        route.validate()?;
        Ok(route)
    }

    /// Ordered polyline points with cumulative distances.
    pub fn points(&self) -> &[RoutePoint] {
        &self.points
    }

    /// Per-way spans in traversal order.
    pub fn spans(&self) -> &[WaySpan] {
        &self.spans
    }

    /// Stops ordered by distance from the route start.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Total route length, metres.
    #[inline]
    pub fn total_m(&self) -> f64 {
        self.total_m
    }

    /// Length of polyline segment `segment`, metres.
    #[inline]
    pub fn segment_len_m(&self, segment: usize) -> f64 {
        self.points[segment + 1].along_m - self.points[segment].along_m
    }

    /// The span containing cumulative distance `along_m` and its index,
    /// preferring the earlier span at shared boundaries.  `None` when
    /// `along_m` lies outside `[0, total_m]`.
    pub fn way_at(&self, along_m: f64) -> Option<(usize, &WaySpan)> {
        self.spans
            .iter()
            .enumerate()
            .find(|(_, s)| s.start_m <= along_m && along_m <= s.end_m)
    }

    /// Structural validation for models that crossed a serialization
    /// boundary.  Assembled routes satisfy this by construction.
    ///
    /// # Errors
    ///
    /// `RouteError::InvalidModel` naming the first violated rule.
    pub fn validate(&self) -> RouteResult<()> {
        fn invalid<T>(msg: String) -> RouteResult<T> {
            Err(RouteError::InvalidModel(msg))
        }

        if self.points.len() < 2 {
            return invalid(format!("{} polyline point(s), need at least 2", self.points.len()));
        }
        for (i, p) in self.points.iter().enumerate() {
            if !p.point.is_finite() || !p.along_m.is_finite() {
                return invalid(format!("non-finite values at point {i}"));
            }
        }
        if self.points[0].along_m != 0.0 {
            return invalid(format!(
                "cumulative distance starts at {}, expected 0",
                self.points[0].along_m
            ));
        }
        for w in self.points.windows(2) {
            if w[1].along_m < w[0].along_m {
                return invalid(format!(
                    "cumulative distance decreases at node {}",
                    w[1].node
                ));
            }
        }
        if self.total_m != self.points[self.points.len() - 1].along_m {
            return invalid("total length disagrees with last cumulative distance".into());
        }

        if self.spans.is_empty() {
            return invalid("no way spans".into());
        }
        let mut expected_first = 0usize;
        for (i, s) in self.spans.iter().enumerate() {
            if s.first_point != expected_first || s.last_point <= s.first_point {
                return invalid(format!("span {i} ({}) breaks the span chain", s.way));
            }
            if s.last_point >= self.points.len() {
                return invalid(format!("span {i} ({}) exceeds the polyline", s.way));
            }
            if s.start_m != self.points[s.first_point].along_m
                || s.end_m != self.points[s.last_point].along_m
            {
                return invalid(format!("span {i} ({}) distances disagree with points", s.way));
            }
            expected_first = s.last_point;
        }
        if self.spans[self.spans.len() - 1].last_point != self.points.len() - 1 {
            return invalid("span chain does not reach the last point".into());
        }

        for (i, stop) in self.stops.iter().enumerate() {
            if !stop.along_m.is_finite() || stop.along_m < 0.0 || stop.along_m > self.total_m {
                return invalid(format!("stop {i} ({}) outside the route", stop.node));
            }
            if i > 0 && stop.along_m < self.stops[i - 1].along_m {
                return invalid(format!("stop {i} ({}) breaks distance ordering", stop.node));
            }
        }

        Ok(())
    }
}

/// Shared nearest-point scan over a polyline slice.
///
/// Strict `<` comparison keeps the earliest segment on exact offset ties.
pub(crate) fn nearest_on_points(points: &[RoutePoint], query: GeoPoint) -> Option<NearestPoint> {
    if points.len() < 2 {
        return None;
    }
    let mut best = NearestPoint::from_segment(points, 0, query);
    for segment in 1..points.len() - 1 {
        let candidate = NearestPoint::from_segment(points, segment, query);
        if candidate.projection.offset_m < best.projection.offset_m {
            best = candidate;
        }
    }
    Some(best)
}
