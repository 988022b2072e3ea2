//! Segment stitching: unordered route-forming ways in, one oriented
//! polyline out.
//!
//! The walk is a greedy graph traversal over an adjacency map keyed by node
//! id.  It never backtracks; once a way is chosen the path is final.  Ties
//! are broken by the candidate's far endpoint's remaining degree, then by
//! way id, so regenerated output is byte-stable for regression testing.

use log::{debug, info, warn};
use lr_core::{GeoPoint, NodeId, WayId};
use rustc_hash::FxHashMap;

use crate::diagnostics::survey;
use crate::error::{RouteError, RouteResult};
use crate::input::{RelationInput, RouteWay};
use crate::model::{nearest_on_points, Route, RoutePoint, Stop, WaySpan};

/// Assembly knobs.
#[derive(Clone, Debug)]
pub struct AssembleOptions {
    /// Perpendicular distance above which a stop's projection is flagged
    /// with [`AssemblyWarning::FarStop`], metres.
    pub stop_offset_warn_m: f64,
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self { stop_offset_warn_m: 150.0 }
    }
}

/// Non-fatal findings recorded during assembly.  The route is still built.
#[derive(Clone, Debug, PartialEq)]
pub enum AssemblyWarning {
    /// A stop's nearest route point is implausibly far away.  The stop is
    /// included regardless.
    FarStop { node: NodeId, offset_m: f64 },
    /// The walk had more than one viable continuation to pick from: a
    /// junction node (degree > 2), or the direction choice when a closed
    /// loop is seeded (degree 2).  The greedy tie-break stands; `degree`
    /// counts all incident ways, used or not.
    Branch { node: NodeId, degree: usize },
}

/// A successfully assembled route plus everything worth telling the caller.
#[derive(Clone, Debug)]
pub struct Assembly {
    pub route: Route,
    pub warnings: Vec<AssemblyWarning>,
}

/// Assemble with default options.  See [`assemble_with`].
pub fn assemble(input: &RelationInput) -> RouteResult<Assembly> {
    assemble_with(input, &AssembleOptions::default())
}

/// Assemble the relation's route-forming ways into one oriented polyline
/// and project its stop candidates onto it.
///
/// # Errors
///
/// - `RouteError::Empty` — no route-forming ways.
/// - `RouteError::DegenerateSegment` — a way with fewer than two nodes.
/// - `RouteError::Fragmented` — the ways do not connect into one path; no
///   partial route is returned.
pub fn assemble_with(input: &RelationInput, opts: &AssembleOptions) -> RouteResult<Assembly> {
    let ways = input.ways();
    if ways.is_empty() {
        return Err(RouteError::Empty);
    }
    for way in ways {
        if way.nodes.len() < 2 {
            return Err(RouteError::DegenerateSegment { way: way.id, nodes: way.nodes.len() });
        }
    }

    // ── Adjacency over way endpoints ──────────────────────────────────────
    //
    // node id → indices of incident ways.  A closed way (first == last node)
    // appears twice under its shared endpoint; the walk dedups below.
    let mut adjacency: FxHashMap<NodeId, Vec<usize>> = FxHashMap::default();
    let mut degree: FxHashMap<NodeId, usize> = FxHashMap::default();
    for (idx, way) in ways.iter().enumerate() {
        let (first, last) = endpoints(way);
        adjacency.entry(first).or_default().push(idx);
        adjacency.entry(last).or_default().push(idx);
        *degree.entry(first).or_default() += 1;
        *degree.entry(last).or_default() += 1;
    }

    // Start at a degree-1 endpoint (smallest id when there are several).
    // A closed loop has none; seed with the smallest endpoint id instead.
    let start = degree
        .iter()
        .filter(|&(_, &d)| d == 1)
        .map(|(&node, _)| node)
        .min()
        .or_else(|| degree.keys().copied().min());
    let Some(start) = start else {
        return Err(RouteError::Empty);
    };
    debug!("walk starts at node {start}");

    // ── Greedy walk ───────────────────────────────────────────────────────
    let mut used = vec![false; ways.len()];
    let mut raw: Vec<(NodeId, GeoPoint)> = Vec::new();
    let mut span_marks: Vec<(WayId, bool, usize, usize)> = Vec::new();
    let mut warnings: Vec<AssemblyWarning> = Vec::new();
    let mut frontier = start;
    let mut consumed = 0usize;

    while consumed < ways.len() {
        let mut unused_here: Vec<usize> = adjacency
            .get(&frontier)
            .map(|c| c.iter().copied().filter(|&i| !used[i]).collect())
            .unwrap_or_default();
        // Closed-way duplicates are pushed back-to-back, so dedup suffices.
        unused_here.dedup();

        if unused_here.is_empty() {
            break;
        }
        if unused_here.len() > 1 {
            let full_degree = adjacency.get(&frontier).map_or(0, Vec::len);
            warn!(
                "branch at node {frontier}: {} viable continuations (degree {full_degree})",
                unused_here.len()
            );
            warnings.push(AssemblyWarning::Branch { node: frontier, degree: full_degree });
        }

        // Lowest remaining degree of the far endpoint, then lowest way id.
        let mut chosen: Option<(usize, NodeId)> = None;
        let mut chosen_key = (usize::MAX, WayId(i64::MAX));
        for &idx in &unused_here {
            let (first, last) = endpoints(&ways[idx]);
            let other = if first == frontier { last } else { first };
            let key = (degree.get(&other).copied().unwrap_or(0), ways[idx].id);
            if key < chosen_key {
                chosen_key = key;
                chosen = Some((idx, other));
            }
        }
        let Some((idx, next_frontier)) = chosen else {
            break;
        };

        let way = &ways[idx];
        let (first, last) = endpoints(way);
        // Orient so the endpoint matching the frontier comes first.
        let reversed = first != frontier;
        debug_assert_eq!(if reversed { last } else { first }, frontier);

        // The first way seeds the polyline whole; later ways skip the
        // duplicate frontier node already present at the polyline's tail.
        let span_first = raw.len().saturating_sub(1);
        let skip = usize::from(!raw.is_empty());
        if reversed {
            raw.extend(way.nodes.iter().rev().skip(skip).map(|n| (n.id, n.point)));
        } else {
            raw.extend(way.nodes.iter().skip(skip).map(|n| (n.id, n.point)));
        }
        span_marks.push((way.id, reversed, span_first, raw.len() - 1));

        used[idx] = true;
        consumed += 1;
        for node in [first, last] {
            if let Some(d) = degree.get_mut(&node) {
                *d = d.saturating_sub(1);
            }
        }
        debug!(
            "consumed {} ({}) at node {frontier}, frontier moves to {next_frontier}",
            way.id,
            if reversed { "reversed" } else { "forward" },
        );
        frontier = next_frontier;
    }

    if consumed < ways.len() {
        let mut unused: Vec<WayId> = ways
            .iter()
            .enumerate()
            .filter(|&(i, _)| !used[i])
            .map(|(_, w)| w.id)
            .collect();
        unused.sort_unstable();
        let report = survey(ways);
        warn!(
            "walk starved at node {frontier}: {consumed} of {} ways consumed, \
             endpoint graph has {} component(s)",
            ways.len(),
            report.components,
        );
        return Err(RouteError::Fragmented { unused });
    }

    // ── Cumulative distances ──────────────────────────────────────────────
    let mut points: Vec<RoutePoint> = Vec::with_capacity(raw.len());
    let mut along_m = 0.0;
    for (node, point) in raw {
        if let Some(prev) = points.last() {
            along_m += prev.point.distance_m(point);
        }
        points.push(RoutePoint { node, point, along_m });
    }
    let total_m = along_m;

    let spans: Vec<WaySpan> = span_marks
        .into_iter()
        .map(|(way, reversed, first_point, last_point)| WaySpan {
            way,
            reversed,
            first_point,
            last_point,
            start_m: points[first_point].along_m,
            end_m: points[last_point].along_m,
        })
        .collect();

    // ── Stop projection ───────────────────────────────────────────────────
    let mut stops: Vec<Stop> = Vec::with_capacity(input.stops().len());
    for candidate in input.stops() {
        let nearest = nearest_on_points(&points, candidate.point)
            .ok_or_else(|| RouteError::InvalidModel("assembled polyline has no segments".into()))?;
        let offset_m = nearest.projection.offset_m;
        if offset_m > opts.stop_offset_warn_m {
            warn!(
                "stop {} ({}) projects {:.1} m off the route",
                candidate.node,
                candidate.name.as_deref().unwrap_or("unnamed"),
                offset_m,
            );
            warnings.push(AssemblyWarning::FarStop { node: candidate.node, offset_m });
        }
        stops.push(Stop {
            node: candidate.node,
            name: candidate.name.clone(),
            role: candidate.role,
            point: candidate.point,
            along_m: nearest.along_m.clamp(0.0, total_m),
            offset_m,
            from_prev_m: None,
            to_next_m: None,
        });
    }

    // Distance order is authoritative, not input order.
    stops.sort_by(|a, b| a.along_m.total_cmp(&b.along_m));
    let alongs: Vec<f64> = stops.iter().map(|s| s.along_m).collect();
    for (i, stop) in stops.iter_mut().enumerate() {
        stop.from_prev_m = (i > 0).then(|| alongs[i] - alongs[i - 1]);
        stop.to_next_m = (i + 1 < alongs.len()).then(|| alongs[i + 1] - alongs[i]);
    }

    let route = Route { points, spans, stops, total_m };
    debug_assert!(route.validate().is_ok());
    info!(
        "assembled route: {} ways, {} points, {} stops, {:.1} m",
        route.spans().len(),
        route.points().len(),
        route.stops().len(),
        route.total_m(),
    );

    Ok(Assembly { route, warnings })
}

#[inline]
fn endpoints(way: &RouteWay) -> (NodeId, NodeId) {
    (way.nodes[0].id, way.nodes[way.nodes.len() - 1].id)
}
