//! Structured en-route guidance extracted from the assembled polyline.
//!
//! Bearing is sampled over a coarse window so gentle curvature does not read
//! as a manoeuvre.  Output is a distance-ordered list of structured records;
//! rendering them as text belongs to the caller.

use lr_core::geo::bearing_change_deg;
use lr_core::{CardinalDirection, GeoPoint, NodeId};

use crate::model::Route;

/// Turn-detection knobs.  Defaults are tuned for the node spacing of
/// urban tram and bus ways.
#[derive(Clone, Debug)]
pub struct GuidanceOptions {
    /// Sampling stride through the polyline, points.
    pub step: usize,
    /// How many points back the pre-turn bearing reaches.
    pub lookback: usize,
    /// How many points ahead the post-turn bearing reaches.
    pub lookahead: usize,
    /// Minimum bearing change treated as a turn, degrees.
    pub min_turn_deg: f64,
    /// Bearing change above which a turn stops being slight, degrees.
    pub normal_turn_deg: f64,
    /// Bearing change above which a turn counts as sharp, degrees.
    pub sharp_turn_deg: f64,
}

impl Default for GuidanceOptions {
    fn default() -> Self {
        Self {
            step: 10,
            lookback: 10,
            lookahead: 20,
            min_turn_deg: 40.0,
            normal_turn_deg: 60.0,
            sharp_turn_deg: 100.0,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TurnDirection {
    Left,
    Right,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TurnSeverity {
    Slight,
    Normal,
    Sharp,
}

/// What happens at a guidance point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GuidanceKind {
    /// Start of the route with the initial heading.
    Depart { bearing_deg: f64, heading: CardinalDirection },
    Turn {
        direction: TurnDirection,
        severity: TurnSeverity,
        /// Signed bearing change, positive to the right.
        bearing_change_deg: f64,
        heading_after: CardinalDirection,
    },
    /// Passing the stop at this index of [`Route::stops`].
    StopCall { stop: usize },
    /// End of the route.
    Arrive,
}

/// One guidance record, anchored to a route position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GuidancePoint {
    pub kind: GuidanceKind,
    pub point: GeoPoint,
    pub along_m: f64,
    pub node: NodeId,
}

/// Extract guidance with default options.  See [`extract_guidance_with`].
pub fn extract_guidance(route: &Route) -> Vec<GuidancePoint> {
    extract_guidance_with(route, &GuidanceOptions::default())
}

/// Walk the polyline with a windowed bearing comparison, emit a record per
/// significant turn, and merge stop calls plus depart/arrive marks into one
/// list sorted by distance from the route start.
pub fn extract_guidance_with(route: &Route, opts: &GuidanceOptions) -> Vec<GuidancePoint> {
    let points = route.points();
    let mut out: Vec<GuidancePoint> = Vec::new();
    if points.len() < 2 {
        return out;
    }

    // Initial heading looks two points ahead to smooth the very first hop.
    if points.len() >= 3 {
        let bearing = points[0].point.bearing_deg(points[2].point);
        out.push(GuidancePoint {
            kind: GuidanceKind::Depart {
                bearing_deg: bearing,
                heading: CardinalDirection::from_bearing_deg(bearing),
            },
            point: points[0].point,
            along_m: 0.0,
            node: points[0].node,
        });
    }

    let step = opts.step.max(1);
    let lookahead = opts.lookahead.max(1);
    let lookback = opts.lookback;

    let mut i = lookback;
    while i + lookahead < points.len() {
        let pre = points[i - lookback].point.bearing_deg(points[i].point);
        let post = points[i].point.bearing_deg(points[i + lookahead].point);
        let change = bearing_change_deg(pre, post);

        if change.abs() >= opts.min_turn_deg {
            let direction = if change > 0.0 { TurnDirection::Right } else { TurnDirection::Left };
            let severity = if change.abs() > opts.sharp_turn_deg {
                TurnSeverity::Sharp
            } else if change.abs() > opts.normal_turn_deg {
                TurnSeverity::Normal
            } else {
                TurnSeverity::Slight
            };
            out.push(GuidancePoint {
                kind: GuidanceKind::Turn {
                    direction,
                    severity,
                    bearing_change_deg: change,
                    heading_after: CardinalDirection::from_bearing_deg(post),
                },
                point: points[i].point,
                along_m: points[i].along_m,
                node: points[i].node,
            });
            // Jump past the manoeuvre so one corner is not reported twice.
            i += lookahead;
            continue;
        }
        i += step;
    }

    for (idx, stop) in route.stops().iter().enumerate() {
        out.push(GuidancePoint {
            kind: GuidanceKind::StopCall { stop: idx },
            point: stop.point,
            along_m: stop.along_m,
            node: stop.node,
        });
    }

    let last = &points[points.len() - 1];
    out.push(GuidancePoint {
        kind: GuidanceKind::Arrive,
        point: last.point,
        along_m: last.along_m,
        node: last.node,
    });

    out.sort_by(|a, b| a.along_m.total_cmp(&b.along_m));
    out
}
