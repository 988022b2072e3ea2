//! Synthetic "Line 3" tram relation: an L-shaped line through a grid city,
//! handed over exactly the way the relation-fetching layer would.
//!
//! The ways arrive shuffled and one of them is stored against the direction
//! of travel, which is how OSM route relations routinely look in the wild.

use lr_core::{NodeId, WayId};
use lr_route::{RelationInput, RouteResult};

/// Polyline index of the 90° corner.
pub const CORNER: usize = 40;
/// Total polyline points (indices `0..POINTS`).
pub const POINTS: usize = 80;

pub const BASE_LAT: f64 = 47.37;
pub const BASE_LON: f64 = 8.54;
const SPACING_DEG: f64 = 0.0005;

/// Coordinates of polyline point `i`: east along a parallel to the corner,
/// then due south.
pub fn line_point(i: usize) -> (f64, f64) {
    if i <= CORNER {
        (BASE_LAT, BASE_LON + i as f64 * SPACING_DEG)
    } else {
        (
            BASE_LAT - (i - CORNER) as f64 * SPACING_DEG,
            BASE_LON + CORNER as f64 * SPACING_DEG,
        )
    }
}

/// Build the relation: four route-forming ways (shuffled, one reversed) and
/// four stop candidates, one implausibly far from the track.
pub fn build_relation() -> RouteResult<RelationInput> {
    let mut input = RelationInput::new();

    add_way(&mut input, 503, 40, 60, false)?;
    add_way(&mut input, 501, 0, 25, false)?;
    add_way(&mut input, 504, 60, 79, false)?;
    add_way(&mut input, 502, 25, 40, true)?;

    let (lat, lon) = line_point(4);
    input.add_stop_node(NodeId(9001), "stop", lat + 0.0001, lon, Some("Bahnhofplatz"))?;
    let (lat, lon) = line_point(28);
    input.add_stop_node(NodeId(9002), "platform", lat + 0.00012, lon, Some("Altstadt"))?;
    let (lat, lon) = line_point(55);
    input.add_stop_node(NodeId(9003), "stop", lat, lon + 0.00009, Some("Universität"))?;
    // ~220 m east of the track; trips the far-stop check on purpose.
    let (lat, lon) = line_point(74);
    input.add_stop_node(NodeId(9004), "platform_exit_only", lat, lon + 0.003, Some("Hafen"))?;

    Ok(input)
}

/// Add points `from..=to` as one way, optionally stored back-to-front.
fn add_way(
    input: &mut RelationInput,
    way: i64,
    from: usize,
    to: usize,
    reversed: bool,
) -> RouteResult<()> {
    let mut indices: Vec<usize> = (from..=to).collect();
    if reversed {
        indices.reverse();
    }
    input.add_way(
        WayId(way),
        "",
        None,
        indices.into_iter().map(|i| {
            let (lat, lon) = line_point(i);
            (NodeId(1000 + i as i64), lat, lon)
        }),
    )
}
