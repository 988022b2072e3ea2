//! tramline — end-to-end tour of the lineref toolkit.
//!
//! Assembles a synthetic L-shaped tram relation (shuffled, partly reversed
//! ways plus four stops), prints the resulting route model and guidance,
//! then answers a handful of location queries against it.  Swap the `line`
//! module for a fetched OSM relation to run against real data.

mod line;

use std::time::Instant;

use anyhow::Result;

use lr_core::GeoPoint;
use lr_locate::RouteLocator;
use lr_route::{assemble, extract_guidance, survey, GuidanceKind, Route};

use line::{build_relation, line_point};

// ── Constants ─────────────────────────────────────────────────────────────────

const BATCH_FIXES: usize = 10_000;

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp(None)
        .init();

    println!("=== tramline — lineref route toolkit ===");
    println!();

    // 1. Relation input, as the fetching layer would hand it over.
    let input = build_relation()?;
    println!(
        "Relation: {} route-forming ways, {} stop candidates",
        input.ways().len(),
        input.stops().len()
    );

    // 2. Connectivity survey before assembly.
    let report = survey(input.ways());
    println!(
        "Survey: {} terminal(s), {} junction(s), {} component(s), single path: {}",
        report.terminals.len(),
        report.junctions.len(),
        report.components,
        report.is_single_path()
    );
    println!();

    // 3. Assemble the route.
    let assembly = assemble(&input)?;
    for warning in &assembly.warnings {
        println!("warning: {warning:?}");
    }
    let route = assembly.route;
    println!(
        "Route: {} points over {} ways, {:.0} m total",
        route.points().len(),
        route.spans().len(),
        route.total_m()
    );
    for span in route.spans() {
        println!(
            "  {}  {:>6.0} m .. {:>6.0} m{}",
            span.way,
            span.start_m,
            span.end_m,
            if span.reversed { "  (reversed)" } else { "" }
        );
    }
    println!();

    // 4. Stops, ordered by distance from the route start.
    println!(
        "{:<14} {:>9} {:>9} {:>9} {:>9}",
        "Stop", "along m", "prev m", "next m", "offset m"
    );
    println!("{}", "-".repeat(56));
    for stop in route.stops() {
        println!(
            "{:<14} {:>9.0} {:>9} {:>9} {:>9.1}",
            stop.name.as_deref().unwrap_or("(unnamed)"),
            stop.along_m,
            stop.from_prev_m.map_or_else(|| "-".to_string(), |d| format!("{d:.0}")),
            stop.to_next_m.map_or_else(|| "-".to_string(), |d| format!("{d:.0}")),
            stop.offset_m
        );
    }
    println!();

    // 5. Guidance records.
    println!("Guidance:");
    for g in extract_guidance(&route) {
        let text = match g.kind {
            GuidanceKind::Depart { heading, .. } => format!("depart heading {heading}"),
            GuidanceKind::Turn { direction, severity, bearing_change_deg, .. } => {
                format!("{severity:?} {direction:?} turn ({bearing_change_deg:+.0}°)")
            }
            GuidanceKind::StopCall { stop } => format!("stop: {}", stop_name(&route, stop)),
            GuidanceKind::Arrive => "arrive".to_string(),
        };
        println!("  {:>6.0} m  {text}", g.along_m);
    }
    println!();

    // 6. Location queries.
    let locator = RouteLocator::new(route)?;
    let altstadt = locator.route().stops()[1].point;
    let (south_lat, south_lon) = line_point(62);
    let fixes = [
        ("at Altstadt", altstadt),
        ("mid east leg", GeoPoint::new(line::BASE_LAT + 0.0001, line::BASE_LON + 0.0063)),
        ("south leg", GeoPoint::new(south_lat, south_lon - 0.0004)),
        ("wrong city", GeoPoint::new(48.21, 16.37)),
    ];

    println!(
        "{:<14} {:>9} {:>8} {:>7}  {:<10} {}",
        "Fix", "offset m", "along m", "prog", "way", "between stops"
    );
    println!("{}", "-".repeat(76));
    for (label, point) in fixes {
        let loc = locator.locate(point);
        let between = match (loc.stops.prev, loc.stops.next) {
            (Some(p), Some(n)) => format!(
                "{} -> {} ({:.0}%)",
                stop_name(locator.route(), p),
                stop_name(locator.route(), n),
                loc.stops.progress_pct.unwrap_or(0.0)
            ),
            (Some(p), None) => format!("past {}", stop_name(locator.route(), p)),
            (None, Some(n)) => format!("before {}", stop_name(locator.route(), n)),
            (None, None) => "no stops".to_string(),
        };
        println!(
            "{:<14} {:>9.1} {:>8.0} {:>6.1}%  {:<10} {between}",
            label,
            loc.offset_m,
            loc.along_m,
            loc.progress_pct,
            loc.way.id.to_string()
        );
    }
    println!();

    // 7. Batch throughput over jittered fixes along the whole line.
    let queries: Vec<GeoPoint> = (0..BATCH_FIXES)
        .map(|i| {
            let (lat, lon) = line_point(i % line::POINTS);
            let jitter = if i % 2 == 0 { 0.0001 } else { -0.0001 };
            GeoPoint::new(lat + jitter, lon)
        })
        .collect();
    let t0 = Instant::now();
    let located = locator.locate_batch(&queries);
    let elapsed = t0.elapsed();
    println!(
        "Batch: {} fixes in {:.1} ms ({:.0} fixes/s)",
        located.len(),
        elapsed.as_secs_f64() * 1e3,
        located.len() as f64 / elapsed.as_secs_f64()
    );

    Ok(())
}

fn stop_name(route: &Route, stop: usize) -> &str {
    route.stops()[stop].name.as_deref().unwrap_or("(unnamed)")
}
