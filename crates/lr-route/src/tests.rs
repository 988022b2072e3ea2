//! Unit tests for lr-route.
//!
//! Fixtures sit on the equator so 0.001° of longitude ≈ 111.195 m and the
//! expected distances stay hand-computable.

#[cfg(test)]
mod helpers {
    use lr_core::{NodeId, WayId};

    use crate::RelationInput;

    /// Add a route-forming (empty-role) way.  Nodes: (id, lat, lon).
    pub fn add_route_way(input: &mut RelationInput, id: i64, nodes: &[(i64, f64, f64)]) {
        input
            .add_way(
                WayId(id),
                "",
                None,
                nodes.iter().map(|&(n, lat, lon)| (NodeId(n), lat, lon)),
            )
            .unwrap();
    }

    /// Add a named stop node.
    pub fn add_stop(input: &mut RelationInput, node: i64, lat: f64, lon: f64, name: &str) {
        input
            .add_stop_node(NodeId(node), "stop", lat, lon, Some(name))
            .unwrap();
    }

    /// One way, three nodes on the equator:
    ///   1:(0, 0)   2:(0, 0.001)   3:(0, 0.002)
    pub fn straight_chain() -> RelationInput {
        let mut input = RelationInput::new();
        add_route_way(&mut input, 10, &[(1, 0.0, 0.0), (2, 0.0, 0.001), (3, 0.0, 0.002)]);
        input
    }
}

// ── Input contract ────────────────────────────────────────────────────────────

#[cfg(test)]
mod input {
    use lr_core::{MemberRole, NodeId, WayId};

    use crate::{RelationInput, RouteError};

    #[test]
    fn buckets_members_by_role() {
        let mut input = RelationInput::new();
        input
            .add_way(WayId(1), "", None, [(NodeId(1), 0.0, 0.0), (NodeId(2), 0.0, 0.001)])
            .unwrap();
        input
            .add_way(
                WayId(2),
                "platform",
                Some("Main St"),
                [(NodeId(5), 0.0, 0.0005), (NodeId(6), 0.0, 0.0006)],
            )
            .unwrap();
        input
            .add_stop_node(NodeId(7), "stop", 0.0, 0.001, Some("Depot"))
            .unwrap();

        assert_eq!(input.ways().len(), 1);
        assert_eq!(input.stops().len(), 2);

        // The platform way is positioned at its first node.
        let platform = &input.stops()[0];
        assert_eq!(platform.node, NodeId(5));
        assert_eq!(platform.role, MemberRole::Platform);
        assert_eq!(platform.name.as_deref(), Some("Main St"));
    }

    #[test]
    fn skips_unmodelled_roles() {
        let mut input = RelationInput::new();
        input
            .add_way(WayId(1), "forward", None, [(NodeId(1), 0.0, 0.0), (NodeId(2), 0.0, 0.001)])
            .unwrap();
        input.add_stop_node(NodeId(3), "", 0.0, 0.0, None).unwrap();

        assert!(input.is_empty());
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        let mut input = RelationInput::new();
        let result = input.add_way(
            WayId(1),
            "",
            None,
            [(NodeId(1), 95.0, 0.0), (NodeId(2), 0.0, 0.001)],
        );
        assert!(matches!(result, Err(RouteError::Input(_))));
    }

    #[test]
    fn stop_way_without_nodes_is_skipped() {
        let mut input = RelationInput::new();
        input
            .add_way(WayId(9), "platform", Some("Ghost"), std::iter::empty())
            .unwrap();
        assert!(input.stops().is_empty());
    }
}

// ── Assembly ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod assembly {
    use approx::assert_abs_diff_eq;
    use lr_core::{NodeId, WayId};

    use super::helpers::{add_route_way, add_stop, straight_chain};
    use crate::{assemble, AssemblyWarning, RelationInput, RouteError};

    #[test]
    fn single_way_chain() {
        let assembly = assemble(&straight_chain()).unwrap();
        let route = &assembly.route;

        let nodes: Vec<NodeId> = route.points().iter().map(|p| p.node).collect();
        assert_eq!(nodes, vec![NodeId(1), NodeId(2), NodeId(3)]);

        assert_eq!(route.spans().len(), 1);
        let span = &route.spans()[0];
        assert_eq!(span.way, WayId(10));
        assert!(!span.reversed);
        assert_eq!((span.first_point, span.last_point), (0, 2));
        assert_eq!(span.start_m, 0.0);
        assert_eq!(span.end_m, route.total_m());

        assert!(assembly.warnings.is_empty());
    }

    #[test]
    fn orients_second_way_head_to_tail() {
        // [A→B] and [C→B] share endpoint B but not head-to-tail; the second
        // way must be flipped to produce A,B,C.
        let mut input = RelationInput::new();
        add_route_way(&mut input, 10, &[(1, 0.0, 0.0), (2, 0.0, 0.001)]);
        add_route_way(&mut input, 11, &[(3, 0.0, 0.002), (2, 0.0, 0.001)]);

        let assembly = assemble(&input).unwrap();
        let route = &assembly.route;

        let nodes: Vec<NodeId> = route.points().iter().map(|p| p.node).collect();
        assert_eq!(nodes, vec![NodeId(1), NodeId(2), NodeId(3)]);

        assert_eq!(route.spans().len(), 2);
        assert!(!route.spans()[0].reversed);
        assert!(route.spans()[1].reversed);

        // Every input way id consumed exactly once.
        let mut ids: Vec<WayId> = route.spans().iter().map(|s| s.way).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![WayId(10), WayId(11)]);

        // Passing through B offers exactly one unused continuation, so no
        // branch gets flagged.
        assert!(assembly.warnings.is_empty());
    }

    #[test]
    fn reverses_first_way_when_start_demands_it() {
        // Way 10 runs B→A but the walk starts at terminal A (smallest
        // degree-1 node id), so the way is consumed reversed.
        let mut input = RelationInput::new();
        add_route_way(&mut input, 10, &[(2, 0.0, 0.001), (1, 0.0, 0.0)]);
        add_route_way(&mut input, 11, &[(2, 0.0, 0.001), (3, 0.0, 0.002)]);

        let assembly = assemble(&input).unwrap();
        let nodes: Vec<NodeId> = assembly.route.points().iter().map(|p| p.node).collect();
        assert_eq!(nodes, vec![NodeId(1), NodeId(2), NodeId(3)]);
        assert!(assembly.route.spans()[0].reversed);
        assert!(!assembly.route.spans()[1].reversed);
    }

    #[test]
    fn disconnected_pair_reports_unconsumed_way() {
        let mut input = RelationInput::new();
        add_route_way(&mut input, 21, &[(1, 0.0, 0.0), (2, 0.0, 0.001)]);
        add_route_way(&mut input, 22, &[(3, 0.0, 0.010), (4, 0.0, 0.011)]);

        let err = assemble(&input).unwrap_err();
        match err {
            RouteError::Fragmented { unused } => assert_eq!(unused, vec![WayId(22)]),
            other => panic!("expected Fragmented, got {other:?}"),
        }
    }

    #[test]
    fn multiple_fragments_all_listed() {
        // The walk consumes the first fragment and must list every way of
        // both remaining fragments, sorted by id.
        let mut input = RelationInput::new();
        add_route_way(&mut input, 23, &[(5, 0.0, 0.020), (6, 0.0, 0.021)]);
        add_route_way(&mut input, 21, &[(1, 0.0, 0.0), (2, 0.0, 0.001)]);
        add_route_way(&mut input, 22, &[(3, 0.0, 0.010), (4, 0.0, 0.011)]);

        let err = assemble(&input).unwrap_err();
        match err {
            RouteError::Fragmented { unused } => {
                assert_eq!(unused, vec![WayId(22), WayId(23)]);
            }
            other => panic!("expected Fragmented, got {other:?}"),
        }
    }

    #[test]
    fn closed_loop_seeds_at_smallest_node() {
        // Square loop 1-2-3-4-1; no degree-1 node exists, so the walk seeds
        // at node 1 and breaks the direction tie by lowest way id.
        let mut input = RelationInput::new();
        add_route_way(&mut input, 31, &[(1, 0.0, 0.0), (2, 0.0, 0.001)]);
        add_route_way(&mut input, 32, &[(2, 0.0, 0.001), (3, 0.001, 0.001)]);
        add_route_way(&mut input, 33, &[(3, 0.001, 0.001), (4, 0.001, 0.0)]);
        add_route_way(&mut input, 34, &[(4, 0.001, 0.0), (1, 0.0, 0.0)]);

        let assembly = assemble(&input).unwrap();
        let route = &assembly.route;

        let nodes: Vec<NodeId> = route.points().iter().map(|p| p.node).collect();
        assert_eq!(nodes, vec![NodeId(1), NodeId(2), NodeId(3), NodeId(4), NodeId(1)]);

        let mut ids: Vec<WayId> = route.spans().iter().map(|s| s.way).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![WayId(31), WayId(32), WayId(33), WayId(34)]);

        // The seed offers two directions around the loop; that ambiguity is
        // an intended Branch trigger even though node 1 is no junction.
        assert!(assembly
            .warnings
            .iter()
            .any(|w| matches!(w, AssemblyWarning::Branch { node: NodeId(1), degree: 2 })));
    }

    #[test]
    fn tie_break_prefers_low_degree_far_endpoint() {
        // At node 2 the walk can continue to 3 (remaining degree 2) or take
        // the spur to 9 (remaining degree 1).  The rule picks the spur, the
        // walk starves there, and the main line's remainder is reported.
        let mut input = RelationInput::new();
        add_route_way(&mut input, 51, &[(1, 0.0, 0.0), (2, 0.0, 0.001)]);
        add_route_way(&mut input, 52, &[(2, 0.0, 0.001), (3, 0.0, 0.002)]);
        add_route_way(&mut input, 53, &[(3, 0.0, 0.002), (4, 0.0, 0.003)]);
        add_route_way(&mut input, 54, &[(2, 0.0, 0.001), (9, 0.001, 0.001)]);

        let err = assemble(&input).unwrap_err();
        match err {
            RouteError::Fragmented { unused } => {
                assert_eq!(unused, vec![WayId(52), WayId(53)]);
            }
            other => panic!("expected Fragmented, got {other:?}"),
        }
    }

    #[test]
    fn tie_break_falls_back_to_way_id() {
        // Lasso: tail 1→2, loop 2-3-4-2.  At node 2 both continuations lead
        // to remaining-degree-2 endpoints, so the lower way id (62) wins and
        // the whole relation still assembles into one path.
        let mut input = RelationInput::new();
        add_route_way(&mut input, 61, &[(1, 0.0, 0.0), (2, 0.0, 0.001)]);
        add_route_way(&mut input, 62, &[(2, 0.0, 0.001), (3, 0.001, 0.001)]);
        add_route_way(&mut input, 63, &[(3, 0.001, 0.001), (4, 0.001, 0.002)]);
        add_route_way(&mut input, 64, &[(4, 0.001, 0.002), (2, 0.0, 0.001)]);

        let assembly = assemble(&input).unwrap();
        let route = &assembly.route;

        let nodes: Vec<NodeId> = route.points().iter().map(|p| p.node).collect();
        assert_eq!(
            nodes,
            vec![NodeId(1), NodeId(2), NodeId(3), NodeId(4), NodeId(2)],
        );
        assert!(assembly
            .warnings
            .iter()
            .any(|w| matches!(w, AssemblyWarning::Branch { node: NodeId(2), degree: 3 })));
    }

    #[test]
    fn empty_input_fails() {
        let mut input = RelationInput::new();
        add_stop(&mut input, 7, 0.0, 0.001, "Lonely");
        assert!(matches!(assemble(&input), Err(RouteError::Empty)));
    }

    #[test]
    fn degenerate_way_fails() {
        let mut input = RelationInput::new();
        add_route_way(&mut input, 40, &[(1, 0.0, 0.0)]);

        let err = assemble(&input).unwrap_err();
        assert!(matches!(
            err,
            RouteError::DegenerateSegment { way: WayId(40), nodes: 1 }
        ));
    }

    #[test]
    fn total_length_is_exact_sum_of_hops() {
        let mut input = RelationInput::new();
        add_route_way(&mut input, 10, &[(1, 0.0, 0.0), (2, 0.0, 0.001), (3, 0.0, 0.002)]);
        add_route_way(&mut input, 11, &[(3, 0.0, 0.002), (4, 0.001, 0.002)]);

        let route = assemble(&input).unwrap().route;
        let sum: f64 = route
            .points()
            .windows(2)
            .map(|w| w[0].point.distance_m(w[1].point))
            .sum();
        assert_eq!(route.total_m(), sum);
        assert_eq!(route.points().last().unwrap().along_m, sum);
    }

    #[test]
    fn stops_sorted_by_distance_with_neighbour_links() {
        let mut input = straight_chain();
        // Input order deliberately reversed relative to route order.
        add_stop(&mut input, 102, 0.00005, 0.0019, "Far stop");
        add_stop(&mut input, 101, -0.00005, 0.001, "Near stop");

        let route = assemble(&input).unwrap().route;
        let stops = route.stops();
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[0].node, NodeId(101));
        assert_eq!(stops[1].node, NodeId(102));
        assert!(stops[0].along_m < stops[1].along_m);

        // Perpendicular to node 2, one hop from the start.
        assert_abs_diff_eq!(stops[0].along_m, 111.195, epsilon = 1e-3);

        assert_eq!(stops[0].from_prev_m, None);
        assert_eq!(stops[1].to_next_m, None);
        assert_eq!(
            stops[0].to_next_m,
            Some(stops[1].along_m - stops[0].along_m),
        );
        assert_eq!(stops[0].to_next_m, stops[1].from_prev_m);

        assert!(stops[0].offset_m > 0.0);
    }

    #[test]
    fn far_stop_flagged_but_included() {
        let mut input = straight_chain();
        add_stop(&mut input, 103, 0.01, 0.001, "Implausible");

        let assembly = assemble(&input).unwrap();
        assert_eq!(assembly.route.stops().len(), 1);
        match assembly.warnings.as_slice() {
            [AssemblyWarning::FarStop { node, offset_m }] => {
                assert_eq!(*node, NodeId(103));
                // 0.01° of latitude off the track.
                assert_abs_diff_eq!(*offset_m, 1_111.95, epsilon = 0.01);
            }
            other => panic!("expected one FarStop warning, got {other:?}"),
        }
    }

    #[test]
    fn single_stop_has_no_neighbours() {
        let mut input = straight_chain();
        add_stop(&mut input, 101, 0.0, 0.0, "Origin");

        let route = assemble(&input).unwrap().route;
        let stop = &route.stops()[0];
        assert_eq!(stop.along_m, 0.0);
        assert_eq!(stop.from_prev_m, None);
        assert_eq!(stop.to_next_m, None);
    }
}

// ── Route model ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod model {
    use approx::assert_relative_eq;
    use lr_core::{GeoPoint, NodeId, WayId};

    use super::helpers::straight_chain;
    use crate::model::nearest_on_points;
    use crate::{assemble, Route, RouteError, RoutePoint, WaySpan};

    fn chain_points() -> Vec<RoutePoint> {
        assemble(&straight_chain()).unwrap().route.points().to_vec()
    }

    #[test]
    fn from_parts_round_trips_an_assembled_route() {
        let route = assemble(&straight_chain()).unwrap().route;
        let rebuilt = Route::from_parts(
            route.points().to_vec(),
            route.spans().to_vec(),
            route.stops().to_vec(),
        )
        .unwrap();
        assert_eq!(rebuilt, route);
    }

    #[test]
    fn from_parts_rejects_short_polyline() {
        let mut points = chain_points();
        points.truncate(1);
        let result = Route::from_parts(points, vec![], vec![]);
        assert!(matches!(result, Err(RouteError::InvalidModel(_))));
    }

    #[test]
    fn from_parts_rejects_decreasing_distance() {
        let mut points = chain_points();
        points[2].along_m = points[1].along_m - 1.0;
        let spans = vec![WaySpan {
            way: WayId(10),
            reversed: false,
            first_point: 0,
            last_point: 2,
            start_m: 0.0,
            end_m: points[2].along_m,
        }];
        let result = Route::from_parts(points, spans, vec![]);
        assert!(matches!(result, Err(RouteError::InvalidModel(_))));
    }

    #[test]
    fn from_parts_rejects_broken_span_chain() {
        let points = chain_points();
        // Span stops one point short of the polyline end.
        let spans = vec![WaySpan {
            way: WayId(10),
            reversed: false,
            first_point: 0,
            last_point: 1,
            start_m: 0.0,
            end_m: points[1].along_m,
        }];
        let result = Route::from_parts(points, spans, vec![]);
        assert!(matches!(result, Err(RouteError::InvalidModel(_))));
    }

    #[test]
    fn from_parts_rejects_non_finite_coordinates() {
        let mut points = chain_points();
        points[1].point = GeoPoint::new(f64::NAN, 0.001);
        let spans = vec![WaySpan {
            way: WayId(10),
            reversed: false,
            first_point: 0,
            last_point: 2,
            start_m: 0.0,
            end_m: points[2].along_m,
        }];
        let result = Route::from_parts(points, spans, vec![]);
        assert!(matches!(result, Err(RouteError::InvalidModel(_))));
    }

    #[test]
    fn nearest_scan_picks_the_right_segment() {
        let route = assemble(&straight_chain()).unwrap().route;
        let query = GeoPoint::new(0.0001, 0.0015);

        let nearest = nearest_on_points(route.points(), query).unwrap();
        assert_eq!(nearest.segment, 1);
        assert_relative_eq!(nearest.projection.fraction, 0.5, epsilon = 1e-9);
        assert!(nearest.along_m > route.points()[1].along_m);
        assert!(nearest.along_m < route.total_m());
    }

    #[test]
    fn nearest_scan_tie_keeps_earliest_segment() {
        // A query exactly on the shared node projects onto both segments
        // with offset 0; the earlier segment wins.
        let route = assemble(&straight_chain()).unwrap().route;
        let shared = route.points()[1];

        let nearest = nearest_on_points(route.points(), shared.point).unwrap();
        assert_eq!(nearest.segment, 0);
        assert_eq!(nearest.along_m, shared.along_m);
    }

    #[test]
    fn nearest_scan_refuses_degenerate_polylines() {
        let route = assemble(&straight_chain()).unwrap().route;
        assert!(nearest_on_points(&route.points()[..1], GeoPoint::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn way_at_prefers_earlier_span_on_boundaries() {
        let mut input = straight_chain();
        super::helpers::add_route_way(&mut input, 11, &[(3, 0.0, 0.002), (4, 0.0, 0.003)]);
        let route = assemble(&input).unwrap().route;

        let boundary = route.spans()[0].end_m;
        assert_eq!(route.way_at(0.0).unwrap().1.way, WayId(10));
        assert_eq!(route.way_at(boundary).unwrap().1.way, WayId(10));
        let (last_index, last_span) = route.way_at(route.total_m()).unwrap();
        assert_eq!((last_index, last_span.way), (1, WayId(11)));
        assert!(route.way_at(route.total_m() + 1.0).is_none());
    }

    #[test]
    fn points_keep_node_ids_and_segment_lengths() {
        let route = assemble(&straight_chain()).unwrap().route;
        assert_eq!(route.points()[0].node, NodeId(1));
        assert_eq!(route.segment_len_m(0), route.points()[1].along_m);
    }
}

// ── Connectivity diagnostics ──────────────────────────────────────────────────

#[cfg(test)]
mod connectivity {
    use lr_core::NodeId;

    use super::helpers::add_route_way;
    use crate::{survey, Junction, RelationInput};

    #[test]
    fn linear_chain_is_single_path() {
        let mut input = RelationInput::new();
        add_route_way(&mut input, 1, &[(1, 0.0, 0.0), (2, 0.0, 0.001)]);
        add_route_way(&mut input, 2, &[(2, 0.0, 0.001), (3, 0.0, 0.002)]);

        let report = survey(input.ways());
        assert_eq!(report.terminals, vec![NodeId(1), NodeId(3)]);
        assert!(report.junctions.is_empty());
        assert_eq!(report.components, 1);
        assert!(report.is_single_path());
    }

    #[test]
    fn closed_loop_is_single_path() {
        let mut input = RelationInput::new();
        add_route_way(&mut input, 1, &[(1, 0.0, 0.0), (2, 0.0, 0.001)]);
        add_route_way(&mut input, 2, &[(2, 0.0, 0.001), (3, 0.001, 0.001)]);
        add_route_way(&mut input, 3, &[(3, 0.001, 0.001), (1, 0.0, 0.0)]);

        let report = survey(input.ways());
        assert!(report.terminals.is_empty());
        assert_eq!(report.components, 1);
        assert!(report.is_single_path());
    }

    #[test]
    fn disconnected_ways_split_into_components() {
        let mut input = RelationInput::new();
        add_route_way(&mut input, 1, &[(1, 0.0, 0.0), (2, 0.0, 0.001)]);
        add_route_way(&mut input, 2, &[(3, 0.0, 0.010), (4, 0.0, 0.011)]);

        let report = survey(input.ways());
        assert_eq!(report.components, 2);
        assert!(!report.is_single_path());
    }

    #[test]
    fn wye_reports_junction_degree() {
        let mut input = RelationInput::new();
        add_route_way(&mut input, 1, &[(1, 0.0, 0.0), (2, 0.0, 0.001)]);
        add_route_way(&mut input, 2, &[(2, 0.0, 0.001), (3, 0.0, 0.002)]);
        add_route_way(&mut input, 3, &[(2, 0.0, 0.001), (4, 0.001, 0.001)]);

        let report = survey(input.ways());
        assert_eq!(report.junctions, vec![Junction { node: NodeId(2), degree: 3 }]);
        assert!(!report.is_single_path());
    }
}

// ── Guidance extraction ───────────────────────────────────────────────────────

#[cfg(test)]
mod guidance {
    use approx::assert_abs_diff_eq;
    use lr_core::{CardinalDirection, NodeId, WayId};

    use super::helpers::{add_stop, straight_chain};
    use crate::{
        assemble, extract_guidance, GuidanceKind, RelationInput, TurnDirection, TurnSeverity,
    };

    /// 60-point L: 30 points east along the equator, then 30 points south.
    fn l_shaped_input() -> RelationInput {
        let mut nodes: Vec<(NodeId, f64, f64)> = Vec::new();
        for i in 0..30i64 {
            nodes.push((NodeId(i + 1), 0.0, i as f64 * 0.001));
        }
        for i in 30..60i64 {
            nodes.push((NodeId(i + 1), -((i - 29) as f64) * 0.001, 0.029));
        }
        let mut input = RelationInput::new();
        input.add_way(WayId(70), "", None, nodes).unwrap();
        input
    }

    #[test]
    fn detects_the_corner_once() {
        let route = assemble(&l_shaped_input()).unwrap().route;
        let guidance = extract_guidance(&route);

        assert!(matches!(guidance.first().unwrap().kind, GuidanceKind::Depart { .. }));
        assert!(matches!(guidance.last().unwrap().kind, GuidanceKind::Arrive));

        let turns: Vec<_> = guidance
            .iter()
            .filter(|g| matches!(g.kind, GuidanceKind::Turn { .. }))
            .collect();
        assert_eq!(turns.len(), 1, "windowed scan must report the corner once");
        match turns[0].kind {
            GuidanceKind::Turn { direction, severity, bearing_change_deg, .. } => {
                assert_eq!(direction, TurnDirection::Right);
                assert_eq!(severity, TurnSeverity::Slight);
                assert!(bearing_change_deg >= 40.0, "got {bearing_change_deg}");
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn depart_heading_follows_initial_bearing() {
        let route = assemble(&l_shaped_input()).unwrap().route;
        let guidance = extract_guidance(&route);
        match guidance[0].kind {
            GuidanceKind::Depart { heading, bearing_deg } => {
                assert_eq!(heading, CardinalDirection::East);
                assert_abs_diff_eq!(bearing_deg, 90.0, epsilon = 0.01);
            }
            _ => panic!("first record must be Depart"),
        }
    }

    #[test]
    fn stop_calls_merge_in_distance_order() {
        let mut input = l_shaped_input();
        add_stop(&mut input, 900, 0.0, 0.015, "Mid");
        let route = assemble(&input).unwrap().route;
        let guidance = extract_guidance(&route);

        assert!(guidance
            .windows(2)
            .all(|w| w[0].along_m <= w[1].along_m));
        let call = guidance
            .iter()
            .find(|g| matches!(g.kind, GuidanceKind::StopCall { stop: 0 }))
            .expect("stop call present");
        assert_eq!(call.along_m, route.stops()[0].along_m);
        assert_eq!(call.node, NodeId(900));
    }

    #[test]
    fn short_route_has_no_turns() {
        let route = assemble(&straight_chain()).unwrap().route;
        let guidance = extract_guidance(&route);
        assert_eq!(guidance.len(), 2);
        assert!(matches!(guidance[0].kind, GuidanceKind::Depart { .. }));
        assert!(matches!(guidance[1].kind, GuidanceKind::Arrive));
    }

    #[test]
    fn two_point_route_only_arrives() {
        let mut input = RelationInput::new();
        super::helpers::add_route_way(&mut input, 80, &[(1, 0.0, 0.0), (2, 0.0, 0.001)]);
        let route = assemble(&input).unwrap().route;
        let guidance = extract_guidance(&route);
        assert_eq!(guidance.len(), 1);
        assert!(matches!(guidance[0].kind, GuidanceKind::Arrive));
    }
}
