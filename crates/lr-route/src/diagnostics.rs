//! Connectivity diagnostics over the way-endpoint graph.
//!
//! Useful before assembly to predict whether the relation can stitch into a
//! single path, and after a `Fragmented` failure to explain why it did not.

use lr_core::NodeId;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::input::RouteWay;

/// A node where more than two way endpoints meet.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Junction {
    pub node: NodeId,
    pub degree: usize,
}

/// Summary of the endpoint graph formed by the route-forming ways.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectivityReport {
    pub way_count: usize,
    /// Endpoint nodes incident to exactly one way, sorted by id.
    pub terminals: Vec<NodeId>,
    /// Nodes incident to more than two ways, sorted by id.
    pub junctions: Vec<Junction>,
    /// Connected components of the endpoint graph.
    pub components: usize,
}

impl ConnectivityReport {
    /// True when the ways can stitch into one linear path (two terminals)
    /// or one closed loop (none).
    pub fn is_single_path(&self) -> bool {
        self.way_count > 0
            && self.components == 1
            && self.junctions.is_empty()
            && (self.terminals.len() == 2 || self.terminals.is_empty())
    }
}

/// Survey the endpoint graph of `ways`.
pub fn survey(ways: &[RouteWay]) -> ConnectivityReport {
    let mut degree: FxHashMap<NodeId, usize> = FxHashMap::default();
    let mut neighbors: FxHashMap<NodeId, Vec<NodeId>> = FxHashMap::default();
    for way in ways {
        let Some(first) = way.nodes.first() else {
            continue;
        };
        let first = first.id;
        let last = way.nodes[way.nodes.len() - 1].id;
        *degree.entry(first).or_default() += 1;
        *degree.entry(last).or_default() += 1;
        neighbors.entry(first).or_default().push(last);
        neighbors.entry(last).or_default().push(first);
    }

    let mut terminals: Vec<NodeId> = degree
        .iter()
        .filter(|&(_, &d)| d == 1)
        .map(|(&node, _)| node)
        .collect();
    terminals.sort_unstable();

    let mut junctions: Vec<Junction> = degree
        .iter()
        .filter(|&(_, &d)| d > 2)
        .map(|(&node, &degree)| Junction { node, degree })
        .collect();
    junctions.sort_unstable_by_key(|j| j.node);

    // Iterative flood fill; traversal depth must not scale with route length.
    let mut visited: FxHashSet<NodeId> = FxHashSet::default();
    let mut seeds: Vec<NodeId> = degree.keys().copied().collect();
    seeds.sort_unstable();
    let mut components = 0usize;
    let mut stack: Vec<NodeId> = Vec::new();
    for seed in seeds {
        if visited.contains(&seed) {
            continue;
        }
        components += 1;
        visited.insert(seed);
        stack.push(seed);
        while let Some(node) = stack.pop() {
            if let Some(next) = neighbors.get(&node) {
                for &n in next {
                    if visited.insert(n) {
                        stack.push(n);
                    }
                }
            }
        }
    }

    ConnectivityReport { way_count: ways.len(), terminals, junctions, components }
}
