//! Input contract with the (external) relation-fetching layer.
//!
//! The fetching layer hands over relation members as raw role strings plus
//! node tuples.  `RelationInput` validates coordinates, buckets members into
//! route-forming ways and stop candidates by role, and silently skips roles
//! this toolkit does not model (`forward`, `backward`, ...), matching how
//! route extraction conventionally treats them.

use log::{debug, warn};
use lr_core::{GeoPoint, MemberRole, NodeId, WayId};

use crate::error::RouteResult;

/// One node of a way, with its resolved coordinates.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WayNode {
    pub id: NodeId,
    pub point: GeoPoint,
}

/// A route-forming way: an ordered node list whose direction relative to the
/// final route is not guaranteed correct.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteWay {
    pub id: WayId,
    pub nodes: Vec<WayNode>,
}

/// A stop/platform member awaiting projection onto the assembled route.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StopCandidate {
    pub node: NodeId,
    pub name: Option<String>,
    pub role: MemberRole,
    pub point: GeoPoint,
}

/// Validated, role-bucketed relation members, ready for assembly.
#[derive(Default, Debug)]
pub struct RelationInput {
    ways: Vec<RouteWay>,
    stops: Vec<StopCandidate>,
}

impl RelationInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a way member.
    ///
    /// Empty role: the way joins the assembly input.  Stop/platform roles:
    /// the way becomes a stop candidate positioned at its first node.  Any
    /// other role is skipped.
    ///
    /// # Errors
    ///
    /// `RouteError::Input` when a node coordinate is out of range.
    pub fn add_way<I>(
        &mut self,
        id: WayId,
        role: &str,
        name: Option<&str>,
        nodes: I,
    ) -> RouteResult<()>
    where
        I: IntoIterator<Item = (NodeId, f64, f64)>,
    {
        let Some(role) = MemberRole::parse(role) else {
            debug!("skipping way {id} with unmodelled role {role:?}");
            return Ok(());
        };

        let mut way_nodes = Vec::new();
        for (node, lat, lon) in nodes {
            way_nodes.push(WayNode {
                id: node,
                point: GeoPoint::validated(lat, lon)?,
            });
        }

        if role.is_stop() {
            // A platform way is represented by its first node.
            let Some(first) = way_nodes.first() else {
                warn!("stop-role way {id} has no nodes, skipping");
                return Ok(());
            };
            self.stops.push(StopCandidate {
                node: first.id,
                name: name.map(str::to_owned),
                role,
                point: first.point,
            });
            return Ok(());
        }

        self.ways.push(RouteWay { id, nodes: way_nodes });
        Ok(())
    }

    /// Add a node member.  Only stop/platform roles are meaningful for node
    /// members; anything else is skipped.
    ///
    /// # Errors
    ///
    /// `RouteError::Input` when the coordinate is out of range.
    pub fn add_stop_node(
        &mut self,
        id: NodeId,
        role: &str,
        lat: f64,
        lon: f64,
        name: Option<&str>,
    ) -> RouteResult<()> {
        let Some(role) = MemberRole::parse(role) else {
            debug!("skipping node {id} with unmodelled role {role:?}");
            return Ok(());
        };
        if !role.is_stop() {
            debug!("skipping route-role node member {id}: nodes do not form geometry");
            return Ok(());
        }

        self.stops.push(StopCandidate {
            node: id,
            name: name.map(str::to_owned),
            role,
            point: GeoPoint::validated(lat, lon)?,
        });
        Ok(())
    }

    /// Route-forming ways, in input order.
    pub fn ways(&self) -> &[RouteWay] {
        &self.ways
    }

    /// Stop candidates, in input order (the assembled route re-orders stops
    /// by distance from the route start).
    pub fn stops(&self) -> &[StopCandidate] {
        &self.stops
    }

    pub fn is_empty(&self) -> bool {
        self.ways.is_empty() && self.stops.is_empty()
    }
}
