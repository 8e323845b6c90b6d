//! `RoadMap`: an explicit weighted directed graph exposed as a lazy state space.
//!
//! The engine still only sees states and successors; the map just answers
//! `expand` from an adjacency table. Edge weights vary, which exercises the
//! engine's use of the state's own `cost()` as `g`.

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;

use lodestar_search::Heuristic;
use thiserror::Error;

/// Node identifier on a [`RoadMap`].
pub type NodeId = u32;

/// Why an edge or estimate was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoadMapError {
    /// Edge weights must be non-negative.
    #[error("edge {from} -> {to} has negative weight {weight}")]
    NegativeWeight { from: NodeId, to: NodeId, weight: i64 },
    /// Heuristic estimates must be non-negative.
    #[error("node {node} has negative estimate {estimate}")]
    NegativeEstimate { node: NodeId, estimate: i64 },
}

/// Weighted adjacency plus optional per-node remaining-cost estimates.
///
/// Estimates describe distance to one particular destination; they are the
/// caller's responsibility to keep admissible for that destination. Nodes
/// without an estimate use 0.
#[derive(Debug, Clone, Default)]
pub struct RoadMap {
    edges: BTreeMap<NodeId, Vec<(NodeId, i64)>>,
    estimates: BTreeMap<NodeId, i64>,
}

impl RoadMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directed edge.
    ///
    /// # Errors
    ///
    /// Returns [`RoadMapError::NegativeWeight`] for `weight < 0`.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: i64) -> Result<(), RoadMapError> {
        if weight < 0 {
            return Err(RoadMapError::NegativeWeight { from, to, weight });
        }
        self.edges.entry(from).or_default().push((to, weight));
        Ok(())
    }

    /// Add edges in both directions with the same weight.
    ///
    /// # Errors
    ///
    /// As [`RoadMap::add_edge`].
    pub fn add_road(&mut self, a: NodeId, b: NodeId, weight: i64) -> Result<(), RoadMapError> {
        self.add_edge(a, b, weight)?;
        self.add_edge(b, a, weight)
    }

    /// Set the remaining-cost estimate for `node`.
    ///
    /// # Errors
    ///
    /// Returns [`RoadMapError::NegativeEstimate`] for `estimate < 0`.
    pub fn set_estimate(&mut self, node: NodeId, estimate: i64) -> Result<(), RoadMapError> {
        if estimate < 0 {
            return Err(RoadMapError::NegativeEstimate { node, estimate });
        }
        self.estimates.insert(node, estimate);
        Ok(())
    }

    /// Outgoing `(to, weight)` edges of `node`.
    #[must_use]
    pub fn neighbors(&self, node: NodeId) -> &[(NodeId, i64)] {
        self.edges.get(&node).map_or(&[], Vec::as_slice)
    }

    /// Every node mentioned by an edge, ascending.
    #[must_use]
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = self
            .edges
            .iter()
            .flat_map(|(&from, out)| std::iter::once(from).chain(out.iter().map(|&(to, _)| to)))
            .collect();
        nodes.sort_unstable();
        nodes.dedup();
        nodes
    }

    /// A start state at `node` with zero accumulated cost.
    #[must_use]
    pub fn at(&self, node: NodeId) -> RouteState<'_> {
        RouteState {
            map: self,
            node,
            cost: 0,
        }
    }

    fn estimate(&self, node: NodeId) -> i64 {
        self.estimates.get(&node).copied().unwrap_or(0)
    }
}

/// Goal given as a bare destination instead of a full state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Destination(pub NodeId);

/// A position on a [`RoadMap`] with the cost paid to get there.
#[derive(Clone, Copy)]
pub struct RouteState<'m> {
    map: &'m RoadMap,
    node: NodeId,
    cost: i64,
}

impl RouteState<'_> {
    #[must_use]
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Cost paid so far. Shadows the trait method so callers need not pick a
    /// goal type just to read it.
    #[must_use]
    pub fn cost(&self) -> i64 {
        self.cost
    }

    fn successors(&self) -> Vec<Self> {
        self.map
            .neighbors(self.node)
            .iter()
            .map(|&(to, weight)| Self {
                map: self.map,
                node: to,
                cost: self.cost.saturating_add(weight),
            })
            .collect()
    }
}

impl PartialEq for RouteState<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node && self.cost == other.cost
    }
}

impl Eq for RouteState<'_> {}

impl fmt::Debug for RouteState<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteState")
            .field("node", &self.node)
            .field("cost", &self.cost)
            .finish()
    }
}

impl Heuristic for RouteState<'_> {
    type Key = NodeId;
    type Error = Infallible;

    fn heuristic(&self, _goal: &Self) -> i64 {
        self.map.estimate(self.node)
    }

    fn cost(&self) -> i64 {
        self.cost
    }

    fn matches(&self, goal: &Self) -> bool {
        self.node == goal.node
    }

    fn expand(&self) -> Result<Vec<Self>, Self::Error> {
        Ok(self.successors())
    }

    fn key(&self) -> NodeId {
        self.node
    }
}

impl Heuristic<Destination> for RouteState<'_> {
    type Key = NodeId;
    type Error = Infallible;

    fn heuristic(&self, _goal: &Destination) -> i64 {
        self.map.estimate(self.node)
    }

    fn cost(&self) -> i64 {
        self.cost
    }

    fn matches(&self, goal: &Destination) -> bool {
        self.node == goal.0
    }

    fn expand(&self) -> Result<Vec<Self>, Self::Error> {
        Ok(self.successors())
    }

    fn key(&self) -> NodeId {
        self.node
    }
}
