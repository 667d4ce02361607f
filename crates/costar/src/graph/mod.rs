//! The credit graph and its algorithms.
//!
//! # Architecture
//!
//! The graph is a `petgraph` undirected graph with one node per work or
//! person and one edge per accepted credit:
//!
//! - **Node weight**: the [`Node`] (identifier, kind, display name, parent)
//! - **Edge weight**: the role label of the person on the work
//! - `HashMap<NodeId, NodeIndex>` maps identifiers to graph nodes
//!
//! Because every edge joins exactly one work and one person, the edge weight
//! doubles as the work's role-by-person lookup, and undirected storage makes
//! adjacency symmetric by construction.
//!
//! ## Lifecycle
//!
//! A [`CreditGraph`] is produced by [`GraphBuilder::finish`] and is
//! read-only afterwards. Searches keep their visited state outside the graph
//! (see [`search`]), so concurrent readers never observe traversal residue.
//!
//! ## Neighbor Order
//!
//! Neighbors are enumerated in the order their nodes were first added to
//! the graph. Search results are therefore reproducible for a given input.

mod builder;
pub mod search;

use crate::domain::{Node, NodeId, NodeKind};
use crate::error::Result;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

pub use builder::{GraphBuilder, Pass, PassStats, build};
pub use search::DEFAULT_DEPTH_LIMIT;

/// Read-only bipartite graph of works and people.
#[derive(Debug, Clone, Default)]
pub struct CreditGraph {
    /// Nodes carry [`Node`], edges carry the role label.
    graph: UnGraph<Node, String>,

    /// Mapping from `NodeId` to graph `NodeIndex`.
    ///
    /// Every node in `graph` has exactly one entry here.
    node_map: HashMap<NodeId, NodeIndex>,
}

impl CreditGraph {
    /// Look up a node by identifier
    #[must_use]
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.node_map.get(id).map(|&index| &self.graph[index])
    }

    /// Whether the identifier is a node of the graph
    #[must_use]
    pub fn contains(&self, id: &NodeId) -> bool {
        self.node_map.contains_key(id)
    }

    /// Total number of credit edges
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Number of nodes of one kind
    #[must_use]
    pub fn count_of(&self, kind: NodeKind) -> usize {
        self.graph
            .node_weights()
            .filter(|node| node.kind == kind)
            .count()
    }

    /// All nodes, in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph.node_weights()
    }

    /// All credit edges as `(work, person, role)`.
    pub fn credits(&self) -> impl Iterator<Item = (&Node, &Node, &str)> {
        self.graph.edge_references().map(|edge| {
            let (a, b) = (&self.graph[edge.source()], &self.graph[edge.target()]);
            let (work, person) = if a.is_work() { (a, b) } else { (b, a) };
            (work, person, edge.weight().as_str())
        })
    }

    /// Neighbors of a node in enumeration order.
    ///
    /// Returns an empty list for unknown identifiers.
    #[must_use]
    pub fn neighbors(&self, id: &NodeId) -> Vec<&Node> {
        self.index_of(id)
            .map(|index| {
                self.ordered_neighbors(index)
                    .into_iter()
                    .map(|neighbor| &self.graph[neighbor])
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The role `person` held on `work`.
    ///
    /// Returns `None` unless `work` is a work, `person` is a person, and a
    /// credit joins them.
    #[must_use]
    pub fn role(&self, work: &NodeId, person: &NodeId) -> Option<&str> {
        let work_index = self.index_of(work)?;
        let person_index = self.index_of(person)?;
        if !self.graph[work_index].is_work() || !self.graph[person_index].is_person() {
            return None;
        }
        self.graph
            .find_edge(work_index, person_index)
            .map(|edge| self.graph[edge].as_str())
    }

    /// Find a connection of at most `depth_limit` hops.
    ///
    /// See [`search::find_path`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::NodeNotFound`] if either endpoint is
    /// not in the graph.
    pub fn find_path(
        &self,
        from: &NodeId,
        to: &NodeId,
        depth_limit: usize,
    ) -> Result<Option<Vec<NodeId>>> {
        search::find_path(self, from, to, depth_limit)
    }

    pub(crate) fn index_of(&self, id: &NodeId) -> Option<NodeIndex> {
        self.node_map.get(id).copied()
    }

    pub(crate) fn node_at(&self, index: NodeIndex) -> &Node {
        &self.graph[index]
    }

    /// Neighbor indices sorted by node insertion order.
    pub(crate) fn ordered_neighbors(&self, index: NodeIndex) -> Vec<NodeIndex> {
        let mut neighbors: Vec<NodeIndex> = self.graph.neighbors(index).collect();
        neighbors.sort_unstable();
        neighbors
    }
}
