//! Depth-limited connection search.
//!
//! The search is a depth-first traversal with backtracking. It returns the
//! first path it finds within the hop budget, which is not necessarily the
//! shortest one.
//!
//! # Algorithm
//!
//! Starting from `from`, with a budget of `depth_limit` hops:
//!
//! 1. If the current node is the target, the path is the current node alone,
//!    whatever budget is left.
//! 2. If the budget is spent, this branch fails.
//! 3. Otherwise, for each neighbor not in the visited set: mark the
//!    *current* node visited, search from the neighbor with one hop less,
//!    and either return the neighbor's path with the current node in front,
//!    or unmark the current node and try the next neighbor.
//!
//! The visited set therefore holds exactly the ancestors of the node being
//! expanded, which keeps every branch a simple path and guarantees
//! termination. It belongs to one [`find_path`] call and is empty again when
//! the call returns.

use super::CreditGraph;
use crate::config::DEFAULT_MAX_DEPTH;
use crate::domain::NodeId;
use crate::error::{Error, Result};
use petgraph::graph::NodeIndex;
use std::collections::HashSet;

/// Hop budget used when none is configured
pub const DEFAULT_DEPTH_LIMIT: usize = DEFAULT_MAX_DEPTH;

/// Find a path of at most `depth_limit` hops from `from` to `to`.
///
/// Returns the node identifiers from `from` to `to` inclusive, alternating
/// between works and people, or `None` when no path fits the budget.
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] if either endpoint is not in the graph.
///
/// # Example
///
/// ```
/// use costar::config::IngestConfig;
/// use costar::domain::{NodeId, PrincipalRow, TitleRow};
/// use costar::graph::{build, search::find_path};
///
/// let graph = build(
///     &IngestConfig::default(),
///     [TitleRow::new("tt1", "movie", "Alpha"), TitleRow::new("tt2", "movie", "Beta")],
///     [PrincipalRow::new("tt1", "nm1", "actress"), PrincipalRow::new("tt2", "nm1", "actress")],
///     Vec::new(),
///     Vec::new(),
/// );
///
/// let path = find_path(&graph, &NodeId::new("tt1"), &NodeId::new("tt2"), 7).unwrap();
/// assert_eq!(
///     path,
///     Some(vec![NodeId::new("tt1"), NodeId::new("nm1"), NodeId::new("tt2")])
/// );
/// ```
pub fn find_path(
    graph: &CreditGraph,
    from: &NodeId,
    to: &NodeId,
    depth_limit: usize,
) -> Result<Option<Vec<NodeId>>> {
    let start = graph
        .index_of(from)
        .ok_or_else(|| Error::NodeNotFound(from.clone()))?;
    let target = graph
        .index_of(to)
        .ok_or_else(|| Error::NodeNotFound(to.clone()))?;

    let mut traversal = Traversal {
        graph,
        target,
        visited: HashSet::new(),
    };
    let found = traversal.search(start, depth_limit);
    debug_assert!(traversal.visited.is_empty());

    match &found {
        Some(path) => tracing::debug!(%from, %to, hops = path.len() - 1, "Connection found"),
        None => tracing::debug!(%from, %to, depth_limit, "No connection within depth limit"),
    }

    // Paths are accumulated target-first
    Ok(found.map(|path| {
        path.into_iter()
            .rev()
            .map(|index| graph.node_at(index).id.clone())
            .collect()
    }))
}

/// State of one top-level search.
struct Traversal<'g> {
    graph: &'g CreditGraph,
    target: NodeIndex,
    /// Ancestors of the node currently being expanded
    visited: HashSet<NodeIndex>,
}

impl Traversal<'_> {
    /// Returns the path from `current` to the target, target first.
    fn search(&mut self, current: NodeIndex, budget: usize) -> Option<Vec<NodeIndex>> {
        if current == self.target {
            return Some(vec![current]);
        }
        if budget == 0 {
            return None;
        }

        for neighbor in self.graph.ordered_neighbors(current) {
            if self.visited.contains(&neighbor) {
                continue;
            }

            self.visited.insert(current);
            let found = self.search(neighbor, budget - 1);
            self.visited.remove(&current);

            if let Some(mut path) = found {
                path.push(current);
                return Some(path);
            }
        }

        None
    }
}
