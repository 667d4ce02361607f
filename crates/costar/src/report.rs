//! Human-readable description of a found path.
//!
//! A path alternates works and people. Every work strictly inside the path
//! sits between two people, and becomes one [`Collaboration`]: who worked
//! with whom, on what, and in which roles.

use crate::domain::{Node, NodeId};
use crate::error::{Error, Result};
use crate::graph::CreditGraph;
use serde::Serialize;
use std::fmt;

/// A person and the role they held on a work
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credit {
    /// Person's display name
    pub name: String,
    /// Role label from the credit
    pub role: String,
}

/// Two people linked through a shared work
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collaboration {
    /// Work description, qualified by its series for episodes
    pub work: String,
    /// The person before the work on the path
    pub from: Credit,
    /// The person after the work on the path
    pub to: Credit,
}

impl fmt::Display for Collaboration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({}) --> {} ({})",
            self.work, self.from.name, self.from.role, self.to.name, self.to.role
        )
    }
}

/// Everything needed to print a found path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathReport {
    /// Node identifiers from start to end
    pub path: Vec<NodeId>,
    /// Display name of the first node
    pub start: String,
    /// Display name of the last node
    pub end: String,
    /// One entry per work inside the path
    pub links: Vec<Collaboration>,
}

impl PathReport {
    /// Describe `path` using the names and roles stored in `graph`.
    ///
    /// Every work with a person on both sides gets a [`Collaboration`],
    /// whatever its position, so a path that starts on a work describes the
    /// works inside it and skips the works at its ends.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if a path element is not in the graph.
    pub fn new(graph: &CreditGraph, path: &[NodeId]) -> Result<Self> {
        let nodes = path
            .iter()
            .map(|id| graph.node(id).ok_or_else(|| Error::NodeNotFound(id.clone())))
            .collect::<Result<Vec<&Node>>>()?;

        let name_at = |position: Option<&&Node>| {
            position
                .map(|node| node.display_name.clone())
                .unwrap_or_default()
        };

        let links = nodes
            .windows(3)
            .filter(|window| window[1].is_work() && window[0].is_person() && window[2].is_person())
            .map(|window| {
                let (before, work, after) = (window[0], window[1], window[2]);
                Collaboration {
                    work: work_title(graph, work),
                    from: credit(graph, work, before),
                    to: credit(graph, work, after),
                }
            })
            .collect();

        Ok(Self {
            path: path.to_vec(),
            start: name_at(nodes.first()),
            end: name_at(nodes.last()),
            links,
        })
    }

    /// Number of hops in the path
    #[must_use]
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Display title of a work.
///
/// Episodes whose parent series is in the graph read
/// `"<series> (<episode>)"`; everything else reads as its own name.
#[must_use]
pub fn work_title(graph: &CreditGraph, work: &Node) -> String {
    match work.parent_id.as_ref().and_then(|parent| graph.node(parent)) {
        Some(parent) => format!("{} ({})", parent.display_name, work.display_name),
        None => work.display_name.clone(),
    }
}

fn credit(graph: &CreditGraph, work: &Node, person: &Node) -> Credit {
    Credit {
        name: person.display_name.clone(),
        role: graph
            .role(&work.id, &person.id)
            .unwrap_or_default()
            .to_string(),
    }
}
