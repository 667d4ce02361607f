//! Domain types for the credit graph.
//!
//! A graph node is either a [`NodeKind::Work`] (a title) or a
//! [`NodeKind::Person`]. Both share the [`Node`] representation. The raw
//! dataset records that feed the graph live in [`rows`].

pub mod rows;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use rows::{EpisodeRow, NameRow, PrincipalRow, TitleRow};

/// Unique identifier for a node (`tconst` for works, `nconst` for people)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    /// Create a new node ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Which side of the bipartite graph a node sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A creative title (film, series, episode)
    Work,

    /// A credited individual
    Person,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Work => write!(f, "work"),
            Self::Person => write!(f, "person"),
        }
    }
}

/// A node in the credit graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier
    pub id: NodeId,

    /// Work or person
    pub kind: NodeKind,

    /// Human-readable name.
    ///
    /// For people this is the raw ID until the name dataset supplies the
    /// real name.
    pub display_name: String,

    /// Owning series, set only on works that are episodes
    pub parent_id: Option<NodeId>,
}

impl Node {
    /// Create a work node with the given title
    pub fn work(id: impl Into<NodeId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: NodeKind::Work,
            display_name: title.into(),
            parent_id: None,
        }
    }

    /// Create a person node whose name is a placeholder equal to its ID
    pub fn placeholder_person(id: impl Into<NodeId>) -> Self {
        let id = id.into();
        Self {
            display_name: id.0.clone(),
            id,
            kind: NodeKind::Person,
            parent_id: None,
        }
    }

    /// Whether this node is a work
    #[must_use]
    pub fn is_work(&self) -> bool {
        self.kind == NodeKind::Work
    }

    /// Whether this node is a person
    #[must_use]
    pub fn is_person(&self) -> bool {
        self.kind == NodeKind::Person
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_person_is_named_after_its_id() {
        let node = Node::placeholder_person("nm0000102");
        assert_eq!(node.display_name, "nm0000102");
        assert!(node.is_person());
        assert_eq!(node.parent_id, None);
    }

    #[test]
    fn work_node_has_no_parent() {
        let node = Node::work("tt0087277", "Footloose");
        assert!(node.is_work());
        assert_eq!(node.parent_id, None);
    }

    #[test]
    fn node_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&NodeId::new("tt1")).unwrap();
        assert_eq!(json, "\"tt1\"");
    }
}
