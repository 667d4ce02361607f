//! Staged construction of the credit graph from dataset rows.
//!
//! The graph is built in four passes, one per dataset:
//!
//! 1. **Works**: titles of an accepted type become work nodes.
//! 2. **Credits**: principals of an accepted category link a work to a
//!    person. People are created on first sight with their ID as a
//!    placeholder name.
//! 3. **People**: names replace the placeholders of people already in the
//!    graph.
//! 4. **Episodes**: episode works get their parent series recorded.
//!
//! Rows that reference something outside the graph are skipped and counted,
//! never reported as errors. [`GraphBuilder::finish`] is the checkpoint after
//! which the graph is read-only.

use super::CreditGraph;
use crate::config::IngestConfig;
use crate::domain::{EpisodeRow, NameRow, Node, NodeId, NodeKind, PrincipalRow, TitleRow};
use petgraph::graph::NodeIndex;
use std::collections::HashSet;
use std::fmt;

/// One of the four ingestion passes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// Title rows
    Works,
    /// Principal rows
    Credits,
    /// Name rows
    People,
    /// Episode rows
    Episodes,
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Works => write!(f, "works"),
            Self::Credits => write!(f, "credits"),
            Self::People => write!(f, "people"),
            Self::Episodes => write!(f, "episodes"),
        }
    }
}

/// Row counts for one pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassStats {
    /// Which pass these counts belong to
    pub pass: Pass,
    /// Rows consumed
    pub rows: usize,
    /// Rows that changed the graph
    pub applied: usize,
    /// Rows excluded by the title type or category filter
    pub filtered: usize,
    /// Rows whose identifiers did not resolve to a suitable node
    pub unresolved: usize,
}

impl PassStats {
    fn new(pass: Pass) -> Self {
        Self {
            pass,
            rows: 0,
            applied: 0,
            filtered: 0,
            unresolved: 0,
        }
    }

    fn log(self) -> Self {
        tracing::info!(
            pass = %self.pass,
            rows = self.rows,
            applied = self.applied,
            filtered = self.filtered,
            unresolved = self.unresolved,
            "Finished ingestion pass"
        );
        self
    }
}

/// Builds a [`CreditGraph`] from dataset rows.
///
/// # Example
///
/// ```
/// use costar::config::IngestConfig;
/// use costar::domain::{NameRow, NodeId, PrincipalRow, TitleRow};
/// use costar::graph::GraphBuilder;
///
/// let mut builder = GraphBuilder::new(&IngestConfig::default());
/// builder.add_works([TitleRow::new("tt1", "movie", "Alpha")]);
/// builder.add_credits([PrincipalRow::new("tt1", "nm1", "actress")]);
/// builder.enrich_people([NameRow::new("nm1", "Carol")]);
/// let graph = builder.finish();
///
/// let carol = graph.node(&NodeId::new("nm1")).unwrap();
/// assert_eq!(carol.display_name, "Carol");
/// ```
#[derive(Debug)]
pub struct GraphBuilder {
    graph: CreditGraph,
    title_types: HashSet<String>,
    categories: HashSet<String>,
}

impl GraphBuilder {
    /// Create an empty builder with the given row filters
    #[must_use]
    pub fn new(ingest: &IngestConfig) -> Self {
        Self {
            graph: CreditGraph::default(),
            title_types: ingest.title_types.iter().cloned().collect(),
            categories: ingest.categories.iter().cloned().collect(),
        }
    }

    /// Work pass: add a node for every title of an accepted type.
    ///
    /// A repeated title identifier keeps its node and takes the newer name.
    pub fn add_works<I>(&mut self, rows: I) -> PassStats
    where
        I: IntoIterator<Item = TitleRow>,
    {
        let mut stats = PassStats::new(Pass::Works);

        for row in rows {
            stats.rows += 1;

            if !self.title_types.contains(&row.title_type) {
                stats.filtered += 1;
                continue;
            }

            let id = NodeId::from(row.tconst);
            match self.graph.index_of(&id) {
                Some(index) if self.graph.graph[index].is_work() => {
                    self.graph.graph[index].display_name = row.primary_title;
                }
                Some(_) => {
                    tracing::debug!(%id, "Title ID already used by a person, skipping");
                    stats.unresolved += 1;
                    continue;
                }
                None => {
                    self.insert(Node::work(id, row.primary_title));
                }
            }
            stats.applied += 1;
        }

        stats.log()
    }

    /// Credit pass: link works to the people credited on them.
    ///
    /// Only accepted categories are linked, and only for works that survived
    /// the work pass. Crediting the same person on the same work twice keeps
    /// one edge and the latest role.
    pub fn add_credits<I>(&mut self, rows: I) -> PassStats
    where
        I: IntoIterator<Item = PrincipalRow>,
    {
        let mut stats = PassStats::new(Pass::Credits);

        for row in rows {
            stats.rows += 1;

            if !self.categories.contains(&row.category) {
                stats.filtered += 1;
                continue;
            }

            // Titles dropped by the work pass are still referenced here
            let Some(work) = self.index_of_kind(&NodeId::from(row.tconst), NodeKind::Work) else {
                stats.unresolved += 1;
                continue;
            };

            let person_id = NodeId::from(row.nconst);
            let person = match self.graph.index_of(&person_id) {
                Some(index) if self.graph.graph[index].is_person() => index,
                Some(_) => {
                    tracing::debug!(
                        id = %person_id,
                        "Person ID already used by a title, skipping"
                    );
                    stats.unresolved += 1;
                    continue;
                }
                None => self.insert(Node::placeholder_person(person_id)),
            };

            self.graph.graph.update_edge(work, person, row.category);
            stats.applied += 1;
        }

        stats.log()
    }

    /// Enrichment pass: replace placeholder names of credited people.
    ///
    /// People who were never credited on an included work are ignored.
    pub fn enrich_people<I>(&mut self, rows: I) -> PassStats
    where
        I: IntoIterator<Item = NameRow>,
    {
        let mut stats = PassStats::new(Pass::People);

        for row in rows {
            stats.rows += 1;

            let Some(person) = self.index_of_kind(&NodeId::from(row.nconst), NodeKind::Person)
            else {
                stats.unresolved += 1;
                continue;
            };

            self.graph.graph[person].display_name = row.primary_name;
            stats.applied += 1;
        }

        stats.log()
    }

    /// Episode pass: record the parent series of episode works.
    ///
    /// Only episodes that are already work nodes are linked. The parent
    /// identifier is stored as given and may not resolve to a node.
    pub fn link_episodes<I>(&mut self, rows: I) -> PassStats
    where
        I: IntoIterator<Item = EpisodeRow>,
    {
        let mut stats = PassStats::new(Pass::Episodes);

        for row in rows {
            stats.rows += 1;

            let Some(episode) = self.index_of_kind(&NodeId::from(row.tconst), NodeKind::Work)
            else {
                stats.unresolved += 1;
                continue;
            };

            self.graph.graph[episode].parent_id = Some(NodeId::from(row.parent_tconst));
            stats.applied += 1;
        }

        stats.log()
    }

    /// Finalize the graph. No further mutation is possible.
    #[must_use]
    pub fn finish(self) -> CreditGraph {
        tracing::info!(
            works = self.graph.count_of(NodeKind::Work),
            people = self.graph.count_of(NodeKind::Person),
            credits = self.graph.edge_count(),
            "Graph built"
        );
        self.graph
    }

    fn insert(&mut self, node: Node) -> NodeIndex {
        let id = node.id.clone();
        let index = self.graph.graph.add_node(node);
        self.graph.node_map.insert(id, index);
        index
    }

    fn index_of_kind(&self, id: &NodeId, kind: NodeKind) -> Option<NodeIndex> {
        self.graph
            .index_of(id)
            .filter(|&index| self.graph.graph[index].kind == kind)
    }
}

/// Run all four passes in order and return the finished graph.
pub fn build<W, C, P, E>(
    ingest: &IngestConfig,
    works: W,
    credits: C,
    people: P,
    episodes: E,
) -> CreditGraph
where
    W: IntoIterator<Item = TitleRow>,
    C: IntoIterator<Item = PrincipalRow>,
    P: IntoIterator<Item = NameRow>,
    E: IntoIterator<Item = EpisodeRow>,
{
    let mut builder = GraphBuilder::new(ingest);
    builder.add_works(works);
    builder.add_credits(credits);
    builder.enrich_people(people);
    builder.link_episodes(episodes);
    builder.finish()
}
