//! Application context for CLI command execution.
//!
//! `App` owns the loaded configuration and the finished credit graph, and
//! answers connection queries against it.
//!
//! # Example
//!
//! ```no_run
//! use costar::app::App;
//! use costar::domain::NodeId;
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let app = App::from_directory(Path::new("./imdb"), None)?;
//!     let connection = app.connect(&NodeId::new("nm0000102"), &NodeId::new("nm0000001"), None)?;
//!     Ok(())
//! }
//! ```

use crate::config::{CostarConfig, DatasetPaths, IngestConfig};
use crate::domain::{EpisodeRow, NameRow, NodeId, PrincipalRow, TitleRow};
use crate::error::{Error, Result};
use crate::graph::{CreditGraph, GraphBuilder, PassStats};
use crate::report::PathReport;
use costar_tsv::{ResilientRows, TsvReader, Warning, open_tsv};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::path::Path;

/// Outcome of a connection query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Connection {
    /// A path was found within the depth limit
    Found(PathReport),

    /// No path fits in `depth` hops
    NotFound {
        /// The depth limit that was searched
        depth: usize,
    },
}

/// Summary of a dataset load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Counts per ingestion pass, in pass order
    pub passes: Vec<PassStats>,
    /// Rows the reader could not parse, across all files
    pub malformed_rows: usize,
}

/// Application context for CLI operations.
#[derive(Debug)]
pub struct App {
    config: CostarConfig,
    graph: CreditGraph,
    load_report: LoadReport,
}

impl App {
    /// Load configuration and build the graph from a data directory.
    ///
    /// `config_path` overrides the `costar.yaml` lookup in `data_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or a dataset file
    /// cannot be read.
    pub fn from_directory(data_dir: &Path, config_path: Option<&Path>) -> Result<Self> {
        let config = CostarConfig::discover(config_path, data_dir)?;
        Self::with_config(config, data_dir)
    }

    /// Build the graph from a data directory with an already loaded
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a dataset file cannot be read.
    pub fn with_config(config: CostarConfig, data_dir: &Path) -> Result<Self> {
        let paths = config.datasets.resolve(data_dir);
        let (graph, load_report) = load_graph(&paths, &config.ingest)?;

        Ok(Self {
            config,
            graph,
            load_report,
        })
    }

    /// Wrap an already built graph.
    #[must_use]
    pub fn with_graph(config: CostarConfig, graph: CreditGraph) -> Self {
        Self {
            config,
            graph,
            load_report: LoadReport::default(),
        }
    }

    /// Search for a connection and describe it.
    ///
    /// `depth` defaults to the configured `max-depth`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if either endpoint is not in the graph.
    pub fn connect(&self, from: &NodeId, to: &NodeId, depth: Option<usize>) -> Result<Connection> {
        let depth = depth.unwrap_or(self.config.max_depth);
        tracing::info!(%from, %to, depth, "Performing graph search");

        match self.graph.find_path(from, to, depth)? {
            Some(path) => Ok(Connection::Found(PathReport::new(&self.graph, &path)?)),
            None => Ok(Connection::NotFound { depth }),
        }
    }

    /// The loaded graph
    pub fn graph(&self) -> &CreditGraph {
        &self.graph
    }

    /// The active configuration
    pub fn config(&self) -> &CostarConfig {
        &self.config
    }

    /// What happened while loading the datasets
    pub fn load_report(&self) -> &LoadReport {
        &self.load_report
    }
}

/// Read the four datasets and build the credit graph.
///
/// Each file is streamed once. Unparsable rows are skipped and counted;
/// only I/O failures abort the load.
///
/// # Errors
///
/// Returns [`Error::Dataset`] naming the file that could not be read.
pub fn load_graph(
    paths: &DatasetPaths,
    ingest: &IngestConfig,
) -> Result<(CreditGraph, LoadReport)> {
    let mut builder = GraphBuilder::new(ingest);
    let mut report = LoadReport::default();

    tracing::info!("Populating title index");
    let (stats, malformed) =
        read_dataset::<TitleRow, _>(&paths.titles, |rows| builder.add_works(rows))?;
    report.record(stats, malformed);

    tracing::info!("Populating principal index");
    let (stats, malformed) =
        read_dataset::<PrincipalRow, _>(&paths.principals, |rows| builder.add_credits(rows))?;
    report.record(stats, malformed);

    tracing::info!("Enriching principal index");
    let (stats, malformed) =
        read_dataset::<NameRow, _>(&paths.names, |rows| builder.enrich_people(rows))?;
    report.record(stats, malformed);

    tracing::info!("Linking episodes");
    let (stats, malformed) =
        read_dataset::<EpisodeRow, _>(&paths.episodes, |rows| builder.link_episodes(rows))?;
    report.record(stats, malformed);

    Ok((builder.finish(), report))
}

impl LoadReport {
    fn record(&mut self, stats: PassStats, malformed: usize) {
        self.passes.push(stats);
        self.malformed_rows += malformed;
    }
}

/// Stream one dataset file through a builder pass.
fn read_dataset<T, F>(path: &Path, pass: F) -> Result<(PassStats, usize)>
where
    T: DeserializeOwned,
    F: FnOnce(&mut ResilientRows<'_, File, T>) -> PassStats,
{
    let dataset_error = |source: costar_tsv::Error| Error::Dataset {
        path: path.to_path_buf(),
        source,
    };

    let mut reader: TsvReader<File> = open_tsv(path).map_err(dataset_error)?;
    let mut rows = reader.rows_resilient::<T>();
    let stats = pass(&mut rows);
    let warnings = rows.finish().map_err(dataset_error)?;

    tracing::debug!(
        file = %path.display(),
        lines = reader.line_number(),
        rows = stats.rows,
        "Read dataset"
    );
    log_warnings(path, &warnings);
    Ok((stats, warnings.len()))
}

fn log_warnings(path: &Path, warnings: &[Warning]) {
    if warnings.is_empty() {
        return;
    }
    for warning in warnings {
        tracing::debug!(file = %path.display(), %warning, "Skipped row");
    }
    tracing::warn!(
        file = %path.display(),
        skipped = warnings.len(),
        "Skipped malformed rows"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build;

    fn id(s: &str) -> NodeId {
        NodeId::new(s)
    }

    fn app_with_depth(max_depth: usize) -> App {
        let config = CostarConfig {
            max_depth,
            ..CostarConfig::default()
        };
        let graph = build(
            &config.ingest,
            [
                TitleRow::new("tt1", "movie", "Alpha"),
                TitleRow::new("tt2", "movie", "Beta"),
            ],
            [
                PrincipalRow::new("tt1", "nm1", "actress"),
                PrincipalRow::new("tt1", "nm2", "actor"),
                PrincipalRow::new("tt2", "nm2", "actor"),
                PrincipalRow::new("tt2", "nm3", "self"),
            ],
            [
                NameRow::new("nm1", "Carol"),
                NameRow::new("nm2", "Dave"),
                NameRow::new("nm3", "Erin"),
            ],
            Vec::<EpisodeRow>::new(),
        );
        App::with_graph(config, graph)
    }

    #[test]
    fn connect_describes_found_path() {
        let app = app_with_depth(7);

        let Connection::Found(report) = app.connect(&id("nm1"), &id("nm3"), None).unwrap() else {
            panic!("expected a connection");
        };

        assert_eq!(report.hops(), 4);
        assert_eq!(report.start, "Carol");
        assert_eq!(
            report.links[1].to_string(),
            "Beta: Dave (actor) --> Erin (self)"
        );
        assert!(app.load_report().passes.is_empty());
    }

    #[test]
    fn connect_defaults_to_configured_depth() {
        let app = app_with_depth(3);

        let connection = app.connect(&id("nm1"), &id("nm3"), None).unwrap();
        assert_eq!(connection, Connection::NotFound { depth: 3 });
    }

    #[test]
    fn explicit_depth_overrides_config() {
        let app = app_with_depth(3);

        let connection = app.connect(&id("nm1"), &id("nm3"), Some(4)).unwrap();
        assert!(matches!(connection, Connection::Found(_)));
    }

    #[test]
    fn connect_rejects_unknown_endpoint() {
        let app = app_with_depth(7);

        let err = app.connect(&id("nm1"), &id("nm404"), None).unwrap_err();
        assert!(matches!(err, Error::NodeNotFound(ref missing) if missing == &id("nm404")));
    }
}
