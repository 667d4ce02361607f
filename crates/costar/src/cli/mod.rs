//! CLI argument parsing and command execution.
//!
//! # Example
//!
//! ```bash
//! costar --from nm0000102 --to nm0000001 --data-dir ./imdb
//! costar --from nm0000102 --to tt0087277 --depth 3 --json
//! ```

mod validators;

use crate::app::{App, Connection};
use crate::config::CostarConfig;
use crate::domain::{NodeId, NodeKind};
use crate::output::{self, OutputConfig};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

pub use validators::{validate_depth, validate_node_id};

/// Costar - find how two people or titles are connected through shared credits
///
/// Loads the IMDb dataset dumps from a directory and searches for a chain of
/// credits linking two identifiers (`nm...` for people, `tt...` for titles).
#[derive(Parser, Debug)]
#[command(name = "costar")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Identifier to start from
    #[arg(long, value_parser = validate_node_id)]
    pub from: String,

    /// Identifier to reach
    #[arg(long, value_parser = validate_node_id)]
    pub to: String,

    /// Directory containing the dataset files
    #[arg(short, long, default_value = ".")]
    pub data_dir: PathBuf,

    /// Maximum number of hops (defaults to the configured max-depth)
    #[arg(long, value_parser = validate_depth)]
    pub depth: Option<usize>,

    /// Configuration file (defaults to costar.yaml in the data directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output in JSON format for programmatic use
    #[arg(long)]
    pub json: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Default log filter for the requested verbosity
    #[must_use]
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Load the datasets, search, and print the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or a dataset cannot be loaded,
    /// if an endpoint is not in the graph, or if writing the output fails.
    pub fn execute(&self) -> Result<()> {
        let connection = self.connect()?;
        output::print_connection(&connection, self.json, &OutputConfig::from_env())
            .context("Failed to write output")
    }

    /// Load the datasets and search, without printing.
    ///
    /// # Errors
    ///
    /// See [`Cli::execute`].
    pub fn connect(&self) -> Result<Connection> {
        let config = CostarConfig::discover(self.config.as_deref(), &self.data_dir)
            .context("Failed to load configuration")?;
        let app = App::with_config(config, &self.data_dir).with_context(|| {
            format!("Failed to load datasets from {}", self.data_dir.display())
        })?;

        tracing::info!(
            works = app.graph().count_of(NodeKind::Work),
            people = app.graph().count_of(NodeKind::Person),
            credits = app.graph().edge_count(),
            malformed_rows = app.load_report().malformed_rows,
            "Graph ready"
        );

        let from = NodeId::new(self.from.as_str());
        let to = NodeId::new(self.to.as_str());
        app.connect(&from, &to, self.depth)
            .with_context(|| format!("Failed to connect {from} to {to}"))
    }
}
