//! Error types for costar operations.

use crate::domain::NodeId;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The error type for costar operations.
///
/// Bad dataset rows and dangling references are not errors; ingestion skips
/// them. Only conditions that stop a command end up here.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A dataset file could not be read.
    #[error("Failed to read dataset {}", path.display())]
    Dataset {
        /// The file being read
        path: PathBuf,
        /// What went wrong
        #[source]
        source: costar_tsv::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A search endpoint is not in the graph.
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),
}

/// A specialized Result type for costar operations.
pub type Result<T> = std::result::Result<T, Error>;
