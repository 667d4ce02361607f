//! Error types for costar-tsv operations.

use std::io;
use thiserror::Error;

/// The error type for costar-tsv operations.
///
/// Only conditions that make the rest of a file unreadable are errors.
/// Individual bad rows are reported as [`crate::Warning`]s.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred while opening or reading.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The header row could not be read.
    #[error("Invalid header row: {0}")]
    Header(String),
}

/// A specialized Result type for costar-tsv operations.
pub type Result<T> = std::result::Result<T, Error>;
