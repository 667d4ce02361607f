//! Costar - six degrees of separation over IMDb dataset dumps.
//!
//! Costar loads the IMDb title, principal, name and episode datasets into a
//! bipartite graph of works and people, then searches it for a chain of
//! shared credits between two identifiers.
//!
//! # Modules
//!
//! - [`domain`]: node identifiers, node kinds and dataset row types
//! - [`graph`]: the credit graph, its builder and the depth-limited search
//! - [`report`]: human-readable description of a found path
//! - [`app`]: dataset loading and connection queries
//! - [`config`]: `costar.yaml` configuration
//! - [`cli`] and [`output`]: the command-line surface

#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod graph;
pub mod output;
pub mod report;

pub use error::{Error, Result};
