//! A resilient reader for tab-separated dataset dumps.
//!
//! This library reads header-addressed TSV files (such as the IMDb
//! non-commercial datasets) into typed rows, skipping malformed lines and
//! reporting them as [`Warning`]s instead of aborting the read.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod de;
pub mod error;
pub mod reader;
pub mod warning;

pub use error::{Error, Result};
pub use reader::{ResilientRows, TsvReader, open_tsv, read_tsv_resilient};
pub use warning::Warning;
