//! Configuration management for costar.
//!
//! Configuration is optional. When no file is given on the command line,
//! `costar.yaml` in the data directory is used if it exists; otherwise the
//! defaults below match the layout of the IMDb dataset downloads.
//!
//! ```yaml
//! max-depth: 7
//! datasets:
//!   titles: title.basics.tsv
//!   principals: title.principals.tsv
//!   names: name.basics.tsv
//!   episodes: title.episode.tsv
//! ingest:
//!   title-types: [movie]
//!   categories: [actor, actress, self]
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the data directory
pub const CONFIG_FILE_NAME: &str = "costar.yaml";

/// Default number of hops a search may take
pub const DEFAULT_MAX_DEPTH: usize = 7;

/// Largest accepted depth limit.
///
/// The search recurses once per hop, so this also bounds stack depth.
pub const MAX_DEPTH_LIMIT: usize = 64;

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct CostarConfig {
    /// Default depth limit for searches
    pub max_depth: usize,

    /// Dataset file names, relative to the data directory
    pub datasets: DatasetFiles,

    /// Which rows become part of the graph
    pub ingest: IngestConfig,
}

/// File names of the four datasets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DatasetFiles {
    /// Title dataset
    pub titles: String,

    /// Principal credits dataset
    pub principals: String,

    /// Person names dataset
    pub names: String,

    /// Episode-to-series dataset
    pub episodes: String,
}

/// Row filters applied while building the graph
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct IngestConfig {
    /// Title types that become work nodes
    pub title_types: Vec<String>,

    /// Credit categories that become edges
    pub categories: Vec<String>,
}

impl Default for CostarConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            datasets: DatasetFiles::default(),
            ingest: IngestConfig::default(),
        }
    }
}

impl Default for DatasetFiles {
    fn default() -> Self {
        Self {
            titles: "title.basics.tsv".to_string(),
            principals: "title.principals.tsv".to_string(),
            names: "name.basics.tsv".to_string(),
            episodes: "title.episode.tsv".to_string(),
        }
    }
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            title_types: vec!["movie".to_string()],
            categories: vec![
                "actor".to_string(),
                "actress".to_string(),
                "self".to_string(),
            ],
        }
    }
}

impl DatasetFiles {
    /// Resolve the file names against a data directory
    #[must_use]
    pub fn resolve(&self, data_dir: &Path) -> DatasetPaths {
        DatasetPaths {
            titles: data_dir.join(&self.titles),
            principals: data_dir.join(&self.principals),
            names: data_dir.join(&self.names),
            episodes: data_dir.join(&self.episodes),
        }
    }
}

/// Absolute or working-directory-relative paths of the four datasets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    /// Title dataset
    pub titles: PathBuf,
    /// Principal credits dataset
    pub principals: PathBuf,
    /// Person names dataset
    pub names: PathBuf,
    /// Episode-to-series dataset
    pub episodes: PathBuf,
}

impl CostarConfig {
    /// Load and validate configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid YAML, or
    /// fails validation.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        let config: Self = serde_yaml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Load an explicit config file, or `costar.yaml` from the data
    /// directory when present, or fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be loaded.
    pub fn discover(explicit: Option<&Path>, data_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = data_dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "Loading configuration");
            return Self::load(&candidate);
        }

        Ok(Self::default())
    }

    /// Save configuration to a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::Config(format!("YAML error: {e}")))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Check value ranges
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(Error::Config(format!(
                "max-depth cannot exceed {MAX_DEPTH_LIMIT}, got {}",
                self.max_depth
            )));
        }

        if self.ingest.title_types.is_empty() {
            return Err(Error::Config(
                "ingest.title-types must list at least one title type".to_string(),
            ));
        }

        if self.ingest.categories.is_empty() {
            return Err(Error::Config(
                "ingest.categories must list at least one credit category".to_string(),
            ));
        }

        Ok(())
    }
}
