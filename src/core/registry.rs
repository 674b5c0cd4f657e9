//! Dataset registry
//!
//! The registry is an immutable table mapping dataset identifiers to source
//! file paths, built once at startup from the configuration. Resolution has
//! no side effects; an unknown identifier reports the registered names so
//! the caller can self-correct.

use crate::config::ShardprepConfig;
use crate::domain::dataset::DatasetEntry;
use crate::domain::errors::SplitError;
use crate::domain::ids::DatasetId;
use crate::domain::result::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Immutable mapping from dataset identifiers to source file paths
#[derive(Debug, Clone)]
pub struct DatasetRegistry {
    entries: BTreeMap<DatasetId, PathBuf>,
}

impl DatasetRegistry {
    /// Builds the registry from the configuration's dataset table
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a registered identifier is invalid.
    /// Configuration validation rejects such tables up front, so this only
    /// fires for configs that bypassed validation.
    pub fn from_config(config: &ShardprepConfig) -> Result<Self> {
        let mut entries = BTreeMap::new();
        for (name, path) in &config.datasets {
            let id = DatasetId::new(name.clone()).map_err(SplitError::Configuration)?;
            entries.insert(id, PathBuf::from(path));
        }
        Ok(Self { entries })
    }

    /// Resolves a dataset identifier to its source path
    ///
    /// # Errors
    ///
    /// Returns `SplitError::UnknownDataset` listing the registered
    /// identifiers when `name` is not one of them.
    pub fn resolve(&self, name: &str) -> Result<&Path> {
        self.entries
            .get(name)
            .map(PathBuf::as_path)
            .ok_or_else(|| SplitError::UnknownDataset {
                name: name.to_string(),
                known: self.names(),
            })
    }

    /// Registered identifiers, sorted
    pub fn names(&self) -> Vec<String> {
        self.entries.keys().map(|id| id.as_str().to_string()).collect()
    }

    /// Iterates over the registered datasets in identifier order
    pub fn entries(&self) -> impl Iterator<Item = DatasetEntry> + '_ {
        self.entries
            .iter()
            .map(|(id, path)| DatasetEntry::new(id.clone(), path))
    }

    /// Number of registered datasets
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
