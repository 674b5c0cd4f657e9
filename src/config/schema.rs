//! Configuration schema types
//!
//! This module defines the configuration structure for Shardprep. The whole
//! file is optional; every section falls back to built-in defaults so the
//! tool is usable with zero configuration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Main Shardprep configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShardprepConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Split settings
    #[serde(default)]
    pub split: SplitConfig,

    /// Destination layout convention
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Dataset registry: identifier -> source file path
    #[serde(default = "default_datasets")]
    pub datasets: BTreeMap<String, String>,
}

impl Default for ShardprepConfig {
    fn default() -> Self {
        Self {
            application: ApplicationConfig::default(),
            split: SplitConfig::default(),
            layout: LayoutConfig::default(),
            datasets: default_datasets(),
        }
    }
}

impl ShardprepConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.split.validate()?;
        self.layout.validate()?;

        if self.datasets.is_empty() {
            return Err("At least one dataset must be registered under [datasets]".to_string());
        }
        for (name, path) in &self.datasets {
            if name.trim().is_empty() {
                return Err("Dataset identifiers cannot be empty".to_string());
            }
            if path.trim().is_empty() {
                return Err(format!("Dataset '{name}' has an empty source path"));
            }
        }
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Split settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Bus count used when the command line omits one
    #[serde(default = "default_bus_count")]
    pub default_bus_count: usize,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            default_bus_count: default_bus_count(),
        }
    }
}

impl SplitConfig {
    fn validate(&self) -> Result<(), String> {
        if self.default_bus_count == 0 {
            return Err("default_bus_count must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Destination layout convention
///
/// For bus index `i` the destination directory is
/// `<destination_root>/<bus_dir_prefix><i>/<data_subdir>` and the output file
/// within it has a fixed name. The layout is keyed only by the bus index, so
/// a run against a superset of possible buses is deterministic: directories
/// that exist receive a shard, the rest are skipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Root directory holding the per-bus directories
    #[serde(default = "default_destination_root")]
    pub destination_root: String,

    /// Per-bus directory name prefix, completed by the 1-based bus index
    #[serde(default = "default_bus_dir_prefix")]
    pub bus_dir_prefix: String,

    /// Data subdirectory inside each bus directory
    #[serde(default = "default_data_subdir")]
    pub data_subdir: String,

    /// Fixed name of the output file written into each data subdirectory
    #[serde(default = "default_output_file")]
    pub output_file: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            destination_root: default_destination_root(),
            bus_dir_prefix: default_bus_dir_prefix(),
            data_subdir: default_data_subdir(),
            output_file: default_output_file(),
        }
    }
}

impl LayoutConfig {
    fn validate(&self) -> Result<(), String> {
        if self.destination_root.trim().is_empty() {
            return Err("destination_root cannot be empty".to_string());
        }
        if self.bus_dir_prefix.trim().is_empty() {
            return Err("bus_dir_prefix cannot be empty".to_string());
        }
        if self.output_file.trim().is_empty() {
            return Err("output_file cannot be empty".to_string());
        }
        Ok(())
    }

    /// Destination directory for a bus, under the given root
    pub fn bus_dir(&self, root: &Path, bus_index: usize) -> PathBuf {
        let mut dir = root.join(format!("{}{}", self.bus_dir_prefix, bus_index));
        if !self.data_subdir.is_empty() {
            dir = dir.join(&self.data_subdir);
        }
        dir
    }

    /// Output file path for a bus, under the given root
    pub fn output_path(&self, root: &Path, bus_index: usize) -> PathBuf {
        self.bus_dir(root, bus_index).join(&self.output_file)
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_bus_count() -> usize {
    3
}

fn default_destination_root() -> String {
    "dist".to_string()
}

fn default_bus_dir_prefix() -> String {
    "bus_".to_string()
}

fn default_data_subdir() -> String {
    "data".to_string()
}

fn default_output_file() -> String {
    "datagrams.csv".to_string()
}

fn default_datasets() -> BTreeMap<String, String> {
    BTreeMap::from([
        (
            "small_100k".to_string(),
            "data/experiments/small_100k.csv".to_string(),
        ),
        (
            "medium_1m".to_string(),
            "data/experiments/medium_1m.csv".to_string(),
        ),
        (
            "large_8m".to_string(),
            "data/experiments/large_8m.csv".to_string(),
        ),
    ])
}
