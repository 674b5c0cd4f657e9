//! Configuration management for Shardprep.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation. The configuration file is entirely optional: every setting
//! has a built-in default, including the dataset registry, so `shardprep run`
//! works on a fresh checkout.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use shardprep::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Load configuration from shardprep.toml, or defaults if absent
//! let config = load_config(None)?;
//!
//! println!("Destination root: {}", config.layout.destination_root);
//! for (name, path) in &config.datasets {
//!     println!("{name} -> {path}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [split]
//! default_bus_count = 3
//!
//! [layout]
//! destination_root = "dist"
//! bus_dir_prefix = "bus_"
//! data_subdir = "data"
//! output_file = "datagrams.csv"
//!
//! [datasets]
//! small_100k = "data/experiments/small_100k.csv"
//! medium_1m = "data/experiments/medium_1m.csv"
//! large_8m = "data/experiments/large_8m.csv"
//! ```
//!
//! # Environment Variables
//!
//! Settings can be overridden with `SHARDPREP_<SECTION>_<KEY>` variables,
//! e.g. `SHARDPREP_LAYOUT_DESTINATION_ROOT=/srv/buses`.

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, DEFAULT_CONFIG_PATH};
pub use schema::{ApplicationConfig, LayoutConfig, ShardprepConfig, SplitConfig};
