// Shardprep - Dataset partitioner for multi-bus load-test replay
// Copyright (c) 2025 Shardprep Contributors
// Licensed under the MIT License

//! # Shardprep
//!
//! Shardprep prepares input data for a distributed load-testing harness: it
//! takes one large record file (a "dataset") and partitions it into
//! contiguous, non-overlapping shards, one per downstream bus process that
//! will later replay its shard against a central server.
//!
//! ## Overview
//!
//! A run is a single deterministic forward pass:
//!
//! - **Resolve** the dataset identifier to a source file via the registry
//! - **Load** the file into memory, separating the header from the records
//! - **Partition** the records into contiguous per-bus ranges
//! - **Write** one shard file per materialized bus directory, propagating
//!   the header to every shard and skipping missing destinations with a
//!   warning
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (registry, source loading, split pipeline)
//! - [`domain`] - Core domain types and the error taxonomy
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use shardprep::config::load_config;
//! use shardprep::core::split::{SplitCoordinator, SplitRequest};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config(None)?;
//!
//!     let coordinator = SplitCoordinator::new(config)?;
//!     let summary = coordinator.execute(&SplitRequest::new("small_100k"))?;
//!
//!     println!(
//!         "{} of {} buses received a shard",
//!         summary.written_count(),
//!         summary.bus_count
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`domain::Result`] over
//! [`domain::SplitError`]. An unknown dataset, a missing source file, or a
//! zero bus count is fatal and stops the run before any output is written.
//! A missing destination directory is not an error: that bus is skipped
//! with a warning and the run still succeeds.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
