//! Bucket Insight Library
//!
//! Cost and lifecycle analysis for an object-storage bucket fleet. The
//! library loads a JSON bucket inventory and derives three views from it:
//! large-and-stale bucket detection, a region/team cost breakdown, and
//! deletion/archival recommendations.
//!
//! ## Architecture Overview
//!
//! - [`models`] - Bucket records and the derived report structures
//! - [`parser`] - JSON inventory loading
//! - [`analyzer`] - The analysis engine holding all decision logic
//! - [`pricing`] - Per-GB-per-month cost model
//! - [`display`] - Terminal and JSON report formatting
//! - [`chart`] - Region cost distribution rendering and artifact output
//! - [`config`] - Configuration management with environment variable support
//! - [`logging`] - Structured logging with JSON and pretty-print formats
//!
//! ## Main Entry Point
//!
//! The primary interface is [`BucketAnalyzer`]:
//!
//! ```rust
//! use bucket_insight::{BucketAnalyzer, parser::InventoryParser};
//!
//! # fn example() -> anyhow::Result<()> {
//! let buckets = InventoryParser::load_str(r#"{"buckets": []}"#)?;
//! let analyzer = BucketAnalyzer::from_records(buckets);
//!
//! let large = analyzer.large_unused_buckets(80.0, 90);
//! let plan = analyzer.deletion_candidates(100.0, 20);
//! let report = analyzer.cost_report();
//! # Ok(())
//! # }
//! ```
//!
//! The engine is a pure function of its input: no mutable state survives a
//! call beyond the reference date cached at construction.

pub mod analyzer;
pub mod chart;
pub mod config;
pub mod display;
pub mod logging;
pub mod models;
pub mod parser;
pub mod pricing;

pub use analyzer::BucketAnalyzer;
pub use models::*;
