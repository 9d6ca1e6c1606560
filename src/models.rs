//! Core Data Models
//!
//! This module defines the primary data structures used throughout the bucket
//! analysis system, from raw inventory records to the derived report views.
//!
//! ## Data Flow
//!
//! 1. **Raw Data**: [`BucketRecord`] - Individual records parsed from the JSON inventory
//! 2. **Cost Views**: [`CostReport`], [`TeamCost`], [`BucketLineItem`] - Region/team aggregates
//! 3. **Lifecycle Views**: [`DeletionAction`], [`DeletionPlan`] - Delete/archive classification
//!
//! ## Core Types
//!
//! ### Inventory
//! - [`BucketRecord`] - One bucket's metadata as loaded from storage
//!
//! ### Cost Reporting
//! - [`CostReport`] - Two-level region → team cost grouping
//! - [`TeamCost`] - Per-(region, team) running totals and line items
//! - [`BucketLineItem`] - One bucket's contribution to a team's cost
//!
//! ### Lifecycle Classification
//! - [`DeletionAction`] - The outcome for a single qualifying bucket
//! - [`DeletionPlan`] - All qualifying buckets split into the two outcome sets
//!
//! ## Features
//!
//! - **Serde Integration**: All public types support serialization/deserialization
//! - **Optional Fields**: Missing tags and policies default rather than erroring
//! - **Type Safety**: Tag lookups go through accessors with documented defaults

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Team grouping key used when a bucket carries no `team` tag.
pub const UNKNOWN_TEAM: &str = "Unknown";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketRecord {
    pub name: String,
    pub region: String,
    #[serde(rename = "sizeGB")]
    pub size_gb: f64,
    pub versioning: bool,
    #[serde(rename = "createdOn")]
    pub created_on: NaiveDate,
    #[serde(default)]
    pub tags: HashMap<String, String>,
    /// Lifecycle policy entries. Only emptiness is significant to the
    /// classifier, so the entries stay schemaless.
    #[serde(default)]
    pub policies: Vec<serde_json::Value>,
}

impl BucketRecord {
    /// The `team` tag, defaulting to [`UNKNOWN_TEAM`] when absent.
    pub fn team(&self) -> &str {
        self.tags.get("team").map(String::as_str).unwrap_or(UNKNOWN_TEAM)
    }

    /// The `environment` tag, if present.
    pub fn environment(&self) -> Option<&str> {
        self.tags.get("environment").map(String::as_str)
    }

    /// True when the `environment` tag equals `"prod"`. An absent tag is
    /// not production.
    pub fn is_prod(&self) -> bool {
        self.environment() == Some("prod")
    }

    pub fn has_policies(&self) -> bool {
        !self.policies.is_empty()
    }
}

/// One bucket's contribution to a (region, team) cost group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketLineItem {
    pub name: String,
    pub size: f64,
    pub monthly_cost: f64,
}

/// Running totals for one (region, team) pair. Line items keep input order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamCost {
    pub total_size: f64,
    pub total_cost: f64,
    pub buckets: Vec<BucketLineItem>,
}

/// Region → team → [`TeamCost`] mapping. Groups are created lazily on first
/// encounter; there is no pre-declared region/team taxonomy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CostReport {
    pub regions: HashMap<String, HashMap<String, TeamCost>>,
}

impl CostReport {
    /// Collapse to region → total cost by summing every team within the
    /// region. Pure reduction over the aggregated report; this is the series
    /// handed to the visualization side.
    pub fn region_totals(&self) -> HashMap<String, f64> {
        self.regions
            .iter()
            .map(|(region, teams)| {
                let total = teams.values().map(|t| t.total_cost).sum();
                (region.clone(), total)
            })
            .collect()
    }

    pub fn total_cost(&self) -> f64 {
        self.regions
            .values()
            .flat_map(|teams| teams.values())
            .map(|t| t.total_cost)
            .sum()
    }

    pub fn total_size(&self) -> f64 {
        self.regions
            .values()
            .flat_map(|teams| teams.values())
            .map(|t| t.total_size)
            .sum()
    }
}

/// Outcome for a bucket that passed the deletion-candidate size/age filter.
/// A qualifying bucket lands in exactly one variant, which keeps the two
/// output sets disjoint by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeletionAction {
    /// Unprotected production bucket: no lifecycle policies and
    /// `environment == "prod"`.
    Delete,
    /// Everything else large-and-stale is moved to cold storage instead of
    /// destroyed.
    ArchiveToGlacier,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DeletionPlan {
    pub delete: Vec<BucketRecord>,
    pub archive_to_glacier: Vec<BucketRecord>,
}

impl DeletionPlan {
    pub fn push(&mut self, action: DeletionAction, bucket: BucketRecord) {
        match action {
            DeletionAction::Delete => self.delete.push(bucket),
            DeletionAction::ArchiveToGlacier => self.archive_to_glacier.push(bucket),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.delete.is_empty() && self.archive_to_glacier.is_empty()
    }
}
