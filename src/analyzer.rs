//! Bucket Insight Engine
//!
//! The analysis engine that turns a flat bucket inventory into derived views:
//!
//! - **Large-unused detection**: buckets over a size threshold that have aged
//!   past an inactivity threshold
//! - **Deletion/archival classification**: qualifying buckets routed into
//!   exactly one of two outcome sets
//! - **Cost aggregation**: region → team cost breakdown with per-bucket
//!   line items
//!
//! Every view is a pure function of the loaded records plus the engine's
//! reference date, so repeated invocations over the same input are
//! byte-identical. The reference date is fixed at construction: either
//! supplied by the caller (tests) or derived as the latest creation date in
//! the inventory, which guarantees every computed age is non-negative.
//!
//! All thresholds are strict: a bucket exactly at a threshold never
//! qualifies.

use crate::models::{BucketLineItem, BucketRecord, CostReport, DeletionAction, DeletionPlan};
use crate::pricing;
use chrono::NaiveDate;
use tracing::debug;

/// Default size floor (GB) for the large-unused detector.
pub const DEFAULT_LARGE_SIZE_GB: f64 = 80.0;
/// Default age floor (days) for the large-unused detector.
pub const DEFAULT_LARGE_AGE_DAYS: i64 = 90;
/// Default size floor (GB) for deletion candidacy.
pub const DEFAULT_DELETION_SIZE_GB: f64 = 100.0;
/// Default inactivity floor (days) for deletion candidacy.
pub const DEFAULT_INACTIVITY_DAYS: i64 = 20;

pub struct BucketAnalyzer {
    buckets: Vec<BucketRecord>,
    reference_date: NaiveDate,
}

impl BucketAnalyzer {
    /// Build an engine with an explicit reference date. Ages are computed
    /// against this date; callers supplying a date earlier than some records
    /// will see negative ages, which never satisfy the strict thresholds.
    pub fn new(buckets: Vec<BucketRecord>, reference_date: NaiveDate) -> Self {
        Self {
            buckets,
            reference_date,
        }
    }

    /// Build an engine whose reference date is the latest `createdOn` in the
    /// inventory, simulating "now" from the data itself.
    pub fn from_records(buckets: Vec<BucketRecord>) -> Self {
        // Empty inventory falls back to the epoch; every view is empty then
        // anyway.
        let reference_date = buckets
            .iter()
            .map(|b| b.created_on)
            .max()
            .unwrap_or_default();
        debug!(%reference_date, bucket_count = buckets.len(), "derived reference date");
        Self::new(buckets, reference_date)
    }

    pub fn buckets(&self) -> &[BucketRecord] {
        &self.buckets
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Whole calendar days between a bucket's creation and the reference
    /// date. The single age rule shared by every classifier below.
    pub fn age_days(&self, bucket: &BucketRecord) -> i64 {
        (self.reference_date - bucket.created_on).num_days()
    }

    /// Buckets strictly larger than `size_threshold` GB and strictly older
    /// than `age_threshold` days. Both conditions must hold; input order is
    /// preserved.
    pub fn large_unused_buckets(
        &self,
        size_threshold: f64,
        age_threshold: i64,
    ) -> Vec<&BucketRecord> {
        self.buckets
            .iter()
            .filter(|b| b.size_gb > size_threshold && self.age_days(b) > age_threshold)
            .collect()
    }

    /// Classify one bucket against the deletion-candidate rule. `None` means
    /// the bucket fails the size/age filter and belongs to neither outcome
    /// set. Deletion is reserved for unprotected production buckets; every
    /// other qualifier is archived instead.
    pub fn classify(
        &self,
        bucket: &BucketRecord,
        size_threshold: f64,
        inactivity_days: i64,
    ) -> Option<DeletionAction> {
        if bucket.size_gb > size_threshold && self.age_days(bucket) > inactivity_days {
            if !bucket.has_policies() && bucket.is_prod() {
                Some(DeletionAction::Delete)
            } else {
                Some(DeletionAction::ArchiveToGlacier)
            }
        } else {
            None
        }
    }

    /// Partition qualifying buckets into the delete and archive sets.
    pub fn deletion_candidates(&self, size_threshold: f64, inactivity_days: i64) -> DeletionPlan {
        let mut plan = DeletionPlan::default();
        for bucket in &self.buckets {
            if let Some(action) = self.classify(bucket, size_threshold, inactivity_days) {
                debug!(bucket = %bucket.name, ?action, "deletion candidate");
                plan.push(action, bucket.clone());
            }
        }
        plan
    }

    /// Aggregate monthly cost per region and team at the standard rate.
    pub fn cost_report(&self) -> CostReport {
        self.cost_report_with_rate(pricing::COST_PER_GB_PER_MONTH)
    }

    /// Aggregate monthly cost per region and team. Groups are created on
    /// first encounter; line items within a group keep input order. Sums are
    /// raw running f64 totals, rounded only at display time.
    pub fn cost_report_with_rate(&self, rate_per_gb_month: f64) -> CostReport {
        let mut report = CostReport::default();

        for bucket in &self.buckets {
            let monthly_cost = pricing::monthly_cost(bucket.size_gb, rate_per_gb_month);

            let team_cost = report
                .regions
                .entry(bucket.region.clone())
                .or_default()
                .entry(bucket.team().to_string())
                .or_default();

            team_cost.total_size += bucket.size_gb;
            team_cost.total_cost += monthly_cost;
            team_cost.buckets.push(BucketLineItem {
                name: bucket.name.clone(),
                size: bucket.size_gb,
                monthly_cost,
            });
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn bucket(name: &str, size_gb: f64, created_on: &str) -> BucketRecord {
        BucketRecord {
            name: name.to_string(),
            region: "us-east-1".to_string(),
            size_gb,
            versioning: false,
            created_on: created_on.parse().unwrap(),
            tags: HashMap::new(),
            policies: Vec::new(),
        }
    }

    fn reference() -> NaiveDate {
        "2025-06-30".parse().unwrap()
    }

    #[test]
    fn test_age_is_whole_days_from_reference() {
        let analyzer = BucketAnalyzer::new(vec![bucket("a", 1.0, "2025-06-20")], reference());
        assert_eq!(analyzer.age_days(&analyzer.buckets()[0]), 10);
    }

    #[test]
    fn test_derived_reference_date_is_max_created_on() {
        let analyzer = BucketAnalyzer::from_records(vec![
            bucket("old", 1.0, "2024-01-15"),
            bucket("new", 1.0, "2025-03-01"),
        ]);
        assert_eq!(analyzer.reference_date(), "2025-03-01".parse().unwrap());
        for b in analyzer.buckets() {
            assert!(analyzer.age_days(b) >= 0);
        }
    }

    #[test]
    fn test_empty_inventory_views_are_empty() {
        let analyzer = BucketAnalyzer::from_records(Vec::new());
        assert!(analyzer.large_unused_buckets(80.0, 90).is_empty());
        assert!(analyzer.deletion_candidates(100.0, 20).is_empty());
        assert!(analyzer.cost_report().regions.is_empty());
    }

    #[test]
    fn test_thresholds_are_strict() {
        // Exactly at both thresholds: 80 GB, 90 days old.
        let analyzer = BucketAnalyzer::new(vec![bucket("edge", 80.0, "2025-04-01")], reference());
        assert_eq!(analyzer.age_days(&analyzer.buckets()[0]), 90);
        assert!(analyzer.large_unused_buckets(80.0, 90).is_empty());
        assert!(analyzer.large_unused_buckets(79.9, 90).is_empty());
        assert!(analyzer.large_unused_buckets(79.9, 89).len() == 1);
    }

    #[test]
    fn test_large_unused_requires_both_conditions() {
        let analyzer = BucketAnalyzer::new(
            vec![
                bucket("big-fresh", 500.0, "2025-06-29"),
                bucket("small-old", 10.0, "2020-01-01"),
                bucket("big-old", 500.0, "2020-01-01"),
            ],
            reference(),
        );
        let hits = analyzer.large_unused_buckets(80.0, 90);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "big-old");
    }

    #[test]
    fn test_large_unused_preserves_input_order() {
        let analyzer = BucketAnalyzer::new(
            vec![
                bucket("z", 500.0, "2020-01-01"),
                bucket("a", 400.0, "2020-01-01"),
            ],
            reference(),
        );
        let names: Vec<_> = analyzer
            .large_unused_buckets(80.0, 90)
            .iter()
            .map(|b| b.name.as_str())
            .collect();
        assert_eq!(names, vec!["z", "a"]);
    }

    #[test]
    fn test_classifier_routes_unprotected_prod_to_delete() {
        let mut prod = bucket("prod-logs", 150.0, "2025-01-01");
        prod.tags.insert("environment".to_string(), "prod".to_string());

        let mut staged = bucket("staging-logs", 150.0, "2025-01-01");
        staged
            .tags
            .insert("environment".to_string(), "staging".to_string());

        let mut protected = bucket("prod-protected", 150.0, "2025-01-01");
        protected
            .tags
            .insert("environment".to_string(), "prod".to_string());
        protected.policies.push(serde_json::json!({"transition": "GLACIER"}));

        let analyzer = BucketAnalyzer::new(vec![prod, staged, protected], reference());
        let plan = analyzer.deletion_candidates(100.0, 20);

        assert_eq!(plan.delete.len(), 1);
        assert_eq!(plan.delete[0].name, "prod-logs");
        assert_eq!(plan.archive_to_glacier.len(), 2);
    }

    #[test]
    fn test_classifier_skips_non_qualifying_buckets() {
        let analyzer = BucketAnalyzer::new(
            vec![bucket("small", 10.0, "2020-01-01"), bucket("fresh", 500.0, "2025-06-25")],
            reference(),
        );
        assert!(analyzer.deletion_candidates(100.0, 20).is_empty());
    }

    #[test]
    fn test_cost_report_totals_match_inventory() {
        let mut a = bucket("a", 100.0, "2025-01-01");
        a.tags.insert("team".to_string(), "data".to_string());
        let mut b = bucket("b", 200.0, "2025-01-01");
        b.tags.insert("team".to_string(), "data".to_string());

        let analyzer = BucketAnalyzer::new(vec![a, b], reference());
        let report = analyzer.cost_report();

        let team = &report.regions["us-east-1"]["data"];
        assert!((team.total_size - 300.0).abs() < 1e-9);
        assert!((team.total_cost - 6.9).abs() < 1e-9);
        assert_eq!(team.buckets.len(), 2);
        assert_eq!(team.buckets[0].name, "a");
        assert_eq!(team.buckets[1].name, "b");
    }

    #[test]
    fn test_untagged_bucket_grouped_under_unknown() {
        let analyzer = BucketAnalyzer::new(vec![bucket("orphan", 50.0, "2025-01-01")], reference());
        let report = analyzer.cost_report();
        assert!(report.regions["us-east-1"].contains_key("Unknown"));
    }
}
