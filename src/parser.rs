//! Bucket inventory loading
//!
//! Reads the JSON inventory file (`{"buckets": [...]}`) into memory. This is
//! the only blocking I/O in the pipeline and it runs once, before any
//! analysis. A malformed record, including a `createdOn` value that is not
//! `YYYY-MM-DD`, aborts the whole load; there are no partial results.

use crate::models::BucketRecord;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

#[derive(Debug, Deserialize)]
struct BucketInventory {
    buckets: Vec<BucketRecord>,
}

pub struct InventoryParser;

impl InventoryParser {
    /// Load all bucket records from a JSON inventory file.
    pub fn load_file(path: &Path) -> Result<Vec<BucketRecord>> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open bucket inventory: {}", path.display()))?;
        let reader = BufReader::new(file);

        let inventory: BucketInventory = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse bucket inventory: {}", path.display()))?;

        info!(
            bucket_count = inventory.buckets.len(),
            file = %path.display(),
            "loaded bucket inventory"
        );

        Ok(inventory.buckets)
    }

    /// Parse records from an in-memory JSON document. Used by tests and by
    /// callers that already hold the inventory bytes.
    pub fn load_str(content: &str) -> Result<Vec<BucketRecord>> {
        let inventory: BucketInventory =
            serde_json::from_str(content).context("Failed to parse bucket inventory")?;
        Ok(inventory.buckets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_minimal_inventory() {
        let buckets = InventoryParser::load_str(
            r#"{"buckets": [{
                "name": "logs",
                "region": "us-east-1",
                "sizeGB": 120.5,
                "versioning": true,
                "createdOn": "2024-11-02",
                "tags": {"team": "platform"},
                "policies": []
            }]}"#,
        )
        .unwrap();

        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].name, "logs");
        assert_eq!(buckets[0].size_gb, 120.5);
        assert_eq!(buckets[0].created_on.to_string(), "2024-11-02");
    }

    #[test]
    fn test_missing_tags_and_policies_default_to_empty() {
        let buckets = InventoryParser::load_str(
            r#"{"buckets": [{
                "name": "bare",
                "region": "eu-west-1",
                "sizeGB": 5,
                "versioning": false,
                "createdOn": "2025-01-01"
            }]}"#,
        )
        .unwrap();

        assert!(buckets[0].tags.is_empty());
        assert!(!buckets[0].has_policies());
        assert_eq!(buckets[0].team(), "Unknown");
    }

    #[test]
    fn test_malformed_date_aborts_load() {
        let result = InventoryParser::load_str(
            r#"{"buckets": [{
                "name": "bad",
                "region": "eu-west-1",
                "sizeGB": 5,
                "versioning": false,
                "createdOn": "02/11/2024"
            }]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_inventory_is_not_an_error() {
        let buckets = InventoryParser::load_str(r#"{"buckets": []}"#).unwrap();
        assert!(buckets.is_empty());
    }
}
