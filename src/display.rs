//! Output Formatting and Display Management
//!
//! All console formatting for analysis results lives here, away from the
//! engine. Every report comes in two flavors: human-readable colored output
//! and structured JSON (`--json`) for programmatic consumption. The engine's
//! raw f64 sums are rounded here, at presentation time only.
//!
//! Region and team keys are sorted for display so runs over the same
//! inventory print identically; the underlying report grouping itself is
//! insertion-ordered only within line items.

use crate::models::{BucketRecord, CostReport, DeletionPlan};
use colored::Colorize;

pub struct DisplayManager;

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayManager {
    pub fn new() -> Self {
        Self
    }

    /// Per-bucket metadata listing.
    pub fn display_summary(&self, buckets: &[BucketRecord], json_output: bool) {
        if json_output {
            let output = serde_json::json!({"buckets": buckets});
            match serde_json::to_string_pretty(&output) {
                Ok(json_str) => println!("{}", json_str),
                Err(e) => eprintln!("Error serializing bucket summary to JSON: {}", e),
            }
            return;
        }

        println!("\n{}", "=".repeat(80).bright_cyan());
        println!("{}", "Bucket Summary".bright_white().bold());
        println!("{}", "=".repeat(80).bright_cyan());

        for bucket in buckets {
            println!("\n{} {}", "🪣".bright_blue(), bucket.name.bright_white().bold());
            println!("   Region: {}", bucket.region.bright_cyan());
            println!("   Size: {}", format!("{} GB", bucket.size_gb).bright_white());
            println!(
                "   Versioning: {}",
                if bucket.versioning {
                    "Enabled".bright_green()
                } else {
                    "Disabled".bright_yellow()
                }
            );
            println!("   Created On: {}", bucket.created_on.to_string().bright_white());
        }
        println!();
    }

    /// Large-and-stale buckets found by the detector.
    pub fn display_large_unused(&self, buckets: &[&BucketRecord], json_output: bool) {
        if json_output {
            let output = serde_json::json!({"large_unused": buckets});
            match serde_json::to_string_pretty(&output) {
                Ok(json_str) => println!("{}", json_str),
                Err(e) => eprintln!("Error serializing large-unused report to JSON: {}", e),
            }
            return;
        }

        println!("\n{}", "=".repeat(80).bright_cyan());
        println!("{}", "Large Unused Buckets".bright_white().bold());
        println!("{}", "=".repeat(80).bright_cyan());

        if buckets.is_empty() {
            println!("\nNo large unused buckets found.\n");
            return;
        }

        println!();
        for bucket in buckets {
            println!(
                "{} {} — {} in {}",
                "📦".bright_yellow(),
                bucket.name.bright_white().bold(),
                format!("{} GB", bucket.size_gb).bright_yellow(),
                bucket.region.bright_cyan()
            );
        }
        println!();
    }

    /// Region/team cost breakdown.
    pub fn display_cost_report(&self, report: &CostReport, json_output: bool) {
        if json_output {
            let output = serde_json::json!({"cost_report": report});
            match serde_json::to_string_pretty(&output) {
                Ok(json_str) => println!("{}", json_str),
                Err(e) => eprintln!("Error serializing cost report to JSON: {}", e),
            }
            return;
        }

        println!("\n{}", "=".repeat(80).bright_cyan());
        println!("{}", "Storage Cost Report".bright_white().bold());
        println!("{}", "=".repeat(80).bright_cyan());

        println!(
            "\n{} {} total monthly\n",
            "💰".bright_yellow(),
            format!("${:.2}", report.total_cost()).bright_green().bold()
        );

        let mut regions: Vec<_> = report.regions.iter().collect();
        regions.sort_by(|a, b| a.0.cmp(b.0));

        for (region, teams) in regions {
            println!("{} {}", "🌍".bright_blue(), region.bright_white().bold());

            let mut teams: Vec<_> = teams.iter().collect();
            teams.sort_by(|a, b| a.0.cmp(b.0));

            for (team, cost) in teams {
                println!(
                    "   {}: {} ({} GB, {} buckets)",
                    team.bright_cyan(),
                    format!("${:.2}", cost.total_cost).bright_green(),
                    format!("{:.0}", cost.total_size).bright_white(),
                    cost.buckets.len()
                );
                for item in &cost.buckets {
                    println!(
                        "      {} — {} GB, {}/month",
                        item.name,
                        item.size,
                        format!("${:.2}", item.monthly_cost).bright_green()
                    );
                }
            }
            println!();
        }
    }

    /// Deletion and archival recommendations.
    pub fn display_candidates(&self, plan: &DeletionPlan, json_output: bool) {
        if json_output {
            let output = serde_json::json!({"candidates": plan});
            match serde_json::to_string_pretty(&output) {
                Ok(json_str) => println!("{}", json_str),
                Err(e) => eprintln!("Error serializing deletion candidates to JSON: {}", e),
            }
            return;
        }

        println!("\n{}", "=".repeat(80).bright_cyan());
        println!("{}", "Deletion Candidates".bright_white().bold());
        println!("{}", "=".repeat(80).bright_cyan());

        if plan.is_empty() {
            println!("\nNo deletion or archival candidates found.\n");
            return;
        }

        println!("\n{} Buckets to delete:", "🗑️".bright_red());
        if plan.delete.is_empty() {
            println!("   (none)");
        }
        for bucket in &plan.delete {
            println!(
                "   {} ({} GB)",
                bucket.name.bright_white().bold(),
                format!("{}", bucket.size_gb).bright_yellow()
            );
        }

        println!("\n{} Buckets to archive to Glacier:", "🧊".bright_blue());
        if plan.archive_to_glacier.is_empty() {
            println!("   (none)");
        }
        for bucket in &plan.archive_to_glacier {
            println!(
                "   {} ({} GB)",
                bucket.name.bright_white().bold(),
                format!("{}", bucket.size_gb).bright_yellow()
            );
        }
        println!();
    }
}
