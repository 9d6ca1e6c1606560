//! Cost distribution visualization
//!
//! The visualization collaborator: takes the region → total cost series
//! collapsed from the cost report, renders an ASCII distribution in the
//! terminal, and persists the labeled series as a JSON artifact for external
//! chart tooling. The engine hands over plain labeled numbers; everything
//! about presentation lives here.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::info;

const BAR_WIDTH: usize = 40;

#[derive(Debug, Serialize)]
struct SeriesPoint {
    label: String,
    value: f64,
}

#[derive(Debug, Serialize)]
struct ChartSeries {
    title: String,
    series: Vec<SeriesPoint>,
}

pub struct ChartRenderer;

impl ChartRenderer {
    /// Print a horizontal bar chart of the region cost distribution, largest
    /// first, with each region's share of the total.
    pub fn render_ascii(region_costs: &HashMap<String, f64>) {
        println!("\n{}", "=".repeat(80).bright_cyan());
        println!("{}", "Storage Cost Distribution by Region".bright_white().bold());
        println!("{}", "=".repeat(80).bright_cyan());

        if region_costs.is_empty() {
            println!("\nNo cost data to chart.\n");
            return;
        }

        let total: f64 = region_costs.values().sum();
        let max = region_costs.values().cloned().fold(0.0_f64, f64::max);

        let mut rows: Vec<_> = region_costs.iter().collect();
        rows.sort_by(|a, b| b.1.partial_cmp(a.1).unwrap_or(std::cmp::Ordering::Equal));

        let label_width = rows.iter().map(|(r, _)| r.len()).max().unwrap_or(0);

        println!();
        for (region, cost) in rows {
            let filled = if max > 0.0 {
                ((cost / max) * BAR_WIDTH as f64).round() as usize
            } else {
                0
            };
            let share = if total > 0.0 { cost / total * 100.0 } else { 0.0 };
            let bar = format!(
                "{}{}",
                "█".repeat(filled),
                "░".repeat(BAR_WIDTH - filled.min(BAR_WIDTH))
            );
            // Pad before coloring so ANSI codes don't skew the column width.
            println!(
                "{}  {} {} ({})",
                format!("{:label_width$}", region).bright_cyan(),
                bar.bright_green(),
                format!("${:.2}", cost).bright_white().bold(),
                format!("{:.1}%", share).bright_yellow()
            );
        }
        println!();
    }

    /// Persist the labeled series to disk for external chart rendering.
    pub fn save_series(region_costs: &HashMap<String, f64>, path: &Path) -> Result<()> {
        let mut series: Vec<SeriesPoint> = region_costs
            .iter()
            .map(|(label, value)| SeriesPoint {
                label: label.clone(),
                value: *value,
            })
            .collect();
        series.sort_by(|a, b| a.label.cmp(&b.label));

        let chart = ChartSeries {
            title: "S3 Storage Cost Distribution by Region".to_string(),
            series,
        };

        let content = serde_json::to_string_pretty(&chart)
            .context("Failed to serialize chart series")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write chart artifact: {}", path.display()))?;

        info!(file = %path.display(), "saved cost distribution series");
        Ok(())
    }
}
