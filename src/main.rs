use anyhow::Result;
use bucket_insight::analyzer::BucketAnalyzer;
use bucket_insight::chart::ChartRenderer;
use bucket_insight::config::get_config;
use bucket_insight::display::DisplayManager;
use bucket_insight::logging::init_logging;
use bucket_insight::parser::InventoryParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "bucket-insight")]
#[command(about = "Fast Rust implementation for S3 bucket cost and lifecycle analysis")]
#[command(version = "1.0.0")]
struct Cli {
    /// Bucket inventory JSON file (defaults to configured path)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show per-bucket metadata summary
    Summary {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Find large buckets unused past an age threshold
    LargeUnused {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
        /// Minimum size in GB (strict, exclusive)
        #[arg(long)]
        size_threshold: Option<f64>,
        /// Minimum age in days (strict, exclusive)
        #[arg(long)]
        age_threshold: Option<i64>,
    },
    /// Show the region/team cost report
    Cost {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Show deletion and archival recommendations
    Candidates {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
        /// Minimum size in GB (strict, exclusive)
        #[arg(long)]
        size_threshold: Option<f64>,
        /// Minimum age in days (strict, exclusive)
        #[arg(long)]
        inactivity_days: Option<i64>,
    },
    /// Render the region cost distribution and save the series artifact
    Chart {
        /// Output path for the chart series artifact
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = get_config();

    let bucket_file = cli.file.unwrap_or_else(|| config.paths.bucket_file.clone());

    let analyzer = match load_analyzer(&bucket_file) {
        Ok(analyzer) => analyzer,
        Err(e) => return handle_error(e, json_requested(&cli.command)),
    };
    let display = DisplayManager::new();

    match cli.command {
        Some(Commands::Summary { json }) => {
            display.display_summary(analyzer.buckets(), json);
        }
        Some(Commands::LargeUnused {
            json,
            size_threshold,
            age_threshold,
        }) => {
            let size = size_threshold.unwrap_or(config.analysis.large_size_threshold_gb);
            let age = age_threshold.unwrap_or(config.analysis.large_age_threshold_days);
            display.display_large_unused(&analyzer.large_unused_buckets(size, age), json);
        }
        Some(Commands::Cost { json }) => {
            let report = analyzer.cost_report_with_rate(config.analysis.cost_per_gb_month);
            display.display_cost_report(&report, json);
        }
        Some(Commands::Candidates {
            json,
            size_threshold,
            inactivity_days,
        }) => {
            let size = size_threshold.unwrap_or(config.analysis.deletion_size_threshold_gb);
            let days = inactivity_days.unwrap_or(config.analysis.deletion_inactivity_days);
            display.display_candidates(&analyzer.deletion_candidates(size, days), json);
        }
        Some(Commands::Chart { output }) => {
            let report = analyzer.cost_report_with_rate(config.analysis.cost_per_gb_month);
            let region_costs = report.region_totals();
            ChartRenderer::render_ascii(&region_costs);
            let path = output.unwrap_or_else(|| config.paths.chart_output.clone());
            if let Err(e) = ChartRenderer::save_series(&region_costs, &path) {
                return handle_error(e, false);
            }
        }
        None => {
            // Full one-shot analysis with configured defaults.
            display.display_summary(analyzer.buckets(), false);
            display.display_large_unused(
                &analyzer.large_unused_buckets(
                    config.analysis.large_size_threshold_gb,
                    config.analysis.large_age_threshold_days,
                ),
                false,
            );
            let report = analyzer.cost_report_with_rate(config.analysis.cost_per_gb_month);
            display.display_cost_report(&report, false);
            display.display_candidates(
                &analyzer.deletion_candidates(
                    config.analysis.deletion_size_threshold_gb,
                    config.analysis.deletion_inactivity_days,
                ),
                false,
            );
            let region_costs = report.region_totals();
            ChartRenderer::render_ascii(&region_costs);
            if let Err(e) = ChartRenderer::save_series(&region_costs, &config.paths.chart_output) {
                return handle_error(e, false);
            }
        }
    }

    Ok(())
}

fn load_analyzer(bucket_file: &std::path::Path) -> Result<BucketAnalyzer> {
    let buckets = InventoryParser::load_file(bucket_file)?;
    Ok(BucketAnalyzer::from_records(buckets))
}

fn json_requested(command: &Option<Commands>) -> bool {
    matches!(
        command,
        Some(Commands::Summary { json: true })
            | Some(Commands::LargeUnused { json: true, .. })
            | Some(Commands::Cost { json: true })
            | Some(Commands::Candidates { json: true, .. })
    )
}

fn handle_error(e: anyhow::Error, json: bool) -> Result<()> {
    if json {
        println!("{{\"error\": \"{}\"}}", e);
    } else {
        eprintln!("Error: {:#}", e);
    }
    process::exit(1);
}
