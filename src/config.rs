//! Production configuration system
//!
//! Provides centralized configuration management with:
//! - Environment variable support
//! - Config file loading (optional)
//! - Runtime defaults
//! - Validation and type safety

use crate::analyzer::{
    DEFAULT_DELETION_SIZE_GB, DEFAULT_INACTIVITY_DAYS, DEFAULT_LARGE_AGE_DAYS,
    DEFAULT_LARGE_SIZE_GB,
};
use crate::pricing::COST_PER_GB_PER_MONTH;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::info;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Analysis thresholds and pricing
    pub analysis: AnalysisConfig,

    /// Paths configuration
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub output: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub large_size_threshold_gb: f64,
    pub large_age_threshold_days: i64,
    pub deletion_size_threshold_gb: f64,
    pub deletion_inactivity_days: i64,
    pub cost_per_gb_month: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    pub bucket_file: PathBuf,
    pub chart_output: PathBuf,
    pub log_directory: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: "ERROR".to_string(),
                format: "pretty".to_string(),
                output: "console".to_string(),
            },
            analysis: AnalysisConfig {
                large_size_threshold_gb: DEFAULT_LARGE_SIZE_GB,
                large_age_threshold_days: DEFAULT_LARGE_AGE_DAYS,
                deletion_size_threshold_gb: DEFAULT_DELETION_SIZE_GB,
                deletion_inactivity_days: DEFAULT_INACTIVITY_DAYS,
                cost_per_gb_month: COST_PER_GB_PER_MONTH,
            },
            paths: PathsConfig {
                bucket_file: PathBuf::from("buckets.json"),
                chart_output: PathBuf::from("region_cost_distribution.json"),
                log_directory: PathBuf::from("logs"),
            },
        }
    }
}

impl Config {
    /// Load configuration from environment, file, and defaults
    pub fn load() -> Result<Self> {
        let mut config = Config::default();

        // Try to load from config file if it exists
        let config_paths = [
            PathBuf::from("bucket-insight.toml"),
            PathBuf::from(".bucket-insight.toml"),
            dirs::config_dir()
                .map(|d| d.join("bucket-insight").join("config.toml"))
                .unwrap_or_default(),
        ];

        for path in &config_paths {
            if path.exists() {
                info!(config_file = %path.display(), "Loading configuration from file");
                config = Self::load_from_file(path)?;
                break;
            }
        }

        // Override with environment variables
        config.apply_env_overrides()?;

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        // Logging overrides
        if let Ok(val) = env::var("LOG_LEVEL") {
            self.logging.level = val;
        }
        if let Ok(val) = env::var("LOG_FORMAT") {
            self.logging.format = val;
        }
        if let Ok(val) = env::var("LOG_OUTPUT") {
            self.logging.output = val;
        }

        // Analysis overrides
        if let Ok(val) = env::var("BUCKET_INSIGHT_LARGE_SIZE_GB") {
            self.analysis.large_size_threshold_gb =
                val.parse().context("Invalid BUCKET_INSIGHT_LARGE_SIZE_GB")?;
        }
        if let Ok(val) = env::var("BUCKET_INSIGHT_LARGE_AGE_DAYS") {
            self.analysis.large_age_threshold_days =
                val.parse().context("Invalid BUCKET_INSIGHT_LARGE_AGE_DAYS")?;
        }
        if let Ok(val) = env::var("BUCKET_INSIGHT_DELETION_SIZE_GB") {
            self.analysis.deletion_size_threshold_gb = val
                .parse()
                .context("Invalid BUCKET_INSIGHT_DELETION_SIZE_GB")?;
        }
        if let Ok(val) = env::var("BUCKET_INSIGHT_INACTIVITY_DAYS") {
            self.analysis.deletion_inactivity_days =
                val.parse().context("Invalid BUCKET_INSIGHT_INACTIVITY_DAYS")?;
        }
        if let Ok(val) = env::var("BUCKET_INSIGHT_COST_PER_GB_MONTH") {
            self.analysis.cost_per_gb_month = val
                .parse()
                .context("Invalid BUCKET_INSIGHT_COST_PER_GB_MONTH")?;
        }

        // Path overrides
        if let Ok(val) = env::var("BUCKET_INSIGHT_FILE") {
            self.paths.bucket_file = PathBuf::from(val);
        }
        if let Ok(val) = env::var("BUCKET_INSIGHT_CHART_OUTPUT") {
            self.paths.chart_output = PathBuf::from(val);
        }
        if let Ok(val) = env::var("BUCKET_INSIGHT_LOG_DIR") {
            self.paths.log_directory = PathBuf::from(val);
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.analysis.cost_per_gb_month <= 0.0 {
            return Err(anyhow::anyhow!(
                "Cost per GB per month must be positive, got {}",
                self.analysis.cost_per_gb_month
            ));
        }

        if self.analysis.large_size_threshold_gb < 0.0
            || self.analysis.deletion_size_threshold_gb < 0.0
        {
            return Err(anyhow::anyhow!("Size thresholds cannot be negative"));
        }

        if self.analysis.large_age_threshold_days < 0 || self.analysis.deletion_inactivity_days < 0
        {
            return Err(anyhow::anyhow!("Age thresholds cannot be negative"));
        }

        Ok(())
    }
}

/// Global configuration instance
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Get the global configuration instance
pub fn get_config() -> &'static Config {
    CONFIG.get_or_init(|| match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: failed to load configuration, using defaults: {}", e);
            Config::default()
        }
    })
}
