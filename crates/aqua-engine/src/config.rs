//! Configuration for the AquaSentinel engine

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Main engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Trained model endpoints
    #[serde(default)]
    pub models: ModelsConfig,

    /// Result cache
    #[serde(default)]
    pub cache: CacheConfig,

    /// Region data source
    #[serde(default)]
    pub data: DataConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Trained model endpoints. An absent URL means the fallback model serves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelsConfig {
    /// Base URL of the sequence predictor
    #[serde(default)]
    pub predictor_url: Option<String>,

    /// Base URL of the risk classifier
    #[serde(default)]
    pub classifier_url: Option<String>,

    /// Per-request timeout for model calls and the startup probe
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Seed for the fallback forecast jitter; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            predictor_url: None,
            classifier_url: None,
            timeout_ms: default_timeout_ms(),
            seed: None,
        }
    }
}

impl ModelsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Result cache configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Use the in-memory cache; when off every read is a miss
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_forecast_ttl")]
    pub forecast_ttl_secs: u64,

    #[serde(default = "default_alerts_ttl")]
    pub alerts_ttl_secs: u64,

    #[serde(default = "default_regions_ttl")]
    pub regions_ttl_secs: u64,

    #[serde(default = "default_stats_ttl")]
    pub stats_ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            forecast_ttl_secs: default_forecast_ttl(),
            alerts_ttl_secs: default_alerts_ttl(),
            regions_ttl_secs: default_regions_ttl(),
            stats_ttl_secs: default_stats_ttl(),
        }
    }
}

/// Region data source configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// JSON array of region profiles replacing the built-in dataset
    #[serde(default)]
    pub regions_path: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// JSON format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// Default value helpers
fn default_true() -> bool {
    true
}

fn default_timeout_ms() -> u64 {
    2000
}

fn default_forecast_ttl() -> u64 {
    300
}

fn default_alerts_ttl() -> u64 {
    120
}

fn default_regions_ttl() -> u64 {
    300
}

fn default_stats_ttl() -> u64 {
    600
}

fn default_log_level() -> String {
    "info".to_string()
}

impl EngineConfig {
    /// Load configuration: defaults, then an optional file, then
    /// `AQUA_`-prefixed environment variables (`AQUA_MODELS__TIMEOUT_MS`).
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        // Add default configuration
        builder = builder.add_source(config::Config::try_from(&EngineConfig::default())?);

        // Add file configuration if provided
        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("AQUA")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }
}
