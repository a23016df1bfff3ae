//! AquaSentinel CLI - groundwater risk and forecast queries
//!
//! Runs the engine in-process and prints results as JSON:
//! - region listings, details and national statistics
//! - six-month depth forecasts
//! - contamination risk scores and alert feeds
//! - policy intervention simulations

use anyhow::Context;
use aqua_engine::{AquaService, EngineConfig};
use aqua_risk::RiskFeatures;
use aqua_types::SimulationInput;
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod output;

use output::{print_output, OutputFormat};

/// AquaSentinel CLI
#[derive(Parser)]
#[command(name = "aquasentinel")]
#[command(about = "AquaSentinel - groundwater depletion and contamination risk engine", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "AQUA_CONFIG")]
    config: Option<String>,

    /// Trained sequence predictor endpoint
    #[arg(long, env = "AQUA_PREDICTOR_URL")]
    predictor_url: Option<String>,

    /// Trained risk classifier endpoint
    #[arg(long, env = "AQUA_CLASSIFIER_URL")]
    classifier_url: Option<String>,

    /// JSON file of region profiles replacing the built-in dataset
    #[arg(long, env = "AQUA_REGIONS")]
    regions: Option<String>,

    /// Seed for the fallback forecast jitter
    #[arg(long)]
    seed: Option<u64>,

    /// Disable the result cache
    #[arg(long)]
    no_cache: bool,

    /// Output format
    #[arg(short, long, default_value = "pretty")]
    output: OutputFormat,

    /// Log level
    #[arg(long, env = "AQUA_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long, env = "AQUA_LOG_JSON")]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// List all regions
    Regions,

    /// National statistics
    Stats,

    /// Single region detail with contamination status
    Region { name: String },

    /// Regions at a risk level (low, moderate, high, critical)
    Level { level: String },

    /// Six-month depth forecast for a region
    Forecast { region: String },

    /// Contamination risk score for a region
    Risk { region: String },

    /// Contamination risk score for a feature object, e.g. '{"depth_m": 42}'
    Score {
        features: String,

        /// Label reported in the result
        #[arg(long, default_value = "custom")]
        label: String,
    },

    /// Alert feeds
    Alerts {
        /// Critical regions only
        #[arg(long, conflicts_with = "contamination")]
        critical: bool,

        /// Contamination issues for every region
        #[arg(long)]
        contamination: bool,
    },

    /// Run a policy intervention simulation
    Simulate {
        #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
        dams: i32,

        #[arg(long, default_value_t = 30, allow_negative_numbers = true)]
        drip_pct: i32,

        #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
        rwh_units: i32,

        #[arg(long, default_value_t = 20, allow_negative_numbers = true)]
        crop_diversification: i32,

        /// Run a named preset instead
        #[arg(long)]
        preset: Option<String>,
    },

    /// Example intervention scenarios
    Presets,

    /// Model and cache status
    Status,
}

fn init_tracing(level: &str, json: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| level.to_string().into());

    // Logs go to stderr so stdout stays parseable.
    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config =
        EngineConfig::load(cli.config.as_deref()).context("failed to load configuration")?;

    // Override with CLI args
    if cli.predictor_url.is_some() {
        config.models.predictor_url = cli.predictor_url.clone();
    }
    if cli.classifier_url.is_some() {
        config.models.classifier_url = cli.classifier_url.clone();
    }
    if cli.regions.is_some() {
        config.data.regions_path = cli.regions.clone();
    }
    if cli.seed.is_some() {
        config.models.seed = cli.seed;
    }
    if cli.no_cache {
        config.cache.enabled = false;
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    config.logging.json |= cli.json_logs;

    init_tracing(&config.logging.level, config.logging.json);

    let service = AquaService::from_config(&config).await?;
    let format = cli.output;

    match cli.command {
        Commands::Regions => print_output(&service.list_regions().await?, format),
        Commands::Stats => print_output(&service.national_stats().await?, format),
        Commands::Region { name } => print_output(&service.region_detail(&name).await?, format),
        Commands::Level { level } => print_output(&service.regions_by_risk(&level).await?, format),
        Commands::Forecast { region } => print_output(&service.forecast(&region).await?, format),
        Commands::Risk { region } => {
            print_output(&service.contamination_risk(&region).await?, format)
        }
        Commands::Score { features, label } => {
            let features: RiskFeatures =
                serde_json::from_str(&features).context("features must be a JSON object")?;
            print_output(&service.score_features(&label, &features).await, format)
        }
        Commands::Alerts {
            critical,
            contamination,
        } => {
            if contamination {
                print_output(&service.contamination_alerts().await?, format)
            } else if critical {
                print_output(&service.critical_alerts().await?, format)
            } else {
                print_output(&service.active_alerts().await?, format)
            }
        }
        Commands::Simulate {
            dams,
            drip_pct,
            rwh_units,
            crop_diversification,
            preset,
        } => match preset {
            Some(name) => print_output(&service.simulate_preset(&name)?, format),
            None => {
                let input = SimulationInput::new(dams, drip_pct, rwh_units, crop_diversification);
                let results = service.simulate(&input)?;
                print_output(&json!({ "inputs": input, "results": results }), format)
            }
        },
        Commands::Presets => print_output(&service.presets(), format),
        Commands::Status => print_output(
            &json!({
                "models": service.models(),
                "cache": service.cache_status(),
            }),
            format,
        ),
    }
}
