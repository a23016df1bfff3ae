//! Service facade composing the region source, cache and engines.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use aqua_forecast::{ForecastEngine, SeasonalModel};
use aqua_risk::{
    build_alerts, contamination_report, Alert, AlertFilter, ContaminationAlert, RiskFeatures,
    RiskScorer,
};
use aqua_simulator::PresetOutcome;
use aqua_store::{
    CacheStatus, DisabledCache, InMemoryRegionStore, InMemoryResultCache, RegionStore,
    ResultCache,
};
use aqua_types::{
    ForecastResult, NationalStats, RegionDetail, RegionProfile, RegionSummary, RiskLevel,
    RiskScoreResult, SimulationInput, SimulationResult,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::config::{CacheConfig, EngineConfig};
use crate::error::{EngineError, EngineResult};
use crate::models::{ModelAvailability, ModelRegistry};
use crate::reports;

/// Cache key of the all-regions listing.
pub const REGIONS_CACHE_KEY: &str = "gw:all";

/// Cache key of the national statistics.
pub const STATS_CACHE_KEY: &str = "gw:stats";

/// Cache key of the active alert feed.
pub const ALERTS_CACHE_KEY: &str = "alerts:active";

/// Cache key of one region's forecast.
pub fn forecast_cache_key(region: &str) -> String {
    format!("forecast:{}", region)
}

/// Entry point for every engine operation.
///
/// Immutable after construction and shared across requests. Cached
/// operations read the cache first and write the fresh result back; the
/// cache never changes what a caller sees beyond staleness within a TTL.
pub struct AquaService {
    regions: Arc<dyn RegionStore>,
    cache: Arc<dyn ResultCache>,
    forecaster: ForecastEngine,
    scorer: RiskScorer,
    models: ModelAvailability,
    ttls: CacheConfig,
}

impl AquaService {
    pub fn new(
        regions: Arc<dyn RegionStore>,
        cache: Arc<dyn ResultCache>,
        registry: ModelRegistry,
        seasonal: SeasonalModel,
    ) -> Self {
        let scorer = match registry.classifier() {
            Some(classifier) => RiskScorer::new(classifier),
            None => RiskScorer::rule_based(),
        };

        Self {
            regions,
            cache,
            forecaster: ForecastEngine::new(registry.predictor(), seasonal),
            scorer,
            models: registry.availability(),
            ttls: CacheConfig::default(),
        }
    }

    /// Override cache TTLs.
    pub fn with_cache_config(mut self, ttls: CacheConfig) -> Self {
        self.ttls = ttls;
        self
    }

    /// Build the service described by `config`, probing model endpoints once.
    pub async fn from_config(config: &EngineConfig) -> EngineResult<Self> {
        let regions: Arc<dyn RegionStore> = match config.data.regions_path.as_deref() {
            Some(path) => {
                let store = InMemoryRegionStore::from_json_file(path)?;
                info!(path, regions = store.len(), "Loaded region data");
                Arc::new(store)
            }
            None => Arc::new(InMemoryRegionStore::seeded()),
        };

        let cache: Arc<dyn ResultCache> = if config.cache.enabled {
            Arc::new(InMemoryResultCache::in_memory())
        } else {
            Arc::new(DisabledCache)
        };

        let seasonal = match config.models.seed {
            Some(seed) => SeasonalModel::seeded(seed),
            None => SeasonalModel::new(),
        };

        let registry = ModelRegistry::detect(&config.models).await;
        let service = Self::new(regions, cache, registry, seasonal)
            .with_cache_config(config.cache.clone());

        info!(
            predictor = service.models.predictor,
            classifier = service.models.classifier,
            cache = %service.cache.status().backend,
            "AquaSentinel engine ready"
        );
        Ok(service)
    }

    /// Which trained models are serving.
    pub fn models(&self) -> ModelAvailability {
        self.models
    }

    pub fn cache_status(&self) -> CacheStatus {
        self.cache.status()
    }

    /// All regions, in source order.
    #[instrument(skip(self))]
    pub async fn list_regions(&self) -> EngineResult<Vec<RegionSummary>> {
        let ttl = secs(self.ttls.regions_ttl_secs);
        self.cached(REGIONS_CACHE_KEY, ttl, || async {
            let regions = self.regions.list_all().await?;
            Ok::<_, EngineError>(regions.iter().map(RegionSummary::from).collect::<Vec<_>>())
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn national_stats(&self) -> EngineResult<NationalStats> {
        let ttl = secs(self.ttls.stats_ttl_secs);
        self.cached(STATS_CACHE_KEY, ttl, || async {
            let regions = self.regions.list_all().await?;
            Ok::<_, EngineError>(reports::national_stats(&regions))
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn region_detail(&self, name: &str) -> EngineResult<RegionDetail> {
        let region = self.region(name).await?;
        Ok(reports::region_detail(&region))
    }

    /// Regions at `level`; the level is matched case-insensitively.
    #[instrument(skip(self))]
    pub async fn regions_by_risk(&self, level: &str) -> EngineResult<Vec<RegionProfile>> {
        let level: RiskLevel = level
            .parse()
            .map_err(|_| EngineError::InvalidRiskLevel(level.to_string()))?;
        Ok(self.regions.list_by_risk(level).await?)
    }

    /// Six-month depth forecast for a known region.
    #[instrument(skip(self))]
    pub async fn forecast(&self, name: &str) -> EngineResult<ForecastResult> {
        let region = self.region(name).await?;
        let ttl = secs(self.ttls.forecast_ttl_secs);
        self.cached(&forecast_cache_key(&region.name), ttl, || async {
            Ok::<_, EngineError>(self.forecaster.forecast(&region).await)
        })
        .await
    }

    /// Contamination risk score for a known region. Not cached.
    #[instrument(skip(self))]
    pub async fn contamination_risk(&self, name: &str) -> EngineResult<RiskScoreResult> {
        let region = self.region(name).await?;
        let features = RiskFeatures::from_region(&region);
        Ok(self.scorer.score_contamination(&region.name, &features).await)
    }

    /// Contamination risk score for free-standing features. Missing
    /// features take their defaults.
    #[instrument(skip(self, features))]
    pub async fn score_features(&self, label: &str, features: &RiskFeatures) -> RiskScoreResult {
        self.scorer.score_contamination(label, features).await
    }

    /// Critical and high-risk regions, critical first.
    #[instrument(skip(self))]
    pub async fn active_alerts(&self) -> EngineResult<Vec<Alert>> {
        let ttl = secs(self.ttls.alerts_ttl_secs);
        self.cached(ALERTS_CACHE_KEY, ttl, || async {
            let regions = self.regions.list_all().await?;
            Ok::<_, EngineError>(build_alerts(&regions, AlertFilter::Active))
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn critical_alerts(&self) -> EngineResult<Vec<Alert>> {
        let regions = self.regions.list_all().await?;
        Ok(build_alerts(&regions, AlertFilter::CriticalOnly))
    }

    /// Every region with an exceeded contaminant limit.
    #[instrument(skip(self))]
    pub async fn contamination_alerts(&self) -> EngineResult<Vec<ContaminationAlert>> {
        let regions = self.regions.list_all().await?;
        Ok(contamination_report(&regions))
    }

    /// Validate and run a policy simulation. Not cached.
    #[instrument(skip(self))]
    pub fn simulate(&self, input: &SimulationInput) -> EngineResult<SimulationResult> {
        Ok(aqua_simulator::run(input)?)
    }

    pub fn presets(&self) -> Vec<PresetOutcome> {
        aqua_simulator::presets()
    }

    /// Run a named preset.
    pub fn simulate_preset(&self, name: &str) -> EngineResult<PresetOutcome> {
        Ok(aqua_simulator::preset(name)?.outcome())
    }

    async fn region(&self, name: &str) -> EngineResult<RegionProfile> {
        self.regions
            .get(name)
            .await?
            .ok_or_else(|| EngineError::RegionNotFound(name.to_string()))
    }

    async fn cached<T, F, Fut>(&self, key: &str, ttl: Duration, compute: F) -> EngineResult<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = EngineResult<T>>,
    {
        if let Some(value) = self.cache.get(key).await {
            match serde_json::from_value(value) {
                Ok(hit) => {
                    debug!(key, "Cache hit");
                    return Ok(hit);
                }
                Err(err) => debug!(key, error = %err, "Discarding undecodable cache entry"),
            }
        }

        let fresh = compute().await?;
        match serde_json::to_value(&fresh) {
            Ok(value) => self.cache.set(key, value, ttl).await,
            Err(err) => debug!(key, error = %err, "Result not cacheable"),
        }
        Ok(fresh)
    }
}

fn secs(value: u64) -> Duration {
    Duration::from_secs(value)
}

impl std::fmt::Debug for AquaService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AquaService")
            .field("forecaster", &self.forecaster)
            .field("scorer", &self.scorer)
            .field("models", &self.models)
            .finish_non_exhaustive()
    }
}
