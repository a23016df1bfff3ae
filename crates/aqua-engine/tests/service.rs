//! Service-level tests over the built-in dataset.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use aqua_engine::{
    forecast_cache_key, AquaService, EngineConfig, EngineError, ModelRegistry, ALERTS_CACHE_KEY,
    REGIONS_CACHE_KEY,
};
use aqua_forecast::SeasonalModel;
use aqua_store::{
    CacheBackend, CacheStatus, FailOpenCache, InMemoryRegionStore, InMemoryResultCache,
    ResultCache, StoreError, StoreResult,
};
use aqua_types::{RiskLevel, SimulationInput, Verdict};
use async_trait::async_trait;
use serde_json::Value;

/// In-memory cache that counts writes.
struct CountingCache {
    inner: InMemoryResultCache,
    sets: AtomicUsize,
}

impl CountingCache {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: InMemoryResultCache::in_memory(),
            sets: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl ResultCache for CountingCache {
    async fn get(&self, key: &str) -> Option<Value> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: Value, ttl: Duration) {
        self.sets.fetch_add(1, Ordering::SeqCst);
        self.inner.set(key, value, ttl).await
    }

    async fn delete(&self, key: &str) {
        self.inner.delete(key).await
    }

    fn status(&self) -> CacheStatus {
        self.inner.status()
    }
}

struct BrokenBackend;

#[async_trait]
impl CacheBackend for BrokenBackend {
    async fn fetch(&self, _key: &str) -> StoreResult<Option<Value>> {
        Err(StoreError::Backend("connection refused".to_string()))
    }

    async fn store(&self, _key: &str, _value: Value, _ttl: Duration) -> StoreResult<()> {
        Err(StoreError::Backend("connection refused".to_string()))
    }

    async fn remove(&self, _key: &str) -> StoreResult<()> {
        Err(StoreError::Backend("connection refused".to_string()))
    }

    fn describe(&self) -> String {
        "broken".to_string()
    }
}

fn service_with(cache: Arc<dyn ResultCache>) -> AquaService {
    AquaService::new(
        Arc::new(InMemoryRegionStore::seeded()),
        cache,
        ModelRegistry::fallback_only(),
        SeasonalModel::seeded(17),
    )
}

#[tokio::test]
async fn listing_is_cached() {
    let cache = CountingCache::new();
    let service = service_with(cache.clone());

    let first = service.list_regions().await.unwrap();
    let second = service.list_regions().await.unwrap();

    assert_eq!(first.len(), 23);
    assert_eq!(first, second);
    assert_eq!(first[0].state, "Rajasthan");
    assert_eq!(cache.sets.load(Ordering::SeqCst), 1);
    assert!(cache.get(REGIONS_CACHE_KEY).await.is_some());
}

#[tokio::test]
async fn forecast_is_served_from_cache_within_ttl() {
    let cache = CountingCache::new();
    let service = service_with(cache.clone());

    let first = service.forecast("Rajasthan").await.unwrap();
    let second = service.forecast("Rajasthan").await.unwrap();

    // Jittered history would differ if recomputed.
    assert_eq!(first, second);
    assert!(first.will_reach_critical);
    assert_eq!(first.months_to_crisis, Some(3));
    assert!(cache.get(&forecast_cache_key("Rajasthan")).await.is_some());
}

#[tokio::test]
async fn unknown_region_is_not_found() {
    let cache = CountingCache::new();
    let service = service_with(cache.clone());

    let err = service.forecast("Atlantis").await.unwrap_err();
    assert!(matches!(err, EngineError::RegionNotFound(ref name) if name == "Atlantis"));
    assert_eq!(err.to_string(), "Region 'Atlantis' not found");

    assert!(matches!(
        service.contamination_risk("Atlantis").await,
        Err(EngineError::RegionNotFound(_))
    ));
    assert!(matches!(
        service.region_detail("Atlantis").await,
        Err(EngineError::RegionNotFound(_))
    ));
    assert_eq!(cache.sets.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn broken_cache_is_invisible() {
    let cache: Arc<dyn ResultCache> = Arc::new(FailOpenCache::new(BrokenBackend));
    let service = service_with(cache);

    let forecast = service.forecast("Delhi").await.unwrap();
    assert_eq!(forecast.forecast.len(), 6);
    assert_eq!(service.active_alerts().await.unwrap().len(), 12);
    assert_eq!(service.national_stats().await.unwrap().total_states, 23);

    let status = service.cache_status();
    assert_eq!(status.backend, "broken");
    assert!(!status.available);
}

#[tokio::test]
async fn alerts_follow_risk_ordering() {
    let cache = CountingCache::new();
    let service = service_with(cache.clone());

    let active = service.active_alerts().await.unwrap();
    assert_eq!(active.len(), 12);
    assert_eq!(active[0].state, "Rajasthan");
    assert_eq!(active[4].state, "Tamil Nadu");
    assert_eq!(active[5].state, "Punjab");
    assert_eq!(
        active[0].contamination_alerts,
        vec![
            "Fluoride 3.2 mg/L (2.1x limit)",
            "Arsenic 0.02 mg/L (2.0x limit)",
            "Iron 0.4 mg/L (1.3x limit)",
        ]
    );
    assert!(cache.get(ALERTS_CACHE_KEY).await.is_some());

    let critical = service.critical_alerts().await.unwrap();
    assert_eq!(critical.len(), 5);
    assert!(critical.iter().all(|a| a.risk_level == RiskLevel::Critical));
}

#[tokio::test]
async fn national_stats_over_seed() {
    let service = service_with(Arc::new(InMemoryResultCache::in_memory()));
    let stats = service.national_stats().await.unwrap();

    assert_eq!(stats.total_states, 23);
    assert_eq!(stats.critical, 5);
    assert_eq!(stats.high, 7);
    assert_eq!(stats.moderate, 7);
    assert_eq!(stats.low, 4);
    assert_eq!(stats.fluoride_exceed_pct, 34.8);
    assert_eq!(stats.cities_at_risk, 21);
}

#[tokio::test]
async fn risk_filter_validates_level() {
    let service = service_with(Arc::new(InMemoryResultCache::in_memory()));

    let critical = service.regions_by_risk("Critical").await.unwrap();
    assert_eq!(critical.len(), 5);

    let err = service.regions_by_risk("extreme").await.unwrap_err();
    assert!(matches!(err, EngineError::InvalidRiskLevel(ref level) if level == "extreme"));
}

#[tokio::test]
async fn contamination_views() {
    let service = service_with(Arc::new(InMemoryResultCache::in_memory()));

    let risk = service.contamination_risk("Rajasthan").await.unwrap();
    assert_eq!(risk.region, "Rajasthan");
    assert_eq!(risk.label, RiskLevel::Critical);
    // 90·0.7 + 1.0·30
    assert_eq!(risk.score, 93.0);

    let detail = service.region_detail("Bihar").await.unwrap();
    assert!(!detail.contamination.arsenic_safe);
    assert_eq!(detail.contamination.iron_times_limit, 7.0);

    let report = service.contamination_alerts().await.unwrap();
    assert!(report.iter().any(|a| a.state == "West Bengal"));
    assert!(report.iter().all(|a| a.state != "Sikkim"));
}

#[tokio::test]
async fn simulation_through_service() {
    let service = service_with(Arc::new(InMemoryResultCache::in_memory()));

    let result = service.simulate(&SimulationInput::default()).unwrap();
    assert_eq!(result.verdict, Verdict::Insufficient);

    let err = service
        .simulate(&SimulationInput::new(3, 130, 100, 20))
        .unwrap_err();
    assert!(matches!(err, EngineError::Simulator(_)));

    let presets = service.presets();
    assert_eq!(presets.len(), 3);
    assert_eq!(
        service.simulate_preset("aggressive").unwrap().results.verdict,
        Verdict::Strong
    );
}

#[tokio::test]
async fn from_default_config() {
    let mut config = EngineConfig::default();
    config.models.seed = Some(3);
    config.cache.enabled = false;

    let service = AquaService::from_config(&config).await.unwrap();
    assert!(!service.models().predictor);
    assert!(!service.models().classifier);
    assert_eq!(service.cache_status().backend, "disabled");
    assert_eq!(service.list_regions().await.unwrap().len(), 23);
}

#[tokio::test]
async fn regions_file_replaces_dataset() {
    let path = std::env::temp_dir().join(format!("aqua-regions-{}.json", std::process::id()));
    let json = serde_json::to_string(&vec![aqua_types::RegionProfile::new("Testland", 10.0, 1.0)])
        .unwrap();
    std::fs::write(&path, json).unwrap();

    let mut config = EngineConfig::default();
    config.data.regions_path = Some(path.to_string_lossy().into_owned());
    let service = AquaService::from_config(&config).await;
    std::fs::remove_file(&path).ok();

    let regions = service.unwrap().list_regions().await.unwrap();
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].state, "Testland");
}
