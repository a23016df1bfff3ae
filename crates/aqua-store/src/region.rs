//! Region data source contract and its in-memory implementation.

use std::collections::HashMap;
use std::path::Path;

use aqua_types::{RegionProfile, RiskLevel};
use async_trait::async_trait;

use crate::error::{StoreError, StoreResult};
use crate::seed::seed_regions;

/// Read-only source of per-region reference data.
#[async_trait]
pub trait RegionStore: Send + Sync {
    /// Look up one region by its unique name.
    async fn get(&self, name: &str) -> StoreResult<Option<RegionProfile>>;

    /// All regions in publication order.
    async fn list_all(&self) -> StoreResult<Vec<RegionProfile>>;

    /// Regions whose published risk tier is `level`, in publication order.
    async fn list_by_risk(&self, level: RiskLevel) -> StoreResult<Vec<RegionProfile>> {
        let regions = self.list_all().await?;
        Ok(regions
            .into_iter()
            .filter(|region| region.risk_level == level)
            .collect())
    }
}

/// Immutable in-memory dataset with a name index.
#[derive(Debug, Clone)]
pub struct InMemoryRegionStore {
    regions: Vec<RegionProfile>,
    index: HashMap<String, usize>,
}

impl InMemoryRegionStore {
    /// Build a store from profiles; names must be unique.
    pub fn from_profiles(regions: Vec<RegionProfile>) -> StoreResult<Self> {
        let mut index = HashMap::with_capacity(regions.len());
        for (position, region) in regions.iter().enumerate() {
            if index.insert(region.name.clone(), position).is_some() {
                return Err(StoreError::Conflict(format!(
                    "region {} appears more than once",
                    region.name
                )));
            }
        }
        Ok(Self { regions, index })
    }

    /// Store backed by the built-in dataset.
    pub fn seeded() -> Self {
        let regions = seed_regions();
        let index = regions
            .iter()
            .enumerate()
            .map(|(position, region)| (region.name.clone(), position))
            .collect();
        Self { regions, index }
    }

    /// Parse a JSON array of region profiles.
    pub fn from_json_str(json: &str) -> StoreResult<Self> {
        let regions: Vec<RegionProfile> = serde_json::from_str(json)?;
        for region in &regions {
            if region.current_depth_m < 0.0
                || region.fluoride_mgl < 0.0
                || region.arsenic_mgl < 0.0
                || region.iron_mgl < 0.0
            {
                return Err(StoreError::InvalidInput(format!(
                    "region {} has a negative depth or concentration",
                    region.name
                )));
            }
        }
        Self::from_profiles(regions)
    }

    /// Load a JSON dataset from disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> StoreResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl Default for InMemoryRegionStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl RegionStore for InMemoryRegionStore {
    async fn get(&self, name: &str) -> StoreResult<Option<RegionProfile>> {
        Ok(self
            .index
            .get(name)
            .map(|&position| self.regions[position].clone()))
    }

    async fn list_all(&self) -> StoreResult<Vec<RegionProfile>> {
        Ok(self.regions.clone())
    }
}
