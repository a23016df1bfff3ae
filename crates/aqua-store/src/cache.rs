//! Best-effort result cache.
//!
//! [`ResultCache`] is what the engine sees: every method is infallible, a
//! fault is indistinguishable from a miss. [`CacheBackend`] is the fallible
//! storage underneath, adapted by [`FailOpenCache`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::time::Instant;
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Reported state of a cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStatus {
    pub backend: String,
    pub available: bool,
}

/// Memoization side channel. Never surfaces an error to the caller.
#[async_trait]
pub trait ResultCache: Send + Sync {
    /// Cached value, or `None` on a miss, expiry or any fault.
    async fn get(&self, key: &str) -> Option<Value>;

    /// Store `value` for `ttl`. Failures are discarded.
    async fn set(&self, key: &str, value: Value, ttl: Duration);

    /// Remove `key`. Failures are discarded.
    async fn delete(&self, key: &str);

    fn status(&self) -> CacheStatus;
}

/// Fallible cache storage.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    async fn fetch(&self, key: &str) -> StoreResult<Option<Value>>;
    async fn store(&self, key: &str, value: Value, ttl: Duration) -> StoreResult<()>;
    async fn remove(&self, key: &str) -> StoreResult<()>;

    /// Short backend description for status reporting.
    fn describe(&self) -> String;
}

/// Adapts a [`CacheBackend`] into a [`ResultCache`] that fails open.
pub struct FailOpenCache<B> {
    backend: B,
    healthy: AtomicBool,
}

impl<B: CacheBackend> FailOpenCache<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            healthy: AtomicBool::new(true),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn record<T>(&self, op: &'static str, key: &str, result: StoreResult<T>) -> Option<T> {
        match result {
            Ok(value) => {
                self.healthy.store(true, Ordering::Relaxed);
                Some(value)
            }
            Err(err) => {
                self.healthy.store(false, Ordering::Relaxed);
                debug!(op, key, error = %err, "Cache operation failed, treating as miss");
                None
            }
        }
    }
}

#[async_trait]
impl<B: CacheBackend> ResultCache for FailOpenCache<B> {
    async fn get(&self, key: &str) -> Option<Value> {
        let result = self.backend.fetch(key).await;
        self.record("get", key, result).flatten()
    }

    async fn set(&self, key: &str, value: Value, ttl: Duration) {
        let result = self.backend.store(key, value, ttl).await;
        self.record("set", key, result);
    }

    async fn delete(&self, key: &str) {
        let result = self.backend.remove(key).await;
        self.record("delete", key, result);
    }

    fn status(&self) -> CacheStatus {
        CacheStatus {
            backend: self.backend.describe(),
            available: self.healthy.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Value,
    expires_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Process-local backend with per-entry expiry.
#[derive(Debug, Default)]
pub struct InMemoryCacheBackend {
    entries: DashMap<String, CacheEntry>,
}

impl InMemoryCacheBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, expired ones included until next touched.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl CacheBackend for InMemoryCacheBackend {
    async fn fetch(&self, key: &str) -> StoreResult<Option<Value>> {
        let now = Instant::now();
        if self
            .entries
            .remove_if(key, |_, entry| entry.is_expired(now))
            .is_some()
        {
            return Ok(None);
        }
        Ok(self.entries.get(key).map(|entry| entry.value.clone()))
    }

    async fn store(&self, key: &str, value: Value, ttl: Duration) -> StoreResult<()> {
        if ttl.is_zero() {
            return Err(StoreError::InvalidInput(format!(
                "zero ttl for cache key {}",
                key
            )));
        }
        self.entries.insert(
            key.to_string(),
            CacheEntry {
                value,
                expires_at: Instant::now() + ttl,
            },
        );
        Ok(())
    }

    async fn remove(&self, key: &str) -> StoreResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}

/// In-memory result cache.
pub type InMemoryResultCache = FailOpenCache<InMemoryCacheBackend>;

impl InMemoryResultCache {
    pub fn in_memory() -> Self {
        FailOpenCache::new(InMemoryCacheBackend::new())
    }
}

/// Cache that stores nothing; every read is a miss.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledCache;

#[async_trait]
impl ResultCache for DisabledCache {
    async fn get(&self, _key: &str) -> Option<Value> {
        None
    }

    async fn set(&self, _key: &str, _value: Value, _ttl: Duration) {}

    async fn delete(&self, _key: &str) {}

    fn status(&self) -> CacheStatus {
        CacheStatus {
            backend: "disabled".to_string(),
            available: false,
        }
    }
}
