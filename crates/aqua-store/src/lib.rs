//! AquaSentinel storage collaborators.
//!
//! This crate defines the two external collaborators the engine talks to:
//! - the region data source: read-only per-region reference data
//! - the result cache: best-effort memoization with expiry
//!
//! Design stance:
//! - The data source is the only correctness dependency; unknown regions are
//!   reported as absent, never defaulted.
//! - The cache is never a correctness dependency. [`ResultCache`] methods
//!   cannot fail; faults inside a [`CacheBackend`] are swallowed by
//!   [`FailOpenCache`] and behave as a miss.

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

mod cache;
mod error;
mod region;
mod seed;

pub use cache::{
    CacheBackend, CacheStatus, DisabledCache, FailOpenCache, InMemoryCacheBackend,
    InMemoryResultCache, ResultCache,
};
pub use error::{StoreError, StoreResult};
pub use region::{InMemoryRegionStore, RegionStore};
pub use seed::seed_regions;
