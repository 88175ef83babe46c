//! Process-lifetime memoization of loaded datasets
//!
//! Re-running the report with an unchanged source configuration skips
//! re-parsing the file. The cache key is the identity of the loader
//! spec; there is no eviction policy beyond process restart.

use crate::loader::{DatasetLoader, LoadedDataset, SourceSpec};
use bikereport_common::Result;
use moka::sync::Cache;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Cache key derived from a [`SourceSpec`].
///
/// Uploaded bytes are folded into a hash rather than stored, so key
/// size stays bounded regardless of upload size.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
struct SourceKey {
    candidates: Vec<PathBuf>,
    uploaded_hash: Option<u64>,
    allow_synthetic_fallback: bool,
}

impl SourceKey {
    fn from_spec(spec: &SourceSpec) -> Self {
        let uploaded_hash = spec.uploaded.as_ref().map(|bytes| {
            let mut hasher = DefaultHasher::new();
            bytes.hash(&mut hasher);
            hasher.finish()
        });

        Self {
            candidates: spec.candidates.clone(),
            uploaded_hash,
            allow_synthetic_fallback: spec.allow_synthetic_fallback,
        }
    }
}

/// Hit/miss counters for observability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Explicit memoization layer in front of [`DatasetLoader`]
pub struct DatasetCache {
    inner: Cache<SourceKey, Arc<LoadedDataset>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl DatasetCache {
    /// Create an empty cache.
    ///
    /// No TTL and no idle expiry: entries live for the process lifetime.
    pub fn new() -> Self {
        Self {
            inner: Cache::builder().max_capacity(64).build(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Return the memoized dataset for this spec, loading it on first use
    pub fn get_or_load(&self, spec: &SourceSpec) -> Result<Arc<LoadedDataset>> {
        let key = SourceKey::from_spec(spec);

        if let Some(dataset) = self.inner.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!("Dataset cache hit");
            return Ok(dataset);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!("Dataset cache miss, loading");
        let dataset = Arc::new(DatasetLoader::load(spec)?);
        self.inner.insert(key, Arc::clone(&dataset));
        Ok(dataset)
    }

    /// Current hit/miss counters
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl Default for DatasetCache {
    fn default() -> Self {
        Self::new()
    }
}
