//! Process-local artifact content cache

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

use super::key::ArtifactKey;

/// Cache counters, reported when a store is closed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub bytes: usize,
    pub hits: u64,
    pub misses: u64,
}

/// Artifact payloads keyed by (version, artifact name).
///
/// Entries are never invalidated; a fresh process starts empty. Writes made
/// through the owning store replace the entry so reads observe them.
#[derive(Debug, Default)]
pub struct ArtifactCache {
    entries: RwLock<HashMap<ArtifactKey, Vec<u8>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ArtifactCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a payload, counting the hit or miss
    pub fn get(&self, key: &ArtifactKey) -> Option<Vec<u8>> {
        let found =
            self.entries.read().unwrap_or_else(PoisonError::into_inner).get(key).cloned();
        let counter = if found.is_some() { &self.hits } else { &self.misses };
        counter.fetch_add(1, Ordering::Relaxed);
        found
    }

    pub fn insert(&self, key: ArtifactKey, payload: Vec<u8>) {
        self.entries.write().unwrap_or_else(PoisonError::into_inner).insert(key, payload);
    }

    pub fn stats(&self) -> CacheStats {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        CacheStats {
            entries: entries.len(),
            bytes: entries.values().map(Vec::len).sum(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}
