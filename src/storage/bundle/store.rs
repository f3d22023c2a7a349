//! The artifact store handle

use std::collections::BTreeSet;

use crate::config::StoreConfig;
use crate::storage::cloud::{CloudError, ObjectBackend};

use super::cache::{ArtifactCache, CacheStats};
use super::error::{Result, StoreError};
use super::key::{legacy_path, version_from_key, ArtifactKey, ArtifactName, MODELS_PREFIX};
use super::metrics::Metrics;
use super::model_bundle::{ArtifactSlot, ModelBundle, TrainingOutput};
use super::version::VersionId;

/// Versioned bundle store over an object backend.
///
/// Construct once per process with [`ArtifactStore::open`], pass it by
/// reference, and release it with [`ArtifactStore::close`]. The store holds
/// no locks across calls; a concurrent writer may leave a version partially
/// uploaded while it is being read.
pub struct ArtifactStore {
    backend: Box<dyn ObjectBackend>,
    cache: Option<ArtifactCache>,
    legacy_prefix: String,
    location: String,
}

impl std::fmt::Debug for ArtifactStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArtifactStore")
            .field("location", &self.location)
            .field("backend", &self.backend.backend_type())
            .field("cache", &self.cache.is_some())
            .finish()
    }
}

impl ArtifactStore {
    /// Connect the configured backend
    pub fn open(config: &StoreConfig) -> Result<Self> {
        let backend = config.backend.build().map_err(|e| match e {
            CloudError::Config(message) => StoreError::Config(message),
            other => StoreError::StorageUnavailable(other),
        })?;
        let store = Self {
            backend,
            cache: config.cache.then(ArtifactCache::new),
            legacy_prefix: config.legacy_prefix.clone(),
            location: config.backend.describe(),
        };
        tracing::info!(location = %store.location, cache = config.cache, "opened artifact store");
        Ok(store)
    }

    /// Wrap an already constructed backend, with caching enabled
    pub fn with_backend(backend: Box<dyn ObjectBackend>) -> Self {
        let location = format!("{}://", backend.backend_type());
        Self { backend, cache: Some(ArtifactCache::new()), legacy_prefix: String::new(), location }
    }

    /// Disable the content cache
    pub fn without_cache(mut self) -> Self {
        self.cache = None;
        self
    }

    /// Read the legacy flat layout below `prefix`
    pub fn with_legacy_prefix(mut self, prefix: &str) -> Self {
        self.legacy_prefix = prefix.to_string();
        self
    }

    /// Release the backend, returning final cache counters
    pub fn close(self) -> Option<CacheStats> {
        let stats = self.cache_stats();
        match &stats {
            Some(s) => tracing::info!(
                location = %self.location,
                entries = s.entries,
                hits = s.hits,
                misses = s.misses,
                "closed artifact store"
            ),
            None => tracing::info!(location = %self.location, "closed artifact store"),
        }
        stats
    }

    /// Backend location, e.g. `s3://bucket`
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().map(ArtifactCache::stats)
    }

    /// All known versions, newest first.
    ///
    /// Walks every listing page under `models/`. Keys that do not sit inside
    /// a version folder are ignored.
    pub fn list_versions(&self) -> Result<Vec<VersionId>> {
        let mut versions = BTreeSet::new();
        let mut cursor: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let page = self
                .backend
                .list_page(MODELS_PREFIX, cursor.as_deref())
                .map_err(StoreError::StorageUnavailable)?;
            pages += 1;

            for key in &page.keys {
                match version_from_key(key) {
                    Some(version) => {
                        versions.insert(version);
                    }
                    None => tracing::debug!(%key, "ignoring key outside a version folder"),
                }
            }

            match page.next_start_after {
                Some(next) => {
                    if cursor.as_deref().is_some_and(|prev| next.as_str() <= prev) {
                        return Err(StoreError::StorageUnavailable(CloudError::Backend(format!(
                            "listing did not advance past {next}"
                        ))));
                    }
                    cursor = Some(next);
                }
                None => break,
            }
        }

        tracing::debug!(pages, versions = versions.len(), "listed versions");
        Ok(versions.into_iter().rev().collect())
    }

    /// The most recent version, if any
    pub fn latest_version(&self) -> Result<Option<VersionId>> {
        Ok(self.list_versions()?.into_iter().next())
    }

    /// Write one artifact, replacing any previous payload
    pub fn put_artifact(&self, version: &VersionId, name: ArtifactName, payload: &[u8]) -> Result<()> {
        let key = ArtifactKey::new(version.clone(), name);
        let path = key.path();
        self.backend.put(&path, payload).map_err(|e| StoreError::from_backend(&path, e))?;
        if let Some(cache) = &self.cache {
            cache.insert(key, payload.to_vec());
        }
        tracing::debug!(key = %path, bytes = payload.len(), "stored artifact");
        Ok(())
    }

    /// Read one artifact
    pub fn get_artifact(&self, version: &VersionId, name: ArtifactName) -> Result<Vec<u8>> {
        let key = ArtifactKey::new(version.clone(), name);
        if let Some(payload) = self.cache.as_ref().and_then(|c| c.get(&key)) {
            tracing::debug!(%key, "artifact cache hit");
            return Ok(payload);
        }

        let path = key.path();
        let payload = self.backend.get(&path).map_err(|e| StoreError::from_backend(&path, e))?;
        if let Some(cache) = &self.cache {
            cache.insert(key, payload.clone());
        }
        Ok(payload)
    }

    pub fn put_metrics(&self, version: &VersionId, metrics: &Metrics) -> Result<()> {
        let payload = metrics.to_json().map_err(|message| StoreError::MalformedBundle {
            key: ArtifactKey::new(version.clone(), ArtifactName::Metrics).path(),
            message,
        })?;
        self.put_artifact(version, ArtifactName::Metrics, &payload)
    }

    pub fn get_metrics(&self, version: &VersionId) -> Result<Metrics> {
        let payload = self.get_artifact(version, ArtifactName::Metrics)?;
        Metrics::from_json(&payload).map_err(|message| StoreError::MalformedBundle {
            key: ArtifactKey::new(version.clone(), ArtifactName::Metrics).path(),
            message,
        })
    }

    /// Load all four artifacts of a version.
    ///
    /// Missing or malformed artifacts are reported in their slot; only a
    /// storage failure fails the whole call.
    pub fn load_bundle(&self, version: &VersionId) -> Result<ModelBundle> {
        let bundle = ModelBundle {
            model: slot(self.get_artifact(version, ArtifactName::Model))?,
            vectorizer: slot(self.get_artifact(version, ArtifactName::Vectorizer))?,
            metrics: slot(self.get_metrics(version))?,
            confusion_image: slot(self.get_artifact(version, ArtifactName::ConfusionImage))?,
        };
        if !bundle.is_complete() {
            tracing::warn!(%version, missing = ?bundle.missing(), "partial bundle");
        }
        Ok(bundle)
    }

    /// Load the bundle stored in the legacy flat layout. Not cached.
    pub fn load_legacy_bundle(&self) -> Result<ModelBundle> {
        let read = |name: ArtifactName| {
            let path = legacy_path(&self.legacy_prefix, name);
            self.backend.get(&path).map_err(|e| StoreError::from_backend(&path, e))
        };
        let metrics = read(ArtifactName::Metrics).and_then(|payload| {
            Metrics::from_json(&payload).map_err(|message| StoreError::MalformedBundle {
                key: legacy_path(&self.legacy_prefix, ArtifactName::Metrics),
                message,
            })
        });

        Ok(ModelBundle {
            model: slot(read(ArtifactName::Model))?,
            vectorizer: slot(read(ArtifactName::Vectorizer))?,
            metrics: slot(metrics)?,
            confusion_image: slot(read(ArtifactName::ConfusionImage))?,
        })
    }

    /// Upload a training run's bundle under a fresh or given version.
    ///
    /// Four independent writes; a failure part way leaves a partial bundle.
    pub fn publish(&self, output: &TrainingOutput) -> Result<VersionId> {
        let version = output.version.clone().unwrap_or_else(VersionId::generate);

        self.put_artifact(&version, ArtifactName::Model, &output.model)?;
        self.put_artifact(&version, ArtifactName::Vectorizer, &output.vectorizer)?;
        self.put_metrics(&version, &output.metrics)?;
        self.put_artifact(&version, ArtifactName::ConfusionImage, &output.confusion_image)?;

        tracing::info!(%version, location = %self.location, "published bundle");
        Ok(version)
    }
}

fn slot<T>(result: Result<T>) -> Result<ArtifactSlot<T>> {
    match result {
        Ok(value) => Ok(ArtifactSlot::Present(value)),
        Err(StoreError::ArtifactMissing { .. }) => Ok(ArtifactSlot::Missing),
        Err(StoreError::MalformedBundle { message, .. }) => Ok(ArtifactSlot::Malformed(message)),
        Err(other) => Err(other),
    }
}
