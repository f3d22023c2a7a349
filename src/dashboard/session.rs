//! Version selection for one dashboard page load.

use crate::storage::bundle::{ArtifactStore, ModelBundle, Result, VersionId};

use super::comparison::BundleComparison;

/// What the dashboard can show with the versions available
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Fewer than two versions; comparison is unavailable but not an error
    Degraded { available: Vec<VersionId> },
    /// Default pair: newest as A, second newest as B
    Ready { a: VersionId, b: VersionId },
}

/// Both sides of a comparison, loaded
#[derive(Debug, Clone)]
pub struct LoadedComparison {
    pub bundle_a: ModelBundle,
    pub bundle_b: ModelBundle,
    pub comparison: BundleComparison,
}

/// Versions discovered by a single `list_versions` call
#[derive(Debug, Clone)]
pub struct DashboardSession {
    versions: Vec<VersionId>,
}

impl DashboardSession {
    /// List versions once for this page load
    pub fn load(store: &ArtifactStore) -> Result<Self> {
        Ok(Self::from_versions(store.list_versions()?))
    }

    /// Versions must already be sorted newest first
    pub fn from_versions(versions: Vec<VersionId>) -> Self {
        Self { versions }
    }

    pub fn versions(&self) -> &[VersionId] {
        &self.versions
    }

    pub fn contains(&self, version: &VersionId) -> bool {
        self.versions.contains(version)
    }

    pub fn selection(&self) -> Selection {
        match self.versions.as_slice() {
            [a, b, ..] => Selection::Ready { a: a.clone(), b: b.clone() },
            _ => Selection::Degraded { available: self.versions.clone() },
        }
    }

    /// Load two bundles and compare them
    pub fn compare(&self, store: &ArtifactStore, a: &VersionId, b: &VersionId) -> Result<LoadedComparison> {
        let bundle_a = store.load_bundle(a)?;
        let bundle_b = store.load_bundle(b)?;
        let comparison = BundleComparison::compare(a, &bundle_a, b, &bundle_b);
        Ok(LoadedComparison { bundle_a, bundle_b, comparison })
    }
}
