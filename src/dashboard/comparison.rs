//! Side-by-side comparison of two model versions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::storage::bundle::{ModelBundle, VersionId};

/// One metric across both versions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDiff {
    pub name: String,
    pub a: Option<f64>,
    pub b: Option<f64>,
}

impl MetricDiff {
    /// `b - a` when both sides report the metric
    pub fn delta(&self) -> Option<f64> {
        Some(self.b? - self.a?)
    }
}

/// Comparison between two model versions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleComparison {
    /// Version A (left column)
    pub a: VersionId,
    /// Version B (right column)
    pub b: VersionId,
    /// Every metric reported by either version, sorted by name
    pub metrics: Vec<MetricDiff>,
    /// Whether B beats A on a strict majority of shared metrics.
    /// All bundle metrics are higher-is-better.
    pub b_is_better: bool,
    /// Summary of changes
    pub summary: String,
}

impl BundleComparison {
    pub fn compare(a: &VersionId, bundle_a: &ModelBundle, b: &VersionId, bundle_b: &ModelBundle) -> Self {
        let metrics_a = bundle_a.metrics();
        let metrics_b = bundle_b.metrics();

        let names: BTreeSet<&str> = metrics_a
            .into_iter()
            .flat_map(|m| m.names())
            .chain(metrics_b.into_iter().flat_map(|m| m.names()))
            .collect();

        let metrics: Vec<MetricDiff> = names
            .into_iter()
            .map(|name| MetricDiff {
                name: name.to_string(),
                a: metrics_a.and_then(|m| m.get(name)),
                b: metrics_b.and_then(|m| m.get(name)),
            })
            .collect();

        let deltas: Vec<f64> = metrics.iter().filter_map(MetricDiff::delta).collect();
        let improved = deltas.iter().filter(|d| **d > 0.0).count();
        let regressed = deltas.iter().filter(|d| **d < 0.0).count();
        let b_is_better = !deltas.is_empty() && improved * 2 > deltas.len();

        let summary = if deltas.is_empty() {
            "No shared metrics to compare".to_string()
        } else {
            format!(
                "{b} vs {a}: {improved} improved, {regressed} regressed, {} unchanged",
                deltas.len() - improved - regressed
            )
        };

        Self { a: a.clone(), b: b.clone(), metrics, b_is_better, summary }
    }

    pub fn metric(&self, name: &str) -> Option<&MetricDiff> {
        self.metrics.iter().find(|m| m.name == name)
    }
}
