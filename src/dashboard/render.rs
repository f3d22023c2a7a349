//! Plain-text and JSON reports for the CLI.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;

use crate::storage::bundle::{ArtifactName, ArtifactSlot, Metrics, ModelBundle, VersionId};

use super::comparison::BundleComparison;
use super::session::LoadedComparison;

/// Serializable view of one bundle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BundleReport {
    pub version: String,
    pub complete: bool,
    /// Artifact name → status word
    pub artifacts: BTreeMap<&'static str, &'static str>,
    /// Byte sizes of present binary artifacts
    pub sizes: BTreeMap<&'static str, usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Metrics>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub problems: Vec<String>,
}

impl BundleReport {
    pub fn new(version: &str, bundle: &ModelBundle) -> Self {
        let artifacts =
            ArtifactName::ALL.iter().map(|name| (name.as_str(), bundle.status(*name))).collect();

        let mut sizes = BTreeMap::new();
        for (name, slot) in [
            (ArtifactName::Model, &bundle.model),
            (ArtifactName::Vectorizer, &bundle.vectorizer),
            (ArtifactName::ConfusionImage, &bundle.confusion_image),
        ] {
            if let Some(bytes) = slot.as_option() {
                sizes.insert(name.as_str(), bytes.len());
            }
        }

        let mut problems = Vec::new();
        if let ArtifactSlot::Malformed(message) = &bundle.metrics {
            problems.push(format!("metrics: {message}"));
        }

        Self {
            version: version.to_string(),
            complete: bundle.is_complete(),
            artifacts,
            sizes,
            metrics: bundle.metrics().cloned(),
            problems,
        }
    }
}

/// Version list, newest first
pub fn render_versions(versions: &[VersionId]) -> String {
    let mut out = String::new();
    if versions.is_empty() {
        out.push_str("No model versions found\n");
        return out;
    }

    let _ = writeln!(out, "{:<24} {:<20}", "VERSION", "CREATED (UTC)");
    let _ = writeln!(out, "{}", "-".repeat(45));
    for version in versions {
        let created = version
            .timestamp()
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(out, "{:<24} {:<20}", version.as_str(), created);
    }
    let _ = writeln!(out, "\n{} version(s)", versions.len());
    out
}

/// One bundle: artifact status table followed by metrics
pub fn render_bundle(report: &BundleReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Version: {}", report.version);
    let _ = writeln!(out, "  Complete: {}", if report.complete { "yes" } else { "no" });
    let _ = writeln!(out, "\n  {:<18} {:<10} {:>10}", "ARTIFACT", "STATUS", "BYTES");
    for (name, status) in &report.artifacts {
        let size = report.sizes.get(name).map(|s| s.to_string()).unwrap_or_else(|| "-".to_string());
        let _ = writeln!(out, "  {:<18} {:<10} {:>10}", name, status, size);
    }

    if let Some(metrics) = &report.metrics {
        let _ = writeln!(out, "\n  Metrics:");
        for (name, value) in metrics.iter() {
            let _ = writeln!(out, "    {name:<16} {value:.4}");
        }
    }
    for problem in &report.problems {
        let _ = writeln!(out, "  ! {problem}");
    }
    out
}

fn cell(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.4}")).unwrap_or_else(|| "missing".to_string())
}

/// Metrics of A and B side by side
pub fn render_comparison(comparison: &BundleComparison) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<16} {:>18} {:>18} {:>10}",
        "METRIC",
        format!("A {}", comparison.a),
        format!("B {}", comparison.b),
        "DELTA"
    );
    let _ = writeln!(out, "{}", "-".repeat(65));
    for diff in &comparison.metrics {
        let delta = diff.delta().map(|d| format!("{d:+.4}")).unwrap_or_else(|| "-".to_string());
        let _ = writeln!(out, "{:<16} {:>18} {:>18} {:>10}", diff.name, cell(diff.a), cell(diff.b), delta);
    }
    let _ = writeln!(out, "\n{}", comparison.summary);
    out
}

/// Full comparison page: metrics table plus artifact availability
pub fn render_loaded_comparison(loaded: &LoadedComparison) -> String {
    let mut out = render_comparison(&loaded.comparison);
    for (label, version, bundle) in [
        ("A", &loaded.comparison.a, &loaded.bundle_a),
        ("B", &loaded.comparison.b, &loaded.bundle_b),
    ] {
        let missing = bundle.missing();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(ArtifactName::as_str).collect();
            let _ = writeln!(out, "Version {label} ({version}) is missing: {}", names.join(", "));
        }
        if !bundle.confusion_image.is_present() {
            let _ = writeln!(out, "Confusion matrix {label} unavailable");
        }
    }
    out
}
