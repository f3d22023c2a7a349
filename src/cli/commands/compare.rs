//! Compare two versions side by side

use serde::Serialize;

use super::to_json;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{CompareArgs, OutputFormat};
use crate::dashboard::{
    render_loaded_comparison, BundleComparison, BundleReport, DashboardSession, Selection,
};
use crate::storage::bundle::{ArtifactStore, VersionId};

#[derive(Serialize)]
struct ComparisonReport<'a> {
    comparison: &'a BundleComparison,
    a: BundleReport,
    b: BundleReport,
}

pub fn run_compare(args: CompareArgs, store: &ArtifactStore, level: LogLevel) -> Result<(), String> {
    print!("{}", compare_report(args, store, level)?);
    Ok(())
}

/// Rendered comparison, or a notice when fewer than two versions exist
pub(crate) fn compare_report(
    args: CompareArgs,
    store: &ArtifactStore,
    level: LogLevel,
) -> Result<String, String> {
    let session =
        DashboardSession::load(store).map_err(|e| format!("Failed to list versions: {e}"))?;

    let Some((a, b)) = pick_pair(&session, args.a, args.b) else {
        return Ok(format!(
            "Comparison needs at least two versions; found {}\n",
            session.versions().len()
        ));
    };

    for version in [&a, &b] {
        if !session.contains(version) {
            log(level, LogLevel::Normal, &format!("Warning: version {version} is not listed"));
        }
    }

    let loaded = session
        .compare(store, &a, &b)
        .map_err(|e| format!("Failed to load versions {a} and {b}: {e}"))?;

    match args.format {
        OutputFormat::Json => {
            let report = ComparisonReport {
                comparison: &loaded.comparison,
                a: BundleReport::new(a.as_str(), &loaded.bundle_a),
                b: BundleReport::new(b.as_str(), &loaded.bundle_b),
            };
            Ok(format!("{}\n", to_json(&report)?))
        }
        OutputFormat::Text => Ok(render_loaded_comparison(&loaded)),
    }
}

/// Explicit versions win; a lone A is paired with the newest other version
fn pick_pair(
    session: &DashboardSession,
    a: Option<VersionId>,
    b: Option<VersionId>,
) -> Option<(VersionId, VersionId)> {
    match (a, b) {
        (Some(a), Some(b)) => Some((a, b)),
        (Some(a), None) => {
            let b = session.versions().iter().find(|v| **v != a)?.clone();
            Some((a, b))
        }
        (None, _) => match session.selection() {
            Selection::Ready { a, b } => Some((a, b)),
            Selection::Degraded { .. } => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(token: &str) -> VersionId {
        VersionId::parse(token).unwrap()
    }

    #[test]
    fn test_pick_pair() {
        let session = DashboardSession::from_versions(vec![v("v3"), v("v2"), v("v1")]);
        assert_eq!(pick_pair(&session, None, None), Some((v("v3"), v("v2"))));
        assert_eq!(pick_pair(&session, Some(v("v3")), None), Some((v("v3"), v("v2"))));
        assert_eq!(pick_pair(&session, Some(v("v2")), None), Some((v("v2"), v("v3"))));
        assert_eq!(pick_pair(&session, Some(v("v1")), Some(v("v9"))), Some((v("v1"), v("v9"))));
    }

    #[test]
    fn test_pick_pair_degraded() {
        let session = DashboardSession::from_versions(vec![v("v1")]);
        assert_eq!(pick_pair(&session, None, None), None);
        assert_eq!(pick_pair(&session, Some(v("v1")), None), None);
    }
}
