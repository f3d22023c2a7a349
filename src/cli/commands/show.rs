//! Show one bundle

use super::to_json;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{OutputFormat, ShowArgs};
use crate::dashboard::{render_bundle, BundleReport};
use crate::storage::bundle::ArtifactStore;

pub fn run_show(args: ShowArgs, store: &ArtifactStore, level: LogLevel) -> Result<(), String> {
    print!("{}", show_report(&args, store, level)?);
    Ok(())
}

pub(crate) fn show_report(args: &ShowArgs, store: &ArtifactStore, level: LogLevel) -> Result<String, String> {
    let (label, bundle) = match &args.version {
        Some(version) => (
            version.to_string(),
            store
                .load_bundle(version)
                .map_err(|e| format!("Failed to load version {version}: {e}"))?,
        ),
        None => (
            "legacy".to_string(),
            store
                .load_legacy_bundle()
                .map_err(|e| format!("Failed to load legacy bundle: {e}"))?,
        ),
    };

    if bundle.present().is_empty() {
        log(level, LogLevel::Normal, &format!("No artifacts found for {label}"));
    }

    let report = BundleReport::new(&label, &bundle);
    match args.format {
        OutputFormat::Json => Ok(format!("{}\n", to_json(&report)?)),
        OutputFormat::Text => Ok(render_bundle(&report)),
    }
}
