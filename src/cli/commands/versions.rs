//! List model versions

use super::to_json;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{OutputFormat, VersionsArgs};
use crate::dashboard::render_versions;
use crate::storage::bundle::ArtifactStore;

pub fn run_versions(args: VersionsArgs, store: &ArtifactStore, level: LogLevel) -> Result<(), String> {
    log(level, LogLevel::Verbose, &format!("Listing {}", store.location()));
    print!("{}", versions_report(&args, store)?);
    Ok(())
}

pub(crate) fn versions_report(args: &VersionsArgs, store: &ArtifactStore) -> Result<String, String> {
    let versions = store.list_versions().map_err(|e| format!("Failed to list versions: {e}"))?;

    match args.format {
        OutputFormat::Json => Ok(format!("{}\n", to_json(&versions)?)),
        OutputFormat::Text => Ok(render_versions(&versions)),
    }
}
