//! Download a single artifact

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::FetchArgs;
use crate::storage::bundle::{ArtifactStore, StoreError};

pub fn run_fetch(args: FetchArgs, store: &ArtifactStore, level: LogLevel) -> Result<(), String> {
    let payload = store.get_artifact(&args.version, args.artifact).map_err(|e| match e {
        StoreError::ArtifactMissing { .. } => {
            format!("Version {} has no {} artifact", args.version, args.artifact)
        }
        other => format!("Failed to fetch {}: {other}", args.artifact),
    })?;

    std::fs::write(&args.output, &payload)
        .map_err(|e| format!("Failed to write {}: {e}", args.output.display()))?;
    log(
        level,
        LogLevel::Normal,
        &format!("Wrote {} ({} bytes)", args.output.display(), payload.len()),
    );
    Ok(())
}
