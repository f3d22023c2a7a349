//! Publish command implementation: upload a training run as a new version

use std::path::Path;

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::PublishArgs;
use crate::storage::bundle::{ArtifactStore, Metrics, TrainingOutput};

pub fn run_publish(args: PublishArgs, store: &ArtifactStore, level: LogLevel) -> Result<(), String> {
    log(level, LogLevel::Normal, &format!("Publishing to {}", store.location()));

    let model = read_file(&args.model)?;
    let vectorizer = read_file(&args.vectorizer)?;
    let metrics = Metrics::from_json(&read_file(&args.metrics)?)
        .map_err(|e| format!("Invalid metrics file {}: {e}", args.metrics.display()))?;
    let confusion_image = read_file(&args.confusion_image)?;

    for (path, bytes) in [
        (&args.model, model.len()),
        (&args.vectorizer, vectorizer.len()),
        (&args.confusion_image, confusion_image.len()),
    ] {
        log(level, LogLevel::Verbose, &format!("  {} ({bytes} bytes)", path.display()));
    }
    log(level, LogLevel::Verbose, &format!("  {} metric(s)", metrics.len()));

    let mut output = TrainingOutput::new(model, vectorizer, metrics, confusion_image);
    if let Some(version) = args.version {
        output = output.with_version(version);
    }

    let version = store.publish(&output).map_err(|e| format!("Publish failed: {e}"))?;
    log(level, LogLevel::Normal, &format!("Published version {version}"));
    Ok(())
}

fn read_file(path: &Path) -> Result<Vec<u8>, String> {
    std::fs::read(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))
}
