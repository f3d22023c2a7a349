//! CLI command implementations

mod compare;
mod fetch;
mod publish;
mod show;
mod versions;


use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{resolve, Cli, Command};
use crate::storage::bundle::ArtifactStore;

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = LogLevel::from_flags(cli.verbose, cli.quiet);

    let config = resolve(cli.config.as_deref(), &cli.store_overrides(), |name| {
        std::env::var(name).ok()
    })
    .map_err(|e| e.to_string())?;
    let store =
        ArtifactStore::open(&config).map_err(|e| format!("Failed to open artifact store: {e}"))?;
    log(log_level, LogLevel::Verbose, &format!("Store: {}", store.location()));

    let result = dispatch(cli.command, &store, log_level);

    if let Some(stats) = store.close() {
        log(
            log_level,
            LogLevel::Verbose,
            &format!(
                "Cache: {} artifact(s), {} byte(s), {} hit(s), {} miss(es)",
                stats.entries, stats.bytes, stats.hits, stats.misses
            ),
        );
    }
    result
}

/// Run one command against an open store
pub(crate) fn dispatch(command: Command, store: &ArtifactStore, log_level: LogLevel) -> Result<(), String> {
    match command {
        Command::Versions(args) => versions::run_versions(args, store, log_level),
        Command::Show(args) => show::run_show(args, store, log_level),
        Command::Compare(args) => compare::run_compare(args, store, log_level),
        Command::Publish(args) => publish::run_publish(args, store, log_level),
        Command::Fetch(args) => fetch::run_fetch(args, store, log_level),
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("JSON serialization failed: {e}"))
}
