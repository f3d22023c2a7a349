//! Core CLI types - Cli, Command, and argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormat;
use crate::config::StoreOverrides;
use crate::storage::bundle::{ArtifactName, VersionId};

/// Sentimiento: versioned sentiment-model artifact store
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "sentimiento")]
#[command(version)]
#[command(about = "Publish, list, and compare versioned sentiment-model bundles")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// YAML store configuration
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// S3 bucket holding the models (overrides S3_BUCKET)
    #[arg(long, global = true)]
    pub bucket: Option<String>,

    /// Use a local directory instead of S3
    #[arg(long, global = true, value_name = "DIR", conflicts_with = "bucket")]
    pub local: Option<PathBuf>,

    /// AWS region
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// Custom S3 endpoint, e.g. a local MinIO
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Do not keep downloaded artifacts in memory
    #[arg(long, global = true)]
    pub no_cache: bool,
}

impl Cli {
    /// Store flags as configuration overrides
    pub fn store_overrides(&self) -> StoreOverrides {
        StoreOverrides {
            bucket: self.bucket.clone(),
            local: self.local.clone(),
            region: self.region.clone(),
            endpoint: self.endpoint.clone(),
            no_cache: self.no_cache,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List model versions, newest first
    Versions(VersionsArgs),

    /// Show one version's artifacts and metrics
    Show(ShowArgs),

    /// Compare the metrics of two versions
    Compare(CompareArgs),

    /// Upload a training run as a new version
    Publish(PublishArgs),

    /// Download a single artifact
    Fetch(FetchArgs),
}

/// Arguments for the versions command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct VersionsArgs {
    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the show command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ShowArgs {
    /// Version to show
    #[arg(value_name = "VERSION", required_unless_present = "legacy")]
    pub version: Option<VersionId>,

    /// Read the unversioned flat layout instead
    #[arg(long, conflicts_with = "version")]
    pub legacy: bool,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the compare command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct CompareArgs {
    /// Version A (defaults to the newest)
    #[arg(value_name = "A")]
    pub a: Option<VersionId>,

    /// Version B (defaults to the second newest)
    #[arg(value_name = "B", requires = "a")]
    pub b: Option<VersionId>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the publish command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct PublishArgs {
    /// Serialized model
    #[arg(long)]
    pub model: PathBuf,

    /// Serialized vectorizer
    #[arg(long)]
    pub vectorizer: PathBuf,

    /// Metrics JSON object
    #[arg(long)]
    pub metrics: PathBuf,

    /// Confusion-matrix PNG
    #[arg(long)]
    pub confusion_image: PathBuf,

    /// Explicit version token (defaults to the current UTC timestamp)
    #[arg(long)]
    pub version: Option<VersionId>,
}

/// Arguments for the fetch command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct FetchArgs {
    /// Version to read from
    #[arg(value_name = "VERSION")]
    pub version: VersionId,

    /// model, vectorizer, metrics, or confusion_image
    #[arg(value_name = "ARTIFACT")]
    pub artifact: ArtifactName,

    /// Destination file
    #[arg(short, long)]
    pub output: PathBuf,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
