//! Artifact store configuration
//!
//! The only required parameter is the bucket identifier. It may come from a
//! YAML file, a CLI flag, or the `S3_BUCKET` environment variable.
//!
//! ```yaml
//! backend:
//!   kind: s3
//!   bucket: productionizing-ml-models-bucket
//!   region: us-east-1
//! cache: true
//! legacy_prefix: ""
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::storage::cloud::{BackendConfig, S3Config};

/// Environment variable holding the bucket identifier
pub const BUCKET_ENV: &str = "S3_BUCKET";
/// Environment variable holding the AWS region
pub const REGION_ENV: &str = "AWS_REGION";
/// Environment variable holding a custom S3 endpoint
pub const ENDPOINT_ENV: &str = "AWS_ENDPOINT_URL";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML config {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("No bucket configured: pass --bucket, set {BUCKET_ENV}, or use --config")]
    MissingBucket,
}

fn default_cache() -> bool {
    true
}

/// Everything needed to open an artifact store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Where objects live
    pub backend: BackendConfig,
    /// Keep downloaded artifacts for the process lifetime
    #[serde(default = "default_cache")]
    pub cache: bool,
    /// Prefix of the legacy flat layout (bucket root by default)
    #[serde(default)]
    pub legacy_prefix: String,
}

impl StoreConfig {
    pub fn new(backend: BackendConfig) -> Self {
        Self { backend, cache: true, legacy_prefix: String::new() }
    }

    pub fn s3(bucket: &str) -> Self {
        Self::new(BackendConfig::s3(bucket))
    }

    pub fn local(path: PathBuf) -> Self {
        Self::new(BackendConfig::local(path))
    }

    pub fn memory() -> Self {
        Self::new(BackendConfig::memory())
    }

    pub fn with_cache(mut self, cache: bool) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_legacy_prefix(mut self, prefix: &str) -> Self {
        self.legacy_prefix = prefix.to_string();
        self
    }

    /// Load a YAML configuration file
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound { path: path.to_path_buf() });
        }
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Parse { path: path.to_path_buf(), message: e.to_string() })
    }
}

/// Command-line overrides, highest precedence first: local path, bucket
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreOverrides {
    pub bucket: Option<String>,
    pub local: Option<PathBuf>,
    pub region: Option<String>,
    pub endpoint: Option<String>,
    pub no_cache: bool,
}

/// Resolve the store configuration.
///
/// Precedence: `--local`, then `--bucket`, then the config file, then the
/// environment. Region and endpoint flags apply to whichever S3 backend wins;
/// the environment only fills values the config file left unset.
pub fn resolve<F>(
    config_file: Option<&Path>,
    overrides: &StoreOverrides,
    env: F,
) -> Result<StoreConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

    // Backend flags replace only the backend; cache and legacy prefix from
    // the file still apply.
    let from_file = |backend: BackendConfig| -> Result<StoreConfig, ConfigError> {
        Ok(match config_file {
            Some(path) => StoreConfig { backend, ..StoreConfig::from_yaml_file(path)? },
            None => StoreConfig::new(backend),
        })
    };

    let mut config = if let Some(path) = &overrides.local {
        from_file(BackendConfig::local(path.clone()))?
    } else if let Some(bucket) = non_empty(overrides.bucket.clone()) {
        from_file(BackendConfig::s3(&bucket))?
    } else if let Some(path) = config_file {
        StoreConfig::from_yaml_file(path)?
    } else if let Some(bucket) = non_empty(env(BUCKET_ENV)) {
        StoreConfig::s3(&bucket)
    } else {
        return Err(ConfigError::MissingBucket);
    };

    if let BackendConfig::S3(s3) = &mut config.backend {
        apply_s3_overrides(s3, overrides, &env);
    }
    if overrides.no_cache {
        config.cache = false;
    }
    Ok(config)
}

fn apply_s3_overrides<F>(s3: &mut S3Config, overrides: &StoreOverrides, env: &F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(region) = overrides.region.clone().or_else(|| s3.region.clone()).or_else(|| env(REGION_ENV)) {
        s3.region = Some(region);
    }
    let endpoint = overrides.endpoint.clone().or_else(|| s3.endpoint.clone()).or_else(|| env(ENDPOINT_ENV));
    if let Some(endpoint) = endpoint {
        *s3 = s3.clone().with_endpoint(&endpoint);
    }
}
