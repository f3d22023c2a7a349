//! Unified backend configuration

use crate::storage::cloud::error::Result;
use crate::storage::cloud::local::LocalBackend;
use crate::storage::cloud::memory::InMemoryBackend;
use crate::storage::cloud::s3::S3Config;
use crate::storage::cloud::traits::{ObjectBackend, DEFAULT_PAGE_SIZE};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// Unified object backend configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BackendConfig {
    /// Local filesystem
    Local { path: PathBuf },
    /// In-memory (for testing)
    Memory {
        #[serde(default = "default_page_size")]
        page_size: usize,
    },
    /// Amazon S3 or an S3-compatible service
    S3(S3Config),
}

impl BackendConfig {
    /// Create a local backend configuration
    pub fn local(path: PathBuf) -> Self {
        Self::Local { path }
    }

    /// Create an in-memory backend configuration
    pub fn memory() -> Self {
        Self::Memory { page_size: DEFAULT_PAGE_SIZE }
    }

    /// Create an S3 backend configuration
    pub fn s3(bucket: &str) -> Self {
        Self::S3(S3Config::new(bucket))
    }

    /// Human-readable location, e.g. `s3://bucket`
    pub fn describe(&self) -> String {
        match self {
            Self::Local { path } => format!("file://{}", path.display()),
            Self::Memory { .. } => "memory://".to_string(),
            Self::S3(config) => format!("s3://{}", config.bucket),
        }
    }

    /// Create a backend from this configuration
    pub fn build(&self) -> Result<Box<dyn ObjectBackend>> {
        match self {
            Self::Local { path } => Ok(Box::new(LocalBackend::new_and_init(path.clone())?)),
            Self::Memory { page_size } => Ok(Box::new(InMemoryBackend::with_page_size(*page_size))),
            Self::S3(config) => build_s3(config),
        }
    }
}

#[cfg(feature = "s3")]
fn build_s3(config: &S3Config) -> Result<Box<dyn ObjectBackend>> {
    Ok(Box::new(crate::storage::cloud::s3::S3Backend::connect(config.clone())?))
}

#[cfg(not(feature = "s3"))]
fn build_s3(config: &S3Config) -> Result<Box<dyn ObjectBackend>> {
    Err(crate::storage::cloud::error::CloudError::Config(format!(
        "s3://{} requested but this build has no S3 support (enable the `s3` feature)",
        config.bucket
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_backend_config_local() {
        let config = BackendConfig::local(PathBuf::from("/tmp/artifacts"));
        match config {
            BackendConfig::Local { path } => assert_eq!(path, PathBuf::from("/tmp/artifacts")),
            _ => panic!("Expected Local"),
        }
    }

    #[test]
    fn test_backend_config_memory() {
        assert_eq!(BackendConfig::memory(), BackendConfig::Memory { page_size: 1000 });
    }

    #[test]
    fn test_backend_config_s3() {
        match BackendConfig::s3("bucket") {
            BackendConfig::S3(c) => assert_eq!(c.bucket, "bucket"),
            _ => panic!("Expected S3"),
        }
    }

    #[test]
    fn test_backend_config_describe() {
        assert_eq!(BackendConfig::s3("models").describe(), "s3://models");
        assert_eq!(BackendConfig::memory().describe(), "memory://");
    }

    #[test]
    fn test_backend_config_build_memory() {
        let backend = BackendConfig::memory().build().unwrap();
        assert_eq!(backend.backend_type(), "memory");
    }

    #[test]
    fn test_backend_config_build_local() {
        let tmp = TempDir::new().unwrap();
        let backend = BackendConfig::local(tmp.path().to_path_buf()).build().unwrap();
        assert_eq!(backend.backend_type(), "local");
    }

    #[test]
    fn test_backend_config_yaml() {
        let yaml = "kind: s3\nbucket: productionizing-ml-models-bucket\nregion: eu-west-1\n";
        let parsed: BackendConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            parsed,
            BackendConfig::S3(S3Config::new("productionizing-ml-models-bucket").with_region("eu-west-1"))
        );

        let parsed: BackendConfig = serde_yaml::from_str("kind: memory\n").unwrap();
        assert_eq!(parsed, BackendConfig::memory());

        let parsed: BackendConfig = serde_yaml::from_str("kind: local\npath: /data/models\n").unwrap();
        assert_eq!(parsed, BackendConfig::local(PathBuf::from("/data/models")));
    }

    #[test]
    fn test_backend_config_serde_roundtrip() {
        let configs = vec![
            BackendConfig::local(PathBuf::from("/tmp/test")),
            BackendConfig::memory(),
            BackendConfig::s3("bucket"),
        ];

        for config in configs {
            let json = serde_json::to_string(&config).unwrap();
            let parsed: BackendConfig = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, config);
        }
    }
}
