//! S3 backend configuration and client
//!
//! The client wraps the async `object_store` S3 implementation behind the
//! blocking [`ObjectBackend`] contract. Each backend owns a current-thread
//! tokio runtime and blocks on it per call, so no work outlives a call.

use serde::{Deserialize, Serialize};

#[cfg(feature = "s3")]
pub use client::S3Backend;

/// S3 backend configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct S3Config {
    /// S3 bucket name
    pub bucket: String,
    /// AWS region (e.g., "us-east-1")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Custom endpoint (for MinIO, R2, etc.)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Allow plain HTTP endpoints
    #[serde(default)]
    pub allow_http: bool,
}

impl S3Config {
    /// Create a new S3 configuration
    pub fn new(bucket: &str) -> Self {
        Self { bucket: bucket.to_string(), region: None, endpoint: None, allow_http: false }
    }

    /// Set region
    pub fn with_region(mut self, region: &str) -> Self {
        self.region = Some(region.to_string());
        self
    }

    /// Set custom endpoint (for S3-compatible services)
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.allow_http = endpoint.starts_with("http://");
        self.endpoint = Some(endpoint.to_string());
        self
    }
}

#[cfg(feature = "s3")]
mod client {
    use super::S3Config;
    use crate::storage::cloud::error::{CloudError, Result};
    use crate::storage::cloud::traits::{ListPage, ObjectBackend, DEFAULT_PAGE_SIZE};
    use futures::StreamExt;
    use object_store::aws::AmazonS3Builder;
    use object_store::path::Path as ObjectPath;
    use object_store::{ObjectStore, PutPayload};
    use std::sync::Arc;
    use tokio::runtime::Runtime;

    /// S3 object backend
    pub struct S3Backend {
        config: S3Config,
        store: Arc<dyn ObjectStore>,
        runtime: Runtime,
        page_size: usize,
    }

    impl std::fmt::Debug for S3Backend {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("S3Backend")
                .field("config", &self.config)
                .field("page_size", &self.page_size)
                .finish_non_exhaustive()
        }
    }

    impl S3Backend {
        /// Build a client for the configured bucket.
        ///
        /// Credentials are read from the standard AWS environment variables.
        pub fn connect(config: S3Config) -> Result<Self> {
            if config.bucket.trim().is_empty() {
                return Err(CloudError::Config("S3 bucket name is empty".to_string()));
            }

            let mut builder = AmazonS3Builder::from_env().with_bucket_name(&config.bucket);
            if let Some(region) = &config.region {
                builder = builder.with_region(region);
            }
            if let Some(endpoint) = &config.endpoint {
                builder = builder.with_endpoint(endpoint);
            }
            if config.allow_http {
                builder = builder.with_allow_http(true);
            }
            let store = builder.build().map_err(|e| CloudError::Config(e.to_string()))?;

            tracing::debug!(bucket = %config.bucket, "connected S3 backend");
            Self::with_store(config, Arc::new(store))
        }

        /// Run the client over an already built store, e.g.
        /// `object_store::memory::InMemory` in tests. The store must list
        /// keys in ascending order, as S3 does.
        pub fn with_store(config: S3Config, store: Arc<dyn ObjectStore>) -> Result<Self> {
            let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
            Ok(Self { config, store, runtime, page_size: DEFAULT_PAGE_SIZE })
        }

        /// Cap the keys returned per listing page (at least one)
        pub fn with_page_size(mut self, page_size: usize) -> Self {
            self.page_size = page_size.max(1);
            self
        }

        /// Get the configuration
        pub fn config(&self) -> &S3Config {
            &self.config
        }

        fn path(key: &str) -> Result<ObjectPath> {
            ObjectPath::parse(key).map_err(|e| CloudError::Backend(format!("Invalid key {key}: {e}")))
        }
    }

    fn map_error(key: &str, err: object_store::Error) -> CloudError {
        match err {
            object_store::Error::NotFound { .. } => CloudError::NotFound(key.to_string()),
            object_store::Error::Generic { .. } => CloudError::Network(format!("{key}: {err}")),
            other => CloudError::Backend(format!("{key}: {other}")),
        }
    }

    impl ObjectBackend for S3Backend {
        fn put(&self, key: &str, data: &[u8]) -> Result<()> {
            let path = Self::path(key)?;
            let payload = PutPayload::from(data.to_vec());
            self.runtime
                .block_on(self.store.put(&path, payload))
                .map(|_| ())
                .map_err(|e| map_error(key, e))
        }

        fn get(&self, key: &str) -> Result<Vec<u8>> {
            let path = Self::path(key)?;
            let bytes = self
                .runtime
                .block_on(async {
                    let result = self.store.get(&path).await?;
                    result.bytes().await
                })
                .map_err(|e| map_error(key, e))?;
            Ok(bytes.to_vec())
        }

        fn exists(&self, key: &str) -> Result<bool> {
            let path = Self::path(key)?;
            match self.runtime.block_on(self.store.head(&path)) {
                Ok(_) => Ok(true),
                Err(object_store::Error::NotFound { .. }) => Ok(false),
                Err(e) => Err(map_error(key, e)),
            }
        }

        fn delete(&self, key: &str) -> Result<()> {
            // S3 deletes of absent keys succeed silently.
            if !self.exists(key)? {
                return Err(CloudError::NotFound(key.to_string()));
            }
            let path = Self::path(key)?;
            self.runtime.block_on(self.store.delete(&path)).map_err(|e| map_error(key, e))
        }

        fn list_page(&self, prefix: &str, start_after: Option<&str>) -> Result<ListPage> {
            let trimmed = prefix.trim_end_matches('/');
            let prefix_path = if trimmed.is_empty() { None } else { Some(Self::path(trimmed)?) };

            let mut stream = match start_after {
                Some(after) => {
                    let offset = Self::path(after)?;
                    self.store.list_with_offset(prefix_path.as_ref(), &offset)
                }
                None => self.store.list(prefix_path.as_ref()),
            };

            let page_size = self.page_size;
            self.runtime.block_on(async {
                let mut keys = Vec::new();
                let mut truncated = false;
                while let Some(meta) = stream.next().await {
                    let key = match meta {
                        Ok(meta) => meta.location.to_string(),
                        Err(e) => return Err(map_error(prefix, e)),
                    };
                    if !key.starts_with(prefix) {
                        continue;
                    }
                    if keys.len() == page_size {
                        truncated = true;
                        break;
                    }
                    keys.push(key);
                }
                Ok(ListPage::from_keys(keys, truncated))
            })
        }

        fn backend_type(&self) -> &'static str {
            "s3"
        }
    }

}
