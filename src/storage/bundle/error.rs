//! Artifact store error types

use thiserror::Error;

use crate::storage::cloud::CloudError;

/// Artifact store errors
///
/// Every variant is returned to the caller; the store never retries and
/// never panics on a missing or unreadable artifact.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Artifact missing: {key}")]
    ArtifactMissing { key: String },

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[source] CloudError),

    #[error("Malformed bundle artifact {key}: {message}")]
    MalformedBundle { key: String, message: String },

    #[error("Invalid version identifier {0:?}: must be one non-empty path segment without whitespace")]
    InvalidVersion(String),

    #[error("Store configuration error: {0}")]
    Config(String),
}

impl StoreError {
    /// Classify a backend failure for `key`
    pub fn from_backend(key: &str, err: CloudError) -> Self {
        if err.is_not_found() {
            StoreError::ArtifactMissing { key: key.to_string() }
        } else {
            StoreError::StorageUnavailable(err)
        }
    }

    /// Whether the artifact simply is not there (yet)
    pub fn is_missing(&self) -> bool {
        matches!(self, StoreError::ArtifactMissing { .. })
    }
}

/// Result type for artifact store operations
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_backend_not_found_is_missing() {
        let err = StoreError::from_backend(
            "models/v1/model",
            CloudError::NotFound("models/v1/model".to_string()),
        );
        match err {
            StoreError::ArtifactMissing { key } => assert_eq!(key, "models/v1/model"),
            other => panic!("Expected ArtifactMissing, got {other:?}"),
        }
    }

    #[test]
    fn test_from_backend_io_not_found_is_missing() {
        let err = StoreError::from_backend(
            "k",
            CloudError::Io(std::io::Error::from(std::io::ErrorKind::NotFound)),
        );
        assert!(err.is_missing());
    }

    #[test]
    fn test_from_backend_transport_is_unavailable() {
        let err = StoreError::from_backend("k", CloudError::Network("dns failure".to_string()));
        assert!(matches!(err, StoreError::StorageUnavailable(_)));
        assert!(err.to_string().contains("dns failure"));

        let err = StoreError::from_backend("k", CloudError::PermissionDenied("403".to_string()));
        assert!(matches!(err, StoreError::StorageUnavailable(_)));
    }

    #[test]
    fn test_store_error_display() {
        let err = StoreError::MalformedBundle {
            key: "models/v1/metrics".to_string(),
            message: "expected object".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("models/v1/metrics"));
        assert!(msg.contains("expected object"));

        assert!(StoreError::InvalidVersion("a/b".to_string()).to_string().contains("a/b"));
    }
}
