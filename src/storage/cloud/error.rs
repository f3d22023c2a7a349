//! Object backend error types

use thiserror::Error;

/// Object backend errors
#[derive(Debug, Error)]
pub enum CloudError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Network error: {0}")]
    Network(String),
}

impl CloudError {
    /// Whether the error means the object simply does not exist
    pub fn is_not_found(&self) -> bool {
        match self {
            CloudError::NotFound(_) => true,
            CloudError::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

/// Result type for backend operations
pub type Result<T> = std::result::Result<T, CloudError>;
