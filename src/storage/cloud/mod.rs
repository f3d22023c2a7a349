//! Object Storage Backends
//!
//! Flat key/value object storage supporting local, in-memory, and S3
//! backends. Every operation is a blocking call; listing is paged and
//! callers drive the pages explicitly.
//!
//! # Example
//!
//! ```
//! use sentimiento::storage::cloud::{InMemoryBackend, ObjectBackend};
//!
//! let backend = InMemoryBackend::new();
//! backend.put("models/20240101-000000/model", b"weights").unwrap();
//! let page = backend.list_page("models/", None).unwrap();
//! assert_eq!(page.keys.len(), 1);
//! ```

mod config;
mod error;
mod local;
mod memory;
mod s3;
mod traits;

pub use config::BackendConfig;
pub use error::{CloudError, Result};
pub use local::LocalBackend;
pub use memory::InMemoryBackend;
#[cfg(feature = "s3")]
pub use s3::S3Backend;
pub use s3::S3Config;
pub use traits::{ListPage, ObjectBackend, DEFAULT_PAGE_SIZE};
