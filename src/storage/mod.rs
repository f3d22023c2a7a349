//! Artifact storage
//!
//! - [`cloud`]: flat object backends (local, in-memory, S3)
//! - [`bundle`]: the versioned model bundle store built on top of them

pub mod bundle;
pub mod cloud;

pub use bundle::{ArtifactName, ArtifactStore, ModelBundle, StoreError, VersionId};
pub use cloud::{BackendConfig, ObjectBackend};
