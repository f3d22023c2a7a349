//! Versioned model bundle store
//!
//! Every training run writes one bundle of four artifacts under a fresh
//! version folder:
//!
//! ```text
//! models/{version}/model
//! models/{version}/vectorizer
//! models/{version}/metrics
//! models/{version}/confusion_image
//! ```
//!
//! Readers discover versions by listing `models/`, newest first, and load
//! bundles that may be partial while an upload is still in flight.
//!
//! # Example
//!
//! ```
//! use sentimiento::storage::bundle::{ArtifactName, ArtifactStore, Metrics, TrainingOutput, VersionId};
//! use sentimiento::storage::cloud::InMemoryBackend;
//!
//! let store = ArtifactStore::with_backend(Box::new(InMemoryBackend::new()));
//! let output = TrainingOutput::new(
//!     b"weights".to_vec(),
//!     b"vocabulary".to_vec(),
//!     Metrics::new().with_metric("accuracy", 0.91),
//!     b"png".to_vec(),
//! )
//! .with_version(VersionId::parse("20240101-000000").unwrap());
//!
//! let version = store.publish(&output).unwrap();
//! assert_eq!(store.list_versions().unwrap(), vec![version.clone()]);
//! assert!(store.load_bundle(&version).unwrap().is_complete());
//! assert_eq!(store.get_artifact(&version, ArtifactName::Model).unwrap(), b"weights");
//! ```

mod cache;
mod error;
mod key;
mod metrics;
mod model_bundle;
mod store;
mod version;

pub use cache::{ArtifactCache, CacheStats};
pub use error::{Result, StoreError};
pub use key::{legacy_path, version_from_key, ArtifactKey, ArtifactName, MODELS_PREFIX};
pub use metrics::Metrics;
pub use model_bundle::{ArtifactSlot, ModelBundle, TrainingOutput};
pub use store::ArtifactStore;
pub use version::{VersionId, VERSION_FORMAT};
