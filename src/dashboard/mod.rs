//! Model comparison dashboard
//!
//! Everything the dashboard needs after a page load: the version list, the
//! default A/B selection, side-by-side metrics, and sentiment scoring of
//! free text with two models.
//!
//! # Example
//!
//! ```
//! use sentimiento::dashboard::{DashboardSession, Selection};
//! use sentimiento::storage::bundle::{ArtifactStore, Metrics, TrainingOutput, VersionId};
//! use sentimiento::storage::cloud::InMemoryBackend;
//!
//! let store = ArtifactStore::with_backend(Box::new(InMemoryBackend::new()));
//! for (token, accuracy) in [("20240101-000000", 0.85), ("20240102-000000", 0.91)] {
//!     let output = TrainingOutput::new(
//!         b"m".to_vec(),
//!         b"v".to_vec(),
//!         Metrics::new().with_metric("accuracy", accuracy),
//!         b"png".to_vec(),
//!     )
//!     .with_version(VersionId::parse(token).unwrap());
//!     store.publish(&output).unwrap();
//! }
//!
//! let session = DashboardSession::load(&store).unwrap();
//! let Selection::Ready { a, b } = session.selection() else { panic!("two versions") };
//! let loaded = session.compare(&store, &a, &b).unwrap();
//! assert!(!loaded.comparison.b_is_better);
//! ```

mod classifier;
mod comparison;
mod render;
mod sentiment;
mod session;

pub use classifier::{ab_predict, AbPrediction, Classifier, ClassifierError, ClassifierLoader};
pub use comparison::{BundleComparison, MetricDiff};
pub use render::{render_bundle, render_comparison, render_loaded_comparison, render_versions, BundleReport};
pub use sentiment::Sentiment;
pub use session::{DashboardSession, LoadedComparison, Selection};
