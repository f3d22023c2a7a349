//! Sentimiento: versioned storage for sentiment-model training outputs
//!
//! Each training run publishes a bundle of four artifacts (model,
//! vectorizer, metrics, confusion-matrix image) under a fresh version in an
//! object store. The dashboard lists versions newest first, loads two
//! bundles, and compares them side by side.
//!
//! - [`storage::cloud`]: object backends (in-memory, local directory, S3)
//! - [`storage::bundle`]: the versioned artifact store
//! - [`dashboard`]: version selection, comparison, and A/B scoring
//! - [`config`]: store configuration and CLI arguments
//! - [`cli`]: command handlers for the `sentimiento` binary

pub mod cli;
pub mod config;
pub mod dashboard;
pub mod storage;
