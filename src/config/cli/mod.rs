//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! sentimiento versions
//! sentimiento --bucket my-models show 20240102-120000
//! sentimiento compare 20240102-120000 20240101-120000 --format json
//! sentimiento --local ./store publish --model model.joblib --vectorizer vectorizer.joblib \
//!     --metrics metrics.json --confusion-image confusion_matrix.png
//! sentimiento fetch 20240102-120000 metrics --output metrics.json
//! ```

mod core;
mod types;

pub use core::{
    parse_args, Cli, Command, CompareArgs, FetchArgs, PublishArgs, ShowArgs, VersionsArgs,
};
pub use types::OutputFormat;

#[cfg(test)]
mod tests;
