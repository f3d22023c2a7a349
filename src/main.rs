//! Sentimiento CLI
//!
//! # Usage
//!
//! ```bash
//! # List versions in the bucket named by S3_BUCKET
//! sentimiento versions
//!
//! # Publish a training run
//! sentimiento --bucket my-models publish --model model.joblib \
//!     --vectorizer vectorizer.joblib --metrics metrics.json \
//!     --confusion-image confusion_matrix.png
//!
//! # Compare the two newest versions
//! sentimiento compare
//! ```

use clap::Parser;
use sentimiento::cli::{init_tracing, run_command, Cli, LogLevel};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(LogLevel::from_flags(cli.verbose, cli.quiet));

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
