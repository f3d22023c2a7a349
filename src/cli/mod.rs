//! CLI module for sentimiento
//!
//! This module contains all CLI command handlers and utilities.

mod commands;
pub mod logging;

pub use commands::run_command;
pub use logging::{init_tracing, LogLevel};

// Re-export Cli from config for convenience
pub use crate::config::Cli;
