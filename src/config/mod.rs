//! Configuration: store settings and command-line arguments

mod cli;
mod store;

pub use cli::{
    parse_args, Cli, Command, CompareArgs, FetchArgs, OutputFormat, PublishArgs, ShowArgs,
    VersionsArgs,
};
pub use store::{
    resolve, ConfigError, StoreConfig, StoreOverrides, BUCKET_ENV, ENDPOINT_ENV, REGION_ENV,
};
