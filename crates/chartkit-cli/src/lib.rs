//! Command-line front end for the chart helpers
//!
//! This crate provides the `chartkit` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use cli::Cli;
pub use config::ChartConfig;
pub use error::{CliError, CliResult};
