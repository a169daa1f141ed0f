//! Command-line interface definition.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};

use chartkit_core::{StatsPeriod, TimeRange};

/// chartkit - chart interval and label helpers
#[derive(Debug, Parser)]
#[command(name = "chartkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "CHARTKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the interval bucket for a time range
    Interval {
        #[command(flatten)]
        range: RangeArgs,

        /// Request a finer bucket
        #[arg(long)]
        high_fidelity: bool,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Print the length of a time range in minutes
    Minutes {
        #[command(flatten)]
        range: RangeArgs,
    },

    /// Truncate a label for display
    Truncate {
        /// Label to truncate
        value: String,

        /// Maximum number of characters to keep (0 disables truncation)
        #[arg(long, short)]
        length: Option<usize>,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Time range flags shared by range commands.
#[derive(Debug, Clone, Default, Args)]
pub struct RangeArgs {
    /// Start of the range (RFC 3339)
    #[arg(long, requires = "end")]
    pub start: Option<DateTime<Utc>>,

    /// End of the range (RFC 3339)
    #[arg(long, requires = "start")]
    pub end: Option<DateTime<Utc>>,

    /// Relative period such as 24h or 14d, used without --start/--end
    #[arg(long)]
    pub period: Option<StatsPeriod>,
}

impl RangeArgs {
    /// Builds the time range described by the flags.
    pub fn to_range(&self) -> TimeRange {
        TimeRange {
            start: self.start,
            end: self.end,
            period: self.period,
        }
    }
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Dump current configuration
    Dump,

    /// Validate configuration
    Validate,

    /// Show configuration file path
    Path,
}
