//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{parse::ParseArgs, timestamp::TimestampArgs};

/// Inspect WordPress REST API payloads as typed records.
#[derive(Parser, Debug)]
#[command(name = "wpress")]
#[command(author, version = env!("WPRESS_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a JSON object or array into records
    Parse(ParseArgs),

    /// Parse ISO-8601 timestamps the way date fields are parsed
    Timestamp(TimestampArgs),
}
