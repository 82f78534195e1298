//! Timestamp command implementation.

use anyhow::{Context, Result};
use clap::Args;

use wpress_core::parse_iso8601;

use crate::output;

#[derive(Args, Debug)]
pub struct TimestampArgs {
    /// ISO-8601 text, e.g. 2020-01-02T03:04:05
    #[arg(required = true)]
    pub values: Vec<String>,
}

pub fn run(args: TimestampArgs) -> Result<()> {
    for (i, value) in args.values.iter().enumerate() {
        let ts = parse_iso8601(value).with_context(|| format!("Invalid timestamp '{}'", value))?;

        if i > 0 {
            println!();
        }

        output::field("Parsed", &ts.to_string());
        output::field("ISO-8601", &ts.to_iso8601());
        match ts.to_utc() {
            Some(utc) => output::field("UTC", &utc.to_rfc3339()),
            None => output::field("UTC", "(no offset)"),
        }
    }

    Ok(())
}
