//! Parse command implementation.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, ValueEnum};
use serde_json::Value;
use tracing::{debug, info};

use wpress_core::{Comment, Identified, Model, Page, Post, ResultSet, Term};

use crate::output;

/// Resource type the input was fetched from.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    Post,
    Page,
    Comment,
    Category,
    Tag,
}

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// JSON file to read ('-' or omitted reads stdin)
    pub input: Option<PathBuf>,

    /// Resource type of the payload
    #[arg(long, short, value_enum, default_value_t = Resource::Post)]
    pub resource: Resource,

    /// Print only the record ids, as a JSON array
    #[arg(long)]
    pub ids: bool,
}

pub fn run(args: ParseArgs) -> Result<()> {
    let json = read_input(args.input.as_deref())?;

    match args.resource {
        Resource::Post => print_records::<Post>(&json, args.ids),
        Resource::Page => print_records::<Page>(&json, args.ids),
        Resource::Comment => print_records::<Comment>(&json, args.ids),
        Resource::Category | Resource::Tag => print_records::<Term>(&json, args.ids),
    }
}

fn read_input(path: Option<&Path>) -> Result<Value> {
    let text = match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            text
        }
    };

    debug!(bytes = text.len(), "read input");

    serde_json::from_str(&text).context("Input is not valid JSON")
}

fn parse_records<M: Model>(json: &Value) -> Result<ResultSet<M>> {
    let records = match json {
        Value::Array(items) => M::parse_list(items)
            .with_context(|| format!("Failed to parse {} list", M::NAME))?,
        Value::Object(_) => {
            let record = M::parse(json).with_context(|| format!("Failed to parse {}", M::NAME))?;
            ResultSet::from(vec![record])
        }
        _ => bail!("Expected a JSON object or array"),
    };

    info!(model = M::NAME, count = records.len(), "parsed records");

    Ok(records)
}

fn print_records<M: Model + Identified>(json: &Value, ids: bool) -> Result<()> {
    let records = parse_records::<M>(json)?;

    if ids {
        return output::json(&records.ids());
    }

    if records.is_empty() {
        output::notice("No records found.");
        return Ok(());
    }

    for record in &records {
        println!("{}", record.debug_string());
    }

    Ok(())
}
