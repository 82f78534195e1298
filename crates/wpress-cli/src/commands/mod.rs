//! Subcommand implementations.

pub mod parse;
pub mod timestamp;
