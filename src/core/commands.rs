//! # Command Handlers
//!
//! One submodule per group of CLI subcommands. Each handler takes already
//! parsed arguments, calls into the library and writes the result to stdout.

pub mod bench;
pub mod config;
pub mod numeric;
pub mod sequence;
pub mod text;

use crate::utils::error::Result;

use super::types::OutputFormat;

/// Prints `value` as pretty JSON, or falls back to `text` for plain output.
pub(crate) fn emit<T: serde::Serialize>(format: OutputFormat, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
    }

    Ok(())
}
