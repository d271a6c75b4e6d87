//! JSON command
//!
//! Usage: diffcheck json <EXPECTED> <ACTUAL> [--name <NAME>] [--format <text|json>]

use super::{print_lines, read_input, CommandResult, Status};
use clap::{Args, ValueEnum};
use diffcheck_core::errors::{DiffCheckError, ExError};
use diffcheck_core::{compare, ReportConfig, Value};
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct JsonArgs {
    /// File with the expected JSON document
    pub expected: PathBuf,

    /// File with the actual JSON document
    pub actual: PathBuf,

    /// Name used in the report title
    #[arg(short, long, default_value = "document")]
    pub name: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// The text report
    Text,
    /// The outcome as JSON
    Json,
}

/// Execute json command
pub fn execute(args: JsonArgs, config: &ReportConfig) -> CommandResult {
    let expected = load_document(&args.expected)?;
    let actual = load_document(&args.actual)?;

    let outcome = compare(&expected, &actual, config)?;

    match args.format {
        Format::Text => print_lines(&outcome.render(&args.name, "", config)),
        Format::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
    }

    Ok(if outcome.is_equal() {
        Status::Equal
    } else {
        Status::Different
    })
}

fn load_document(path: &Path) -> Result<Value, ExError> {
    let text = read_input(path)?;
    let json: serde_json::Value = serde_json::from_str(&text).map_err(|e| {
        ExError::from(DiffCheckError::Decode {
            what: path.display().to_string(),
            reason: e.to_string(),
        })
        .with_op("load_document")
    })?;
    Ok(Value::from(json))
}
