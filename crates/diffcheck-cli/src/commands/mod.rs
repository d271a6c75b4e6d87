//! Command implementations and the helpers they share.

pub mod json;
pub mod lines;

use diffcheck_core::errors::{DiffCheckError, ExError};
use diffcheck_core::ReportConfig;
use std::path::Path;

pub type CommandResult = Result<Status, Box<dyn std::error::Error>>;

/// What a comparison command found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Equal,
    Different,
}

impl Status {
    pub fn exit_code(self) -> i32 {
        match self {
            Status::Equal => 0,
            Status::Different => 1,
        }
    }
}

/// Load the report configuration, or the defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> Result<ReportConfig, Box<dyn std::error::Error>> {
    let config = match path {
        Some(path) => ReportConfig::load(path)?,
        None => ReportConfig::default(),
    };
    tracing::debug!(?config, "report configuration");
    Ok(config)
}

/// Read a whole input file.
pub fn read_input(path: &Path) -> Result<String, ExError> {
    std::fs::read_to_string(path).map_err(|e| {
        ExError::from(DiffCheckError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
        .with_op("read_input")
    })
}

/// Print rendered lines to stdout.
pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}
