//! Lines command
//!
//! Usage: diffcheck lines <EXPECTED> <ACTUAL> [--name <NAME>] [--show-matched]

use super::{print_lines, read_input, CommandResult, Status};
use clap::Args;
use diffcheck_core::{compare_lines, ReportConfig};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct LinesArgs {
    /// File with the expected text
    pub expected: PathBuf,

    /// File with the actual text
    pub actual: PathBuf,

    /// Name used in the report title
    #[arg(short, long, default_value = "lines")]
    pub name: String,

    /// Also list lines that are equal on both sides
    #[arg(long)]
    pub show_matched: bool,
}

/// Execute lines command
pub fn execute(args: LinesArgs, config: &ReportConfig) -> CommandResult {
    let config = if args.show_matched {
        config.clone().with_show_matched(true)
    } else {
        config.clone()
    };

    let expected = read_input(&args.expected)?;
    let actual = read_input(&args.actual)?;

    let outcome = compare_lines(
        without_final_newline(&expected),
        without_final_newline(&actual),
        &config,
    )?;
    if outcome.is_equal() {
        return Ok(Status::Equal);
    }

    print_lines(&outcome.render(&args.name, "", &config));
    Ok(Status::Different)
}

/// A trailing newline ends the last line; it does not start an empty one.
fn without_final_newline(text: &str) -> &str {
    text.strip_suffix('\n').unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_without_final_newline() {
        assert_eq!(without_final_newline("a\nb\n"), "a\nb");
        assert_eq!(without_final_newline("a\nb"), "a\nb");
        assert_eq!(without_final_newline("a\n\n"), "a\n");
        assert_eq!(without_final_newline(""), "");
    }
}
