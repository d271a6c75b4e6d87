//! Call-site capture for check messages.

use std::fmt;
use std::panic::Location;
use std::path::Path;

/// Source position of a check call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    file: &'static str,
    line: u32,
}

impl Position {
    /// The position of the code calling the current `#[track_caller]` chain.
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
        }
    }

    /// Base name of the source file
    pub fn file_name(&self) -> &'static str {
        Path::new(self.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(self.file)
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// `"<file>:<line>: "`, or nothing when positions are turned off.
    pub fn prefix(&self, include: bool) -> String {
        if include {
            format!("{}: ", self)
        } else {
            String::new()
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file_name(), self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn here() -> Position {
        Position::caller()
    }

    #[test]
    fn test_caller_sees_through_track_caller() {
        let line = line!() + 1;
        let pos = here();
        assert_eq!(pos.line(), line);
        assert_eq!(pos.file_name(), "position.rs");
    }

    #[test]
    fn test_prefix() {
        let pos = Position {
            file: "src/deep/dir/a_test.rs",
            line: 12,
        };
        assert_eq!(pos.prefix(true), "a_test.rs:12: ");
        assert_eq!(pos.prefix(false), "");
    }
}
