//! Diff report model and its text rendering.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! Rendering is a pure function of the report, so the same report always
//! renders to the same bytes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed header emitted after the summary line.
pub const DIFF_HEADER: &str = "  Difference(expected ---  actual +++)";

/// What a rendered line says about its entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LineTag {
    /// Present and equal on both sides
    Context,
    /// Expected-only, or the expected half of a changed pair
    Removed,
    /// Actual-only, or the actual half of a changed pair
    Added,
}

impl LineTag {
    fn marker(self) -> &'static str {
        match self {
            LineTag::Context => "   ",
            LineTag::Removed => "---",
            LineTag::Added => "+++",
        }
    }
}

/// Where a line's entry lives in its own collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LineLabel {
    /// 1-based position in a sequence
    Position(usize),
    /// Rendered mapping key
    Key(String),
}

/// A single tagged line of a report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiffLine {
    pub tag: LineTag,
    pub label: LineLabel,
    /// Rendered value; `None` for set-like mappings where only the key matters
    pub value: Option<String>,
}

impl DiffLine {
    pub fn removed(label: LineLabel, value: Option<String>) -> Self {
        Self {
            tag: LineTag::Removed,
            label,
            value,
        }
    }

    pub fn added(label: LineLabel, value: Option<String>) -> Self {
        Self {
            tag: LineTag::Added,
            label,
            value,
        }
    }

    pub fn context(label: LineLabel, value: Option<String>) -> Self {
        Self {
            tag: LineTag::Context,
            label,
            value,
        }
    }

    /// Render as `    --- <label>: "<value>"`. Positions are right-aligned to
    /// width 3; keys and values are quoted.
    pub fn render(&self) -> String {
        let label = match &self.label {
            LineLabel::Position(pos) => format!("{:>3}", pos),
            LineLabel::Key(key) => format!("{:?}", key),
        };
        match &self.value {
            Some(value) => format!("    {} {}: {:?}", self.tag.marker(), label, value),
            None => format!("    {} {}", self.tag.marker(), label),
        }
    }
}

/// Unit counted by the summary line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Lines,
    Entries,
}

impl Unit {
    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Lines => "lines",
            Unit::Entries => "entries",
        }
    }
}

/// Sizes of both sides, rendered as `both N unit` or `exp N, act M unit`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Summary {
    pub expected_len: usize,
    pub actual_len: usize,
    pub unit: Unit,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.expected_len == self.actual_len {
            write!(f, "both {} {}", self.expected_len, self.unit.as_str())
        } else {
            write!(
                f,
                "exp {}, act {} {}",
                self.expected_len,
                self.actual_len,
                self.unit.as_str()
            )
        }
    }
}

/// The ordered, tagged lines describing a mismatch plus its summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiffReport {
    pub summary: Summary,
    pub lines: Vec<DiffLine>,
}

impl DiffReport {
    pub fn new(summary: Summary) -> Self {
        Self {
            summary,
            lines: Vec::new(),
        }
    }

    pub fn push(&mut self, line: DiffLine) {
        self.lines.push(line);
    }

    /// True when at least one removed or added line is present.
    pub fn has_differences(&self) -> bool {
        self.lines.iter().any(|l| l.tag != LineTag::Context)
    }

    /// Number of removed lines
    pub fn removed(&self) -> usize {
        self.count(LineTag::Removed)
    }

    /// Number of added lines
    pub fn added(&self) -> usize {
        self.count(LineTag::Added)
    }

    fn count(&self, tag: LineTag) -> usize {
        self.lines.iter().filter(|l| l.tag == tag).count()
    }

    /// `<prefix>Unexpected <name>: <summary>`
    pub fn title(&self, name: &str, prefix: &str) -> String {
        format!("{}Unexpected {}: {}", prefix, name, self.summary)
    }

    /// Render the full report: title, header, then one string per line.
    pub fn render(&self, name: &str, prefix: &str) -> Vec<String> {
        let mut out = Vec::with_capacity(self.lines.len() + 2);
        out.push(self.title(name, prefix));
        out.push(DIFF_HEADER.to_string());
        out.extend(self.lines.iter().map(DiffLine::render));
        out
    }
}
