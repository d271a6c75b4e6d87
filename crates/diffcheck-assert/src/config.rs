//! Checker configuration.

use diffcheck_core::{ReportConfig, Result};
use std::path::Path;

/// Options for a [`Checker`](crate::Checker). Wraps the report options of the
/// core engine; position prefixes are controlled from here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssertConfig {
    pub report: ReportConfig,
}

impl AssertConfig {
    pub fn new(report: ReportConfig) -> Self {
        Self { report }
    }

    /// Load from a TOML file in the [`ReportConfig`] format.
    ///
    /// # Errors
    ///
    /// - `Io`: the file cannot be read
    /// - `InvalidConfig`: the contents do not parse
    pub fn load(path: &Path) -> Result<Self> {
        ReportConfig::load(path).map(Self::new)
    }

    pub fn include_position(&self) -> bool {
        self.report.include_position
    }

    pub fn with_include_position(mut self, include: bool) -> Self {
        self.report.include_position = include;
        self
    }
}

impl From<ReportConfig> for AssertConfig {
    fn from(report: ReportConfig) -> Self {
        Self::new(report)
    }
}
