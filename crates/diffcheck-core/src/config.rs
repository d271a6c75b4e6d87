//! Report configuration.
//!
//! Configuration is an explicit value handed to the comparison and rendering
//! entry points. Nothing in the engine reads process-wide state.
//!
//! ```toml
//! include_position = false
//! wrap_width = 100
//! show_matched = true
//! ```

use crate::errors::{DiffCheckError, ExError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default width at which scalar mismatch messages switch to the wrapped form.
pub const DEFAULT_WRAP_WIDTH: usize = 80;

/// Options controlling how outcomes are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Prefix reports with the `file:line: ` of the assertion call site
    pub include_position: bool,
    /// Single-line scalar messages at least this long are wrapped
    pub wrap_width: usize,
    /// Emit equal matched sequence elements as context lines
    pub show_matched: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            include_position: true,
            wrap_width: DEFAULT_WRAP_WIDTH,
            show_matched: false,
        }
    }
}

impl ReportConfig {
    /// Parse a configuration from TOML text. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// - `InvalidConfig`: the text is not valid TOML or names an unknown key
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| {
            ExError::from(DiffCheckError::InvalidConfig {
                reason: e.to_string(),
            })
        })
    }

    /// Read and parse a TOML configuration file.
    ///
    /// # Errors
    ///
    /// - `Io`: the file cannot be read
    /// - `InvalidConfig`: the contents do not parse
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            ExError::from(DiffCheckError::Io {
                path: path.display().to_string(),
                reason: e.to_string(),
            })
            .with_op("load_config")
        })?;
        Self::from_toml_str(&text)
    }

    /// Builder-style toggle for the call-site prefix
    pub fn with_include_position(mut self, include: bool) -> Self {
        self.include_position = include;
        self
    }

    /// Builder-style toggle for context lines
    pub fn with_show_matched(mut self, show: bool) -> Self {
        self.show_matched = show;
        self
    }
}
