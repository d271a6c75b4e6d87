//! diffcheck Core - structural diff engine for expected-vs-actual reports
//!
//! This crate provides the pieces an assertion layer needs to explain why two
//! values are not equal:
//! - A generic minimum-cost sequence alignment (`diff::align`)
//! - A sequence diff renderer driven by that alignment (`diff::sequence`)
//! - A collision-tolerant key classifier for mappings (`diff::mapping`)
//! - A line-oriented report model and text renderer (`diff::report`)
//! - A tagged dynamic value model and the comparison entry points (`value`, `compare`)
//!
//! Every entry point is a pure function of its inputs; the only side effect is
//! structured logging through the `logging_facility`.

pub mod compare;
pub mod config;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod value;

// Re-export commonly used types
pub use compare::{compare, compare_lines, compare_strings, Outcome};
pub use config::ReportConfig;
pub use diff::{diff_mappings, diff_sequences, DiffReport};
pub use errors::{DiffCheckError, ExError, ExErrorKind, Result};
pub use value::{Scalar, Value, ValueMap};
