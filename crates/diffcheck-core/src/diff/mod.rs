//! Structural diff engine.
//!
//! Explains how two values that were expected to be equal differ, as an
//! ordered list of removed/added lines plus a one-line summary.
//!
//! ## Entry points
//!
//! ```
//! use diffcheck_core::diff::{diff_sequences, diff_mappings};
//! use std::collections::BTreeMap;
//!
//! let report = diff_sequences(&["1", "2"], &["3", "2"]).unwrap();
//! assert_eq!(report.summary.to_string(), "both 2 lines");
//!
//! let exp = BTreeMap::from([(2, 1), (3, 5)]);
//! let act = BTreeMap::from([(1, 2), (3, 4)]);
//! let report = diff_mappings(&exp, &act);
//! assert_eq!(report.removed(), 2);
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce byte-identical reports.
//! - **Monotonic alignment**: matched sequence positions never cross.
//! - **Collision safety**: mapping keys that merely render alike are never
//!   treated as the same entry.

pub mod align;
pub mod mapping;
pub mod report;
pub mod sequence;

pub use align::{align, Alignment, Cost, CostModel, FnCostModel, LineCost};
pub use mapping::{classify, diff_mappings, render_classification, KeyClassification, Mapping};
pub use report::{DiffLine, DiffReport, LineLabel, LineTag, Summary, Unit, DIFF_HEADER};
pub use sequence::{diff_sequences, diff_sequences_with, render_alignment};
