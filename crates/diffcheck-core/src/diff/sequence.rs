//! Sequence diff rendering.
//!
//! Walks both sequences in index order, driven by an [`Alignment`], and
//! emits a removed line per unmatched expected element, an added line per
//! unmatched actual element, and a removed+added pair per matched pair whose
//! elements differ. Equal matched pairs are skipped unless context is asked for.

use crate::diff::align::{align, Alignment, LineCost};
use crate::diff::report::{DiffLine, DiffReport, LineLabel, Summary, Unit};
use crate::errors::Result;
use std::fmt::Display;

/// Diff two sequences element by element.
///
/// # Errors
///
/// Propagates alignment errors; the built-in cost model never produces one.
pub fn diff_sequences<T: PartialEq + Display>(expected: &[T], actual: &[T]) -> Result<DiffReport> {
    diff_sequences_with(expected, actual, false)
}

/// Like [`diff_sequences`], optionally listing equal elements as context.
///
/// # Errors
///
/// Propagates alignment errors; the built-in cost model never produces one.
pub fn diff_sequences_with<T: PartialEq + Display>(
    expected: &[T],
    actual: &[T],
    show_matched: bool,
) -> Result<DiffReport> {
    let alignment = align(
        expected.len(),
        actual.len(),
        &LineCost::new(expected, actual),
    )?;
    Ok(render_alignment(expected, actual, &alignment, show_matched))
}

/// Render an alignment of `expected` against `actual` into a report.
pub fn render_alignment<T: PartialEq + Display>(
    expected: &[T],
    actual: &[T],
    alignment: &Alignment,
    show_matched: bool,
) -> DiffReport {
    let mut report = DiffReport::new(Summary {
        expected_len: expected.len(),
        actual_len: actual.len(),
        unit: Unit::Lines,
    });

    let removed = |i: usize| DiffLine::removed(LineLabel::Position(i + 1), Some(expected[i].to_string()));
    let added = |j: usize| DiffLine::added(LineLabel::Position(j + 1), Some(actual[j].to_string()));

    let (mut i, mut j) = (0, 0);
    while i < expected.len() || j < actual.len() {
        if j >= actual.len() || (i < expected.len() && !alignment.is_matched_expected(i)) {
            report.push(removed(i));
            i += 1;
        } else if i >= expected.len() || !alignment.is_matched_actual(j) {
            report.push(added(j));
            j += 1;
        } else {
            if expected[i] != actual[j] {
                report.push(removed(i));
                report.push(added(j));
            } else if show_matched {
                report.push(DiffLine::context(
                    LineLabel::Position(i + 1),
                    Some(expected[i].to_string()),
                ));
            }
            i += 1;
            j += 1;
        }
    }

    report
}
