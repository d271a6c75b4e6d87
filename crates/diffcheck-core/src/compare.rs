//! Comparison entry points.
//!
//! Each entry point first tries plain equality. On a mismatch it dispatches
//! on the shape of the two values:
//! - both sequences: aligned element diff
//! - both mappings: key classification
//! - anything else: a one-line "expected X, but got Y" message
//!
//! ## Logging Ownership
//!
//! The entry points here own lifecycle logging (`start`, `end`, `end_error`).
//! The `diff` modules below them do not log.

use crate::config::ReportConfig;
use crate::diff::{diff_mappings, diff_sequences_with, DiffReport};
use crate::errors::Result;
use crate::value::Value;
use crate::{log_op_end, log_op_error, log_op_start};
use diffcheck_core_types::schema::SHAPE_LINES;
use serde::{Deserialize, Serialize};

/// Result of comparing an expected value with an actual one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Equal,
    /// Structural difference between two sequences or two mappings
    Diff(DiffReport),
    /// Two values that cannot be diffed structurally, by their renderings.
    /// The type names are set when the two values differ in type.
    Mismatch {
        expected: String,
        actual: String,
        expected_type: Option<String>,
        actual_type: Option<String>,
    },
}

impl Outcome {
    pub fn is_equal(&self) -> bool {
        matches!(self, Outcome::Equal)
    }

    fn mismatch(expected: &Value, actual: &Value) -> Self {
        Outcome::Mismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
            expected_type: None,
            actual_type: None,
        }
    }

    fn typed_mismatch(expected: &Value, actual: &Value) -> Self {
        Outcome::Mismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
            expected_type: Some(expected.type_name().to_string()),
            actual_type: Some(actual.type_name().to_string()),
        }
    }

    /// Render the outcome as text lines. `prefix` is prepended to the first line.
    ///
    /// A mismatch renders as `<prefix><name> is expected to be "X", but got "Y"`.
    /// When that line reaches `config.wrap_width` it is split into four lines
    /// with each value on its own indented line. An equal outcome renders
    /// nothing.
    pub fn render(&self, name: &str, prefix: &str, config: &ReportConfig) -> Vec<String> {
        match self {
            Outcome::Equal => Vec::new(),
            Outcome::Diff(report) => report.render(name, prefix),
            Outcome::Mismatch {
                expected,
                actual,
                expected_type,
                actual_type,
            } => {
                let exp = describe(expected, expected_type.as_deref());
                let act = describe(actual, actual_type.as_deref());
                let line = format!(
                    "{}{} is expected to be {}, but got {}",
                    prefix, name, exp, act
                );
                if line.len() < config.wrap_width {
                    return vec![line];
                }
                vec![
                    format!("{}{} is expected to be", prefix, name),
                    format!("  {}", exp),
                    "but got".to_string(),
                    format!("  {}", act),
                ]
            }
        }
    }
}

fn describe(rendered: &str, type_name: Option<&str>) -> String {
    match type_name {
        Some(t) => format!("{:?}(type {})", rendered, t),
        None => format!("{:?}", rendered),
    }
}

/// Compare two values structurally.
///
/// # Errors
///
/// Propagates alignment errors from the sequence diff.
pub fn compare(expected: &Value, actual: &Value, config: &ReportConfig) -> Result<Outcome> {
    log_op_start!(
        "compare",
        shape = expected.shape(),
        exp_len = expected.len() as u64,
        act_len = actual.len() as u64
    );
    let start = std::time::Instant::now();

    let outcome = compare_impl(expected, actual, config).map_err(|e| {
        log_op_error!(
            "compare",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "compare",
        duration_ms = start.elapsed().as_millis() as u64,
        equal = outcome.is_equal()
    );

    Ok(outcome)
}

fn compare_impl(expected: &Value, actual: &Value, config: &ReportConfig) -> Result<Outcome> {
    if expected == actual {
        return Ok(Outcome::Equal);
    }
    match (expected, actual) {
        (Value::Sequence(exp), Value::Sequence(act)) => Ok(Outcome::Diff(diff_sequences_with(
            exp,
            act,
            config.show_matched,
        )?)),
        (Value::Mapping(exp), Value::Mapping(act)) => Ok(Outcome::Diff(diff_mappings(exp, act))),
        _ if expected.type_name() == actual.type_name() => {
            Ok(Outcome::mismatch(expected, actual))
        }
        _ => Ok(Outcome::typed_mismatch(expected, actual)),
    }
}

/// Compare two values by their renderings.
///
/// Two sequences are compared element by element on the rendered elements.
/// Otherwise the whole renderings are compared, and if either spans several
/// lines the two are diffed line by line.
///
/// # Errors
///
/// Propagates alignment errors from the sequence diff.
pub fn compare_strings(expected: &Value, actual: &Value, config: &ReportConfig) -> Result<Outcome> {
    log_op_start!(
        "compare_strings",
        shape = expected.shape(),
        exp_len = expected.len() as u64,
        act_len = actual.len() as u64
    );
    let start = std::time::Instant::now();

    let outcome = compare_strings_impl(expected, actual, config).map_err(|e| {
        log_op_error!(
            "compare_strings",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "compare_strings",
        duration_ms = start.elapsed().as_millis() as u64,
        equal = outcome.is_equal()
    );

    Ok(outcome)
}

fn compare_strings_impl(
    expected: &Value,
    actual: &Value,
    config: &ReportConfig,
) -> Result<Outcome> {
    if let (Value::Sequence(exp), Value::Sequence(act)) = (expected, actual) {
        let exp: Vec<String> = exp.iter().map(Value::to_string).collect();
        let act: Vec<String> = act.iter().map(Value::to_string).collect();
        return diff_rendered_lines(&exp, &act, config);
    }

    let exp = expected.to_string();
    let act = actual.to_string();
    if exp == act {
        return Ok(Outcome::Equal);
    }
    if exp.contains('\n') || act.contains('\n') {
        let exp: Vec<&str> = exp.split('\n').collect();
        let act: Vec<&str> = act.split('\n').collect();
        return diff_rendered_lines(&exp, &act, config);
    }
    Ok(Outcome::mismatch(expected, actual))
}

/// Diff two texts line by line.
///
/// # Errors
///
/// Propagates alignment errors from the sequence diff.
pub fn compare_lines(expected: &str, actual: &str, config: &ReportConfig) -> Result<Outcome> {
    let exp: Vec<&str> = expected.split('\n').collect();
    let act: Vec<&str> = actual.split('\n').collect();

    log_op_start!(
        "compare_lines",
        shape = SHAPE_LINES,
        exp_len = exp.len() as u64,
        act_len = act.len() as u64
    );
    let start = std::time::Instant::now();

    let outcome = diff_rendered_lines(&exp, &act, config).map_err(|e| {
        log_op_error!(
            "compare_lines",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "compare_lines",
        duration_ms = start.elapsed().as_millis() as u64,
        equal = outcome.is_equal()
    );

    Ok(outcome)
}

fn diff_rendered_lines<S: AsRef<str>>(
    expected: &[S],
    actual: &[S],
    config: &ReportConfig,
) -> Result<Outcome> {
    let exp: Vec<&str> = expected.iter().map(AsRef::as_ref).collect();
    let act: Vec<&str> = actual.iter().map(AsRef::as_ref).collect();
    if exp == act {
        return Ok(Outcome::Equal);
    }
    Ok(Outcome::Diff(diff_sequences_with(
        &exp,
        &act,
        config.show_matched,
    )?))
}
