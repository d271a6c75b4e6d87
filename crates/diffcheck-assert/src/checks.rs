//! The checks.
//!
//! All checks are `#[track_caller]`, so failure messages point at the line
//! in the test that called them. Each returns `true` when the check holds.
//! Argument order follows the messages: the actual value comes before the
//! expected one.
//!
//! Comparison failures in the engine itself (`ExError`) are written as
//! `<pos>assert: <error>` so they never read like a value mismatch.

use crate::config::AssertConfig;
use crate::position::Position;
use crate::sink::TestSink;
use diffcheck_core::{compare, compare_strings, ExError, Outcome, Result, Value};
use std::fmt::Display;
use std::panic::{catch_unwind, AssertUnwindSafe};
use thiserror::Error;

/// Returned by the fatal checks to stop the current sequence of checks.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Abort {
    #[error("check failed")]
    Failed,
    #[error("test skipped")]
    Skipped,
}

/// Runs checks against a borrowed [`TestSink`].
pub struct Checker<'s, S: TestSink + ?Sized> {
    sink: &'s mut S,
    config: AssertConfig,
}

impl<'s, S: TestSink + ?Sized> Checker<'s, S> {
    pub fn new(sink: &'s mut S) -> Self {
        Self::with_config(sink, AssertConfig::default())
    }

    pub fn with_config(sink: &'s mut S, config: AssertConfig) -> Self {
        Self { sink, config }
    }

    /// Drop the `file:line: ` prefix from messages
    pub fn without_position(mut self) -> Self {
        self.config = self.config.with_include_position(false);
        self
    }

    pub fn config(&self) -> &AssertConfig {
        &self.config
    }

    pub fn failed(&self) -> bool {
        self.sink.failed()
    }

    fn prefix(&self, pos: Position) -> String {
        pos.prefix(self.config.include_position())
    }

    fn report(
        &mut self,
        check: &'static str,
        name: &str,
        pos: Position,
        outcome: Result<Outcome>,
    ) -> bool {
        let outcome = match outcome {
            Ok(Outcome::Equal) => return true,
            Ok(outcome) => outcome,
            Err(err) => return self.engine_error(check, pos, &err),
        };
        tracing::debug!(check, name, position = %pos, "check failed");

        let lines = outcome.render(name, &self.prefix(pos), &self.config.report);
        match outcome {
            // A mismatch is one message, wrapped or not.
            Outcome::Mismatch { .. } => self.sink.error(&lines.join("\n")),
            _ => {
                let mut lines = lines.iter();
                if let Some(title) = lines.next() {
                    self.sink.error(title);
                }
                for line in lines {
                    self.sink.log(line);
                }
            }
        }
        false
    }

    fn engine_error(&mut self, check: &'static str, pos: Position, err: &ExError) -> bool {
        tracing::debug!(
            check,
            position = %pos,
            err.code = err.code(),
            "comparison could not run"
        );
        let line = format!("{}assert: {}", self.prefix(pos), err);
        self.sink.error(&line);
        false
    }

    fn fail(&mut self, check: &'static str, pos: Position, message: &str) -> bool {
        tracing::debug!(check, position = %pos, "check failed");
        let line = format!("{}{}", self.prefix(pos), message);
        self.sink.error(&line);
        false
    }

    /// Check that `actual` equals `expected`.
    ///
    /// Two sequences or two mappings that differ are reported as a diff;
    /// anything else as `<name> is expected to be "X", but got "Y"`, with
    /// the type names added when the types differ.
    #[track_caller]
    pub fn equal(
        &mut self,
        name: &str,
        actual: impl Into<Value>,
        expected: impl Into<Value>,
    ) -> bool {
        let pos = Position::caller();
        let (actual, expected) = (actual.into(), expected.into());
        let outcome = compare(&expected, &actual, &self.config.report);
        self.report("equal", name, pos, outcome)
    }

    /// Check that `actual` and `expected` render to the same text.
    ///
    /// Sequences are compared element by element; multi-line text line by line.
    #[track_caller]
    pub fn string_equal(
        &mut self,
        name: &str,
        actual: impl Into<Value>,
        expected: impl Into<Value>,
    ) -> bool {
        let pos = Position::caller();
        let (actual, expected) = (actual.into(), expected.into());
        let outcome = compare_strings(&expected, &actual, &self.config.report);
        self.report("string_equal", name, pos, outcome)
    }

    /// Report the result of a comparison run outside the checker, such as a
    /// diff under a custom cost model.
    #[track_caller]
    pub fn outcome(&mut self, name: &str, outcome: Result<Outcome>) -> bool {
        let pos = Position::caller();
        self.report("outcome", name, pos, outcome)
    }

    /// Check that `actual` is not equal to `unexpected`.
    #[track_caller]
    pub fn not_equal(
        &mut self,
        name: &str,
        actual: impl Into<Value>,
        unexpected: impl Into<Value>,
    ) -> bool {
        let pos = Position::caller();
        let (actual, unexpected): (Value, Value) = (actual.into(), unexpected.into());
        if actual != unexpected {
            return true;
        }
        let message = format!(
            "{} is not expected to be {:?}",
            name,
            unexpected.to_string()
        );
        self.fail("not_equal", pos, &message)
    }

    #[track_caller]
    pub fn is_true(&mut self, name: &str, actual: bool) -> bool {
        let pos = Position::caller();
        if actual {
            return true;
        }
        self.fail("is_true", pos, &format!("{} unexpectedly got false", name))
    }

    #[track_caller]
    pub fn is_false(&mut self, name: &str, actual: bool) -> bool {
        let pos = Position::caller();
        if !actual {
            return true;
        }
        self.fail("is_false", pos, &format!("{} unexpectedly got true", name))
    }

    /// Check a condition, writing `show_if_failed` when it does not hold.
    #[track_caller]
    pub fn should(&mut self, condition: bool, show_if_failed: &str) -> bool {
        let pos = Position::caller();
        condition || self.fail("should", pos, show_if_failed)
    }

    /// Like [`should`](Self::should) but stops the sequence on failure.
    ///
    /// # Errors
    ///
    /// [`Abort::Failed`] when the condition does not hold.
    #[track_caller]
    pub fn should_or_die(
        &mut self,
        condition: bool,
        show_if_failed: &str,
    ) -> std::result::Result<(), Abort> {
        let pos = Position::caller();
        if condition {
            return Ok(());
        }
        self.fail("should_or_die", pos, show_if_failed);
        Err(Abort::Failed)
    }

    /// Check `actual` against a predicate. On failure writes
    /// `<name> <desc_if_failed>: "<actual>"(type <type>)`.
    #[track_caller]
    pub fn value_should<F>(
        &mut self,
        name: &str,
        actual: impl Into<Value>,
        predicate: F,
        desc_if_failed: &str,
    ) -> bool
    where
        F: FnOnce(&Value) -> bool,
    {
        let pos = Position::caller();
        let actual = actual.into();
        if predicate(&actual) {
            return true;
        }
        let message = format!(
            "{} {}: {:?}(type {})",
            name,
            desc_if_failed,
            actual.to_string(),
            actual.type_name()
        );
        self.fail("value_should", pos, &message)
    }

    /// Check that a result is `Ok`, writing the error otherwise.
    #[track_caller]
    pub fn no_error<T, E: Display>(&mut self, result: &std::result::Result<T, E>) -> bool {
        let pos = Position::caller();
        match result {
            Ok(_) => true,
            Err(err) => self.fail("no_error", pos, &err.to_string()),
        }
    }

    /// Like [`no_error`](Self::no_error) but stops the sequence on failure.
    ///
    /// # Errors
    ///
    /// [`Abort::Failed`] when `result` is an `Err`.
    #[track_caller]
    pub fn no_error_or_die<T, E: Display>(
        &mut self,
        result: &std::result::Result<T, E>,
    ) -> std::result::Result<(), Abort> {
        let pos = Position::caller();
        match result {
            Ok(_) => Ok(()),
            Err(err) => {
                self.fail("no_error_or_die", pos, &err.to_string());
                Err(Abort::Failed)
            }
        }
    }

    /// Check that a result is an `Err`.
    #[track_caller]
    pub fn error<T, E>(&mut self, result: &std::result::Result<T, E>) -> bool {
        let pos = Position::caller();
        match result {
            Ok(_) => self.fail("error", pos, "Expecting an error but got none!"),
            Err(_) => true,
        }
    }

    /// Check that `f` panics.
    #[track_caller]
    pub fn panics<F: FnOnce()>(&mut self, name: &str, f: F) -> bool {
        let pos = Position::caller();
        if catch_unwind(AssertUnwindSafe(f)).is_err() {
            return true;
        }
        self.fail("panics", pos, &format!("{} does not panic as expected.", name))
    }

    /// Write a message, mark the test failed and stop the sequence.
    ///
    /// # Errors
    ///
    /// Always [`Abort::Failed`].
    #[track_caller]
    pub fn fatal(&mut self, message: &str) -> std::result::Result<(), Abort> {
        let pos = Position::caller();
        self.fail("fatal", pos, message);
        Err(Abort::Failed)
    }

    /// Write a message, mark the test skipped and stop the sequence.
    ///
    /// # Errors
    ///
    /// Always [`Abort::Skipped`].
    #[track_caller]
    pub fn skip(&mut self, message: &str) -> std::result::Result<(), Abort> {
        let line = format!("{}{}", self.prefix(Position::caller()), message);
        self.sink.log(&line);
        self.sink.mark_skipped();
        Err(Abort::Skipped)
    }
}
