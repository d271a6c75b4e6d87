//! Destinations for check output.

use std::io;

/// Where checks write their lines and record their verdict.
pub trait TestSink {
    /// Write one line of output
    fn log(&mut self, line: &str);

    /// Mark the current test failed without stopping it
    fn fail(&mut self);

    fn failed(&self) -> bool;

    fn skipped(&self) -> bool;

    fn mark_skipped(&mut self);

    /// Write a line and mark the test failed
    fn error(&mut self, line: &str) {
        self.log(line);
        self.fail();
    }
}

/// A [`TestSink`] over any [`io::Write`].
///
/// Useful as a test double for code that drives checks. When a label is
/// set every line is written as `<label>: <line>`. Write errors are dropped.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
    label: Option<String>,
    failed: bool,
    skipped: bool,
}

impl<W: io::Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            label: None,
            failed: false,
            skipped: false,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into()).filter(|l| !l.is_empty());
        self
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: io::Write> TestSink for WriterSink<W> {
    fn log(&mut self, line: &str) {
        match &self.label {
            Some(label) => writeln!(self.writer, "{}: {}", label, line).ok(),
            None => writeln!(self.writer, "{}", line).ok(),
        };
    }

    fn fail(&mut self) {
        self.failed = true;
    }

    fn failed(&self) -> bool {
        self.failed
    }

    fn skipped(&self) -> bool {
        self.skipped
    }

    fn mark_skipped(&mut self) {
        self.skipped = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(sink: &WriterSink<Vec<u8>>) -> String {
        String::from_utf8_lossy(sink.get_ref()).into_owned()
    }

    #[test]
    fn test_log_does_not_fail() {
        let mut sink = WriterSink::new(Vec::new());
        sink.log("hello");
        assert_eq!(text(&sink), "hello\n");
        assert!(!sink.failed());
    }

    #[test]
    fn test_error_logs_and_fails() {
        let mut sink = WriterSink::new(Vec::new());
        sink.error("boom");
        assert_eq!(text(&sink), "boom\n");
        assert!(sink.failed());
        assert!(!sink.skipped());
    }

    #[test]
    fn test_label_prefixes_every_line() {
        let mut sink = WriterSink::new(Vec::new()).with_label("case 3");
        sink.log("a");
        sink.log("b");
        assert_eq!(text(&sink), "case 3: a\ncase 3: b\n");
    }

    #[test]
    fn test_empty_label_is_no_label() {
        let mut sink = WriterSink::new(Vec::new()).with_label("");
        sink.log("a");
        assert_eq!(text(&sink), "a\n");
    }

    #[test]
    fn test_mark_skipped() {
        let mut sink = WriterSink::new(io::sink());
        sink.mark_skipped();
        assert!(sink.skipped());
        assert!(!sink.failed());
    }
}
