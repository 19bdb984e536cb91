//! Verbatim report line formats
//!
//! All text the harness emits is assembled here, so the line format other
//! tooling parses has a single home. Writes are best-effort: the report
//! stream is diagnostics, and a broken sink must never turn into a harness
//! failure.

use std::io::Write;

use crate::failure::CaughtFailure;

/// Fill character for the padded test-name column
const FILL: char = '.';

/// Emits report lines for one test case
pub(crate) struct ReportWriter<'a> {
    sink: &'a mut dyn Write,
}

impl<'a> ReportWriter<'a> {
    pub(crate) fn new(sink: &'a mut dyn Write) -> Self {
        Self { sink }
    }

    /// `TESTING <name>: ` padded with dots to `width` columns, then one space
    ///
    /// Prefixes already meeting or exceeding the width are emitted unmodified.
    pub(crate) fn prefix(&mut self, name: &str, width: usize) {
        let mut line = format!("TESTING {}: ", name);
        let length = line.chars().count();
        for _ in length..width {
            line.push(FILL);
        }
        let _ = write!(self.sink, "{} ", line);
    }

    pub(crate) fn ok(&mut self, elapsed_ms: u128) {
        let _ = writeln!(self.sink, "OK ({} ms)", elapsed_ms);
    }

    pub(crate) fn failed(&mut self, elapsed_ms: u128) {
        let _ = writeln!(self.sink, "FAILED ({} ms)", elapsed_ms);
    }

    /// Verbose mismatch details: actual, expected, separator line
    pub(crate) fn mismatch(&mut self, actual: &str, expected: &str) {
        let _ = writeln!(self.sink, " RESULT:   {}", actual);
        let _ = writeln!(self.sink, " EXPECTED: {}", expected);
        let _ = writeln!(self.sink, ".");
    }

    /// Exception block: category and message, or `unknown`
    pub(crate) fn exception(&mut self, caught: &CaughtFailure) {
        let _ = writeln!(self.sink, "EXCEPTION");
        match (caught.category(), caught.message()) {
            (Some(category), Some(message)) => {
                let _ = writeln!(self.sink, "{}:", category);
                let _ = writeln!(self.sink, "{}", message);
            }
            _ => {
                let _ = writeln!(self.sink, "unknown");
            }
        }
    }
}
