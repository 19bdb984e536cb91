//! The single-function test harness
//!
//! [`FunctionTest`] owns one function under test together with the
//! comparator, stringifier and output sink used to judge and report named
//! cases against it. One instance covers one function signature; every call
//! to [`FunctionTest::test`] or [`FunctionTest::test_fails`] is an
//! independent case.

use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use crate::callable::{Fallible, Plain, TestFn};
use crate::failure::CaughtFailure;
use crate::outcome::Outcome;
use crate::report::ReportWriter;
use crate::stringify;

/// Default width of the dot-padded test-name column
pub const DEFAULT_LINE_LENGTH: usize = 60;

type BoxedFn<R, A> = Box<dyn Fn(A) -> Result<R, CaughtFailure>>;
type BoxedComparator<R> = Box<dyn Fn(&R, &R) -> bool>;
type BoxedStringifier<R> = Box<dyn Fn(&R) -> String>;

/// Test harness for a single function
///
/// Generic over the result type `R` and the argument tuple `A` of the
/// function under test. The function, comparator, stringifier and sink are
/// fixed at construction; only [`verbose`](Self::verbose) and
/// [`output_line_length`](Self::output_line_length) can change between
/// calls, and a change takes effect on the next call.
///
/// Taking `&mut self` on the invocation methods rules out concurrent calls
/// on one instance; testing from several threads means one harness per
/// thread.
pub struct FunctionTest<R, A> {
    function: BoxedFn<R, A>,
    comparator: BoxedComparator<R>,
    stringifier: BoxedStringifier<R>,
    sink: Box<dyn Write>,

    /// Whether mismatch details are printed after a FAILED line
    pub verbose: bool,

    /// Width of the dot-padded test-name column
    pub output_line_length: usize,
}

impl<R, A> FunctionTest<R, A> {
    /// Create a harness with explicit comparator and stringifier
    ///
    /// The function's return value is compared as-is; for functions
    /// returning `Result` use [`new_fallible`](Self::new_fallible). The
    /// sink starts as standard output and `verbose` starts as `true`.
    pub fn new<F>(
        function: F,
        comparator: impl Fn(&R, &R) -> bool + 'static,
        stringifier: impl Fn(&R) -> String + 'static,
    ) -> Self
    where
        F: TestFn<A, Plain, Output = R> + 'static,
    {
        Self {
            function: Box::new(move |args| function.call(args)),
            comparator: Box::new(comparator),
            stringifier: Box::new(stringifier),
            sink: Box::new(io::stdout()),
            verbose: true,
            output_line_length: DEFAULT_LINE_LENGTH,
        }
    }

    /// Create a harness over a `Result`-returning function
    ///
    /// `Ok` values are compared the way [`new`](Self::new) compares plain
    /// values; any `Err` is caught and reported as an invocation failure.
    /// Same defaults as [`new`](Self::new).
    pub fn new_fallible<F>(
        function: F,
        comparator: impl Fn(&R, &R) -> bool + 'static,
        stringifier: impl Fn(&R) -> String + 'static,
    ) -> Self
    where
        F: TestFn<A, Fallible, Output = R> + 'static,
    {
        Self {
            function: Box::new(move |args| function.call(args)),
            comparator: Box::new(comparator),
            stringifier: Box::new(stringifier),
            sink: Box::new(io::stdout()),
            verbose: true,
            output_line_length: DEFAULT_LINE_LENGTH,
        }
    }

    /// Create a harness without a stringifier
    ///
    /// Mismatch details would render only a fixed placeholder marker, so
    /// `verbose` starts as `false`.
    pub fn without_stringifier<F>(
        function: F,
        comparator: impl Fn(&R, &R) -> bool + 'static,
    ) -> Self
    where
        F: TestFn<A, Plain, Output = R> + 'static,
    {
        let mut harness = Self::new(function, comparator, |_: &R| {
            stringify::PLACEHOLDER.to_string()
        });
        harness.verbose = false;
        harness
    }

    /// Create a harness for simple result types
    ///
    /// The comparator is `==`, the stringifier is the `Display` impl, and
    /// `verbose` starts as `true`. For functions returning `Result` use
    /// [`simple_fallible`](Self::simple_fallible).
    pub fn simple<F>(function: F) -> Self
    where
        F: TestFn<A, Plain, Output = R> + 'static,
        R: PartialEq + std::fmt::Display + 'static,
    {
        Self::new(
            function,
            |actual: &R, expected: &R| actual == expected,
            stringify::display_string,
        )
    }

    /// Create a simple-result harness over a `Result`-returning function
    ///
    /// Same defaults as [`simple`](Self::simple), with any `Err` caught and
    /// reported as an invocation failure.
    pub fn simple_fallible<F>(function: F) -> Self
    where
        F: TestFn<A, Fallible, Output = R> + 'static,
        R: PartialEq + std::fmt::Display + 'static,
    {
        Self::new_fallible(
            function,
            |actual: &R, expected: &R| actual == expected,
            stringify::display_string,
        )
    }

    /// Replace the output sink
    #[inline]
    #[must_use]
    pub fn with_sink(mut self, sink: impl Write + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Set verbosity at construction time
    #[inline]
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set the padded column width at construction time
    #[inline]
    #[must_use]
    pub fn with_line_length(mut self, width: usize) -> Self {
        self.output_line_length = width;
        self
    }

    /// Run one named case: invoke, time, compare and report
    ///
    /// # Returns
    /// The verdict plus the value produced. When the invocation itself
    /// failed, `actual` is `R::default()` and the outcome carries the caught
    /// failure.
    ///
    /// Never panics and never returns an error: typed errors and panics from
    /// the function under test become report text, and sink write errors are
    /// discarded.
    pub fn test(&mut self, name: &str, expected: R, args: A) -> Outcome<R>
    where
        R: Default,
    {
        tracing::debug!("Running test case: {}", name);
        let mut report = ReportWriter::new(&mut self.sink);
        report.prefix(name, self.output_line_length);

        let clock = Instant::now();
        // The closure only reads the adapted function; no harness state can
        // be left inconsistent by an unwind.
        let invoked = panic::catch_unwind(AssertUnwindSafe(|| (self.function)(args)));
        let elapsed_ms = clock.elapsed().as_millis();

        let caught = match invoked {
            Ok(Ok(actual)) => {
                return if (self.comparator)(&actual, &expected) {
                    report.ok(elapsed_ms);
                    Outcome::pass(actual)
                } else {
                    report.failed(elapsed_ms);
                    if self.verbose {
                        report.mismatch(
                            &(self.stringifier)(&actual),
                            &(self.stringifier)(&expected),
                        );
                    }
                    Outcome::mismatch(actual)
                };
            }
            Ok(Err(caught)) => caught,
            Err(payload) => CaughtFailure::from_panic(payload),
        };

        tracing::warn!("Test case {} raised: {}", name, caught);
        report.exception(&caught);
        Outcome::from_caught(R::default(), caught)
    }

    /// Run one named case that passes only if the invocation fails
    ///
    /// The inverse verdict of [`test`](Self::test): any caught failure is
    /// `OK`, a produced value is `FAILED` with the value in the verbose
    /// details. Same timing, reporting and no-escape guarantees.
    pub fn test_fails(&mut self, name: &str, args: A) -> Outcome<R>
    where
        R: Default,
    {
        tracing::debug!("Running expected-failure case: {}", name);
        let mut report = ReportWriter::new(&mut self.sink);
        report.prefix(name, self.output_line_length);

        let clock = Instant::now();
        let invoked = panic::catch_unwind(AssertUnwindSafe(|| (self.function)(args)));
        let elapsed_ms = clock.elapsed().as_millis();

        match invoked {
            Ok(Ok(actual)) => {
                report.failed(elapsed_ms);
                if self.verbose {
                    report.mismatch(&(self.stringifier)(&actual), "an error");
                }
                Outcome::mismatch(actual)
            }
            Ok(Err(_)) | Err(_) => {
                report.ok(elapsed_ms);
                Outcome::pass(R::default())
            }
        }
    }
}

impl<R, A> std::fmt::Debug for FunctionTest<R, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionTest")
            .field("verbose", &self.verbose)
            .field("output_line_length", &self.output_line_length)
            .finish_non_exhaustive()
    }
}
