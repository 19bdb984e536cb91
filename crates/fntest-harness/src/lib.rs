//! FnTest - single-function test harness
//!
//! Wraps one function under test and judges named cases against it:
//! - Invokes the function with caller-supplied arguments
//! - Compares the result to an expected value via a pluggable comparator
//! - Times each invocation on the monotonic clock
//! - Reports outcomes as human-readable lines on an output sink
//!
//! # Example
//!
//! ```rust,ignore
//! use fntest_harness::{join_display, FunctionTest};
//!
//! fn triple(i: i32, j: i32) -> Vec<i32> {
//!     vec![1, i, j]
//! }
//!
//! let mut harness = FunctionTest::new(
//!     triple,
//!     |actual: &Vec<i32>, expected: &Vec<i32>| actual == expected,
//!     |value: &Vec<i32>| join_display(value, ", "),
//! );
//!
//! let outcome = harness.test("Run 1", vec![1, 13, 15], (13, 15));
//! assert!(outcome.passed);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod callable;
pub mod failure;
pub mod harness;
pub mod outcome;
mod report;
pub mod stringify;

// Re-exports for convenience
pub use callable::{Fallible, Plain, TestFn};
pub use failure::CaughtFailure;
pub use harness::{FunctionTest, DEFAULT_LINE_LENGTH};
pub use outcome::{Failure, Outcome};
pub use stringify::{display_string, join_display, PLACEHOLDER};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the harness
    pub use crate::{CaughtFailure, Failure, FunctionTest, Outcome, TestFn};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
