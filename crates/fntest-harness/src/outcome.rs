//! Per-case outcome types
//!
//! Every call to the harness produces an [`Outcome`]: the pass/fail verdict,
//! the value the function under test produced, and, for failed cases, which
//! kind of failure occurred.

use crate::failure::CaughtFailure;

/// Why a test case did not pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// The comparator rejected the actual result
    Mismatch,

    /// The function under test failed before producing a result
    Invocation(CaughtFailure),
}

/// Result of a single named test case
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<R> {
    /// Whether the case passed
    pub passed: bool,

    /// The value produced, or `R::default()` when the invocation failed
    pub actual: R,

    /// What went wrong, `None` when the case passed
    pub failure: Option<Failure>,
}

impl<R> Outcome<R> {
    pub(crate) fn pass(actual: R) -> Self {
        Self {
            passed: true,
            actual,
            failure: None,
        }
    }

    pub(crate) fn mismatch(actual: R) -> Self {
        Self {
            passed: false,
            actual,
            failure: Some(Failure::Mismatch),
        }
    }

    pub(crate) fn from_caught(actual: R, caught: CaughtFailure) -> Self {
        Self {
            passed: false,
            actual,
            failure: Some(Failure::Invocation(caught)),
        }
    }

    /// Whether the failure was a comparator mismatch
    #[inline]
    #[must_use]
    pub fn is_mismatch(&self) -> bool {
        matches!(self.failure, Some(Failure::Mismatch))
    }

    /// The caught failure, when the function under test never produced a value
    #[inline]
    #[must_use]
    pub fn caught(&self) -> Option<&CaughtFailure> {
        match &self.failure {
            Some(Failure::Invocation(caught)) => Some(caught),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_carries_actual_and_no_failure() {
        let outcome = Outcome::pass(5);
        assert!(outcome.passed);
        assert_eq!(outcome.actual, 5);
        assert!(outcome.failure.is_none());
        assert!(!outcome.is_mismatch());
        assert!(outcome.caught().is_none());
    }

    #[test]
    fn mismatch_is_distinguished() {
        let outcome = Outcome::mismatch(7);
        assert!(!outcome.passed);
        assert!(outcome.is_mismatch());
        assert!(outcome.caught().is_none());
    }

    #[test]
    fn caught_failure_is_reachable() {
        let outcome = Outcome::from_caught(0, CaughtFailure::Opaque);
        assert!(!outcome.passed);
        assert!(!outcome.is_mismatch());
        assert_eq!(outcome.caught(), Some(&CaughtFailure::Opaque));
    }
}
