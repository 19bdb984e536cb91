//! Adapters from plain and fallible functions to the harness seam
//!
//! Rust has no variadic generics, so a harness fixes its argument list as a
//! tuple type and callers supply each case's arguments as one tuple.
//! [`TestFn`] adapts functions and closures of arity 0 through 8 to a single
//! tuple-taking call. Two impl families exist per arity: functions returning
//! a plain value, and functions returning `Result` whose `Err` is classified
//! as a caught failure. A `Result`-returning function fits both families
//! (the plain one treats the whole `Result` as the value), so the marker
//! parameter cannot be inferred: each harness constructor pins the marker
//! for its family, and users never name one.

use crate::failure::CaughtFailure;

/// A function under test, adapted to tuple-shaped arguments
pub trait TestFn<A, M> {
    /// Value produced on success
    type Output;

    /// Invoke with one argument tuple
    fn call(&self, args: A) -> Result<Self::Output, CaughtFailure>;
}

/// Marker for functions returning a plain value
#[derive(Debug, Clone, Copy)]
pub struct Plain;

/// Marker for functions returning `Result`
#[derive(Debug, Clone, Copy)]
pub struct Fallible;

macro_rules! impl_test_fn {
    ($($arg:ident),*) => {
        impl<F, R, $($arg),*> TestFn<($($arg,)*), Plain> for F
        where
            F: Fn($($arg),*) -> R,
        {
            type Output = R;

            #[allow(non_snake_case)]
            fn call(&self, ($($arg,)*): ($($arg,)*)) -> Result<R, CaughtFailure> {
                Ok(self($($arg),*))
            }
        }

        impl<F, R, E, $($arg),*> TestFn<($($arg,)*), Fallible> for F
        where
            F: Fn($($arg),*) -> Result<R, E>,
            E: std::error::Error,
        {
            type Output = R;

            #[allow(non_snake_case)]
            fn call(&self, ($($arg,)*): ($($arg,)*)) -> Result<R, CaughtFailure> {
                self($($arg),*).map_err(|error| CaughtFailure::from_error(&error))
            }
        }
    };
}

impl_test_fn!();
impl_test_fn!(A1);
impl_test_fn!(A1, A2);
impl_test_fn!(A1, A2, A3);
impl_test_fn!(A1, A2, A3, A4);
impl_test_fn!(A1, A2, A3, A4, A5);
impl_test_fn!(A1, A2, A3, A4, A5, A6);
impl_test_fn!(A1, A2, A3, A4, A5, A6, A7);
impl_test_fn!(A1, A2, A3, A4, A5, A6, A7, A8);
