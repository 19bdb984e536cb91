//! Classification of failures caught at the invocation boundary
//!
//! Provides [`CaughtFailure`] for everything the harness can catch instead of
//! letting it escape a test call:
//! - Typed errors returned by fallible functions under test
//! - Panics carrying a readable text payload
//! - Panics carrying anything else

use std::any::Any;

/// A failure caught while invoking the function under test
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaughtFailure {
    /// The function returned a typed error
    #[error("{category}: {message}")]
    Error {
        /// Type name of the error
        category: &'static str,
        /// Display text of the error
        message: String,
    },

    /// The function panicked with a readable payload
    #[error("panic: {message}")]
    Panic {
        /// Panic payload text
        message: String,
    },

    /// The function panicked with a payload carrying no readable text
    #[error("unknown")]
    Opaque,
}

impl CaughtFailure {
    /// Build from a typed error returned by the function under test
    #[inline]
    #[must_use]
    pub fn from_error<E: std::error::Error>(error: &E) -> Self {
        Self::Error {
            category: std::any::type_name::<E>(),
            message: error.to_string(),
        }
    }

    /// Build from a panic payload recovered by `catch_unwind`
    ///
    /// `&str` and `String` payloads (everything the `panic!` macro produces)
    /// keep their text; any other payload is opaque.
    #[must_use]
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        if let Some(message) = payload.downcast_ref::<&str>() {
            Self::Panic {
                message: (*message).to_string(),
            }
        } else if let Some(message) = payload.downcast_ref::<String>() {
            Self::Panic {
                message: message.clone(),
            }
        } else {
            Self::Opaque
        }
    }

    /// Category token for the report, `None` when the payload was opaque
    #[inline]
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        match self {
            Self::Error { category, .. } => Some(category),
            Self::Panic { .. } => Some("panic"),
            Self::Opaque => None,
        }
    }

    /// Message text for the report, `None` when the payload was opaque
    #[inline]
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Error { message, .. } | Self::Panic { message } => Some(message),
            Self::Opaque => None,
        }
    }
}
