//! Error type definitions for signature operations

use thiserror::Error;

/// Primary error type for the public gostcrypt API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required input was missing or empty
    #[error("Invalid argument: {context}: {message}")]
    InvalidArgument {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    ///
    /// Raised for digests whose length differs from `keySize/8` and for
    /// signatures whose length differs from `2 * keySize/8`.
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Curve parameters failed validation
    #[error("Invalid domain parameters: {context}: {message}")]
    InvalidDomainParameters {
        context: &'static str,
        message: String,
    },

    /// Invalid key error
    #[error("Invalid key: {context}: {message}")]
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// The object was used after it had been disposed
    #[error("{context}: cannot access a disposed object")]
    UseAfterDispose { context: &'static str },

    /// Other error
    #[error("{context}: {message}")]
    Other {
        context: &'static str,
        message: String,
    },
}

/// Result type for signature operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidArgument { message, .. } => Self::InvalidArgument { context, message },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidDomainParameters { message, .. } => {
                Self::InvalidDomainParameters { context, message }
            }
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::UseAfterDispose { .. } => Self::UseAfterDispose { context },
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }

    /// Returns `true` for length mismatches of digests or signatures
    pub fn is_invalid_length(&self) -> bool {
        matches!(self, Self::InvalidLength { .. })
    }

    /// Returns `true` if the error was raised by a disposed object
    pub fn is_use_after_dispose(&self) -> bool {
        matches!(self, Self::UseAfterDispose { .. })
    }
}
