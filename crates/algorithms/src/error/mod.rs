//! Error handling for elliptic-curve primitives

use std::borrow::Cow;
use std::fmt;

/// The error type for elliptic-curve primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// An operation would have produced the point at infinity
    ///
    /// Affine coordinates cannot represent the identity, so adding a point
    /// to its negation or doubling a point of order two is reported here.
    PointAtInfinity {
        /// Operation that hit the identity
        operation: &'static str,
    },

    /// A scalar was outside the range an operation accepts
    ScalarOutOfRange {
        /// Context where the scalar was rejected
        context: &'static str,
    },

    /// Processing error during a cryptographic operation
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<R: Into<Cow<'static, str>>>(name: &'static str, reason: R) -> Self {
        Error::Parameter {
            name,
            reason: reason.into(),
        }
    }

    /// Returns true for arithmetic dead ends (identity or zero scalar)
    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            Error::PointAtInfinity { .. } | Error::ScalarOutOfRange { .. }
        )
    }
}

/// Result type for elliptic-curve primitive operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::PointAtInfinity { operation } => {
                write!(f, "{} produced the point at infinity", operation)
            }
            Error::ScalarOutOfRange { context } => {
                write!(f, "Scalar out of range in {}", context)
            }
            Error::Processing { operation, details } => {
                write!(f, "Processing error in {}: {}", operation, details)
            }
        }
    }
}

impl std::error::Error for Error {}

// Include the validation submodule
pub mod validate;
