//! Error types for the signature crate

use core::fmt;

/// Errors that can occur during signature operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required input was missing
    InvalidArgument(&'static str),

    /// Digest length differs from `keySize/8`
    InvalidHashSize { expected: usize, actual: usize },

    /// Signature length differs from `2 * keySize/8`
    InvalidSignatureSize { expected: usize, actual: usize },

    /// Curve parameters failed validation
    InvalidDomainParameters(String),

    /// Key material failed validation
    InvalidKey(String),

    /// The engine holds only a public key
    MissingPrivateKey,

    /// The engine was disposed before this call
    Disposed { operation: &'static str },

    /// Internal error
    Internal(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(name) => write!(f, "Missing required argument: {}", name),
            Error::InvalidHashSize { expected, actual } => {
                write!(f, "Invalid hash size: expected {}, got {}", expected, actual)
            }
            Error::InvalidSignatureSize { expected, actual } => {
                write!(
                    f,
                    "Invalid signature size: expected {}, got {}",
                    expected, actual
                )
            }
            Error::InvalidDomainParameters(msg) => write!(f, "Invalid domain parameters: {}", msg),
            Error::InvalidKey(msg) => write!(f, "Invalid key: {}", msg),
            Error::MissingPrivateKey => write!(f, "No private key is available"),
            Error::Disposed { operation } => {
                write!(f, "{}: cannot access a disposed object", operation)
            }
            Error::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// Convert from algorithms::error::Error
impl From<gostcrypt_algorithms::error::Error> for Error {
    fn from(err: gostcrypt_algorithms::error::Error) -> Self {
        use gostcrypt_algorithms::error::Error as AlgoError;

        match err {
            AlgoError::Parameter { name, reason } => {
                Error::InvalidDomainParameters(format!("{}: {}", name, reason))
            }
            AlgoError::Length {
                context,
                expected,
                actual,
            } => Error::InvalidDomainParameters(format!(
                "{}: expected at most {} bytes, got {}",
                context, expected, actual
            )),
            _ => Error::Internal(format!("Algorithm error: {}", err)),
        }
    }
}

const CONTEXT: &str = "GOST R 34.10-2012";

// Convert to api::Error
impl From<Error> for gostcrypt_api::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidArgument(name) => gostcrypt_api::Error::InvalidArgument {
                context: name,
                message: "value is required".to_string(),
            },
            Error::InvalidHashSize { expected, actual } => gostcrypt_api::Error::InvalidLength {
                context: "hash",
                expected,
                actual,
            },
            Error::InvalidSignatureSize { expected, actual } => {
                gostcrypt_api::Error::InvalidLength {
                    context: "signature",
                    expected,
                    actual,
                }
            }
            Error::InvalidDomainParameters(message) => {
                gostcrypt_api::Error::InvalidDomainParameters {
                    context: CONTEXT,
                    message,
                }
            }
            Error::InvalidKey(message) => gostcrypt_api::Error::InvalidKey {
                context: CONTEXT,
                message,
            },
            Error::MissingPrivateKey => gostcrypt_api::Error::InvalidKey {
                context: CONTEXT,
                message: "no private key is available".to_string(),
            },
            Error::Disposed { operation } => {
                gostcrypt_api::Error::UseAfterDispose { context: operation }
            }
            Error::Internal(message) => gostcrypt_api::Error::Other {
                context: CONTEXT,
                message,
            },
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
