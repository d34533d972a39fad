//! Arithmetic core of the gostcrypt library
//!
//! This crate provides the modular byte/integer bridge, affine point
//! arithmetic and validated curve parameters that the GOST R 34.10-2012
//! signature engine in `gostcrypt-sign` is built on.
//!
//! # Security Note
//!
//! Arithmetic uses `num-bigint` and branches on secret data. It makes no
//! attempt at constant-time execution.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Elliptic curve arithmetic
pub mod ec;
pub use ec::gost::{field, AffinePoint, Curve};
