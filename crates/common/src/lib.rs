//! Common implementations and shared functionality for the gostcrypt library
//!
//! This crate holds the data every other component passes around: curve
//! domain parameters as byte buffers, zeroizing containers for private key
//! material and the shared random source.

#![forbid(unsafe_code)]

pub mod domain;
pub mod random;
pub mod security;

pub use domain::{DomainParameters, EncodedPoint};
pub use random::SecureRandom;
pub use security::SecretVec;
