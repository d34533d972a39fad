//! Digital Signature Schemes
//!
//! This crate implements the GOST R 34.10-2012 signature engine on top of
//! the curve arithmetic in `gostcrypt-algorithms`.
//!
//! ```no_run
//! use gostcrypt_common::SecureRandom;
//! use gostcrypt_sign::Gost3410;
//!
//! let mut engine = Gost3410::new(SecureRandom::shared());
//! let digest = [0x5Au8; 32];
//! let signature = engine.sign_hash(&digest).unwrap();
//! assert!(engine.verify_hash(&digest, &signature).unwrap());
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod traditional;

pub use error::{Error, Result};

// Re-exports from traditional schemes
pub use traditional::gost3410::{Gost3410, GostParameters};
