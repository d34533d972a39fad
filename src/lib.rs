//! # gostcrypt
//!
//! GOST R 34.10-2012 elliptic-curve digital signatures over runtime-supplied
//! domain parameters.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! gostcrypt = "0.3"
//! ```
//!
//! ```no_run
//! use gostcrypt::prelude::*;
//!
//! let rng = SecureRandom::shared();
//! let mut engine = Gost3410::with_default_curve(rng, DomainParameters::from(&TC26_512_A));
//!
//! // The digest comes from an external hash function
//! let digest = [0x5Au8; 64];
//! let signature = engine.sign_hash(&digest)?;
//! assert!(engine.verify_hash(&digest, &signature)?);
//!
//! // Hand the public key to another engine
//! let public = engine.export_parameters(false)?;
//! let mut verifier = Gost3410::new(SecureRandom::shared());
//! verifier.import_parameters(&public)?;
//! assert!(verifier.verify_hash(&digest, &signature)?);
//! # Ok::<(), gostcrypt::sign::Error>(())
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for domain parameters, points and
//!   exported public parameters
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`gostcrypt-api`]: Public error type and the `HashSignature` trait
//! - [`gostcrypt-common`]: Domain parameter holders, secret buffers, random source
//! - [`gostcrypt-params`]: Standard curve constants
//! - [`gostcrypt-algorithms`]: Field and curve arithmetic
//! - [`gostcrypt-sign`]: The signature engine

#![forbid(unsafe_code)]

// Core re-exports
pub use gostcrypt_algorithms as algorithms;
pub use gostcrypt_api as api;
pub use gostcrypt_common as common;
pub use gostcrypt_internal as internal;
pub use gostcrypt_params as params;
pub use gostcrypt_sign as sign;

/// Common imports for gostcrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::HashSignature;

    // Re-export key material and the random source
    pub use crate::common::{DomainParameters, EncodedPoint, SecretVec, SecureRandom};

    // Re-export the signature engine
    pub use crate::sign::{Gost3410, GostParameters};

    // Re-export standard curves
    pub use crate::params::traditional::gost3410::{
        CRYPTOPRO_A, GOST_2012_EXAMPLE_256, GOST_2012_EXAMPLE_512, TC26_256_A, TC26_512_A,
    };
}
