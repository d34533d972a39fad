//! Testing utilities for the gostcrypt library
//!
//! Shared fixtures for the integration tests: seeded random sources,
//! ready-keyed engines and the reference vectors of GOST R 34.10-2012.

pub mod vectors;

use std::sync::Arc;

use gostcrypt_common::{DomainParameters, SecureRandom};
use gostcrypt_params::traditional::gost3410::{CRYPTOPRO_A, TC26_256_A, TC26_512_A};
use gostcrypt_sign::Gost3410;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A reproducible random source derived from a small integer seed
pub fn seeded_random(seed: u64) -> Arc<SecureRandom> {
    let mut expander = ChaCha8Rng::seed_from_u64(seed);
    let mut bytes = [0u8; 32];
    expander.fill_bytes(&mut bytes);
    Arc::new(SecureRandom::from_seed(bytes))
}

/// Domain parameters of the 256-bit CryptoPro-A curve
pub fn curve_256() -> DomainParameters {
    DomainParameters::from(&CRYPTOPRO_A)
}

/// Domain parameters of the 256-bit TC26 paramSet A curve (cofactor 4)
pub fn curve_256_cofactor_4() -> DomainParameters {
    DomainParameters::from(&TC26_256_A)
}

/// Domain parameters of the 512-bit TC26 paramSet A curve
pub fn curve_512() -> DomainParameters {
    DomainParameters::from(&TC26_512_A)
}

/// An engine holding a fresh key pair on `curve`
pub fn keyed_engine(curve: &DomainParameters, seed: u64) -> Gost3410 {
    match Gost3410::with_curve(seeded_random(seed), curve) {
        Ok(engine) => engine,
        Err(err) => panic!("key generation failed: {}", err),
    }
}
