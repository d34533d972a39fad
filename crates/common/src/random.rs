//! Process-wide cryptographic random source
//!
//! A [`SecureRandom`] is created once (typically at start-up), wrapped in an
//! `Arc` and handed to every engine that needs entropy. The generator is a
//! ChaCha20 stream seeded from the operating system; a `Mutex` serialises
//! access so a single handle can be shared by engines on different threads.

use core::fmt;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::sync::{Arc, Mutex, PoisonError};

/// Thread-safe cryptographically secure random byte generator
pub struct SecureRandom {
    rng: Mutex<ChaCha20Rng>,
}

impl SecureRandom {
    /// Create a generator seeded from the operating system's entropy source
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(ChaCha20Rng::from_entropy()),
        }
    }

    /// Create a deterministic generator from a fixed seed
    ///
    /// Intended for reproducible tests and benchmarks only.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            rng: Mutex::new(ChaCha20Rng::from_seed(seed)),
        }
    }

    /// Convenience constructor returning a shareable handle
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::from_entropy())
    }

    /// Fill `dest` with random bytes
    pub fn fill_bytes(&self, dest: &mut [u8]) {
        // A panic while holding the lock cannot leave the ChaCha state invalid
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.fill_bytes(dest);
    }
}

impl fmt::Debug for SecureRandom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecureRandom(ChaCha20)")
    }
}
