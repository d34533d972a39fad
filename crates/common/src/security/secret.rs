//! Secret data types with guaranteed zeroization
//!
//! Private scalars are stored as fixed-width byte buffers wrapped in
//! [`SecretVec`], which wipes its contents on drop and never prints them.

use core::fmt;
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Variable-size secret vector that guarantees zeroization
///
/// This type provides:
/// - Automatic zeroization on drop
/// - A `Debug` implementation that hides the bytes
/// - In-place wiping through [`Zeroize::zeroize`] or [`SecretVec::wipe`]
/// - Constant-time equality through [`ConstantTimeEq`]
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretVec {
    data: Vec<u8>,
}

impl SecretVec {
    /// Create a new secret vector with the given data
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Create a secret vector from a slice
    pub fn from_slice(slice: &[u8]) -> Self {
        Self {
            data: slice.to_vec(),
        }
    }

    /// Get the length of the vector
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the vector is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a reference to the inner data
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Overwrite every byte with zero while keeping the length
    ///
    /// Unlike [`Zeroize::zeroize`], the buffer stays observable afterwards,
    /// which is what key erasure checks inspect.
    pub fn wipe(&mut self) {
        self.data.as_mut_slice().zeroize();
    }
}

impl AsRef<[u8]> for SecretVec {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<Vec<u8>> for SecretVec {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl ConstantTimeEq for SecretVec {
    /// Buffers of different lengths are unequal; contents are compared in
    /// constant time
    fn ct_eq(&self, other: &Self) -> Choice {
        self.data.as_slice().ct_eq(other.data.as_slice())
    }
}

impl PartialEq for SecretVec {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for SecretVec {}

impl fmt::Debug for SecretVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretVec(len={}, [REDACTED])", self.data.len())
    }
}
