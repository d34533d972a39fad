//! Prime field arithmetic and the byte/integer bridge
//!
//! Field elements are plain non-negative [`BigInt`] values reduced into
//! `[0, p)`. Intermediate results of subtraction may be negative, so every
//! reduction goes through [`normalize`], which uses floored division.

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::{Error, Result};
use gostcrypt_internal::endian::{fit_be, fit_le};

/// Reduce `value` into the canonical range `[0, modulus)`
#[inline]
pub fn normalize(value: &BigInt, modulus: &BigInt) -> BigInt {
    value.mod_floor(modulus)
}

/// Multiplicative inverse modulo a prime
///
/// Computed with Fermat's little theorem as `value^(modulus - 2)`, so the
/// modulus must be prime. Zero has no inverse.
pub fn mod_inverse(value: &BigInt, modulus: &BigInt) -> Result<BigInt> {
    let reduced = normalize(value, modulus);
    if reduced.is_zero() {
        return Err(Error::Processing {
            operation: "mod_inverse",
            details: "zero has no inverse",
        });
    }
    let exponent = modulus - BigInt::from(2u8);
    Ok(reduced.modpow(&exponent, modulus))
}

/// Interpret a big-endian buffer as an unsigned integer
#[inline]
pub fn from_be_bytes(bytes: &[u8]) -> BigInt {
    BigInt::from_bytes_be(Sign::Plus, bytes)
}

/// Interpret a little-endian buffer as an unsigned integer
///
/// The top bit of the last byte carries no sign: `[0xFF]` is 255.
#[inline]
pub fn from_le_bytes(bytes: &[u8]) -> BigInt {
    BigInt::from_bytes_le(Sign::Plus, bytes)
}

/// Encode a non-negative integer as exactly `width` little-endian bytes
///
/// Values needing fewer bytes are zero-padded; values needing more lose
/// their most significant bytes.
pub fn to_fixed_width_le(value: &BigInt, width: usize) -> Vec<u8> {
    let (_, bytes) = value.to_bytes_le();
    fit_le(&bytes, width)
}

/// Encode a non-negative integer as exactly `width` big-endian bytes
///
/// Same padding and truncation rules as [`to_fixed_width_le`].
pub fn to_fixed_width_be(value: &BigInt, width: usize) -> Vec<u8> {
    let (_, bytes) = value.to_bytes_be();
    fit_be(&bytes, width)
}

/// Returns true if `1 <= value < bound`
#[inline]
pub fn in_open_range(value: &BigInt, bound: &BigInt) -> bool {
    value >= &BigInt::one() && value < bound
}
