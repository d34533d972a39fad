//! Elliptic curve domain parameters as supplied by external collaborators
//!
//! Curve descriptions arrive from an ASN.1 decoder or a table of
//! standardised curves as big-endian byte buffers. This module only holds
//! them; numeric validation lives in `gostcrypt-algorithms`.

use gostcrypt_params::traditional::gost3410::GostCurve;
use zeroize::{Zeroize, ZeroizeOnDrop};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Point on an elliptic curve in affine coordinates
///
/// Both coordinates are big-endian byte buffers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EncodedPoint {
    pub x: Vec<u8>,
    pub y: Vec<u8>,
}

impl EncodedPoint {
    /// Create a new affine point (x, y)
    pub fn new(x: Vec<u8>, y: Vec<u8>) -> Self {
        Self { x, y }
    }

    /// Create a point from coordinate slices
    pub fn from_slices(x: &[u8], y: &[u8]) -> Self {
        Self {
            x: x.to_vec(),
            y: y.to_vec(),
        }
    }

    /// Returns true if either coordinate buffer is missing
    pub fn is_empty(&self) -> bool {
        self.x.is_empty() || self.y.is_empty()
    }
}

/// Elliptic curve parameters in short Weierstrass form: y^2 = x^3 + ax + b
///
/// Every integer is a big-endian byte buffer. The length of `prime`
/// fixes the key size: `key_size() == 8 * prime.len()`.
///
/// `Clone` produces an independent deep copy, so an engine that clones
/// imported parameters never shares buffers with its caller. All buffers
/// are zeroed when the value is dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DomainParameters {
    /// The prime field modulus p
    pub prime: Vec<u8>,

    /// The 'a' coefficient
    pub a: Vec<u8>,

    /// The 'b' coefficient
    pub b: Vec<u8>,

    /// The order of the curve (number of points)
    pub order: Vec<u8>,

    /// The cofactor
    pub cofactor: Vec<u8>,

    /// Generator point
    pub generator: EncodedPoint,

    /// Optional generation seed, carried but never interpreted
    pub seed: Option<Vec<u8>>,
}

impl DomainParameters {
    /// Key size in bits, derived from the length of the prime's encoding
    pub fn key_size(&self) -> usize {
        self.prime.len() * 8
    }

    /// Size in bytes of one field element, private key or signature half
    pub fn element_size(&self) -> usize {
        self.prime.len()
    }
}

impl<const N: usize> From<&GostCurve<N>> for DomainParameters {
    fn from(curve: &GostCurve<N>) -> Self {
        // Cofactor as the shortest big-endian encoding
        let h = curve.h.to_be_bytes();
        let skip = h.iter().take_while(|&&b| b == 0).count().min(h.len() - 1);
        Self {
            prime: curve.p.to_vec(),
            a: curve.a.to_vec(),
            b: curve.b.to_vec(),
            order: curve.q.to_vec(),
            cofactor: h[skip..].to_vec(),
            generator: EncodedPoint::from_slices(&curve.g_x, &curve.g_y),
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gostcrypt_params::traditional::gost3410::{CRYPTOPRO_A, TC26_512_A};

    fn sample() -> DomainParameters {
        DomainParameters {
            prime: vec![0xFF; 32],
            a: vec![0x07],
            b: vec![0x01, 0x02],
            order: vec![0xFE; 32],
            cofactor: vec![0x01],
            generator: EncodedPoint::new(vec![0x02], vec![0x03]),
            seed: Some(vec![0xAA; 8]),
        }
    }

    #[test]
    fn test_key_size_follows_prime_length() {
        let params = sample();
        assert_eq!(params.key_size(), 256);
        assert_eq!(params.element_size(), 32);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = sample();
        let mut copy = original.clone();
        copy.prime[0] = 0x00;
        copy.generator.x[0] = 0x09;
        assert_eq!(original.prime[0], 0xFF);
        assert_eq!(original.generator.x[0], 0x02);
    }

    #[test]
    fn test_zeroize_clears_every_buffer() {
        let mut params = sample();
        params.zeroize();
        assert!(params.prime.is_empty());
        assert!(params.a.is_empty());
        assert!(params.order.is_empty());
        assert!(params.cofactor.is_empty());
        assert!(params.generator.is_empty());
        assert!(params.seed.is_none());
    }

    #[test]
    fn test_from_standard_curve() {
        let params = DomainParameters::from(&CRYPTOPRO_A);
        assert_eq!(params.key_size(), 256);
        assert_eq!(params.cofactor, vec![0x01]);
        assert_eq!(params.generator.x.len(), 32);
        assert_eq!(params.generator.x[31], 0x01);

        let params = DomainParameters::from(&TC26_512_A);
        assert_eq!(params.key_size(), 512);
        assert_eq!(params.generator.x[63], 0x03);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let params = sample();
        let json = serde_json::to_string(&params).unwrap();
        let back: DomainParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(params, back);
    }
}
