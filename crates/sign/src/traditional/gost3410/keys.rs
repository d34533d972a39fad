//! Key material held by a GOST R 34.10-2012 engine

use log::trace;
use num_bigint::BigInt;
use num_traits::{One, Zero};
use zeroize::Zeroize;

use crate::error::{Error, Result};
use gostcrypt_algorithms::ec::gost::field::{
    from_be_bytes, from_le_bytes, normalize, to_fixed_width_be,
};
use gostcrypt_algorithms::{AffinePoint, Curve};
use gostcrypt_common::{DomainParameters, EncodedPoint, SecretVec, SecureRandom};
use gostcrypt_internal::endian::significant_len_be;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Exported curve and key pair
///
/// Coordinates and the private key are fixed-width big-endian buffers of
/// `keySize/8` bytes, the same convention as the domain parameters.
/// At least one of `public_key` and `private_key` must be present when
/// importing; a missing public key is derived from the private key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GostParameters {
    /// Domain parameters of the curve
    pub curve: DomainParameters,

    /// Public key point Q = d*G
    pub public_key: Option<EncodedPoint>,

    /// Private scalar d, never serialized
    #[cfg_attr(feature = "serde", serde(skip))]
    pub private_key: Option<SecretVec>,
}

/// A validated curve with its key pair
///
/// The private key is optional: an engine that imported only a public key
/// can verify but not sign.
#[derive(Debug)]
pub(crate) struct KeyMaterial {
    pub(crate) curve: Curve,
    pub(crate) public_key: AffinePoint,
    pub(crate) private_key: Option<SecretVec>,
}

impl KeyMaterial {
    /// Generate a fresh key pair on a validated curve
    pub(crate) fn generate(curve: Curve, rng: &SecureRandom) -> Result<Self> {
        let d = random_scalar(rng, &curve, "private key");
        let public_key = curve.mul_generator(&d)?;
        let private_key = SecretVec::new(to_fixed_width_be(&d, curve.element_size()));
        Ok(Self {
            curve,
            public_key,
            private_key: Some(private_key),
        })
    }

    /// Validate imported parameters and build the key material they describe
    pub(crate) fn from_parameters(parameters: &GostParameters) -> Result<Self> {
        if parameters.public_key.is_none() && parameters.private_key.is_none() {
            return Err(Error::InvalidArgument("public or private key"));
        }

        let curve = Curve::from_parameters(&parameters.curve)?;

        let d = match &parameters.private_key {
            Some(bytes) => Some(parse_private_key(&curve, bytes.as_slice())?),
            None => None,
        };

        let public_key = match (&parameters.public_key, &d) {
            (Some(encoded), _) => {
                let point = curve.decode_point(encoded).map_err(invalid_key)?;
                curve.validate_public_point(&point).map_err(invalid_key)?;
                if let Some(d) = &d {
                    if curve.mul_generator(d)? != point {
                        return Err(Error::InvalidKey(
                            "private key does not match public key".to_string(),
                        ));
                    }
                }
                point
            }
            (None, Some(d)) => curve.mul_generator(d)?,
            (None, None) => return Err(Error::InvalidArgument("public or private key")),
        };

        let private_key = d.map(|d| SecretVec::new(to_fixed_width_be(&d, curve.element_size())));
        Ok(Self {
            curve,
            public_key,
            private_key,
        })
    }

    /// Export the curve, the public key and optionally the private key
    pub(crate) fn export(&self, include_private: bool) -> Result<GostParameters> {
        let private_key = if include_private {
            Some(self.private_key.clone().ok_or(Error::MissingPrivateKey)?)
        } else {
            None
        };
        Ok(GostParameters {
            curve: self.curve.parameters().clone(),
            public_key: Some(self.curve.encode_point(&self.public_key)),
            private_key,
        })
    }

    /// The private scalar d
    pub(crate) fn private_scalar(&self) -> Result<BigInt> {
        self.private_key
            .as_ref()
            .map(|d| from_be_bytes(d.as_slice()))
            .ok_or(Error::MissingPrivateKey)
    }
}

fn invalid_key(err: gostcrypt_algorithms::Error) -> Error {
    Error::InvalidKey(err.to_string())
}

fn parse_private_key(curve: &Curve, bytes: &[u8]) -> Result<BigInt> {
    if significant_len_be(bytes) > curve.element_size() {
        return Err(Error::InvalidKey(format!(
            "private key is longer than {} bytes",
            curve.element_size()
        )));
    }
    let d = from_be_bytes(bytes);
    if !curve.is_valid_scalar(&d) {
        return Err(Error::InvalidKey(
            "private key must be in [1, q)".to_string(),
        ));
    }
    Ok(d)
}

/// Draw a scalar uniformly from `[1, q)` by rejection sampling
///
/// Each attempt reads `keySize/8` random bytes as an unsigned little-endian
/// integer and discards it when it is zero or not below the subgroup order.
pub(crate) fn random_scalar(rng: &SecureRandom, curve: &Curve, label: &'static str) -> BigInt {
    let mut buf = vec![0u8; curve.element_size()];
    loop {
        rng.fill_bytes(&mut buf);
        let k = from_le_bytes(&buf);
        if curve.is_valid_scalar(&k) {
            buf.zeroize();
            return k;
        }
        trace!("{} out of range, resampling", label);
    }
}

/// Reduce a digest to the scalar e, mapping zero to one
pub(crate) fn digest_scalar(hash: &[u8], q: &BigInt) -> BigInt {
    let e = normalize(&from_le_bytes(hash), q);
    if e.is_zero() {
        BigInt::one()
    } else {
        e
    }
}
