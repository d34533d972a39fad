//! GOST R 34.10-2012 digital signatures
//!
//! This implementation follows GOST R 34.10-2012 (RFC 7091) for the 256-bit
//! and 512-bit key sizes. The engine signs pre-computed digests; hashing
//! the message is the caller's job.
//!
//! Byte conventions:
//! - digests and both signature halves are unsigned little-endian integers
//! - a signature is `s || r`, each half `keySize/8` bytes
//! - domain parameters and exported keys are big-endian
//!
//! An engine owns at most one key pair and moves through three states:
//! unkeyed, keyed and disposed. Signing and exporting key an unkeyed engine
//! on its default curve first; verification never does.

mod keys;

pub use keys::GostParameters;

use std::fmt;
use std::sync::Arc;

use log::{debug, trace};
use num_bigint::BigInt;
use num_traits::{One, Zero};

use self::keys::{digest_scalar, random_scalar, KeyMaterial};
use crate::error::{Error, Result};
use gostcrypt_algorithms::ec::gost::field::{from_le_bytes, normalize, to_fixed_width_le};
use gostcrypt_algorithms::{AffinePoint, Curve};
use gostcrypt_api::{HashSignature, Result as ApiResult};
use gostcrypt_common::{DomainParameters, SecureRandom};
use gostcrypt_internal::constant_time::ct_eq;
use gostcrypt_params::traditional::gost3410::CRYPTOPRO_A;

/// Lifecycle of an engine
enum EngineState {
    /// No key yet; the next sign or export generates one on the default curve
    Uninitialized,
    /// Domain parameters and a key pair are present
    Keyed(Box<KeyMaterial>),
    /// Terminal; key material has been erased
    Disposed,
}

/// GOST R 34.10-2012 signature engine
///
/// Holds one key pair and a handle to the shared random source. The engine
/// is not internally synchronised: mutating calls take `&mut self`.
///
/// # Security Note
///
/// The private key is wiped in place when a new key pair replaces it and
/// when the engine is disposed or dropped. Scalar arithmetic is not
/// constant time.
pub struct Gost3410 {
    rng: Arc<SecureRandom>,
    default_curve: DomainParameters,
    state: EngineState,
    #[cfg(test)]
    erased_keys: Vec<Vec<u8>>,
}

impl Gost3410 {
    /// Create an unkeyed engine whose default curve is CryptoPro-A (256-bit)
    pub fn new(rng: Arc<SecureRandom>) -> Self {
        Self::with_default_curve(rng, DomainParameters::from(&CRYPTOPRO_A))
    }

    /// Create an unkeyed engine with a custom default curve
    ///
    /// The curve is validated when it is first used for key generation.
    pub fn with_default_curve(rng: Arc<SecureRandom>, default_curve: DomainParameters) -> Self {
        Self {
            rng,
            default_curve,
            state: EngineState::Uninitialized,
            #[cfg(test)]
            erased_keys: Vec::new(),
        }
    }

    /// Create an engine holding a fresh key pair on `curve`
    pub fn with_curve(rng: Arc<SecureRandom>, curve: &DomainParameters) -> Result<Self> {
        let mut engine = Self::with_default_curve(rng, curve.clone());
        engine.generate_key(curve)?;
        Ok(engine)
    }

    /// Returns true if the engine holds a key pair
    pub fn is_keyed(&self) -> bool {
        matches!(self.state, EngineState::Keyed(_))
    }

    /// Returns true once the engine has been disposed
    pub fn is_disposed(&self) -> bool {
        matches!(self.state, EngineState::Disposed)
    }

    /// Key size in bits
    ///
    /// An unkeyed engine reports the size of its default curve.
    pub fn key_size(&self) -> Result<usize> {
        match &self.state {
            EngineState::Keyed(keys) => Ok(keys.curve.key_size()),
            EngineState::Uninitialized => Ok(self.default_curve.key_size()),
            EngineState::Disposed => Err(Error::Disposed {
                operation: "key_size",
            }),
        }
    }

    /// Signature length in bytes (`2 * keySize/8`)
    pub fn signature_size(&self) -> Result<usize> {
        Ok(self.key_size()? / 4)
    }

    /// Generate a key pair on `curve`, replacing and erasing any current one
    pub fn generate_key(&mut self, curve: &DomainParameters) -> Result<()> {
        self.check_live("generate_key")?;
        let curve = Curve::from_parameters(curve)?;
        let keys = KeyMaterial::generate(curve, &self.rng)?;
        debug!("generated {}-bit key pair", keys.curve.key_size());
        self.replace_keys(keys);
        Ok(())
    }

    /// Export the curve, the public key and, if requested, the private key
    pub fn export_parameters(&mut self, include_private: bool) -> Result<GostParameters> {
        let keys = self.ensure_keyed("export_parameters")?;
        let parameters = keys.export(include_private)?;
        debug!(
            "exported {}-bit parameters (private key included: {})",
            parameters.curve.key_size(),
            include_private
        );
        Ok(parameters)
    }

    /// Import a curve and key pair
    ///
    /// The curve and keys are validated in full before anything changes; on
    /// failure the engine keeps its previous state.
    pub fn import_parameters(&mut self, parameters: &GostParameters) -> Result<()> {
        self.check_live("import_parameters")?;
        let keys = KeyMaterial::from_parameters(parameters)?;
        debug!(
            "imported {}-bit parameters (private key present: {})",
            keys.curve.key_size(),
            keys.private_key.is_some()
        );
        self.replace_keys(keys);
        Ok(())
    }

    /// Sign a digest of exactly `keySize/8` bytes
    ///
    /// Returns `s || r`, each half `keySize/8` bytes little-endian.
    pub fn sign_hash(&mut self, hash: &[u8]) -> Result<Vec<u8>> {
        let rng = Arc::clone(&self.rng);
        self.sign_digest(hash, |curve| random_scalar(&rng, curve, "nonce"))
    }

    /// Signing with the source of ephemeral scalars supplied by the caller
    ///
    /// `next_nonce` must return values in `[1, q)`; it is called again
    /// whenever `r` or `s` comes out zero.
    fn sign_digest<F>(&mut self, hash: &[u8], mut next_nonce: F) -> Result<Vec<u8>>
    where
        F: FnMut(&Curve) -> BigInt,
    {
        let keys = self.ensure_keyed("sign_hash")?;
        let curve = &keys.curve;
        let width = curve.element_size();
        if hash.len() != width {
            return Err(Error::InvalidHashSize {
                expected: width,
                actual: hash.len(),
            });
        }

        let d = keys.private_scalar()?;
        let q = curve.subgroup_order();
        let e = digest_scalar(hash, q);

        loop {
            let k = next_nonce(curve);
            let r = normalize(&curve.mul_generator(&k)?.x, q);
            if r.is_zero() {
                trace!("r is zero, drawing a new nonce");
                continue;
            }

            let s = normalize(&(&r * &d + &k * &e), q);
            if s.is_zero() {
                trace!("s is zero, drawing a new nonce");
                continue;
            }

            let mut signature = to_fixed_width_le(&s, width);
            signature.extend_from_slice(&to_fixed_width_le(&r, width));
            return Ok(signature);
        }
    }

    /// Verify a signature over a digest
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the signature is valid
    /// - `Ok(false)` if it is rejected, or if the engine holds no key
    /// - `Err(_)` for wrong digest or signature lengths, or a disposed engine
    pub fn verify_hash(&self, hash: &[u8], signature: &[u8]) -> Result<bool> {
        let keys = match &self.state {
            EngineState::Keyed(keys) => keys,
            EngineState::Uninitialized => {
                debug!("verification rejected: engine holds no key");
                return Ok(false);
            }
            EngineState::Disposed => {
                return Err(Error::Disposed {
                    operation: "verify_hash",
                })
            }
        };

        let curve = &keys.curve;
        let width = curve.element_size();
        if hash.len() != width {
            return Err(Error::InvalidHashSize {
                expected: width,
                actual: hash.len(),
            });
        }
        if signature.len() != 2 * width {
            return Err(Error::InvalidSignatureSize {
                expected: 2 * width,
                actual: signature.len(),
            });
        }

        let q = curve.subgroup_order();
        let s = from_le_bytes(&signature[..width]);
        let r = from_le_bytes(&signature[width..]);
        let one = BigInt::one();
        if s < one || &s > q || r < one || &r > q {
            debug!("verification rejected: signature component out of range");
            return Ok(false);
        }

        let e = digest_scalar(hash, q);
        let v = e.modpow(&(q - 2u32), q);
        let z1 = normalize(&(&s * &v), q);
        let z2 = normalize(&((q - &r) * &v), q);

        match combine(curve, &keys.public_key, &z1, &z2) {
            Ok(c) => {
                let x = normalize(&c.x, q);
                Ok(ct_eq(
                    to_fixed_width_le(&x, width),
                    to_fixed_width_le(&r, width),
                ))
            }
            Err(err) if err.is_arithmetic() => {
                debug!("verification rejected: {}", err);
                Ok(false)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Erase the key pair and move to the terminal disposed state
    ///
    /// Calling this more than once has no further effect.
    pub fn dispose(&mut self) {
        if self.is_disposed() {
            return;
        }
        self.erase_keys();
        self.state = EngineState::Disposed;
        debug!("engine disposed");
    }

    fn check_live(&self, operation: &'static str) -> Result<()> {
        if self.is_disposed() {
            return Err(Error::Disposed { operation });
        }
        Ok(())
    }

    /// Move an unkeyed engine to the keyed state using the default curve
    fn ensure_keyed(&mut self, operation: &'static str) -> Result<&KeyMaterial> {
        if let EngineState::Uninitialized = self.state {
            debug!("no key present, generating one on the default curve");
            let curve = self.default_curve.clone();
            self.generate_key(&curve)?;
        }
        match &self.state {
            EngineState::Keyed(keys) => Ok(keys),
            EngineState::Disposed => Err(Error::Disposed { operation }),
            EngineState::Uninitialized => Err(Error::Internal(
                "key generation left the engine unkeyed".to_string(),
            )),
        }
    }

    fn replace_keys(&mut self, keys: KeyMaterial) {
        self.erase_keys();
        self.state = EngineState::Keyed(Box::new(keys));
    }

    /// Wipe the current private key in place
    fn erase_keys(&mut self) {
        if let EngineState::Keyed(keys) = &mut self.state {
            if let Some(private_key) = keys.private_key.as_mut() {
                private_key.wipe();
                #[cfg(test)]
                self.erased_keys.push(private_key.as_slice().to_vec());
            }
        }
    }

    /// Private key buffers as they looked right after being wiped
    #[cfg(test)]
    pub(crate) fn erased_keys(&self) -> &[Vec<u8>] {
        &self.erased_keys
    }
}

/// `z1 * G + z2 * Q`
fn combine(
    curve: &Curve,
    public_key: &AffinePoint,
    z1: &BigInt,
    z2: &BigInt,
) -> gostcrypt_algorithms::Result<AffinePoint> {
    let lhs = curve.mul_generator(z1)?;
    let rhs = curve.mul(public_key, z2)?;
    curve.add_points(&lhs, &rhs)
}

impl Drop for Gost3410 {
    fn drop(&mut self) {
        self.erase_keys();
    }
}

impl fmt::Debug for Gost3410 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &self.state {
            EngineState::Uninitialized => "uninitialized",
            EngineState::Keyed(_) => "keyed",
            EngineState::Disposed => "disposed",
        };
        f.debug_struct("Gost3410")
            .field("state", &state)
            .field("key_size", &self.key_size().ok())
            .finish()
    }
}

impl HashSignature for Gost3410 {
    type Curve = DomainParameters;
    type Parameters = GostParameters;

    fn algorithm_name(&self) -> &'static str {
        "GOST R 34.10-2012"
    }

    fn generate_key(&mut self, curve: &Self::Curve) -> ApiResult<()> {
        Gost3410::generate_key(self, curve).map_err(Into::into)
    }

    fn export_parameters(&mut self, include_private: bool) -> ApiResult<Self::Parameters> {
        Gost3410::export_parameters(self, include_private).map_err(Into::into)
    }

    fn import_parameters(&mut self, parameters: &Self::Parameters) -> ApiResult<()> {
        Gost3410::import_parameters(self, parameters).map_err(Into::into)
    }

    fn sign_hash(&mut self, hash: &[u8]) -> ApiResult<Vec<u8>> {
        Gost3410::sign_hash(self, hash).map_err(Into::into)
    }

    fn verify_hash(&self, hash: &[u8], signature: &[u8]) -> ApiResult<bool> {
        Gost3410::verify_hash(self, hash, signature).map_err(Into::into)
    }

    fn dispose(&mut self) {
        Gost3410::dispose(self)
    }
}
