//! Digest-signing traits for gostcrypt
//!
//! GOST R 34.10-2012 signs a pre-computed digest rather than a message, so
//! the trait below works on hash values whose length is fixed by the curve's
//! key size. The engine that implements it owns exactly one key pair.

use crate::Result;

/// Core trait for stateful digest-signature engines
///
/// An engine is either unkeyed, keyed (domain parameters plus a key pair)
/// or disposed. Disposal is terminal: every later call fails with
/// [`Error::UseAfterDispose`](crate::Error::UseAfterDispose).
///
/// # Security Note
///
/// Implementations must erase private key material when the key pair is
/// replaced and when the engine is disposed or dropped.
pub trait HashSignature {
    /// Domain parameter type accepted by [`generate_key`](Self::generate_key)
    type Curve;

    /// Exported key parameters (curve, public key and optional private key)
    type Parameters;

    /// Returns the name of this signature algorithm
    fn algorithm_name(&self) -> &'static str;

    /// Generate a fresh key pair on the given curve, replacing any current one
    fn generate_key(&mut self, curve: &Self::Curve) -> Result<()>;

    /// Export the curve and keys
    ///
    /// An unkeyed engine generates a key pair on its default curve first.
    fn export_parameters(&mut self, include_private: bool) -> Result<Self::Parameters>;

    /// Import previously exported or externally supplied parameters
    ///
    /// Import is all-or-nothing: on failure the current state is unchanged.
    fn import_parameters(&mut self, parameters: &Self::Parameters) -> Result<()>;

    /// Sign a digest of exactly `keySize/8` bytes
    ///
    /// An unkeyed engine generates a key pair on its default curve first.
    fn sign_hash(&mut self, hash: &[u8]) -> Result<Vec<u8>>;

    /// Verify a signature of exactly `2 * keySize/8` bytes over a digest
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the signature is valid
    /// - `Ok(false)` if it is rejected, including when no key is present
    /// - `Err(_)` only for malformed inputs (wrong lengths) or a disposed engine
    fn verify_hash(&self, hash: &[u8], signature: &[u8]) -> Result<bool>;

    /// Erase all key material and move to the terminal disposed state
    fn dispose(&mut self);
}
