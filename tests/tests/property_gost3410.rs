//! Property-based tests for GOST R 34.10-2012 signatures

use gostcrypt_sign::{Error, Gost3410};
use gostcrypt_tests::{curve_256, curve_512, keyed_engine};
use proptest::prelude::*;

/// Flip one bit of a buffer
fn flip(bytes: &[u8], bit: usize) -> Vec<u8> {
    let mut out = bytes.to_vec();
    out[bit / 8] ^= 1 << (bit % 8);
    out
}

fn signer_256(seed: u64) -> Gost3410 {
    keyed_engine(&curve_256(), seed)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn round_trip_256(seed in any::<u64>(), digest in any::<[u8; 32]>()) {
        let mut engine = signer_256(seed);
        let signature = engine.sign_hash(&digest).unwrap();
        prop_assert_eq!(signature.len(), 64);
        prop_assert!(engine.verify_hash(&digest, &signature).unwrap());
    }

    #[test]
    fn single_bit_tamper_is_rejected(
        seed in any::<u64>(),
        digest in any::<[u8; 32]>(),
        bit in 0usize..512,
    ) {
        let mut engine = signer_256(seed);
        let signature = engine.sign_hash(&digest).unwrap();
        let tampered = flip(&signature, bit);
        prop_assert!(!engine.verify_hash(&digest, &tampered).unwrap());
    }

    #[test]
    fn digest_tamper_is_rejected(
        seed in any::<u64>(),
        digest in any::<[u8; 32]>(),
        bit in 0usize..256,
    ) {
        let mut engine = signer_256(seed);
        let signature = engine.sign_hash(&digest).unwrap();
        let other = flip(&digest, bit);
        prop_assert!(!engine.verify_hash(&other, &signature).unwrap());
    }

    #[test]
    fn wrong_lengths_are_errors(seed in any::<u64>(), longer in any::<bool>()) {
        let mut engine = signer_256(seed);
        let hash_len = if longer { 33 } else { 31 };
        let sig_len = if longer { 65 } else { 63 };

        let is_hash_size = matches!(
            engine.sign_hash(&vec![0x5A; hash_len]),
            Err(Error::InvalidHashSize { expected: 32, .. })
        );
        prop_assert!(is_hash_size);

        let is_signature_size = matches!(
            engine.verify_hash(&[0x5A; 32], &vec![0x01; sig_len]),
            Err(Error::InvalidSignatureSize { expected: 64, .. })
        );
        prop_assert!(is_signature_size);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(3))]

    #[test]
    fn round_trip_512(seed in any::<u64>(), digest in prop::collection::vec(any::<u8>(), 64)) {
        let mut engine = keyed_engine(&curve_512(), seed);
        let signature = engine.sign_hash(&digest).unwrap();
        prop_assert_eq!(signature.len(), 128);
        prop_assert!(engine.verify_hash(&digest, &signature).unwrap());
    }
}
