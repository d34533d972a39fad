//! Integration tests for GOST R 34.10-2012 signatures

use gostcrypt::prelude::*;
use gostcrypt_algorithms::ec::gost::field::{from_be_bytes, from_le_bytes};
use gostcrypt_tests::vectors::{ReferenceVector, EXAMPLE_256, EXAMPLE_512};
use gostcrypt_tests::{curve_256, curve_256_cofactor_4, curve_512, keyed_engine, seeded_random};

fn verify_reference(vector: &ReferenceVector) {
    let mut engine = Gost3410::new(seeded_random(1));
    engine
        .import_parameters(&vector.public_parameters())
        .unwrap();

    let digest = vector.digest();
    let signature = vector.signature();
    assert!(engine.verify_hash(&digest, &signature).unwrap());

    let mut tampered = signature.clone();
    tampered[0] ^= 0x01;
    assert!(!engine.verify_hash(&digest, &tampered).unwrap());
}

#[test]
fn test_reference_signature_256_verifies() {
    verify_reference(&EXAMPLE_256);
}

#[test]
fn test_reference_signature_512_verifies() {
    verify_reference(&EXAMPLE_512);
}

#[test]
fn test_reference_key_pair_import() {
    let mut engine = Gost3410::new(seeded_random(2));
    engine
        .import_parameters(&EXAMPLE_256.key_pair_parameters())
        .unwrap();

    // A fresh signature under the reference key verifies against the
    // published public key in another engine
    let digest = EXAMPLE_256.digest();
    let signature = engine.sign_hash(&digest).unwrap();

    let mut verifier = Gost3410::new(seeded_random(3));
    verifier
        .import_parameters(&EXAMPLE_256.public_parameters())
        .unwrap();
    assert!(verifier.verify_hash(&digest, &signature).unwrap());

    let exported = engine.export_parameters(true).unwrap();
    assert_eq!(exported, EXAMPLE_256.key_pair_parameters());
}

#[test]
fn test_round_trip_256() {
    let mut engine = keyed_engine(&curve_256(), 10);
    assert_eq!(engine.key_size().unwrap(), 256);
    let digest = [0xC3u8; 32];
    let signature = engine.sign_hash(&digest).unwrap();
    assert_eq!(signature.len(), engine.signature_size().unwrap());
    assert!(engine.verify_hash(&digest, &signature).unwrap());
}

#[test]
fn test_round_trip_with_cofactor_4() {
    let curve = curve_256_cofactor_4();
    let mut engine = keyed_engine(&curve, 12);
    assert_eq!(engine.key_size().unwrap(), 256);

    // The digest is larger than the subgroup order and gets reduced
    let digest = [0xFFu8; 32];
    let signature = engine.sign_hash(&digest).unwrap();
    assert_eq!(signature.len(), 64);
    assert!(engine.verify_hash(&digest, &signature).unwrap());

    // Both halves and the private key live below order / 4
    let q = from_be_bytes(&curve.order) / 4u32;
    assert!(from_le_bytes(&signature[..32]) < q);
    assert!(from_le_bytes(&signature[32..]) < q);
    let exported = engine.export_parameters(true).unwrap();
    let d = from_be_bytes(exported.private_key.as_ref().unwrap().as_slice());
    assert!(d < q);

    let mut verifier = Gost3410::new(seeded_random(13));
    verifier
        .import_parameters(&engine.export_parameters(false).unwrap())
        .unwrap();
    assert!(verifier.verify_hash(&digest, &signature).unwrap());

    let mut tampered = signature;
    tampered[40] ^= 0x10;
    assert!(!verifier.verify_hash(&digest, &tampered).unwrap());
}

#[test]
fn test_round_trip_512() {
    let mut engine = Gost3410::with_default_curve(seeded_random(11), curve_512());
    let digest = [0x3Cu8; 64];
    let signature = engine.sign_hash(&digest).unwrap();
    assert_eq!(signature.len(), 128);
    assert!(engine.verify_hash(&digest, &signature).unwrap());

    let err = engine.sign_hash(&[0u8; 32]).unwrap_err();
    assert!(matches!(
        err,
        gostcrypt_sign::Error::InvalidHashSize {
            expected: 64,
            actual: 32
        }
    ));
}

#[test]
fn test_signatures_are_randomized() {
    let mut engine = keyed_engine(&curve_256(), 12);
    let digest = [0x01u8; 32];
    let first = engine.sign_hash(&digest).unwrap();
    let second = engine.sign_hash(&digest).unwrap();
    assert_ne!(first, second);
    assert!(engine.verify_hash(&digest, &first).unwrap());
    assert!(engine.verify_hash(&digest, &second).unwrap());
}

#[test]
fn test_cross_engine_verification() {
    let mut signer = keyed_engine(&curve_256(), 13);
    let digest = [0x99u8; 32];
    let signature = signer.sign_hash(&digest).unwrap();

    let mut verifier = Gost3410::new(seeded_random(14));
    verifier
        .import_parameters(&signer.export_parameters(false).unwrap())
        .unwrap();
    assert!(verifier.verify_hash(&digest, &signature).unwrap());

    // A different key pair rejects the signature
    let other = keyed_engine(&curve_256(), 15);
    assert!(!other.verify_hash(&digest, &signature).unwrap());
}

#[test]
fn test_private_key_round_trip() {
    let mut original = keyed_engine(&curve_256(), 16);
    let exported = original.export_parameters(true).unwrap();

    let mut restored = Gost3410::new(seeded_random(17));
    restored.import_parameters(&exported).unwrap();
    assert_eq!(restored.export_parameters(true).unwrap(), exported);

    let digest = [0x10u8; 32];
    let signature = restored.sign_hash(&digest).unwrap();
    assert!(original.verify_hash(&digest, &signature).unwrap());
}

#[test]
fn test_exported_buffers_are_fixed_width() {
    let mut engine = keyed_engine(&curve_256(), 18);
    let exported = engine.export_parameters(true).unwrap();
    let public_key = exported.public_key.unwrap();
    assert_eq!(public_key.x.len(), 32);
    assert_eq!(public_key.y.len(), 32);
    assert_eq!(exported.private_key.unwrap().len(), 32);
}

/// Drive an engine only through the public trait
fn sign_and_verify<S: HashSignature>(engine: &mut S, digest: &[u8]) -> Result<bool> {
    let signature = engine.sign_hash(digest)?;
    engine.verify_hash(digest, &signature)
}

#[test]
fn test_trait_surface() {
    let mut engine = Gost3410::new(seeded_random(19));
    assert!(sign_and_verify(&mut engine, &[0x42u8; 32]).unwrap());

    let err = sign_and_verify(&mut engine, &[0x42u8; 33]).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidLength {
            context: "hash",
            expected: 32,
            actual: 33
        }
    );

    HashSignature::dispose(&mut engine);
    let err = sign_and_verify(&mut engine, &[0x42u8; 32]).unwrap_err();
    assert!(err.is_use_after_dispose());
}

#[test]
fn test_invalid_curve_is_reported_through_api() {
    let mut engine = Gost3410::new(seeded_random(20));
    let mut curve = curve_256();
    curve.cofactor = vec![0x00];
    let err = HashSignature::generate_key(&mut engine, &curve).unwrap_err();
    assert!(matches!(err, Error::InvalidDomainParameters { .. }));
}
