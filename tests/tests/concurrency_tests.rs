//! Engines on different threads sharing one random source

use std::sync::Arc;
use std::thread;

use gostcrypt_common::SecureRandom;
use gostcrypt_sign::Gost3410;

#[test]
fn test_engines_share_random_source_across_threads() {
    let rng = Arc::new(SecureRandom::from_seed([9u8; 32]));

    let handles: Vec<_> = (0..4u8)
        .map(|i| {
            let rng = Arc::clone(&rng);
            thread::spawn(move || {
                let mut engine = Gost3410::new(rng);
                let digest = [i; 32];
                let signature = engine.sign_hash(&digest).unwrap();
                assert!(engine.verify_hash(&digest, &signature).unwrap());
                engine.export_parameters(false).unwrap()
            })
        })
        .collect();

    let exported: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    // One stream feeds every engine, so no two draw the same key
    for (i, a) in exported.iter().enumerate() {
        for b in &exported[i + 1..] {
            assert_ne!(a.public_key, b.public_key);
        }
    }
}

#[test]
fn test_verification_from_many_threads() {
    let rng = Arc::new(SecureRandom::from_seed([10u8; 32]));
    let mut engine = Gost3410::new(rng);
    let digest = [0xABu8; 32];
    let signature = engine.sign_hash(&digest).unwrap();
    let engine = Arc::new(engine);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let signature = signature.clone();
            thread::spawn(move || engine.verify_hash(&digest, &signature).unwrap())
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
