//! Security primitives for handling private key material

pub mod secret;

pub use secret::SecretVec;
