//! Public traits implemented by gostcrypt algorithms

pub mod signature;

pub use signature::HashSignature;
