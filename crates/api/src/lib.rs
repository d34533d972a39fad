//! Public API traits and types for the gostcrypt library
//!
//! This crate provides the public API surface for the gostcrypt ecosystem:
//! the error type returned by every public operation and the trait
//! implemented by digest-signature engines.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

// Re-export all traits from the traits module
pub use traits::HashSignature;

// Re-export trait modules for direct access
pub use traits::signature;
