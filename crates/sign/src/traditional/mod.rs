//! Traditional signature schemes
//!
//! Elliptic-curve signatures over prime fields. GOST R 34.10-2012 is the
//! only scheme at present.

pub mod gost3410;

// Re-export GOST R 34.10-2012 types
pub use gost3410::{Gost3410, GostParameters};
