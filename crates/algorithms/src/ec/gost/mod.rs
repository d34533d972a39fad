//! GOST R 34.10-2012 curve arithmetic
//!
//! Arbitrary-precision arithmetic over curves whose parameters are supplied
//! at runtime. Nothing here runs in constant time.

pub mod curve;
pub mod field;
pub mod point;

pub use curve::{Curve, SUPPORTED_KEY_SIZES};
pub use point::AffinePoint;
