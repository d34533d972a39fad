//! Elliptic Curve Primitives
//!
//! Short Weierstrass curves over prime fields, with domain parameters
//! supplied at runtime rather than fixed at compile time.

pub mod gost;

pub use gost::{AffinePoint, Curve};
