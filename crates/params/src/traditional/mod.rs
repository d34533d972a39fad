//! Constants for traditional (elliptic-curve) signature algorithms

pub mod gost3410;
