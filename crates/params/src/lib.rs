//! Constant values for the gostcrypt library
//!
//! Curve parameters are stored exactly as they are published: big-endian
//! byte strings of the field element width.

#![no_std]
#![forbid(unsafe_code)]

pub mod traditional;
