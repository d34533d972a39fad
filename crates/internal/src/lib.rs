//! Internal utilities for the gostcrypt library
//!
//! Byte-order conversions used at the integer/byte boundary and
//! constant-time comparison of encoded values.

#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;
