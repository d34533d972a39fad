//! Constants for GOST R 34.10-2012 digital signatures
//!
//! The standard defines two key sizes. For each size this module carries
//! the worked-example curve from the standard's appendix (useful for test
//! vectors) and production parameter sets, including the cofactor-4
//! TC26 256-bit set A.

/// Key size in bits for the 256-bit variant
pub const GOST3410_256_KEY_SIZE: usize = 256;

/// Key size in bits for the 512-bit variant
pub const GOST3410_512_KEY_SIZE: usize = 512;

/// Short Weierstrass curve y^2 = x^3 + ax + b over F_p with N-byte elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GostCurve<const N: usize> {
    /// Human-readable identifier
    pub name: &'static str,
    /// Field prime p
    pub p: [u8; N],
    /// Coefficient a
    pub a: [u8; N],
    /// Coefficient b
    pub b: [u8; N],
    /// Order of the curve's point group
    ///
    /// Equals the subgroup order when `h == 1`; a larger cofactor can push
    /// the encoding past `N` bytes.
    pub q: &'static [u8],
    /// Generator x-coordinate
    pub g_x: [u8; N],
    /// Generator y-coordinate
    pub g_y: [u8; N],
    /// Cofactor
    pub h: u32,
}

impl<const N: usize> GostCurve<N> {
    /// Key size in bits
    pub const fn key_size(&self) -> usize {
        N * 8
    }
}

/// Worked-example curve from GOST R 34.10-2012, Appendix A.1 (256-bit)
pub const GOST_2012_EXAMPLE_256: GostCurve<32> = GostCurve {
    name: "gost-2012-example-256",
    p: [
        0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x31,
    ],
    a: [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07,
    ],
    b: [
        0x5f, 0xbf, 0xf4, 0x98, 0xaa, 0x93, 0x8c, 0xe7,
        0x39, 0xb8, 0xe0, 0x22, 0xfb, 0xaf, 0xef, 0x40,
        0x56, 0x3f, 0x6e, 0x6a, 0x34, 0x72, 0xfc, 0x2a,
        0x51, 0x4c, 0x0c, 0xe9, 0xda, 0xe2, 0x3b, 0x7e,
    ],
    q: &[
        0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01,
        0x50, 0xfe, 0x8a, 0x18, 0x92, 0x97, 0x61, 0x54,
        0xc5, 0x9c, 0xfc, 0x19, 0x3a, 0xcc, 0xf5, 0xb3,
    ],
    g_x: [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02,
    ],
    g_y: [
        0x08, 0xe2, 0xa8, 0xa0, 0xe6, 0x51, 0x47, 0xd4,
        0xbd, 0x63, 0x16, 0x03, 0x0e, 0x16, 0xd1, 0x9c,
        0x85, 0xc9, 0x7f, 0x0a, 0x9c, 0xa2, 0x67, 0x12,
        0x2b, 0x96, 0xab, 0xbc, 0xea, 0x7e, 0x8f, 0xc8,
    ],
    h: 1,
};

/// Worked-example curve from GOST R 34.10-2012, Appendix A.2 (512-bit)
pub const GOST_2012_EXAMPLE_512: GostCurve<64> = GostCurve {
    name: "gost-2012-example-512",
    p: [
        0x45, 0x31, 0xac, 0xd1, 0xfe, 0x00, 0x23, 0xc7,
        0x55, 0x0d, 0x26, 0x7b, 0x6b, 0x2f, 0xee, 0x80,
        0x92, 0x2b, 0x14, 0xb2, 0xff, 0xb9, 0x0f, 0x04,
        0xd4, 0xeb, 0x7c, 0x09, 0xb5, 0xd2, 0xd1, 0x5d,
        0xf1, 0xd8, 0x52, 0x74, 0x1a, 0xf4, 0x70, 0x4a,
        0x04, 0x58, 0x04, 0x7e, 0x80, 0xe4, 0x54, 0x6d,
        0x35, 0xb8, 0x33, 0x6f, 0xac, 0x22, 0x4d, 0xd8,
        0x16, 0x64, 0xbb, 0xf5, 0x28, 0xbe, 0x63, 0x73,
    ],
    a: [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07,
    ],
    b: [
        0x1c, 0xff, 0x08, 0x06, 0xa3, 0x11, 0x16, 0xda,
        0x29, 0xd8, 0xcf, 0xa5, 0x4e, 0x57, 0xeb, 0x74,
        0x8b, 0xc5, 0xf3, 0x77, 0xe4, 0x94, 0x00, 0xfd,
        0xd7, 0x88, 0xb6, 0x49, 0xec, 0xa1, 0xac, 0x43,
        0x61, 0x83, 0x40, 0x13, 0xb2, 0xad, 0x73, 0x22,
        0x48, 0x0a, 0x89, 0xca, 0x58, 0xe0, 0xcf, 0x74,
        0xbc, 0x9e, 0x54, 0x0c, 0x2a, 0xdd, 0x68, 0x97,
        0xfa, 0xd0, 0xa3, 0x08, 0x4f, 0x30, 0x2a, 0xdc,
    ],
    q: &[
        0x45, 0x31, 0xac, 0xd1, 0xfe, 0x00, 0x23, 0xc7,
        0x55, 0x0d, 0x26, 0x7b, 0x6b, 0x2f, 0xee, 0x80,
        0x92, 0x2b, 0x14, 0xb2, 0xff, 0xb9, 0x0f, 0x04,
        0xd4, 0xeb, 0x7c, 0x09, 0xb5, 0xd2, 0xd1, 0x5d,
        0xa8, 0x2f, 0x2d, 0x7e, 0xcb, 0x1d, 0xba, 0xc7,
        0x19, 0x90, 0x5c, 0x5e, 0xec, 0xc4, 0x23, 0xf1,
        0xd8, 0x6e, 0x25, 0xed, 0xbe, 0x23, 0xc5, 0x95,
        0xd6, 0x44, 0xaa, 0xf1, 0x87, 0xe6, 0xe6, 0xdf,
    ],
    g_x: [
        0x24, 0xd1, 0x9c, 0xc6, 0x45, 0x72, 0xee, 0x30,
        0xf3, 0x96, 0xbf, 0x6e, 0xbb, 0xfd, 0x7a, 0x6c,
        0x52, 0x13, 0xb3, 0xb3, 0xd7, 0x05, 0x7c, 0xc8,
        0x25, 0xf9, 0x10, 0x93, 0xa6, 0x8c, 0xd7, 0x62,
        0xfd, 0x60, 0x61, 0x12, 0x62, 0xcd, 0x83, 0x8d,
        0xc6, 0xb6, 0x0a, 0xa7, 0xee, 0xe8, 0x04, 0xe2,
        0x8b, 0xc8, 0x49, 0x97, 0x7f, 0xac, 0x33, 0xb4,
        0xb5, 0x30, 0xf1, 0xb1, 0x20, 0x24, 0x8a, 0x9a,
    ],
    g_y: [
        0x2b, 0xb3, 0x12, 0xa4, 0x3b, 0xd2, 0xce, 0x6e,
        0x0d, 0x02, 0x06, 0x13, 0xc8, 0x57, 0xac, 0xdd,
        0xcf, 0xbf, 0x06, 0x1e, 0x91, 0xe5, 0xf2, 0xc3,
        0xf3, 0x24, 0x47, 0xc2, 0x59, 0xf3, 0x9b, 0x2c,
        0x83, 0xab, 0x15, 0x6d, 0x77, 0xf1, 0x49, 0x6b,
        0xf7, 0xeb, 0x33, 0x51, 0xe1, 0xee, 0x4e, 0x43,
        0xdc, 0x1a, 0x18, 0xb9, 0x1b, 0x24, 0x64, 0x0b,
        0x6d, 0xbb, 0x92, 0xcb, 0x1a, 0xdd, 0x37, 0x1e,
    ],
    h: 1,
};

/// id-GostR3410-2001-CryptoPro-A-ParamSet, also used for 256-bit 2012 keys
pub const CRYPTOPRO_A: GostCurve<32> = GostCurve {
    name: "cryptopro-a",
    p: [
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfd, 0x97,
    ],
    a: [
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfd, 0x94,
    ],
    b: [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xa6,
    ],
    q: &[
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0x6c, 0x61, 0x10, 0x70, 0x99, 0x5a, 0xd1, 0x00,
        0x45, 0x84, 0x1b, 0x09, 0xb7, 0x61, 0xb8, 0x93,
    ],
    g_x: [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01,
    ],
    g_y: [
        0x8d, 0x91, 0xe4, 0x71, 0xe0, 0x98, 0x9c, 0xda,
        0x27, 0xdf, 0x50, 0x5a, 0x45, 0x3f, 0x2b, 0x76,
        0x35, 0x29, 0x4f, 0x2d, 0xdf, 0x23, 0xe3, 0xb1,
        0x22, 0xac, 0xc9, 0x9c, 0x9e, 0x9f, 0x1e, 0x14,
    ],
    h: 1,
};

/// id-tc26-gost-3410-12-512-paramSetA
pub const TC26_512_A: GostCurve<64> = GostCurve {
    name: "tc26-512-a",
    p: [
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfd, 0xc7,
    ],
    a: [
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfd, 0xc4,
    ],
    b: [
        0xe8, 0xc2, 0x50, 0x5d, 0xed, 0xfc, 0x86, 0xdd,
        0xc1, 0xbd, 0x0b, 0x2b, 0x66, 0x67, 0xf1, 0xda,
        0x34, 0xb8, 0x25, 0x74, 0x76, 0x1c, 0xb0, 0xe8,
        0x79, 0xbd, 0x08, 0x1c, 0xfd, 0x0b, 0x62, 0x65,
        0xee, 0x3c, 0xb0, 0x90, 0xf3, 0x0d, 0x27, 0x61,
        0x4c, 0xb4, 0x57, 0x40, 0x10, 0xda, 0x90, 0xdd,
        0x86, 0x2e, 0xf9, 0xd4, 0xeb, 0xee, 0x47, 0x61,
        0x50, 0x31, 0x90, 0x78, 0x5a, 0x71, 0xc7, 0x60,
    ],
    q: &[
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0x27, 0xe6, 0x95, 0x32, 0xf4, 0x8d, 0x89, 0x11,
        0x6f, 0xf2, 0x2b, 0x8d, 0x4e, 0x05, 0x60, 0x60,
        0x9b, 0x4b, 0x38, 0xab, 0xfa, 0xd2, 0xb8, 0x5d,
        0xca, 0xcd, 0xb1, 0x41, 0x1f, 0x10, 0xb2, 0x75,
    ],
    g_x: [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03,
    ],
    g_y: [
        0x75, 0x03, 0xcf, 0xe8, 0x7a, 0x83, 0x6a, 0xe3,
        0xa6, 0x1b, 0x88, 0x16, 0xe2, 0x54, 0x50, 0xe6,
        0xce, 0x5e, 0x1c, 0x93, 0xac, 0xf1, 0xab, 0xc1,
        0x77, 0x80, 0x64, 0xfd, 0xcb, 0xef, 0xa9, 0x21,
        0xdf, 0x16, 0x26, 0xbe, 0x4f, 0xd0, 0x36, 0xe9,
        0x3d, 0x75, 0xe6, 0xa5, 0x0e, 0x3a, 0x41, 0xe9,
        0x80, 0x28, 0xfe, 0x5f, 0xc2, 0x35, 0xf5, 0xb8,
        0x89, 0xa5, 0x89, 0xcb, 0x52, 0x15, 0xf2, 0xa4,
    ],
    h: 1,
};

/// id-tc26-gost-3410-2012-256-paramSetA
///
/// A twisted Edwards curve given here in its short Weierstrass form.
/// The group has cofactor 4, so `q` is one byte wider than the field.
pub const TC26_256_A: GostCurve<32> = GostCurve {
    name: "tc26-256-a",
    p: [
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfd, 0x97,
    ],
    a: [
        0xc2, 0x17, 0x3f, 0x15, 0x13, 0x98, 0x16, 0x73,
        0xaf, 0x48, 0x92, 0xc2, 0x30, 0x35, 0xa2, 0x7c,
        0xe2, 0x5e, 0x20, 0x13, 0xbf, 0x95, 0xaa, 0x33,
        0xb2, 0x2c, 0x65, 0x6f, 0x27, 0x7e, 0x73, 0x35,
    ],
    b: [
        0x29, 0x5f, 0x9b, 0xae, 0x74, 0x28, 0xed, 0x9c,
        0xcc, 0x20, 0xe7, 0xc3, 0x59, 0xa9, 0xd4, 0x1a,
        0x22, 0xfc, 0xcd, 0x91, 0x08, 0xe1, 0x7b, 0xf7,
        0xba, 0x93, 0x37, 0xa6, 0xf8, 0xae, 0x95, 0x13,
    ],
    q: &[
        0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x3f, 0x63, 0x37, 0x7f, 0x21, 0xed, 0x98,
        0xd7, 0x04, 0x56, 0xbd, 0x55, 0xb0, 0xd8, 0x31,
        0x9c,
    ],
    g_x: [
        0x91, 0xe3, 0x84, 0x43, 0xa5, 0xe8, 0x2c, 0x0d,
        0x88, 0x09, 0x23, 0x42, 0x57, 0x12, 0xb2, 0xbb,
        0x65, 0x8b, 0x91, 0x96, 0x93, 0x2e, 0x02, 0xc7,
        0x8b, 0x25, 0x82, 0xfe, 0x74, 0x2d, 0xaa, 0x28,
    ],
    g_y: [
        0x32, 0x87, 0x94, 0x23, 0xab, 0x1a, 0x03, 0x75,
        0x89, 0x57, 0x86, 0xc4, 0xbb, 0x46, 0xe9, 0x56,
        0x5f, 0xde, 0x0b, 0x53, 0x44, 0x76, 0x67, 0x40,
        0xaf, 0x26, 0x8a, 0xdb, 0x32, 0x32, 0x2e, 0x5c,
    ],
    h: 4,
};
