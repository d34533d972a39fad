//! Worked examples from GOST R 34.10-2012, Appendix A
//!
//! Integers are given big-endian, as printed in the standard. Digests and
//! signatures handed to the engine are little-endian; the helpers below
//! do the conversion.

use gostcrypt_common::{DomainParameters, EncodedPoint, SecretVec};
use gostcrypt_params::traditional::gost3410::{GOST_2012_EXAMPLE_256, GOST_2012_EXAMPLE_512};
use gostcrypt_sign::GostParameters;

/// One signing example: key pair, digest, nonce and the resulting (r, s)
#[derive(Debug, Clone, Copy)]
pub struct ReferenceVector {
    pub d: &'static str,
    pub qx: &'static str,
    pub qy: &'static str,
    pub e: &'static str,
    pub k: &'static str,
    pub r: &'static str,
    pub s: &'static str,
}

/// Appendix A.1 (256-bit)
pub const EXAMPLE_256: ReferenceVector = ReferenceVector {
    d: "7a929ade789bb9be10ed359dd39a72c11b60961f49397eee1d19ce9891ec3b28",
    qx: "7f2b49e270db6d90d8595bec458b50c58585ba1d4e9b788f6689dbd8e56fd80b",
    qy: "26f1b489d6701dd185c8413a977b3cbbaf64d1c593d26627dffb101a87ff77da",
    e: "2dfbc1b372d89a1188c09c52e0eec61fce52032ab1022e8e67ece6672b043ee5",
    k: "77105c9b20bcd3122823c8cf6fcc7b956de33814e95b7fe64fed924594dceab3",
    r: "41aa28d2f1ab148280cd9ed56feda41974053554a42767b83ad043fd39dc0493",
    s: "01456c64ba4642a1653c235a98a60249bcd6d3f746b631df928014f6c5bf9c40",
};

/// Appendix A.2 (512-bit)
pub const EXAMPLE_512: ReferenceVector = ReferenceVector {
    d: "0ba6048aadae241ba40936d47756d7c93091a0e8514669700ee7508e508b102072e8123b2200a0563322dad2827e2714a2636b7bfd18aadfc62967821fa18dd4",
    qx: "115dc5bc96760c7b48598d8ab9e740d4c4a85a65be33c1815b5c320c854621dd5a515856d13314af69bc5b924c8b4ddff75c45415c1d9dd9dd33612cd530efe1",
    qy: "37c7c90cd40b0f5621dc3ac1b751cfa0e2634fa0503b3d52639f5d7fb72afd61ea199441d943ffe7f0c70a2759a3cdb84c114e1f9339fdf27f35eca93677beec",
    e: "3754f3cfacc9e0615c4f4a7c4d8dab531b09b6f9c170c533a71d147035b0c5917184ee536593f4414339976c647c5d5a407adedb1d560c4fc6777d2972075b8c",
    k: "0359e7f4b1410feacc570456c6801496946312120b39d019d455986e364f365886748ed7a44b3e794434006011842286212273a6d14cf70ea3af71bb1ae679f1",
    r: "2f86fa60a081091a23dd795e1e3c689ee512a3c82ee0dcc2643c78eea8fcacd35492558486b20f1c9ec197c90699850260c93bcbcd9c5c3317e19344e173ae36",
    s: "1081b394696ffe8e6585e7a9362d26b6325f56778aadbc081c0bfbe933d52ff5823ce288e8c4f362526080df7f70ce406a6eeb1f56919cb92a9853bde73e5b4a",
};

fn decode(hex_be: &str) -> Vec<u8> {
    hex::decode(hex_be).unwrap_or_else(|err| panic!("bad vector hex: {}", err))
}

fn little_endian(hex_be: &str) -> Vec<u8> {
    let mut bytes = decode(hex_be);
    bytes.reverse();
    bytes
}

impl ReferenceVector {
    /// Curve the example was computed on
    pub fn curve(&self) -> DomainParameters {
        if self.d.len() == 64 {
            DomainParameters::from(&GOST_2012_EXAMPLE_256)
        } else {
            DomainParameters::from(&GOST_2012_EXAMPLE_512)
        }
    }

    /// The digest e as the engine expects it
    pub fn digest(&self) -> Vec<u8> {
        little_endian(self.e)
    }

    /// The published signature encoded as `s || r`
    pub fn signature(&self) -> Vec<u8> {
        let mut signature = little_endian(self.s);
        signature.extend_from_slice(&little_endian(self.r));
        signature
    }

    /// Parameters carrying only the public key
    pub fn public_parameters(&self) -> GostParameters {
        GostParameters {
            curve: self.curve(),
            public_key: Some(EncodedPoint::new(decode(self.qx), decode(self.qy))),
            private_key: None,
        }
    }

    /// Parameters carrying the full key pair
    pub fn key_pair_parameters(&self) -> GostParameters {
        GostParameters {
            private_key: Some(SecretVec::new(decode(self.d))),
            ..self.public_parameters()
        }
    }
}
