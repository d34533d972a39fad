//! Validated numeric view of GOST R 34.10-2012 domain parameters

use log::debug;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

use super::field::{from_be_bytes, in_open_range, normalize, to_fixed_width_be};
use super::point::AffinePoint;
use crate::error::{validate, Error, Result};
use gostcrypt_common::{DomainParameters, EncodedPoint};
use gostcrypt_internal::endian::significant_len_be;
use gostcrypt_params::traditional::gost3410::{GOST3410_256_KEY_SIZE, GOST3410_512_KEY_SIZE};

/// Key sizes in bits accepted by [`Curve::from_parameters`]
pub const SUPPORTED_KEY_SIZES: [usize; 2] = [GOST3410_256_KEY_SIZE, GOST3410_512_KEY_SIZE];

/// A curve whose domain parameters passed validation
///
/// Holds the parsed integers next to a private copy of the byte buffers it
/// was built from, so the original encoding can be exported unchanged.
#[derive(Clone, Debug)]
pub struct Curve {
    parameters: DomainParameters,
    p: BigInt,
    a: BigInt,
    b: BigInt,
    q: BigInt,
    g: AffinePoint,
}

impl Curve {
    /// Parse and validate domain parameters
    ///
    /// Checks that every buffer is present, that the prime has 256 or 512
    /// significant bits of encoding and is odd, that `a`, `b` and the
    /// generator coordinates are field elements, that the curve is
    /// non-singular, that the cofactor divides the order, and that the
    /// generator lies on the curve with order `order / cofactor`.
    pub fn from_parameters(parameters: &DomainParameters) -> Result<Self> {
        validate::present(&parameters.prime, "prime")?;
        validate::present(&parameters.a, "a")?;
        validate::present(&parameters.b, "b")?;
        validate::present(&parameters.order, "order")?;
        validate::present(&parameters.cofactor, "cofactor")?;
        validate::present(&parameters.generator.x, "generator x")?;
        validate::present(&parameters.generator.y, "generator y")?;

        let element_size = parameters.element_size();
        validate::parameter(
            SUPPORTED_KEY_SIZES.contains(&parameters.key_size()),
            "prime",
            "key size must be 256 or 512 bits",
        )?;
        validate::parameter(
            significant_len_be(&parameters.prime) == element_size,
            "prime",
            "encoding has a leading zero byte",
        )?;

        let p = from_be_bytes(&parameters.prime);
        validate::parameter(p.is_odd() && p > BigInt::from(3u8), "prime", "must be an odd prime")?;

        for (name, bytes) in [
            ("a", &parameters.a),
            ("b", &parameters.b),
            ("generator x", &parameters.generator.x),
            ("generator y", &parameters.generator.y),
        ] {
            validate::max_length(name, significant_len_be(bytes), element_size)?;
            validate::parameter(from_be_bytes(bytes) < p, name, "must be less than the prime")?;
        }

        let a = from_be_bytes(&parameters.a);
        let b = from_be_bytes(&parameters.b);

        // 4a^3 + 27b^2 != 0 (mod p)
        let discriminant = BigInt::from(4u8) * &a * &a * &a + BigInt::from(27u8) * &b * &b;
        validate::parameter(
            !normalize(&discriminant, &p).is_zero(),
            "a",
            "curve is singular",
        )?;

        let order = from_be_bytes(&parameters.order);
        let cofactor = from_be_bytes(&parameters.cofactor);
        validate::parameter(cofactor >= BigInt::one(), "cofactor", "must be at least one")?;
        let (q, remainder) = order.div_rem(&cofactor);
        validate::parameter(remainder.is_zero(), "cofactor", "must divide the order")?;
        validate::parameter(
            q.is_odd() && q > BigInt::from(3u8),
            "order",
            "subgroup order must be an odd prime",
        )?;

        let g = AffinePoint::new(
            from_be_bytes(&parameters.generator.x),
            from_be_bytes(&parameters.generator.y),
        );
        validate::parameter(g.is_on_curve(&a, &b, &p), "generator", "not on the curve")?;

        let curve = Self {
            parameters: parameters.clone(),
            p,
            a,
            b,
            q,
            g,
        };

        // q*G is the identity exactly when (q-1)*G == -G
        let g = curve.generator();
        let q_minus_one = curve.subgroup_order() - 1u32;
        match g.multiply(&q_minus_one, &curve.a, &curve.p) {
            Ok(point) if point == g.negate(&curve.p) => {}
            Ok(_) | Err(_) => {
                return Err(Error::param(
                    "generator",
                    "order does not match order / cofactor",
                ))
            }
        }

        debug!("validated {}-bit curve", curve.key_size());
        Ok(curve)
    }

    /// The byte buffers this curve was built from
    pub fn parameters(&self) -> &DomainParameters {
        &self.parameters
    }

    /// Field prime p
    pub fn prime(&self) -> &BigInt {
        &self.p
    }

    /// Coefficient a
    pub fn a(&self) -> &BigInt {
        &self.a
    }

    /// Coefficient b
    pub fn b(&self) -> &BigInt {
        &self.b
    }

    /// Order of the subgroup generated by G (`order / cofactor`)
    pub fn subgroup_order(&self) -> &BigInt {
        &self.q
    }

    /// Base point G
    pub fn generator(&self) -> &AffinePoint {
        &self.g
    }

    /// Key size in bits
    pub fn key_size(&self) -> usize {
        self.parameters.key_size()
    }

    /// Bytes per field element, private key, digest or signature half
    pub fn element_size(&self) -> usize {
        self.parameters.element_size()
    }

    /// Returns true if `1 <= k < q`
    pub fn is_valid_scalar(&self, k: &BigInt) -> bool {
        in_open_range(k, &self.q)
    }

    /// Returns true if the point lies on this curve
    pub fn contains(&self, point: &AffinePoint) -> bool {
        point.is_on_curve(&self.a, &self.b, &self.p)
    }

    /// `k * G`
    pub fn mul_generator(&self, k: &BigInt) -> Result<AffinePoint> {
        self.g.multiply(k, &self.a, &self.p)
    }

    /// `k * point`
    pub fn mul(&self, point: &AffinePoint, k: &BigInt) -> Result<AffinePoint> {
        point.multiply(k, &self.a, &self.p)
    }

    /// `lhs + rhs`, doubling when both operands are the same point
    pub fn add_points(&self, lhs: &AffinePoint, rhs: &AffinePoint) -> Result<AffinePoint> {
        if lhs == rhs {
            lhs.double(&self.a, &self.p)
        } else {
            lhs.add(rhs, &self.p)
        }
    }

    /// Check that a public point is on the curve and in the subgroup of order q
    pub fn validate_public_point(&self, point: &AffinePoint) -> Result<()> {
        if !self.contains(point) {
            return Err(Error::param("public key", "point is not on the curve"));
        }
        let q_minus_one = &self.q - 1u32;
        match self.mul(point, &q_minus_one) {
            Ok(multiple) if multiple == point.negate(&self.p) => Ok(()),
            _ => Err(Error::param(
                "public key",
                "point is not in the prime-order subgroup",
            )),
        }
    }

    /// Parse a big-endian encoded point and check it lies on the curve
    pub fn decode_point(&self, encoded: &EncodedPoint) -> Result<AffinePoint> {
        validate::present(&encoded.x, "point x")?;
        validate::present(&encoded.y, "point y")?;
        validate::max_length("point x", significant_len_be(&encoded.x), self.element_size())?;
        validate::max_length("point y", significant_len_be(&encoded.y), self.element_size())?;

        let point = AffinePoint::new(from_be_bytes(&encoded.x), from_be_bytes(&encoded.y));
        if !self.contains(&point) {
            return Err(Error::param("point", "not on the curve"));
        }
        Ok(point)
    }

    /// Encode a point as two fixed-width big-endian coordinates
    pub fn encode_point(&self, point: &AffinePoint) -> EncodedPoint {
        let width = self.element_size();
        EncodedPoint::new(
            to_fixed_width_be(&point.x, width),
            to_fixed_width_be(&point.y, width),
        )
    }
}
