//! Affine point arithmetic on short Weierstrass curves
//!
//! The engine is stateless: the field prime `p` and the coefficients are
//! passed to each operation, so one [`AffinePoint`] type serves every curve.
//! Affine coordinates have no encoding for the identity element. Operations
//! that would produce it report [`Error::PointAtInfinity`] instead.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};

use super::field::{mod_inverse, normalize};
use crate::error::{Error, Result};

/// A point (x, y) with both coordinates reduced into `[0, p)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AffinePoint {
    /// x-coordinate
    pub x: BigInt,
    /// y-coordinate
    pub y: BigInt,
}

impl AffinePoint {
    /// Create a point from coordinates without checking the curve equation
    pub fn new(x: BigInt, y: BigInt) -> Self {
        Self { x, y }
    }

    /// Returns true if the point satisfies `y^2 = x^3 + ax + b (mod p)`
    ///
    /// Coordinates outside `[0, p)` are rejected rather than reduced.
    pub fn is_on_curve(&self, a: &BigInt, b: &BigInt, p: &BigInt) -> bool {
        if self.x.is_negative() || self.y.is_negative() || &self.x >= p || &self.y >= p {
            return false;
        }
        let lhs = &self.y * &self.y;
        let rhs = &self.x * &self.x * &self.x + a * &self.x + b;
        normalize(&(lhs - rhs), p).is_zero()
    }

    /// The additive inverse (x, -y)
    pub fn negate(&self, p: &BigInt) -> Self {
        Self {
            x: self.x.clone(),
            y: normalize(&-&self.y, p),
        }
    }

    /// Add two distinct points
    ///
    /// `self == other` must go through [`double`](Self::double); it is
    /// rejected here. Points sharing an x-coordinate with different y sum
    /// to the identity.
    pub fn add(&self, other: &Self, p: &BigInt) -> Result<Self> {
        if self == other {
            return Err(Error::Processing {
                operation: "point add",
                details: "equal points must be doubled",
            });
        }
        let dx = normalize(&(&other.x - &self.x), p);
        if dx.is_zero() {
            return Err(Error::PointAtInfinity {
                operation: "point add",
            });
        }

        // lambda = (y2 - y1) / (x2 - x1)
        let lambda = normalize(&((&other.y - &self.y) * mod_inverse(&dx, p)?), p);
        let x3 = normalize(&(&lambda * &lambda - &self.x - &other.x), p);
        let y3 = normalize(&(&lambda * (&self.x - &x3) - &self.y), p);
        Ok(Self { x: x3, y: y3 })
    }

    /// Double a point
    ///
    /// A point with `y = 0` has order two and doubles to the identity.
    pub fn double(&self, a: &BigInt, p: &BigInt) -> Result<Self> {
        let two_y = normalize(&(&self.y << 1), p);
        if two_y.is_zero() {
            return Err(Error::PointAtInfinity {
                operation: "point double",
            });
        }

        // lambda = (3x^2 + a) / 2y
        let numerator = BigInt::from(3u8) * &self.x * &self.x + a;
        let lambda = normalize(&(numerator * mod_inverse(&two_y, p)?), p);
        let x3 = normalize(&(&lambda * &lambda - (&self.x << 1)), p);
        let y3 = normalize(&(&lambda * (&self.x - &x3) - &self.y), p);
        Ok(Self { x: x3, y: y3 })
    }

    /// Scalar multiplication `k * self` by right-to-left double-and-add
    ///
    /// The accumulator starts at `self` with `k` decremented by one, so the
    /// first set bit never adds to an empty accumulator. Whenever the
    /// accumulator coincides with the running base it is doubled instead
    /// of added.
    pub fn multiply(&self, k: &BigInt, a: &BigInt, p: &BigInt) -> Result<Self> {
        if !k.is_positive() {
            return Err(Error::ScalarOutOfRange {
                context: "point multiply",
            });
        }

        let mut k = k - 1u32;
        let mut result = self.clone();
        let mut base = self.clone();
        while k.is_positive() {
            if k.is_odd() {
                result = if result == base {
                    result.double(a, p)?
                } else {
                    result.add(&base, p)?
                };
            }
            k >>= 1;
            if k.is_positive() {
                base = base.double(a, p)?;
            }
        }
        Ok(result)
    }
}
