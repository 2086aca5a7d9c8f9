use crate::modular::{add_mod, mod_inv, mul_mod, neg_mod, sub_mod};
use crate::{ArithmeticError, CurvePoint};

use num_bigint::BigUint;
use num_traits::{One, Zero};
use once_cell::sync::Lazy;
use thiserror::Error;

use std::fmt;
use std::str::FromStr;

/// Domain parameters of a short Weierstrass curve `y^2 = x^3 + ax + b` over
/// the prime field of `prime_modulus`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveParameters {
    pub name: &'static str,
    pub prime_modulus: BigUint,
    pub coeff_a: BigUint,
    pub coeff_b: BigUint,
    pub generator_x: BigUint,
    pub generator_y: BigUint,
    pub order: BigUint,
    pub bit_size: u64,
}

impl CurveParameters {
    /// Exclusive upper bound `2^bit_size` for encoded coordinates and
    /// scalars.
    pub fn coordinate_bound(&self) -> BigUint {
        BigUint::one() << self.bit_size
    }

    pub fn prime_bits(&self) -> u64 {
        self.prime_modulus.bits()
    }
}

/// Group law of a curve, written once over its [`CurveParameters`].
pub trait EllipticCurve {
    fn params(&self) -> &CurveParameters;

    fn base_point(&self) -> CurvePoint {
        let params = self.params();
        CurvePoint::new(params.generator_x.clone(), params.generator_y.clone())
    }

    fn order(&self) -> &BigUint {
        &self.params().order
    }

    fn bit_size(&self) -> u64 {
        self.params().bit_size
    }

    fn is_on_curve(&self, point: &CurvePoint) -> bool {
        let (x, y) = match point.coordinates() {
            None => return true,
            Some(coordinates) => coordinates,
        };
        let params = self.params();
        let p = &params.prime_modulus;

        let y2 = mul_mod(y, y, p);
        let x3 = mul_mod(&mul_mod(x, x, p), x, p);
        let ax = mul_mod(&params.coeff_a, x, p);
        y2 == add_mod(&add_mod(&x3, &ax, p), &params.coeff_b, p)
    }

    fn negate(&self, point: &CurvePoint) -> CurvePoint {
        match point.coordinates() {
            None => CurvePoint::Infinity,
            Some((x, y)) => {
                let p = &self.params().prime_modulus;
                CurvePoint::new(x % p, neg_mod(y, p))
            }
        }
    }

    fn add(&self, lhs: &CurvePoint, rhs: &CurvePoint) -> Result<CurvePoint, ArithmeticError> {
        let (lx, ly, rx, ry) = match (lhs, rhs) {
            (CurvePoint::Infinity, _) => return Ok(rhs.clone()),
            (_, CurvePoint::Infinity) => return Ok(lhs.clone()),
            (CurvePoint::Affine { x: lx, y: ly }, CurvePoint::Affine { x: rx, y: ry }) => {
                (lx, ly, rx, ry)
            }
        };
        let params = self.params();
        let p = &params.prime_modulus;
        let (lx, ly, rx, ry) = (lx % p, ly % p, rx % p, ry % p);

        // vertical line through P and -P, this includes doubling a point with y = 0
        if lx == rx && add_mod(&ly, &ry, p).is_zero() {
            return Ok(CurvePoint::Infinity);
        }

        let (dy, dx) = if lx == rx && ly == ry {
            let x2 = mul_mod(&lx, &lx, p);
            let dy = add_mod(&mul_mod(&BigUint::from(3u8), &x2, p), &params.coeff_a, p);
            (dy, add_mod(&ly, &ly, p))
        } else {
            (sub_mod(&ry, &ly, p), sub_mod(&rx, &lx, p))
        };
        let slope = mul_mod(&dy, &mod_inv(&dx, p)?, p);

        let x = sub_mod(&sub_mod(&mul_mod(&slope, &slope, p), &lx, p), &rx, p);
        let y = sub_mod(&mul_mod(&slope, &sub_mod(&lx, &x, p), p), &ly, p);
        Ok(CurvePoint::new(x, y))
    }

    fn double(&self, point: &CurvePoint) -> Result<CurvePoint, ArithmeticError> {
        self.add(point, point)
    }

    /// Computes `scalar * point` by most-significant-bit-first
    /// double-and-add.
    fn multiply(&self, point: &CurvePoint, scalar: &BigUint) -> Result<CurvePoint, ArithmeticError> {
        if scalar.is_zero() {
            return Err(ArithmeticError::ZeroScalar);
        }
        let mut q = CurvePoint::Infinity;
        for digit in scalar.to_radix_be(2) {
            q = self.double(&q)?;
            if digit == 1 {
                q = self.add(&q, point)?;
            }
        }
        Ok(q)
    }
}

impl EllipticCurve for CurveParameters {
    fn params(&self) -> &CurveParameters {
        self
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown curve: {0}")]
pub struct UnknownCurve(pub String);

/// The curves this crate ships parameters for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Curve {
    Secp128r1,
}

impl Curve {
    pub const ALL: [Curve; 1] = [Curve::Secp128r1];

    pub fn name(&self) -> &'static str {
        self.params().name
    }
}

impl EllipticCurve for Curve {
    fn params(&self) -> &CurveParameters {
        match self {
            Self::Secp128r1 => &*SECP128R1,
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Curve {
    type Err = UnknownCurve;
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|curve| curve.name() == name)
            .copied()
            .ok_or_else(|| UnknownCurve(name.to_string()))
    }
}

// NOTE panics on malformed input, only ever called on the literals below
fn from_be_hex(hex: &str) -> BigUint {
    BigUint::parse_bytes(hex.as_bytes(), 16).expect("malformed hex literal")
}

// SEC 2, section 2.3.1
static SECP128R1: Lazy<CurveParameters> = Lazy::new(|| CurveParameters {
    name: "secp128r1",
    prime_modulus: from_be_hex("fffffffdffffffffffffffffffffffff"),
    coeff_a: from_be_hex("fffffffdfffffffffffffffffffffffc"),
    coeff_b: from_be_hex("e87579c11079f43dd824993c2cee5ed3"),
    generator_x: from_be_hex("161ff7528b899b2d0c28607ca52c5b86"),
    generator_y: from_be_hex("cf5ac8395bafeb13c02da292dded7a83"),
    order: from_be_hex("fffffffe0000000075a30d1b9038a115"),
    bit_size: 128,
});
