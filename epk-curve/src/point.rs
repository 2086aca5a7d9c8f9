use num_bigint::BigUint;

use std::fmt;

/// A point of a short Weierstrass curve in affine coordinates.
///
/// Arithmetic is provided by [`EllipticCurve`](crate::EllipticCurve), a
/// point on its own does not know which curve it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum CurvePoint {
    Infinity,
    Affine { x: BigUint, y: BigUint },
}

impl fmt::Display for CurvePoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Infinity => write!(f, "infinity"),
            Self::Affine { x, y } => write!(f, "({:x}, {:x})", x, y),
        }
    }
}

impl From<(BigUint, BigUint)> for CurvePoint {
    fn from((x, y): (BigUint, BigUint)) -> Self {
        Self::Affine { x, y }
    }
}

impl CurvePoint {
    pub const IDENTITY: Self = Self::Infinity;

    pub fn new(x: BigUint, y: BigUint) -> Self {
        Self::Affine { x, y }
    }

    #[inline(always)]
    pub fn is_infinity(&self) -> bool {
        matches!(self, Self::Infinity)
    }

    #[inline(always)]
    pub fn x(&self) -> Option<&BigUint> {
        match self {
            Self::Infinity => None,
            Self::Affine { x, .. } => Some(x),
        }
    }

    #[inline(always)]
    pub fn y(&self) -> Option<&BigUint> {
        match self {
            Self::Infinity => None,
            Self::Affine { y, .. } => Some(y),
        }
    }

    pub fn coordinates(&self) -> Option<(&BigUint, &BigUint)> {
        match self {
            Self::Infinity => None,
            Self::Affine { x, y } => Some((x, y)),
        }
    }
}
