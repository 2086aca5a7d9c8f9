#![deny(clippy::all)]
#![deny(clippy::dbg_macro)]

pub mod curve;
pub mod modular;
mod point;

pub use curve::{Curve, CurveParameters, EllipticCurve, UnknownCurve};
pub use num_bigint::BigUint;
pub use point::CurvePoint;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("scalar multiplier must be greater than zero")]
    ZeroScalar,
    #[error("modulus must be nonzero")]
    ZeroModulus,
    #[error("{0} has no inverse modulo {1}")]
    NotInvertible(BigUint, BigUint),
}
