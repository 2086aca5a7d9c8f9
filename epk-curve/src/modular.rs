//! Arithmetic on residues modulo an arbitrary-precision modulus.
//!
//! Every function returns a value in `[0, modulus)` regardless of the sign of
//! the intermediate result. Inputs of `add_mod`, `sub_mod` and `mul_mod` are
//! reduced first, so callers may pass unreduced coordinates.

use crate::ArithmeticError;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

pub fn add_mod(lhs: &BigUint, rhs: &BigUint, modulus: &BigUint) -> BigUint {
    (lhs + rhs) % modulus
}

pub fn sub_mod(lhs: &BigUint, rhs: &BigUint, modulus: &BigUint) -> BigUint {
    let lhs = lhs % modulus;
    let rhs = rhs % modulus;
    if lhs >= rhs {
        lhs - rhs
    } else {
        modulus - rhs + lhs
    }
}

pub fn mul_mod(lhs: &BigUint, rhs: &BigUint, modulus: &BigUint) -> BigUint {
    (lhs * rhs) % modulus
}

pub fn neg_mod(number: &BigUint, modulus: &BigUint) -> BigUint {
    sub_mod(&BigUint::zero(), number, modulus)
}

/// Maps a signed integer onto its non-negative representative modulo
/// `modulus`.
pub fn reduce(number: &BigInt, modulus: &BigUint) -> BigUint {
    let modulus = BigInt::from(modulus.clone());
    // mod_floor takes the sign of the (positive) modulus
    number.mod_floor(&modulus).magnitude().clone()
}

/// Returns the `k` in `[0, modulus)` with `k * number = 1 (mod modulus)`.
///
/// Runs the iterative extended Euclidean algorithm, carrying only the Bézout
/// coefficient of `number`.
pub fn mod_inv(number: &BigUint, modulus: &BigUint) -> Result<BigUint, ArithmeticError> {
    if modulus.is_zero() {
        return Err(ArithmeticError::ZeroModulus);
    }

    let mut r_prev = BigInt::from(modulus.clone());
    let mut r_curr = BigInt::from(number % modulus);
    let mut t_prev = BigInt::zero();
    let mut t_curr = BigInt::one();

    while !r_curr.is_zero() {
        let (quotient, remainder) = r_prev.div_rem(&r_curr);
        r_prev = std::mem::replace(&mut r_curr, remainder);
        let t_next = &t_prev - &quotient * &t_curr;
        t_prev = std::mem::replace(&mut t_curr, t_next);
    }

    // r_prev now holds gcd(number, modulus)
    if !r_prev.is_one() {
        return Err(ArithmeticError::NotInvertible(
            number.clone(),
            modulus.clone(),
        ));
    }

    Ok(reduce(&t_prev, modulus))
}
