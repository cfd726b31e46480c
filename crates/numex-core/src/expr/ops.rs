//! Orthogonal capability traits implemented once per kind.
//!
//! The output kind of every operator is fixed by the associated `Output`
//! type, so widening is enforced purely through return types and never
//! through runtime checks. Composition never evaluates an operand.

use crate::error::EvalError;

///
/// Abs
///
/// Absolute value at the expression's own kind. Integral kinds wrap at
/// MIN (reference semantics), float kinds clear the sign bit.
///

pub trait Abs {
    type Output;

    #[must_use]
    fn abs(&self) -> Self::Output;
}

///
/// Negate
///
/// Arithmetic negation at the expression's own kind, wrapping at integral
/// MIN.
///

pub trait Negate {
    type Output;

    #[must_use]
    fn negate(&self) -> Self::Output;
}

///
/// Sign
///
/// Signum as a byte expression: -1, 0 or 1 (NaN maps to 0).
///

pub trait Sign {
    type Output;

    #[must_use]
    fn sign(&self) -> Self::Output;
}

///
/// Sqrt
///
/// Square root, always promoted to a double expression.
///

pub trait Sqrt {
    type Output;

    #[must_use]
    fn sqrt(&self) -> Self::Output;
}

///
/// Pow
///
/// Exponentiation, always promoted to a double expression so that
/// negative and fractional exponents cannot fail.
///

pub trait Pow<Exponent> {
    type Output;

    #[must_use]
    fn pow(&self, exponent: Exponent) -> Self::Output;
}

///
/// Arithmetic
///
/// Plus/minus/multiply between two expressions; the result kind follows
/// the promotion lattice (`Kind::combine`).
///

pub trait Arithmetic<Rhs = Self> {
    type Output;

    #[must_use]
    fn plus(&self, other: &Rhs) -> Self::Output;

    #[must_use]
    fn minus(&self, other: &Rhs) -> Self::Output;

    #[must_use]
    fn multiply(&self, other: &Rhs) -> Self::Output;
}

///
/// Divide
///
/// Exact division, always promoted to a double expression; division by
/// zero is an IEEE result (infinity/NaN), never an error.
///

pub trait Divide<Rhs = Self> {
    type Output;

    #[must_use]
    fn divide(&self, divisor: &Rhs) -> Self::Output;
}

///
/// DivideFloor
///
/// Truncating division with explicit floor semantics, defined for
/// integral kinds only; the result kind steps one width up
/// (`Kind::combine_floor`). Division by zero fails with
/// `EvalError::DivisionByZero`.
///

pub trait DivideFloor<Rhs = Self> {
    type Output;

    #[must_use]
    fn divide_floor(&self, divisor: &Rhs) -> Self::Output;
}

/// Floor division over sign-extended operands.
///
/// Matches the reference `floorDiv`: the quotient rounds toward negative
/// infinity, `MIN / -1` wraps, and a zero divisor is the one arithmetic
/// domain error of the algebra.
pub(crate) fn floor_div(dividend: i64, divisor: i64) -> Result<i64, EvalError> {
    if divisor == 0 {
        return Err(EvalError::DivisionByZero);
    }

    let quotient = dividend.wrapping_div(divisor);
    let remainder = dividend.wrapping_rem(divisor);

    // round toward negative infinity when the signs disagree
    if remainder != 0 && (remainder < 0) != (divisor < 0) {
        Ok(quotient - 1)
    } else {
        Ok(quotient)
    }
}

///
/// TESTS
///
