//! Construction facade for composite expressions.
//!
//! Every function here is referentially transparent: it clones the operand
//! handles, builds a fresh composite, and evaluates nothing. Constructing
//! the same composite twice from equal operands is behaviorally
//! indistinguishable.

use crate::expr::{
    Abs, Arithmetic, Divide, DivideFloor, Negate, NullableExpression, Pow, Sign, Sqrt, ToByte,
    ToDouble, ToFloat, ToInt, ToLong, ToShort,
};

/// Sum of two expressions; the result kind follows the promotion table.
#[must_use]
pub fn plus<A, B>(first: &A, second: &B) -> A::Output
where
    A: Arithmetic<B>,
{
    first.plus(second)
}

/// Difference of two expressions.
#[must_use]
pub fn minus<A, B>(first: &A, second: &B) -> A::Output
where
    A: Arithmetic<B>,
{
    first.minus(second)
}

/// Product of two expressions.
#[must_use]
pub fn multiply<A, B>(first: &A, second: &B) -> A::Output
where
    A: Arithmetic<B>,
{
    first.multiply(second)
}

/// Exact quotient, always a double expression.
#[must_use]
pub fn divide<A, B>(dividend: &A, divisor: &B) -> A::Output
where
    A: Divide<B>,
{
    dividend.divide(divisor)
}

/// Floor quotient of two integral expressions, one width step up.
#[must_use]
pub fn divide_floor<A, B>(dividend: &A, divisor: &B) -> A::Output
where
    A: DivideFloor<B>,
{
    dividend.divide_floor(divisor)
}

/// Absolute value at the operand's own kind.
#[must_use]
pub fn abs<E: Abs>(expr: &E) -> E::Output {
    expr.abs()
}

/// Negation at the operand's own kind.
#[must_use]
pub fn negate<E: Negate>(expr: &E) -> E::Output {
    expr.negate()
}

/// Signum as a byte expression.
#[must_use]
pub fn sign<E: Sign>(expr: &E) -> E::Output {
    expr.sign()
}

/// Square root as a double expression.
#[must_use]
pub fn sqrt<E: Sqrt>(expr: &E) -> E::Output {
    expr.sqrt()
}

/// Exponentiation as a double expression.
#[must_use]
pub fn pow<E, P>(expr: &E, power: P) -> E::Output
where
    E: Pow<P>,
{
    expr.pow(power)
}

// Null-propagating spellings of the unary constructors. Same capability
// impls; the bound just documents that the composite is null wherever the
// operand is.

#[must_use]
pub fn abs_or_null<T, E>(expr: &E) -> E::Output
where
    E: Abs + NullableExpression<T>,
{
    expr.abs()
}

#[must_use]
pub fn negate_or_null<T, E>(expr: &E) -> E::Output
where
    E: Negate + NullableExpression<T>,
{
    expr.negate()
}

#[must_use]
pub fn sign_or_null<T, E>(expr: &E) -> E::Output
where
    E: Sign + NullableExpression<T>,
{
    expr.sign()
}

#[must_use]
pub fn sqrt_or_null<T, E>(expr: &E) -> E::Output
where
    E: Sqrt + NullableExpression<T>,
{
    expr.sqrt()
}

/// Literal byte operand.
#[must_use]
pub fn constant_byte<T: 'static>(value: i8) -> ToByte<T> {
    ToByte::constant(value)
}

/// Literal short operand.
#[must_use]
pub fn constant_short<T: 'static>(value: i16) -> ToShort<T> {
    ToShort::constant(value)
}

/// Literal int operand.
#[must_use]
pub fn constant_int<T: 'static>(value: i32) -> ToInt<T> {
    ToInt::constant(value)
}

/// Literal long operand.
#[must_use]
pub fn constant_long<T: 'static>(value: i64) -> ToLong<T> {
    ToLong::constant(value)
}

/// Literal float operand.
#[must_use]
pub fn constant_float<T: 'static>(value: f32) -> ToFloat<T> {
    ToFloat::constant(value)
}

/// Literal double operand.
#[must_use]
pub fn constant_double<T: 'static>(value: f64) -> ToDouble<T> {
    ToDouble::constant(value)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{Expression, ToIntNullable};
    use crate::kind::ExpressionType;

    #[test]
    fn composites_are_referentially_transparent() {
        let base = ToInt::new(|n: &i32| *n);
        let five = constant_int(5);

        let first = plus(&base, &five);
        let second = plus(&base, &five);

        for input in [-3, 0, 9, i32::MAX] {
            assert_eq!(first.apply_as_int(&input), second.apply_as_int(&input));
        }
        assert_eq!(first.expression_type(), second.expression_type());
    }

    #[test]
    fn facade_matches_the_method_surface() {
        let base = ToInt::new(|n: &i32| *n);

        assert_eq!(abs(&base).apply_as_int(&-4), Ok(4));
        assert_eq!(negate(&base).apply_as_int(&4), Ok(-4));
        assert_eq!(sign(&base).apply_as_byte(&-4), Ok(-1));
        assert_eq!(sqrt(&base).apply_as_double(&16), Ok(4.0));
        assert_eq!(pow(&base, 2.0).apply_as_double(&3), Ok(9.0));
        assert_eq!(
            divide(&base, &constant_int(2)).apply_as_double(&5),
            Ok(2.5)
        );
        assert_eq!(
            divide_floor(&base, &constant_int(2)).apply_as_long(&-5),
            Ok(-3)
        );
    }

    #[test]
    fn or_null_constructors_propagate_null() {
        let source = ToIntNullable::new(|n: &i32| (*n >= 0).then_some(*n));

        let absolute = abs_or_null(&source);
        assert_eq!(absolute.expression_type(), ExpressionType::IntNullable);
        assert_eq!(absolute.apply(&-1), Ok(None));
        assert_eq!(absolute.apply(&6), Ok(Some(6)));

        assert_eq!(sqrt_or_null(&source).apply(&-1), Ok(None));
        assert_eq!(sqrt_or_null(&source).apply(&9), Ok(Some(3.0)));
    }
}
