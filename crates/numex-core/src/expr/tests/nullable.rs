//! Null-propagation laws across the nullable half of the family.

use crate::{
    error::EvalError,
    expr::{
        Expression, NullableExpression, ToInt, ToIntNullable, ToLongNullable,
        ops::{Arithmetic, Divide},
    },
    kind::ExpressionType,
};
use std::cmp::Ordering;

fn even_only() -> ToIntNullable<i32> {
    ToIntNullable::new(|n: &i32| (*n % 2 == 0).then_some(*n))
}

#[test]
fn nullable_arithmetic_mirrors_the_lattice() {
    let int = even_only();
    let long = ToLongNullable::new(|n: &i32| i64::from(*n).checked_mul(2));

    let sum = int.plus(&long);
    assert_eq!(sum.expression_type(), ExpressionType::DoubleNullable);
    assert_eq!(sum.apply(&4), Ok(Some(12.0)));
    assert_eq!(sum.apply(&3), Ok(None));

    let ratio = int.divide(&long);
    assert_eq!(ratio.expression_type(), ExpressionType::DoubleNullable);
    assert_eq!(ratio.apply(&4), Ok(Some(0.5)));
    assert_eq!(ratio.apply(&3), Ok(None));
}

#[test]
fn result_is_null_when_either_operand_is() {
    let left = ToIntNullable::<i32>::constant(Some(1));
    let right = ToIntNullable::constant(None);

    assert_eq!(left.plus(&right).apply(&0), Ok(None));
    assert_eq!(right.plus(&left).apply(&0), Ok(None));
    assert_eq!(right.multiply(&right).apply(&0), Ok(None));
    assert_eq!(left.minus(&left).apply(&0), Ok(Some(0)));
}

#[test]
fn lifting_mixes_nullable_and_non_nullable_operands() {
    let total = ToInt::new(|n: &i32| *n).as_nullable().plus(&even_only());

    assert_eq!(total.expression_type(), ExpressionType::IntNullable);
    assert_eq!(total.apply(&4), Ok(Some(8)));
    assert_eq!(total.apply(&3), Ok(None));
}

#[test]
fn lifted_expressions_are_never_null() {
    let lifted = ToInt::new(|n: &i32| *n).as_nullable();

    for input in [-7, 0, 7] {
        assert_eq!(lifted.is_null(&input), Ok(false));
        assert_eq!(lifted.is_not_null(&input), Ok(true));
    }
}

#[test]
fn or_else_substitutes_null_but_forwards_errors() {
    let source = even_only();
    assert_eq!(source.or_else(9).apply_as_int(&3), Ok(9));
    assert_eq!(source.or_else(9).apply_as_int(&4), Ok(4));

    // or_throw makes nullness an evaluation failure; a later or_else must
    // not paper over it.
    let strict = source.or_throw().as_nullable();
    assert_eq!(strict.or_else(9).apply_as_int(&4), Ok(4));
    assert_eq!(strict.or_else(9).apply_as_int(&3), Err(EvalError::NullValue));
}

#[test]
fn derivations_forward_nullness_unchanged() {
    let source = even_only();

    let mapped = source.map_if_present(|n| n.wrapping_add(1));
    assert_eq!(mapped.apply(&4), Ok(Some(5)));
    assert_eq!(mapped.apply(&3), Ok(None));

    let widened = source.as_double();
    assert_eq!(widened.apply(&4), Ok(Some(4.0)));
    assert_eq!(widened.apply(&3), Ok(None));
}

#[test]
fn composite_compare_sorts_null_last() {
    let source = even_only();

    assert_eq!(source.compare(&2, &4), Ok(Ordering::Less));
    assert_eq!(source.compare(&4, &3), Ok(Ordering::Less));
    assert_eq!(source.compare(&3, &4), Ok(Ordering::Greater));
    assert_eq!(source.compare(&3, &5), Ok(Ordering::Equal));
}

#[test]
fn composite_null_hashes_to_the_sentinel() {
    let sum = even_only().plus(&even_only());
    assert_eq!(sum.hash(&3), Ok(0));
    assert_ne!(sum.hash(&4), Ok(0));
}
