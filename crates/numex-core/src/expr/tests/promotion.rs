//! Composite expression types against the promotion lattice.

use crate::{
    expr::{
        Expression, ToByte, ToDouble, ToFloat, ToInt, ToLong, ToShort,
        ops::{Arithmetic, Divide, DivideFloor},
    },
    kind::{ExpressionType, Kind},
};

fn byte() -> ToByte<i64> {
    ToByte::new(|n: &i64| *n as i8)
}

fn short() -> ToShort<i64> {
    ToShort::new(|n: &i64| *n as i16)
}

fn int() -> ToInt<i64> {
    ToInt::new(|n: &i64| *n as i32)
}

fn long() -> ToLong<i64> {
    ToLong::new(|n: &i64| *n)
}

fn float() -> ToFloat<i64> {
    ToFloat::new(|n: &i64| *n as f32)
}

fn double() -> ToDouble<i64> {
    ToDouble::new(|n: &i64| *n as f64)
}

macro_rules! check_pair {
    ($lhs:expr, $rhs:expr) => {{
        let lhs = $lhs;
        let rhs = $rhs;
        let expected = lhs
            .expression_type()
            .kind()
            .combine(rhs.expression_type().kind());

        assert_eq!(lhs.plus(&rhs).expression_type().kind(), expected);
        assert_eq!(lhs.minus(&rhs).expression_type().kind(), expected);
        assert_eq!(lhs.multiply(&rhs).expression_type().kind(), expected);
        assert!(!lhs.plus(&rhs).expression_type().is_nullable());

        assert_eq!(lhs.divide(&rhs).expression_type(), ExpressionType::Double);
    }};
}

macro_rules! check_floor_pair {
    ($lhs:expr, $rhs:expr) => {{
        let lhs = $lhs;
        let rhs = $rhs;
        let expected = lhs
            .expression_type()
            .kind()
            .combine_floor(rhs.expression_type().kind());

        assert_eq!(lhs.divide_floor(&rhs).expression_type().kind(), expected);
    }};
}

#[test]
fn every_operand_pair_follows_the_lattice() {
    check_pair!(byte(), byte());
    check_pair!(byte(), short());
    check_pair!(byte(), int());
    check_pair!(byte(), long());
    check_pair!(byte(), float());
    check_pair!(byte(), double());

    check_pair!(short(), byte());
    check_pair!(short(), short());
    check_pair!(short(), int());
    check_pair!(short(), long());
    check_pair!(short(), float());
    check_pair!(short(), double());

    check_pair!(int(), byte());
    check_pair!(int(), short());
    check_pair!(int(), int());
    check_pair!(int(), long());
    check_pair!(int(), float());
    check_pair!(int(), double());

    check_pair!(long(), byte());
    check_pair!(long(), short());
    check_pair!(long(), int());
    check_pair!(long(), long());
    check_pair!(long(), float());
    check_pair!(long(), double());

    check_pair!(float(), byte());
    check_pair!(float(), short());
    check_pair!(float(), int());
    check_pair!(float(), long());
    check_pair!(float(), float());
    check_pair!(float(), double());

    check_pair!(double(), byte());
    check_pair!(double(), short());
    check_pair!(double(), int());
    check_pair!(double(), long());
    check_pair!(double(), float());
    check_pair!(double(), double());
}

#[test]
fn every_floor_pair_steps_one_width_up() {
    check_floor_pair!(byte(), byte());
    check_floor_pair!(byte(), short());
    check_floor_pair!(byte(), int());
    check_floor_pair!(byte(), long());

    check_floor_pair!(short(), byte());
    check_floor_pair!(short(), short());
    check_floor_pair!(short(), int());
    check_floor_pair!(short(), long());

    check_floor_pair!(int(), byte());
    check_floor_pair!(int(), short());
    check_floor_pair!(int(), int());
    check_floor_pair!(int(), long());

    check_floor_pair!(long(), byte());
    check_floor_pair!(long(), short());
    check_floor_pair!(long(), int());
    check_floor_pair!(long(), long());
}

#[test]
fn mixed_width_sums_evaluate_at_double() {
    let sum = int().plus(&long());
    assert_eq!(sum.expression_type(), ExpressionType::Double);
    assert_eq!(sum.apply_as_double(&10), Ok(20.0));
    assert_eq!(sum.apply_as_double(&-3), Ok(-6.0));
}

#[test]
fn narrow_operands_promote_before_evaluating() {
    // 100 + 100 overflows a byte but not the promoted int result.
    let total = ToByte::<i64>::constant(100).plus(&ToByte::constant(100));
    assert_eq!(total.expression_type(), ExpressionType::Int);
    assert_eq!(total.apply_as_int(&0), Ok(200));
}

#[test]
fn same_kind_operands_keep_their_kind_past_int() {
    assert_eq!(
        long().plus(&long()).expression_type().kind(),
        Kind::Long
    );
    assert_eq!(
        float().multiply(&float()).expression_type().kind(),
        Kind::Float
    );
    assert_eq!(
        double().minus(&double()).expression_type().kind(),
        Kind::Double
    );
}

#[test]
fn exact_divide_always_lands_on_double() {
    let ratio = byte().divide(&byte());
    assert_eq!(ratio.expression_type(), ExpressionType::Double);
    assert_eq!(ratio.apply_as_double(&5), Ok(1.0));

    let ratio = long().divide(&ToLong::constant(2));
    assert_eq!(ratio.apply_as_double(&5), Ok(2.5));
}
