use crate::expr::ToLong;

///
/// ToInt / ToIntNullable
///
/// 32-bit signed integer expressions.
///

numeric_expr! {
    expr: ToInt,
    nullable: ToIntNullable,
    primitive: i32,
    apply: apply_as_int,
    tag: Int,
    nullable_tag: IntNullable,
    hash: crate::hash::hash_i32,
    compare: crate::compare::cmp_i32,
    abs: |value: i32| value.wrapping_abs(),
    negate: |value: i32| value.wrapping_neg(),
    sign: |value: i32| value.signum() as i8,
    widen: |value: i32| f64::from(value),
}

impl<T: 'static> ToInt<T> {
    /// Widening view as a long expression.
    #[must_use]
    pub fn as_long(&self) -> ToLong<T> {
        let eval = self.evaluator();
        ToLong::fallible(move |input| Ok(i64::from(eval(input)?)))
    }
}

///
/// TESTS
///
