use crate::expr::{ToInt, ToLong};

///
/// ToShort / ToShortNullable
///
/// 16-bit signed integer expressions.
///

numeric_expr! {
    expr: ToShort,
    nullable: ToShortNullable,
    primitive: i16,
    apply: apply_as_short,
    tag: Short,
    nullable_tag: ShortNullable,
    hash: crate::hash::hash_i16,
    compare: crate::compare::cmp_i16,
    abs: |value: i16| value.wrapping_abs(),
    negate: |value: i16| value.wrapping_neg(),
    sign: |value: i16| value.signum() as i8,
    widen: |value: i16| f64::from(value),
}

impl<T: 'static> ToShort<T> {
    /// Widening view as an int expression.
    #[must_use]
    pub fn as_int(&self) -> ToInt<T> {
        let eval = self.evaluator();
        ToInt::fallible(move |input| Ok(i32::from(eval(input)?)))
    }

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
