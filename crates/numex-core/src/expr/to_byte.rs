use crate::expr::{ToInt, ToLong};

///
/// ToByte / ToByteNullable
///
/// 8-bit signed integer expressions.
///

numeric_expr! {
    expr: ToByte,
    nullable: ToByteNullable,
    primitive: i8,
    apply: apply_as_byte,
    tag: Byte,
    nullable_tag: ByteNullable,
    hash: crate::hash::hash_i8,
    compare: crate::compare::cmp_i8,
    abs: |value: i8| value.wrapping_abs(),
    negate: |value: i8| value.wrapping_neg(),
    sign: |value: i8| value.signum(),
    widen: |value: i8| f64::from(value),
}

impl<T: 'static> ToByte<T> {
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

#[cfg(test)]
mod tests {
    use super::{ToByte, ToByteNullable};
    use crate::expr::ops::{Abs, Negate, Sign};

    #[test]
    fn abs_and_negate_wrap_at_min() {
        let value = ToByte::new(|n: &i8| *n);
        assert_eq!(value.abs().apply_as_byte(&i8::MIN), Ok(i8::MIN));
        assert_eq!(value.negate().apply_as_byte(&i8::MIN), Ok(i8::MIN));
        assert_eq!(value.abs().apply_as_byte(&-7), Ok(7));
    }

    #[test]
    fn sign_is_a_byte_expression() {
        let value = ToByte::new(|n: &i8| *n);
        assert_eq!(value.sign().apply_as_byte(&-5), Ok(-1));
        assert_eq!(value.sign().apply_as_byte(&0), Ok(0));
        assert_eq!(value.sign().apply_as_byte(&3), Ok(1));
    }

    #[test]
    fn widening_views_preserve_the_value() {
        let value = ToByte::new(|n: &i8| *n);
        assert_eq!(value.as_int().apply_as_int(&-100), Ok(-100));
        assert_eq!(value.as_long().apply_as_long(&i8::MAX), Ok(127));
        assert_eq!(value.as_double().apply_as_double(&-1), Ok(-1.0));
    }

    #[test]
    fn nullable_sign_propagates_null() {
        let value = ToByteNullable::new(|n: &i8| (*n != 0).then_some(*n));
        assert_eq!(value.sign().apply(&0), Ok(None));
        assert_eq!(value.sign().apply(&-9), Ok(Some(-1)));
    }
}
