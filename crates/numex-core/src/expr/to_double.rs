use crate::expr::{ToInt, ToLong};

///
/// ToDouble / ToDoubleNullable
///
/// 64-bit IEEE-754 expressions; the top of the promotion lattice. Every
/// cross-kind operator and every `sqrt`/`pow` lands here.
///

numeric_expr! {
    expr: ToDouble,
    nullable: ToDoubleNullable,
    primitive: f64,
    apply: apply_as_double,
    tag: Double,
    nullable_tag: DoubleNullable,
    hash: crate::hash::hash_f64,
    compare: crate::compare::cmp_f64,
    abs: |value: f64| value.abs(),
    negate: |value: f64| -value,
    sign: |value: f64| {
        if value > 0.0 {
            1
        } else if value < 0.0 {
            -1
        } else {
            0
        }
    },
    widen: |value: f64| value,
}

impl<T: 'static> ToDouble<T> {
    /// Truncating view as an int expression (rounds toward zero,
    /// saturating at the int range; NaN becomes 0).
    #[must_use]
    pub fn as_int(&self) -> ToInt<T> {
        let eval = self.evaluator();
        ToInt::fallible(move |input| Ok(eval(input)? as i32))
    }

    /// Truncating view as a long expression.
    #[must_use]
    pub fn as_long(&self) -> ToLong<T> {
        let eval = self.evaluator();
        ToLong::fallible(move |input| Ok(eval(input)? as i64))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::{ToDouble, ToDoubleNullable};
    use crate::expr::ops::{Divide, Negate, Pow};

    #[test]
    fn exact_divide_by_zero_is_an_ieee_result() {
        let value = ToDouble::new(|v: &f64| *v);
        let zero = ToDouble::constant(0.0);

        let ratio = value.divide(&zero);
        assert_eq!(ratio.apply_as_double(&1.0), Ok(f64::INFINITY));
        assert_eq!(ratio.apply_as_double(&-1.0), Ok(f64::NEG_INFINITY));
        assert!(ratio.apply_as_double(&0.0).unwrap().is_nan());
    }

    #[test]
    fn pow_by_expression_evaluates_both_operands() {
        let base = ToDouble::new(|v: &f64| *v);
        let exponent = ToDouble::constant(3.0);
        assert_eq!(base.pow(&exponent).apply_as_double(&2.0), Ok(8.0));
    }

    #[test]
    fn negate_flips_the_zero_sign() {
        let value = ToDouble::new(|v: &f64| *v);
        let negated = value.negate().apply_as_double(&0.0).unwrap();
        assert!(negated.is_sign_negative());
    }

    #[test]
    fn nullable_or_else_get_falls_back() {
        let value = ToDoubleNullable::new(|v: &f64| v.is_finite().then_some(*v));
        let fallback = ToDouble::constant(0.0);

        let total = value.or_else_get(&fallback);
        assert_eq!(total.apply_as_double(&f64::NAN), Ok(0.0));
        assert_eq!(total.apply_as_double(&2.5), Ok(2.5));
    }
}
