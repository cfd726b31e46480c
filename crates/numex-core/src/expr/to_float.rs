use crate::expr::{ToInt, ToLong};

///
/// ToFloat / ToFloatNullable
///
/// 32-bit IEEE-754 expressions. NaN and infinity are ordinary results;
/// hashing and comparison follow the reference semantics in
/// `crate::hash` / `crate::compare`.
///

numeric_expr! {
    expr: ToFloat,
    nullable: ToFloatNullable,
    primitive: f32,
    apply: apply_as_float,
    tag: Float,
    nullable_tag: FloatNullable,
    hash: crate::hash::hash_f32,
    compare: crate::compare::cmp_f32,
    abs: |value: f32| value.abs(),
    negate: |value: f32| -value,
    sign: |value: f32| {
        if value > 0.0 {
            1
        } else if value < 0.0 {
            -1
        } else {
            0
        }
    },
    widen: |value: f32| f64::from(value),
}

impl<T: 'static> ToFloat<T> {
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
    use super::{ToFloat, ToFloatNullable};
    use crate::expr::ops::{Sign, Sqrt};
    use std::cmp::Ordering;

    #[test]
    fn negative_zero_hashes_to_canonical_zero() {
        let value = ToFloat::new(|_: &()| -0.0f32);
        assert_eq!(value.hash(&()), Ok(0));

        let value = ToFloat::new(|_: &()| 0.0f32);
        assert_eq!(value.hash(&()), Ok(0));
    }

    #[test]
    fn compare_uses_the_reference_order() {
        let value = ToFloat::new(|v: &f32| *v);

        assert_eq!(value.compare(&-0.0, &0.0), Ok(Ordering::Less));
        assert_eq!(value.compare(&f32::NAN, &f32::INFINITY), Ok(Ordering::Greater));
        assert_eq!(value.compare(&f32::NAN, &f32::NAN), Ok(Ordering::Equal));
        assert_eq!(value.compare(&1.0, &2.0), Ok(Ordering::Less));
    }

    #[test]
    fn sign_maps_nan_to_zero() {
        let value = ToFloat::new(|v: &f32| *v);
        assert_eq!(value.sign().apply_as_byte(&f32::NAN), Ok(0));
        assert_eq!(value.sign().apply_as_byte(&-3.5), Ok(-1));
        assert_eq!(value.sign().apply_as_byte(&0.5), Ok(1));
    }

    #[test]
    fn truncating_views_round_toward_zero() {
        let value = ToFloat::new(|v: &f32| *v);
        assert_eq!(value.as_int().apply_as_int(&-2.9), Ok(-2));
        assert_eq!(value.as_long().apply_as_long(&2.9), Ok(2));
        assert_eq!(value.as_int().apply_as_int(&f32::NAN), Ok(0));
    }

    #[test]
    fn sqrt_of_a_negative_is_nan_not_an_error() {
        let value = ToFloat::new(|v: &f32| *v);
        let root = value.sqrt().apply_as_double(&-1.0).unwrap();
        assert!(root.is_nan());
    }

    #[test]
    fn nullable_map_to_double_forwards_null() {
        let value = ToFloatNullable::new(|v: &f32| v.is_finite().then_some(*v));
        let mapped = value.map_to_double_if_present(|v| f64::from(v) * 2.0);

        assert_eq!(mapped.apply(&f32::INFINITY), Ok(None));
        assert_eq!(mapped.apply(&1.5), Ok(Some(3.0)));
    }
}
