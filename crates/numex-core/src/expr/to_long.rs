///
/// ToLong / ToLongNullable
///
/// 64-bit signed integer expressions. Widening to double is lossy above
/// 2^53; that is the documented cost of the `as_double` view, not an
/// error.
///

numeric_expr! {
    expr: ToLong,
    nullable: ToLongNullable,
    primitive: i64,
    apply: apply_as_long,
    tag: Long,
    nullable_tag: LongNullable,
    hash: crate::hash::hash_i64,
    compare: crate::compare::cmp_i64,
    abs: |value: i64| value.wrapping_abs(),
    negate: |value: i64| value.wrapping_neg(),
    sign: |value: i64| value.signum() as i8,
    widen: |value: i64| value as f64,
}

///
/// TESTS
///
