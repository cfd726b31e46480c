use thiserror::Error as ThisError;

///
/// EvalError
///
/// Failure raised while evaluating an expression against a domain value.
/// Every variant is local and unrecoverable at this layer; callers guard
/// with `is_null`/`or_else` rather than expecting a fault path.
///
/// Floating-point operations never fail: NaN and infinity are values.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum EvalError {
    /// A value was required where the underlying nullable expression
    /// produced none (`or_throw`, or the unchecked primitive accessor).
    #[error("expression produced no value where one was required")]
    NullValue,

    /// Division by zero in the truncating (floor) divide family.
    #[error("floor division by zero")]
    DivisionByZero,
}

///
/// TESTS
///
