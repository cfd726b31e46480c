//! The per-kind expression family.
//!
//! Each kind `K` contributes a pair of closure-capturing structs: `ToK`, a
//! total function from a domain value to the primitive, and `ToKNullable`,
//! the partial twin whose boxed accessor models absence explicitly.
//! Composition always yields a new expression; evaluation is the only
//! terminal operation and never mutates anything.

use crate::{error::EvalError, kind::ExpressionType};
use std::sync::Arc;

mod arithmetic;
pub mod ops;
mod to_byte;
mod to_double;
mod to_float;
mod to_int;
mod to_long;
mod to_short;

#[cfg(test)]
mod tests;

pub use ops::{Abs, Arithmetic, Divide, DivideFloor, Negate, Pow, Sign, Sqrt};
pub use to_byte::{ToByte, ToByteNullable};
pub use to_double::{ToDouble, ToDoubleNullable};
pub use to_float::{ToFloat, ToFloatNullable};
pub use to_int::{ToInt, ToIntNullable};
pub use to_long::{ToLong, ToLongNullable};
pub use to_short::{ToShort, ToShortNullable};

/// Shared evaluation closure handle. `Arc` so composites can hold the same
/// immutable operand, which keeps concurrent evaluation coordination-free.
pub(crate) type EvalFn<T, V> = Arc<dyn Fn(&T) -> Result<V, EvalError> + Send + Sync>;

///
/// Expression
///
/// Anything tagged with an [`ExpressionType`]. The tag never changes after
/// construction and fully determines the primitive accessor.
///

pub trait Expression<T> {
    fn expression_type(&self) -> ExpressionType;
}

///
/// NullableExpression
///
/// The partial-function contract layered on top of [`Expression`].
///

pub trait NullableExpression<T>: Expression<T> {
    /// True iff evaluating for `input` produces no value.
    ///
    /// Must agree with the boxed accessor: it returns no value exactly
    /// when this predicate holds.
    fn is_null(&self, input: &T) -> Result<bool, EvalError>;

    /// Exact logical negation of [`NullableExpression::is_null`].
    fn is_not_null(&self, input: &T) -> Result<bool, EvalError> {
        Ok(!self.is_null(input)?)
    }
}
