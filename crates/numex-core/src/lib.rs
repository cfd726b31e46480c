//! Core algebra for numex: typed scalar expressions over a generic domain
//! value, nullable twins for every numeric kind, and the promotion-aware
//! operator tables exported via the `prelude`.
#![warn(unreachable_pub)]

#[macro_use]
mod macros;

// public exports are one module level down
pub mod codegen;
pub mod compare;
pub mod error;
pub mod expr;
pub mod expressions;
pub mod hash;
pub mod kind;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// The construction facade stays behind `expressions::` on purpose.
///

pub mod prelude {
    pub use crate::{
        error::EvalError,
        expr::{
            Abs, Arithmetic, Divide, DivideFloor, Expression, Negate, NullableExpression, Pow,
            Sign, Sqrt, ToByte, ToByteNullable, ToDouble, ToDoubleNullable, ToFloat,
            ToFloatNullable, ToInt, ToIntNullable, ToLong, ToLongNullable, ToShort,
            ToShortNullable,
        },
        kind::{ExpressionType, Kind},
    };
}
