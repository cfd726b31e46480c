//! ## Crate layout
//! - `core`: the expression family, promotion tables, hashing and ordering.
//! - `core::expressions`: free-function construction facade.
//! - `core::codegen`: source-rendering helpers for generated bindings.
//!
//! The `prelude` module mirrors the surface used by code that builds and
//! evaluates composite expressions.

pub use numex_core as core;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use core::error::EvalError;

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        error::EvalError,
        expr::{
            Expression as _, NullableExpression as _, ToByte, ToByteNullable, ToDouble,
            ToDoubleNullable, ToFloat, ToFloatNullable, ToInt, ToIntNullable, ToLong,
            ToLongNullable, ToShort, ToShortNullable,
            ops::{
                Abs as _, Arithmetic as _, Divide as _, DivideFloor as _, Negate as _, Pow as _,
                Sign as _, Sqrt as _,
            },
        },
        expressions,
        kind::{ExpressionType, Kind},
    };
}

///
/// TESTS
///
