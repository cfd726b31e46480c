//! Generation tables for the per-kind expression family.
//!
//! One table entry per numeric kind expands into the non-nullable and
//! nullable expression structs plus their capability impls; the arithmetic
//! pair macros expand the promotion table in `expr/arithmetic.rs`. This is
//! the single place the repetitive per-kind surface is written down.

/// Expands the full expression pair (`ToK` / `ToKNullable`) for one kind.
macro_rules! numeric_expr {
    (
        expr: $expr:ident,
        nullable: $nullable:ident,
        primitive: $p:ty,
        apply: $apply:ident,
        tag: $tag:ident,
        nullable_tag: $nullable_tag:ident,
        hash: $hash:path,
        compare: $cmp:path,
        abs: $abs:expr,
        negate: $negate:expr,
        sign: $sign:expr,
        widen: $widen:expr,
    ) => {
        pub struct $expr<T> {
            eval: $crate::expr::EvalFn<T, $p>,
        }

        impl<T: 'static> $expr<T> {
            /// Wrap a total closure as an expression.
            ///
            /// Expressions built this way never fail to evaluate; only
            /// `or_throw` and floor-divide derivations introduce errors.
            pub fn new(f: impl Fn(&T) -> $p + Send + Sync + 'static) -> Self {
                Self {
                    eval: ::std::sync::Arc::new(move |input| Ok(f(input))),
                }
            }

            /// Wrap an already-fallible evaluation closure.
            pub fn fallible(
                f: impl Fn(&T) -> Result<$p, $crate::error::EvalError> + Send + Sync + 'static,
            ) -> Self {
                Self {
                    eval: ::std::sync::Arc::new(f),
                }
            }

            /// Expression that ignores its input and yields `value`.
            #[must_use]
            pub fn constant(value: $p) -> Self {
                Self::fallible(move |_| Ok(value))
            }

            /// Evaluate against a domain value.
            pub fn $apply(&self, input: &T) -> Result<$p, $crate::error::EvalError> {
                (self.eval)(input)
            }

            /// 64-bit hash of the evaluated value, consistent with boxed
            /// equality (see `crate::hash`).
            pub fn hash(&self, input: &T) -> Result<u64, $crate::error::EvalError> {
                Ok($hash(self.$apply(input)?))
            }

            /// Total order over two domain values under this expression.
            pub fn compare(
                &self,
                first: &T,
                second: &T,
            ) -> Result<::std::cmp::Ordering, $crate::error::EvalError> {
                Ok($cmp(self.$apply(first)?, self.$apply(second)?))
            }

            /// Derive a same-kind expression by post-mapping the value.
            #[must_use]
            pub fn map(&self, op: impl Fn($p) -> $p + Send + Sync + 'static) -> Self {
                let eval = self.evaluator();
                Self::fallible(move |input| Ok(op(eval(input)?)))
            }

            /// Derive a double expression by post-mapping the value.
            #[must_use]
            pub fn map_to_double(
                &self,
                op: impl Fn($p) -> f64 + Send + Sync + 'static,
            ) -> $crate::expr::ToDouble<T> {
                let eval = self.evaluator();
                $crate::expr::ToDouble::fallible(move |input| Ok(op(eval(input)?)))
            }

            /// Widening view of this expression as a double expression.
            #[must_use]
            pub fn as_double(&self) -> $crate::expr::ToDouble<T> {
                let widen = $widen;
                let eval = self.evaluator();
                $crate::expr::ToDouble::fallible(move |input| Ok(widen(eval(input)?)))
            }

            /// Never-null view, for composing with nullable operands.
            #[must_use]
            pub fn as_nullable(&self) -> $nullable<T> {
                let eval = self.evaluator();
                $nullable::fallible(move |input| Ok(Some(eval(input)?)))
            }

            pub(crate) fn evaluator(&self) -> $crate::expr::EvalFn<T, $p> {
                ::std::sync::Arc::clone(&self.eval)
            }
        }

        impl<T> Clone for $expr<T> {
            fn clone(&self) -> Self {
                Self {
                    eval: ::std::sync::Arc::clone(&self.eval),
                }
            }
        }

        impl<T> ::std::fmt::Debug for $expr<T> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(stringify!($expr))
                    .field("expression_type", &$crate::kind::ExpressionType::$tag)
                    .finish_non_exhaustive()
            }
        }

        impl<T> $crate::expr::Expression<T> for $expr<T> {
            fn expression_type(&self) -> $crate::kind::ExpressionType {
                $crate::kind::ExpressionType::$tag
            }
        }

        impl<T: 'static> $crate::expr::ops::Abs for $expr<T> {
            type Output = Self;

            fn abs(&self) -> Self {
                self.map($abs)
            }
        }

        impl<T: 'static> $crate::expr::ops::Negate for $expr<T> {
            type Output = Self;

            fn negate(&self) -> Self {
                self.map($negate)
            }
        }

        impl<T: 'static> $crate::expr::ops::Sign for $expr<T> {
            type Output = $crate::expr::ToByte<T>;

            fn sign(&self) -> Self::Output {
                let sign = $sign;
                let eval = self.evaluator();
                $crate::expr::ToByte::fallible(move |input| Ok(sign(eval(input)?)))
            }
        }

        impl<T: 'static> $crate::expr::ops::Sqrt for $expr<T> {
            type Output = $crate::expr::ToDouble<T>;

            fn sqrt(&self) -> Self::Output {
                let widen = $widen;
                let eval = self.evaluator();
                $crate::expr::ToDouble::fallible(move |input| Ok(widen(eval(input)?).sqrt()))
            }
        }

        impl<T: 'static> $crate::expr::ops::Pow<f64> for $expr<T> {
            type Output = $crate::expr::ToDouble<T>;

            fn pow(&self, exponent: f64) -> Self::Output {
                let widen = $widen;
                let eval = self.evaluator();
                $crate::expr::ToDouble::fallible(move |input| Ok(widen(eval(input)?).powf(exponent)))
            }
        }

        impl<'e, T: 'static> $crate::expr::ops::Pow<&'e $crate::expr::ToDouble<T>> for $expr<T> {
            type Output = $crate::expr::ToDouble<T>;

            fn pow(&self, exponent: &'e $crate::expr::ToDouble<T>) -> Self::Output {
                let widen = $widen;
                let base = self.evaluator();
                let exp = exponent.evaluator();
                $crate::expr::ToDouble::fallible(move |input| {
                    Ok(widen(base(input)?).powf(exp(input)?))
                })
            }
        }

        pub struct $nullable<T> {
            eval: $crate::expr::EvalFn<T, Option<$p>>,
        }

        impl<T: 'static> $nullable<T> {
            /// Wrap a partial closure; `None` means "no value for this input".
            pub fn new(f: impl Fn(&T) -> Option<$p> + Send + Sync + 'static) -> Self {
                Self {
                    eval: ::std::sync::Arc::new(move |input| Ok(f(input))),
                }
            }

            /// Wrap an already-fallible evaluation closure.
            pub fn fallible(
                f: impl Fn(&T) -> Result<Option<$p>, $crate::error::EvalError>
                    + Send
                    + Sync
                    + 'static,
            ) -> Self {
                Self {
                    eval: ::std::sync::Arc::new(f),
                }
            }

            /// Expression that ignores its input and yields `value`.
            #[must_use]
            pub fn constant(value: Option<$p>) -> Self {
                Self::fallible(move |_| Ok(value))
            }

            /// Boxed accessor; `None` means the expression is null here.
            pub fn apply(&self, input: &T) -> Result<Option<$p>, $crate::error::EvalError> {
                (self.eval)(input)
            }

            /// Unchecked primitive accessor.
            ///
            /// Fails with `NullValue` where the expression is null; prefer
            /// `is_null`/`or_else` guards over catching that failure.
            pub fn $apply(&self, input: &T) -> Result<$p, $crate::error::EvalError> {
                self.apply(input)?.ok_or($crate::error::EvalError::NullValue)
            }

            /// Non-nullable view that fails with `NullValue` where null.
            #[must_use]
            pub fn or_throw(&self) -> $expr<T> {
                let eval = self.evaluator();
                $expr::fallible(move |input| {
                    eval(input)?.ok_or($crate::error::EvalError::NullValue)
                })
            }

            /// Non-nullable view substituting `value` where null.
            ///
            /// Decides on the boxed view only, so an undefined primitive
            /// accessor is never invoked for null inputs.
            #[must_use]
            pub fn or_else(&self, value: $p) -> $expr<T> {
                let eval = self.evaluator();
                $expr::fallible(move |input| Ok(eval(input)?.unwrap_or(value)))
            }

            /// Non-nullable view evaluating `getter` where null.
            #[must_use]
            pub fn or_else_get(&self, getter: &$expr<T>) -> $expr<T> {
                let eval = self.evaluator();
                let fallback = getter.evaluator();
                $expr::fallible(move |input| match eval(input)? {
                    Some(value) => Ok(value),
                    None => fallback(input),
                })
            }

            /// Same-kind nullable derivation; nullness is forwarded
            /// unchanged and `op` runs only where a value is present.
            #[must_use]
            pub fn map_if_present(
                &self,
                op: impl Fn($p) -> $p + Send + Sync + 'static,
            ) -> Self {
                let eval = self.evaluator();
                Self::fallible(move |input| Ok(eval(input)?.map(&op)))
            }

            /// Cross-kind variant of `map_if_present` producing a nullable
            /// double expression; the null-forwarding law is identical.
            #[must_use]
            pub fn map_to_double_if_present(
                &self,
                op: impl Fn($p) -> f64 + Send + Sync + 'static,
            ) -> $crate::expr::ToDoubleNullable<T> {
                let eval = self.evaluator();
                $crate::expr::ToDoubleNullable::fallible(move |input| Ok(eval(input)?.map(&op)))
            }

            /// Widening null-forwarding view as a nullable double.
            #[must_use]
            pub fn as_double(&self) -> $crate::expr::ToDoubleNullable<T> {
                let widen = $widen;
                let eval = self.evaluator();
                $crate::expr::ToDoubleNullable::fallible(move |input| {
                    Ok(eval(input)?.map(&widen))
                })
            }

            /// 64-bit hash; null hashes to the fixed sentinel `0`.
            pub fn hash(&self, input: &T) -> Result<u64, $crate::error::EvalError> {
                Ok(match self.apply(input)? {
                    None => 0,
                    Some(value) => $hash(value),
                })
            }

            /// Total order with nulls sorting greater than every value.
            pub fn compare(
                &self,
                first: &T,
                second: &T,
            ) -> Result<::std::cmp::Ordering, $crate::error::EvalError> {
                let first = self.apply(first)?;
                let second = self.apply(second)?;
                Ok($crate::compare::cmp_nullable(first, second, $cmp))
            }

            pub(crate) fn evaluator(&self) -> $crate::expr::EvalFn<T, Option<$p>> {
                ::std::sync::Arc::clone(&self.eval)
            }
        }

        impl<T> Clone for $nullable<T> {
            fn clone(&self) -> Self {
                Self {
                    eval: ::std::sync::Arc::clone(&self.eval),
                }
            }
        }

        impl<T> ::std::fmt::Debug for $nullable<T> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(stringify!($nullable))
                    .field("expression_type", &$crate::kind::ExpressionType::$nullable_tag)
                    .finish_non_exhaustive()
            }
        }

        impl<T> $crate::expr::Expression<T> for $nullable<T> {
            fn expression_type(&self) -> $crate::kind::ExpressionType {
                $crate::kind::ExpressionType::$nullable_tag
            }
        }

        impl<T: 'static> $crate::expr::NullableExpression<T> for $nullable<T> {
            fn is_null(&self, input: &T) -> Result<bool, $crate::error::EvalError> {
                Ok(self.apply(input)?.is_none())
            }
        }

        impl<T: 'static> $crate::expr::ops::Abs for $nullable<T> {
            type Output = Self;

            fn abs(&self) -> Self {
                self.map_if_present($abs)
            }
        }

        impl<T: 'static> $crate::expr::ops::Negate for $nullable<T> {
            type Output = Self;

            fn negate(&self) -> Self {
                self.map_if_present($negate)
            }
        }

        impl<T: 'static> $crate::expr::ops::Sign for $nullable<T> {
            type Output = $crate::expr::ToByteNullable<T>;

            fn sign(&self) -> Self::Output {
                let sign = $sign;
                let eval = self.evaluator();
                $crate::expr::ToByteNullable::fallible(move |input| Ok(eval(input)?.map(&sign)))
            }
        }

        impl<T: 'static> $crate::expr::ops::Sqrt for $nullable<T> {
            type Output = $crate::expr::ToDoubleNullable<T>;

            fn sqrt(&self) -> Self::Output {
                let widen = $widen;
                let eval = self.evaluator();
                $crate::expr::ToDoubleNullable::fallible(move |input| {
                    Ok(eval(input)?.map(|value| widen(value).sqrt()))
                })
            }
        }
    };
}

/// Expands one ordered operand pair of the arithmetic promotion table.
///
/// `@int`/`@float` select wrapping vs IEEE arithmetic in the output kind;
/// the `_null` arms lift the same pair over nullable operands (result is
/// null wherever either operand is null).
macro_rules! arith_pair {
    (@int $lhs:ident, $rhs:ident => $out:ident : $prim:ty) => {
        impl<T: 'static> Arithmetic<$rhs<T>> for $lhs<T> {
            type Output = $out<T>;

            fn plus(&self, other: &$rhs<T>) -> $out<T> {
                let (a, b) = (self.evaluator(), other.evaluator());
                $out::fallible(move |input| {
                    Ok((a(input)? as $prim).wrapping_add(b(input)? as $prim))
                })
            }

            fn minus(&self, other: &$rhs<T>) -> $out<T> {
                let (a, b) = (self.evaluator(), other.evaluator());
                $out::fallible(move |input| {
                    Ok((a(input)? as $prim).wrapping_sub(b(input)? as $prim))
                })
            }

            fn multiply(&self, other: &$rhs<T>) -> $out<T> {
                let (a, b) = (self.evaluator(), other.evaluator());
                $out::fallible(move |input| {
                    Ok((a(input)? as $prim).wrapping_mul(b(input)? as $prim))
                })
            }
        }

        arith_pair!(@divide $lhs, $rhs);
    };
    (@float $lhs:ident, $rhs:ident => $out:ident : $prim:ty) => {
        impl<T: 'static> Arithmetic<$rhs<T>> for $lhs<T> {
            type Output = $out<T>;

            fn plus(&self, other: &$rhs<T>) -> $out<T> {
                let (a, b) = (self.evaluator(), other.evaluator());
                $out::fallible(move |input| Ok((a(input)? as $prim) + (b(input)? as $prim)))
            }

            fn minus(&self, other: &$rhs<T>) -> $out<T> {
                let (a, b) = (self.evaluator(), other.evaluator());
                $out::fallible(move |input| Ok((a(input)? as $prim) - (b(input)? as $prim)))
            }

            fn multiply(&self, other: &$rhs<T>) -> $out<T> {
                let (a, b) = (self.evaluator(), other.evaluator());
                $out::fallible(move |input| Ok((a(input)? as $prim) * (b(input)? as $prim)))
            }
        }

        arith_pair!(@divide $lhs, $rhs);
    };
    (@divide $lhs:ident, $rhs:ident) => {
        impl<T: 'static> Divide<$rhs<T>> for $lhs<T> {
            type Output = ToDouble<T>;

            fn divide(&self, divisor: &$rhs<T>) -> ToDouble<T> {
                let (a, b) = (self.evaluator(), divisor.evaluator());
                ToDouble::fallible(move |input| Ok(a(input)? as f64 / b(input)? as f64))
            }
        }
    };
    (@int_null $lhs:ident, $rhs:ident => $out:ident : $prim:ty) => {
        impl<T: 'static> Arithmetic<$rhs<T>> for $lhs<T> {
            type Output = $out<T>;

            fn plus(&self, other: &$rhs<T>) -> $out<T> {
                let (a, b) = (self.evaluator(), other.evaluator());
                $out::fallible(move |input| match (a(input)?, b(input)?) {
                    (Some(x), Some(y)) => Ok(Some((x as $prim).wrapping_add(y as $prim))),
                    _ => Ok(None),
                })
            }

            fn minus(&self, other: &$rhs<T>) -> $out<T> {
                let (a, b) = (self.evaluator(), other.evaluator());
                $out::fallible(move |input| match (a(input)?, b(input)?) {
                    (Some(x), Some(y)) => Ok(Some((x as $prim).wrapping_sub(y as $prim))),
                    _ => Ok(None),
                })
            }

            fn multiply(&self, other: &$rhs<T>) -> $out<T> {
                let (a, b) = (self.evaluator(), other.evaluator());
                $out::fallible(move |input| match (a(input)?, b(input)?) {
                    (Some(x), Some(y)) => Ok(Some((x as $prim).wrapping_mul(y as $prim))),
                    _ => Ok(None),
                })
            }
        }

        arith_pair!(@divide_null $lhs, $rhs);
    };
    (@float_null $lhs:ident, $rhs:ident => $out:ident : $prim:ty) => {
        impl<T: 'static> Arithmetic<$rhs<T>> for $lhs<T> {
            type Output = $out<T>;

            fn plus(&self, other: &$rhs<T>) -> $out<T> {
                let (a, b) = (self.evaluator(), other.evaluator());
                $out::fallible(move |input| match (a(input)?, b(input)?) {
                    (Some(x), Some(y)) => Ok(Some((x as $prim) + (y as $prim))),
                    _ => Ok(None),
                })
            }

            fn minus(&self, other: &$rhs<T>) -> $out<T> {
                let (a, b) = (self.evaluator(), other.evaluator());
                $out::fallible(move |input| match (a(input)?, b(input)?) {
                    (Some(x), Some(y)) => Ok(Some((x as $prim) - (y as $prim))),
                    _ => Ok(None),
                })
            }

            fn multiply(&self, other: &$rhs<T>) -> $out<T> {
                let (a, b) = (self.evaluator(), other.evaluator());
                $out::fallible(move |input| match (a(input)?, b(input)?) {
                    (Some(x), Some(y)) => Ok(Some((x as $prim) * (y as $prim))),
                    _ => Ok(None),
                })
            }
        }

        arith_pair!(@divide_null $lhs, $rhs);
    };
    (@divide_null $lhs:ident, $rhs:ident) => {
        impl<T: 'static> Divide<$rhs<T>> for $lhs<T> {
            type Output = ToDoubleNullable<T>;

            fn divide(&self, divisor: &$rhs<T>) -> ToDoubleNullable<T> {
                let (a, b) = (self.evaluator(), divisor.evaluator());
                ToDoubleNullable::fallible(move |input| match (a(input)?, b(input)?) {
                    (Some(x), Some(y)) => Ok(Some(x as f64 / y as f64)),
                    _ => Ok(None),
                })
            }
        }
    };
}

/// Expands one integral operand pair of the floor-division table.
macro_rules! floor_pair {
    ($lhs:ident, $rhs:ident => $out:ident : $prim:ty) => {
        impl<T: 'static> DivideFloor<$rhs<T>> for $lhs<T> {
            type Output = $out<T>;

            fn divide_floor(&self, divisor: &$rhs<T>) -> $out<T> {
                let (a, b) = (self.evaluator(), divisor.evaluator());
                $out::fallible(move |input| {
                    let quotient = floor_div(i64::from(a(input)?), i64::from(b(input)?))?;
                    Ok(quotient as $prim)
                })
            }
        }
    };
}
