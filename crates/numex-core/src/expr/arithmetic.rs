//! The promotion table, written out pair by pair.
//!
//! Result kinds follow `Kind::combine` for plus/minus/multiply, always
//! double for exact divide, and `Kind::combine_floor` for the integral
//! floor-divide family. The nullable half of the table mirrors the
//! non-nullable half with result-null-if-either-operand-null semantics;
//! mixed nullability is expressed by lifting the non-nullable operand
//! with `as_nullable()`.

use crate::expr::{
    ToByte, ToByteNullable, ToDouble, ToDoubleNullable, ToFloat, ToFloatNullable, ToInt,
    ToIntNullable, ToLong, ToLongNullable, ToShort, ToShortNullable,
    ops::{Arithmetic, Divide, DivideFloor, floor_div},
};

// byte ⊕ _
arith_pair!(@int ToByte, ToByte => ToInt: i32);
arith_pair!(@int ToByte, ToShort => ToInt: i32);
arith_pair!(@int ToByte, ToInt => ToInt: i32);
arith_pair!(@float ToByte, ToLong => ToDouble: f64);
arith_pair!(@float ToByte, ToFloat => ToDouble: f64);
arith_pair!(@float ToByte, ToDouble => ToDouble: f64);

// short ⊕ _
arith_pair!(@int ToShort, ToByte => ToInt: i32);
arith_pair!(@int ToShort, ToShort => ToInt: i32);
arith_pair!(@int ToShort, ToInt => ToInt: i32);
arith_pair!(@float ToShort, ToLong => ToDouble: f64);
arith_pair!(@float ToShort, ToFloat => ToDouble: f64);
arith_pair!(@float ToShort, ToDouble => ToDouble: f64);

// int ⊕ _
arith_pair!(@int ToInt, ToByte => ToInt: i32);
arith_pair!(@int ToInt, ToShort => ToInt: i32);
arith_pair!(@int ToInt, ToInt => ToInt: i32);
arith_pair!(@float ToInt, ToLong => ToDouble: f64);
arith_pair!(@float ToInt, ToFloat => ToDouble: f64);
arith_pair!(@float ToInt, ToDouble => ToDouble: f64);

// long ⊕ _
arith_pair!(@float ToLong, ToByte => ToDouble: f64);
arith_pair!(@float ToLong, ToShort => ToDouble: f64);
arith_pair!(@float ToLong, ToInt => ToDouble: f64);
arith_pair!(@int ToLong, ToLong => ToLong: i64);
arith_pair!(@float ToLong, ToFloat => ToDouble: f64);
arith_pair!(@float ToLong, ToDouble => ToDouble: f64);

// float ⊕ _
arith_pair!(@float ToFloat, ToByte => ToDouble: f64);
arith_pair!(@float ToFloat, ToShort => ToDouble: f64);
arith_pair!(@float ToFloat, ToInt => ToDouble: f64);
arith_pair!(@float ToFloat, ToLong => ToDouble: f64);
arith_pair!(@float ToFloat, ToFloat => ToFloat: f32);
arith_pair!(@float ToFloat, ToDouble => ToDouble: f64);

// double ⊕ _
arith_pair!(@float ToDouble, ToByte => ToDouble: f64);
arith_pair!(@float ToDouble, ToShort => ToDouble: f64);
arith_pair!(@float ToDouble, ToInt => ToDouble: f64);
arith_pair!(@float ToDouble, ToLong => ToDouble: f64);
arith_pair!(@float ToDouble, ToFloat => ToDouble: f64);
arith_pair!(@float ToDouble, ToDouble => ToDouble: f64);

// nullable mirror of the table above
arith_pair!(@int_null ToByteNullable, ToByteNullable => ToIntNullable: i32);
arith_pair!(@int_null ToByteNullable, ToShortNullable => ToIntNullable: i32);
arith_pair!(@int_null ToByteNullable, ToIntNullable => ToIntNullable: i32);
arith_pair!(@float_null ToByteNullable, ToLongNullable => ToDoubleNullable: f64);
arith_pair!(@float_null ToByteNullable, ToFloatNullable => ToDoubleNullable: f64);
arith_pair!(@float_null ToByteNullable, ToDoubleNullable => ToDoubleNullable: f64);

arith_pair!(@int_null ToShortNullable, ToByteNullable => ToIntNullable: i32);
arith_pair!(@int_null ToShortNullable, ToShortNullable => ToIntNullable: i32);
arith_pair!(@int_null ToShortNullable, ToIntNullable => ToIntNullable: i32);
arith_pair!(@float_null ToShortNullable, ToLongNullable => ToDoubleNullable: f64);
arith_pair!(@float_null ToShortNullable, ToFloatNullable => ToDoubleNullable: f64);
arith_pair!(@float_null ToShortNullable, ToDoubleNullable => ToDoubleNullable: f64);

arith_pair!(@int_null ToIntNullable, ToByteNullable => ToIntNullable: i32);
arith_pair!(@int_null ToIntNullable, ToShortNullable => ToIntNullable: i32);
arith_pair!(@int_null ToIntNullable, ToIntNullable => ToIntNullable: i32);
arith_pair!(@float_null ToIntNullable, ToLongNullable => ToDoubleNullable: f64);
arith_pair!(@float_null ToIntNullable, ToFloatNullable => ToDoubleNullable: f64);
arith_pair!(@float_null ToIntNullable, ToDoubleNullable => ToDoubleNullable: f64);

arith_pair!(@float_null ToLongNullable, ToByteNullable => ToDoubleNullable: f64);
arith_pair!(@float_null ToLongNullable, ToShortNullable => ToDoubleNullable: f64);
arith_pair!(@float_null ToLongNullable, ToIntNullable => ToDoubleNullable: f64);
arith_pair!(@int_null ToLongNullable, ToLongNullable => ToLongNullable: i64);
arith_pair!(@float_null ToLongNullable, ToFloatNullable => ToDoubleNullable: f64);
arith_pair!(@float_null ToLongNullable, ToDoubleNullable => ToDoubleNullable: f64);

arith_pair!(@float_null ToFloatNullable, ToByteNullable => ToDoubleNullable: f64);
arith_pair!(@float_null ToFloatNullable, ToShortNullable => ToDoubleNullable: f64);
arith_pair!(@float_null ToFloatNullable, ToIntNullable => ToDoubleNullable: f64);
arith_pair!(@float_null ToFloatNullable, ToLongNullable => ToDoubleNullable: f64);
arith_pair!(@float_null ToFloatNullable, ToFloatNullable => ToFloatNullable: f32);
arith_pair!(@float_null ToFloatNullable, ToDoubleNullable => ToDoubleNullable: f64);

arith_pair!(@float_null ToDoubleNullable, ToByteNullable => ToDoubleNullable: f64);
arith_pair!(@float_null ToDoubleNullable, ToShortNullable => ToDoubleNullable: f64);
arith_pair!(@float_null ToDoubleNullable, ToIntNullable => ToDoubleNullable: f64);
arith_pair!(@float_null ToDoubleNullable, ToLongNullable => ToDoubleNullable: f64);
arith_pair!(@float_null ToDoubleNullable, ToFloatNullable => ToDoubleNullable: f64);
arith_pair!(@float_null ToDoubleNullable, ToDoubleNullable => ToDoubleNullable: f64);

// floor division: integral pairs only, one width step up
floor_pair!(ToByte, ToByte => ToShort: i16);
floor_pair!(ToByte, ToShort => ToInt: i32);
floor_pair!(ToByte, ToInt => ToLong: i64);
floor_pair!(ToByte, ToLong => ToLong: i64);
floor_pair!(ToShort, ToByte => ToInt: i32);
floor_pair!(ToShort, ToShort => ToInt: i32);
floor_pair!(ToShort, ToInt => ToLong: i64);
floor_pair!(ToShort, ToLong => ToLong: i64);
floor_pair!(ToInt, ToByte => ToLong: i64);
floor_pair!(ToInt, ToShort => ToLong: i64);
floor_pair!(ToInt, ToInt => ToLong: i64);
floor_pair!(ToInt, ToLong => ToLong: i64);
floor_pair!(ToLong, ToByte => ToLong: i64);
floor_pair!(ToLong, ToShort => ToLong: i64);
floor_pair!(ToLong, ToInt => ToLong: i64);
floor_pair!(ToLong, ToLong => ToLong: i64);
