//! Reference total-order comparators used by expression `compare` surfaces.
//!
//! Ordering rules:
//! 1. Integral kinds follow the primitive's natural ordering.
//! 2. Float kinds follow the reference comparator, not IEEE `<`:
//!    `-0.0 < +0.0`, every NaN compares equal to every NaN, and NaN sorts
//!    greater than positive infinity.
//! 3. Nullable surfaces sort null greater than every non-null value; two
//!    nulls compare equal.

use crate::hash::{canonical_bits_f32, canonical_bits_f64};
use std::cmp::Ordering;

#[must_use]
pub fn cmp_i8(first: i8, second: i8) -> Ordering {
    first.cmp(&second)
}

#[must_use]
pub fn cmp_i16(first: i16, second: i16) -> Ordering {
    first.cmp(&second)
}

#[must_use]
pub fn cmp_i32(first: i32, second: i32) -> Ordering {
    first.cmp(&second)
}

#[must_use]
pub fn cmp_i64(first: i64, second: i64) -> Ordering {
    first.cmp(&second)
}

/// Reference comparator for `f32`.
///
/// Ordinary values compare by magnitude; ties fall through to the signed
/// canonical bit patterns, which separates the zero signs and places NaN
/// above everything else.
#[must_use]
pub fn cmp_f32(first: f32, second: f32) -> Ordering {
    if first < second {
        Ordering::Less
    } else if first > second {
        Ordering::Greater
    } else {
        let a = canonical_bits_f32(first) as i32;
        let b = canonical_bits_f32(second) as i32;
        a.cmp(&b)
    }
}

/// Reference comparator for `f64`. See [`cmp_f32`].
#[must_use]
pub fn cmp_f64(first: f64, second: f64) -> Ordering {
    if first < second {
        Ordering::Less
    } else if first > second {
        Ordering::Greater
    } else {
        let a = canonical_bits_f64(first) as i64;
        let b = canonical_bits_f64(second) as i64;
        a.cmp(&b)
    }
}

/// Null-last comparator over boxed values.
///
/// The null-sorts-greater choice is a stability contract: downstream sort
/// orders depend on it, so it must not be re-derived from value ordering.
#[must_use]
pub fn cmp_nullable<V>(
    first: Option<V>,
    second: Option<V>,
    cmp: impl Fn(V, V) -> Ordering,
) -> Ordering {
    match (first, second) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => cmp(a, b),
    }
}

///
/// TESTS
///
