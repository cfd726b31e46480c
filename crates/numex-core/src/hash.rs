//! Reference 64-bit hashes for the six numeric kinds.
//!
//! These hashes are **stability contracts**, not general-purpose hashing:
//! they must agree with boxed equality, so callers can use them as cache
//! and comparison keys.
//!
//! - Integral kinds hash to their sign-extended value bits.
//! - Float kinds hash `+0.0` and `-0.0` to the same canonical zero (`0`),
//!   collapse every NaN to the canonical quiet-NaN bit pattern, and use
//!   the raw IEEE-754 bit pattern otherwise (sign-extended from the
//!   32/64-bit view, matching the reference `floatToIntBits` hash).
//!
//! Nullable surfaces hash null to the fixed sentinel `0`; stability only,
//! no injectivity is promised.

/// Canonical quiet-NaN bit pattern for `f32`.
pub(crate) const CANONICAL_NAN_BITS_F32: u32 = 0x7fc0_0000;

/// Canonical quiet-NaN bit pattern for `f64`.
pub(crate) const CANONICAL_NAN_BITS_F64: u64 = 0x7ff8_0000_0000_0000;

/// IEEE-754 bits with every NaN collapsed to the canonical quiet NaN.
#[must_use]
pub(crate) const fn canonical_bits_f32(value: f32) -> u32 {
    if value.is_nan() {
        CANONICAL_NAN_BITS_F32
    } else {
        value.to_bits()
    }
}

/// IEEE-754 bits with every NaN collapsed to the canonical quiet NaN.
#[must_use]
pub(crate) const fn canonical_bits_f64(value: f64) -> u64 {
    if value.is_nan() {
        CANONICAL_NAN_BITS_F64
    } else {
        value.to_bits()
    }
}

#[must_use]
pub const fn hash_i8(value: i8) -> u64 {
    value as i64 as u64
}

#[must_use]
pub const fn hash_i16(value: i16) -> u64 {
    value as i64 as u64
}

#[must_use]
pub const fn hash_i32(value: i32) -> u64 {
    value as i64 as u64
}

#[must_use]
pub const fn hash_i64(value: i64) -> u64 {
    value as u64
}

#[must_use]
pub const fn hash_f32(value: f32) -> u64 {
    if value == 0.0 {
        return 0;
    }

    canonical_bits_f32(value) as i32 as i64 as u64
}

#[must_use]
pub const fn hash_f64(value: f64) -> u64 {
    if value == 0.0 {
        return 0;
    }

    canonical_bits_f64(value) as i64 as u64
}

///
/// TESTS
///
