//! Bit-level access to IEEE-754 floating-point values.
//!
//! This module is the foundation of every function in the crate: range
//! reduction begins by reading a value's sign, biased exponent, and mantissa
//! fields directly, and reconstruction often ends by writing an exponent
//! field back. It also provides exact power-of-two synthesis ([`pow2`],
//! [`pow2f`]), ldexp-style scaling ([`scale_pow2`]), and the shared
//! special-value classification used by every public function.
//!
//! Rust guarantees binary32/binary64 IEEE-754 representations, so the bit
//! path is always valid; [`pow2_portable`] implements the table-driven
//! multiplication ladder used by platforms without a conforming layout and
//! is kept bit-identical to [`pow2`] (verified by the test suite).

pub mod f32;
pub mod f64;

pub use self::f32::{pow2f, Binary32};
pub use self::f64::{pow2, Binary64};

use crate::tables::pow2::{POW2_LADDER, POW2_LADDER_EXPONENTS};

/// Special-value classification shared by every public function.
///
/// Derived purely from the exponent and mantissa fields; recomputed on every
/// call, never cached.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FloatClass {
    /// Positive or negative zero.
    Zero,
    /// Non-zero value with an all-zero exponent field.
    Subnormal,
    /// Ordinary finite non-zero value.
    Normal,
    /// Positive or negative infinity.
    Infinite,
    /// Not a number.
    Nan,
}

/// Classify a double-precision value.
#[inline]
pub fn classify(x: f64) -> FloatClass {
    let w = Binary64::from_value(x);
    match w.biased_exponent() {
        0 => {
            if w.mantissa() == 0 {
                FloatClass::Zero
            } else {
                FloatClass::Subnormal
            }
        }
        self::f64::NANINF_EXP => {
            if w.mantissa() == 0 {
                FloatClass::Infinite
            } else {
                FloatClass::Nan
            }
        }
        _ => FloatClass::Normal,
    }
}

/// Classify a single-precision value.
#[inline]
pub fn classifyf(x: f32) -> FloatClass {
    let w = Binary32::from_value(x);
    match w.biased_exponent() {
        0 => {
            if w.mantissa() == 0 {
                FloatClass::Zero
            } else {
                FloatClass::Subnormal
            }
        }
        self::f32::NANINF_EXP => {
            if w.mantissa() == 0 {
                FloatClass::Infinite
            } else {
                FloatClass::Nan
            }
        }
        _ => FloatClass::Normal,
    }
}

/// True if x is NaN, by exponent/mantissa field inspection.
#[inline]
pub fn is_nan(x: f64) -> bool {
    Binary64::from_value(x).is_nan()
}

/// True if x is +/- infinity.
#[inline]
pub fn is_inf(x: f64) -> bool {
    Binary64::from_value(x).is_inf()
}

/// True if x is neither NaN nor infinite.
#[inline]
pub fn is_finite(x: f64) -> bool {
    !Binary64::from_value(x).is_nan_or_inf()
}

/// Portable power-of-two synthesis by repeated multiplication.
///
/// Walks the doubling ladder 2^512, 2^256, ..., 2^1, consuming each rung as
/// many times as the remaining exponent allows. Every partial product is an
/// exact power of two, so the result matches [`pow2`] bit for bit over the
/// whole range, including the subnormal tail.
pub fn pow2_portable(e: i32) -> f64 {
    if e == 0 {
        return 1.0;
    }
    let negative = e < 0;
    let mut n = e.unsigned_abs();
    let mut acc = 1.0f64;
    for (&p, &k) in POW2_LADDER.iter().zip(POW2_LADDER_EXPONENTS.iter()) {
        while n >= k {
            if negative {
                acc /= p;
            } else {
                acc *= p;
            }
            n -= k;
            if acc == 0.0 || Binary64::from_value(acc).is_inf() {
                return acc;
            }
        }
    }
    acc
}

/// 2^54, used to pre-scale subnormals before exponent arithmetic.
const TWO54: f64 = 1.8014398509481984e16;

/// 2^-54.
const TWOM54: f64 = 5.551115123125783e-17;

/// Multiply x by 2^n with overflow, underflow, and subnormal handling.
///
/// Operates on the exponent field directly; subnormal inputs are normalized
/// by 2^54 first and subnormal results are produced by a final exact 2^-54
/// scale, so no double rounding occurs.
pub fn scale_pow2(x: f64, n: i32) -> f64 {
    let mut w = Binary64::from_value(x);
    if x == 0.0 || w.is_nan_or_inf() {
        return x;
    }
    let mut k = w.biased_exponent() as i32;
    if k == 0 {
        w = Binary64::from_value(x * TWO54);
        k = w.biased_exponent() as i32 - 54;
    }
    k = k.saturating_add(n);
    if n > 50_000 || k > 0x7FE {
        return f64::INFINITY.copysign(x);
    }
    if n < -50_000 || k <= -54 {
        return 0.0f64.copysign(x);
    }
    if k > 0 {
        w.set_biased_exponent(k as u32);
        return w.value();
    }
    w.set_biased_exponent((k + 54) as u32);
    w.value() * TWOM54
}

/// Single-precision counterpart of [`scale_pow2`].
pub fn scale_pow2f(x: f32, n: i32) -> f32 {
    const TWO26: f32 = 6.7108864e7;
    const TWOM26: f32 = 1.4901161193847656e-8;
    let mut w = Binary32::from_value(x);
    if x == 0.0 || w.is_nan_or_inf() {
        return x;
    }
    let mut k = w.biased_exponent() as i32;
    if k == 0 {
        w = Binary32::from_value(x * TWO26);
        k = w.biased_exponent() as i32 - 26;
    }
    k = k.saturating_add(n);
    if n > 50_000 || k > 0xFE {
        return f32::INFINITY.copysign(x);
    }
    if n < -50_000 || k <= -26 {
        return 0.0f32.copysign(x);
    }
    if k > 0 {
        w.set_biased_exponent(k as u32);
        return w.value();
    }
    w.set_biased_exponent((k + 26) as u32);
    w.value() * TWOM26
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_covers_all_regimes() {
        assert_eq!(classify(0.0), FloatClass::Zero);
        assert_eq!(classify(-0.0), FloatClass::Zero);
        assert_eq!(classify(1.0e-310), FloatClass::Subnormal);
        assert_eq!(classify(1.0), FloatClass::Normal);
        assert_eq!(classify(f64::MAX), FloatClass::Normal);
        assert_eq!(classify(f64::INFINITY), FloatClass::Infinite);
        assert_eq!(classify(f64::NAN), FloatClass::Nan);
    }

    #[test]
    fn portable_ladder_matches_bit_path() {
        for e in -1080..=1030 {
            assert_eq!(
                pow2_portable(e).to_bits(),
                pow2(e).to_bits(),
                "mismatch at e = {e}"
            );
        }
    }

    #[test]
    fn pow2_matches_repeated_doubling() {
        let mut acc = 1.0f64;
        for e in 0..=1023 {
            assert_eq!(pow2(e), acc);
            acc *= 2.0;
        }
    }

    #[test]
    fn scale_pow2_limits() {
        assert_eq!(scale_pow2(1.0, 10), 1024.0);
        assert_eq!(scale_pow2(1.5, -1), 0.75);
        assert_eq!(scale_pow2(1.0, 2000), f64::INFINITY);
        assert_eq!(scale_pow2(-1.0, 2000), f64::NEG_INFINITY);
        assert_eq!(scale_pow2(1.0, -2000), 0.0);
        assert_eq!(scale_pow2(f64::MIN_POSITIVE, -52), f64::from_bits(1));
        assert_eq!(scale_pow2(f64::from_bits(1), 52), f64::MIN_POSITIVE);
    }
}
