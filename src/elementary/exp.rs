//! Exponential function at double and single precision.
//!
//! Double precision reduces in two layers: first x = k*ln(2) + r with
//! |r| <= ln(2)/2 via a Cody-Waite hi/lo split of ln(2), then r = n/128 + t
//! with |t| <= 1/256 against a 179-entry table of exp(n/128). The remaining
//! kernel exp(t) is a degree-5 Remez polynomial, and 2^k is applied by
//! exponent-field scaling so gradual underflow falls out of the scaler.
//! Single precision stops after the first layer and uses a degree-7 kernel.

use crate::ieee::{scale_pow2, scale_pow2f, Binary32, Binary64};
use crate::poly::horner;
use crate::tables::exp::{
    EXP_KERNEL, EXP_KERNEL_F32, EXP_TABLE, LN_2_HI_F32, LN_2_LO_F32, ONE_BY_128, RCPR_LN_2,
    RCPR_LN_2_F32,
};
use crate::tables::log::{LN_2_HI, LN_2_LO};

/// Largest x with exp(x) finite in binary64 (ln of the max double).
const EXP_MAX: f64 = 709.782712893384;

/// Below this every binary64 exp(x) rounds to zero, subnormals included.
const EXP_MIN: f64 = -745.5;

/// exp table index offset: entry 89 holds exp(0).
const TABLE_CENTER: i32 = 89;

/// Exponential function, double precision.
///
/// Overflow saturates to `+inf`, underflow flushes through the subnormal
/// range to `0.0`, NaN propagates.
pub fn exp(x: f64) -> f64 {
    let w = Binary64::from_value(x);

    if w.is_nan_or_inf() {
        if w.is_nan() {
            return x;
        }
        return if w.sign() { 0.0 } else { x };
    }
    if x > EXP_MAX {
        return f64::INFINITY;
    }
    if x < EXP_MIN {
        return 0.0;
    }
    // exp(x) = 1 + x to double precision here.
    if w.biased_exponent() < (crate::ieee::f64::BIAS - 53) as u32 {
        return 1.0 + x;
    }

    // x = k*ln(2) + r, |r| <= ln(2)/2. The hi part of ln(2) has enough
    // trailing zeros that k*LN_2_HI is exact for |k| <= 1075.
    let k = (x * RCPR_LN_2).round() as i32;
    let kd = k as f64;
    let r = (x - kd * LN_2_HI) - kd * LN_2_LO;

    // r = n/128 + t, |t| <= 1/256; truncation toward zero keeps the index
    // within the table for both signs of r.
    let r128 = (128.0 * r) as i32;
    let ind = (r128 + TABLE_CENTER) as usize;
    let t = r - ONE_BY_128 * r128 as f64;

    scale_pow2(horner(&EXP_KERNEL, t) * EXP_TABLE[ind], k)
}

/// Exponential function, single precision.
pub fn expf(x: f32) -> f32 {
    let w = Binary32::from_value(x);

    if w.is_nan_or_inf() {
        if w.is_nan() {
            return x;
        }
        return if w.sign() { 0.0 } else { x };
    }
    if x > 88.72284 {
        return f32::INFINITY;
    }
    if x < -104.0 {
        return 0.0;
    }
    if w.biased_exponent() < (crate::ieee::f32::BIAS - 24) as u32 {
        return 1.0 + x;
    }

    let k = (x * RCPR_LN_2_F32).round() as i32;
    let kd = k as f32;
    let r = (x - kd * LN_2_HI_F32) - kd * LN_2_LO_F32;

    scale_pow2f(horner(&EXP_KERNEL_F32, r), k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_values() {
        assert_eq!(exp(0.0), 1.0);
        assert_eq!(exp(f64::INFINITY), f64::INFINITY);
        assert_eq!(exp(f64::NEG_INFINITY), 0.0);
        assert!(exp(f64::NAN).is_nan());
        assert_eq!(exp(710.0), f64::INFINITY);
        assert_eq!(exp(-800.0), 0.0);
    }

    #[test]
    fn matches_reference_over_regimes() {
        for &x in &[
            -700.0, -10.0, -1.0, -0.001, 1.0e-20, 0.5, 1.0, 2.5, 10.0, 300.0, 709.0,
        ] {
            let got = exp(x);
            let want = x.exp();
            let rel = ((got - want) / want).abs();
            assert!(rel < 5.0e-16, "exp({x}): got {got}, want {want}");
        }
    }

    #[test]
    fn gradual_underflow() {
        // Between the last normal result and total underflow the scaler
        // must produce subnormals, not jump to zero.
        let y = exp(-709.0);
        assert!(y > 0.0 && y < f64::MIN_POSITIVE);
    }

    #[test]
    fn single_precision() {
        assert_eq!(expf(0.0), 1.0);
        assert_eq!(expf(89.0), f32::INFINITY);
        assert_eq!(expf(-110.0), 0.0);
        for &x in &[-80.0f32, -5.0, -0.25, 0.125, 1.0, 7.0, 80.0] {
            let got = expf(x);
            let want = x.exp();
            let rel = ((got - want) / want).abs();
            assert!(rel < 3.0e-7, "expf({x}): got {got}, want {want}");
        }
    }
}
