//! Natural logarithm at double and single precision.
//!
//! Reduction: write x = 1.m * 2^b by reading the exponent field and forcing
//! it to the bias, then factor the mantissa u against the greatest table
//! pivot t = 1 + k/64 with t <= u, read off k from the top mantissa bits,
//! and expand log(u/t) in the variable (s - 1)/(s + 1), whose series
//! converges far faster than log(1 + x) itself. Reconstruction sums
//! b*ln(2) + log(t) + log(u/t); the exponent term goes through a hi/lo
//! ln(2) split and Fast2Sum so the small polynomial remainder is not lost
//! against it.

use crate::accurate::fast_two_sum;
use crate::ieee::{Binary32, Binary64};
use crate::tables::log::{
    LN_2_F32, LN_2_HI, LN_2_LO, LN_TABLE, LN_TABLE_F32, RCPR_TABLE, RCPR_TABLE_F32,
};

/// Taylor coefficients of -log(1 - s)/s for the near-one branch, enough
/// terms for full precision out to s = 1/8.
static NEAR_ONE: [f64; 18] = [
    1.0,
    0.5,
    0.3333333333333333333333333333,
    0.25,
    0.20,
    0.166666666666666666666666667,
    0.14285714285714285714285714285714,
    0.125,
    0.1111111111111111111111111111,
    0.1,
    0.09090909090909090909090909091,
    0.08333333333333333333333333333,
    0.07692307692307692307692307692,
    0.07142857142857142857142857143,
    0.06666666666666666666666666667,
    0.0625,
    0.05882352941176470588235294118,
    0.05555555555555555555555555556,
];

/// Natural logarithm, double precision.
///
/// Relative error stays within a few ULPs everywhere; the Taylor branch
/// holds it below 1e-15 through the whole region around 1 where the
/// reduction roundings would otherwise be amplified. Special values:
/// `log(+-0) = -inf`, `log(x) = NaN` for x < 0, `log(+inf) = +inf`,
/// NaN propagates.
pub fn log(x: f64) -> f64 {
    let mut w = Binary64::from_value(x);
    let exponent: i32;

    if x == 0.0 {
        return f64::NEG_INFINITY;
    }

    // log(negative) is undefined.
    if w.sign() {
        return f64::NAN;
    }

    if w.biased_exponent() == 0 {
        // Non-zero subnormal. Normalize by 2^52 and correct the exponent.
        w = Binary64::from_value(x * crate::ieee::f64::NORMALIZE);
        exponent = w.exponent() - 52;
    } else if w.is_nan_or_inf() {
        return x;
    } else if 0.875 < x && x < 1.125 {
        // The result is small here while both reduction paths carry
        // roundings at the scale of log(2) or of the pivot logarithm, so
        // their relative contribution blows up. The plain Taylor series
        // in s = 1 - x has an exact argument (Sterbenz) and none of that
        // cancellation; 18 terms reach full precision at |s| = 1/8.
        let s = 1.0 - x;
        return -s * crate::poly::horner(&NEAR_ONE, s);
    } else {
        exponent = w.exponent();
    }

    // Force x = 1.m in [1, 2) and read k from the top six mantissa bits.
    w.set_biased_exponent(crate::ieee::f64::BIAS as u32);
    let ind = (w.mantissa() >> 46) as usize;

    // s = u/t in [1, 1 + 1/64); series in a = (s - 1)/(s + 1).
    let s = w.value() * RCPR_TABLE[ind];
    let a = (s - 1.0) / (s + 1.0);
    let a_sq = a * a;
    let poly = a
        * (2.0
            + a_sq * (0.666666666666666667 + a_sq * (0.4 + a_sq * 0.285714285714285714)));

    if exponent == 0 {
        return poly + LN_TABLE[ind];
    }

    // b*ln(2) dominates the small remainder; carry the remainder through
    // the split so it is not rounded away.
    let e = exponent as f64;
    let (out, _) = fast_two_sum(e * LN_2_HI, LN_TABLE[ind] + poly + e * LN_2_LO);
    out
}

/// Natural logarithm, single precision.
///
/// 32-entry pivot table indexed by the top five mantissa bits; otherwise
/// the same reduction as [`log`].
pub fn logf(x: f32) -> f32 {
    let mut w = Binary32::from_value(x);
    let exponent: i32;

    if x == 0.0 {
        return f32::NEG_INFINITY;
    }

    if w.sign() {
        return f32::NAN;
    }

    if w.biased_exponent() == 0 {
        w = Binary32::from_value(x * crate::ieee::f32::NORMALIZE);
        exponent = w.exponent() - 23;
    } else if w.is_nan_or_inf() {
        return x;
    } else if 0.5 < x && x < 1.0 {
        // The -log(2) exponent term cancels against the mantissa
        // logarithm over this whole binade, amplifying the single
        // precision table rounding past the target accuracy. One
        // double precision evaluation sidesteps the cancellation.
        return log(f64::from(x)) as f32;
    } else {
        exponent = w.exponent();
    }

    w.set_biased_exponent(crate::ieee::f32::BIAS as u32);
    let ind = (w.mantissa() >> 18) as usize;

    let s = w.value() * RCPR_TABLE_F32[ind];
    let a = (s - 1.0) / (s + 1.0);
    let a_sq = a * a;
    let poly = a * (2.0 + a_sq * 0.6666667);

    exponent as f32 * LN_2_F32 + (poly + LN_TABLE_F32[ind])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_values() {
        assert_eq!(log(0.0), f64::NEG_INFINITY);
        assert_eq!(log(-0.0), f64::NEG_INFINITY);
        assert!(log(-1.0).is_nan());
        assert_eq!(log(f64::INFINITY), f64::INFINITY);
        assert!(log(f64::NAN).is_nan());
        assert_eq!(log(1.0), 0.0);
    }

    #[test]
    fn matches_reference_over_regimes() {
        // One sample per regime: subnormal, near-one, below/above one,
        // large, small.
        for &x in &[
            1.0e-310,
            0.9975,
            0.5,
            1.5,
            2.0,
            10.0,
            1.0e4,
            1.0e300,
            3.7e-200,
        ] {
            let got = log(x);
            let want = x.ln();
            let rel = ((got - want) / want).abs();
            assert!(rel < 5.0e-16, "log({x}): got {got}, want {want}");
        }
    }

    #[test]
    fn single_precision() {
        assert_eq!(logf(0.0), f32::NEG_INFINITY);
        assert!(logf(-2.0).is_nan());
        // 0.52..0.99 exercise the binade below 1, where the exponent
        // term cancels and the double evaluation takes over.
        for &x in &[
            1.0e-44f32,
            0.9975,
            0.9216646,
            0.99,
            0.52,
            0.75,
            0.25,
            1.0,
            3.0,
            1.0e4,
            1.0e38,
        ] {
            let got = logf(x);
            let want = x.ln();
            if want == 0.0 {
                assert_eq!(got, 0.0);
            } else {
                let rel = ((got - want) / want).abs();
                assert!(rel < 3.0e-7, "logf({x}): got {got}, want {want}");
            }
        }
    }
}
