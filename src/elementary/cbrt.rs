//! Cube root at double and single precision.
//!
//! Reduction splits x = m * 2^(3q + p) with p in {0, 1, 2}: the exponent
//! field supplies q and the parity p, a 128-entry table of cube roots of
//! mantissa pivots 1 + k/128 handles m, and a short Taylor kernel in
//! s = m/(1 + k/128) - 1 covers the residual interval of width 1/128. The
//! tabulated pass is accurate to about 1e-10; one Newton iteration of
//! y -> (2y + x/y^2)/3 finishes to full precision. Cube root is defined on
//! all of the real line, so the sign is stripped up front and restored on
//! the reduced result.

use crate::ieee::{Binary32, Binary64};
use crate::poly::horner;
use crate::tables::cbrt::{
    CBRT_KERNEL, CBRT_KERNEL_F32, CBRT_PARITY, CBRT_PARITY_F32, CBRT_TABLE, CBRT_TABLE_F32,
    RCPR_TABLE_128,
};

const ONE_THIRD: f64 = 0.3333333333333333333333333333;
const ONE_THIRD_F32: f32 = 0.33333334;

/// Cube root, double precision.
///
/// Exact at zero and infinity of either sign; NaN propagates. Max error
/// ~1 ULP after the closing Newton step.
pub fn cbrt(x: f64) -> f64 {
    let bias = crate::ieee::f64::BIAS as u32;
    let mut w = Binary64::from_value(x);
    let negative = w.sign();
    w.make_abs();

    if w.is_nan_or_inf() || x == 0.0 {
        return x;
    }

    // Unbiased exponent E = 3q + p: q lands back in the exponent field,
    // p selects a factor 2^(p/3) from the parity table. The bias is a
    // multiple of 3, so for normals p is just the field mod 3; flooring
    // division is spelled out for the negative-E side.
    let exponent: u32;
    if w.biased_exponent() == 0 {
        w = Binary64::from_value(w.value() * crate::ieee::f64::NORMALIZE);
        // E = field - bias - 52, and 52 = 3*18 - 2 shifts the parity by 2.
        let expo = w.biased_exponent() + 2;
        w.set_biased_exponent(expo);
        exponent = bias - ((bias - expo) + 56) / 3;
    } else if w.biased_exponent() < bias {
        exponent = bias - ((bias - w.biased_exponent()) + 2) / 3;
    } else {
        exponent = bias + (w.biased_exponent() - bias) / 3;
    }
    let parity = (w.biased_exponent() % 3) as usize;

    // Mantissa part in [1, 2); top seven bits select the pivot.
    w.set_biased_exponent(bias);
    let ind = (w.mantissa() >> 45) as usize;

    let s = w.value() * RCPR_TABLE_128[ind] - 1.0;
    let poly = horner(&CBRT_KERNEL, s);

    // Scale the kernel by 2^q through its exponent field (poly is in
    // [1, 2), so the field is exactly the bias).
    let mut out = Binary64::from_value(poly);
    out.set_biased_exponent(exponent);
    let mut y = out.value() * CBRT_PARITY[parity] * CBRT_TABLE[ind];
    if negative {
        y = -y;
    }

    ONE_THIRD * (2.0 * y + x / (y * y))
}

/// Cube root, single precision.
///
/// Same reduction as [`cbrt`]; the binary32 bias is not a multiple of 3,
/// so the parity carries a constant offset.
pub fn cbrtf(x: f32) -> f32 {
    let bias = crate::ieee::f32::BIAS as u32;
    let mut w = Binary32::from_value(x);
    let negative = w.sign();
    w.make_abs();

    if w.is_nan_or_inf() || x == 0.0 {
        return x;
    }

    let exponent: u32;
    let parity: usize;
    if w.biased_exponent() == 0 {
        w = Binary32::from_value(w.value() * crate::ieee::f32::NORMALIZE);
        // E = field - bias - 23; bias + 23 = 150 is a multiple of 3.
        exponent = bias - ((bias - w.biased_exponent()) + 25) / 3;
        parity = (w.biased_exponent() % 3) as usize;
    } else {
        if w.biased_exponent() < bias {
            exponent = bias - ((bias - w.biased_exponent()) + 2) / 3;
        } else {
            exponent = bias + (w.biased_exponent() - bias) / 3;
        }
        // bias = 127 = 3*42 + 1, so E mod 3 = (field + 2) mod 3.
        parity = ((w.biased_exponent() + 2) % 3) as usize;
    }

    w.set_biased_exponent(bias);
    let ind = (w.mantissa() >> 16) as usize;

    let s = w.value() * (RCPR_TABLE_128[ind] as f32) - 1.0;
    let poly = horner(&CBRT_KERNEL_F32, s);

    let mut out = Binary32::from_value(poly);
    out.set_biased_exponent(exponent);
    let mut y = out.value() * CBRT_PARITY_F32[parity] * CBRT_TABLE_F32[ind];
    if negative {
        y = -y;
    }

    ONE_THIRD_F32 * (2.0 * y + x / (y * y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_values() {
        assert_eq!(cbrt(0.0), 0.0);
        assert!(cbrt(-0.0).is_sign_negative());
        assert_eq!(cbrt(f64::INFINITY), f64::INFINITY);
        assert_eq!(cbrt(f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert!(cbrt(f64::NAN).is_nan());
    }

    #[test]
    fn exact_cubes() {
        assert_eq!(cbrt(8.0), 2.0);
        assert_eq!(cbrt(-27.0), -3.0);
        assert_eq!(cbrt(1.0), 1.0);
        assert_eq!(cbrt(0.125), 0.5);
    }

    #[test]
    fn matches_reference_over_regimes() {
        for &x in &[
            1.0e-310,
            -4.9e-324,
            1.0e-20,
            0.3,
            1.5,
            -7.0,
            1.0e10,
            -2.5e300,
        ] {
            let got = cbrt(x);
            let want = x.cbrt();
            let rel = ((got - want) / want).abs();
            assert!(rel < 5.0e-16, "cbrt({x}): got {got}, want {want}");
        }
    }

    #[test]
    fn single_precision() {
        assert_eq!(cbrtf(27.0), 3.0);
        assert_eq!(cbrtf(-8.0), -2.0);
        for &x in &[1.0e-44f32, 1.0e-10, 0.7, 3.0, -100.0, 2.5e38] {
            let got = cbrtf(x);
            let want = x.cbrt();
            let rel = ((got - want) / want).abs();
            assert!(rel < 3.0e-7, "cbrtf({x}): got {got}, want {want}");
        }
    }
}
