//! Inverse tangent at double and single precision, plus two-argument atan2.
//!
//! atan is odd, so only |x| is reduced. Small inputs use the Maclaurin
//! series directly and large inputs the reciprocal asymptote
//! atan(x) = pi/2 - atan(1/x). In between, the exponent field selects a
//! tabulated pivot v with atan(v) precomputed, and the identity
//! atan(x) = atan(v) + atan((x - v)/(1 + x v)) shrinks the argument enough
//! for the same Maclaurin kernel. No division-free trick is attempted; the
//! one divide per call is what keeps the pivot count at eight.

use crate::ieee::{Binary32, Binary64};
use crate::poly::horner;
use crate::tables::atan::{
    ATAN_MACLAURIN, ATAN_MACLAURIN_F32, ATAN_OF_V, ATAN_OF_V_F32, ATAN_V, ATAN_V_F32,
};

const PI: f64 = 3.14159265358979323846264338327950288;
const PI_BY_TWO: f64 = 1.57079632679489661923132169163975144;
const PI_BY_FOUR: f64 = 0.785398163397448309615660845819875721;
const PI_BY_TWO_F32: f32 = 1.570796327;

/// Maclaurin kernel, valid to double precision for |x| up to the largest
/// reduced argument the pivots produce (about 0.18).
fn maclaurin(x: f64) -> f64 {
    let x_sq = x * x;
    x * (1.0 - x_sq * horner(&ATAN_MACLAURIN, x_sq))
}

fn maclaurin_f32(x: f32) -> f32 {
    let x_sq = x * x;
    x * (1.0 - x_sq * horner(&ATAN_MACLAURIN_F32, x_sq))
}

/// Inverse tangent, double precision.
///
/// Odd, bounded by pi/2; `atan(+-inf) = +-pi/2`, NaN propagates.
pub fn atan(x: f64) -> f64 {
    let bias = crate::ieee::f64::BIAS as u32;
    let mut w = Binary64::from_value(x);

    if w.is_nan() {
        return x;
    }
    if w.is_inf() {
        return if w.sign() { -PI_BY_TWO } else { PI_BY_TWO };
    }

    // |x| < 1/8: the series converges without reduction. Subnormal x
    // squares to zero and falls out as atan(x) = x.
    if w.biased_exponent() < bias - 3 {
        return maclaurin(x);
    }

    let negative = w.sign();
    w.make_abs();

    // |x| >= 16: atan(x) = pi/2 + atan(-1/x), with -1/x in (-1/16, 0].
    if w.biased_exponent() > bias + 3 {
        let out = PI_BY_TWO + maclaurin(-1.0 / w.value());
        return if negative { -out } else { out };
    }

    // 1/8 <= |x| < 16: one pivot per binade.
    let ind = (w.biased_exponent() + 3 - bias) as usize;
    let v = ATAN_V[ind];
    let arg = (w.value() - v) / (1.0 + w.value() * v);
    let out = ATAN_OF_V[ind] + maclaurin(arg);
    if negative {
        -out
    } else {
        out
    }
}

/// Inverse tangent, single precision.
pub fn atanf(x: f32) -> f32 {
    let bias = crate::ieee::f32::BIAS as u32;
    let mut w = Binary32::from_value(x);

    if w.is_nan() {
        return x;
    }
    if w.is_inf() {
        return if w.sign() { -PI_BY_TWO_F32 } else { PI_BY_TWO_F32 };
    }

    // |x| < 1/16.
    if w.biased_exponent() < bias - 4 {
        return maclaurin_f32(x);
    }

    let negative = w.sign();
    w.make_abs();

    if w.biased_exponent() > bias + 3 {
        let out = PI_BY_TWO_F32 + maclaurin_f32(-1.0 / w.value());
        return if negative { -out } else { out };
    }

    // 1/16 <= |x| < 16: the single-precision pivot table adds one binade
    // at the bottom.
    let ind = (w.biased_exponent() + 4 - bias) as usize;
    let v = ATAN_V_F32[ind];
    let arg = (w.value() - v) / (1.0 + w.value() * v);
    let out = ATAN_OF_V_F32[ind] + maclaurin_f32(arg);
    if negative {
        -out
    } else {
        out
    }
}

/// Two-argument inverse tangent: the angle of the point (x, y), in
/// (-pi, pi].
///
/// Follows the IEEE quadrant conventions, including signed zeros:
/// `atan2(+-0, x > 0) = +-0`, `atan2(+-0, x < 0) = +-pi`, and the
/// four infinity-infinity corners land on odd multiples of pi/4.
pub fn atan2(y: f64, x: f64) -> f64 {
    let wy = Binary64::from_value(y);
    let wx = Binary64::from_value(x);

    if wy.is_nan() || wx.is_nan() {
        return f64::NAN;
    }

    if wy.is_inf() {
        let base = if wx.is_inf() {
            if wx.sign() {
                3.0 * PI_BY_FOUR
            } else {
                PI_BY_FOUR
            }
        } else {
            PI_BY_TWO
        };
        return if wy.sign() { -base } else { base };
    }

    if y == 0.0 {
        // The sign of zero rides along; the quadrant comes from x's sign
        // bit so that x = -0.0 still lands on pi.
        let base = if wx.sign() { PI } else { 0.0 };
        return if wy.sign() { -base } else { base };
    }

    if x == 0.0 || wx.is_inf() {
        let base = if wx.is_inf() {
            if wx.sign() {
                PI
            } else {
                0.0
            }
        } else {
            PI_BY_TWO
        };
        return if wy.sign() { -base } else { base };
    }

    let z = atan((y / x).abs());
    match (wy.sign(), wx.sign()) {
        (false, false) => z,
        (false, true) => PI - z,
        (true, false) => -z,
        (true, true) => z - PI,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_values() {
        assert!(atan(f64::NAN).is_nan());
        assert_eq!(atan(f64::INFINITY), PI_BY_TWO);
        assert_eq!(atan(f64::NEG_INFINITY), -PI_BY_TWO);
        assert_eq!(atan(0.0), 0.0);
        assert!(atan(-0.0).is_sign_negative());
    }

    #[test]
    fn matches_reference_over_regimes() {
        for &x in &[
            1.0e-300, 1.0e-9, 0.01, 0.1, 0.2, 0.5, 1.0, 1.5, 3.0, 7.0, 15.9, 16.1, 1.0e3, 1.0e18,
        ] {
            for &s in &[1.0, -1.0] {
                let t = s * x;
                let got = atan(t);
                let want = t.atan();
                let rel = ((got - want) / want).abs();
                assert!(rel < 1.0e-15, "atan({t}): got {got}, want {want}");
            }
        }
    }

    #[test]
    fn atan2_quadrants() {
        assert_eq!(atan2(0.0, 1.0), 0.0);
        assert!(atan2(-0.0, 1.0).is_sign_negative());
        assert_eq!(atan2(0.0, -1.0), PI);
        assert_eq!(atan2(-0.0, -1.0), -PI);
        assert_eq!(atan2(1.0, 0.0), PI_BY_TWO);
        assert_eq!(atan2(-1.0, 0.0), -PI_BY_TWO);
        assert_eq!(atan2(f64::INFINITY, f64::INFINITY), PI_BY_FOUR);
        assert_eq!(atan2(-f64::INFINITY, f64::NEG_INFINITY), -3.0 * PI_BY_FOUR);
        assert!(atan2(f64::NAN, 1.0).is_nan());

        let got = atan2(1.0, -1.0);
        let want = 1.0f64.atan2(-1.0);
        assert!((got - want).abs() < 1.0e-15);
        let got = atan2(-2.0, 3.0);
        let want = (-2.0f64).atan2(3.0);
        assert!((got - want).abs() < 1.0e-15);
    }

    #[test]
    fn single_precision() {
        assert_eq!(atanf(f32::INFINITY), PI_BY_TWO_F32);
        for &x in &[1.0e-30f32, 0.03, 0.5, 1.0, 2.0, 10.0, 100.0] {
            let got = atanf(x);
            let want = x.atan();
            let rel = ((got - want) / want).abs();
            assert!(rel < 3.0e-7, "atanf({x}): got {got}, want {want}");
        }
    }

    #[test]
    fn odd_symmetry() {
        for &x in &[0.3, 1.7, 42.0] {
            assert_eq!(atan(-x), -atan(x));
        }
    }
}
