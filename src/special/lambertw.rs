//! Lambert W function (principal branch), double precision.
//!
//! W(x) solves W e^W = x, defined for x >= -1/e. The domain splits into
//! regimes with a dedicated approximant each: a Maclaurin series around
//! zero, a Pade approximant for moderately small |x|, a ladder of rational
//! minimax fits in x (then in log(x)) for the positive axis, a square-root
//! series about the branch point x = -1/e, and a Halley-polished Pade
//! guess for the stretch of the negative axis none of those covers. The
//! Halley loop is bounded; in practice it converges in one or two steps
//! from the Pade starting value.

use crate::elementary::{exp, log};
use crate::ieee::Binary64;
use crate::poly::{horner, horner_rational};
use crate::tables::lambertw::{
    RCPR_E, W_MACLAURIN, W_NEAR_BRANCH, W_PADE_P, W_PADE_Q, W_POS_OFFSET_A, W_POS_OFFSET_B,
    W_POS_OFFSET_C, W_POS_OFFSET_D, W_POS_OFFSET_E, W_POS_OFFSET_F, W_POS_OFFSET_G,
    W_POS_OFFSET_H, W_POS_P_A, W_POS_P_B, W_POS_P_C, W_POS_P_D, W_POS_P_E, W_POS_P_F, W_POS_P_G,
    W_POS_P_H, W_POS_Q_A, W_POS_Q_B, W_POS_Q_C, W_POS_Q_D, W_POS_Q_E, W_POS_Q_F, W_POS_Q_G,
    W_POS_Q_H,
};

/// Convergence tolerance for the Halley loop, one binary64 epsilon.
const HALLEY_TOL: f64 = 2.220446049250313e-16;

/// Maclaurin series, |x| < 2^-7.
fn maclaurin(x: f64) -> f64 {
    x * horner(&W_MACLAURIN, x)
}

/// (9, 8) Pade approximant about zero, good to ~1e-8 on (-1/16, 1/4).
fn pade(x: f64) -> f64 {
    let num = x * horner(&W_PADE_P, x);
    num / horner(&W_PADE_Q, x)
}

/// Square-root series about the branch point; `t = x + 1/e >= 0`.
fn near_branch(t: f64) -> f64 {
    horner(&W_NEAR_BRANCH, t.sqrt())
}

/// Halley iteration on f(w) = w e^w - x from the starting value `w0`.
fn halley(x: f64, mut w0: f64) -> f64 {
    let mut dx = 0.0;
    for _ in 0..8 {
        let e = exp(w0);
        let s = w0 + 1.0;
        let t = w0 * e - x;
        dx = t / (e * s - 0.5 * (s + 1.0) * t / s);
        if dx.abs() < HALLEY_TOL {
            break;
        }
        w0 -= dx;
    }
    w0 - dx
}

/// Rational-fit ladder for x >= 1/4: four windows in x, then four in
/// log(x) once W(x) - log(x) is the slowly varying part.
fn positive(x: f64) -> f64 {
    if x < 2.0 {
        if x < 0.5 {
            return x * (W_POS_OFFSET_A + horner_rational(&W_POS_P_A, &W_POS_Q_A, x));
        }
        return x * (W_POS_OFFSET_B + horner_rational(&W_POS_P_B, &W_POS_Q_B, x));
    }
    if x < 6.0 {
        return W_POS_OFFSET_C + horner_rational(&W_POS_P_C, &W_POS_Q_C, x);
    }
    if x < 18.0 {
        return W_POS_OFFSET_D + horner_rational(&W_POS_P_D, &W_POS_Q_D, x);
    }

    let log_x = log(x);
    if log_x < 9.2 {
        log_x + W_POS_OFFSET_E + horner_rational(&W_POS_P_E, &W_POS_Q_E, log_x)
    } else if log_x < 32.0 {
        log_x + W_POS_OFFSET_F + horner_rational(&W_POS_P_F, &W_POS_Q_F, log_x)
    } else if log_x < 100.0 {
        log_x + W_POS_OFFSET_G + horner_rational(&W_POS_P_G, &W_POS_Q_G, log_x)
    } else {
        log_x + W_POS_OFFSET_H + horner_rational(&W_POS_P_H, &W_POS_Q_H, log_x)
    }
}

/// Lambert W, principal branch.
///
/// Returns NaN for x < -1/e (domain error) and for -inf; `lambert_w(-1/e)
/// = -1` exactly, `lambert_w(+inf) = +inf`, NaN propagates.
pub fn lambert_w(x: f64) -> f64 {
    let bias = crate::ieee::f64::BIAS as u32;
    let w = Binary64::from_value(x);

    if w.is_nan_or_inf() {
        if w.is_nan() {
            return x;
        }
        return if w.sign() { f64::NAN } else { x };
    }

    // W(x) = x below 2^-52; the series would just round back to x.
    if w.biased_exponent() < bias - 52 {
        return x;
    }

    if w.biased_exponent() < bias - 7 {
        return maclaurin(x);
    }

    if w.sign() {
        // The Pade fit loses ground on the negative side sooner.
        if w.biased_exponent() < bias - 4 {
            return pade(x);
        }

        // t = x + 1/e decides the branch-point cases.
        let t = x + RCPR_E;
        if t < 0.0 {
            return f64::NAN;
        }
        if t == 0.0 {
            return -1.0;
        }
        if Binary64::from_value(t).biased_exponent() < bias - 10 {
            return near_branch(t);
        }

        return halley(x, pade(x));
    }

    if w.biased_exponent() < bias - 2 {
        return pade(x);
    }
    positive(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Defining identity, checked in relative terms.
    fn residual(x: f64) -> f64 {
        let w = lambert_w(x);
        ((w * w.exp() - x) / x).abs()
    }

    #[test]
    fn special_values() {
        assert!(lambert_w(f64::NAN).is_nan());
        assert_eq!(lambert_w(f64::INFINITY), f64::INFINITY);
        assert!(lambert_w(f64::NEG_INFINITY).is_nan());
        assert!(lambert_w(-1.0).is_nan());
        assert_eq!(lambert_w(0.0), 0.0);
        assert!(lambert_w(-0.0).is_sign_negative());
        assert_eq!(lambert_w(-RCPR_E), -1.0);
    }

    #[test]
    fn known_values() {
        // W(1) is the omega constant; W(e) = 1.
        assert!((lambert_w(1.0) - 0.5671432904097838).abs() < 1e-13);
        assert!((lambert_w(std::f64::consts::E) - 1.0).abs() < 1e-13);
    }

    #[test]
    fn inverse_identity_over_regimes() {
        for &x in &[
            1.0e-14, 1.0e-3, -1.0e-3, 0.1, -0.1, 0.3, 1.5, 4.0, 12.0, 100.0, 1.0e5, 1.0e20,
            1.0e150, 1.0e300,
        ] {
            assert!(residual(x) < 1e-12, "w e^w residual at {x}: {}", residual(x));
        }
    }

    #[test]
    fn near_branch_point() {
        // Just above -1/e: W must be near -1 and monotone in x.
        let a = lambert_w(-RCPR_E + 1e-12);
        let b = lambert_w(-RCPR_E + 1e-8);
        let c = lambert_w(-RCPR_E + 1e-4);
        assert!(a > -1.0 && a < b && b < c && c < 0.0);
        // Series edge against the Halley-polished side.
        let x = -RCPR_E + 1e-3;
        assert!(residual(x) < 1e-10, "residual near branch: {}", residual(x));
    }

    #[test]
    fn negative_halley_stretch() {
        for &x in &[-0.35, -0.3, -0.2, -0.1] {
            assert!(residual(x) < 1e-12, "residual at {x}");
        }
    }
}
