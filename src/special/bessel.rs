//! Bessel functions J0, J1, and I0, double precision.
//!
//! J0 and J1 follow the classic two-regime scheme: a rational minimax
//! approximation in x^2 for |x| < 8, and for |x| >= 8 the asymptotic form
//! sqrt(2/(pi x)) * (cos(xx) P(y) - sin(xx) Q(y)) with y = (8/x)^2 and a
//! phase shift of pi/4 (J0) or 3 pi/4 (J1). The tables bound the
//! *absolute* error near 1e-8; the relative error necessarily blows up
//! next to the roots. For J0 the first five roots get a dedicated Taylor
//! kernel about a hi/lo-split tabulated root, restoring relative accuracy
//! to ~1e-13 inside a 1/128-wide window (see [`bessel_j0`]).
//!
//! I0 is everywhere positive so no such care is needed: a power series up
//! to |x| <= 15 and the asymptotic expansion e^x / sqrt(2 pi x) * P(1/x)
//! beyond, with the exponential applied in two half-sized factors so the
//! result overflows only where I0 itself does.

use crate::elementary::{cos, exp, sin};
use crate::ieee::{is_inf, is_nan};
use crate::poly::horner;
use crate::tables::bessel::{
    FRAC_3PI_4, I0_ASYMP, J0_ASYMP_P, J0_ASYMP_Q, J0_SMALL_P, J0_SMALL_Q, J0_ZEROS_HI,
    J0_ZEROS_LO, J1_ASYMP_P, J1_ASYMP_Q, J1_AT_J0_ZEROS, J1_SMALL_P, J1_SMALL_Q, TWO_OVER_PI,
};

const FRAC_PI_4: f64 = 0.785398163397448309615660845819875721;

/// Half-width of the root windows served by the Taylor kernels.
const ROOT_RADIUS: f64 = 0.0078125;

/// Taylor expansion of J0 about its k-th root.
///
/// Every derivative of J0 at a root r is a rational multiple (in 1/r) of
/// J0'(r) = -J1(r), via the Bessel equation y'' = -y'/x - y. Five terms
/// and the exact hi/lo root split keep the truncation below the ~1e-13
/// level at the window edge.
fn j0_root_kernel(ax: f64, k: usize) -> f64 {
    let dx = (ax - J0_ZEROS_HI[k]) - J0_ZEROS_LO[k];
    let a = -J1_AT_J0_ZEROS[k];
    let u = 1.0 / (J0_ZEROS_HI[k] + J0_ZEROS_LO[k]);
    let u_sq = u * u;

    // d_n = J0^(n)(r) / J0'(r), from repeated differentiation of the ODE.
    let d2 = -u;
    let d3 = 2.0 * u_sq - 1.0;
    let d4 = 2.0 * u - 6.0 * u * u_sq;
    let d5 = 1.0 - 7.0 * u_sq + 24.0 * u_sq * u_sq;

    let taylor = [1.0, d2 / 2.0, d3 / 6.0, d4 / 24.0, d5 / 120.0];
    a * dx * horner(&taylor, dx)
}

fn j0_main(ax: f64) -> f64 {
    if ax < 8.0 {
        let y = ax * ax;
        horner(&J0_SMALL_P, y) / horner(&J0_SMALL_Q, y)
    } else {
        let z = 8.0 / ax;
        let y = z * z;
        let xx = ax - FRAC_PI_4;
        let p = horner(&J0_ASYMP_P, y);
        let q = z * horner(&J0_ASYMP_Q, y);
        (TWO_OVER_PI / ax).sqrt() * (cos(xx) * p - sin(xx) * q)
    }
}

/// Bessel function of the first kind, order zero.
///
/// Even in x; `bessel_j0(+-0) = 1` exactly, `bessel_j0(+-inf) = 0`, NaN
/// propagates. Absolute error ~1e-8 everywhere; within 1/128 of the
/// first five roots a dedicated kernel instead bounds the *relative*
/// error near 1e-13.
pub fn bessel_j0(x: f64) -> f64 {
    if is_nan(x) {
        return x;
    }
    if is_inf(x) {
        return 0.0;
    }
    let ax = x.abs();

    // The rational tables only promise 1e-8 absolutes and miss the exact
    // value at 0; the two-term Taylor series is exact to the last bit
    // out to 1e-4.
    if ax < 1.0e-4 {
        return 1.0 - 0.25 * ax * ax;
    }

    for (k, &root) in J0_ZEROS_HI.iter().enumerate() {
        if (ax - root).abs() < ROOT_RADIUS {
            return j0_root_kernel(ax, k);
        }
    }
    j0_main(ax)
}

/// Bessel function of the first kind, order one.
///
/// Odd in x; `bessel_j1(+-inf) = 0`, `bessel_j1(+-0) = +-0`, NaN
/// propagates. Absolute error ~1e-8.
pub fn bessel_j1(x: f64) -> f64 {
    if is_nan(x) {
        return x;
    }
    if is_inf(x) {
        return 0.0;
    }
    let ax = x.abs();

    if ax < 8.0 {
        let y = x * x;
        x * horner(&J1_SMALL_P, y) / horner(&J1_SMALL_Q, y)
    } else {
        let z = 8.0 / ax;
        let y = z * z;
        let xx = ax - FRAC_3PI_4;
        let p = horner(&J1_ASYMP_P, y);
        let q = z * horner(&J1_ASYMP_Q, y);
        let out = (TWO_OVER_PI / ax).sqrt() * (cos(xx) * p - sin(xx) * q);
        if x < 0.0 {
            -out
        } else {
            out
        }
    }
}

/// Modified Bessel function of the first kind, order zero.
///
/// Even in x, grows like e^|x|; overflows to `+inf` past |x| ~ 713, NaN
/// propagates.
pub fn bessel_i0(x: f64) -> f64 {
    if is_nan(x) {
        return x;
    }
    let ax = x.abs();
    if is_inf(ax) {
        return ax;
    }

    if ax <= 15.0 {
        // Power series sum (x/2)^{2k} / (k!)^2; terms shrink fast enough
        // that thirty is never reached.
        let z = ax * ax;
        let mut sum = 1.0;
        let mut term = 1.0;
        for k in 1..30 {
            term *= z / (4.0 * (k as f64) * (k as f64));
            sum += term;
            if term < sum * 1e-17 {
                break;
            }
        }
        sum
    } else {
        let poly = horner(&I0_ASYMP, 1.0 / ax);
        // e^x in two factors: e^(x/2) stays finite to x ~ 1419, so the
        // product overflows only where I0 does.
        let half = exp(0.5 * ax);
        half * (poly / (2.0 * std::f64::consts::PI * ax).sqrt()) * half
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::tables::bessel::J0_ZEROS_HI;

    #[test]
    fn j0_special_values() {
        assert_eq!(bessel_j0(0.0), 1.0);
        assert_eq!(bessel_j0(-0.0), 1.0);
        assert_eq!(bessel_j0(f64::INFINITY), 0.0);
        assert_eq!(bessel_j0(f64::NEG_INFINITY), 0.0);
        assert!(bessel_j0(f64::NAN).is_nan());
        // Even symmetry.
        assert_eq!(bessel_j0(-3.7), bessel_j0(3.7));
        // Tiny arguments land on the Taylor branch, not the rational
        // tables, so the limit at 0 is exact and the departure from 1
        // is the true -x^2/4.
        assert_eq!(bessel_j0(1.0e-300), 1.0);
        let x = 5.0e-5;
        assert_eq!(bessel_j0(x), 1.0 - 0.25 * x * x);
    }

    #[test]
    fn j0_known_values() {
        // Reference values from A&S table 9.1; tolerance at the level
        // of the rational tables.
        assert!((bessel_j0(1.0) - 0.7651976865579666).abs() < 1e-7);
        assert!((bessel_j0(5.0) + 0.1775967713143383).abs() < 1e-7);
        assert!((bessel_j0(10.0) + 0.2459357644513483).abs() < 1e-7);
    }

    #[test]
    fn j0_relative_accuracy_at_roots() {
        for &r in &J0_ZEROS_HI {
            // At the tabulated root the kernel output must be tiny, of
            // the size of the root's own representation error times J1.
            assert!(bessel_j0(r).abs() < 1e-15, "J0 at root {r}");
            // Just inside the window: compare slope against -J1.
            let dx = 1.0e-6;
            let want = -bessel_j1(r) * dx;
            let got = bessel_j0(r + dx);
            // First-order check only: the curvature term and the table
            // accuracy of J1 both sit near 1e-7.
            assert!(
                ((got - want) / want).abs() < 1e-5,
                "J0 slope at root {r}: got {got}, want {want}"
            );
        }
    }

    #[test]
    fn j1_special_values() {
        assert_eq!(bessel_j1(0.0), 0.0);
        assert!(bessel_j1(-0.0).is_sign_negative());
        assert_eq!(bessel_j1(f64::INFINITY), 0.0);
        assert!(bessel_j1(f64::NAN).is_nan());
        assert_eq!(bessel_j1(-2.5), -bessel_j1(2.5));
    }

    #[test]
    fn j1_known_values() {
        assert!((bessel_j1(1.0) - 0.4400505857449335).abs() < 1e-7);
        assert!((bessel_j1(5.0) + 0.3275791375914652).abs() < 1e-7);
        assert!((bessel_j1(10.0) - 0.0434727461688614).abs() < 1e-7);
    }

    #[test]
    fn i0_values() {
        assert_eq!(bessel_i0(0.0), 1.0);
        assert_eq!(bessel_i0(f64::INFINITY), f64::INFINITY);
        assert!(bessel_i0(f64::NAN).is_nan());
        assert!((bessel_i0(1.0) - 1.2660658777520084).abs() < 1e-14);
        assert!((bessel_i0(-1.0) - 1.2660658777520084).abs() < 1e-14);
        // Asymptotic regime against the known I0(20).
        let want = 4.355828255955353e7;
        assert!(((bessel_i0(20.0) - want) / want).abs() < 1e-6);
        // Overflow only past the true limit.
        assert!(bessel_i0(712.0).is_finite());
        assert_eq!(bessel_i0(715.0), f64::INFINITY);
    }
}
