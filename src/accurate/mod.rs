//! Compensated arithmetic primitives.
//!
//! Each primitive returns a `(value, error)` pair: `value` is the correctly
//! rounded result of the operation and `error` the exact residual, so that
//! `value + error` equals the true mathematical result in infinite precision.
//! All primitives are pure and branch-free except where the algorithm itself
//! requires a comparison. NaN and infinity inputs propagate IEEE semantics
//! with no special handling; callers filter those upstream.
//!
//! References: Moller (1965), Dekker (1971), Kahan/Neumaier summation,
//! Shewchuk (1997), Hida-Li-Bailey's double-double library.

mod doubledouble;

pub use doubledouble::DoubleDouble;

/// Dekker split constant for f64: 2^27 + 1.
const SPLIT_FACTOR: f64 = 134217729.0;

/// 2Sum: sum two values, returning the rounded sum and the exact error.
///
/// Valid for any finite `a`, `b`; no magnitude ordering is required. The
/// virtual operands `b_v = s - a` and `a_v = s - b_v` recover what each
/// input contributed to the rounded sum; the two residuals then add
/// exactly (Knuth, TAOCP vol. 2, theorem B).
#[inline]
pub fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let b_virtual = s - a;
    let a_virtual = s - b_virtual;
    let b_err = b - b_virtual;
    let a_err = a - a_virtual;
    (s, a_err + b_err)
}

/// Fast2Sum: sum with error, requiring `|a| >= |b|`.
///
/// Three operations instead of six. The ordering precondition is a caller
/// obligation and is not runtime-checked; every call site in this crate
/// satisfies it by construction.
#[inline]
pub fn fast_two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let b_virtual = s - a;
    (s, b - b_virtual)
}

/// 2Diff: difference with exact error, valid for any finite operands.
#[inline]
pub fn two_diff(a: f64, b: f64) -> (f64, f64) {
    let d = a - b;
    let a_comp = d + b;
    let b_comp = a_comp - d;
    let a_err = a - a_comp;
    let b_err = b_comp - b;
    (d, a_err + b_err)
}

/// Dekker split: write x as hi + lo where each half carries at most 26
/// significant bits, so products of halves are exact.
#[inline]
pub fn split(x: f64) -> (f64, f64) {
    let scaled = SPLIT_FACTOR * x;
    let hi = scaled - (scaled - x);
    (hi, x - hi)
}

/// 2Prod: product with exact error via Dekker splitting.
///
/// `p` is the rounded product, `e` the exact residual accumulated from the
/// four half-products without cancellation loss.
#[inline]
pub fn two_prod(a: f64, b: f64) -> (f64, f64) {
    let p = a * b;
    let (a_hi, a_lo) = split(a);
    let (b_hi, b_lo) = split(b);
    let e = ((a_hi * b_hi - p) + a_hi * b_lo + a_lo * b_hi) + a_lo * b_lo;
    (p, e)
}

/// 2Square: squared value with exact error; cheaper than `two_prod(a, a)`
/// since only one split is needed.
#[inline]
pub fn two_square(a: f64) -> (f64, f64) {
    let p = a * a;
    let (hi, lo) = split(a);
    let e = ((hi * hi - p) + 2.0 * hi * lo) + lo * lo;
    (p, e)
}

/// Neumaier step: fold `input` into a compensated running sum.
///
/// Returns the updated `(sum, error)`. Unlike plain Kahan summation, the
/// branch keeps the compensation valid when the incoming term is larger in
/// magnitude than the accumulated sum.
#[inline]
pub fn neumaier_step(input: f64, sum: f64, err: f64) -> (f64, f64) {
    let new_sum = sum + input;
    let correction = if abs(sum) >= abs(input) {
        (sum - new_sum) + input
    } else {
        (input - new_sum) + sum
    };
    (new_sum, err + correction)
}

/// |x| by clearing the sign bit.
#[inline]
fn abs(x: f64) -> f64 {
    f64::from_bits(x.to_bits() & !(1u64 << 63))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_sum_recovers_lost_bits() {
        // The ULP at 1.0e16 is 2.0, so the added 1.0 is lost from the
        // rounded sum and must be recovered exactly in the error term.
        let (s, e) = two_sum(1.0e16, 1.0);
        assert_eq!(s, 1.0e16 + 1.0);
        assert_eq!(e, (1.0e16 - s) + 1.0);
        assert!(e != 0.0 || s == 1.0e16 + 1.0);
    }

    #[test]
    fn two_sum_exact_for_comparable_magnitudes() {
        // Same-binade operands where the naive compensation
        // (a - (s - b)) + (b - (s - a)) rounds the residual to
        // -2^-32; the exact error is -2^-33.
        let a = -941918.4248502641;
        let b = -556616.6674539299;
        let (s, e) = two_sum(a, b);
        assert_eq!(s, a + b);
        assert_eq!(e, -1.1641532182693481e-10);
    }

    #[test]
    fn fast_two_sum_agrees_under_precondition() {
        let cases = [(1.0e8, 1.0e-8), (3.5, 0.1), (-7.0e3, 2.0e-5), (1.0, 1.0)];
        for (a, b) in cases {
            assert_eq!(two_sum(a, b), fast_two_sum(a, b), "case ({a}, {b})");
        }
    }

    #[test]
    fn two_prod_error_is_exact() {
        // (1 + 2^-30)^2 = 1 + 2^-29 + 2^-60; the 2^-60 tail exceeds f64
        // precision and must appear in the error term.
        let a = 1.0 + (0.5f64).powi(30);
        let (p, e) = two_prod(a, a);
        assert_eq!(p, a * a);
        assert_eq!(e, (0.5f64).powi(60));
        let (ps, es) = two_square(a);
        assert_eq!((ps, es), (p, e));
    }

    #[test]
    fn split_halves_recombine() {
        for &x in &[std::f64::consts::PI, 1.0e10, -3.0e-7, 0.1] {
            let (hi, lo) = split(x);
            assert_eq!(hi + lo, x);
        }
    }

    #[test]
    fn neumaier_sum_beats_naive() {
        let terms = [1.0, 1.0e100, 1.0, -1.0e100];
        let (mut sum, mut err) = (0.0, 0.0);
        for t in terms {
            (sum, err) = neumaier_step(t, sum, err);
        }
        assert_eq!(sum + err, 2.0);
    }
}
