//! Double-double extended-precision arithmetic.
//!
//! A [`DoubleDouble`] carries a value as an unevaluated sum `hi + lo` of two
//! doubles, roughly doubling the significant bits of the working precision.
//! The addition and multiplication algorithms follow Joldes et al. 2017
//! (the corrected Li et al. 2002 forms), built entirely from the 2Sum and
//! 2Prod primitives in this module's parent.

use super::{fast_two_sum, two_prod, two_sum};
use std::ops::{Add, Mul, Neg, Sub};

/// A value + error pair maintained as an extended-precision number.
///
/// Invariant: `hi` is the correctly rounded sum `hi + lo`, i.e.
/// `|lo| <= 0.5 ulp(hi)`. Constructors establish the invariant via 2Sum;
/// arithmetic preserves it with a final Fast2Sum renormalization.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DoubleDouble {
    /// Correctly rounded value.
    pub hi: f64,
    /// Exact residual.
    pub lo: f64,
}

impl DoubleDouble {
    /// Zero.
    pub const ZERO: DoubleDouble = DoubleDouble { hi: 0.0, lo: 0.0 };

    /// Build from an exact (hi, lo) pair. Caller asserts the invariant
    /// already holds (e.g. the pair came from a compensated primitive).
    #[inline]
    pub const fn from_parts(hi: f64, lo: f64) -> Self {
        DoubleDouble { hi, lo }
    }

    /// Build from the exact sum of two arbitrary doubles.
    #[inline]
    pub fn from_sum(a: f64, b: f64) -> Self {
        let (hi, lo) = two_sum(a, b);
        DoubleDouble { hi, lo }
    }

    /// Build from the exact product of two doubles.
    #[inline]
    pub fn from_prod(a: f64, b: f64) -> Self {
        let (hi, lo) = two_prod(a, b);
        DoubleDouble { hi, lo }
    }

    /// Round to working precision.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.hi
    }

    /// Double-double + double.
    #[inline]
    pub fn add_f64(self, y: f64) -> Self {
        let (sh, sl) = two_sum(self.hi, y);
        let v = self.lo + sl;
        let (hi, lo) = fast_two_sum(sh, v);
        DoubleDouble { hi, lo }
    }

    /// Double-double * double.
    #[inline]
    pub fn mul_f64(self, y: f64) -> Self {
        let (ph, pl) = two_prod(self.hi, y);
        let t = pl + self.lo * y;
        let (hi, lo) = fast_two_sum(ph, t);
        DoubleDouble { hi, lo }
    }
}

impl Add for DoubleDouble {
    type Output = DoubleDouble;

    #[inline]
    fn add(self, rhs: DoubleDouble) -> DoubleDouble {
        let (sh, sl) = two_sum(self.hi, rhs.hi);
        let (th, tl) = two_sum(self.lo, rhs.lo);
        let c = sl + th;
        let (vh, vl) = fast_two_sum(sh, c);
        let w = tl + vl;
        let (hi, lo) = fast_two_sum(vh, w);
        DoubleDouble { hi, lo }
    }
}

impl Sub for DoubleDouble {
    type Output = DoubleDouble;

    #[inline]
    fn sub(self, rhs: DoubleDouble) -> DoubleDouble {
        self + (-rhs)
    }
}

impl Mul for DoubleDouble {
    type Output = DoubleDouble;

    #[inline]
    fn mul(self, rhs: DoubleDouble) -> DoubleDouble {
        let (ph, pl) = two_prod(self.hi, rhs.hi);
        let t = pl + (self.hi * rhs.lo + self.lo * rhs.hi);
        let (hi, lo) = fast_two_sum(ph, t);
        DoubleDouble { hi, lo }
    }
}

impl Neg for DoubleDouble {
    type Output = DoubleDouble;

    #[inline]
    fn neg(self) -> DoubleDouble {
        DoubleDouble {
            hi: -self.hi,
            lo: -self.lo,
        }
    }
}

impl From<f64> for DoubleDouble {
    #[inline]
    fn from(x: f64) -> Self {
        DoubleDouble { hi: x, lo: 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_sum_normalizes() {
        let dd = DoubleDouble::from_sum(1.0, 1.0e-20);
        assert_eq!(dd.hi, 1.0);
        assert_eq!(dd.lo, 1.0e-20);
    }

    #[test]
    fn add_carries_small_term() {
        // 1 + 2^-80 survives a round trip through double-double addition
        // even though it vanishes at working precision.
        let small = (0.5f64).powi(80);
        let a = DoubleDouble::from(1.0);
        let b = DoubleDouble::from(small);
        let sum = a + b;
        assert_eq!(sum.hi, 1.0);
        assert_eq!(sum.lo, small);
        let diff = sum - b;
        assert_eq!(diff.hi, 1.0);
        assert_eq!(diff.lo, 0.0);
    }

    #[test]
    fn mul_tracks_product_tail() {
        // (1 + 2^-30)^2: the 2^-60 cross term is below working precision.
        let a = DoubleDouble::from(1.0 + (0.5f64).powi(30));
        let sq = a * a;
        assert_eq!(sq.hi, (1.0 + (0.5f64).powi(30)) * (1.0 + (0.5f64).powi(30)));
        assert_eq!(sq.lo, (0.5f64).powi(60));
    }

    #[test]
    fn scalar_ops_match_full_ops() {
        let a = DoubleDouble::from_sum(std::f64::consts::PI, 1.0e-18);
        let y = 3.0;
        assert_eq!(a.add_f64(y), a + DoubleDouble::from(y));
        assert_eq!(a.mul_f64(y), a * DoubleDouble::from(y));
    }
}
