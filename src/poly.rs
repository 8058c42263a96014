//! Horner-scheme evaluation of minimax approximants.
//!
//! Coefficient order is always constant term first (`c[0] + c[1] z + ...`),
//! and accumulation runs from the highest degree down. The order is fixed:
//! the error bounds documented for each coefficient table were derived for
//! exactly this evaluation sequence, and reordering would invalidate them.
//! Degrees are fixed per table; there is no dynamic degree selection.

use crate::error::{Error, Result};
use num_traits::Float;

/// Evaluate `c[0] + c[1] z + c[2] z^2 + ...` via Horner's method.
///
/// The empty slice yields zero; the internal tables are never empty, and the
/// checked public entry point is [`polyval`].
#[inline]
pub fn horner<T: Float>(coeffs: &[T], z: T) -> T {
    let mut acc = T::zero();
    for &c in coeffs.iter().rev() {
        acc = acc * z + c;
    }
    acc
}

/// Evaluate the rational `P(z) / Q(z)` with both parts in Horner form.
#[inline]
pub fn horner_rational<T: Float>(num: &[T], den: &[T], z: T) -> T {
    horner(num, z) / horner(den, z)
}

/// Checked polynomial evaluation for external callers.
///
/// Errors on an empty coefficient slice instead of silently returning zero.
pub fn polyval<T: Float>(coeffs: &[T], z: T) -> Result<T> {
    if coeffs.is_empty() {
        return Err(Error::EmptyCoefficients);
    }
    Ok(horner(coeffs, z))
}

/// Checked rational evaluation for external callers.
pub fn polyval_rational<T: Float>(num: &[T], den: &[T], z: T) -> Result<T> {
    if num.is_empty() || den.is_empty() {
        return Err(Error::EmptyRational);
    }
    Ok(horner_rational(num, den, z))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horner_matches_direct_expansion() {
        // 2 - 3z + z^3 at z = 1.5
        let c = [2.0f64, -3.0, 0.0, 1.0];
        let z = 1.5;
        assert_eq!(horner(&c, z), 2.0 - 3.0 * z + z * z * z);
    }

    #[test]
    fn horner_f32() {
        let c = [1.0f32, 1.0, 0.5];
        assert_eq!(horner(&c, 2.0), 1.0 + 2.0 + 2.0);
    }

    #[test]
    fn rational_form() {
        let p = [0.0f64, 1.0];
        let q = [1.0f64, 1.0];
        // z / (1 + z) at z = 3
        assert_eq!(horner_rational(&p, &q, 3.0), 0.75);
    }

    #[test]
    fn polyval_rejects_empty() {
        assert_eq!(polyval::<f64>(&[], 1.0), Err(Error::EmptyCoefficients));
        assert_eq!(
            polyval_rational::<f64>(&[1.0], &[], 1.0),
            Err(Error::EmptyRational)
        );
        assert_eq!(polyval(&[4.0f64], 9.0), Ok(4.0));
    }
}
