//! Factorial by table lookup.

use crate::error::{Error, Result};
use crate::tables::factorial::FACTORIAL;

/// n! as a double, exact through 22! and correctly rounded beyond.
///
/// 171! overflows binary64, so the lookup is checked rather than
/// saturating: callers that would rather have `+inf` can map the error
/// themselves.
pub fn factorial(n: u32) -> Result<f64> {
    FACTORIAL
        .get(n as usize)
        .copied()
        .ok_or(Error::FactorialOverflow { n })
}
