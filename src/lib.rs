//! # numel
//!
//! **Scalar elementary and special functions, from scratch.**
//!
//! numel re-implements logarithm, exponential, trigonometric, arctangent,
//! cube root, Bessel, and Lambert W functions at f32 and f64 precision
//! without calling the platform math library. Every routine follows the
//! same engine:
//!
//! 1. **Bit decomposition** - inputs are classified and reduced by reading
//!    their IEEE-754 sign/exponent/mantissa fields directly ([`ieee`]).
//! 2. **Range reduction** - a function-specific algebraic identity maps the
//!    input into a small canonical interval.
//! 3. **Minimax approximation** - a fixed-degree polynomial or rational
//!    approximant, fit offline for exactly that interval, is evaluated via
//!    Horner's method ([`poly`], [`tables`]).
//! 4. **Reconstruction** - the reduction is undone, using compensated
//!    arithmetic ([`accurate`]) wherever summing terms of very different
//!    magnitude would otherwise lose the small one.
//!
//! ## Special values
//!
//! Failure is always encoded in the returned value, never an error code:
//! domain errors return NaN, range errors return the correctly signed
//! infinity or zero, NaN propagates. See the per-function docs.
//!
//! ## Accuracy
//!
//! Primary f64 kernels target ~1-2 ULP relative error over their documented
//! domains; functions with named fallback kernels (e.g. trig reduction far
//! outside the exact reduction window, Bessel J0 away from the tabulated
//! zeros) document the looser bound at the function.
//!
//! ## Thread safety
//!
//! All functions are pure and re-entrant. Coefficient tables are immutable
//! `static` data shared freely across threads.
//!
//! ## Quick start
//!
//! ```rust
//! let y = numel::elementary::log(10.0);
//! assert!((y - std::f64::consts::LN_10).abs() < 1e-15);
//!
//! let (s, e) = numel::accurate::two_sum(1.0e16, 1.0);
//! assert_eq!(s, 1.0e16 + 1.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::excessive_precision)]

pub mod accurate;
pub mod elementary;
pub mod error;
pub mod ieee;
pub mod poly;
pub mod special;
pub mod tables;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::accurate::{fast_two_sum, two_prod, two_sum, DoubleDouble};
    pub use crate::elementary::{atan, atan2, cbrt, cos, exp, log, sin};
    pub use crate::error::{Error, Result};
    pub use crate::ieee::{classify, is_finite, is_inf, is_nan, pow2, Binary64, FloatClass};
    pub use crate::special::{bessel_i0, bessel_j0, bessel_j1, factorial, lambert_w};
}
