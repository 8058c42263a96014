//! Error types for numel
//!
//! Scalar math functions never return errors: domain and range failures are
//! encoded in the returned value's special-value class (NaN, signed infinity,
//! signed zero). The `Error` type below covers the validated table and
//! polynomial accessors, whose indices may come from user code.

use thiserror::Error;

/// Result type alias using numel's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in numel's validated accessors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Polynomial evaluation requested with no coefficients
    #[error("Polynomial coefficient slice cannot be empty")]
    EmptyCoefficients,

    /// Rational evaluation with an empty numerator or denominator
    #[error("Rational approximant requires non-empty numerator and denominator")]
    EmptyRational,

    /// Factorial argument exceeds the largest value representable as f64
    #[error("Factorial of {n} overflows f64 (max n = 170)")]
    FactorialOverflow {
        /// The requested argument
        n: u32,
    },
}
