//! Immutable per-function coefficient tables.
//!
//! Data only: minimax polynomial and rational coefficients, reduction pivot
//! points, precomputed powers of two, factorials and Bessel zeros. All
//! tables are `static` constants fixed at build time, read-only for the
//! process lifetime, and indexed exclusively by algorithm-internal logic.
//! The public accessors that accept user-supplied indices live in
//! [`crate::special`] and validate their arguments.

pub mod atan;
pub mod bessel;
pub mod cbrt;
pub mod exp;
pub mod factorial;
pub mod lambertw;
pub mod log;
pub mod pow2;
pub mod trig;
