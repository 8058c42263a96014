//! Special functions: Bessel J0/J1/I0, Lambert W, and factorial.
//!
//! Same engine as [`crate::elementary`], with regime dispatch doing more
//! of the work: each function covers its domain with several tabulated
//! approximants and picks one per call from the input's magnitude.

mod bessel;
mod factorial;
mod lambertw;

pub use self::bessel::{bessel_i0, bessel_j0, bessel_j1};
pub use self::factorial::factorial;
pub use self::lambertw::lambert_w;
