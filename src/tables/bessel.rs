//! Coefficient tables for the Bessel functions J0, J1 and I0.
//!
//! Rational approximations for small arguments and asymptotic phase
//! polynomials for large arguments (Numerical Recipes set). `J0_ZEROS_HI`
//! and `J0_ZEROS_LO` hold the first five zeros of J0 split into a hi/lo
//! pair; subtracting both parts in sequence keeps the distance to the zero
//! fully accurate, which the zero-crossing kernel needs to avoid
//! catastrophic cancellation. `J1_AT_J0_ZEROS` supplies the derivative
//! J0'(rho) = -J1(rho) for the same kernel.

/// 3 pi / 4, the J1 asymptotic phase shift.
pub const FRAC_3PI_4: f64 = 2.356194490192345;

/// 2 / pi.
pub const TWO_OVER_PI: f64 = std::f64::consts::FRAC_2_PI;

/// J0 small-argument numerator (|x| < 8).
pub static J0_SMALL_P: [f64; 6] = [
    57568490574.0,
    -13362590354.0,
    651619640.7,
    -11214424.18,
    77392.33017,
    -184.9052456,
];

/// J0 small-argument denominator (|x| < 8).
pub static J0_SMALL_Q: [f64; 6] = [
    57568490411.0,
    1029532985.0,
    9494680.718,
    59272.64853,
    267.8532712,
    1.0,
];

/// J0 asymptotic P polynomial in (8/x)^2.
pub static J0_ASYMP_P: [f64; 5] = [
    1.0,
    -0.1098628627e-2,
    0.2734510407e-4,
    -0.2073370639e-5,
    0.2093887211e-6,
];

/// J0 asymptotic Q polynomial in (8/x)^2.
pub static J0_ASYMP_Q: [f64; 5] = [
    -0.1562499995e-1,
    0.1430488765e-3,
    -0.6911147651e-5,
    0.7621095161e-6,
    -0.934945152e-7,
];

/// J1 small-argument numerator (|x| < 8).
pub static J1_SMALL_P: [f64; 6] = [
    72362614232.0,
    -7895059235.0,
    242396853.1,
    -2972611.439,
    15704.48260,
    -30.16036606,
];

/// J1 small-argument denominator (|x| < 8).
pub static J1_SMALL_Q: [f64; 6] = [
    144725228442.0,
    2300535178.0,
    18583304.74,
    99447.43394,
    376.9991397,
    1.0,
];

/// J1 asymptotic P polynomial in (8/x)^2.
pub static J1_ASYMP_P: [f64; 5] = [
    1.0,
    0.183105e-2,
    -0.3516396496e-4,
    0.2457520174e-5,
    -0.240337019e-6,
];

/// J1 asymptotic Q polynomial in (8/x)^2.
pub static J1_ASYMP_Q: [f64; 5] = [
    0.04687499995,
    -0.2002690873e-3,
    0.8449199096e-5,
    -0.88228987e-6,
    0.105787412e-6,
];

/// I0 asymptotic polynomial in 1/x (x > 15).
pub static I0_ASYMP: [f64; 7] = [
    1.0,
    1.25e-01,
    7.03125e-02,
    7.32421875e-2,
    1.12152099609375e-1,
    2.271080017089844e-1,
    5.725014209747314e-1,
];

/// High parts of the first five zeros of J0.
pub static J0_ZEROS_HI: [f64; 5] = [
    2.404825557695773,
    5.520078110286311,
    8.653727912911013,
    11.791534439014281,
    14.930917708487787,
];
/// Low parts of the first five zeros of J0.
pub static J0_ZEROS_LO: [f64; 5] = [
    -1.176691651530894e-16,
    8.088597146146722e-17,
    -2.9281260732116296e-16,
    2.812956912778735e-16,
    -7.070514505983074e-16,
];
/// J1 evaluated at the first five zeros of J0 (so -J0' there).
pub static J1_AT_J0_ZEROS: [f64; 5] = [
    0.5191474972894669,
    -0.3402648065583681,
    0.2714522999283819,
    -0.2324598313647218,
    0.2065464331257087,
];
