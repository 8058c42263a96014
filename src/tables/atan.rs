//! Coefficient tables for the arctangent.
//!
//! The pivot tables implement formula 4.4.34 of Abramowitz & Stegun,
//! atan(u) = atan(v) + atan((u - v)/(1 + uv)): the exponent of the input
//! selects the pivot v whose octave contains |x|, leaving a reduced
//! argument small enough for the Maclaurin polynomial. The pivot values
//! were tuned against the exponent windows [2^(e), 2^(e+1)) so the peak
//! relative error stays below double epsilon.

/// Maclaurin coefficients: atan(x) = x (1 - x^2 (A0 + x^2 (A1 + ...))).
pub static ATAN_MACLAURIN: [f64; 8] = [
    3.33333333333329318027e-01,
    -1.99999999998764832476e-01,
    1.42857142725034663711e-01,
    -1.11111104054623557880e-01,
    9.09088713343650656196e-02,
    -7.69187620504482999495e-02,
    6.66107313738753120669e-02,
    -5.83357013379057348645e-02,
];

/// Single-precision Maclaurin coefficients (odd series through x^11).
pub static ATAN_MACLAURIN_F32: [f32; 5] = [
    0.33333334,
    -0.2,
    0.14285715,
    -0.11111111,
    0.09090909,
];

/// Pivot values v, one per exponent window 2^(e)..2^(e+1), e = -3..=3.
pub static ATAN_V: [f64; 7] = [
    0.18,
    0.35,
    0.72,
    1.35,
    2.5,
    4.0,
    8.0,
];

/// atan of the pivots in `ATAN_V`.
pub static ATAN_OF_V: [f64; 7] = [
    0.17809293823119754,
    0.33667481938672716,
    0.6240230529767569,
    0.9332475286562039,
    1.1902899496825317,
    1.3258176636680326,
    1.446441332248135,
];

/// Single-precision pivots for e = -4..=3.
pub static ATAN_V_F32: [f32; 8] = [
    9.0e-02,
    1.8e-01,
    3.5e-01,
    7.2e-01,
    1.35e+00,
    2.5e+00,
    4.0e+00,
    8.0e+00,
];

/// atan of the pivots in `ATAN_V_F32`.
pub static ATAN_OF_V_F32: [f32; 8] = [
    8.975817e-02,
    1.7809294e-01,
    3.366748e-01,
    6.240231e-01,
    9.332475e-01,
    1.19029e+00,
    1.3258177e+00,
    1.4464413e+00,
];
