//! Doubling ladder for the portable power-of-two fallback.
//!
//! Rungs are exact powers of two in descending order; decomposing an
//! exponent greedily over `POW2_LADDER_EXPONENTS` and multiplying (or
//! dividing) the matching rungs keeps every partial product an exact
//! power of two.

/// 2^512, 2^256, ..., 2^1.
pub static POW2_LADDER: [f64; 10] = [
    1.3407807929942597e154,
    1.157920892373162e77,
    3.402823669209385e38,
    1.8446744073709552e19,
    4294967296.0,
    65536.0,
    256.0,
    16.0,
    4.0,
    2.0,
];

/// Exponents of the ladder rungs.
pub static POW2_LADDER_EXPONENTS: [u32; 10] = [512, 256, 128, 64, 32, 16, 8, 4, 2, 1];
