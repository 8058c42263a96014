//! Coefficient tables for sine and cosine.
//!
//! Three-stage Cody-Waite pi/2 split: each stage's leading constant has 33
//! significant bits so the products k * PIO2_N are exact for the k range
//! the stage serves, and the trailing constant carries the next chunk of
//! pi/2. The kernels are the classic fdlibm minimax polynomials for
//! sin/cos on |r| <= pi/4.

/// 2/pi.
pub const INV_PIO2: f64 = 6.36619772367581382433e-01;

/// First 33 bits of pi/2.
pub const PIO2_1: f64 = 1.57079632673412561417e+00;
/// pi/2 - PIO2_1, to full precision.
pub const PIO2_1T: f64 = 6.07710050650619224932e-11;
/// Second 33 bits of pi/2.
pub const PIO2_2: f64 = 6.07710050630396597660e-11;
/// pi/2 - PIO2_1 - PIO2_2.
pub const PIO2_2T: f64 = 2.02226624879595063154e-21;
/// Third 33 bits of pi/2.
pub const PIO2_3: f64 = 2.02226624871116645580e-21;
/// pi/2 - PIO2_1 - PIO2_2 - PIO2_3.
pub const PIO2_3T: f64 = 8.47842766036889956997e-32;

/// sin(r) = r + r^3 (S[0] + r^2 (S[1] + ...)), |r| <= pi/4.
pub static SIN_KERNEL: [f64; 6] = [
    -1.66666666666666324348e-01,
    8.33333333332248946124e-03,
    -1.98412698298579493134e-04,
    2.75573137070700676789e-06,
    -2.50507602534068634195e-08,
    1.58969099521155010221e-10,
];

/// 24-bit chunks of the binary expansion of 2/pi after the point:
/// chunk i holds bits 24i..24(i+1), so its value is chunk * 2^(-24(i+1)).
/// 66 chunks cover every finite double exponent with margin for the
/// recomputation step of the large-argument reduction.
pub static TWO_BY_PI_CHUNKS: [u32; 66] = [
    0xA2F983, 0x6E4E44, 0x1529FC, 0x2757D1, 0xF534DD, 0xC0DB62, 0x95993C, 0x439041, 0xFE5163,
    0xABDEBB, 0xC561B7, 0x246E3A, 0x424DD2, 0xE00649, 0x2EEA09, 0xD1921C, 0xFE1DEB, 0x1CB129,
    0xA73EE8, 0x8235F5, 0x2EBB44, 0x84E99C, 0x7026B4, 0x5F7E41, 0x3991D6, 0x398353, 0x39F49C,
    0x845F8B, 0xBDF928, 0x3B1FF8, 0x97FFDE, 0x05980F, 0xEF2F11, 0x8B5A0A, 0x6D1F6D, 0x367ECF,
    0x27CB09, 0xB74F46, 0x3F669E, 0x5FEA2D, 0x7527BA, 0xC7EBE5, 0xF17B3D, 0x0739F7, 0x8A5292,
    0xEA6BFB, 0x5FB11F, 0x8D5D08, 0x560330, 0x46FC7B, 0x6BABF0, 0xCFBC20, 0x9AF436, 0x1DA9E3,
    0x91615E, 0xE61B08, 0x659985, 0x5F14A0, 0x68408D, 0xFFD880, 0x4D7327, 0x310606, 0x1556CA,
    0x73A8C9, 0x60E27B, 0xC08C6B,
];

/// pi/2 cut into 24-bit pieces; the sum of the first k entries is pi/2
/// truncated to 24k bits.
pub static PIO2_CHUNKS: [f64; 8] = [
    1.57079625129699707031e+00,
    7.54978941586159635335e-08,
    5.39030252995776476554e-15,
    3.28200341580791294123e-22,
    1.27065575308067607349e-29,
    1.22933308981111328932e-36,
    2.73370053816464559624e-44,
    2.16741683877804819444e-51,
];

/// cos(r) = 1 - r^2/2 + r^4 (C[0] + r^2 (C[1] + ...)), |r| <= pi/4.
pub static COS_KERNEL: [f64; 6] = [
    4.16666666666666019037e-02,
    -1.38888888888741095749e-03,
    2.48015872894767294178e-05,
    -2.75573143513906633035e-07,
    2.08757232129817482790e-09,
    -1.13596475577881948265e-11,
];
