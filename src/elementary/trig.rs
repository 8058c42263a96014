//! Sine and cosine, double precision.
//!
//! Reduction writes x = n * pi/2 + r with |r| <= pi/4 through a three-stage
//! Cody-Waite split of pi/2: each stage subtracts a 33-bit chunk whose
//! product with n is exact, and the reduction drops into the next stage
//! only when cancellation has eaten too many leading bits of the remainder.
//! The remainder is kept as a hi/lo pair (y0, y1) so the kernels can fold
//! the tail into their last terms. n mod 4 selects the octant: which kernel
//! to call and with which sign.
//!
//! The staged path serves |x| up to 2^20 * pi/2. Above that the quotient
//! n overflows what the exact-product chunks can absorb, so reduction
//! switches to the Payne-Hanek scheme: multiply the 24-bit pieces of x by
//! stored 24-bit chunks of 2/pi, keeping only the fractional part of the
//! product mod 8. The chunk table covers every finite double exponent, so
//! both kernels always see a fully reduced remainder.

use crate::ieee::{scale_pow2, Binary64};
use crate::poly::horner;
use crate::tables::trig::{
    COS_KERNEL, INV_PIO2, PIO2_1, PIO2_1T, PIO2_2, PIO2_2T, PIO2_3, PIO2_3T, PIO2_CHUNKS,
    SIN_KERNEL, TWO_BY_PI_CHUNKS,
};

const PI_BY_FOUR: f64 = 0.785398163397448309615660845819875721;

/// Above 2^20 * pi/2 the staged Cody-Waite reduction runs out of exact
/// bits and the multi-word path takes over.
const STAGED_REDUCTION_MAX: f64 = 1647099.0;

/// sin on the reduced interval. `y` is the reduction tail; `has_tail` is
/// false when the argument needed no reduction.
fn kernel_sin(x: f64, y: f64, has_tail: bool) -> f64 {
    let z = x * x;
    let v = z * x;
    let r = horner(&SIN_KERNEL[1..], z);
    if !has_tail {
        x + v * (SIN_KERNEL[0] + z * r)
    } else {
        x - ((z * (0.5 * y - v * r) - y) - v * SIN_KERNEL[0])
    }
}

/// cos on the reduced interval with reduction tail `y`.
fn kernel_cos(x: f64, y: f64) -> f64 {
    let z = x * x;
    let r = z * horner(&COS_KERNEL, z);
    let ax = x.abs();
    if ax < 0.3 {
        return 1.0 - (0.5 * z - (z * r - x * y));
    }
    // 1 - x^2/2 cancels here; pivot about qx ~ x^2/4 so both subtractions
    // stay exact to the last bit.
    let qx = if ax > 0.78125 {
        0.28125
    } else {
        let mut q = Binary64::from_value(ax);
        q.0 &= 0xFFFF_FFFF_0000_0000;
        q.set_biased_exponent(q.biased_exponent() - 2);
        q.value()
    };
    let hz = 0.5 * z - qx;
    let a = 1.0 - qx;
    a - (hz - (z * r - x * y))
}

/// x = n * pi/2 + (y0 + y1), |y0| <= pi/4. Called with |x| > pi/4, finite.
fn rem_pio2(x: f64) -> (i64, f64, f64) {
    let negative = x < 0.0;
    let t = x.abs();

    if t > STAGED_REDUCTION_MAX {
        let (n, y0, y1) = rem_pio2_huge(t);
        return if negative { (-n, -y0, -y1) } else { (n, y0, y1) };
    }

    let n = (t * INV_PIO2 + 0.5) as i64;
    let k = n as f64;

    let mut r = t - k * PIO2_1;
    let mut w = k * PIO2_1T;
    let mut y0 = r - w;

    // Leading-bit check: if y0 has lost more than 16 bits against t, the
    // first-stage tail was not exact enough and the next chunk is needed.
    let e0 = Binary64::from_value(t).biased_exponent() as i32;
    if e0 - Binary64::from_value(y0).biased_exponent() as i32 > 16 {
        let prev = r;
        w = k * PIO2_2;
        r = prev - w;
        w = k * PIO2_2T - ((prev - r) - w);
        y0 = r - w;

        if e0 - Binary64::from_value(y0).biased_exponent() as i32 > 49 {
            let prev = r;
            w = k * PIO2_3;
            r = prev - w;
            w = k * PIO2_3T - ((prev - r) - w);
            y0 = r - w;
        }
    }
    let y1 = (r - y0) - w;

    if negative {
        (-n, -y0, -y1)
    } else {
        (n, y0, y1)
    }
}

/// Payne-Hanek reduction for huge arguments. `t` is finite, positive and
/// above [`STAGED_REDUCTION_MAX`]; splits t into 24-bit pieces and hands
/// them to the chunked 2/pi product.
fn rem_pio2_huge(t: f64) -> (i64, f64, f64) {
    const TWO24: f64 = 16777216.0;

    // t = (tx[0] + tx[1] + tx[2]) * 2^e0, each piece a 24-bit integer.
    let e0 = Binary64::from_value(t).biased_exponent() as i32 - crate::ieee::f64::BIAS - 23;
    let mut z = scale_pow2(t, -e0);
    let mut tx = [0.0f64; 3];
    for piece in tx.iter_mut().take(2) {
        *piece = (z as i32) as f64;
        z = (z - *piece) * TWO24;
    }
    tx[2] = z;
    let mut nx = 3;
    while nx > 1 && tx[nx - 1] == 0.0 {
        nx -= 1;
    }
    reduce_chunked(&tx[..nx], e0)
}

/// Core of the Payne-Hanek scheme, after FreeBSD's k_rem_pio2 specialized
/// to 53-bit output. Multiplies the pieces of x by 24-bit chunks of 2/pi,
/// discards the integer part of the product mod 8, and rescales the
/// fraction by pi/2 into a hi/lo remainder pair.
fn reduce_chunked(x: &[f64], e0: i32) -> (i64, f64, f64) {
    // Chunks of 2/pi carried initially; two more than strictly needed so
    // the cancellation recomputation below has slack.
    const JK: usize = 4;
    const TWO24: f64 = 16777216.0;
    const TWOM24: f64 = 5.9604644775390625e-8;

    let jx = x.len() - 1;
    let jv = ((e0 - 3) / 24).max(0);
    let mut q0 = e0 - 24 * (jv + 1);
    let jv = jv as usize;

    let mut f = [0.0f64; 20];
    let mut q = [0.0f64; 20];
    let mut fq = [0.0f64; 20];
    let mut iq = [0i32; 20];

    // f[i] = chunk jv - jx + i of 2/pi, zero-padded below the table.
    let mut j = jv as i32 - jx as i32;
    for piece in f.iter_mut().take(jx + JK + 1) {
        *piece = if j < 0 {
            0.0
        } else {
            f64::from(TWO_BY_PI_CHUNKS[j as usize])
        };
        j += 1;
    }

    for i in 0..=JK {
        let mut acc = 0.0;
        for j in 0..=jx {
            acc += x[j] * f[jx + i - j];
        }
        q[i] = acc;
    }

    let mut jz = JK;
    let mut z;
    let mut n;
    let mut ih;
    'recompute: loop {
        // Distill q into integer 24-bit chunks, highest first.
        let mut i = 0usize;
        z = q[jz];
        for j in (1..=jz).rev() {
            let carry = ((TWOM24 * z) as i32) as f64;
            iq[i] = (z - TWO24 * carry) as i32;
            z = q[j - 1] + carry;
            i += 1;
        }

        // Integer part mod 8 and leading fraction bit.
        z = scale_pow2(z, q0);
        z -= 8.0 * (z * 0.125).floor();
        n = z as i32;
        z -= f64::from(n);
        ih = 0;
        if q0 > 0 {
            let i = iq[jz - 1] >> (24 - q0);
            n += i;
            iq[jz - 1] -= i << (24 - q0);
            ih = iq[jz - 1] >> (23 - q0);
        } else if q0 == 0 {
            ih = iq[jz - 1] >> 23;
        } else if z >= 0.5 {
            ih = 2;
        }

        // Fraction above one half: reduce toward the next quadrant.
        if ih > 0 {
            n += 1;
            let mut carry = 0i32;
            for chunk in iq.iter_mut().take(jz) {
                let j = *chunk;
                if carry == 0 {
                    if j != 0 {
                        carry = 1;
                        *chunk = 0x0100_0000 - j;
                    }
                } else {
                    *chunk = 0x00FF_FFFF - j;
                }
            }
            if q0 == 1 {
                iq[jz - 1] &= 0x007F_FFFF;
            } else if q0 == 2 {
                iq[jz - 1] &= 0x003F_FFFF;
            }
            if ih == 2 {
                z = 1.0 - z;
                if carry != 0 {
                    z -= scale_pow2(1.0, q0);
                }
            }
        }

        // Total cancellation of the computed bits: pull in more chunks
        // of 2/pi and redo the distillation.
        if z == 0.0 {
            let mut j = 0;
            for &chunk in iq[JK..jz].iter().rev() {
                j |= chunk;
            }
            if j == 0 {
                let mut k = 1;
                while iq[JK - k] == 0 {
                    k += 1;
                }
                for i in (jz + 1)..=(jz + k) {
                    f[jx + i] = f64::from(TWO_BY_PI_CHUNKS[jv + i]);
                    let mut acc = 0.0;
                    for j in 0..=jx {
                        acc += x[j] * f[jx + i - j];
                    }
                    q[i] = acc;
                }
                jz += k;
                continue 'recompute;
            }
        }
        break;
    }

    // Chop trailing zero chunks, or break an oversized z into two.
    if z == 0.0 {
        jz -= 1;
        q0 -= 24;
        while iq[jz] == 0 {
            jz -= 1;
            q0 -= 24;
        }
    } else {
        z = scale_pow2(z, -q0);
        if z >= TWO24 {
            let carry = ((TWOM24 * z) as i32) as f64;
            iq[jz] = (z - TWO24 * carry) as i32;
            jz += 1;
            q0 += 24;
            iq[jz] = carry as i32;
        } else {
            iq[jz] = z as i32;
        }
    }

    // Back to floating point, then scale the fraction by pi/2.
    let mut weight = scale_pow2(1.0, q0);
    for i in (0..=jz).rev() {
        q[i] = weight * f64::from(iq[i]);
        weight *= TWOM24;
    }

    for i in (0..=jz).rev() {
        let mut acc = 0.0;
        let mut k = 0;
        while k <= JK && k <= jz - i {
            acc += PIO2_CHUNKS[k] * q[i + k];
            k += 1;
        }
        fq[jz - i] = acc;
    }

    // Compress into a hi/lo remainder pair, low terms first.
    let mut hi = 0.0;
    for &term in fq[..=jz].iter().rev() {
        hi += term;
    }
    let mut lo = fq[0] - hi;
    for &term in &fq[1..=jz] {
        lo += term;
    }
    if ih != 0 {
        (i64::from(n & 7), -hi, -lo)
    } else {
        (i64::from(n & 7), hi, lo)
    }
}

/// Sine, double precision.
///
/// NaN and infinity both produce NaN; accuracy holds to ~1 ULP over the
/// whole finite range.
pub fn sin(x: f64) -> f64 {
    let w = Binary64::from_value(x);
    if w.is_nan_or_inf() {
        return f64::NAN;
    }

    if x.abs() <= PI_BY_FOUR {
        // sin(x) = x to double precision below 2^-27.
        if w.biased_exponent() < (crate::ieee::f64::BIAS - 27) as u32 {
            return x;
        }
        return kernel_sin(x, 0.0, false);
    }

    let (n, y0, y1) = rem_pio2(x);
    match n & 3 {
        0 => kernel_sin(y0, y1, true),
        1 => kernel_cos(y0, y1),
        2 => -kernel_sin(y0, y1, true),
        _ => -kernel_cos(y0, y1),
    }
}

/// Cosine, double precision.
pub fn cos(x: f64) -> f64 {
    let w = Binary64::from_value(x);
    if w.is_nan_or_inf() {
        return f64::NAN;
    }

    if x.abs() <= PI_BY_FOUR {
        if w.biased_exponent() < (crate::ieee::f64::BIAS - 27) as u32 {
            return 1.0;
        }
        return kernel_cos(x, 0.0);
    }

    let (n, y0, y1) = rem_pio2(x);
    match n & 3 {
        0 => kernel_cos(y0, y1),
        1 => -kernel_sin(y0, y1, true),
        2 => -kernel_cos(y0, y1),
        _ => kernel_sin(y0, y1, true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_values() {
        assert!(sin(f64::NAN).is_nan());
        assert!(sin(f64::INFINITY).is_nan());
        assert!(cos(f64::NEG_INFINITY).is_nan());
        assert_eq!(sin(0.0), 0.0);
        assert!(sin(-0.0).is_sign_negative());
        assert_eq!(cos(0.0), 1.0);
        assert_eq!(cos(-0.0), 1.0);
    }

    #[test]
    fn matches_reference_over_regimes() {
        for &x in &[
            1.0e-300,
            1.0e-10,
            0.1,
            0.7,
            PI_BY_FOUR,
            1.0,
            1.5707,
            2.0,
            3.14159,
            6.0,
            10.0,
            100.0,
            1.0e4,
            1.0e6,
        ] {
            for &s in &[1.0, -1.0] {
                let t = s * x;
                let (gs, gc) = (sin(t), cos(t));
                let (ws, wc) = (t.sin(), t.cos());
                assert!((gs - ws).abs() < 1.0e-15, "sin({t}): got {gs}, want {ws}");
                assert!((gc - wc).abs() < 1.0e-15, "cos({t}): got {gc}, want {wc}");
            }
        }
    }

    #[test]
    fn octant_boundaries() {
        // Arguments near multiples of pi/2, where the reduction cancels
        // hardest and the remainder tail matters.
        for k in 1..=8i32 {
            let x = k as f64 * 1.5707963267948966;
            let (gs, gc) = (sin(x), cos(x));
            assert!((gs - x.sin()).abs() < 1.0e-15, "sin near {k}*pi/2");
            assert!((gc - x.cos()).abs() < 1.0e-15, "cos near {k}*pi/2");
        }
    }

    #[test]
    fn huge_arguments_fully_reduced() {
        // Arguments far beyond the staged-reduction window; the quotient
        // n no longer fits the exact Cody-Waite products and the chunked
        // 2/pi path must take over. References from a 500-digit
        // evaluation.
        let cases = [
            (1.0e18, -0.99296932074040508, 0.11837199021871073),
            (1.0e22, -0.8522008497671888, 0.52321478539513895),
            (1.0e300, -0.8178819121159086, -0.57538611195754905),
            (1.7e308, -0.59525608486320767, 0.80353605608791801),
        ];
        for &(x, s_ref, c_ref) in &cases {
            let (s, c) = (sin(x), cos(x));
            assert!((s - s_ref).abs() < 1.0e-15, "sin({x}) = {s}");
            assert!((c - c_ref).abs() < 1.0e-15, "cos({x}) = {c}");
            assert!(s.abs() <= 1.0 && c.abs() <= 1.0);
            assert_eq!(sin(-x), -s);
            assert_eq!(cos(-x), c);
        }
    }

    #[test]
    fn pythagorean_identity() {
        for &x in &[0.5, 2.3, 17.0, 333.0] {
            let (s, c) = (sin(x), cos(x));
            assert!((s * s + c * c - 1.0).abs() < 1.0e-15);
        }
    }
}
