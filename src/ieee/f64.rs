//! IEEE-754 binary64 bit layout.
//!
//! Format: 1 sign + 11 exponent + 52 mantissa bits, bias 1023. The word type
//! below gives direct read/write access to the three fields; reinterpreting
//! unchanged fields reproduces the original bit pattern exactly.

use bytemuck::{Pod, Zeroable};

/// Number of mantissa (fraction) bits.
pub const MANTISSA_BITS: u32 = 52;

/// Exponent bias.
pub const BIAS: i32 = 1023;

/// Maximal biased exponent field, encoding NaN and infinity.
pub const NANINF_EXP: u32 = 0x7FF;

/// Mask for the mantissa field.
pub const MANTISSA_MASK: u64 = (1u64 << MANTISSA_BITS) - 1;

/// 2^52, used to normalize subnormal inputs before field extraction.
pub const NORMALIZE: f64 = 4.503599627370496e15;

/// A double-precision value viewed as its IEEE-754 bit fields.
///
/// Constructed on demand from a scalar, mutated only within a single
/// function call (e.g. forcing the exponent field to the bias to isolate
/// the mantissa in [1, 2)), never persisted.
#[derive(Copy, Clone, Default, PartialEq, Eq, Pod, Zeroable)]
#[repr(transparent)]
pub struct Binary64(pub u64);

impl Binary64 {
    /// View a value as its bit pattern.
    #[inline]
    pub fn from_value(x: f64) -> Self {
        Binary64(x.to_bits())
    }

    /// Reinterpret the bit pattern as a value.
    #[inline]
    pub fn value(self) -> f64 {
        f64::from_bits(self.0)
    }

    /// Sign bit: true for negative (including -0.0 and negative NaN).
    #[inline]
    pub fn sign(self) -> bool {
        (self.0 >> 63) != 0
    }

    /// Biased exponent field, 0..=0x7FF.
    #[inline]
    pub fn biased_exponent(self) -> u32 {
        ((self.0 >> MANTISSA_BITS) & 0x7FF) as u32
    }

    /// Unbiased exponent of a normal number.
    #[inline]
    pub fn exponent(self) -> i32 {
        self.biased_exponent() as i32 - BIAS
    }

    /// Mantissa field (52 bits, implicit leading bit not included).
    #[inline]
    pub fn mantissa(self) -> u64 {
        self.0 & MANTISSA_MASK
    }

    /// Write the sign bit.
    #[inline]
    pub fn set_sign(&mut self, negative: bool) {
        self.0 = (self.0 & !(1u64 << 63)) | ((negative as u64) << 63);
    }

    /// Write the biased exponent field.
    #[inline]
    pub fn set_biased_exponent(&mut self, expo: u32) {
        debug_assert!(expo <= NANINF_EXP);
        self.0 = (self.0 & !((0x7FFu64) << MANTISSA_BITS)) | ((expo as u64) << MANTISSA_BITS);
    }

    /// Write the mantissa field.
    #[inline]
    pub fn set_mantissa(&mut self, man: u64) {
        debug_assert!(man <= MANTISSA_MASK);
        self.0 = (self.0 & !MANTISSA_MASK) | man;
    }

    /// True if the word encodes NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.biased_exponent() == NANINF_EXP && self.mantissa() != 0
    }

    /// True if the word encodes +/- infinity.
    #[inline]
    pub fn is_inf(self) -> bool {
        self.biased_exponent() == NANINF_EXP && self.mantissa() == 0
    }

    /// True for NaN or infinity (maximal exponent field).
    #[inline]
    pub fn is_nan_or_inf(self) -> bool {
        self.biased_exponent() == NANINF_EXP
    }

    /// Clear the sign bit in place; the word then holds |x|.
    #[inline]
    pub fn make_abs(&mut self) {
        self.0 &= !(1u64 << 63);
    }
}

impl From<f64> for Binary64 {
    #[inline]
    fn from(x: f64) -> Self {
        Binary64::from_value(x)
    }
}

impl std::fmt::Debug for Binary64 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binary64")
            .field("sign", &(self.sign() as u8))
            .field("expo", &self.biased_exponent())
            .field("man", &format_args!("{:#015x}", self.mantissa()))
            .field("value", &self.value())
            .finish()
    }
}

/// Construct exactly 2^e at double precision by writing the exponent field.
///
/// The subnormal range (e < -1022) is handled by setting a single mantissa
/// bit instead, since the exponent field alone cannot represent it. Returns
/// 0.0 below the subnormal floor (e < -1074) and +infinity above the largest
/// finite exponent (e > 1023).
#[inline]
pub fn pow2(e: i32) -> f64 {
    if e > BIAS {
        return f64::INFINITY;
    }
    if e < -1074 {
        return 0.0;
    }
    if e >= -1022 {
        Binary64(((e + BIAS) as u64) << MANTISSA_BITS).value()
    } else {
        // 2^e = subnormal with mantissa bit (e + 1074) set.
        Binary64(1u64 << (e + 1074)).value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_fields() {
        for &x in &[1.0, -2.5, 0.1, 1.0e300, -3.0e-200, 1.5f64.powi(31)] {
            let w = Binary64::from_value(x);
            let mut rebuilt = Binary64::default();
            rebuilt.set_sign(w.sign());
            rebuilt.set_biased_exponent(w.biased_exponent());
            rebuilt.set_mantissa(w.mantissa());
            assert_eq!(rebuilt.0, w.0, "round trip failed for {x}");
            assert_eq!(rebuilt.value().to_bits(), x.to_bits());
        }
    }

    #[test]
    fn mantissa_isolation() {
        // Forcing the exponent to the bias maps x to 1.m in [1, 2).
        let mut w = Binary64::from_value(1536.0);
        w.set_biased_exponent(BIAS as u32);
        assert_eq!(w.value(), 1.5);
    }

    #[test]
    fn pow2_exact() {
        assert_eq!(pow2(0), 1.0);
        assert_eq!(pow2(10), 1024.0);
        assert_eq!(pow2(-1), 0.5);
        assert_eq!(pow2(1023), f64::MAX / (2.0 - f64::EPSILON));
        assert_eq!(pow2(-1022), f64::MIN_POSITIVE);
        assert_eq!(pow2(-1074), f64::from_bits(1));
        assert_eq!(pow2(-1075), 0.0);
        assert_eq!(pow2(1024), f64::INFINITY);
    }
}
