//! IEEE-754 binary32 bit layout.
//!
//! Format: 1 sign + 8 exponent + 23 mantissa bits, bias 127. Mirrors
//! [`Binary64`](super::Binary64) with single-precision field widths.

use bytemuck::{Pod, Zeroable};

/// Number of mantissa (fraction) bits.
pub const MANTISSA_BITS: u32 = 23;

/// Exponent bias.
pub const BIAS: i32 = 127;

/// Maximal biased exponent field, encoding NaN and infinity.
pub const NANINF_EXP: u32 = 0xFF;

/// Mask for the mantissa field.
pub const MANTISSA_MASK: u32 = (1u32 << MANTISSA_BITS) - 1;

/// 2^23, used to normalize subnormal inputs before field extraction.
pub const NORMALIZE: f32 = 8.388608e6;

/// A single-precision value viewed as its IEEE-754 bit fields.
#[derive(Copy, Clone, Default, PartialEq, Eq, Pod, Zeroable)]
#[repr(transparent)]
pub struct Binary32(pub u32);

impl Binary32 {
    /// View a value as its bit pattern.
    #[inline]
    pub fn from_value(x: f32) -> Self {
        Binary32(x.to_bits())
    }

    /// Reinterpret the bit pattern as a value.
    #[inline]
    pub fn value(self) -> f32 {
        f32::from_bits(self.0)
    }

    /// Sign bit: true for negative.
    #[inline]
    pub fn sign(self) -> bool {
        (self.0 >> 31) != 0
    }

    /// Biased exponent field, 0..=0xFF.
    #[inline]
    pub fn biased_exponent(self) -> u32 {
        (self.0 >> MANTISSA_BITS) & 0xFF
    }

    /// Unbiased exponent of a normal number.
    #[inline]
    pub fn exponent(self) -> i32 {
        self.biased_exponent() as i32 - BIAS
    }

    /// Mantissa field (23 bits, implicit leading bit not included).
    #[inline]
    pub fn mantissa(self) -> u32 {
        self.0 & MANTISSA_MASK
    }

    /// Write the sign bit.
    #[inline]
    pub fn set_sign(&mut self, negative: bool) {
        self.0 = (self.0 & !(1u32 << 31)) | ((negative as u32) << 31);
    }

    /// Write the biased exponent field.
    #[inline]
    pub fn set_biased_exponent(&mut self, expo: u32) {
        debug_assert!(expo <= NANINF_EXP);
        self.0 = (self.0 & !(0xFFu32 << MANTISSA_BITS)) | (expo << MANTISSA_BITS);
    }

    /// Write the mantissa field.
    #[inline]
    pub fn set_mantissa(&mut self, man: u32) {
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
        self.0 &= !(1u32 << 31);
    }
}

impl From<f32> for Binary32 {
    #[inline]
    fn from(x: f32) -> Self {
        Binary32::from_value(x)
    }
}

impl std::fmt::Debug for Binary32 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binary32")
            .field("sign", &(self.sign() as u8))
            .field("expo", &self.biased_exponent())
            .field("man", &format_args!("{:#08x}", self.mantissa()))
            .field("value", &self.value())
            .finish()
    }
}

/// Construct exactly 2^e at single precision by writing the exponent field.
///
/// Subnormal range handled via a single mantissa bit; returns 0.0 below the
/// subnormal floor (e < -149) and +infinity for e > 127.
#[inline]
pub fn pow2f(e: i32) -> f32 {
    if e > BIAS {
        return f32::INFINITY;
    }
    if e < -149 {
        return 0.0;
    }
    if e >= -126 {
        Binary32(((e + BIAS) as u32) << MANTISSA_BITS).value()
    } else {
        Binary32(1u32 << (e + 149)).value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_fields() {
        for &x in &[1.0f32, -2.5, 0.1, 3.0e37, -7.0e-40] {
            let w = Binary32::from_value(x);
            let mut rebuilt = Binary32::default();
            rebuilt.set_sign(w.sign());
            rebuilt.set_biased_exponent(w.biased_exponent());
            rebuilt.set_mantissa(w.mantissa());
            assert_eq!(rebuilt.value().to_bits(), x.to_bits());
        }
    }

    #[test]
    fn pow2f_exact() {
        assert_eq!(pow2f(0), 1.0);
        assert_eq!(pow2f(10), 1024.0);
        assert_eq!(pow2f(-126), f32::MIN_POSITIVE);
        assert_eq!(pow2f(-149), f32::from_bits(1));
        assert_eq!(pow2f(-150), 0.0);
        assert_eq!(pow2f(128), f32::INFINITY);
    }
}
