//! IEEE 754-2008 binary16 ("half") values.
//!
//! Rust has no native half precision type, so half floats travel as their raw bit pattern and
//! must be captured with an explicit override ([`crate::TypedArgument::from_half_bits`] or the
//! [`Half`] newtype). All inspection is done on the bits directly.

use std::fmt;

const SIGN_MASK: u16 = 0x8000;
const MAGNITUDE_MASK: u16 = 0x7FFF;
const EXPONENT_MASK: u32 = 0x1F;
const MANTISSA_MASK: u32 = 0x3FF;

/// Smallest binary16 subnormal, 2^-24
const SUBNORMAL_SCALE: f32 = 1.0 / 16_777_216.0;

/// A binary16 floating point number kept as its raw bits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Half(u16);

impl Half {
    /// Positive zero
    pub const ZERO: Half = Half(0x0000);
    /// Negative zero
    pub const NEG_ZERO: Half = Half(0x8000);
    /// 1.0
    pub const ONE: Half = Half(0x3C00);

    /// Wrap a raw binary16 bit pattern
    #[must_use]
    pub const fn from_bits(bits: u16) -> Self {
        Half(bits)
    }

    /// The raw binary16 bit pattern
    #[must_use]
    pub const fn to_bits(self) -> u16 {
        self.0
    }

    /// Sign bit (bit 15) is set, which includes negative zero and negative NaNs
    #[must_use]
    pub const fn is_sign_negative(self) -> bool {
        self.0 & SIGN_MASK != 0
    }

    /// Positive or negative zero
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 & MAGNITUDE_MASK == 0
    }

    /// The same value with the sign bit cleared
    #[must_use]
    pub const fn abs(self) -> Self {
        Half(self.0 & MAGNITUDE_MASK)
    }

    /// Unpack into a single precision float. The conversion is exact.
    #[must_use]
    pub fn to_f32(self) -> f32 {
        let bits = u32::from(self.0);
        let sign = (bits & u32::from(SIGN_MASK)) << 16;
        let exponent = (bits >> 10) & EXPONENT_MASK;
        let mantissa = bits & MANTISSA_MASK;

        match exponent {
            0 => {
                // Zero or subnormal, mantissa * 2^-24 fits f32 exactly
                #[allow(clippy::cast_precision_loss)]
                let magnitude = mantissa as f32 * SUBNORMAL_SCALE;
                if sign == 0 {
                    magnitude
                } else {
                    -magnitude
                }
            }
            EXPONENT_MASK => f32::from_bits(sign | 0x7F80_0000 | (mantissa << 13)),
            // Rebias 15 -> 127
            _ => f32::from_bits(sign | ((exponent + 112) << 23) | (mantissa << 13)),
        }
    }
}

impl From<Half> for f32 {
    fn from(value: Half) -> Self {
        value.to_f32()
    }
}

impl From<Half> for f64 {
    fn from(value: Half) -> Self {
        f64::from(value.to_f32())
    }
}

impl fmt::Debug for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Half({:#06x} = {})", self.0, self.to_f32())
    }
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_f32(), f)
    }
}
