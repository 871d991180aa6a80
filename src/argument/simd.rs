//! Portable short and wide vector values.
//!
//! These mirror the layout of the 64-bit and 128-bit SIMD registers the formatter can print,
//! without depending on any target's intrinsic types. On x86 and x86_64 the intrinsic types
//! convert losslessly into them.

/// 64-bit short vector, two 32-bit lanes
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[repr(C, align(8))]
pub struct Vector2(pub [u32; 2]);

/// 128-bit vector of four single precision floats
#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[repr(C, align(16))]
pub struct Vector4(pub [f32; 4]);

/// 128-bit vector of four 32-bit integers
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[repr(C, align(16))]
pub struct Vector4Int(pub [u32; 4]);

/// 128-bit vector of two double precision floats
#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[repr(C, align(16))]
pub struct Vector4Dbl(pub [f64; 2]);

impl Vector2 {
    /// Build from the 64 bits of the register, low lane first
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_bits(bits: u64) -> Self {
        Vector2([bits as u32, (bits >> 32) as u32])
    }

    /// The 64 bits of the register, low lane first
    #[must_use]
    pub const fn to_bits(self) -> u64 {
        (self.0[0] as u64) | ((self.0[1] as u64) << 32)
    }
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
mod arch {
    #[cfg(target_arch = "x86")]
    use core::arch::x86::{__m128, __m128d, __m128i};
    #[cfg(target_arch = "x86_64")]
    use core::arch::x86_64::{__m128, __m128d, __m128i};

    use super::{Vector4, Vector4Dbl, Vector4Int};

    macro_rules! intrinsic_vector {
        ($($intrinsic:ty => $vector:ident($lanes:ty);)*) => {
            $(
                const _: () = assert!(
                    std::mem::size_of::<$intrinsic>() == std::mem::size_of::<$vector>()
                        && std::mem::align_of::<$intrinsic>() == std::mem::align_of::<$vector>()
                );

                impl From<$intrinsic> for $vector {
                    fn from(value: $intrinsic) -> Self {
                        // SAFETY: both are 16 plain bytes and every bit pattern is valid for the lanes
                        $vector(unsafe { std::mem::transmute::<$intrinsic, $lanes>(value) })
                    }
                }

                impl $vector {
                    /// Reinterpret a borrowed intrinsic register as this vector type
                    #[must_use]
                    pub fn from_intrinsic(value: &$intrinsic) -> &Self {
                        // SAFETY: size and alignment are asserted equal above, and the vector is a
                        // plain lane array with no invalid bit patterns
                        unsafe { &*(value as *const $intrinsic).cast::<$vector>() }
                    }
                }
            )*
        };
    }

    intrinsic_vector! {
        __m128 => Vector4([f32; 4]);
        __m128i => Vector4Int([u32; 4]);
        __m128d => Vector4Dbl([f64; 2]);
    }
}
